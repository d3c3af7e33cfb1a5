//! Helpers for `main()`. They look for an [`OptError`] in the error returned
//! by the real main function and report it, together with the usage text.

use std::{error::Error, process::ExitCode};

use crate::OptError;

/// Walk the [`source()`][`Error::source`] chain of `err` and return the first
/// [`OptError`] found.
pub fn find_opterror(mut err: &(dyn Error + 'static)) -> Option<OptError> {
    loop {
        match err.downcast_ref::<OptError>() {
            Some(a) => return Some(a.clone()),
            None => match err.source() {
                None => return None,
                Some(e) => err = e,
            },
        }
    }
}

/// How [`report_errors`] deals with an error.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Report {
    /// [`OptError::ExitSuccessfully`], nothing to print
    Success,
    /// Print the message only
    Message(OptError),
    /// Print the message followed by the usage text
    WithUsage(OptError),
    /// Not ours, print the whole source chain
    Chain,
}

fn classify(err: &(dyn Error + 'static)) -> Report {
    match find_opterror(err) {
        Some(OptError::ExitSuccessfully) => Report::Success,
        Some(e @ OptError::InvalidUnicode(_)) => Report::Message(e),
        Some(e) => Report::WithUsage(e),
        None => Report::Chain,
    }
}

/// Turn the result of the real main function into an [`ExitCode`].
///
/// [`OptError::ExitSuccessfully`] counts as success. Other option errors are
/// printed to stderr followed by `usage`, except for
/// [`OptError::InvalidUnicode`] where the usage would not help. Any other
/// error is printed with its whole source chain.
///
/// Works with `Box<dyn Error>` as well as `anyhow::Error`.
pub fn report_errors<E>(usage: &str, result: Result<(), E>) -> ExitCode
where
    E: AsRef<dyn Error + 'static>,
{
    let err = match result {
        Ok(_) => return ExitCode::SUCCESS,
        Err(e) => e,
    };
    let err = err.as_ref();
    match classify(err) {
        Report::Success => return ExitCode::SUCCESS,
        Report::Message(opterr) => eprintln!("Error: {}", opterr),
        Report::WithUsage(opterr) => {
            eprintln!("Error: {}", opterr);
            eprintln!("{}", usage.trim());
        }
        Report::Chain => {
            eprintln!("Error: {}", err);
            let mut s = err.source();
            while let Some(e) = s {
                eprintln!("caused by:");
                eprintln!("    {}", e);
                s = e.source();
            }
        }
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, fmt, io};

    use super::*;

    #[derive(Debug)]
    struct Wrapper(OptError);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("while parsing the command line")
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_find_opterror() {
        let direct = OptError::UnknownOption("-q".into());
        assert_eq!(find_opterror(&direct), Some(direct.clone()));

        let wrapped = Wrapper(OptError::exit_successfully());
        assert_eq!(find_opterror(&wrapped), Some(OptError::ExitSuccessfully));

        let io = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(find_opterror(&io), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&OptError::ExitSuccessfully), Report::Success);

        let bad = OptError::InvalidUnicode(OsString::from("x"));
        assert_eq!(classify(&bad), Report::Message(bad.clone()));

        let missing = OptError::MissingInlineValue("-x".into());
        assert_eq!(
            classify(&Wrapper(missing.clone())),
            Report::WithUsage(missing)
        );

        let io = io::Error::new(io::ErrorKind::Other, "disk on fire");
        assert_eq!(classify(&io), Report::Chain);
    }
}
