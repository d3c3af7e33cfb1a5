use std::{error, ffi::OsString};
use std::{ffi::OsStr, fmt};

#[cfg(doc)]
use crate::getopt;

/**
Error type for [`getopt`] and the spec builders.

Every variant stops parsing immediately. Nothing that was parsed before the
error is returned.

[`getopt`] itself only ever returns the parsing variants. Those are
`DuplicateOption`, `UnknownOption`, `MissingValue`, `MissingInlineValue`,
`UnexpectedValue` and `InvalidUnicode`. [`OptError::ExitSuccessfully`] and
[`OptError::ErrorMessage`] are never produced by the parser. They are for
your own `main()`, together with the helpers in
[`main_support`][`crate::main_support`].
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptError {
    /// Never returned by the parser.
    ///
    /// Not a real error, useful when handling `--help`. Returned when the
    /// application has already printed usage info and should exit successfully.
    /// [`main_support::report_errors`][`crate::main_support::report_errors`]
    /// turns it into `ExitCode::SUCCESS`.
    ExitSuccessfully,

    /// The same short letter or long name occurs twice in the option spec.
    /// Holds the canonical key, for example `-h` or `--help`.
    DuplicateOption(String),

    /// A token starting with a dash matched no known option. For a short
    /// cluster this is the offending letter as `-c`, otherwise the whole token.
    UnknownOption(String),

    /// An option that requires a value was followed by `--`, by another
    /// dash-prefixed token, or by nothing at all (`found` is `None`).
    MissingValue { opt: String, found: Option<String> },

    /// A letter in the middle of a short cluster such as `-xh` requires a
    /// value. Only the last letter of a cluster may take one.
    MissingInlineValue(String),

    /// A long option that takes no value was given one, as in `--help=wat`.
    UnexpectedValue { opt: String, value: String },

    /// An option token or option value could not be decoded as valid Unicode.
    InvalidUnicode(OsString),

    /// Never returned by the parser. For use by user code, usually through
    /// [`OptError::message`].
    ErrorMessage(String),
}

impl fmt::Display for OptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use OptError::*;
        match self {
            DuplicateOption(opt) => write!(f, "option `{opt}` is defined more than once"),
            UnknownOption(opt) => write!(f, "unknown option `{opt}`"),
            MissingValue { opt, found: None } => {
                write!(f, "expected a value for `{opt}`, got end of arguments")
            }
            MissingValue {
                opt,
                found: Some(tok),
            } => write!(f, "expected a value for `{opt}`, got `{tok}`"),
            MissingInlineValue(opt) => {
                write!(f, "option `{opt}` requires a value and must come last")
            }
            UnexpectedValue { opt, value } => {
                write!(f, "option `{opt}` does not take a value, got `{value}`")
            }
            InvalidUnicode(a) => {
                write!(f, "invalid unicode in argument `{}`", a.to_string_lossy())
            }
            ErrorMessage(msg) => write!(f, "{}", msg),
            ExitSuccessfully => {
                write!(f, "no error")
            }
        }
    }
}

impl error::Error for OptError {}

impl OptError {
    /// Create an [`OptError::ErrorMessage`].
    pub fn message(msg: impl fmt::Display) -> Self {
        OptError::ErrorMessage(msg.to_string())
    }

    /// Create an [`OptError::ExitSuccessfully`].
    pub fn exit_successfully() -> Self {
        OptError::ExitSuccessfully
    }

    pub(crate) fn missing_value(opt: &str, found: Option<&str>) -> Self {
        OptError::MissingValue {
            opt: opt.to_owned(),
            found: found.map(str::to_owned),
        }
    }

    pub(crate) fn invalid_unicode(arg: impl AsRef<OsStr>) -> Self {
        OptError::InvalidUnicode(arg.as_ref().to_owned())
    }

    /// The option key the error is about, if any.
    pub fn opt(&self) -> Option<&str> {
        use OptError::*;
        match self {
            DuplicateOption(o) | UnknownOption(o) | MissingInlineValue(o) => Some(o),
            MissingValue { opt, .. } | UnexpectedValue { opt, .. } => Some(opt),
            InvalidUnicode(_) | ErrorMessage(_) | ExitSuccessfully => None,
        }
    }
}
