use optsplit::{getopt, main_support, OptError};
use std::{env, error::Error, ffi::OsString, fmt, path::PathBuf, process::ExitCode};

const USAGE: &str = r###"
Usage: demo OPTIONS [MESSAGE] OUTFILE
Arguments:
    MESSAGE             Message to write, only if --file not given
    OUTFILE             File to write message to
Options:
    -v --verbose        Be chatty
    -f --file=INFILE    File to read message from, only if MESSAGE not given
    -h --help           Show this help
"###;

fn main() -> ExitCode {
    let ret = main_program();
    main_support::report_errors(USAGE, ret)
}

#[derive(Debug)]
enum Source {
    Str(String),
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Str(s) => write!(f, "message {s:?}"),
            Source::File(p) => write!(f, "file {}", p.display()),
        }
    }
}

fn main_program() -> Result<(), Box<dyn Error>> {
    let mut verbose = false;
    let mut source: Option<Source> = None;

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let (mut rest, opts) = getopt(&args, "vf:h", &["verbose", "file=", "help"])?;

    for opt in &opts {
        match opt.as_pair() {
            ("-h" | "--help", _) => {
                // to stdout
                println!("{}", USAGE.trim());
                return Err(OptError::ExitSuccessfully)?;
            }
            ("-v" | "--verbose", _) => verbose = true,
            ("-f" | "--file", f) => source = Some(Source::File(f.into())),
            (other, _) => return Err(OptError::message(format!("unhandled flag {other}")))?,
        }
    }

    if source.is_none() {
        let Some((msg, tail)) = rest.split_first() else {
            return Err(OptError::message("missing argument: MESSAGE"))?;
        };
        let msg = msg
            .to_str()
            .ok_or_else(|| OptError::InvalidUnicode(msg.clone()))?;
        source = Some(Source::Str(msg.to_owned()));
        rest = tail;
    }
    let dest: PathBuf = match rest {
        [dest] => dest.into(),
        [] => return Err(OptError::message("missing argument: OUTFILE"))?,
        [_, extra, ..] => {
            return Err(OptError::message(format!(
                "unexpected argument: `{}`",
                extra.to_string_lossy()
            )))?
        }
    };

    let source = source.ok_or_else(|| OptError::message("no message source"))?;
    println!("Hello! verbose={verbose} source={source} dest={}", dest.display());
    Ok(())
}
