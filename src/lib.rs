/*!

Small getopt style command line parser

The `optsplit` crate takes the classic approach of C's `getopt_long` and
Python's `getopt` module: you describe the options you accept with a short
spec string such as `"hvx:"` and a list of long names such as
`["help", "file="]`, and [`getopt`] splits the command line into the
options it found, in order, and the arguments left over after them.
What to do with the options is up to you, usually a `match` on
[`OptValue::as_pair`].

There is no help text generation, no type conversion of values, no
environment variables and no rules about how often an option may occur.

# Overview

Short options start with a single dash and are a single character. They can
be bundled, so `-hv` is the same as `-h -v`. In the short spec, a letter
followed by a colon requires a value, which is always taken from the next
argument. Only the last letter of a bundle may require one, so with
`"hx:"` the bundle `-hx FILE` is fine but `-xh FILE` is an
[`OptError::MissingInlineValue`].

Long options start with two dashes. In the long spec a name ending in `=`
requires a value, given either as `--file=data.csv` or as `--file data.csv`.
A long option that takes no value must not be given one: `--help=yes` is an
[`OptError::UnexpectedValue`]. An empty attached value counts as no value,
so `--help=` is simply `--help`.

Parsing stops at the first argument that does not start with a dash, or
right after `--`. Everything from there on is returned as a sub-slice of the
arguments you passed in.

```
# use optsplit::{getopt, OptError};
# fn main() -> Result<(), OptError> {
let args = ["-hy", "its a yacc!", "--example=charles", "fizzy", "-v"];
let (rest, opts) = getopt(&args, "hvx:y:", &["help", "example="])?;

let mut yacc = None;
let mut help = false;
for opt in &opts {
    match opt.as_pair() {
        ("-h" | "--help", _) => help = true,
        ("-y", v) => yacc = Some(v.to_owned()),
        ("--example", v) => assert_eq!(v, "charles"),
        _ => unreachable!(),
    }
}
assert!(help);
assert_eq!(yacc.as_deref(), Some("its a yacc!"));
// -v came after the first word so it is not an option
assert_eq!(rest, ["fizzy", "-v"]);
#    Ok(())
# }
```

These are the ways a value can be given and what happens if it isn't:

| command line (`"x:"`, `["file="]`) | result                                      |
| ---                                | ---                                         |
| `-x` &nbsp; `data.csv`             | `("-x", "data.csv")`                        |
| `--file=data.csv`                  | `("--file", "data.csv")`                    |
| `--file` &nbsp; `data.csv`         | `("--file", "data.csv")`                    |
| `--file=` &nbsp; `data.csv`        | `("--file", "data.csv")`                    |
| `-x` &nbsp; `-v`                   | `OptError::MissingValue` for `-x`           |
| `--file` &nbsp; `--`               | `OptError::MissingValue` for `--file`       |
| `-x`                               | `OptError::MissingValue` for `-x`           |

Note that a value can never start with a dash. Use the attached form
`--file=-` if you need that.

**A note about encodings:** both Unix and Windows allow command line
arguments that are not valid Unicode. [`getopt`] accepts anything that
implements `AsRef<OsStr>`, so you can pass it `std::env::args_os()` directly.
Leftover arguments are never decoded and come back exactly as they went in.
Options and their values do have to be valid Unicode, otherwise you get an
[`OptError::InvalidUnicode`].

# Errors

Every problem is reported as an [`OptError`] and parsing stops at once,
nothing that was found before the error is returned. The parser prints
nothing and has no exit codes of its own.

Separately from the parser, the optional helpers in [`main_support`] are
meant for a program's `main()`. They turn these errors into a message on
stderr, the usage text and an exit code. They also understand the two
variants that only user code creates: [`OptError::ExitSuccessfully`] for
`--help`, and [`OptError::ErrorMessage`].
*/
use std::ffi::OsStr;

pub mod main_support;

mod core;
mod opterror;
mod optvalue;
mod table;

pub use opterror::OptError;
pub use optvalue::OptValue;
pub use table::{build_long_spec, build_short_spec, LongMatch, OptTable};

/// Split `args` into options and leftover arguments.
///
/// `shortopts` is a string of option letters, each optionally followed by a
/// `:` if it requires a value. `longopts` are the long option names without
/// dashes, with a trailing `=` if they require a value.
///
/// Returns the arguments after the options, as a sub-slice of `args`, and the
/// options found, in the order they appeared. The options include their
/// leading dashes.
pub fn getopt<'a, S, L>(
    args: &'a [S],
    shortopts: &str,
    longopts: &[L],
) -> Result<(&'a [S], Vec<OptValue>), OptError>
where
    S: AsRef<OsStr>,
    L: AsRef<str>,
{
    let shorts = OptTable::from_short_spec(shortopts)?;
    let longs = OptTable::from_long_spec(longopts)?;
    crate::core::Core::new(&shorts, &longs).run(args)
}
