use std::{env, process::ExitCode};

use anyhow::{anyhow, Context};
use optsplit::{getopt, main_support::report_errors};

const USAGE: &str = r###"
Usage: anyhow [-q] <ARGS...>
"###;

fn main() -> ExitCode {
    // report_errors also works for anyhow::Error
    let ret: Result<(), anyhow::Error> = my_main();
    report_errors(USAGE, ret)
}

fn my_main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (rest, opts) = getopt(&args, "q", &["quiet"]).context("outer error")?;

    if opts.is_empty() && rest.is_empty() {
        Err(anyhow!("inner error").context("outer error"))
    } else {
        println!("options: {opts:?}, arguments: {rest:?}");
        Ok(())
    }
}
