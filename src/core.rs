use std::{ffi::OsStr, mem};

use crate::{
    table::{LongMatch, OptTable},
    OptError, OptValue,
};

type OResult<T> = Result<T, OptError>;

/// What the driver is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Looking at options
    Scanning,
    /// The previous token was an option that takes the next token as its value
    AwaitingValue(String),
}
use State::*;

impl State {
    /// Replaces `*self` with `Scanning` and returns the original value.
    fn take(&mut self) -> Self {
        mem::replace(self, Scanning)
    }
}

/// How to continue after a token has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    /// The token was `--`. Everything after it is left over.
    EndOfOptions,
    /// The token is the first positional argument. It and everything after
    /// it are left over.
    Positional,
}

/// The state machine that splits a command line into options and leftovers.
#[derive(Debug, Clone)]
pub struct Core<'t> {
    shorts: &'t OptTable,
    longs: &'t OptTable,
    state: State,
    opts: Vec<OptValue>,
}

impl<'t> Core<'t> {
    pub fn new(shorts: &'t OptTable, longs: &'t OptTable) -> Self {
        Core {
            shorts,
            longs,
            state: Scanning,
            opts: vec![],
        }
    }

    /// Walk `args` from left to right. Stops at the first positional argument
    /// or after `--`, and returns the rest of `args` untouched.
    pub fn run<'a, S: AsRef<OsStr>>(
        mut self,
        args: &'a [S],
    ) -> OResult<(&'a [S], Vec<OptValue>)> {
        for (i, arg) in args.iter().enumerate() {
            match self.step(arg.as_ref())? {
                Step::Next => {}
                Step::EndOfOptions => return self.finish(&args[i + 1..]),
                Step::Positional => return self.finish(&args[i..]),
            }
        }
        self.finish(&args[args.len()..])
    }

    fn finish<'a, S>(self, leftovers: &'a [S]) -> OResult<(&'a [S], Vec<OptValue>)> {
        match self.state {
            AwaitingValue(opt) => Err(OptError::missing_value(&opt, None)),
            Scanning => Ok((leftovers, self.opts)),
        }
    }

    fn step(&mut self, arg: &OsStr) -> OResult<Step> {
        let dashed = arg.as_encoded_bytes().first() == Some(&b'-');
        let Some(tok) = arg.to_str() else {
            // Can be a word, but never an option or a value
            return match &self.state {
                AwaitingValue(opt) if dashed => {
                    Err(OptError::missing_value(opt, Some(&*arg.to_string_lossy())))
                }
                Scanning if !dashed => Ok(Step::Positional),
                _ => Err(OptError::invalid_unicode(arg)),
            };
        };

        if tok == "--" {
            return match &self.state {
                AwaitingValue(opt) => Err(OptError::missing_value(opt, Some(tok))),
                Scanning => Ok(Step::EndOfOptions),
            };
        }

        if let AwaitingValue(opt) = self.state.take() {
            if dashed {
                return Err(OptError::missing_value(&opt, Some(tok)));
            }
            self.opts.push(OptValue::new(opt, tok));
            return Ok(Step::Next);
        }

        if let Some(cluster) = tok.strip_prefix('-') {
            if !cluster.is_empty() && !cluster.starts_with('-') {
                self.short_cluster(cluster)?;
                return Ok(Step::Next);
            }
        }

        if tok.starts_with("--") {
            match self.longs.match_long(tok) {
                LongMatch::Matched {
                    opt,
                    value: Some(value),
                    ..
                } => self.opts.push(OptValue::new(opt, value)),
                LongMatch::Matched {
                    opt,
                    requires_value: true,
                    ..
                } => self.state = AwaitingValue(opt.to_owned()),
                LongMatch::Matched { opt, .. } => self.opts.push(OptValue::flag(opt)),
                LongMatch::Invalid(e) => return Err(e),
                LongMatch::NotFound => return Err(OptError::UnknownOption(tok.to_owned())),
            }
            return Ok(Step::Next);
        }

        if dashed {
            // A lone "-"
            Err(OptError::UnknownOption(tok.to_owned()))
        } else {
            Ok(Step::Positional)
        }
    }

    /// Handle `-hxv`. Only the last letter may take a value, and it is
    /// always taken from the next token.
    fn short_cluster(&mut self, cluster: &str) -> OResult<()> {
        let shorts = self.shorts;
        let mut chars = cluster.chars().peekable();
        while let Some(c) = chars.next() {
            let flag = format!("-{c}");
            let Some((opt, requires_value)) = shorts.match_short(&flag) else {
                return Err(OptError::UnknownOption(flag));
            };
            let last = chars.peek().is_none();
            match (requires_value, last) {
                (false, _) => self.opts.push(OptValue::flag(opt)),
                (true, true) => self.state = AwaitingValue(opt.to_owned()),
                (true, false) => return Err(OptError::MissingInlineValue(flag)),
            }
        }
        Ok(())
    }
}
