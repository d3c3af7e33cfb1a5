use std::fmt;

#[cfg(doc)]
use crate::getopt;

/// One option found by [`getopt`], together with its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptValue {
    opt: String,
    value: String,
}

impl OptValue {
    pub(crate) fn new(opt: impl Into<String>, value: impl Into<String>) -> Self {
        OptValue {
            opt: opt.into(),
            value: value.into(),
        }
    }

    pub(crate) fn flag(opt: impl Into<String>) -> Self {
        OptValue::new(opt, "")
    }

    /// The option as it was defined, including the leading dashes:
    /// `-x` or `--name`.
    pub fn opt(&self) -> &str {
        &self.opt
    }

    /// The value given to the option, or `""` if it takes none.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Convenience for `(opt.opt(), opt.value())`, handy in `match` arms.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.opt, &self.value)
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            self.opt.fmt(f)
        } else {
            write!(f, "{}={}", self.opt, self.value)
        }
    }
}
