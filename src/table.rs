use std::collections::HashMap;

use crate::OptError;

type OResult<T> = Result<T, OptError>;

/// Lookup table from a canonical option key (`-x` or `--name`) to whether
/// that option requires a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptTable {
    opts: HashMap<String, bool>,
}

/// Result of [`OptTable::match_long`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongMatch<'t> {
    /// The token names a known option. `value` is whatever followed the
    /// first `=`. An empty right side counts as no value at all.
    Matched {
        opt: &'t str,
        value: Option<&'t str>,
        requires_value: bool,
    },
    /// Not a known long option. Whether that is a problem is up to the caller.
    NotFound,
    /// A known option that does not take a value was given one anyway.
    Invalid(OptError),
}

impl OptTable {
    /// Build a table from a getopt style string such as `"hvx:y:"`.
    /// A letter followed by `:` requires a value. A `:` that does not follow
    /// a letter is ignored.
    pub fn from_short_spec(spec: &str) -> OResult<Self> {
        let mut table = OptTable::default();
        let mut chars = spec.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ':' {
                continue;
            }
            let requires_value = chars.peek() == Some(&':');
            table.insert(format!("-{c}"), requires_value)?;
        }
        Ok(table)
    }

    /// Build a table from long option names such as `["help", "example="]`.
    /// A trailing `=` means the option requires a value.
    pub fn from_long_spec<L: AsRef<str>>(names: &[L]) -> OResult<Self> {
        let mut table = OptTable::default();
        for name in names {
            let name = name.as_ref();
            let (name, requires_value) = match name.strip_suffix('=') {
                Some(n) => (n, true),
                None => (name, false),
            };
            table.insert(format!("--{name}"), requires_value)?;
        }
        Ok(table)
    }

    fn insert(&mut self, key: String, requires_value: bool) -> OResult<()> {
        if self.opts.contains_key(&key) {
            return Err(OptError::DuplicateOption(key));
        }
        self.opts.insert(key, requires_value);
        Ok(())
    }

    /// Whether `key` is known and if so, whether it requires a value.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.opts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.opts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    /// Exact lookup of a short option token such as `-x`.
    /// Returns the canonical key and whether it requires a value.
    pub fn match_short(&self, token: &str) -> Option<(&str, bool)> {
        self.opts
            .get_key_value(token)
            .map(|(k, &requires_value)| (k.as_str(), requires_value))
    }

    /// Look up a long option token such as `--example` or `--example=charles`.
    pub fn match_long<'t>(&self, token: &'t str) -> LongMatch<'t> {
        let (opt, value) = match token.split_once('=') {
            Some((o, v)) => (o, Some(v).filter(|v| !v.is_empty())),
            None => (token, None),
        };
        match (self.get(opt), value) {
            (None, _) => LongMatch::NotFound,
            (Some(false), Some(v)) => LongMatch::Invalid(OptError::UnexpectedValue {
                opt: opt.to_owned(),
                value: v.to_owned(),
            }),
            (Some(requires_value), value) => LongMatch::Matched {
                opt,
                value,
                requires_value,
            },
        }
    }
}

/// Same as [`OptTable::from_short_spec`].
pub fn build_short_spec(spec: &str) -> OResult<OptTable> {
    OptTable::from_short_spec(spec)
}

/// Same as [`OptTable::from_long_spec`].
pub fn build_long_spec<L: AsRef<str>>(names: &[L]) -> OResult<OptTable> {
    OptTable::from_long_spec(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONGS: &[&str] = &["help", "verbose", "empty", "example=", "yacc=", "zebra="];

    fn table(pairs: &[(&str, bool)]) -> OptTable {
        let mut t = OptTable::default();
        for (k, v) in pairs {
            t.insert(k.to_string(), *v).unwrap();
        }
        t
    }

    #[test]
    fn test_build_short() {
        let expected = table(&[
            ("-h", false),
            ("-v", false),
            ("-e", false),
            ("-x", true),
            ("-y", true),
            ("-z", true),
        ]);
        assert_eq!(build_short_spec("hvx:y:z:e"), Ok(expected));
    }

    #[test]
    fn test_build_short_stray_colons() {
        let t = build_short_spec(":hx::").unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("-h"), Some(false));
        assert_eq!(t.get("-x"), Some(true));
        assert_eq!(t.get("-:"), None);
        assert!(build_short_spec("").unwrap().is_empty());
    }

    #[test]
    fn test_build_short_duplicate() {
        assert_eq!(
            build_short_spec("hvh:x:y:z:e"),
            Err(OptError::DuplicateOption("-h".into()))
        );
        assert_eq!(
            build_short_spec("hvx:y:vz:e"),
            Err(OptError::DuplicateOption("-v".into()))
        );
    }

    #[test]
    fn test_build_long() {
        let expected = table(&[
            ("--help", false),
            ("--verbose", false),
            ("--empty", false),
            ("--example", true),
            ("--yacc", true),
            ("--zebra", true),
        ]);
        assert_eq!(build_long_spec(LONGS), Ok(expected));
        let none: &[String] = &[];
        assert!(build_long_spec(none).unwrap().is_empty());
    }

    #[test]
    fn test_build_long_duplicate() {
        assert_eq!(
            build_long_spec(&["help", "yacc=", "zebra=", "yacc="]),
            Err(OptError::DuplicateOption("--yacc".into()))
        );
        assert_eq!(
            build_long_spec(&["help", "verbose", "help="]),
            Err(OptError::DuplicateOption("--help".into()))
        );
    }

    #[test]
    fn test_match_short() {
        let t = build_short_spec("hvx:y:z:e").unwrap();
        assert_eq!(t.match_short("-y"), Some(("-y", true)));
        assert_eq!(t.match_short("-h"), Some(("-h", false)));
        assert_eq!(t.match_short("-r"), None);
        assert_eq!(t.match_short("-hv"), None);
        assert_eq!(t.match_short("h"), None);
    }

    #[test]
    fn test_match_long() {
        let t = build_long_spec(LONGS).unwrap();
        assert_eq!(
            t.match_long("--help"),
            LongMatch::Matched {
                opt: "--help",
                value: None,
                requires_value: false
            }
        );
        assert_eq!(
            t.match_long("--example=help"),
            LongMatch::Matched {
                opt: "--example",
                value: Some("help"),
                requires_value: true
            }
        );
        assert_eq!(
            t.match_long("--example"),
            LongMatch::Matched {
                opt: "--example",
                value: None,
                requires_value: true
            }
        );
        assert_eq!(
            t.match_long("--example=a=b"),
            LongMatch::Matched {
                opt: "--example",
                value: Some("a=b"),
                requires_value: true
            }
        );
    }

    #[test]
    fn test_match_long_unexpected() {
        let t = build_long_spec(LONGS).unwrap();
        assert_eq!(
            t.match_long("--help=wat"),
            LongMatch::Invalid(OptError::UnexpectedValue {
                opt: "--help".into(),
                value: "wat".into()
            })
        );
    }

    #[test]
    fn test_match_long_empty_value() {
        let t = build_long_spec(LONGS).unwrap();
        assert_eq!(
            t.match_long("--help="),
            LongMatch::Matched {
                opt: "--help",
                value: None,
                requires_value: false
            }
        );
        assert_eq!(
            t.match_long("--example="),
            LongMatch::Matched {
                opt: "--example",
                value: None,
                requires_value: true
            }
        );
    }

    #[test]
    fn test_match_long_unknown() {
        let t = build_long_spec(LONGS).unwrap();
        assert_eq!(t.match_long("--wizard"), LongMatch::NotFound);
        assert_eq!(t.match_long("--wizard=yes"), LongMatch::NotFound);
        assert_eq!(t.match_long("--hel"), LongMatch::NotFound);
    }
}
