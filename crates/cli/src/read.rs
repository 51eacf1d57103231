use base::scalar::F64;
use std::fmt::Display;
use std::str::FromStr;

/// A value type the command line can rank.
pub trait StreamValue: Ord + FromStr + Display + Sized {
    /// Maps values without a rank to `None`.
    fn defined(self) -> Option<Self> {
        Some(self)
    }
}

impl StreamValue for i64 {}

impl StreamValue for F64 {
    fn defined(self) -> Option<Self> {
        F64::defined(self.0)
    }
}

#[derive(Debug, PartialEq)]
pub enum Line<T> {
    Blank,
    Value(Option<T>),
    Malformed,
}

pub fn parse_line<T: StreamValue>(line: &str) -> Line<T> {
    let token = line.trim();
    if token.is_empty() {
        return Line::Blank;
    }
    if ["null", "none", "nan"]
        .iter()
        .any(|absent| token.eq_ignore_ascii_case(absent))
    {
        return Line::Value(None);
    }
    match token.parse::<T>() {
        Ok(value) => Line::Value(value.defined()),
        Err(_) => Line::Malformed,
    }
}
