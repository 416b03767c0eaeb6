//! Number predicates for `drills find`.
//!
//! Syntax: `even`, `odd`, `gt:N`, `lt:N`, `eq:N`.

use anyhow::{bail, Context, Result};
use std::fmt;
use std::str::FromStr;

/// A test applied to each number by `drills find`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Even,
    Odd,
    /// Strictly greater than
    Greater(i64),
    /// Strictly less than
    Less(i64),
    Equal(i64),
}

impl Predicate {
    pub fn matches(&self, n: i64) -> bool {
        match *self {
            Predicate::Even => n % 2 == 0,
            Predicate::Odd => n % 2 != 0,
            Predicate::Greater(x) => n > x,
            Predicate::Less(x) => n < x,
            Predicate::Equal(x) => n == x,
        }
    }
}

impl FromStr for Predicate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "even" => return Ok(Predicate::Even),
            "odd" => return Ok(Predicate::Odd),
            _ => {}
        }

        let Some((op, value)) = s.split_once(':') else {
            bail!("Unknown predicate '{}' (expected even, odd, gt:N, lt:N or eq:N)", s);
        };
        let n: i64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid number in predicate '{}'", s))?;

        match op.to_ascii_lowercase().as_str() {
            "gt" => Ok(Predicate::Greater(n)),
            "lt" => Ok(Predicate::Less(n)),
            "eq" => Ok(Predicate::Equal(n)),
            _ => bail!("Unknown predicate operator '{}' in '{}'", op, s),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Even => write!(f, "even"),
            Predicate::Odd => write!(f, "odd"),
            Predicate::Greater(n) => write!(f, "gt:{}", n),
            Predicate::Less(n) => write!(f, "lt:{}", n),
            Predicate::Equal(n) => write!(f, "eq:{}", n),
        }
    }
}
