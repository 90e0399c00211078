use std::cmp::Ordering;
use std::str::FromStr;

use itertools::{EitherOrBoth, Itertools};
use thiserror::Error;

/// A dotted version decomposed into integer components.
///
/// Components are compared left to right; a missing component compares as
/// zero, so `1.2` and `1.2.0` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VersionTuple(Vec<u64>);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{component}` is not a valid version component")]
pub struct InvalidVersion {
    pub component: String,
}

impl FromStr for VersionTuple {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(VersionTuple::default());
        }

        s.split('.')
            .map(|component| {
                component.parse::<u64>().map_err(|_| InvalidVersion {
                    component: component.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(VersionTuple)
    }
}

impl VersionTuple {
    pub fn compare(&self, other: &VersionTuple) -> Ordering {
        for pair in self.0.iter().zip_longest(other.0.iter()) {
            let (lhs, rhs) = match pair {
                EitherOrBoth::Both(l, r) => (*l, *r),
                EitherOrBoth::Left(l) => (*l, 0),
                EitherOrBoth::Right(r) => (0, *r),
            };
            match lhs.cmp(&rhs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for VersionTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
