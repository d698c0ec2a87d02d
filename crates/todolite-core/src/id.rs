use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a task (monotonic integer).
///
/// Ids are assigned by [`TaskStore`](crate::TaskStore) from a strictly
/// increasing counter, so a deleted task's id is never reissued.
#[derive(
    Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// First id handed out by a fresh store.
    pub const FIRST: Self = Self(1);

    /// Id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for TaskId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        let id = TaskId(42);
        let parsed: TaskId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&TaskId(7)).unwrap();
        assert_eq!(json, "7");
        let back: TaskId = serde_json::from_str("7").unwrap();
        assert_eq!(back, TaskId(7));
    }

    #[test]
    fn next_is_strictly_increasing() {
        assert_eq!(TaskId::FIRST.next(), TaskId(2));
        assert!(TaskId(9).next() > TaskId(9));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("abc".parse::<TaskId>().is_err());
    }
}
