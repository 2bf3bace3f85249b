//! Commit identifier
//!
//! Identifiers double as display labels. Sequentially appended commits are
//! named `C<n>`; rewritten copies take their source's label plus one or more
//! primes (`C2'`, `C2''`).

use crate::artifacts::objects::COMMIT_LABEL_REGEX;
use crate::errors::{Result, SimulationError};
use regex::Regex;
use std::sync::LazyLock;

static COMMIT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMIT_LABEL_REGEX).expect("Invalid commit label regex"));

const PRIME: char = '\'';

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse a commit label typed by the user
    ///
    /// Only the shape is checked here; whether the commit exists is up to
    /// the commit graph.
    pub fn try_parse(id: String) -> Result<Self> {
        if !Self::looks_like_commit(&id) {
            return Err(SimulationError::UnknownCommit(id));
        }

        Ok(Self(id))
    }

    /// Whether a string has the shape of a commit label
    pub fn looks_like_commit(id: &str) -> bool {
        COMMIT_LABEL.is_match(id)
    }

    /// Label of the n-th sequentially appended commit
    pub fn from_sequence(sequence: usize) -> Self {
        Self(format!("C{sequence}"))
    }

    /// Label of a rewritten copy of this commit
    pub fn primed(&self) -> Self {
        Self(format!("{}{PRIME}", self.0))
    }

    pub fn is_rewritten(&self) -> bool {
        self.0.ends_with(PRIME)
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("C1")]
    #[case("C12")]
    #[case("C3'")]
    #[case("C3''")]
    fn parses_commit_labels(#[case] label: &str) {
        assert!(CommitId::try_parse(label.to_string()).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("main")]
    #[case("C")]
    #[case("'C1")]
    #[case("c1")]
    fn rejects_non_commit_labels(#[case] label: &str) {
        assert_eq!(
            CommitId::try_parse(label.to_string()),
            Err(SimulationError::UnknownCommit(label.to_string()))
        );
    }

    #[test]
    fn primed_label_marks_a_rewritten_commit() {
        let original = CommitId::from_sequence(3);
        let copy = original.primed();

        assert!(!original.is_rewritten());
        assert!(copy.is_rewritten());
        assert_eq!(copy.as_ref(), "C3'");
        assert_eq!(copy.primed().as_ref(), "C3''");
    }
}
