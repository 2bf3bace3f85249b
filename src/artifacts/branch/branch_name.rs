use crate::areas::head::HEAD_REF_NAME;
use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::{Result, SimulationError};
use regex::Regex;
use std::sync::LazyLock;

const REF_PREFIX: &str = "refs/heads/";

static INVALID_BRANCH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(INVALID_BRANCH_NAME_REGEX).expect("Invalid branch name regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a user supplied branch name
    ///
    /// `HEAD` is reserved: revisions always read it as the HEAD reference.
    pub fn try_parse(name: String) -> Result<Self> {
        if name.is_empty() || name == HEAD_REF_NAME || INVALID_BRANCH_NAME.is_match(&name) {
            return Err(SimulationError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    /// Build a name from a constant known to be valid
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    /// Full ref path, e.g. `refs/heads/main`
    pub fn ref_path(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
