//! Lesson configuration
//!
//! Values come from [`LessonConfig::default`], can be overridden through the
//! environment with [`LessonConfig::load_from_env`] and finally by command
//! line flags in the binary.

use crate::areas::commit_graph::DEFAULT_CAPACITY;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{DEFAULT_BRANCH, PLACING_BRANCH};
use anyhow::{Context, bail};

/// Environment variable holding the commit graph node limit
pub const CAPACITY_ENV: &str = "BIT_LESSONS_CAPACITY";
/// Environment variable holding the branch placed by the branches lesson
pub const BRANCH_ENV: &str = "BIT_LESSONS_BRANCH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonConfig {
    /// Maximum number of commits a lesson's graph may hold
    pub capacity: usize,
    /// Branch every seeded repository starts on
    pub default_branch: BranchName,
    /// Branch placed when the user clicks a commit without naming one
    pub placing_branch: BranchName,
}

impl Default for LessonConfig {
    fn default() -> Self {
        LessonConfig {
            capacity: DEFAULT_CAPACITY,
            default_branch: BranchName::from_static(DEFAULT_BRANCH),
            placing_branch: BranchName::from_static(PLACING_BRANCH),
        }
    }
}

impl LessonConfig {
    /// Load overrides from BIT_LESSONS_CAPACITY and BIT_LESSONS_BRANCH
    ///
    /// Unset variables keep their default values; set but malformed ones are
    /// reported instead of being silently ignored.
    pub fn load_from_env() -> anyhow::Result<Self> {
        let mut config = LessonConfig::default();

        if let Ok(capacity) = std::env::var(CAPACITY_ENV) {
            config.capacity = capacity
                .trim()
                .parse()
                .with_context(|| format!("{CAPACITY_ENV} must be a number, got '{capacity}'"))?;
        }

        if let Ok(branch) = std::env::var(BRANCH_ENV) {
            config.placing_branch = BranchName::try_parse(branch.clone())
                .with_context(|| format!("{BRANCH_ENV} is not a valid branch name"))?;
        }

        if config.placing_branch == config.default_branch {
            bail!(
                "{BRANCH_ENV} must differ from the default branch '{}'",
                config.default_branch
            );
        }

        Ok(config)
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
