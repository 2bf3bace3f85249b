//! Error conditions raised by the simulators
//!
//! Every variant is a recoverable, user-facing condition. An operation that
//! returns an error leaves the simulator it was called on untouched.

use crate::artifacts::history::RewriteMode;
use crate::artifacts::objects::commit_id::CommitId;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// The commit graph reached its node limit.
    #[error("canvas full ({capacity} commits), reset the lesson to start over")]
    CapacityExceeded { capacity: usize },

    #[error("branch {0} not found")]
    UnknownBranch(String),

    #[error("commit {0} not found")]
    UnknownCommit(String),

    #[error("nothing staged, run add before committing")]
    NothingStaged,

    #[error("nothing committed, run commit before pushing")]
    NothingCommitted,

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    /// The requested move goes past the root commit.
    #[error("commit {0} has no parent")]
    NoParent(CommitId),

    #[error("HEAD is detached, check out a branch first")]
    DetachedHead,

    /// One-shot rewrite was already played in this mode session.
    #[error("{0} was already applied, reset the lesson to replay it")]
    AlreadyApplied(RewriteMode),

    #[error("{requested} is not available while in {active} mode")]
    WrongMode {
        active: RewriteMode,
        requested: RewriteMode,
    },

    #[error("nothing to recover, no work has been lost")]
    NothingToRecover,
}
