//! Teaching scenarios
//!
//! Each lesson owns its own state, starts from a fixed seed and can be put
//! back to that seed at any time with [`Lesson::reset`]. Lessons share no
//! state with each other.
//!
//! ## Lessons
//!
//! - [`chain::CommitChain`]: append commits to a chain
//! - [`branches::BranchPlayground`]: place branch labels on commits
//! - [`head_pointer::HeadPointer`]: attach and detach HEAD
//! - [`three_areas::ThreeAreas`]: add, commit and push one file
//! - [`history::HistoryRewrite`]: reset, revert and rebase
//! - [`reflog::ReflogRecovery`]: lose a commit and get it back

use crate::errors::Result;

pub mod branches;
pub mod chain;
pub mod head_pointer;
pub mod history;
pub mod reflog;
pub mod three_areas;

pub trait Lesson {
    /// Heading of the lesson
    const TITLE: &'static str;

    /// Throw away everything the user did and rebuild the seed state
    fn reset(&mut self) -> Result<()>;
}
