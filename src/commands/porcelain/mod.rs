//! User-facing repository operations
//!
//! ## Commands
//!
//! - `branch`: create a branch or move an existing one
//! - `checkout`: attach HEAD to a branch or detach it on a commit
//! - `commit`: append a commit on top of HEAD
//! - `rebase`: replay the current branch on top of another one
//! - `reflog`: bring a lost commit back through the reflog
//! - `reset`: move the current branch back without touching the graph
//! - `revert`: add the inverse of a commit on top of HEAD

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod rebase;
pub mod reflog;
pub mod reset;
pub mod revert;
