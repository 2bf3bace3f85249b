//! Stateful simulation components
//!
//! - `commit_graph`: every commit of a lesson and their parent links
//! - `head`: attached or detached HEAD
//! - `reflog`: append-only history of HEAD movements
//! - `refs`: branch name to commit table
//! - `repository`: graph, refs, HEAD and reflog working together
//! - `staging`: the single-file working/staged/committed/pushed pipeline

pub mod commit_graph;
pub mod head;
pub mod reflog;
pub mod refs;
pub mod repository;
pub mod staging;
