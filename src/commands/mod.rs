//! Repository operations
//!
//! Operations a lesson can play against its [`Repository`](crate::areas::repository::Repository),
//! written as `impl Repository` blocks. Each one validates its input against
//! the current state before mutating anything, so a failed command leaves the
//! repository exactly as it was.

pub mod porcelain;
