//! Commit objects
//!
//! Commits carry no content and no hash: each one is identified by a display
//! label (`C1`, `C2`, ...) and remembers its single parent. Commits produced
//! by rewriting history reuse the label of their source with a prime appended
//! (`C3'`), the way the lessons draw them.

pub mod commit;
pub mod commit_id;

/// Pattern every commit label matches
pub const COMMIT_LABEL_REGEX: &str = r"^C\d+'*$";
