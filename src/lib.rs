//! Simulation core for interactive version-control lessons
//!
//! The crate models a deliberately small repository: commits with at most one
//! parent, movable branches, a HEAD that is either attached to a branch or
//! detached on a commit, a reflog of HEAD movements and a single-file staging
//! pipeline. Renderers drive the lessons in [`lessons`] and redraw from the
//! [`Snapshot`](artifacts::snapshot::Snapshot) they expose.
//!
//! ## Layout
//!
//! - `areas`: stateful components (commit graph, refs, HEAD, reflog, staging)
//! - `artifacts`: value types shared by the components (ids, names, outcomes)
//! - `commands`: repository-level operations (commit, checkout, reset, ...)
//! - `lessons`: the teaching scenarios, each with a fixed seed and a reset

/// Macro for debug logging that is enabled with the debug_sim feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("moved branch {} to {}", name, target);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_sim")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod lessons;
