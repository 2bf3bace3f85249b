//! Value types shared by the simulators
//!
//! - `branch`: branch names and revision parsing
//! - `history`: reset kinds, rewrite modes and their outcomes
//! - `objects`: commits and commit identifiers
//! - `snapshot`: the read-only view handed to renderers

pub mod branch;
pub mod history;
pub mod objects;
pub mod snapshot;
