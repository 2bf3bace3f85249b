//! History-rewriting vocabulary
//!
//! - [`RewriteMode`]: which of reset, revert and rebase a lesson is showing
//! - [`ResetKind`]: `--soft`, `--mixed` or `--hard`
//! - [`ChangeStatus`]: what happened to the changes of the abandoned commit
//! - outcomes returned by the reset and rebase commands

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RewriteMode {
    #[default]
    Reset,
    Revert,
    Rebase,
}

impl RewriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteMode::Reset => "reset",
            RewriteMode::Revert => "revert",
            RewriteMode::Rebase => "rebase",
        }
    }

    /// Caption the lesson shows under the diagram
    pub fn tagline(&self) -> &'static str {
        match self {
            RewriteMode::Reset => "Going back in time...",
            RewriteMode::Revert => "Adding an opposite commit.",
            RewriteMode::Rebase => "Moving the base.",
        }
    }
}

impl std::fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the one-shot operation of the current mode has been played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewritePhase {
    #[default]
    Initial,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetKind {
    Soft,
    Mixed,
    Hard,
}

impl ResetKind {
    pub fn flag(&self) -> &'static str {
        match self {
            ResetKind::Soft => "--soft",
            ResetKind::Mixed => "--mixed",
            ResetKind::Hard => "--hard",
        }
    }

    pub fn status(&self) -> ChangeStatus {
        match self {
            ResetKind::Soft => ChangeStatus::Staged,
            ResetKind::Mixed => ChangeStatus::WorkingDirectory,
            ResetKind::Hard => ChangeStatus::Destroyed,
        }
    }
}

impl std::fmt::Display for ResetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// Where the changes of the commit a reset walked away from ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Kept in the staging area (`--soft`)
    Staged,
    /// Kept as unstaged edits (`--mixed`)
    WorkingDirectory,
    /// Thrown away; only the reflog still knows the commit (`--hard`)
    Destroyed,
}

impl ChangeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeStatus::Staged => "Changes: Staged",
            ChangeStatus::WorkingDirectory => "Changes: Working Dir",
            ChangeStatus::Destroyed => "Changes: DESTROYED",
        }
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, ChangeStatus::Destroyed)
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    /// Commit HEAD resolved to before the reset
    pub from: CommitId,
    /// Commit HEAD resolves to now
    pub to: CommitId,
    pub kind: ResetKind,
    pub status: ChangeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebaseOutcome {
    pub branch: BranchName,
    /// Tip of the branch the commits were replayed onto
    pub onto: CommitId,
    /// Common ancestor the branch diverged from, if the histories meet
    pub base: Option<CommitId>,
    /// (original, copy) pairs, oldest first
    pub replayed: Vec<(CommitId, CommitId)>,
}

impl RebaseOutcome {
    pub fn is_up_to_date(&self) -> bool {
        self.replayed.is_empty()
    }

    /// Newest copy, which the rebased branch now points at
    pub fn new_tip(&self) -> Option<&CommitId> {
        self.replayed.last().map(|(_, copy)| copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResetKind::Soft, ChangeStatus::Staged)]
    #[case(ResetKind::Mixed, ChangeStatus::WorkingDirectory)]
    #[case(ResetKind::Hard, ChangeStatus::Destroyed)]
    fn reset_kind_maps_to_change_status(#[case] kind: ResetKind, #[case] status: ChangeStatus) {
        assert_eq!(kind.status(), status);
    }

    #[test]
    fn only_hard_reset_destroys_changes() {
        assert!(ResetKind::Hard.status().is_destroyed());
        assert!(!ResetKind::Soft.status().is_destroyed());
        assert!(!ResetKind::Mixed.status().is_destroyed());
    }
}
