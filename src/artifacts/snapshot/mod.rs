//! Renderer-facing view of a lesson repository
//!
//! A [`Snapshot`] is a plain copy of the state after an operation: commits in
//! creation order with their parent links, branches in creation order (the
//! order labels are stacked in), HEAD and the reflog. Renderers redraw from
//! it and never reach into the simulators directly.

mod render;

use crate::areas::head::HeadState;
use crate::areas::refs::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::CommitKind;
use crate::artifacts::objects::commit_id::CommitId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitView {
    pub id: CommitId,
    pub parent: Option<CommitId>,
    pub message: String,
    pub kind: CommitKind,
    /// Branch labels stacked on this commit, bottom first
    pub branches: Vec<BranchName>,
    /// HEAD resolves to this commit
    pub is_head: bool,
    /// Reachable from HEAD or a branch; unreachable commits are only known to the reflog
    pub reachable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub commits: Vec<CommitView>,
    pub branches: Vec<Branch>,
    pub head: HeadState,
    /// Text drawn on the HEAD pointer
    pub head_label: String,
    pub head_commit: CommitId,
    /// `HEAD@{n}: ...` lines, newest first
    pub reflog: Vec<String>,
}

impl Snapshot {
    pub fn commit(&self, id: &CommitId) -> Option<&CommitView> {
        self.commits.iter().find(|commit| &commit.id == id)
    }

    pub fn branch_target(&self, name: &str) -> Option<&CommitId> {
        self.branches
            .iter()
            .find(|branch| branch.name().as_ref() == name)
            .map(Branch::target)
    }

    /// Commits no branch or HEAD leads to any more
    pub fn orphans(&self) -> impl Iterator<Item = &CommitView> {
        self.commits.iter().filter(|commit| !commit.reachable)
    }
}
