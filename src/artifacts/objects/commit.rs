//! Commit object
//!
//! A commit is an immutable node of the commit graph. It records:
//! - its identifier (display label)
//! - its parent, if any (the root commit has none)
//! - how it came to be (authored, revert of another commit, rebased copy)
//! - a short message, shown next to the label by renderers

use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;

/// Origin of a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitKind {
    /// Recorded directly by the user
    Authored,
    /// Inverse of another commit, created by revert
    Revert { of: CommitId },
    /// Copy of another commit with the same content on a new base, created by rebase
    Rebased { from: CommitId },
}

impl CommitKind {
    /// Commit this one was derived from, if any
    pub fn source(&self) -> Option<&CommitId> {
        match self {
            CommitKind::Authored => None,
            CommitKind::Revert { of } => Some(of),
            CommitKind::Rebased { from } => Some(from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    id: CommitId,
    parent: Option<CommitId>,
    kind: CommitKind,
    message: String,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parent(&self) -> Option<&CommitId> {
        self.parent.as_ref()
    }

    pub fn kind(&self) -> &CommitKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
