use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, CommitKind};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;

impl Repository {
    /// Add a commit undoing `target` on top of HEAD
    ///
    /// History only grows: `target` and everything after it stay in place,
    /// and the current branch moves to the new inverse commit.
    pub fn revert(&mut self, target: &CommitId) -> Result<Commit> {
        let message = format!("Revert \"{}\"", self.graph.get(target)?.message());
        let tip = self.head_commit()?;

        let commit = self.graph.append_derived(
            &tip,
            CommitKind::Revert { of: target.clone() },
            message,
        )?;
        self.move_head(commit.id(), format!("revert: {}", commit.message()))?;

        Ok(commit)
    }
}
