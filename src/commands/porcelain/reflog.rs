use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Result, SimulationError};

impl Repository {
    /// Bring back the commit HEAD resolved to at `HEAD@{selector}`
    ///
    /// The current branch (or a detached HEAD) is pointed at the commit the
    /// entry recorded, which makes it reachable again. Returns that commit.
    ///
    /// # Errors
    ///
    /// `NothingToRecover` when the entry does not exist or recorded no commit.
    pub fn restore(&mut self, selector: usize) -> Result<CommitId> {
        let target = self
            .reflog
            .position(selector)
            .cloned()
            .ok_or(SimulationError::NothingToRecover)?;

        self.restore_commit(target)
    }

    /// Point the current branch (or a detached HEAD) back at `target`
    pub fn restore_commit(&mut self, target: CommitId) -> Result<CommitId> {
        self.move_head(&target, format!("checkout: moving to {target}"))?;
        Ok(target)
    }
}
