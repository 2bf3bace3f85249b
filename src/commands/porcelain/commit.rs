use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;

impl Repository {
    /// Record a new commit on top of HEAD
    ///
    /// An attached HEAD drags its branch to the new commit; a detached HEAD
    /// moves on its own, leaving every branch where it was.
    pub fn commit(&mut self) -> Result<Commit> {
        let parent = self.head_commit()?;

        let commit = self.graph.append_commit(Some(&parent))?;
        self.move_head(commit.id(), format!("commit: {}", commit.message()))?;

        Ok(commit)
    }
}
