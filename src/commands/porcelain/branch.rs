use crate::areas::refs::{BranchPlacement, BranchUpdate};
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::errors::Result;

impl Repository {
    /// Create `branch_name` at `source` (HEAD when omitted), or move it there
    ///
    /// Moving the branch HEAD is attached to moves HEAD as well, which is
    /// written to the reflog.
    pub fn branch(&mut self, branch_name: &str, source: Option<&str>) -> Result<BranchPlacement> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let target = match source {
            Some(source) => Revision::try_parse(source)?.resolve(self)?,
            None => self.head_commit()?,
        };

        let placement = self
            .refs
            .create_or_move_branch(&self.graph, branch_name, &target)?;

        if let BranchUpdate::Moved { from } = &placement.update
            && self.current_branch() == Some(placement.branch.name())
        {
            self.reflog.record(
                format!("branch: moving {} to {target}", placement.branch.name()),
                Some(from.clone()),
                Some(target.clone()),
            );
        }

        Ok(placement)
    }
}
