use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::history::{ResetKind, ResetOutcome};
use crate::errors::Result;

impl Repository {
    /// Point the current branch (or a detached HEAD) at `revision`
    ///
    /// The commit graph is left alone: commits the branch walked away from
    /// stay allocated and can still be found through the reflog. `kind` only
    /// decides what the lesson reports about the abandoned changes.
    pub fn reset(&mut self, revision: &str, kind: ResetKind) -> Result<ResetOutcome> {
        let target = Revision::try_parse(revision)?.resolve(self)?;
        let from = self.move_head(&target, format!("reset: moving to {revision}"))?;

        Ok(ResetOutcome {
            from,
            to: target,
            kind,
            status: kind.status(),
        })
    }
}
