use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::history::RebaseOutcome;
use crate::artifacts::objects::commit::{Commit, CommitKind};
use crate::errors::{Result, SimulationError};

impl Repository {
    /// Replay the current branch on top of `onto`
    ///
    /// Every commit of the current branch since it diverged from `onto` is
    /// copied, oldest first, onto the tip of `onto`. The copies keep the
    /// content of their originals but get new identities; the branch then
    /// moves to the newest copy. The originals stay in the graph with no
    /// branch pointing at them.
    ///
    /// # Errors
    ///
    /// - `DetachedHead` when HEAD is not on a branch
    /// - `CapacityExceeded` when the copies do not all fit (nothing is copied)
    pub fn rebase(&mut self, onto: &str) -> Result<RebaseOutcome> {
        let branch = self
            .current_branch()
            .cloned()
            .ok_or(SimulationError::DetachedHead)?;
        let upstream = Revision::try_parse(onto)?.resolve(self)?;
        let tip = self.refs.resolve(&branch)?.clone();
        let base = self.graph.merge_base(&tip, &upstream)?;

        let mut picks = if base.as_ref() == Some(&upstream) {
            Vec::new()
        } else {
            self.graph
                .ancestors(&tip)
                .take_while(|commit| Some(commit.id()) != base.as_ref())
                .cloned()
                .collect::<Vec<Commit>>()
        };
        picks.reverse();

        self.graph.ensure_capacity(picks.len())?;

        let mut parent = upstream.clone();
        let mut replayed = Vec::with_capacity(picks.len());
        for pick in &picks {
            let copy = self.graph.append_derived(
                &parent,
                CommitKind::Rebased {
                    from: pick.id().clone(),
                },
                pick.message().to_string(),
            )?;
            debug_log!("rebase: picked {} as {}", pick.id(), copy.id());

            replayed.push((pick.id().clone(), copy.id().clone()));
            parent = copy.id().clone();
        }

        if !replayed.is_empty() {
            self.move_head(
                &parent,
                format!("rebase (finish): {} onto {upstream}", branch.ref_path()),
            )?;
        }

        Ok(RebaseOutcome {
            branch,
            onto: upstream,
            base,
            replayed,
        })
    }
}
