//! HEAD tracker
//!
//! HEAD is either attached to a branch, following it wherever it moves, or
//! detached on a commit regardless of branch movement. Every checkout is
//! written to the reflog before it returns.

use crate::areas::commit_graph::CommitGraph;
use crate::areas::reflog::Reflog;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    Attached(BranchName),
    Detached(CommitId),
}

impl HeadState {
    pub fn is_detached(&self) -> bool {
        matches!(self, HeadState::Detached(_))
    }
}

impl std::fmt::Display for HeadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadState::Attached(branch) => write!(f, "{branch}"),
            HeadState::Detached(commit) => write!(f, "{commit}"),
        }
    }
}

/// Result of a checkout, enough for a renderer to pick its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub previous: HeadState,
    pub current: HeadState,
    /// Commit HEAD resolves to after the checkout
    pub commit: CommitId,
}

impl Checkout {
    /// HEAD went from a branch to a bare commit
    pub fn detached_now(&self) -> bool {
        !self.previous.is_detached() && self.current.is_detached()
    }

    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    state: HeadState,
}

impl Head {
    pub fn attached(branch: BranchName) -> Self {
        Head {
            state: HeadState::Attached(branch),
        }
    }

    pub fn detached(commit: CommitId) -> Self {
        Head {
            state: HeadState::Detached(commit),
        }
    }

    pub fn state(&self) -> &HeadState {
        &self.state
    }

    pub fn is_detached(&self) -> bool {
        self.state.is_detached()
    }

    /// Branch HEAD is attached to, if any
    pub fn current_branch(&self) -> Option<&BranchName> {
        match &self.state {
            HeadState::Attached(branch) => Some(branch),
            HeadState::Detached(_) => None,
        }
    }

    /// Commit HEAD points at, following the branch when attached
    pub fn resolve_commit(&self, refs: &Refs) -> Result<CommitId> {
        match &self.state {
            HeadState::Attached(branch) => refs.resolve(branch).cloned(),
            HeadState::Detached(commit) => Ok(commit.clone()),
        }
    }

    /// Attach HEAD to `branch`
    ///
    /// # Errors
    ///
    /// `UnknownBranch` if the reference table has no such branch.
    pub fn checkout_branch(
        &mut self,
        refs: &Refs,
        reflog: &mut Reflog,
        branch: &BranchName,
    ) -> Result<Checkout> {
        let commit = refs.resolve(branch)?.clone();
        self.transition(refs, reflog, HeadState::Attached(branch.clone()), commit)
    }

    /// Detach HEAD onto `commit`
    ///
    /// # Errors
    ///
    /// `UnknownCommit` if the commit graph has no such commit.
    pub fn checkout_commit(
        &mut self,
        graph: &CommitGraph,
        refs: &Refs,
        reflog: &mut Reflog,
        commit: &CommitId,
    ) -> Result<Checkout> {
        graph.get(commit)?;
        self.transition(refs, reflog, HeadState::Detached(commit.clone()), commit.clone())
    }

    fn transition(
        &mut self,
        refs: &Refs,
        reflog: &mut Reflog,
        next: HeadState,
        commit: CommitId,
    ) -> Result<Checkout> {
        let from = self.resolve_commit(refs).ok();

        reflog.record(
            format!("checkout: moving from {} to {}", self.state, next),
            from,
            Some(commit.clone()),
        );
        debug_log!("head: {} -> {}", self.state, next);

        let previous = std::mem::replace(&mut self.state, next);
        Ok(Checkout {
            previous,
            current: self.state.clone(),
            commit,
        })
    }

    /// Pin a detached HEAD on another commit without recording a checkout
    ///
    /// Used by commands that move HEAD as a side effect (commit, reset) and
    /// write their own reflog entry.
    pub(crate) fn move_detached(&mut self, commit: CommitId) {
        self.state = HeadState::Detached(commit);
    }

    /// Label drawn on the HEAD pointer: `HEAD -> main` or `HEAD (C2)`
    pub fn describe(&self) -> String {
        match &self.state {
            HeadState::Attached(branch) => format!("{HEAD_REF_NAME} -> {branch}"),
            HeadState::Detached(commit) => format!("{HEAD_REF_NAME} ({commit})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::commit_graph::DEFAULT_CAPACITY;
    use crate::errors::SimulationError;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn id(label: &str) -> CommitId {
        CommitId::try_parse(label.to_string()).expect("valid commit label")
    }

    fn name(name: &str) -> BranchName {
        BranchName::try_parse(name.to_string()).expect("valid branch name")
    }

    struct World {
        graph: CommitGraph,
        refs: Refs,
        reflog: Reflog,
        head: Head,
    }

    /// C1 <- C2 (feature) <- C3 (main, HEAD)
    #[fixture]
    fn world() -> World {
        let graph = CommitGraph::linear(3, DEFAULT_CAPACITY).expect("seed fits");
        let mut refs = Refs::new();
        refs.create_or_move_branch(&graph, name("main"), &id("C3"))
            .expect("valid placement");
        refs.create_or_move_branch(&graph, name("feature"), &id("C2"))
            .expect("valid placement");

        World {
            graph,
            refs,
            reflog: Reflog::seeded(Some(id("C3"))),
            head: Head::attached(name("main")),
        }
    }

    #[rstest]
    fn attached_head_follows_its_branch(mut world: World) {
        assert_eq!(world.head.resolve_commit(&world.refs), Ok(id("C3")));

        world
            .refs
            .update_branch(&world.graph, &name("main"), &id("C1"))
            .expect("valid move");

        assert_eq!(world.head.resolve_commit(&world.refs), Ok(id("C1")));
    }

    #[rstest]
    fn checkout_branch_attaches_and_logs(mut world: World) {
        let checkout = world
            .head
            .checkout_branch(&world.refs, &mut world.reflog, &name("feature"))
            .expect("known branch");

        assert_eq!(checkout.commit, id("C2"));
        assert_eq!(world.head.describe(), "HEAD -> feature");
        assert_eq!(
            world.reflog.get(0).map(|entry| entry.description()),
            Some("checkout: moving from main to feature")
        );
    }

    #[rstest]
    fn checkout_commit_detaches_and_ignores_branch_moves(mut world: World) {
        let checkout = world
            .head
            .checkout_commit(&world.graph, &world.refs, &mut world.reflog, &id("C2"))
            .expect("known commit");

        assert!(checkout.detached_now());
        assert_eq!(world.head.describe(), "HEAD (C2)");

        world
            .refs
            .update_branch(&world.graph, &name("feature"), &id("C3"))
            .expect("valid move");
        assert_eq!(world.head.resolve_commit(&world.refs), Ok(id("C2")));
    }

    #[rstest]
    fn failed_checkouts_change_nothing(mut world: World) {
        let unknown_branch = world
            .head
            .checkout_branch(&world.refs, &mut world.reflog, &name("nope"));
        let unknown_commit = world
            .head
            .checkout_commit(&world.graph, &world.refs, &mut world.reflog, &id("C9"));

        assert_eq!(
            unknown_branch,
            Err(SimulationError::UnknownBranch("nope".to_string()))
        );
        assert_eq!(
            unknown_commit,
            Err(SimulationError::UnknownCommit("C9".to_string()))
        );
        assert_eq!(world.head, Head::attached(name("main")));
        assert_eq!(world.reflog.len(), 1);
    }

    #[rstest]
    fn checking_out_the_current_branch_is_a_noop_move(mut world: World) {
        let checkout = world
            .head
            .checkout_branch(&world.refs, &mut world.reflog, &name("main"))
            .expect("known branch");

        assert!(checkout.is_noop());
        assert_eq!(world.reflog.len(), 2);
    }
}
