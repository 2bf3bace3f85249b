use crate::areas::commit_graph::CommitGraph;
use crate::areas::head::{Head, HeadState};
use crate::areas::reflog::Reflog;
use crate::areas::refs::Refs;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::snapshot::{CommitView, Snapshot};
use crate::errors::{Result, SimulationError};
use std::collections::HashSet;

/// Commit graph, reference table, HEAD and reflog of one lesson
///
/// The components stay independent; the repository only guarantees that
/// they are mutated together, so HEAD and every branch keep pointing at
/// commits the graph knows about.
#[derive(Debug, Clone)]
pub struct Repository {
    pub(crate) graph: CommitGraph,
    pub(crate) refs: Refs,
    pub(crate) head: Head,
    pub(crate) reflog: Reflog,
}

impl Repository {
    /// Assemble a repository, checking that HEAD resolves to a known commit
    pub fn new(graph: CommitGraph, refs: Refs, head: Head, reflog: Reflog) -> Result<Self> {
        let head_commit = head.resolve_commit(&refs)?;
        graph.get(&head_commit)?;

        Ok(Repository {
            graph,
            refs,
            head,
            reflog,
        })
    }

    /// Seed `C1 <- ... <- Cn` with `branch` on the tip and HEAD attached to it
    ///
    /// The chain always holds at least the root commit.
    pub fn linear(length: usize, capacity: usize, branch: BranchName) -> Result<Self> {
        let graph = CommitGraph::linear(length.max(1), capacity)?;
        let tip = graph
            .tip()
            .map(|commit| commit.id().clone())
            .ok_or(SimulationError::CapacityExceeded { capacity })?;

        let mut refs = Refs::new();
        refs.create_or_move_branch(&graph, branch.clone(), &tip)?;

        Repository::new(
            graph,
            refs,
            Head::attached(branch),
            Reflog::seeded(Some(tip)),
        )
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn reflog(&self) -> &Reflog {
        &self.reflog
    }

    pub fn head_commit(&self) -> Result<CommitId> {
        self.head.resolve_commit(&self.refs)
    }

    pub fn current_branch(&self) -> Option<&BranchName> {
        self.head.current_branch()
    }

    /// Commits reachable from HEAD or from any branch
    pub fn reachable(&self) -> HashSet<CommitId> {
        let head = self.head_commit().ok();
        let tips = self
            .refs
            .branches()
            .iter()
            .map(|branch| branch.target().clone())
            .chain(head);

        let mut reachable = HashSet::new();
        for tip in tips {
            for commit in self.graph.ancestors(&tip) {
                if !reachable.insert(commit.id().clone()) {
                    break;
                }
            }
        }

        reachable
    }

    pub fn is_reachable(&self, id: &CommitId) -> bool {
        self.reachable().contains(id)
    }

    /// Move HEAD to `target`, dragging the current branch along when attached
    ///
    /// Writes `description` to the reflog and returns the commit HEAD left.
    pub(crate) fn move_head(&mut self, target: &CommitId, description: String) -> Result<CommitId> {
        let from = self.head_commit()?;

        match self.head.state().clone() {
            HeadState::Attached(branch) => {
                self.refs.update_branch(&self.graph, &branch, target)?;
            }
            HeadState::Detached(_) => {
                self.graph.get(target)?;
                self.head.move_detached(target.clone());
            }
        }

        self.reflog
            .record(description, Some(from.clone()), Some(target.clone()));
        Ok(from)
    }

    /// Everything a renderer needs to redraw the diagram
    pub fn snapshot(&self) -> Result<Snapshot> {
        let head_commit = self.head_commit()?;
        let reachable = self.reachable();
        let reverse_refs = self.refs.reverse_refs();

        let commits = self
            .graph
            .commits()
            .iter()
            .map(|commit| CommitView {
                id: commit.id().clone(),
                parent: commit.parent().cloned(),
                message: commit.message().to_string(),
                kind: commit.kind().clone(),
                branches: reverse_refs.get(commit.id()).cloned().unwrap_or_default(),
                is_head: commit.id() == &head_commit,
                reachable: reachable.contains(commit.id()),
            })
            .collect();

        Ok(Snapshot {
            commits,
            branches: self.refs.branches().to_vec(),
            head: self.head.state().clone(),
            head_label: self.head.describe(),
            head_commit,
            reflog: self.reflog.lines(),
        })
    }
}
