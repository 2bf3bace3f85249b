//! Commit graph
//!
//! Owns every commit of a lesson. Commits are only ever appended: moving a
//! branch away from a commit hides it from the diagram, but the commit stays
//! in the graph so the reflog can still lead back to it.
//!
//! ## Capacity
//!
//! The graph holds at most `capacity` commits (the width of the canvas the
//! lesson is drawn on). Appending past the limit fails with
//! [`SimulationError::CapacityExceeded`] and leaves the graph untouched.
//!
//! ## Ancestry
//!
//! Each commit has at most one parent, so ancestry is a walk along parent
//! links. [`CommitGraph::merge_base`] marks commits reached from either side
//! and returns the first commit reached from both.

use crate::artifacts::objects::commit::{Commit, CommitKind};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Result, SimulationError};
use bitflags::bitflags;
use std::collections::HashMap;

/// Default node limit of a lesson canvas
pub const DEFAULT_CAPACITY: usize = 8;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_SOURCE = 0b01;
        const VISITED_FROM_TARGET = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_SOURCE.bits() | Self::VISITED_FROM_TARGET.bits();
    }
}

#[derive(Debug, Clone)]
pub struct CommitGraph {
    /// Commits in creation order
    commits: Vec<Commit>,
    capacity: usize,
    /// Sequence number of the next authored commit label
    next_sequence: usize,
}

impl CommitGraph {
    pub fn new(capacity: usize) -> Self {
        CommitGraph {
            commits: Vec::new(),
            capacity,
            next_sequence: 1,
        }
    }

    /// Build a linear chain `C1 <- C2 <- ... <- Cn`
    pub fn linear(length: usize, capacity: usize) -> Result<Self> {
        let mut graph = CommitGraph::new(capacity);

        let mut parent = None;
        for _ in 0..length {
            let commit = graph.append_commit(parent.as_ref())?;
            parent = Some(commit.id().clone());
        }

        Ok(graph)
    }

    /// Append an authored commit on top of `parent`
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` when the graph is full
    /// - `UnknownCommit` when `parent` is not part of the graph
    pub fn append_commit(&mut self, parent: Option<&CommitId>) -> Result<Commit> {
        self.append_commit_with_message(parent, None)
    }

    /// Same as [`CommitGraph::append_commit`], with a message other than the label
    pub fn append_commit_with_message(
        &mut self,
        parent: Option<&CommitId>,
        message: Option<String>,
    ) -> Result<Commit> {
        self.ensure_capacity(1)?;
        self.ensure_parent(parent)?;

        let id = CommitId::from_sequence(self.next_sequence);
        let message = message.unwrap_or_else(|| id.to_string());
        let commit = Commit::new(id, parent.cloned(), CommitKind::Authored, message);

        self.next_sequence += 1;
        Ok(self.push(commit))
    }

    /// Append a commit derived from another one (revert or rebase copy)
    ///
    /// The new commit is labelled after its source (the parent for authored
    /// kinds) with primes appended until the label is unused.
    pub(crate) fn append_derived(
        &mut self,
        parent: &CommitId,
        kind: CommitKind,
        message: String,
    ) -> Result<Commit> {
        self.ensure_capacity(1)?;
        self.ensure_parent(Some(parent))?;

        let source = kind.source().unwrap_or(parent);
        self.get(source)?;

        let mut id = source.primed();
        while self.contains(&id) {
            id = id.primed();
        }

        let commit = Commit::new(id, Some(parent.clone()), kind, message);
        Ok(self.push(commit))
    }

    fn push(&mut self, commit: Commit) -> Commit {
        debug_log!(
            "graph: appended {} (parent {:?}, {} of {})",
            commit.id(),
            commit.parent(),
            self.commits.len() + 1,
            self.capacity
        );

        self.commits.push(commit.clone());
        commit
    }

    /// Fail unless `count` more commits fit in the graph
    pub fn ensure_capacity(&self, count: usize) -> Result<()> {
        if self.remaining() < count {
            return Err(SimulationError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        Ok(())
    }

    fn ensure_parent(&self, parent: Option<&CommitId>) -> Result<()> {
        match parent {
            Some(parent) => self.get(parent).map(|_| ()),
            None => Ok(()),
        }
    }

    pub fn get(&self, id: &CommitId) -> Result<&Commit> {
        self.find(id)
            .ok_or_else(|| SimulationError::UnknownCommit(id.to_string()))
    }

    pub fn find(&self, id: &CommitId) -> Option<&Commit> {
        self.commits.iter().find(|commit| commit.id() == id)
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.find(id).is_some()
    }

    /// Parent of `id`, failing with `NoParent` on the root commit
    pub fn parent_of(&self, id: &CommitId) -> Result<&CommitId> {
        self.get(id)?
            .parent()
            .ok_or_else(|| SimulationError::NoParent(id.clone()))
    }

    /// Commits in creation order
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Most recently appended commit
    pub fn tip(&self) -> Option<&Commit> {
        self.commits.last()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.commits.len())
    }

    /// Walk from `id` (inclusive) to the root along parent links
    pub fn ancestors<'g>(&'g self, id: &CommitId) -> Ancestors<'g> {
        Ancestors {
            graph: self,
            next: self.find(id),
        }
    }

    /// Whether `ancestor` is reachable from `descendant` (a commit is its own ancestor)
    pub fn is_ancestor(&self, ancestor: &CommitId, descendant: &CommitId) -> bool {
        self.ancestors(descendant)
            .any(|commit| commit.id() == ancestor)
    }

    /// Best common ancestor of two commits
    ///
    /// Returns `None` when the commits share no history.
    pub fn merge_base(&self, source: &CommitId, target: &CommitId) -> Result<Option<CommitId>> {
        self.get(source)?;
        self.get(target)?;

        let mut states: HashMap<&CommitId, VisitState> = HashMap::new();
        for commit in self.ancestors(source) {
            *states.entry(commit.id()).or_insert(VisitState::NONE) |=
                VisitState::VISITED_FROM_SOURCE;
        }

        for commit in self.ancestors(target) {
            let state = states.entry(commit.id()).or_insert(VisitState::NONE);
            *state |= VisitState::VISITED_FROM_TARGET;

            if state.contains(VisitState::VISITED_FROM_BOTH) {
                debug_log!("graph: merge base of {source} and {target} is {}", commit.id());
                return Ok(Some(commit.id().clone()));
            }
        }

        Ok(None)
    }
}

/// Iterator over a commit and its ancestors, newest first
#[derive(Debug)]
pub struct Ancestors<'g> {
    graph: &'g CommitGraph,
    next: Option<&'g Commit>,
}

impl<'g> Iterator for Ancestors<'g> {
    type Item = &'g Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent().and_then(|parent| self.graph.find(parent));

        Some(current)
    }
}
