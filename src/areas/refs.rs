//! Branch references
//!
//! The reference table maps branch names to commits of the commit graph.
//! Branches are movable labels: several of them may sit on the same commit,
//! and renderers stack those labels in the order the branches were created.
//!
//! ## Invariants
//!
//! - branch names are unique
//! - every branch targets a commit that exists in the commit graph

use crate::areas::commit_graph::CommitGraph;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Result, SimulationError};
use derive_new::new;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Branch {
    name: BranchName,
    target: CommitId,
}

impl Branch {
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn target(&self) -> &CommitId {
        &self.target
    }
}

/// What `create_or_move_branch` did to the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchUpdate {
    Created,
    Moved { from: CommitId },
    /// The branch already pointed at the requested commit
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPlacement {
    pub branch: Branch,
    pub update: BranchUpdate,
}

/// Branch references manager
#[derive(Debug, Clone, Default)]
pub struct Refs {
    /// Branches in creation order
    branches: Vec<Branch>,
}

impl Refs {
    pub fn new() -> Self {
        Refs::default()
    }

    /// Create `name` at `target`, or move it there if it already exists
    ///
    /// # Errors
    ///
    /// `UnknownCommit` if `target` is not part of `graph`; the table is left
    /// unchanged.
    pub fn create_or_move_branch(
        &mut self,
        graph: &CommitGraph,
        name: BranchName,
        target: &CommitId,
    ) -> Result<BranchPlacement> {
        graph.get(target)?;

        let update = match self.position(&name) {
            Some(index) => {
                let branch = &mut self.branches[index];
                if &branch.target == target {
                    BranchUpdate::Unchanged
                } else {
                    let from = std::mem::replace(&mut branch.target, target.clone());
                    BranchUpdate::Moved { from }
                }
            }
            None => {
                self.branches.push(Branch::new(name.clone(), target.clone()));
                BranchUpdate::Created
            }
        };

        debug_log!("refs: {name} -> {target} ({update:?})");

        Ok(BranchPlacement {
            branch: Branch::new(name, target.clone()),
            update,
        })
    }

    /// Move an existing branch, returning the commit it pointed at before
    ///
    /// # Errors
    ///
    /// - `UnknownBranch` if `name` does not exist
    /// - `UnknownCommit` if `target` is not part of `graph`
    pub fn update_branch(
        &mut self,
        graph: &CommitGraph,
        name: &BranchName,
        target: &CommitId,
    ) -> Result<CommitId> {
        graph.get(target)?;

        let index = self
            .position(name)
            .ok_or_else(|| SimulationError::UnknownBranch(name.to_string()))?;
        let previous = std::mem::replace(&mut self.branches[index].target, target.clone());

        debug_log!("refs: {name} moved from {previous} to {target}");
        Ok(previous)
    }

    /// Commit a branch points at
    pub fn resolve(&self, name: &BranchName) -> Result<&CommitId> {
        self.find(name)
            .map(Branch::target)
            .ok_or_else(|| SimulationError::UnknownBranch(name.to_string()))
    }

    pub fn find(&self, name: &BranchName) -> Option<&Branch> {
        self.branches.iter().find(|branch| &branch.name == name)
    }

    /// Look a branch up by a name typed by the user
    pub fn find_by_str(&self, name: &str) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|branch| branch.name.as_ref() == name)
    }

    pub fn contains(&self, name: &BranchName) -> bool {
        self.find(name).is_some()
    }

    fn position(&self, name: &BranchName) -> Option<usize> {
        self.branches.iter().position(|branch| &branch.name == name)
    }

    /// All branches in creation order
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Branches sitting on `commit`, in creation order (bottom of the stack first)
    pub fn branches_at(&self, commit: &CommitId) -> Vec<&Branch> {
        self.branches
            .iter()
            .filter(|branch| &branch.target == commit)
            .collect()
    }

    /// Map every targeted commit to the names sitting on it
    pub fn reverse_refs(&self) -> HashMap<CommitId, Vec<BranchName>> {
        self.branches
            .iter()
            .fold(HashMap::new(), |mut acc, branch| {
                acc.entry(branch.target.clone())
                    .or_insert_with(Vec::new)
                    .push(branch.name.clone());
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::commit_graph::DEFAULT_CAPACITY;
    use fake::Fake;
    use fake::faker::lorem::en::Word;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn id(label: &str) -> CommitId {
        CommitId::try_parse(label.to_string()).expect("valid commit label")
    }

    fn name(name: &str) -> BranchName {
        BranchName::try_parse(name.to_string()).expect("valid branch name")
    }

    #[fixture]
    fn graph() -> CommitGraph {
        CommitGraph::linear(3, DEFAULT_CAPACITY).expect("seed fits")
    }

    #[rstest]
    fn creating_a_new_branch_reports_created(graph: CommitGraph) {
        let mut refs = Refs::new();

        let placement = refs
            .create_or_move_branch(&graph, name("main"), &id("C3"))
            .expect("valid placement");

        assert_eq!(placement.update, BranchUpdate::Created);
        assert_eq!(refs.resolve(&name("main")), Ok(&id("C3")));
    }

    #[rstest]
    fn placing_twice_moves_instead_of_duplicating(graph: CommitGraph) {
        let mut refs = Refs::new();
        let branch_name = name(&Word().fake::<String>());

        refs.create_or_move_branch(&graph, branch_name.clone(), &id("C3"))
            .expect("valid placement");
        let placement = refs
            .create_or_move_branch(&graph, branch_name.clone(), &id("C1"))
            .expect("valid placement");

        assert_eq!(placement.update, BranchUpdate::Moved { from: id("C3") });
        assert_eq!(refs.branches().len(), 1);
        assert_eq!(refs.resolve(&branch_name), Ok(&id("C1")));
    }

    #[rstest]
    fn placing_on_the_same_commit_is_a_no_op(graph: CommitGraph) {
        let mut refs = Refs::new();

        refs.create_or_move_branch(&graph, name("main"), &id("C2"))
            .expect("valid placement");
        let placement = refs
            .create_or_move_branch(&graph, name("main"), &id("C2"))
            .expect("valid placement");

        assert_eq!(placement.update, BranchUpdate::Unchanged);
    }

    #[rstest]
    fn placing_on_an_unknown_commit_leaves_table_untouched(graph: CommitGraph) {
        let mut refs = Refs::new();

        let result = refs.create_or_move_branch(&graph, name("main"), &id("C7"));

        assert_eq!(result, Err(SimulationError::UnknownCommit("C7".to_string())));
        assert!(refs.branches().is_empty());
    }

    #[test]
    fn resolving_an_unknown_branch_fails() {
        let refs = Refs::new();

        assert_eq!(
            refs.resolve(&name("nope")),
            Err(SimulationError::UnknownBranch("nope".to_string()))
        );
    }

    #[rstest]
    fn update_branch_requires_an_existing_branch(graph: CommitGraph) {
        let mut refs = Refs::new();

        let result = refs.update_branch(&graph, &name("main"), &id("C1"));

        assert_eq!(result, Err(SimulationError::UnknownBranch("main".to_string())));
    }

    #[rstest]
    fn stacked_branches_keep_creation_order(graph: CommitGraph) {
        let mut refs = Refs::new();
        for branch in ["main", "feature", "bugfix"] {
            refs.create_or_move_branch(&graph, name(branch), &id("C3"))
                .expect("valid placement");
        }
        refs.create_or_move_branch(&graph, name("feature"), &id("C2"))
            .expect("valid placement");

        let stack = refs
            .branches_at(&id("C3"))
            .into_iter()
            .map(|branch| branch.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(stack, vec!["main", "bugfix"]);

        let reverse = refs.reverse_refs();
        assert_eq!(reverse.get(&id("C2")), Some(&vec![name("feature")]));
    }
}
