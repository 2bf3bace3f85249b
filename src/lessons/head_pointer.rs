use crate::areas::commit_graph::CommitGraph;
use crate::areas::head::{Checkout, Head};
use crate::areas::reflog::Reflog;
use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::snapshot::Snapshot;
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lessons::Lesson;

/// `C1 <- C2 <- C3` with the placing branch on `C2`, the default branch on
/// `C3` and HEAD attached to the default branch
#[derive(Debug, Clone)]
pub struct HeadPointer {
    config: LessonConfig,
    repository: Repository,
}

impl HeadPointer {
    pub fn new(config: LessonConfig) -> Result<Self> {
        let repository = Self::seed(&config)?;

        Ok(HeadPointer { config, repository })
    }

    fn seed(config: &LessonConfig) -> Result<Repository> {
        let graph = CommitGraph::linear(3, config.capacity)?;
        let second = CommitId::from_sequence(2);
        let third = CommitId::from_sequence(3);

        let mut refs = Refs::new();
        refs.create_or_move_branch(&graph, config.placing_branch.clone(), &second)?;
        refs.create_or_move_branch(&graph, config.default_branch.clone(), &third)?;

        Repository::new(
            graph,
            refs,
            Head::attached(config.default_branch.clone()),
            Reflog::seeded(Some(third)),
        )
    }

    /// Attach HEAD to a branch
    pub fn checkout_branch(&mut self, branch: &str) -> Result<Checkout> {
        let branch = BranchName::try_parse(branch.to_string())?;
        self.repository.checkout_branch(&branch)
    }

    /// Detach HEAD on a commit
    pub fn checkout_commit(&mut self, commit: &str) -> Result<Checkout> {
        let commit = CommitId::try_parse(commit.to_string())?;
        self.repository.checkout_commit(&commit)
    }

    /// Check out whatever `target` names, the way `git checkout` decides
    pub fn checkout(&mut self, target: &str) -> Result<Checkout> {
        self.repository.checkout(target)
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        self.repository.snapshot()
    }
}

impl Lesson for HeadPointer {
    const TITLE: &'static str = "HEAD";

    fn reset(&mut self) -> Result<()> {
        self.repository = Self::seed(&self.config)?;
        Ok(())
    }
}
