use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::snapshot::Snapshot;
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lessons::Lesson;

/// A single branch that grows one commit per click, until the graph is full
#[derive(Debug, Clone)]
pub struct CommitChain {
    config: LessonConfig,
    repository: Repository,
}

impl CommitChain {
    pub fn new(config: LessonConfig) -> Result<Self> {
        let repository = Self::seed(&config)?;

        Ok(CommitChain { config, repository })
    }

    fn seed(config: &LessonConfig) -> Result<Repository> {
        Repository::linear(1, config.capacity, config.default_branch.clone())
    }

    /// Append a commit on the tip
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` once the graph is full; the chain is left as is.
    pub fn commit(&mut self) -> Result<Commit> {
        self.repository.commit()
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        self.repository.snapshot()
    }
}

impl Lesson for CommitChain {
    const TITLE: &'static str = "Commits";

    fn reset(&mut self) -> Result<()> {
        self.repository = Self::seed(&self.config)?;
        Ok(())
    }
}
