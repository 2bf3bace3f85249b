use crate::areas::refs::BranchPlacement;
use crate::areas::repository::Repository;
use crate::artifacts::snapshot::Snapshot;
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lessons::Lesson;

const SEED_LENGTH: usize = 3;

/// `C1 <- C2 <- C3` with `main` on `C3`; clicking a commit places a branch on it
#[derive(Debug, Clone)]
pub struct BranchPlayground {
    config: LessonConfig,
    repository: Repository,
}

impl BranchPlayground {
    pub fn new(config: LessonConfig) -> Result<Self> {
        let repository = Self::seed(&config)?;

        Ok(BranchPlayground { config, repository })
    }

    fn seed(config: &LessonConfig) -> Result<Repository> {
        Repository::linear(SEED_LENGTH, config.capacity, config.default_branch.clone())
    }

    /// Put the branch `name` on `commit`, creating it if needed
    ///
    /// A missing or blank name falls back to the configured placing branch.
    /// Placing a branch where it already is changes nothing.
    pub fn place_branch(&mut self, name: Option<&str>, commit: &str) -> Result<BranchPlacement> {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.config.placing_branch.as_ref());

        self.repository.branch(name, Some(commit))
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        self.repository.snapshot()
    }
}

impl Lesson for BranchPlayground {
    const TITLE: &'static str = "Branches";

    fn reset(&mut self) -> Result<()> {
        self.repository = Self::seed(&self.config)?;
        Ok(())
    }
}
