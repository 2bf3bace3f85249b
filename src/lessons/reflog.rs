use crate::areas::commit_graph::CommitGraph;
use crate::areas::head::Head;
use crate::areas::reflog::Reflog;
use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::artifacts::history::{ResetKind, ResetOutcome};
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::snapshot::Snapshot;
use crate::config::LessonConfig;
use crate::errors::{Result, SimulationError};
use crate::lessons::Lesson;

/// Message of the commit the lesson loses and recovers
pub const LOST_WORK_MESSAGE: &str = "My Work";

/// Revision the lesson resets to when it throws work away
const DISCARD_REVISION: &str = "HEAD~1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryState {
    /// The work commit is on `main`
    #[default]
    Normal,
    /// A reset moved `main` away; only the reflog knows the work commit
    Deleted,
}

/// `C1 <- C2` with `C2` holding the work; a hard reset loses it and the
/// reflog brings it back
#[derive(Debug, Clone)]
pub struct ReflogRecovery {
    config: LessonConfig,
    state: RecoveryState,
    repository: Repository,
}

impl ReflogRecovery {
    pub fn new(config: LessonConfig) -> Result<Self> {
        let repository = Self::seed(&config)?;

        Ok(ReflogRecovery {
            config,
            state: RecoveryState::Normal,
            repository,
        })
    }

    fn seed(config: &LessonConfig) -> Result<Repository> {
        let mut graph = CommitGraph::new(config.capacity);
        let root = graph.append_commit(None)?;
        let work =
            graph.append_commit_with_message(Some(root.id()), Some(LOST_WORK_MESSAGE.to_string()))?;

        let mut refs = Refs::new();
        refs.create_or_move_branch(&graph, config.default_branch.clone(), work.id())?;

        Repository::new(
            graph,
            refs,
            Head::attached(config.default_branch.clone()),
            Reflog::seeded(Some(work.id().clone())),
        )
    }

    pub fn state(&self) -> RecoveryState {
        self.state
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        self.repository.snapshot()
    }

    /// `git reset --hard HEAD~1`; does nothing once the work is already lost
    pub fn reset_hard(&mut self) -> Result<Option<ResetOutcome>> {
        self.discard(ResetKind::Hard)
    }

    /// Move `main` back one commit with any reset kind
    ///
    /// Returns `None` when the work is already lost.
    pub fn discard(&mut self, kind: ResetKind) -> Result<Option<ResetOutcome>> {
        if self.state == RecoveryState::Deleted {
            return Ok(None);
        }

        let outcome = self.repository.reset(DISCARD_REVISION, kind)?;
        self.state = RecoveryState::Deleted;
        Ok(Some(outcome))
    }

    /// Find the lost commit in the reflog and put `main` back on it
    ///
    /// The lost commit is the one the discarding reset moved HEAD away from,
    /// recorded in `HEAD@{0}`.
    ///
    /// # Errors
    ///
    /// `NothingToRecover` unless work was lost first.
    pub fn recover(&mut self) -> Result<CommitId> {
        if self.state != RecoveryState::Deleted {
            return Err(SimulationError::NothingToRecover);
        }

        let lost = self
            .repository
            .reflog()
            .departure(0)
            .cloned()
            .ok_or(SimulationError::NothingToRecover)?;
        let restored = self.repository.restore_commit(lost)?;
        self.state = RecoveryState::Normal;
        Ok(restored)
    }
}

impl Lesson for ReflogRecovery {
    const TITLE: &'static str = "Reflog";

    fn reset(&mut self) -> Result<()> {
        self.repository = Self::seed(&self.config)?;
        self.state = RecoveryState::Normal;
        Ok(())
    }
}
