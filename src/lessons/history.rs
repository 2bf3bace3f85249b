//! Reset, revert and rebase on one small repository
//!
//! Exactly one mode is active at a time. Switching modes throws the current
//! repository away and rebuilds the seed of the new mode:
//!
//! - reset: `C1 <- C2 <- C3`, `main` on `C3`, HEAD on `main`
//! - revert: `C1 <- C2`, `main` on `C2`, HEAD on `main`
//! - rebase: `C1 <- C2` on `main` and `C1 <- C3` on `feature`, HEAD on `feature`
//!
//! Revert and rebase can be played once per mode session. Reset can be played
//! again with another kind; it returns to the same commit and replaces the
//! status of the previous call.

use crate::areas::commit_graph::CommitGraph;
use crate::areas::head::{HEAD_REF_NAME, Head};
use crate::areas::reflog::Reflog;
use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::history::{
    ChangeStatus, RebaseOutcome, ResetKind, ResetOutcome, RewriteMode, RewritePhase,
};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::snapshot::Snapshot;
use crate::config::LessonConfig;
use crate::errors::{Result, SimulationError};
use crate::lessons::Lesson;

/// Revision the reset mode walks back to
const RESET_REVISION: &str = "HEAD~1";

#[derive(Debug, Clone)]
pub struct HistoryRewrite {
    config: LessonConfig,
    mode: RewriteMode,
    phase: RewritePhase,
    repository: Repository,
    /// Where the last reset left the changes of the abandoned commit
    status: Option<ChangeStatus>,
    /// Commit the first reset of the session moved to
    reset_target: Option<CommitId>,
}

impl HistoryRewrite {
    pub fn new(config: LessonConfig) -> Result<Self> {
        Self::with_mode(config, RewriteMode::default())
    }

    pub fn with_mode(config: LessonConfig, mode: RewriteMode) -> Result<Self> {
        let repository = Self::seed(&config, mode)?;

        Ok(HistoryRewrite {
            config,
            mode,
            phase: RewritePhase::Initial,
            repository,
            status: None,
            reset_target: None,
        })
    }

    fn seed(config: &LessonConfig, mode: RewriteMode) -> Result<Repository> {
        match mode {
            RewriteMode::Reset => {
                Repository::linear(3, config.capacity, config.default_branch.clone())
            }
            RewriteMode::Revert => {
                Repository::linear(2, config.capacity, config.default_branch.clone())
            }
            RewriteMode::Rebase => {
                let mut graph = CommitGraph::linear(2, config.capacity)?;
                let fork = graph.append_commit(Some(&CommitId::from_sequence(1)))?;

                let mut refs = Refs::new();
                refs.create_or_move_branch(
                    &graph,
                    config.default_branch.clone(),
                    &CommitId::from_sequence(2),
                )?;
                refs.create_or_move_branch(&graph, config.placing_branch.clone(), fork.id())?;

                Repository::new(
                    graph,
                    refs,
                    Head::attached(config.placing_branch.clone()),
                    Reflog::seeded(Some(fork.id().clone())),
                )
            }
        }
    }

    /// Activate `mode` and rebuild its seed, even if it is already active
    pub fn set_mode(&mut self, mode: RewriteMode) -> Result<()> {
        *self = Self::with_mode(self.config.clone(), mode)?;
        debug_log!("history: mode set to {mode}");
        Ok(())
    }

    /// Start the active mode over from its seed
    pub fn reset_lesson(&mut self) -> Result<()> {
        self.set_mode(self.mode)
    }

    pub fn mode(&self) -> RewriteMode {
        self.mode
    }

    pub fn phase(&self) -> RewritePhase {
        self.phase
    }

    pub fn status(&self) -> Option<ChangeStatus> {
        self.status
    }

    pub fn tagline(&self) -> &'static str {
        self.mode.tagline()
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        self.repository.snapshot()
    }

    /// Move the current branch back one commit
    ///
    /// Every call lands on the commit the first call of the session moved
    /// to, whatever `kind` is, and writes a reflog entry.
    pub fn reset(&mut self, kind: ResetKind) -> Result<ResetOutcome> {
        self.ensure_mode(RewriteMode::Reset)?;

        let outcome = match &self.reset_target {
            Some(target) => {
                let target = target.to_string();
                self.repository.reset(&target, kind)?
            }
            None => self.repository.reset(RESET_REVISION, kind)?,
        };

        self.reset_target = Some(outcome.to.clone());
        self.status = Some(outcome.status);
        self.phase = RewritePhase::Done;
        Ok(outcome)
    }

    /// Revert `target`, HEAD when omitted
    pub fn revert(&mut self, target: Option<&str>) -> Result<Commit> {
        self.ensure_playable(RewriteMode::Revert)?;

        let target =
            Revision::try_parse(target.unwrap_or(HEAD_REF_NAME))?.resolve(&self.repository)?;
        let commit = self.repository.revert(&target)?;

        self.phase = RewritePhase::Done;
        Ok(commit)
    }

    /// Rebase the current branch onto `onto`, the default branch when omitted
    pub fn rebase(&mut self, onto: Option<&str>) -> Result<RebaseOutcome> {
        self.ensure_playable(RewriteMode::Rebase)?;

        let onto = onto.unwrap_or(self.config.default_branch.as_ref()).to_string();
        let outcome = self.repository.rebase(&onto)?;

        self.phase = RewritePhase::Done;
        Ok(outcome)
    }

    fn ensure_mode(&self, requested: RewriteMode) -> Result<()> {
        if self.mode != requested {
            return Err(SimulationError::WrongMode {
                active: self.mode,
                requested,
            });
        }

        Ok(())
    }

    fn ensure_playable(&self, requested: RewriteMode) -> Result<()> {
        self.ensure_mode(requested)?;

        if self.phase == RewritePhase::Done {
            return Err(SimulationError::AlreadyApplied(requested));
        }

        Ok(())
    }
}

impl Lesson for HistoryRewrite {
    const TITLE: &'static str = "Modifying History";

    fn reset(&mut self) -> Result<()> {
        self.reset_lesson()
    }
}
