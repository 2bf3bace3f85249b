//! Staging pipeline
//!
//! Follows a single file through the areas it passes on its way to the
//! remote: working directory, staging area, local repository and remote.
//! The file moves strictly forward, one area at a time.

use crate::errors::{Result, SimulationError};

/// File the three-areas lesson tracks
pub const DEFAULT_FILE: &str = "file.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FileState {
    #[default]
    Working,
    Staged,
    Committed,
    Pushed,
}

impl FileState {
    /// Area the file sits in while in this state
    pub fn area(&self) -> &'static str {
        match self {
            FileState::Working => "working directory",
            FileState::Staged => "staging area",
            FileState::Committed => "repository",
            FileState::Pushed => "remote",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileState::Working => "working",
            FileState::Staged => "staged",
            FileState::Committed => "committed",
            FileState::Pushed => "pushed",
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingPipeline {
    file: String,
    state: FileState,
}

impl Default for StagingPipeline {
    fn default() -> Self {
        StagingPipeline::new(DEFAULT_FILE.to_string())
    }
}

impl StagingPipeline {
    pub fn new(file: String) -> Self {
        StagingPipeline {
            file,
            state: FileState::Working,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn state(&self) -> FileState {
        self.state
    }

    /// Stage the file
    ///
    /// Only moves a file that is still in the working directory; anything else
    /// is tolerated as "nothing to add". Returns whether the file moved.
    pub fn add(&mut self) -> bool {
        if self.state != FileState::Working {
            debug_log!("staging: nothing to add ({})", self.state);
            return false;
        }

        self.advance(FileState::Staged);
        true
    }

    /// Record the staged file in the repository
    ///
    /// # Errors
    ///
    /// `NothingStaged` unless the file is staged.
    pub fn commit(&mut self) -> Result<FileState> {
        if self.state != FileState::Staged {
            return Err(SimulationError::NothingStaged);
        }

        Ok(self.advance(FileState::Committed))
    }

    /// Send the committed file to the remote
    ///
    /// # Errors
    ///
    /// `NothingCommitted` unless the file is committed.
    pub fn push(&mut self) -> Result<FileState> {
        if self.state != FileState::Committed {
            return Err(SimulationError::NothingCommitted);
        }

        Ok(self.advance(FileState::Pushed))
    }

    /// Put the file back in the working directory
    pub fn restart(&mut self) {
        self.state = FileState::Working;
    }

    fn advance(&mut self, next: FileState) -> FileState {
        debug_log!("staging: {} {} -> {}", self.file, self.state, next);
        self.state = next;
        next
    }
}
