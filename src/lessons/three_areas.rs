use crate::areas::staging::StagingPipeline;
use crate::errors::Result;
use crate::lessons::Lesson;

/// The working directory, staging area, repository and remote of one file
pub type ThreeAreas = StagingPipeline;

impl Lesson for StagingPipeline {
    const TITLE: &'static str = "The Three Areas";

    fn reset(&mut self) -> Result<()> {
        self.restart();
        Ok(())
    }
}
