use crate::areas::head::{HEAD_REF_NAME, HeadState};
use crate::artifacts::snapshot::{CommitView, Snapshot};
use colored::Colorize;
use std::fmt;

const INDENT: usize = 2;

impl CommitView {
    fn decoration(&self, head: &HeadState) -> String {
        let mut names = Vec::new();

        if self.is_head && head.is_detached() {
            names.push(HEAD_REF_NAME.cyan().bold().to_string());
        }

        for branch in &self.branches {
            match head {
                HeadState::Attached(current) if current == branch => names.push(
                    format!("{HEAD_REF_NAME} -> {}", branch.to_string().green().bold())
                        .cyan()
                        .bold()
                        .to_string(),
                ),
                _ => names.push(branch.to_string().green().bold().to_string()),
            }
        }

        if names.is_empty() {
            String::new()
        } else {
            format!(" ({})", names.join(", "))
        }
    }
}

impl fmt::Display for Snapshot {
    /// Newest commit first, in the spirit of `git log --oneline --graph`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for commit in self.commits.iter().rev() {
            let mut line = commit.id.to_string().yellow().to_string();

            if let Some(parent) = &commit.parent {
                line.push_str(&format!(" <- {parent}"));
            }
            line.push_str(&commit.decoration(&self.head));
            if commit.message != commit.id.as_ref() {
                line.push_str(&format!(" {}", commit.message));
            }

            if commit.reachable {
                writeln!(f, "* {line}")?;
            } else {
                writeln!(f, "{}", format!("  {line} [unreachable]").dimmed())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "reflog:")?;
        for entry in &self.reflog {
            writeln!(f, "{:>width$}{entry}", "", width = INDENT)?;
        }

        Ok(())
    }
}
