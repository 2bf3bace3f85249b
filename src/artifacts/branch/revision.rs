use crate::areas::head::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::{Result, SimulationError};
use regex::Regex;
use std::sync::LazyLock;

static PARENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PARENT_REGEX).expect("Invalid parent regex"));
static ANCESTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANCESTOR_REGEX).expect("Invalid ancestor regex"));

/// Represents a revision expression that identifies a commit.
///
/// Supports multiple formats:
/// - `HEAD` and its alias `@`
/// - Branch names: `main`, `feature/login`
/// - Commit labels: `C2`, `C3'`
/// - Parent notation: `<revision>^` (e.g., `main^`, `HEAD^`)
/// - Ancestor notation: `<revision>~<n>` (e.g., `HEAD~1`, `main~2`)
///
/// Names are looked up as branches first and as commit labels second, so a
/// branch may shadow a commit of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    /// A branch name or a commit label, decided during resolution
    Ref(String),
    /// The parent of a revision (e.g., HEAD^)
    Parent(Box<Revision>),
    /// The Nth ancestor of a revision (e.g., HEAD~3)
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn try_parse(revision: &str) -> Result<Self> {
        let revision = revision.trim();
        if revision.is_empty() {
            return Err(SimulationError::UnknownCommit(revision.to_string()));
        }

        if let Some(captures) = PARENT.captures(revision) {
            return Ok(Revision::Parent(Box::new(Self::try_parse(&captures[1])?)));
        }

        if let Some(captures) = ANCESTOR.captures(revision) {
            let generations = captures[2]
                .parse::<usize>()
                .map_err(|_| SimulationError::UnknownCommit(revision.to_string()))?;
            return Ok(Revision::Ancestor(
                Box::new(Self::try_parse(&captures[1])?),
                generations,
            ));
        }

        let name = REF_ALIASES.get(revision).copied().unwrap_or(revision);
        if name == HEAD_REF_NAME {
            Ok(Revision::Head)
        } else {
            Ok(Revision::Ref(name.to_string()))
        }
    }

    pub fn resolve(&self, repository: &Repository) -> Result<CommitId> {
        match self {
            Revision::Head => repository.head_commit(),
            Revision::Ref(name) => Self::resolve_ref(name, repository),
            Revision::Parent(base) => {
                let base = base.resolve(repository)?;
                repository.graph().parent_of(&base).cloned()
            }
            Revision::Ancestor(base, generations) => {
                let mut commit = base.resolve(repository)?;
                for _ in 0..*generations {
                    commit = repository.graph().parent_of(&commit)?.clone();
                }

                Ok(commit)
            }
        }
    }

    fn resolve_ref(name: &str, repository: &Repository) -> Result<CommitId> {
        if let Some(branch) = repository.refs().find_by_str(name) {
            return Ok(branch.target().clone());
        }

        if CommitId::looks_like_commit(name) {
            let commit = CommitId::try_parse(name.to_string())?;
            repository.graph().get(&commit)?;
            return Ok(commit);
        }

        Err(SimulationError::UnknownBranch(name.to_string()))
    }
}
