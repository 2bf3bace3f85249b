use crate::areas::head::Checkout;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::Result;

/// Notice shown when HEAD leaves a branch for a bare commit
pub const DETACHMENT_NOTICE: &str = r#"You are in 'detached HEAD' state. You can look around, make experimental
changes and commit them, and you can discard any commits you make in this
state without impacting any branches by performing another checkout."#;

impl Repository {
    /// Check out a branch name, a commit label or any other revision
    ///
    /// Branch names attach HEAD; everything else detaches it on the commit
    /// the revision resolves to. `HEAD` itself keeps the current state.
    pub fn checkout(&mut self, target: &str) -> Result<Checkout> {
        let revision = Revision::try_parse(target)?;

        let branch = match &revision {
            Revision::Ref(name) => self.refs.find_by_str(name).map(|branch| branch.name().clone()),
            Revision::Head => self.current_branch().cloned(),
            _ => None,
        };

        match branch {
            Some(branch) => self.checkout_branch(&branch),
            None => {
                let commit = revision.resolve(self)?;
                self.checkout_commit(&commit)
            }
        }
    }

    pub fn checkout_branch(&mut self, branch: &BranchName) -> Result<Checkout> {
        self.head
            .checkout_branch(&self.refs, &mut self.reflog, branch)
    }

    pub fn checkout_commit(&mut self, commit: &CommitId) -> Result<Checkout> {
        self.head
            .checkout_commit(&self.graph, &self.refs, &mut self.reflog, commit)
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::head::HeadState;
    use crate::areas::repository::Repository;
    use crate::artifacts::branch::branch_name::BranchName;
    use crate::artifacts::objects::commit_id::CommitId;
    use crate::errors::SimulationError;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn id(label: &str) -> CommitId {
        CommitId::try_parse(label.to_string()).expect("valid commit label")
    }

    fn name(name: &str) -> BranchName {
        BranchName::try_parse(name.to_string()).expect("valid branch name")
    }

    #[fixture]
    fn repository() -> Repository {
        let mut repository = Repository::linear(3, 8, name("main")).expect("seed fits");
        repository.branch("feature", Some("C2")).expect("valid branch");
        repository
    }

    #[rstest]
    fn checkout_of_a_branch_attaches(mut repository: Repository) {
        let checkout = repository.checkout("feature").expect("known branch");

        assert_eq!(checkout.current, HeadState::Attached(name("feature")));
        assert_eq!(repository.head_commit(), Ok(id("C2")));
    }

    #[rstest]
    #[case("C1", "C1")]
    #[case("main~1", "C2")]
    #[case("@^^", "C1")]
    fn checkout_of_a_revision_detaches(
        mut repository: Repository,
        #[case] target: &str,
        #[case] expected: &str,
    ) {
        let checkout = repository.checkout(target).expect("resolvable revision");

        assert!(checkout.detached_now());
        assert_eq!(checkout.current, HeadState::Detached(id(expected)));
    }

    #[rstest]
    fn checkout_of_head_keeps_the_branch(mut repository: Repository) {
        let checkout = repository.checkout("HEAD").expect("HEAD resolves");

        assert!(checkout.is_noop());
        assert_eq!(checkout.current, HeadState::Attached(name("main")));
    }

    #[rstest]
    #[case("nope", SimulationError::UnknownBranch("nope".to_string()))]
    #[case("C8", SimulationError::UnknownCommit("C8".to_string()))]
    fn failed_checkout_keeps_head(
        mut repository: Repository,
        #[case] target: &str,
        #[case] expected: SimulationError,
    ) {
        let result = repository.checkout(target);

        assert_eq!(result, Err(expected));
        assert_eq!(repository.head().state(), &HeadState::Attached(name("main")));
        assert_eq!(repository.reflog().len(), 1);
    }
}
