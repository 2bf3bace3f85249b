use crate::common::world::{commit_id, config, labels_on, random_branch};
use bit_lessons::areas::commit_graph::CommitGraph;
use bit_lessons::areas::head::HeadState;
use bit_lessons::areas::staging::FileState;
use bit_lessons::artifacts::branch::branch_name::BranchName;
use bit_lessons::artifacts::history::{ResetKind, RewriteMode};
use bit_lessons::config::LessonConfig;
use bit_lessons::errors::SimulationError;
use bit_lessons::lessons::Lesson;
use bit_lessons::lessons::branches::BranchPlayground;
use bit_lessons::lessons::head_pointer::HeadPointer;
use bit_lessons::lessons::history::HistoryRewrite;
use bit_lessons::lessons::reflog::{RecoveryState, ReflogRecovery};
use bit_lessons::lessons::three_areas::ThreeAreas;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

mod common;

proptest! {
    #[test]
    fn chain_grows_one_commit_per_append_until_full(capacity in 1usize..12, appends in 0usize..16) {
        let mut graph = CommitGraph::new(capacity);
        let mut tip = None;

        for call in 0..appends {
            match graph.append_commit(tip.as_ref()) {
                Ok(commit) => {
                    prop_assert!(call < capacity);
                    prop_assert_eq!(commit.parent(), tip.as_ref());
                    tip = Some(commit.id().clone());
                }
                Err(error) => {
                    prop_assert!(call >= capacity);
                    prop_assert_eq!(error, SimulationError::CapacityExceeded { capacity });
                }
            }
        }

        prop_assert_eq!(graph.len(), appends.min(capacity));
    }
}

#[rstest]
fn placing_a_branch_twice_keeps_one_label(config: LessonConfig, random_branch: String) {
    let mut lesson = BranchPlayground::new(config).expect("seed fits");

    lesson
        .place_branch(Some(&random_branch), "C1")
        .expect("valid placement");
    lesson
        .place_branch(Some(&random_branch), "C2")
        .expect("valid placement");

    let snapshot = lesson.snapshot().expect("consistent repository");
    let named: Vec<_> = snapshot
        .branches
        .iter()
        .filter(|branch| branch.name().as_ref() == random_branch)
        .collect();
    assert_eq!(named.len(), 1);
    assert_eq!(named[0].target(), &commit_id("C2"));
    assert_eq!(labels_on(&snapshot, "C1"), Vec::<String>::new());
}

#[rstest]
fn attached_head_follows_its_branch(config: LessonConfig) {
    let mut lesson = HeadPointer::new(config).expect("seed fits");
    lesson.checkout_branch("feature").expect("known branch");

    let mut repository = lesson.repository().clone();
    repository
        .branch("feature", Some("C1"))
        .expect("valid placement");

    assert_eq!(
        repository.head().state(),
        &HeadState::Attached(
            BranchName::try_parse("feature".to_string()).expect("valid branch name")
        )
    );
    assert_eq!(repository.head_commit(), Ok(commit_id("C1")));
}

#[rstest]
#[case(ResetKind::Soft)]
#[case(ResetKind::Mixed)]
#[case(ResetKind::Hard)]
fn lost_work_is_reachable_again_after_recovery(config: LessonConfig, #[case] kind: ResetKind) {
    let mut lesson = ReflogRecovery::new(config).expect("seed fits");

    lesson.discard(kind).expect("C1 exists");
    assert_eq!(lesson.state(), RecoveryState::Deleted);
    let restored = lesson.recover().expect("work was lost");

    assert!(lesson.repository().is_reachable(&restored));
    assert_eq!(lesson.state(), RecoveryState::Normal);
}

#[test]
fn push_needs_a_commit_first() {
    let mut lesson = ThreeAreas::default();

    assert_eq!(lesson.push(), Err(SimulationError::NothingCommitted));
    lesson.add();
    assert_eq!(lesson.push(), Err(SimulationError::NothingCommitted));
    lesson.commit().expect("file is staged");
    assert_eq!(lesson.push(), Ok(FileState::Pushed));
}

#[rstest]
fn reset_scenario(config: LessonConfig) {
    let mut lesson = HistoryRewrite::with_mode(config, RewriteMode::Reset).expect("seed fits");

    lesson.reset(ResetKind::Hard).expect("C2 exists");

    let snapshot = lesson.snapshot().expect("consistent repository");
    assert_eq!(snapshot.branch_target("main"), Some(&commit_id("C2")));
    assert_eq!(snapshot.head_label, "HEAD -> main");
    assert_eq!(snapshot.head_commit, commit_id("C2"));
    let c3 = snapshot.commit(&commit_id("C3")).expect("C3 still allocated");
    assert!(c3.branches.is_empty());
    assert!(!c3.reachable);
}

#[rstest]
fn revert_scenario(config: LessonConfig) {
    let mut lesson = HistoryRewrite::with_mode(config, RewriteMode::Revert).expect("seed fits");

    lesson.revert(Some("C2")).expect("C2 exists");

    let snapshot = lesson.snapshot().expect("consistent repository");
    let chain: Vec<_> = snapshot
        .commits
        .iter()
        .map(|view| (view.id.to_string(), view.parent.as_ref().map(ToString::to_string)))
        .collect();
    assert_eq!(
        chain,
        vec![
            ("C1".to_string(), None),
            ("C2".to_string(), Some("C1".to_string())),
            ("C2'".to_string(), Some("C2".to_string())),
        ]
    );
    assert_eq!(snapshot.branch_target("main"), Some(&commit_id("C2'")));
    assert!(snapshot.commit(&commit_id("C2")).is_some_and(|view| view.reachable));
}

#[rstest]
fn rebase_scenario(config: LessonConfig) {
    let mut lesson = HistoryRewrite::with_mode(config, RewriteMode::Rebase).expect("seed fits");

    lesson.rebase(Some("main")).expect("rebase applies");

    let snapshot = lesson.snapshot().expect("consistent repository");
    let copy = snapshot.commit(&commit_id("C3'")).expect("copy exists");
    assert_eq!(copy.parent, Some(commit_id("C2")));
    assert_eq!(snapshot.branch_target("feature"), Some(&commit_id("C3'")));
    let original = snapshot.commit(&commit_id("C3")).expect("original still allocated");
    assert!(original.branches.is_empty());
    assert_eq!(snapshot.orphans().count(), 1);
}

#[rstest]
fn lessons_do_not_share_state(config: LessonConfig) {
    let mut first = HistoryRewrite::new(config.clone()).expect("seed fits");
    let second = HistoryRewrite::new(config).expect("seed fits");

    first.reset(ResetKind::Hard).expect("C2 exists");

    assert_eq!(second.repository().head_commit(), Ok(commit_id("C3")));
    Lesson::reset(&mut first).expect("seed fits");
    assert_eq!(first.repository().head_commit(), Ok(commit_id("C3")));
}
