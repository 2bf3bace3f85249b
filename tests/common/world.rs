use bit_lessons::artifacts::objects::commit_id::CommitId;
use bit_lessons::artifacts::snapshot::Snapshot;
use bit_lessons::config::LessonConfig;
use fake::Fake;
use fake::faker::lorem::en::Word;
use rstest::fixture;

#[fixture]
pub fn config() -> LessonConfig {
    LessonConfig::default()
}

/// Branch name that does not clash with the seeded `main` and `feature`
#[fixture]
pub fn random_branch() -> String {
    loop {
        let word: String = Word().fake();
        if word != "main" && word != "feature" {
            return format!("topic-{word}");
        }
    }
}

pub fn commit_id(label: &str) -> CommitId {
    CommitId::try_parse(label.to_string()).expect("valid commit label")
}

/// Labels of the branches stacked on `commit`, bottom first
pub fn labels_on(snapshot: &Snapshot, commit: &str) -> Vec<String> {
    snapshot
        .commit(&commit_id(commit))
        .map(|view| view.branches.iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}
