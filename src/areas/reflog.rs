//! Reflog
//!
//! Append-only history of HEAD movements, newest entry first. The log is
//! seeded with a single `commit: initial` entry, grows with every operation
//! that moves HEAD or destroys a pointer, and is never truncated: even after a
//! hard reset the commit HEAD used to point at can be found again through it.
//!
//! Entries are addressed the way git addresses them: `HEAD@{0}` is the newest
//! entry, `HEAD@{1}` the one before it, and so on.

use crate::artifacts::objects::commit_id::CommitId;
use std::collections::VecDeque;

/// Description of the entry every reflog starts with
pub const SEED_ENTRY: &str = "commit: initial";

/// Date layout of `git reflog --date=iso`
const ISO_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflogEntry {
    description: String,
    /// Position in recording order, starting at 0 for the seed entry
    order: u64,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Commit HEAD resolved to before the operation
    from: Option<CommitId>,
    /// Commit HEAD resolves to after the operation
    to: Option<CommitId>,
}

impl ReflogEntry {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    pub fn from(&self) -> Option<&CommitId> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&CommitId> {
        self.to.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct Reflog {
    entries: VecDeque<ReflogEntry>,
    next_order: u64,
}

impl Default for Reflog {
    fn default() -> Self {
        Reflog::seeded(None)
    }
}

impl Reflog {
    /// Start a reflog whose seed entry points at `initial`
    pub fn seeded(initial: Option<CommitId>) -> Self {
        let mut reflog = Reflog {
            entries: VecDeque::new(),
            next_order: 0,
        };
        reflog.record(SEED_ENTRY, None, initial);
        reflog
    }

    /// Prepend an entry; it becomes `HEAD@{0}`
    pub fn record(
        &mut self,
        description: impl Into<String>,
        from: Option<CommitId>,
        to: Option<CommitId>,
    ) -> &ReflogEntry {
        let entry = ReflogEntry {
            description: description.into(),
            order: self.next_order,
            timestamp: chrono::Local::now().fixed_offset(),
            from,
            to,
        };

        debug_log!("reflog: HEAD@{{0}}: {}", entry.description);

        self.next_order += 1;
        self.entries.push_front(entry);
        &self.entries[0]
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &ReflogEntry> {
        self.entries.iter()
    }

    /// Entry `HEAD@{n}`
    pub fn get(&self, n: usize) -> Option<&ReflogEntry> {
        self.entries.get(n)
    }

    /// Commit HEAD resolved to `n` movements ago
    pub fn position(&self, n: usize) -> Option<&CommitId> {
        self.get(n).and_then(ReflogEntry::to)
    }

    /// Commit HEAD moved away from in entry `HEAD@{n}`
    pub fn departure(&self, n: usize) -> Option<&CommitId> {
        self.get(n).and_then(ReflogEntry::from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A reflog always holds at least its seed entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines as shown by `git reflog`: `HEAD@{n}: <description>`
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("HEAD@{{{index}}}: {}", entry.description))
            .collect()
    }

    /// Lines as shown by `git reflog --date=iso`: `HEAD@{<date>}: <description>`
    pub fn dated_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "HEAD@{{{}}}: {}",
                    entry.timestamp.format(ISO_DATE_FORMAT),
                    entry.description
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;

    fn id(label: &str) -> CommitId {
        CommitId::try_parse(label.to_string()).expect("valid commit label")
    }

    #[test]
    fn new_reflog_holds_the_seed_entry() {
        let reflog = Reflog::seeded(Some(id("C2")));

        assert_eq!(reflog.len(), 1);
        assert_eq!(reflog.lines(), vec!["HEAD@{0}: commit: initial"]);
        assert_eq!(reflog.position(0), Some(&id("C2")));
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut reflog = Reflog::seeded(Some(id("C2")));

        reflog.record("reset: moving to HEAD~1", Some(id("C2")), Some(id("C1")));
        reflog.record("checkout: moving to C2", Some(id("C1")), Some(id("C2")));

        assert_eq!(
            reflog.lines(),
            vec![
                "HEAD@{0}: checkout: moving to C2",
                "HEAD@{1}: reset: moving to HEAD~1",
                "HEAD@{2}: commit: initial",
            ]
        );
    }

    #[test]
    fn order_grows_monotonically() {
        let mut reflog = Reflog::default();
        for step in 0..5 {
            reflog.record(format!("commit: C{step}"), None, None);
        }

        let orders = reflog.entries().map(ReflogEntry::order).collect::<Vec<_>>();
        assert_eq!(orders, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn previous_position_survives_a_hard_reset() {
        let mut reflog = Reflog::seeded(Some(id("C2")));

        reflog.record("reset: moving to HEAD~1", Some(id("C2")), Some(id("C1")));

        assert_eq!(reflog.position(0), Some(&id("C1")));
        assert_eq!(reflog.position(1), Some(&id("C2")));
    }

    #[test]
    fn departure_names_the_commit_head_left() {
        let mut reflog = Reflog::seeded(Some(id("C2")));

        reflog.record("reset: moving to HEAD~1", Some(id("C2")), Some(id("C1")));

        assert_eq!(reflog.departure(0), Some(&id("C2")));
        assert_eq!(reflog.departure(1), None);
        assert_eq!(reflog.get(0).and_then(ReflogEntry::to), Some(&id("C1")));
    }

    #[test]
    fn dated_lines_carry_the_entry_timestamps() {
        let before = chrono::Local::now().fixed_offset();
        let mut reflog = Reflog::seeded(Some(id("C1")));
        reflog.record("commit: C2", Some(id("C1")), Some(id("C2")));

        let timestamps = reflog
            .entries()
            .map(ReflogEntry::timestamp)
            .collect::<Vec<_>>();
        assert!(timestamps.iter().all(|timestamp| *timestamp >= before));
        assert!(timestamps[0] >= timestamps[1]);

        let dated = Regex::new(r"^HEAD@\{\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{4}\}: ")
            .expect("Invalid dated reflog regex");
        let lines = reflog.dated_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| dated.is_match(line)));
        assert!(lines[0].ends_with(": commit: C2"));
        assert!(lines[1].ends_with(": commit: initial"));
    }
}
