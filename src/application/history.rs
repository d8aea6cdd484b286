// Bounded in-memory record of solved problems, newest first

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::models::{HistoryEntry, MathProblem, Solution};

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug)]
pub struct SolveHistory {
    capacity: usize,
    next_id: u64,
    entries: VecDeque<HistoryEntry>,
}

impl SolveHistory {
    /// A capacity of zero disables recording
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_id: 1,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a solved problem, evicting the oldest entry when full.
    /// Returns the id of the new entry.
    pub fn record(&mut self, problem: &MathProblem, solution: &Solution) -> Option<u64> {
        if self.capacity == 0 {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(HistoryEntry {
            id,
            kind: problem.kind(),
            input: problem.describe(),
            summary: solution.summary(),
            recorded_at_ms: now_ms(),
        });

        Some(id)
    }

    /// Up to `limit` most recent entries; zero returns everything
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let take = if limit == 0 { self.entries.len() } else { limit };
        self.entries.iter().take(take).cloned().collect()
    }
}

impl Default for SolveHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProblemKind;

    fn value(v: f64) -> (MathProblem, Solution) {
        (MathProblem::expression(v.to_string()), Solution::Value(v))
    }

    #[test]
    fn newest_entries_come_first() {
        let mut history = SolveHistory::new(5);
        for v in [1.0, 2.0, 3.0] {
            let (p, s) = value(v);
            history.record(&p, &s);
        }

        let recent = history.recent(0);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].summary, "3");
        assert_eq!(recent[0].id, 3);
        assert_eq!(recent[2].summary, "1");
        assert_eq!(recent[0].kind, ProblemKind::Expression);
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut history = SolveHistory::new(2);
        for v in [1.0, 2.0, 3.0] {
            let (p, s) = value(v);
            history.record(&p, &s);
        }

        assert_eq!(history.len(), 2);
        let ids: Vec<u64> = history.recent(0).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn limit_and_disabled_history() {
        let mut history = SolveHistory::default();
        for v in [1.0, 2.0, 3.0] {
            let (p, s) = value(v);
            history.record(&p, &s);
        }
        assert_eq!(history.recent(1).len(), 1);

        let mut disabled = SolveHistory::new(0);
        let (p, s) = value(1.0);
        assert_eq!(disabled.record(&p, &s), None);
        assert!(disabled.is_empty());
    }
}
