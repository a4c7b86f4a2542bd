//! High score persistence.
//!
//! Scores live in a small JSON file next to the binary. Load failures are
//! treated as an empty table so a missing or corrupt file never blocks play.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};

pub const SCORE_FILE: &str = "brickdrop_scores.json";

const MAX_ENTRIES: usize = 10;
const FALLBACK_NAME: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub date: String,
}

/// The top ten table, ordered by score descending.
pub struct ScoreBook {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl ScoreBook {
    /// Open the table at `path`, starting empty when the file is unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path).unwrap_or_default();
        Self { path, entries }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Whether `score` would earn a spot in the table.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_ENTRIES
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Insert a score, returning its 1-based rank if it made the table.
    ///
    /// A blank name records as "Anonymous". Ties rank below existing entries
    /// with the same score.
    pub fn submit(&mut self, name: &str, score: u32) -> Option<usize> {
        let name = name.trim();
        let entry = ScoreEntry {
            name: if name.is_empty() {
                FALLBACK_NAME.to_string()
            } else {
                name.to_string()
            },
            score,
            date: Local::now().format("%Y-%m-%d").to_string(),
        };

        let rank = self
            .entries
            .iter()
            .position(|e| e.score < score)
            .unwrap_or(self.entries.len());
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);

        (rank < MAX_ENTRIES).then_some(rank + 1)
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

fn load_entries(path: &Path) -> Result<Vec<ScoreEntry>> {
    let mut file = File::open(path)?;
    let mut json = String::new();
    file.read_to_string(&mut json)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("brickdrop_scores_{tag}_{}.json", std::process::id()))
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let book = ScoreBook::open(temp_path("missing"));
        assert!(book.entries().is_empty());
    }

    #[test]
    fn test_submit_orders_by_score_descending() {
        let mut book = ScoreBook::open(temp_path("order"));
        book.submit("LOW", 100);
        book.submit("HIGH", 900);
        book.submit("MID", 500);

        let scores: Vec<u32> = book.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 500, 100]);
    }

    #[test]
    fn test_submit_reports_rank() {
        let mut book = ScoreBook::open(temp_path("rank"));
        assert_eq!(book.submit("A", 300), Some(1));
        assert_eq!(book.submit("B", 700), Some(1));
        assert_eq!(book.submit("C", 500), Some(2));
    }

    #[test]
    fn test_ties_rank_below_existing_entries() {
        let mut book = ScoreBook::open(temp_path("ties"));
        book.submit("FIRST", 500);
        assert_eq!(book.submit("SECOND", 500), Some(2));
        assert_eq!(book.entries()[0].name, "FIRST");
    }

    #[test]
    fn test_table_keeps_ten_entries() {
        let mut book = ScoreBook::open(temp_path("cap"));
        for i in 0..12 {
            book.submit("P", 1000 + i * 10);
        }
        assert_eq!(book.entries().len(), 10);
        assert_eq!(book.entries()[0].score, 1110);
        assert_eq!(book.entries()[9].score, 1020);
    }

    #[test]
    fn test_score_below_full_table_is_rejected() {
        let mut book = ScoreBook::open(temp_path("reject"));
        for i in 0..10 {
            book.submit("P", 1000 + i * 10);
        }
        assert!(!book.qualifies(500));
        assert_eq!(book.submit("LATE", 500), None);
        assert_eq!(book.entries().len(), 10);
    }

    #[test]
    fn test_zero_score_never_qualifies() {
        let book = ScoreBook::open(temp_path("zero"));
        assert!(!book.qualifies(0));
    }

    #[test]
    fn test_blank_name_becomes_anonymous() {
        let mut book = ScoreBook::open(temp_path("anon"));
        book.submit("   ", 400);
        assert_eq!(book.entries()[0].name, "Anonymous");
    }

    #[test]
    fn test_date_is_stamped() {
        let mut book = ScoreBook::open(temp_path("date"));
        book.submit("D", 250);
        let date = &book.entries()[0].date;
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn test_save_then_open_round_trips() {
        let path = temp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut book = ScoreBook::open(&path);
        book.submit("ADA", 1200);
        book.submit("GRACE", 800);
        book.save().unwrap();

        let reopened = ScoreBook::open(&path);
        assert_eq!(reopened.entries(), book.entries());

        let _ = std::fs::remove_file(&path);
    }
}
