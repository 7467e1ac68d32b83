use std::path::{Path, PathBuf};

use abduel_game::{MatchRecord, MatchRecorder};
use log::{info, warn};

use crate::{
    dto::{self, MatchFileDto},
    persistence::{self, StoreError},
};

/// Finished games, kept in memory and mirrored to a JSON file.
///
/// Every entry in the file carries the schema version it was written with.
/// Entries that do not match the schema of their version are dropped when the
/// file is read, and the next save writes back only the valid ones.
#[derive(Debug)]
pub struct MatchStore {
    path: PathBuf,
    records: Vec<MatchRecord>,
}

impl MatchStore {
    /// Creates an empty store that will write to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: vec![],
        }
    }

    /// Reads the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = Self::empty(path);
        if let Some(text) = persistence::read_optional(&store.path)? {
            store.records = parse_records(&text)?;
            info!(
                "loaded {} match records from {}",
                store.records.len(),
                store.path.display()
            );
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let file = MatchFileDto {
            records: self
                .records
                .iter()
                .map(dto::encode)
                .collect::<Result<_, _>>()?,
        };
        let text = serde_json::to_string_pretty(&file)?;
        persistence::write_atomic(&self.path, &text)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.save()
    }
}

impl MatchRecorder for MatchStore {
    fn append_match_record(&mut self, record: MatchRecord) {
        self.records.push(record);
        if let Err(e) = self.save() {
            warn!("failed to save match records to {}: {e}", self.path.display());
        }
    }
}

fn parse_records(text: &str) -> Result<Vec<MatchRecord>, StoreError> {
    let file = serde_json::from_str::<MatchFileDto>(text)?;
    let records = file
        .records
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match dto::decode(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("discarding match record {i}: {e}");
                None
            }
        })
        .collect();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::{fs, time::SystemTime};

    use abduel_core::GuessRecord;
    use abduel_game::Winner;
    use serde_json::json;

    use super::*;
    use crate::dto::truncate_to_millis;

    fn record(id: u64, winner: Winner) -> MatchRecord {
        let guess = GuessRecord::new("1234".parse().unwrap(), "0A2B".parse().unwrap());
        MatchRecord {
            id,
            timestamp: truncate_to_millis(SystemTime::now()),
            winner,
            human_attempts: 1,
            computer_attempts: 0,
            total_rounds: 1,
            human_history: vec![guess],
            computer_history: vec![],
        }
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = MatchStore::open(dir.path().join("matches.json")).unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_append_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");

        let mut store = MatchStore::open(&path).unwrap();
        store.append_match_record(record(1, Winner::None));
        store.append_match_record(record(2, Winner::Human));

        let reopened = MatchStore::open(&path).unwrap();
        assert_eq!(reopened.records(), store.records());
        assert_eq!(reopened.records()[1].winner, Winner::Human);
    }

    #[test]
    fn test_invalid_entries_are_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");

        let mut store = MatchStore::empty(&path);
        store.append_match_record(record(1, Winner::Draw));
        let valid = dto::encode(&store.records()[0]).unwrap();
        let file = json!({
            "records": [
                valid,
                {"version": 2, "record": {}},
                {"id": 3, "winner": "human"},
                {"version": 1, "record": {"id": 4}},
            ]
        });
        fs::write(&path, file.to_string()).unwrap();

        let mut store = MatchStore::open(&path).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id, 1);

        store.clear().unwrap();
        assert!(MatchStore::open(&path).unwrap().records().is_empty());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matches.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(
            MatchStore::open(&path),
            Err(StoreError::Json(_))
        ));
    }
}
