//! On-disk representation of match records.
//!
//! Codes and feedback are stored in their compact text forms (`"0472"`,
//! `"1A2B"`) and validated again when read back. Each record is wrapped with
//! the version of the schema it was written with.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use abduel_core::{Code, Feedback, GuessRecord};
use abduel_game::{MatchRecord, Winner};
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub(crate) const CURRENT_VERSION: u32 = 1;

/// The whole match file.
///
/// Entries are kept as raw JSON so a single unreadable entry does not make
/// the others unreadable.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct MatchFileDto {
    pub(crate) records: Vec<serde_json::Value>,
}

/// One entry of the match file: a schema version and the record in that schema.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StoredRecordDto {
    pub(crate) version: u32,
    pub(crate) record: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum WinnerDto {
    Human,
    Computer,
    Draw,
    None,
}

impl From<Winner> for WinnerDto {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::Human => Self::Human,
            Winner::Computer => Self::Computer,
            Winner::Draw => Self::Draw,
            Winner::None => Self::None,
        }
    }
}

impl From<WinnerDto> for Winner {
    fn from(winner: WinnerDto) -> Self {
        match winner {
            WinnerDto::Human => Self::Human,
            WinnerDto::Computer => Self::Computer,
            WinnerDto::Draw => Self::Draw,
            WinnerDto::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GuessRecordDto {
    pub(crate) guess: String,
    pub(crate) result: String,
}

impl From<GuessRecord> for GuessRecordDto {
    fn from(record: GuessRecord) -> Self {
        Self {
            guess: record.guess().to_string(),
            result: record.result().to_string(),
        }
    }
}

impl TryFrom<GuessRecordDto> for GuessRecord {
    type Error = String;

    fn try_from(value: GuessRecordDto) -> Result<Self, Self::Error> {
        let guess = value.guess.parse::<Code>().map_err(|e| e.to_string())?;
        let result = value
            .result
            .parse::<Feedback>()
            .map_err(|e| e.to_string())?;
        Ok(GuessRecord::new(guess, result))
    }
}

/// Version 1 of the match record schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MatchRecordV1Dto {
    pub(crate) id: u64,
    pub(crate) timestamp_ms: u64,
    pub(crate) winner: WinnerDto,
    pub(crate) human_attempts: u32,
    pub(crate) computer_attempts: u32,
    pub(crate) total_rounds: u32,
    pub(crate) human_history: Vec<GuessRecordDto>,
    pub(crate) computer_history: Vec<GuessRecordDto>,
}

impl From<&MatchRecord> for MatchRecordV1Dto {
    fn from(record: &MatchRecord) -> Self {
        let timestamp_ms = record
            .timestamp
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        Self {
            id: record.id,
            timestamp_ms,
            winner: record.winner.into(),
            human_attempts: record.human_attempts,
            computer_attempts: record.computer_attempts,
            total_rounds: record.total_rounds,
            human_history: record.human_history.iter().copied().map(Into::into).collect(),
            computer_history: record
                .computer_history
                .iter()
                .copied()
                .map(Into::into)
                .collect(),
        }
    }
}

impl TryFrom<MatchRecordV1Dto> for MatchRecord {
    type Error = String;

    fn try_from(value: MatchRecordV1Dto) -> Result<Self, Self::Error> {
        let human_history = value
            .human_history
            .into_iter()
            .map(GuessRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let computer_history = value
            .computer_history
            .into_iter()
            .map(GuessRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if usize::try_from(value.human_attempts).ok() != Some(human_history.len()) {
            return Err(format!(
                "human_attempts is {} but {} guesses are recorded",
                value.human_attempts,
                human_history.len()
            ));
        }
        if usize::try_from(value.computer_attempts).is_ok_and(|n| n < computer_history.len()) {
            return Err(format!(
                "computer_attempts is {} but {} guesses are recorded",
                value.computer_attempts,
                computer_history.len()
            ));
        }
        if value.total_rounds != value.human_attempts.max(value.computer_attempts) {
            return Err(format!("total_rounds {} does not match attempts", value.total_rounds));
        }

        Ok(MatchRecord {
            id: value.id,
            timestamp: UNIX_EPOCH + Duration::from_millis(value.timestamp_ms),
            winner: value.winner.into(),
            human_attempts: value.human_attempts,
            computer_attempts: value.computer_attempts,
            total_rounds: value.total_rounds,
            human_history,
            computer_history,
        })
    }
}

/// Wraps `record` in the current schema.
pub(crate) fn encode(record: &MatchRecord) -> Result<serde_json::Value, serde_json::Error> {
    let stored = StoredRecordDto {
        version: CURRENT_VERSION,
        record: serde_json::to_value(MatchRecordV1Dto::from(record))?,
    };
    serde_json::to_value(stored)
}

/// Reads one entry of the match file, checking it against the schema of its
/// version.
pub(crate) fn decode(entry: serde_json::Value) -> Result<MatchRecord, String> {
    let stored = serde_json::from_value::<StoredRecordDto>(entry).map_err(|e| e.to_string())?;
    match stored.version {
        1 => {
            let dto = serde_json::from_value::<MatchRecordV1Dto>(stored.record)
                .map_err(|e| e.to_string())?;
            MatchRecord::try_from(dto)
        }
        version => Err(format!("unsupported record version {version}")),
    }
}

/// Rounds `time` down to what survives a store round trip.
#[cfg(test)]
pub(crate) fn truncate_to_millis(time: SystemTime) -> SystemTime {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    UNIX_EPOCH + Duration::from_millis(u64::try_from(millis).unwrap())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_record() -> MatchRecord {
        let guess = |g: &str, fb: &str| GuessRecord::new(g.parse().unwrap(), fb.parse().unwrap());
        MatchRecord {
            id: 7,
            timestamp: truncate_to_millis(SystemTime::now()),
            winner: Winner::Draw,
            human_attempts: 2,
            computer_attempts: 2,
            total_rounds: 2,
            human_history: vec![guess("5678", "0A1B"), guess("1234", "4A0B")],
            computer_history: vec![guess("0912", "1A1B"), guess("3456", "4A0B")],
        }
    }

    #[test]
    fn test_encode_decode() {
        let record = sample_record();
        let entry = encode(&record).unwrap();
        assert_eq!(entry["version"], json!(1));
        assert_eq!(entry["record"]["winner"], json!("draw"));
        assert_eq!(entry["record"]["human_history"][1], json!({"guess": "1234", "result": "4A0B"}));
        assert_eq!(decode(entry), Ok(record));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let mut entry = encode(&sample_record()).unwrap();
        entry["version"] = json!(2);
        assert_eq!(
            decode(entry),
            Err("unsupported record version 2".to_owned())
        );
    }

    #[test]
    fn test_decode_rejects_unknown_fields() {
        let mut entry = encode(&sample_record()).unwrap();
        entry["record"]["isCorrect"] = json!(true);
        assert!(decode(entry).is_err());

        let mut entry = encode(&sample_record()).unwrap();
        entry["note"] = json!("legacy");
        assert!(decode(entry).is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_values() {
        let mut entry = encode(&sample_record()).unwrap();
        entry["record"]["human_history"][0]["guess"] = json!("5577");
        assert!(decode(entry).is_err());

        let mut entry = encode(&sample_record()).unwrap();
        entry["record"]["computer_history"][0]["result"] = json!("3A2B");
        assert!(decode(entry).is_err());

        let mut entry = encode(&sample_record()).unwrap();
        entry["record"]["human_attempts"] = json!(5);
        assert!(decode(entry).is_err());

        let mut entry = encode(&sample_record()).unwrap();
        entry["record"]["winner"] = json!("nobody");
        assert!(decode(entry).is_err());
    }
}
