use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::game::{GameState, Phase};
use crate::player::PlayerAction;

/// One player action as recorded in the hand history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted.
    pub seat: usize,
    /// The phase the action was taken in.
    pub phase: Phase,
    /// The action taken.
    pub action: PlayerAction,
    /// Chips attached to the action: the raise target for a raise, the chips
    /// committed for an all-in, absent otherwise.
    #[serde(default)]
    pub amount: Option<u32>,
}

/// Showdown outcome for a logged hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Seats that won a share of the pot.
    pub winners: Vec<usize>,
    /// Optional notes, e.g. "split pot".
    #[serde(default)]
    pub notes: Option<String>,
}

/// Complete record of one hand, serialized as a JSONL line for hand history
/// storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique hand identifier (format: YYYYMMDD-NNNNNN).
    pub hand_id: String,
    /// Table the hand was played at.
    pub table_id: String,
    /// Deck seed; replaying the same seed and actions reproduces the hand.
    pub seed: Option<u64>,
    /// Chronological player actions.
    pub actions: Vec<ActionRecord>,
    /// Community cards on the board.
    pub board: Vec<Card>,
    /// Free-form result summary (winner, pot size).
    pub result: Option<String>,
    /// RFC3339 timestamp, injected at write time when absent.
    #[serde(default)]
    pub ts: Option<String>,
    /// Extensible metadata object.
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
    /// Showdown details when the hand reached one.
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    /// Snapshots a game state into a loggable record. Result, timestamp and
    /// showdown details are left for the caller to fill in.
    pub fn from_state(hand_id: impl Into<String>, state: &GameState) -> Self {
        Self {
            hand_id: hand_id.into(),
            table_id: state.table_id().to_string(),
            seed: Some(state.seed()),
            actions: state.actions().to_vec(),
            board: state.community().to_vec(),
            result: None,
            ts: None,
            meta: None,
            showdown: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file, one line per hand.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A writer-less logger with a fixed date, for exercising id generation.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
