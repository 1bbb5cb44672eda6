//! JSON-lines event log.
//!
//! One JSON object per line, tagged by `"event"`:
//!
//! ```text
//! {"event":"sessionStart","t_ms":0,"difficulty":"medium","seed":42,"episode_id":0,"best_score":128}
//! {"event":"lock","t_ms":812,"episode_id":0,"block_id":1,"value":2,"x":2,"y":9,"passes":1,"merges":[],"score_gained":0,"score":0}
//! {"event":"gameOver","t_ms":90121,"episode_id":0,"score":356,"best_score":356}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{LockReport, TurnEvent};
use crate::types::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum LogRecord {
    SessionStart {
        t_ms: u64,
        difficulty: String,
        seed: u32,
        episode_id: u32,
        best_score: u32,
    },
    Reset {
        t_ms: u64,
        episode_id: u32,
    },
    Lock {
        t_ms: u64,
        episode_id: u32,
        block_id: u32,
        value: u32,
        x: u8,
        y: u8,
        passes: u32,
        /// `[x, y]` of every surviving merged block, in merge order.
        merges: Vec<[u8; 2]>,
        score_gained: u32,
        score: u32,
    },
    GameOver {
        t_ms: u64,
        episode_id: u32,
        score: u32,
        best_score: u32,
    },
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: W,
    buf: Vec<u8>,
    started: Instant,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
            started: Instant::now(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Append one record and flush it.
    pub fn write(&mut self, record: &LogRecord) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn session_start(
        &mut self,
        difficulty: Difficulty,
        seed: u32,
        episode_id: u32,
        best_score: u32,
    ) -> Result<()> {
        let record = LogRecord::SessionStart {
            t_ms: self.elapsed_ms(),
            difficulty: difficulty.as_str().to_string(),
            seed,
            episode_id,
            best_score,
        };
        self.write(&record)
    }

    pub fn reset(&mut self, episode_id: u32) -> Result<()> {
        let record = LogRecord::Reset {
            t_ms: self.elapsed_ms(),
            episode_id,
        };
        self.write(&record)
    }

    /// Log a turn event. A lock that ends the game also writes `gameOver`.
    pub fn turn_event(&mut self, episode_id: u32, event: &TurnEvent, best_score: u32) -> Result<()> {
        match event {
            TurnEvent::Locked(report) => {
                let record = self.lock_record(episode_id, report);
                self.write(&record)?;
                if report.game_over {
                    self.game_over(episode_id, report.score, best_score)?;
                }
                Ok(())
            }
            TurnEvent::SpawnBlocked { score } => self.game_over(episode_id, *score, best_score),
        }
    }

    fn game_over(&mut self, episode_id: u32, score: u32, best_score: u32) -> Result<()> {
        let record = LogRecord::GameOver {
            t_ms: self.elapsed_ms(),
            episode_id,
            score,
            best_score,
        };
        self.write(&record)
    }

    fn lock_record(&self, episode_id: u32, report: &LockReport) -> LogRecord {
        LogRecord::Lock {
            t_ms: self.elapsed_ms(),
            episode_id,
            block_id: report.block_id,
            value: report.value,
            x: report.position.x,
            y: report.position.y,
            passes: report.passes,
            merges: report.merged_positions.iter().map(|p| [p.x, p.y]).collect(),
            score_gained: report.score_gained,
            score: report.score,
        }
    }
}
