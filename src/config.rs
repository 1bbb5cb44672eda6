//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `FALLING2048_DIFFICULTY` | `easy`, `medium` or `hard` | `medium` |
//! | `FALLING2048_SEED` | RNG seed | derived from the clock |
//! | `FALLING2048_SCORES_PATH` | best-score JSON file | `falling2048_scores.json` |
//! | `FALLING2048_SCORES_DISABLED` | `1`/`true` keeps best scores in memory | off |
//! | `FALLING2048_LOG_PATH` | JSON-lines event log | none |
//!
//! A first command-line argument naming a tier overrides the environment.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Difficulty;

pub const DEFAULT_SCORES_PATH: &str = "falling2048_scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub difficulty: Difficulty,
    pub seed: u32,
    /// `None` when persistence is disabled.
    pub scores_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    /// Problems found while reading the configuration; defaults were used.
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: 1,
            scores_path: Some(PathBuf::from(DEFAULT_SCORES_PATH)),
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read the process environment and arguments.
    pub fn from_env() -> Self {
        let arg = env::args().nth(1);
        Self::from_lookup(|key| env::var(key).ok(), arg.as_deref(), clock_seed)
    }

    /// Build from an arbitrary variable lookup; `seed_fallback` runs only when
    /// no seed is configured.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        arg: Option<&str>,
        seed_fallback: impl FnOnce() -> u32,
    ) -> Self {
        let mut warnings = Vec::new();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut difficulty = Difficulty::default();
        let sources = [
            ("FALLING2048_DIFFICULTY", var("FALLING2048_DIFFICULTY")),
            ("argument", arg.map(str::to_string)),
        ];
        for (source, raw) in sources {
            let Some(raw) = raw else {
                continue;
            };
            match Difficulty::from_str(&raw) {
                Some(d) => difficulty = d,
                None => warnings.push(format!("unknown difficulty {:?} from {}", raw, source)),
            }
        }

        let seed = match var("FALLING2048_SEED") {
            Some(raw) => raw.parse::<u32>().unwrap_or_else(|_| {
                warnings.push(format!("FALLING2048_SEED {:?} is not a u32", raw));
                0
            }),
            None => 0,
        };
        let seed = if seed == 0 { seed_fallback() } else { seed };

        let disabled = var("FALLING2048_SCORES_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        let scores_path = if disabled {
            None
        } else {
            Some(PathBuf::from(
                var("FALLING2048_SCORES_PATH").unwrap_or_else(|| DEFAULT_SCORES_PATH.to_string()),
            ))
        };

        let log_path = var("FALLING2048_LOG_PATH").map(PathBuf::from);

        Self {
            difficulty,
            seed,
            scores_path,
            log_path,
            warnings,
        }
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    ((nanos ^ (nanos >> 32)) as u32).max(1)
}
