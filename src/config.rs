//! Host configuration: environment first, then command-line overrides.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `BLOCKFALL_SEED` | `--seed N` | random |
//! | `BLOCKFALL_FALL_MS` | `--fall-ms N` | 1000 |
//! | `BLOCKFALL_INPUT_MS` | `--input-ms N` | 150 |
//! | `BLOCKFALL_LOG_PATH` | `--log PATH` | none |
//! | | `--dump` | play |

use anyhow::{anyhow, Result};

use crate::types::{DEFAULT_FALL_INTERVAL_MS, DEFAULT_INPUT_INTERVAL_MS};

/// What the binary does once configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Interactive terminal game
    Play,
    /// Print the initial session state as text and exit
    Dump,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Bag seed; `None` picks one at random
    pub seed: Option<u64>,
    /// Interval between gravity ticks
    pub fall_interval_ms: u32,
    /// Minimum gap between two accepted presses of the same action
    pub input_interval_ms: u32,
    /// JSON-lines event log destination
    pub log_path: Option<String>,
    pub mode: HostMode,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            input_interval_ms: DEFAULT_INPUT_INTERVAL_MS,
            log_path: None,
            mode: HostMode::Play,
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());
        let fall_interval_ms = lookup("BLOCKFALL_FALL_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.fall_interval_ms);
        let input_interval_ms = lookup("BLOCKFALL_INPUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.input_interval_ms);
        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            fall_interval_ms,
            input_interval_ms,
            log_path,
            mode: defaults.mode,
        }
    }

    /// Apply command-line arguments (program name excluded) on top of `self`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    let v = flag_value(args, &mut i, "--seed")?;
                    self.seed = Some(
                        v.parse()
                            .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                    );
                }
                "--fall-ms" => {
                    let v = flag_value(args, &mut i, "--fall-ms")?;
                    let ms: u32 = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --fall-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("--fall-ms must be positive"));
                    }
                    self.fall_interval_ms = ms;
                }
                "--input-ms" => {
                    let v = flag_value(args, &mut i, "--input-ms")?;
                    self.input_interval_ms = v
                        .parse()
                        .map_err(|_| anyhow!("invalid --input-ms value: {}", v))?;
                }
                "--log" => {
                    let v = flag_value(args, &mut i, "--log")?;
                    self.log_path = Some(v.to_string());
                }
                "--dump" => self.mode = HostMode::Dump,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}
