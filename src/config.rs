//! Runtime configuration.
//!
//! Settings come from environment variables first and command-line flags
//! second (flags win):
//!
//! - `LINESUM_SEED` / `--seed`: RNG seed (default: derived from the clock)
//! - `LINESUM_LOG_PATH` / `--log-file`: write logs to this file (default: no logging)
//! - `LINESUM_STRICT_GAME_OVER` / `--strict-game-over`, `--no-strict-game-over`:
//!   end the game when no line can reach the live target (default: off)
//! - `LINESUM_FLASH_MS` / `--flash-ms`: how long a scored line's points stay
//!   on screen (default: 900)
//!
//! Malformed environment values never abort startup; they fall back to the
//! default and are reported through [`AppConfig::warnings`].

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::TerminalRule;

pub const DEFAULT_FLASH_MS: u64 = 900;

/// Command-line flags
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tui-linesum", version, about = "Drag straight lines of tiles that add up to the target")]
pub struct Args {
    /// RNG seed; the same seed replays the same grids and targets
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// End the game when no straight line sums to the current target
    #[arg(long, overrides_with = "no_strict_game_over")]
    pub strict_game_over: bool,

    /// Keep the classic game-over check, even if the environment asks for strict
    #[arg(long, overrides_with = "strict_game_over")]
    pub no_strict_game_over: bool,

    /// Milliseconds the points of a scored line stay visible
    #[arg(long, value_name = "MS")]
    pub flash_ms: Option<u64>,
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub strict_game_over: bool,
    pub flash_ms: u64,
    /// Environment values that were ignored, to be logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            strict_game_over: false,
            flash_ms: DEFAULT_FLASH_MS,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment-shaped)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = value("LINESUM_SEED") {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config
                    .warnings
                    .push(format!("ignoring LINESUM_SEED={raw:?}: not an unsigned integer")),
            }
        }

        config.log_path = value("LINESUM_LOG_PATH").map(PathBuf::from);

        if let Some(raw) = value("LINESUM_STRICT_GAME_OVER") {
            match parse_flag(&raw) {
                Some(on) => config.strict_game_over = on,
                None => config
                    .warnings
                    .push(format!("ignoring LINESUM_STRICT_GAME_OVER={raw:?}: expected 1/0/true/false")),
            }
        }

        if let Some(raw) = value("LINESUM_FLASH_MS") {
            match raw.parse() {
                Ok(ms) => config.flash_ms = ms,
                Err(_) => config
                    .warnings
                    .push(format!("ignoring LINESUM_FLASH_MS={raw:?}: not an unsigned integer")),
            }
        }

        config
    }

    /// Overlay command-line flags
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(path) = &args.log_file {
            self.log_path = Some(path.clone());
        }
        if args.strict_game_over {
            self.strict_game_over = true;
        }
        if args.no_strict_game_over {
            self.strict_game_over = false;
        }
        if let Some(ms) = args.flash_ms {
            self.flash_ms = ms;
        }
        self
    }

    /// The configured seed, or one derived from the clock
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }

    pub fn terminal_rule(&self) -> TerminalRule {
        if self.strict_game_over {
            TerminalRule::LiveTarget
        } else {
            TerminalRule::Range
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.terminal_rule(), TerminalRule::Range);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LINESUM_SEED", "42"),
            ("LINESUM_LOG_PATH", " /tmp/linesum.log "),
            ("LINESUM_STRICT_GAME_OVER", "true"),
            ("LINESUM_FLASH_MS", "250"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/linesum.log")));
        assert!(config.strict_game_over);
        assert_eq!(config.flash_ms, 250);
        assert!(config.warnings.is_empty());
        assert_eq!(config.terminal_rule(), TerminalRule::LiveTarget);
        assert_eq!(config.resolved_seed(), 42);
    }

    #[test]
    fn malformed_values_fall_back_with_warnings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LINESUM_SEED", "-3"),
            ("LINESUM_STRICT_GAME_OVER", "maybe"),
            ("LINESUM_FLASH_MS", "soon"),
        ]));
        assert_eq!(config.seed, None);
        assert!(!config.strict_game_over);
        assert_eq!(config.flash_ms, DEFAULT_FLASH_MS);
        assert_eq!(config.warnings.len(), 3);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[("LINESUM_LOG_PATH", "   ")]));
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn flags_override_env() {
        let env = AppConfig::from_lookup(lookup(&[("LINESUM_SEED", "1"), ("LINESUM_FLASH_MS", "100")]));
        let args = Args::parse_from(["tui-linesum", "--seed", "7", "--strict-game-over", "--log-file", "x.log"]);
        let config = env.with_args(&args);

        assert_eq!(config.seed, Some(7));
        assert!(config.strict_game_over);
        assert_eq!(config.log_path, Some(PathBuf::from("x.log")));
        assert_eq!(config.flash_ms, 100);
    }

    #[test]
    fn flag_turns_strict_rule_back_off() {
        let env = AppConfig::from_lookup(lookup(&[("LINESUM_STRICT_GAME_OVER", "1")]));
        assert!(env.strict_game_over);

        let args = Args::parse_from(["tui-linesum", "--no-strict-game-over"]);
        let config = env.clone().with_args(&args);
        assert!(!config.strict_game_over);
        assert_eq!(config.terminal_rule(), TerminalRule::Range);

        // The last of the two flags wins.
        let args = Args::parse_from(["tui-linesum", "--no-strict-game-over", "--strict-game-over"]);
        assert!(env.clone().with_args(&args).strict_game_over);
        let args = Args::parse_from(["tui-linesum", "--strict-game-over", "--no-strict-game-over"]);
        assert!(!env.with_args(&args).strict_game_over);
    }
}
