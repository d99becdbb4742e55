//! Headless runner settings.
//!
//! Settings come from `settings.json` in the save directory when present,
//! then command-line flags override them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::constants::TICKS_PER_SECOND;
use crate::utils::persistence::{default_save_dir, load_json_or_default};

pub const SETTINGS_FILE: &str = "settings.json";

/// Ten minutes of simulated fishing.
pub const DEFAULT_RUN_TICKS: u64 = 10 * 60 * TICKS_PER_SECOND as u64;
/// The auto-angler reels this many ticks after a bite (0.25 s).
pub const DEFAULT_REACTION_TICKS: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Overrides the default save directory.
    pub save_dir: Option<PathBuf>,
    /// Write the profile back to disk.
    pub persist: bool,
    /// Ticks the auto-angler waits after a bite before reeling.
    pub reaction_ticks: u32,
    /// Ticks to simulate.
    pub ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            save_dir: None,
            persist: true,
            reaction_ticks: DEFAULT_REACTION_TICKS,
            ticks: DEFAULT_RUN_TICKS,
        }
    }
}

impl Settings {
    /// Loads `settings.json` from `dir`, falling back to defaults.
    pub fn load(dir: &Path) -> Self {
        load_json_or_default(dir, SETTINGS_FILE)
    }

    /// Layers command-line flags over file settings.
    pub fn apply(&mut self, cli: &CliArgs) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(dir) = &cli.save_dir {
            self.save_dir = Some(dir.clone());
        }
        if cli.no_save {
            self.persist = false;
        }
        if let Some(ticks) = cli.reaction_ticks {
            self.reaction_ticks = ticks;
        }
        if let Some(ticks) = cli.ticks {
            self.ticks = ticks;
        }
    }
}

/// Raw command-line flags. Unset flags leave settings untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub save_dir: Option<PathBuf>,
    pub no_save: bool,
    pub reaction_ticks: Option<u32>,
    pub quiet: bool,
    pub help: bool,
}

impl CliArgs {
    /// Save directory: the flag, else `CASTAWAY_HOME`, else `~/.castaway`.
    pub fn resolve_save_dir(&self) -> std::io::Result<PathBuf> {
        match &self.save_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_save_dir(),
        }
    }
}

pub const USAGE: &str = "\
castaway - headless fishing runner

Usage: castaway [OPTIONS]

Options:
  -t, --ticks <N>           Ticks to simulate (60 per second)
  -s, --seed <N>            Fixed RNG seed
  -d, --save-dir <PATH>     Save directory (default: $CASTAWAY_HOME or ~/.castaway)
      --no-save             Do not write the profile back
  -r, --reaction-ticks <N>  Ticks to wait after a bite before reeling
  -q, --quiet               Only print the final summary
  -h, --help                Show this help";

/// Parses `args` (including the program name at index 0).
/// Malformed values are ignored.
pub fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "-t" | "--ticks" => {
                if let Some(v) = value {
                    cli.ticks = v.parse().ok();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if let Some(v) = value {
                    cli.seed = v.parse().ok();
                    i += 1;
                }
            }
            "-d" | "--save-dir" => {
                if let Some(v) = value {
                    cli.save_dir = Some(PathBuf::from(v));
                    i += 1;
                }
            }
            "-r" | "--reaction-ticks" => {
                if let Some(v) = value {
                    cli.reaction_ticks = v.parse().ok();
                    i += 1;
                }
            }
            "--no-save" => cli.no_save = true,
            "-q" | "--quiet" => cli.quiet = true,
            "-h" | "--help" => cli.help = true,
            other => {
                tracing::warn!(arg = other, "ignoring unknown argument");
            }
        }
        i += 1;
    }

    cli
}
