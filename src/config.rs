//! Configuration module for primer
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (PRIMER_*)
//! 3. Explicit `--config` file, or `./primer.toml`
//! 4. User config (~/.config/primer/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrimerError, PrimerResult};

/// File name looked up in the working directory when no `--config` is given
pub const PROJECT_CONFIG_FILE: &str = "primer.toml";

/// Context shared with the machine demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            manufacturer: default_manufacturer(),
        }
    }
}

fn default_manufacturer() -> String {
    "Mango Computer, Inc.".to_string()
}

/// Journal demo settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default = "default_journal_path")]
    pub path: PathBuf,

    #[serde(default = "default_journal_line")]
    pub line: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: default_journal_path(),
            line: default_journal_line(),
        }
    }
}

fn default_journal_path() -> PathBuf {
    PathBuf::from("read_and_write.txt")
}

fn default_journal_line() -> String {
    "Go air up the bike tires".to_string()
}

/// Color mode for demo headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub machine: MachineConfig,

    #[serde(default)]
    pub journal: JournalConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PrimerResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PrimerResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PrimerError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => PrimerError::Io(e),
        })?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| PrimerError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .next_back()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist; the implicit project and user files are
    /// skipped when absent. Environment overrides are applied last.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> PrimerResult<LoadedConfig> {
        Self::resolve_with(explicit, cwd, dirs::config_dir(), |key| {
            std::env::var(key).ok()
        })
    }

    pub(crate) fn resolve_with(
        explicit: Option<&Path>,
        cwd: &Path,
        user_config_dir: Option<PathBuf>,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> PrimerResult<LoadedConfig> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let project = cwd.join(PROJECT_CONFIG_FILE);
                let user = user_config_dir.map(|dir| dir.join("primer/config.toml"));
                if project.is_file() {
                    Some(project)
                } else {
                    user.filter(|p| p.is_file())
                }
            }
        };

        let mut loaded = match candidate {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let (config, warnings) = Self::load_with_warnings(&path)?;
                LoadedConfig {
                    config,
                    source: Some(path),
                    warnings,
                }
            }
            None => LoadedConfig::default(),
        };

        loaded.config = loaded.config.with_env_overrides(get_env);
        Ok(loaded)
    }

    /// Apply environment variable overrides (PRIMER_* prefix)
    pub fn with_env_overrides(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(manufacturer) = get_env("PRIMER_MANUFACTURER") {
            self.machine.manufacturer = manufacturer;
        }

        if let Some(path) = get_env("PRIMER_JOURNAL") {
            if !path.trim().is_empty() {
                self.journal.path = PathBuf::from(path);
            }
        }

        if let Some(color) = get_env("PRIMER_COLOR") {
            self.output.color = match color.to_lowercase().as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        self
    }
}

/// 1-based line where `key` is defined, either as the last segment of a
/// `key = value` assignment or of a `[table]` header.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defines_key(line.trim(), key))
        .map(|i| i + 1)
}

fn defines_key(line: &str, key: &str) -> bool {
    let name = if let Some(header) = line.strip_prefix('[') {
        header.trim_start_matches('[').split(']').next().unwrap_or("")
    } else if let Some((lhs, _)) = line.split_once('=') {
        lhs
    } else {
        return false;
    };

    let last = name.rsplit('.').next().unwrap_or(name);
    last.trim().trim_matches('"') == key
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "machine",
        "manufacturer",
        "journal",
        "path",
        "line",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
