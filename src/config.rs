use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "flappy-astronaut.log";
pub const DEFAULT_TEXT_SCROLL_MS: u64 = 100;

/// Runtime knobs read from the environment. Gameplay constants are not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed for reproducible pipe layouts.
    pub seed: Option<u64>,
    pub show_intro: bool,
    /// Delay between text columns when a message scrolls past.
    pub text_scroll: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_intro: true,
            text_scroll: Duration::from_millis(DEFAULT_TEXT_SCROLL_MS),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: read_u64(&lookup, "ASTRONAUT_SEED"),
            show_intro: !read_flag(&lookup, "ASTRONAUT_SKIP_INTRO"),
            text_scroll: Duration::from_millis(
                read_u64(&lookup, "ASTRONAUT_TEXT_SCROLL_MS").unwrap_or(DEFAULT_TEXT_SCROLL_MS),
            ),
        }
    }
}

/// Read on its own, ahead of [`GameConfig`], so logging is up before the
/// config warnings are emitted.
pub fn log_file_from_env() -> PathBuf {
    log_file_from_lookup(|key| env::var(key).ok())
}

pub fn log_file_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("ASTRONAUT_LOG_FILE")
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn read_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("{} has invalid value {:?}; using default", key, raw);
            None
        }
    }
}

fn read_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    let Some(raw) = lookup(key) else {
        return false;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!("{} has invalid value {:?}; treating as unset", key, raw);
            false
        }
    }
}
