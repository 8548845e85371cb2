//! Rules configuration carried by every game state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How strictly castling candidates are vetted by the legal-move filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSafety {
    /// The king may not castle out of or through an attacked square.
    #[default]
    Standard,
    /// Only the ordinary self-check filter applies to castling.
    Unchecked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    pub castling_safety: CastlingSafety,
    /// Test candidate legality on scoped worker threads.
    pub parallel_filter: bool,
    pub filter_threads: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            castling_safety: CastlingSafety::Standard,
            parallel_filter: false,
            filter_threads: std::thread::available_parallelism()
                .map(usize::from)
                .unwrap_or(1),
        }
    }
}

impl RulesConfig {
    /// Defaults overridden by `CHESS_CASTLING_SAFETY` and `CHESS_PARALLEL_FILTER`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = RulesConfig::default();
        if let Ok(value) = std::env::var("CHESS_CASTLING_SAFETY") {
            config.apply_option("castling safety", Some(&value));
        }
        if let Ok(value) = std::env::var("CHESS_PARALLEL_FILTER") {
            config.apply_option("parallel filter", Some(&value));
        }
        config
    }

    /// Apply a named option; unknown names and unparsable values are ignored.
    /// Returns true when the configuration changed.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> bool {
        let before = self.clone();
        let value = value.map(|v| v.trim().to_ascii_lowercase());
        match name.trim().to_ascii_lowercase().as_str() {
            "castling safety" => match value.as_deref() {
                Some("standard") => self.castling_safety = CastlingSafety::Standard,
                Some("unchecked") => self.castling_safety = CastlingSafety::Unchecked,
                _ => log::warn!("ignoring castling safety value {value:?}"),
            },
            "parallel filter" => match value.as_deref() {
                Some("1" | "true" | "on") => self.parallel_filter = true,
                Some("0" | "false" | "off") => self.parallel_filter = false,
                _ => log::warn!("ignoring parallel filter value {value:?}"),
            },
            "filter threads" => {
                if let Some(v) = value.and_then(|v| v.parse::<usize>().ok()) {
                    self.filter_threads = v.clamp(1, 64);
                }
            }
            other => log::warn!("unknown rules option '{other}'"),
        }
        *self != before
    }
}
