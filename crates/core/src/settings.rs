//! Round configuration
//!
//! Settings come from untrusted text (URL-style query strings, environment
//! variables, CLI flags). The strict parser reports what was wrong; hosts use
//! [`GameSettings::resolve`], which never fails and substitutes defaults.

use std::env;

use thiserror::Error;

use crate::types::{GridSize, DEFAULT_PLAYER_COUNT, MAX_PLAYER_COUNT};

/// Environment variable holding the grid side length
pub const ENV_GRID_SIZE: &str = "MEMORY_GRID_SIZE";

/// Environment variable holding the player count
pub const ENV_PLAYERS: &str = "MEMORY_PLAYERS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("grid size `{0}` is not a whole number")]
    GridSizeNotNumber(String),
    #[error("grid size {0} is not supported (expected 4 or 6)")]
    UnsupportedGridSize(i64),
    #[error("player count `{0}` is not a whole number")]
    PlayersNotNumber(String),
    #[error("player count {0} is out of range (expected 1..={max})", max = MAX_PLAYER_COUNT)]
    PlayersOutOfRange(i64),
}

/// Settings a round is dealt with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSettings {
    pub grid_size: GridSize,
    pub player_count: u8,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            player_count: DEFAULT_PLAYER_COUNT,
        }
    }
}

impl GameSettings {
    /// Build settings from already-typed values, checking the player range.
    pub fn new(grid_size: GridSize, player_count: u8) -> Result<Self, SettingsError> {
        Ok(Self {
            grid_size,
            player_count: check_players(player_count as i64)?,
        })
    }

    /// Strict parse. A missing field takes its default; a present but
    /// malformed one is an error.
    pub fn parse(size: Option<&str>, players: Option<&str>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        if let Some(raw) = size {
            settings.grid_size = parse_grid_size(raw)?;
        }
        if let Some(raw) = players {
            settings.player_count = parse_players(raw)?;
        }
        Ok(settings)
    }

    /// Lenient parse: each invalid field falls back to its default.
    pub fn resolve(size: Option<&str>, players: Option<&str>) -> Self {
        let mut settings = Self::default();

        match size.map(parse_grid_size) {
            Some(Ok(grid_size)) => settings.grid_size = grid_size,
            Some(Err(err)) => {
                tracing::warn!(%err, fallback = settings.grid_size.side(), "invalid grid size")
            }
            None => {}
        }

        match players.map(parse_players) {
            Some(Ok(count)) => settings.player_count = count,
            Some(Err(err)) => {
                tracing::warn!(%err, fallback = settings.player_count, "invalid player count")
            }
            None => {}
        }

        settings
    }

    /// Resolve from a query string such as `size=6&players=2`.
    ///
    /// A leading `?` is accepted, unknown keys are ignored, and the last
    /// occurrence of a repeated key wins.
    pub fn from_query(query: &str) -> Self {
        let mut size = None;
        let mut players = None;
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key.trim() {
                "size" => size = Some(value),
                "players" => players = Some(value),
                _ => {}
            }
        }
        Self::resolve(size, players)
    }

    /// Resolve from `MEMORY_GRID_SIZE` / `MEMORY_PLAYERS`.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Resolve by asking `lookup` for each environment key.
    ///
    /// Hosts layer their own sources (CLI flags, config files) in front of the
    /// environment by answering some keys themselves.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup(ENV_GRID_SIZE);
        let players = lookup(ENV_PLAYERS);
        Self::resolve(size.as_deref(), players.as_deref())
    }

    pub fn is_multiplayer(&self) -> bool {
        self.player_count > 1
    }
}

/// Environment value for `key`; unset or non-UTF-8 reads as absent.
pub fn env_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn parse_grid_size(raw: &str) -> Result<GridSize, SettingsError> {
    let n = parse_int(raw).ok_or_else(|| SettingsError::GridSizeNotNumber(raw.to_string()))?;
    u8::try_from(n)
        .ok()
        .and_then(GridSize::from_side)
        .ok_or(SettingsError::UnsupportedGridSize(n))
}

fn parse_players(raw: &str) -> Result<u8, SettingsError> {
    let n = parse_int(raw).ok_or_else(|| SettingsError::PlayersNotNumber(raw.to_string()))?;
    check_players(n)
}

fn check_players(n: i64) -> Result<u8, SettingsError> {
    if (1..=MAX_PLAYER_COUNT as i64).contains(&n) {
        Ok(n as u8)
    } else {
        Err(SettingsError::PlayersOutOfRange(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = GameSettings::default();
        assert_eq!(s.grid_size, GridSize::Four);
        assert_eq!(s.player_count, 1);
        assert!(!s.is_multiplayer());
    }

    #[test]
    fn parse_valid() {
        let s = GameSettings::parse(Some("6"), Some("3")).unwrap();
        assert_eq!(s.grid_size, GridSize::Six);
        assert_eq!(s.player_count, 3);

        let s = GameSettings::parse(Some(" 4 "), None).unwrap();
        assert_eq!(s, GameSettings::default());
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert_eq!(
            GameSettings::parse(Some("5"), None),
            Err(SettingsError::UnsupportedGridSize(5))
        );
        assert_eq!(
            GameSettings::parse(Some("big"), None),
            Err(SettingsError::GridSizeNotNumber("big".to_string()))
        );
        assert_eq!(
            GameSettings::parse(None, Some("0")),
            Err(SettingsError::PlayersOutOfRange(0))
        );
        assert_eq!(
            GameSettings::parse(None, Some("5")),
            Err(SettingsError::PlayersOutOfRange(5))
        );
        assert_eq!(
            GameSettings::parse(None, Some("1.5")),
            Err(SettingsError::PlayersNotNumber("1.5".to_string()))
        );
        assert_eq!(
            GameSettings::parse(Some("-4"), None),
            Err(SettingsError::UnsupportedGridSize(-4))
        );
    }

    #[test]
    fn resolve_falls_back_per_field() {
        let s = GameSettings::resolve(Some("6"), Some("9"));
        assert_eq!(s.grid_size, GridSize::Six);
        assert_eq!(s.player_count, 1);

        let s = GameSettings::resolve(Some("8"), Some("2"));
        assert_eq!(s.grid_size, GridSize::Four);
        assert_eq!(s.player_count, 2);

        assert_eq!(GameSettings::resolve(None, None), GameSettings::default());
    }

    #[test]
    fn from_query() {
        let s = GameSettings::from_query("?size=6&players=4");
        assert_eq!(s.grid_size, GridSize::Six);
        assert_eq!(s.player_count, 4);

        let s = GameSettings::from_query("players=2&theme=dark");
        assert_eq!(s.grid_size, GridSize::Four);
        assert_eq!(s.player_count, 2);

        assert_eq!(GameSettings::from_query(""), GameSettings::default());
        assert_eq!(GameSettings::from_query("size"), GameSettings::default());
    }

    #[test]
    fn from_lookup_reads_env_keys() {
        let vars = [(ENV_GRID_SIZE, "6"), (ENV_PLAYERS, "3")];
        let s = GameSettings::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        });
        assert_eq!(s.grid_size, GridSize::Six);
        assert_eq!(s.player_count, 3);

        assert_eq!(GameSettings::from_lookup(|_| None), GameSettings::default());

        let s = GameSettings::from_lookup(|key| {
            (key == ENV_PLAYERS).then(|| "many".to_string())
        });
        assert_eq!(s, GameSettings::default());
    }

    #[test]
    fn from_lookup_layers_sources() {
        // First source answers players only; the second fills the rest.
        let flags = |key: &str| (key == ENV_PLAYERS).then(|| "2".to_string());
        let env = |key: &str| match key {
            ENV_GRID_SIZE => Some("6".to_string()),
            ENV_PLAYERS => Some("4".to_string()),
            _ => None,
        };
        let s = GameSettings::from_lookup(|key| flags(key).or_else(|| env(key)));
        assert_eq!(s.grid_size, GridSize::Six);
        assert_eq!(s.player_count, 2);
    }

    #[test]
    fn new_checks_players() {
        assert!(GameSettings::new(GridSize::Four, 4).is_ok());
        assert_eq!(
            GameSettings::new(GridSize::Four, 0),
            Err(SettingsError::PlayersOutOfRange(0))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SettingsError::PlayersOutOfRange(7).to_string(),
            "player count 7 is out of range (expected 1..=4)"
        );
    }
}
