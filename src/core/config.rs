//! Game and room configuration.
//!
//! - `Rules`: house rules carried inside every `GameState`
//! - `RoomConfig`: how a room seats players and seeds its deals

use serde::{Deserialize, Serialize};

/// House rules in effect for one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    /// Whether a player may decline to play on their turn.
    pub allow_pass: bool,
}

impl Rules {
    /// Create rules with passing enabled or disabled.
    #[must_use]
    pub const fn new(allow_pass: bool) -> Self {
        Self { allow_pass }
    }

    /// Set whether passing is allowed.
    #[must_use]
    pub fn with_pass(mut self, allow_pass: bool) -> Self {
        self.allow_pass = allow_pass;
        self
    }
}

/// Configuration for a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Rules used for every deal in this room.
    pub rules: Rules,

    /// Minimum seated players before a game can start.
    pub min_players: usize,

    /// Maximum seated players.
    pub max_players: usize,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            min_players: 2,
            max_players: 8,
            seed: None,
        }
    }
}

impl RoomConfig {
    /// Create a config with the given rules and default limits.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Set the rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Set seat limits.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1, "Must allow at least 1 player");
        assert!(min <= max, "min_players must not exceed max_players");
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Use a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_default_disallows_pass() {
        assert!(!Rules::default().allow_pass);
        assert!(Rules::default().with_pass(true).allow_pass);
        assert_eq!(Rules::new(true), Rules { allow_pass: true });
    }

    #[test]
    fn test_room_config_builders() {
        let config = RoomConfig::new(Rules::new(true))
            .with_player_limits(3, 5)
            .with_seed(9);

        assert!(config.rules.allow_pass);
        assert_eq!(config.min_players, 3);
        assert_eq!(config.max_players, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    #[should_panic(expected = "min_players must not exceed max_players")]
    fn test_room_config_inverted_limits() {
        let _ = RoomConfig::default().with_player_limits(4, 2);
    }

    #[test]
    fn test_room_config_serialization() {
        let config = RoomConfig::default().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RoomConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
