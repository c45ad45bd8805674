//! Local game codes
//!
//! Creating a game stores its round configuration under a random code;
//! joining copies that configuration's code into the current-player record.
//! Everything stays in the local store.

use crate::config::RoundSettings;
use crate::core::Language;
use crate::storage::{StorageError, Store, keys, load_json, save_json};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

pub const CODE_LENGTH: usize = 6;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Longest accepted username, in characters
pub const MAX_USERNAME: usize = 20;

/// Game codes older than this cannot be joined
pub const GAME_TTL_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("Please enter a username of 1-{MAX_USERNAME} characters")]
    InvalidUsername,
    #[error("Game code must be 6 letters/numbers")]
    InvalidCode,
    #[error("Game not found. Check the game code and try again.")]
    GameNotFound,
    #[error("This game has expired. Please create or join a new game.")]
    GameExpired,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub username: String,
    pub is_host: bool,
    pub game_id: String,
}

/// Round configuration stored under a game code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub host: String,
    pub timer_enabled: bool,
    pub timer_duration: u32,
    pub language: Language,
    pub letter_length: usize,
    /// Unix time in milliseconds
    pub created_at: u64,
}

impl GameConfig {
    #[must_use]
    pub const fn round_settings(&self) -> RoundSettings {
        RoundSettings {
            language: self.language,
            letter_length: self.letter_length,
            timer_enabled: self.timer_enabled,
            timer_duration: self.timer_duration,
        }
    }

    #[must_use]
    pub const fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at) > GAME_TTL_MS
    }
}

/// Milliseconds since the Unix epoch
#[must_use]
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Random code of [`CODE_LENGTH`] characters from `A-Z0-9`
///
/// Codes are not checked for collisions.
pub fn generate_game_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

fn validate_username(username: &str) -> Result<&str, LobbyError> {
    let username = username.trim();
    if username.is_empty() || username.chars().count() > MAX_USERNAME {
        return Err(LobbyError::InvalidUsername);
    }
    Ok(username)
}

fn normalize_code(code: &str) -> Result<String, LobbyError> {
    let code = code.trim().to_uppercase();
    let valid = code.len() == CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if valid { Ok(code) } else { Err(LobbyError::InvalidCode) }
}

/// Store a new game and make the creator its host
///
/// # Errors
/// Returns `InvalidUsername` for an empty or overlong name, or `Storage` if
/// the records cannot be written.
pub fn create_game<R: Rng + ?Sized>(
    store: &mut (impl Store + ?Sized),
    username: &str,
    settings: RoundSettings,
    rng: &mut R,
    now_ms: u64,
) -> Result<String, LobbyError> {
    let username = validate_username(username)?;
    let code = generate_game_code(rng);

    let config = GameConfig {
        host: username.to_string(),
        timer_enabled: settings.timer_enabled,
        timer_duration: settings.timer_duration,
        language: settings.language,
        letter_length: settings.letter_length,
        created_at: now_ms,
    };
    save_json(store, &keys::multiplayer(&code), &config)?;
    save_json(
        store,
        keys::CURRENT_PLAYER,
        &PlayerInfo {
            username: username.to_string(),
            is_host: true,
            game_id: code.clone(),
        },
    )?;

    tracing::info!(code = %code, host = username, "game created");
    Ok(code)
}

/// Join an existing game by code
///
/// The current-player record is only written when every check passes.
///
/// # Errors
/// Returns the first failed check: `InvalidUsername`, `InvalidCode`,
/// `GameNotFound` (also for an unreadable config) or `GameExpired`.
pub fn join_game(
    store: &mut (impl Store + ?Sized),
    username: &str,
    code: &str,
    now_ms: u64,
) -> Result<GameConfig, LobbyError> {
    let username = validate_username(username)?;
    let code = normalize_code(code)?;

    let config: GameConfig =
        load_json(&*store, &keys::multiplayer(&code)).ok_or(LobbyError::GameNotFound)?;
    if config.is_expired(now_ms) {
        tracing::debug!(code = %code, created_at = config.created_at, "game code expired");
        return Err(LobbyError::GameExpired);
    }

    save_json(
        store,
        keys::CURRENT_PLAYER,
        &PlayerInfo {
            username: username.to_string(),
            is_host: false,
            game_id: code.clone(),
        },
    )?;

    tracing::info!(code = %code, player = username, "joined game");
    Ok(config)
}

#[must_use]
pub fn current_player(store: &(impl Store + ?Sized)) -> Option<PlayerInfo> {
    load_json(store, keys::CURRENT_PLAYER)
}

/// Configuration of the game the current player belongs to, if any
#[must_use]
pub fn current_game_config(store: &(impl Store + ?Sized)) -> Option<GameConfig> {
    let player = current_player(store)?;
    load_json(store, &keys::multiplayer(&player.game_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const NOW: u64 = 1_700_000_000_000;

    fn settings() -> RoundSettings {
        RoundSettings {
            language: Language::Arabic,
            letter_length: 4,
            timer_enabled: true,
            timer_duration: 90,
        }
    }

    #[test]
    fn codes_use_the_code_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let code = generate_game_code(&mut rng);
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(normalize_code(&code).is_ok());
        }
    }

    #[test]
    fn create_then_join() {
        let mut store = MemoryStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        let code = create_game(&mut store, "  host ", settings(), &mut rng, NOW).unwrap();

        let host = current_player(&store).unwrap();
        assert!(host.is_host);
        assert_eq!(host.username, "host");
        assert_eq!(current_game_config(&store).unwrap().round_settings(), settings());

        let config = join_game(&mut store, "guest", &code.to_lowercase(), NOW + 1000).unwrap();
        assert_eq!(config.host, "host");
        assert_eq!(config.round_settings(), settings());

        let guest = current_player(&store).unwrap();
        assert_eq!(
            guest,
            PlayerInfo {
                username: "guest".to_string(),
                is_host: false,
                game_id: code,
            }
        );
    }

    #[test]
    fn config_is_stored_camel_case() {
        let mut store = MemoryStore::default();
        let mut rng = StdRng::seed_from_u64(2);
        let code = create_game(&mut store, "host", settings(), &mut rng, NOW).unwrap();

        let raw = store.get(&keys::multiplayer(&code)).unwrap();
        assert!(raw.contains("\"letterLength\":4"));
        assert!(raw.contains("\"createdAt\":1700000000000"));
        assert!(raw.contains("\"language\":\"arabic\""));
    }

    #[test]
    fn username_is_validated() {
        let mut store = MemoryStore::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            create_game(&mut store, "   ", settings(), &mut rng, NOW),
            Err(LobbyError::InvalidUsername)
        ));
        assert!(matches!(
            join_game(&mut store, &"x".repeat(21), "ABC123", NOW),
            Err(LobbyError::InvalidUsername)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_codes_are_rejected() {
        let mut store = MemoryStore::default();
        for code in ["", "ABC12", "ABC1234", "ABC-12", "ÀBC123"] {
            assert!(matches!(
                join_game(&mut store, "guest", code, NOW),
                Err(LobbyError::InvalidCode)
            ));
        }
    }

    #[test]
    fn unknown_or_unreadable_game_is_not_found() {
        let mut store = MemoryStore::default();
        assert!(matches!(
            join_game(&mut store, "guest", "ZZZZZZ", NOW),
            Err(LobbyError::GameNotFound)
        ));

        store.set(&keys::multiplayer("ZZZZZZ"), "{broken").unwrap();
        assert!(matches!(
            join_game(&mut store, "guest", "zzzzzz", NOW),
            Err(LobbyError::GameNotFound)
        ));
        assert!(current_player(&store).is_none());
    }

    #[test]
    fn expired_game_leaves_current_player_unchanged() {
        let mut store = MemoryStore::default();
        let mut rng = StdRng::seed_from_u64(5);
        let old = create_game(&mut store, "host", settings(), &mut rng, NOW).unwrap();
        let before = current_player(&store);

        let result = join_game(&mut store, "guest", &old, NOW + GAME_TTL_MS + 1);
        assert!(matches!(result, Err(LobbyError::GameExpired)));
        assert_eq!(current_player(&store), before);

        assert!(join_game(&mut store, "guest", &old, NOW + GAME_TTL_MS).is_ok());
    }
}
