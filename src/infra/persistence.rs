//! Абстракция хранилища и кодек сохранённого состояния.

use crate::engine::errors::GameError;
use crate::state::GameState;

/// Абстракция хранилища.
///
/// В браузерном варианте за этим стоит origin-scoped local storage;
/// ядру достаточно пары load/save над одним блобом.
pub trait GameStorage {
    /// Загрузить сохранённое состояние (None, если сохранения ещё нет).
    fn load(&self) -> Option<GameState>;

    /// Сохранить состояние целиком.
    fn save(&mut self, state: &GameState);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    stored: Option<GameState>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStorage for InMemoryStorage {
    fn load(&self) -> Option<GameState> {
        self.stored.clone()
    }

    fn save(&mut self, state: &GameState) {
        self.stored = Some(state.clone());
    }
}

/// Сериализация состояния в JSON-блоб.
pub fn encode_state(state: &GameState) -> String {
    serde_json::to_string(state).expect("GameState всегда сериализуем в JSON")
}

/// Разбор JSON-блоба. Пропущенные поля дополняются значениями по
/// умолчанию; совсем битый блоб — `StorageCorrupt`.
pub fn decode_state(blob: &str) -> Result<GameState, GameError> {
    let mut state: GameState =
        serde_json::from_str(blob).map_err(|e| GameError::StorageCorrupt(e.to_string()))?;
    state.repair();
    Ok(state)
}

/// Разбор с восстановлением: битый блоб даёт чистое состояние
/// по умолчанию, а не ошибку наружу.
pub fn decode_state_or_default(blob: &str) -> GameState {
    match decode_state(blob) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("не удалось разобрать сохранённое состояние ({err}), начинаем с чистого");
            GameState::default()
        }
    }
}
