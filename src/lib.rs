//! Ядро настольного счётчика бросков кубиков.
//!
//! Здесь только логика: очередь ходов, раунды, сессии, правила подсчёта
//! очков по режимам и сохраняемое состояние. Никакого рендера: фронт
//! подписывается на события (`EventSink`), реализует хранилище
//! (`GameStorage`) и сам решает, как показывать участников, историю
//! и уведомления. Локализация, темы и аватары для ядра — непрозрачные ключи.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod state;

pub use crate::domain::{
    DiceKind, GameMode, GameSettings, Participant, ParticipantDescriptor, ParticipantId, Score,
};
pub use crate::engine::{
    EventSink, GameController, GameError, GameEvent, RandomSource, RollOutcome, RollStatus,
};
pub use crate::state::GameState;
