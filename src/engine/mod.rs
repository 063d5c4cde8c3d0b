//! Игровой движок: очередь ходов, раунды, сессии, события.
//!
//! Высокоуровневый объект: `GameController`
//! Основные операции:
//!   - `request_roll` – выполнить бросок за текущего участника
//!   - `start_new_session` – закрыть текущую сессию и открыть новую
//!   - `add_participant` / `remove_participant` – управление составом

pub mod controller;
pub mod errors;
pub mod events;
pub mod history;

pub use controller::{GameController, RollOutcome, RollStatus};
pub use errors::GameError;
pub use events::{EventSink, GameEvent, NoticeKind, NullSink, RecordingSink};
pub use history::{RollRecord, SessionSummary, Standing, RECENT_HISTORY_WINDOW};

/// RNG интерфейс для движка.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерное целое в диапазоне [1, sides].
    fn roll(&mut self, sides: u32) -> u32;
}
