use serde::{Deserialize, Serialize};

use crate::domain::score::Score;
use crate::domain::ParticipantId;
use crate::engine::history::SessionSummary;

/// Событие движка для внешнего рендера.
///
/// Ядро определяет только словарь событий; как их показывать
/// (таблица, тосты, звук) — забота подписчика.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEvent {
    /// Началась новая сессия.
    SessionStarted { session: u64 },

    /// Ход перешёл к другому участнику.
    TurnChanged {
        participant_id: ParticipantId,
        index: usize,
    },

    /// Бросок разрешён: выпавшие грани и начисленная дельта.
    DiceRolled {
        participant_id: ParticipantId,
        faces: Vec<u32>,
        delta: Score,
        new_score: Score,
    },

    /// Раунд завершён, начался следующий.
    RoundEnded { round: u32 },

    /// Участник достиг целевого счёта.
    WinnerDeclared {
        participant_id: ParticipantId,
        score: Score,
    },

    /// Сессия завершена: победа, лимит раундов или явный перезапуск.
    SessionEnded { summary: SessionSummary },

    /// Информационное сообщение для пользователя.
    Notice { kind: NoticeKind },
}

/// Ключи пользовательских уведомлений. Тексты хранит фронт в своих
/// таблицах локализации.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoticeKind {
    /// Действие требует хотя бы одного участника.
    AddParticipantsFirst,
    /// Натуральные 21 на первом броске (блэкджек).
    NaturalTwentyOne,
    /// Перебор — сумма больше 21 (блэкджек).
    Busted,
}

/// Приёмник событий. Реализуется рендером/фронтом.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Заглушка: молча отбрасывает события.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Запоминает все события подряд — удобно в тестах.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
