use serde::{Deserialize, Serialize};

use crate::domain::dice::DiceKind;
use crate::domain::score::Score;
use crate::domain::ParticipantId;

/// Сколько последних бросков показывается в истории на экране.
/// Полный список при этом не усечён — окно только для отображения.
pub const RECENT_HISTORY_WINDOW: usize = 10;

/// Запись об одном броске. Новые записи добавляются в начало списка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RollRecord {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub dice_kind: DiceKind,
    pub dice_count: u32,
    /// Выпавшие грани в порядке броска.
    pub faces: Vec<u32>,
    /// Сумма граней до применения правил режима.
    pub raw_total: i64,
    /// Дельта, фактически начисленная участнику.
    pub delta: Score,
    pub round: u32,
    /// Unix timestamp (секунды).
    pub ts: u64,
}

/// Строка финальной таблицы сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Standing {
    pub participant_id: ParticipantId,
    pub name: String,
    pub score: Score,
    pub rounds: u32,
}

/// Итоги одной завершённой сессии.
///
/// Записываются ровно один раз на сессию: при победе, при достижении
/// лимита раундов или при явном перезапуске с ненулевыми очками.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSummary {
    /// Порядковый номер сессии.
    pub session: u64,
    pub winner_id: ParticipantId,
    pub winner_name: String,
    pub winning_score: Score,
    /// Сколько раундов было сыграно.
    pub rounds_played: u32,
    /// Unix timestamp завершения (секунды).
    pub completed_ts: u64,
    /// Полный снимок итогов по убыванию счёта.
    pub standings: Vec<Standing>,
}
