//! Сохраняемое состояние игры: один JSON-блоб на всё.

use serde::{Deserialize, Serialize};

use crate::domain::participant::Participant;
use crate::domain::settings::GameSettings;
use crate::engine::history::{RollRecord, SessionSummary};

/// Полное состояние игры.
///
/// После каждой мутирующей операции пишется в хранилище целиком
/// (last-writer-wins, без частичных записей) и читается обратно при старте.
/// Пропущенные в блобе поля дополняются значениями по умолчанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameState {
    pub participants: Vec<Participant>,
    /// История бросков, новые записи в начале.
    pub history: Vec<RollRecord>,
    /// Итоги завершённых сессий, новые в начале.
    pub sessions_history: Vec<SessionSummary>,
    pub settings: GameSettings,
    /// Номер текущего раунда, с 1.
    pub current_round: u32,
    /// Сквозной счётчик сессий, с 1.
    pub total_sessions: u64,
    /// Индекс участника, который ходит сейчас.
    pub current_participant_index: usize,
    /// Сколько бросков уже сделано в текущем ходе.
    pub rolls_in_turn: u32,
    pub round_in_progress: bool,
    /// Сессия считается начатой после первого броска; с этого момента
    /// состав участников заблокирован.
    pub session_started: bool,
    /// Терминальное состояние: сессию закрыла победа или лимит раундов.
    /// Новые броски не принимаются до start_new_session / reset_all.
    pub session_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            history: Vec::new(),
            sessions_history: Vec::new(),
            settings: GameSettings::default(),
            current_round: 1,
            total_sessions: 1,
            current_participant_index: 0,
            rolls_in_turn: 0,
            round_in_progress: false,
            session_started: false,
            session_over: false,
        }
    }
}

impl GameState {
    /// Починка после загрузки: блоб мог прийти от старой версии или
    /// с битыми значениями. Инварианты восстанавливаются, настройки
    /// дополняются значениями по умолчанию.
    pub fn repair(&mut self) {
        self.settings.repair();

        if self.current_round == 0 {
            self.current_round = 1;
        }
        if self.total_sessions == 0 {
            self.total_sessions = 1;
        }

        let len = self.participants.len();
        if self.current_participant_index >= len.max(1) {
            self.current_participant_index = len.saturating_sub(1);
        }
        if len == 0 && self.round_in_progress {
            log::warn!("раунд помечен активным при пустом составе — сбрасываем");
            self.round_in_progress = false;
        }
        if self.rolls_in_turn >= self.settings.rolls_per_turn {
            self.rolls_in_turn = 0;
        }
        if self.session_over {
            self.round_in_progress = false;
        }
    }

    /// Выполняются ли инварианты состояния (для проверок в тестах).
    pub fn is_consistent(&self) -> bool {
        self.current_participant_index < self.participants.len().max(1)
            && (!self.participants.is_empty() || !self.round_in_progress)
            && self.rolls_in_turn < self.settings.rolls_per_turn.max(1)
            && (!self.session_over || !self.round_in_progress)
    }
}
