use log::{debug, info};

use crate::domain::mode::GameMode;
use crate::domain::participant::{Participant, ParticipantDescriptor};
use crate::domain::score::Score;
use crate::domain::settings::GameSettings;
use crate::domain::ParticipantId;
use crate::engine::errors::GameError;
use crate::engine::events::{EventSink, GameEvent, NoticeKind};
use crate::engine::history::{RollRecord, SessionSummary, Standing, RECENT_HISTORY_WINDOW};
use crate::engine::RandomSource;
use crate::eval::score_roll;
use crate::state::GameState;

/// Статус броска для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum RollStatus {
    /// Сессия продолжается.
    Ongoing,
    /// Этот бросок завершил сессию: победа или лимит раундов.
    SessionEnded(SessionSummary),
}

/// Результат разрешённого броска.
#[derive(Clone, Debug, PartialEq)]
pub struct RollOutcome {
    pub record: RollRecord,
    pub status: RollStatus,
}

/// Контроллер очереди ходов, раундов и сессий.
///
/// Владеет всем игровым состоянием; мутации идут только через его операции.
/// Никаких глобальных синглтонов: вызывающий код держит явную ссылку и
/// сам передаёт RNG, приёмник событий и время.
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    /// Защита от повторного входа: true между begin_roll и resolve_roll.
    /// В снэпшот не сохраняется.
    is_rolling: bool,
}

impl GameController {
    /// Новый контроллер с чистым состоянием и настройками по умолчанию.
    pub fn new() -> Self {
        Self::from_state(GameState::default())
    }

    /// Новый контроллер с заданными настройками.
    pub fn with_settings(settings: GameSettings) -> Result<Self, GameError> {
        settings.validate().map_err(GameError::InvalidConfiguration)?;
        let mut state = GameState::default();
        state.settings = settings;
        Ok(Self::from_state(state))
    }

    /// Восстановить контроллер из сохранённого снэпшота.
    /// Снэпшот чинится (`GameState::repair`) до использования.
    pub fn from_state(mut state: GameState) -> Self {
        state.repair();
        Self {
            state,
            is_rolling: false,
        }
    }

    /// Текущее состояние — для рендера и для записи в хранилище.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Копия состояния для сохранения целиком.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.state.settings
    }

    /// Заменить настройки. Во время незавершённого броска запрещено;
    /// изменения действуют со следующего броска.
    pub fn update_settings(&mut self, settings: GameSettings) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        settings.validate().map_err(GameError::InvalidConfiguration)?;
        self.state.settings = settings;
        Ok(())
    }

    /// Участник, который ходит сейчас (None вне раунда).
    pub fn current_participant(&self) -> Option<&Participant> {
        if !self.state.round_in_progress {
            return None;
        }
        self.state.participants.get(self.state.current_participant_index)
    }

    /// Таблица лидеров: участники по убыванию счёта.
    pub fn leaderboard(&self) -> Vec<&Participant> {
        let mut sorted: Vec<&Participant> = self.state.participants.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    /// Последние броски для отображения (окно из 10 записей).
    /// Полная история при этом остаётся нетронутой.
    pub fn recent_history(&self) -> &[RollRecord] {
        let n = self.state.history.len().min(RECENT_HISTORY_WINDOW);
        &self.state.history[..n]
    }

    //
    // Броски
    //

    /// Первая фаза броска: проверки и захват замка.
    ///
    /// Фаза отдельная, чтобы фронт мог показать анимацию между запросом и
    /// разрешением; повторный запрос в этом окне получает AlreadyRolling,
    /// и очередь ходов не продвигается дважды.
    pub fn begin_roll(&mut self) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        if self.state.participants.is_empty() {
            return Err(GameError::NoParticipants);
        }
        if self.state.session_over {
            return Err(GameError::SessionFinished);
        }

        if !self.state.round_in_progress {
            self.state.round_in_progress = true;
            self.state.current_participant_index = 0;
            self.state.rolls_in_turn = 0;
            // С первого броска сессия считается начатой,
            // состав участников с этого момента заблокирован.
            self.state.session_started = true;
        }

        self.is_rolling = true;
        Ok(())
    }

    /// Вторая фаза: генерация граней, начисление очков, продвижение очереди.
    pub fn resolve_roll<R: RandomSource, S: EventSink>(
        &mut self,
        rng: &mut R,
        sink: &mut S,
        now_ts: u64,
    ) -> Result<RollOutcome, GameError> {
        if !self.is_rolling {
            return Err(GameError::Internal("resolve_roll без begin_roll"));
        }

        let settings = self.state.settings.clone();
        let sides = settings.dice_kind.face_count();

        let faces: Vec<u32> = (0..settings.dice_count).map(|_| rng.roll(sides)).collect();
        let raw_total: i64 = faces.iter().map(|&f| i64::from(f)).sum();

        let idx = self.state.current_participant_index;
        let prior_rounds = self.state.participants[idx].rounds;
        let delta = score_roll(settings.game_mode, &faces, prior_rounds);

        let record = RollRecord {
            participant_id: self.state.participants[idx].id,
            participant_name: self.state.participants[idx].name.clone(),
            dice_kind: settings.dice_kind,
            dice_count: settings.dice_count,
            faces: faces.clone(),
            raw_total,
            delta,
            round: self.state.current_round,
            ts: now_ts,
        };
        self.state.history.insert(0, record.clone());

        {
            let participant = &mut self.state.participants[idx];
            participant.score += delta;
            participant.rounds += 1;

            sink.emit(GameEvent::DiceRolled {
                participant_id: participant.id,
                faces,
                delta,
                new_score: participant.score,
            });
        }

        self.emit_mode_notices(&record, prior_rounds, sink);

        // Три независимые проверки после броска, в фиксированном порядке:
        // продвижение хода/раунда (с лимитом раундов до ротации),
        // затем — проверка победы поверх всего остального.
        self.advance_after_roll(sink, now_ts);
        if !self.state.session_over {
            self.check_winner(sink, now_ts);
        }

        self.is_rolling = false;

        let status = if self.state.session_over {
            // Итоги только что записаны первым элементом sessions_history.
            RollStatus::SessionEnded(self.state.sessions_history[0].clone())
        } else {
            RollStatus::Ongoing
        };

        Ok(RollOutcome { record, status })
    }

    /// Обе фазы сразу — для синхронных вызовов без анимации.
    pub fn request_roll<R: RandomSource, S: EventSink>(
        &mut self,
        rng: &mut R,
        sink: &mut S,
        now_ts: u64,
    ) -> Result<RollOutcome, GameError> {
        self.begin_roll()?;
        self.resolve_roll(rng, sink, now_ts)
    }

    /// Сдвиг счётчиков после начисления очков.
    ///
    /// Порядок фиксированный: счётчик бросков в ходе → следующий участник →
    /// конец раунда. На конце раунда сначала проверяется лимит раундов,
    /// ротация применяется только если сессия продолжается.
    fn advance_after_roll<S: EventSink>(&mut self, sink: &mut S, now_ts: u64) {
        self.state.rolls_in_turn += 1;
        if self.state.rolls_in_turn < self.state.settings.rolls_per_turn {
            // Участник бросает ещё раз.
            return;
        }

        self.state.rolls_in_turn = 0;
        self.state.current_participant_index += 1;

        if self.state.current_participant_index < self.state.participants.len() {
            let next = &self.state.participants[self.state.current_participant_index];
            sink.emit(GameEvent::TurnChanged {
                participant_id: next.id,
                index: self.state.current_participant_index,
            });
            return;
        }

        // Раунд завершён.
        self.state.current_round += 1;
        self.state.current_participant_index = 0;
        self.state.round_in_progress = false;

        let max_rounds = self.state.settings.max_rounds;
        if max_rounds > 0 && self.state.current_round > max_rounds {
            debug!("лимит раундов {max_rounds} достигнут — закрываем сессию");
            self.close_session(sink, now_ts);
            return;
        }

        // Ротация меняет порядок будущих ходов,
        // уже начисленные очки она не трогает.
        if self.state.settings.rotate_turns && self.state.participants.len() > 1 {
            let first = self.state.participants.remove(0);
            self.state.participants.push(first);
        }

        sink.emit(GameEvent::RoundEnded {
            round: self.state.current_round,
        });
    }

    /// Проверка победы: выполняется после каждого броска, поверх и
    /// независимо от конца раунда и лимита раундов.
    fn check_winner<S: EventSink>(&mut self, sink: &mut S, now_ts: u64) {
        let target = self.state.settings.target_score;
        let winner = self
            .state
            .participants
            .iter()
            .find(|p| p.score >= target)
            .map(|p| (p.id, p.score));

        if let Some((participant_id, score)) = winner {
            sink.emit(GameEvent::WinnerDeclared {
                participant_id,
                score,
            });
            self.close_session(sink, now_ts);
        }
    }

    /// Закрыть сессию: записать итоги и перевести движок в терминальное
    /// состояние до start_new_session / reset_all.
    fn close_session<S: EventSink>(&mut self, sink: &mut S, now_ts: u64) {
        let summary = self.build_summary(now_ts);
        info!(
            "сессия {} завершена, победитель {} ({})",
            summary.session, summary.winner_name, summary.winning_score
        );
        self.state.sessions_history.insert(0, summary.clone());
        self.state.session_over = true;
        self.state.round_in_progress = false;
        sink.emit(GameEvent::SessionEnded { summary });
    }

    /// Итоги текущей сессии: победитель — лидер по очкам.
    fn build_summary(&self, now_ts: u64) -> SessionSummary {
        let mut standings: Vec<Standing> = self
            .state
            .participants
            .iter()
            .map(|p| Standing {
                participant_id: p.id,
                name: p.name.clone(),
                score: p.score,
                rounds: p.rounds,
            })
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));

        let (winner_id, winner_name, winning_score) = {
            let winner = standings
                .first()
                .expect("итоги считаются только при непустом составе");
            (winner.participant_id, winner.name.clone(), winner.score)
        };

        // Внутри раунда счётчик показывает раунд, который сейчас играется;
        // после конца раунда он уже указывает на следующий.
        let rounds_played = if self.state.round_in_progress {
            self.state.current_round
        } else {
            self.state.current_round.saturating_sub(1)
        };

        SessionSummary {
            session: self.state.total_sessions,
            winner_id,
            winner_name,
            winning_score,
            rounds_played,
            completed_ts: now_ts,
            standings,
        }
    }

    /// Уведомления по правилам режима — ключи для фронта.
    fn emit_mode_notices<S: EventSink>(
        &self,
        record: &RollRecord,
        prior_rounds: u32,
        sink: &mut S,
    ) {
        if self.state.settings.game_mode != GameMode::Blackjack {
            return;
        }
        if prior_rounds == 0 && record.raw_total == 21 {
            sink.emit(GameEvent::Notice {
                kind: NoticeKind::NaturalTwentyOne,
            });
        } else if record.raw_total > 21 {
            sink.emit(GameEvent::Notice {
                kind: NoticeKind::Busted,
            });
        }
    }

    //
    // Сессии
    //

    /// Закрыть текущую сессию (если в ней есть очки) и начать новую.
    ///
    /// Участники сохраняются; их счёт, счётчики ходов и история бросков
    /// обнуляются.
    pub fn start_new_session<S: EventSink>(
        &mut self,
        sink: &mut S,
        now_ts: u64,
    ) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        if self.state.participants.is_empty() {
            sink.emit(GameEvent::Notice {
                kind: NoticeKind::AddParticipantsFirst,
            });
            return Err(GameError::NoParticipants);
        }

        // Итоги пишутся один раз на сессию: если её уже закрыла победа
        // или лимит раундов, повторной записи нет.
        if !self.state.session_over
            && self.state.participants.iter().any(|p| !p.score.is_zero())
        {
            let summary = self.build_summary(now_ts);
            self.state.sessions_history.insert(0, summary.clone());
            sink.emit(GameEvent::SessionEnded { summary });
        }

        for p in self.state.participants.iter_mut() {
            p.score = Score::ZERO;
            p.rounds = 0;
        }
        self.state.current_round = 1;
        self.state.current_participant_index = 0;
        self.state.rolls_in_turn = 0;
        self.state.round_in_progress = false;
        self.state.session_started = false;
        self.state.session_over = false;
        self.state.history.clear();
        self.state.total_sessions += 1;

        sink.emit(GameEvent::SessionStarted {
            session: self.state.total_sessions,
        });
        Ok(())
    }

    /// Полный сброс: участники, история, итоги сессий и все счётчики
    /// возвращаются к начальным значениям. Настройки сохраняются.
    /// Повторный вызов ничего не меняет.
    pub fn reset_all(&mut self) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        let settings = self.state.settings.clone();
        self.state = GameState::default();
        self.state.settings = settings;
        Ok(())
    }

    //
    // Состав участников
    //

    /// Добавить участника. После старта сессии состав заблокирован.
    pub fn add_participant(
        &mut self,
        descriptor: ParticipantDescriptor,
    ) -> Result<ParticipantId, GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        if self.state.session_started {
            return Err(GameError::SessionAlreadyStarted);
        }
        let cap = self.state.settings.max_participants;
        if self.state.participants.len() as u32 >= cap {
            return Err(GameError::CapacityExceeded(cap));
        }

        let id = self
            .state
            .participants
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;
        self.state.participants.push(Participant::new(id, descriptor));
        Ok(id)
    }

    /// Переименовать участника или сменить аватар.
    pub fn edit_participant(
        &mut self,
        id: ParticipantId,
        descriptor: ParticipantDescriptor,
    ) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        if self.state.session_started {
            return Err(GameError::SessionAlreadyStarted);
        }
        let participant = self
            .state
            .participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GameError::UnknownParticipant(id))?;
        participant.name = descriptor.name;
        participant.avatar = descriptor.avatar;
        Ok(())
    }

    /// Удалить участника по id. Разрешено только до старта сессии.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        if self.state.session_started {
            return Err(GameError::SessionAlreadyStarted);
        }
        let pos = self
            .state
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(GameError::UnknownParticipant(id))?;
        self.state.participants.remove(pos);
        self.clamp_after_removal();
        Ok(())
    }

    /// Удалить последнего добавленного участника.
    pub fn remove_last(&mut self) -> Result<(), GameError> {
        if self.is_rolling {
            return Err(GameError::AlreadyRolling);
        }
        if self.state.participants.is_empty() {
            return Err(GameError::NoParticipants);
        }
        if self.state.session_started {
            return Err(GameError::SessionAlreadyStarted);
        }
        self.state.participants.pop();
        self.clamp_after_removal();
        Ok(())
    }

    /// После удаления индекс текущего участника не должен выйти за границы;
    /// пустой состав означает, что раунд продолжаться не может.
    fn clamp_after_removal(&mut self) {
        if self.state.current_participant_index >= self.state.participants.len() {
            self.state.current_participant_index =
                self.state.participants.len().saturating_sub(1);
        }
        if self.state.participants.is_empty() {
            self.state.round_in_progress = false;
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
