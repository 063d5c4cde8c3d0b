use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::dice::DiceKind;
use crate::domain::mode::GameMode;
use crate::domain::score::Score;

/// Стиль отображения счёта. Ядро его не интерпретирует —
/// это ключ для визуального счётчика на фронте.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum CounterStyle {
    Numbers,
    Matches,
    Sticks,
    Stones,
    Beans,
}

impl CounterStyle {
    pub fn code(self) -> &'static str {
        match self {
            CounterStyle::Numbers => "numbers",
            CounterStyle::Matches => "matches",
            CounterStyle::Sticks => "sticks",
            CounterStyle::Stones => "stones",
            CounterStyle::Beans => "beans",
        }
    }

    /// Незнакомый код — обычные числа.
    pub fn from_code(code: &str) -> Self {
        match code {
            "numbers" => CounterStyle::Numbers,
            "matches" => CounterStyle::Matches,
            "sticks" => CounterStyle::Sticks,
            "stones" => CounterStyle::Stones,
            "beans" => CounterStyle::Beans,
            _ => CounterStyle::Numbers,
        }
    }
}

impl Default for CounterStyle {
    fn default() -> Self {
        CounterStyle::Numbers
    }
}

impl From<String> for CounterStyle {
    fn from(code: String) -> Self {
        CounterStyle::from_code(&code)
    }
}

impl From<CounterStyle> for String {
    fn from(style: CounterStyle) -> Self {
        style.code().to_string()
    }
}

impl fmt::Display for CounterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Настройки игры.
///
/// Каждое поле имеет значение по умолчанию: неполный или старый блоб
/// при десериализации дополняется, а не валит загрузку целиком.
/// Во время незавершённого броска настройки не меняются; изменения
/// действуют со следующего броска/сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameSettings {
    /// Локаль интерфейса. Для ядра — непрозрачный ключ.
    pub locale: String,
    /// Тема оформления — ключ внешнего каталога тем.
    pub theme: String,
    pub sound_enabled: bool,
    pub game_mode: GameMode,
    pub dice_kind: DiceKind,
    /// Сколько кубиков бросается за один бросок.
    pub dice_count: u32,
    /// Сколько бросков делает участник за один ход.
    pub rolls_per_turn: u32,
    /// Целевой счёт: достигший его участник выигрывает сессию.
    pub target_score: Score,
    /// Лимит раундов на сессию; 0 — без лимита.
    pub max_rounds: u32,
    pub max_participants: u32,
    /// Ротация состава после каждого раунда (первый уходит в конец).
    pub rotate_turns: bool,
    pub counter_style: CounterStyle,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            locale: "es".to_string(),
            theme: "classic-casino".to_string(),
            sound_enabled: true,
            game_mode: GameMode::Classic,
            dice_kind: DiceKind::D6,
            dice_count: 2,
            rolls_per_turn: 1,
            target_score: Score(100),
            max_rounds: 0,
            max_participants: 4,
            rotate_turns: false,
            counter_style: CounterStyle::Numbers,
        }
    }
}

impl GameSettings {
    /// Проверка конфигурации. Причина возвращается строкой,
    /// наверх она уходит как `GameError::InvalidConfiguration`.
    pub fn validate(&self) -> Result<(), String> {
        if self.dice_count == 0 {
            return Err("GameSettings: dice_count = 0".into());
        }
        if self.rolls_per_turn == 0 {
            return Err("GameSettings: rolls_per_turn = 0".into());
        }
        if self.max_participants == 0 {
            return Err("GameSettings: max_participants = 0".into());
        }
        if self.target_score <= Score::ZERO {
            return Err("GameSettings: target_score <= 0".into());
        }
        Ok(())
    }

    /// Починка вместо отказа — применяется один раз при загрузке блоба.
    /// Нулевые счётчики получают минимальные рабочие значения, непригодный
    /// целевой счёт заменяется значением по умолчанию для активного режима.
    pub fn repair(&mut self) {
        if self.dice_count == 0 {
            self.dice_count = 1;
        }
        if self.rolls_per_turn == 0 {
            self.rolls_per_turn = 1;
        }
        if self.max_participants == 0 {
            self.max_participants = 1;
        }
        if self.target_score <= Score::ZERO {
            self.target_score = self.game_mode.info().default_target;
        }
    }
}
