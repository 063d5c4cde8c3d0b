use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::score::Score;

/// Режим игры — именованный набор правил подсчёта очков.
///
/// Правила применяются ко всем броскам в рамках сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum GameMode {
    /// Обычное накопление: дельта = сумма граней.
    Classic,
    /// Покер на костях: фиксированные выплаты за комбинации.
    Poker,
    /// Генерала: сервированная генерала и эскалера.
    Generala,
    /// Блэкджек: стремимся к 21, перебор штрафуется.
    Blackjack,
    /// Труко: грани пересчитываются по таблице карточных значений.
    Truco,
}

/// Числовые параметры режима.
///
/// Названия, описания и тексты особых правил — это локализация;
/// фронт достаёт их из своих таблиц по `GameMode::code()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameModeInfo {
    pub min_players: u32,
    pub max_players: u32,
    /// Целевой счёт по умолчанию для этого режима.
    pub default_target: Score,
}

impl GameMode {
    pub const ALL: [GameMode; 5] = [
        GameMode::Classic,
        GameMode::Poker,
        GameMode::Generala,
        GameMode::Blackjack,
        GameMode::Truco,
    ];

    /// Строковый код режима — ключ для сохранения и локализации.
    pub fn code(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Poker => "poker",
            GameMode::Generala => "generala",
            GameMode::Blackjack => "blackjack",
            GameMode::Truco => "truco",
        }
    }

    /// Разбор кода. Незнакомый режим считается classic:
    /// дельта тогда — обычная сумма граней.
    pub fn from_code(code: &str) -> Self {
        match code {
            "classic" => GameMode::Classic,
            "poker" => GameMode::Poker,
            "generala" => GameMode::Generala,
            "blackjack" => GameMode::Blackjack,
            "truco" => GameMode::Truco,
            _ => GameMode::Classic,
        }
    }

    /// Параметры режима из каталога.
    pub fn info(self) -> GameModeInfo {
        match self {
            GameMode::Classic => GameModeInfo {
                min_players: 2,
                max_players: 10,
                default_target: Score(100),
            },
            GameMode::Poker => GameModeInfo {
                min_players: 2,
                max_players: 8,
                default_target: Score(1000),
            },
            GameMode::Generala => GameModeInfo {
                min_players: 2,
                max_players: 6,
                default_target: Score(10_000),
            },
            GameMode::Blackjack => GameModeInfo {
                min_players: 2,
                max_players: 7,
                default_target: Score(500),
            },
            GameMode::Truco => GameModeInfo {
                min_players: 2,
                max_players: 4,
                default_target: Score(30),
            },
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::Classic
    }
}

impl From<String> for GameMode {
    fn from(code: String) -> Self {
        GameMode::from_code(&code)
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        mode.code().to_string()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
