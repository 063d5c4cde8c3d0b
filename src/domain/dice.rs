use core::fmt;

use serde::{Deserialize, Serialize};

/// Тип кубика — сколько у него граней.
///
/// В сохранённом состоянии хранится строковый код ("d4".."d20"),
/// поэтому serde идёт через String в обе стороны.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum DiceKind {
    D4,
    D6,
    D8,
    D10,
    D20,
}

impl DiceKind {
    /// Количество граней.
    pub fn face_count(self) -> u32 {
        match self {
            DiceKind::D4 => 4,
            DiceKind::D6 => 6,
            DiceKind::D8 => 8,
            DiceKind::D10 => 10,
            DiceKind::D20 => 20,
        }
    }

    /// Строковый код типа кубика.
    pub fn code(self) -> &'static str {
        match self {
            DiceKind::D4 => "d4",
            DiceKind::D6 => "d6",
            DiceKind::D8 => "d8",
            DiceKind::D10 => "d10",
            DiceKind::D20 => "d20",
        }
    }

    /// Разбор кода. Незнакомый код превращается в обычный d6.
    pub fn from_code(code: &str) -> Self {
        match code {
            "d4" => DiceKind::D4,
            "d6" => DiceKind::D6,
            "d8" => DiceKind::D8,
            "d10" => DiceKind::D10,
            "d20" => DiceKind::D20,
            _ => DiceKind::D6,
        }
    }
}

impl Default for DiceKind {
    fn default() -> Self {
        DiceKind::D6
    }
}

impl From<String> for DiceKind {
    fn from(code: String) -> Self {
        DiceKind::from_code(&code)
    }
}

impl From<DiceKind> for String {
    fn from(kind: DiceKind) -> Self {
        kind.code().to_string()
    }
}

impl fmt::Display for DiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
