use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Количество очков. Обёртка над i64, чтобы не путать с обычными числами.
///
/// Тип знаковый: дельта броска бывает отрицательной (перебор в блэкджеке),
/// и счёт участника честно уходит в минус, без подрезания до нуля.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub i64);

impl Score {
    pub const ZERO: Score = Score(0);

    pub fn new(amount: i64) -> Self {
        Score(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Self::Output {
        Score(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Score {
    type Output = Score;

    fn sub(self, rhs: Score) -> Self::Output {
        Score(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Score) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
