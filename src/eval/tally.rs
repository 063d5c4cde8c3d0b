use std::collections::BTreeMap;

/// Подсчёт одинаковых граней в броске.
///
/// Общий строительный блок для всех режимов: покеру нужны группы-пары,
/// генерале — «ровно пять одинаковых», труко — бонус за каждую пару.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTally {
    counts: BTreeMap<u32, u32>,
}

impl FaceTally {
    pub fn from_faces(faces: &[u32]) -> Self {
        let mut counts = BTreeMap::new();
        for &face in faces {
            *counts.entry(face).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Сколько «групп-пар»: значений, выпавших 2 и более раз.
    /// Тройка тоже считается группой-парой — это важно для фулл-хауса.
    pub fn pair_groups(&self) -> u32 {
        self.counts.values().filter(|&&c| c >= 2).count() as u32
    }

    /// Есть ли значение, выпавшее не менее n раз.
    pub fn has_at_least(&self, n: u32) -> bool {
        self.counts.values().any(|&c| c >= n)
    }

    /// Есть ли значение, выпавшее ровно n раз.
    pub fn has_exactly(&self, n: u32) -> bool {
        self.counts.values().any(|&c| c == n)
    }

    /// Сколько раз выпала конкретная грань.
    pub fn count_of(&self, face: u32) -> u32 {
        self.counts.get(&face).copied().unwrap_or(0)
    }

    /// Количество различных граней в броске.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}
