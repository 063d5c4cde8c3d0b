use serde::{Deserialize, Serialize};

use crate::domain::score::Score;
use crate::domain::ParticipantId;

/// Участник игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Ключ аватара во внешнем каталоге. Для ядра это просто строка.
    pub avatar: String,
    /// Накопленный счёт в текущей сессии.
    pub score: Score,
    /// Сколько бросков участник уже сделал в текущей сессии.
    pub rounds: u32,
}

impl Participant {
    pub fn new(id: ParticipantId, descriptor: ParticipantDescriptor) -> Self {
        Self {
            id,
            name: descriptor.name,
            avatar: descriptor.avatar,
            score: Score::ZERO,
            rounds: 0,
        }
    }
}

/// Данные для создания или редактирования участника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantDescriptor {
    pub name: String,
    pub avatar: String,
}
