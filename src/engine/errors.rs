use crate::domain::ParticipantId;

use thiserror::Error;

/// Ошибки игрового движка.
///
/// Все условия проверяются до мутации состояния (check-then-act):
/// неудачная операция оставляет состояние ровно таким, каким оно было.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Нет участников — сначала добавьте хотя бы одного")]
    NoParticipants,

    #[error("Бросок уже выполняется")]
    AlreadyRolling,

    #[error("Достигнут лимит участников ({0})")]
    CapacityExceeded(u32),

    #[error("Сессия уже началась — состав участников заблокирован")]
    SessionAlreadyStarted,

    #[error("Сессия завершена — начните новую")]
    SessionFinished,

    #[error("Участник {0} не найден")]
    UnknownParticipant(ParticipantId),

    #[error("Некорректная конфигурация: {0}")]
    InvalidConfiguration(String),

    #[error("Сохранённое состояние повреждено: {0}")]
    StorageCorrupt(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
