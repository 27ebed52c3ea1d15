//! Ошибки операций над сборкой

use thiserror::Error;

use crate::{Face, FaceVariant, UnitId};

/// Локальные, восстановимые ошибки ядра. При ошибке состояние не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfiguratorError {
    /// Не выбрана грань (нужен выбор «модуль + грань»)
    #[error("no face selected: select a wall or the roof first")]
    NoFaceSelected,

    /// Вариант нельзя назначить этой грани (крыша только базовая)
    #[error("variant '{variant}' cannot be assigned to face '{face}'")]
    InvalidFaceForVariant { face: Face, variant: FaceVariant },

    /// Модуль с таким идентификатором отсутствует
    #[error("unknown unit #{0}")]
    UnknownUnit(UnitId),

    /// Повторяющийся идентификатор в загруженном описании
    #[error("duplicate unit #{0}")]
    DuplicateUnit(UnitId),

    /// Исчерпано пространство идентификаторов
    #[error("unit id space exhausted")]
    IdSpaceExhausted,
}
