use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::CollectionSource;

/// Верхнеуровневый тип ошибок крейта
#[derive(Debug, Error)]
pub enum QuoteCoreError {
    /// Ошибки загрузки коллекции
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Ошибки экспорта
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Ошибки загрузки коллекции. Любая из них прерывает загрузку целиком.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Файла нет
    #[error("quotes file not found: {}", path.display())]
    NotFound {
        /// путь, по которому искали файл
        path: PathBuf,
    },

    /// Файл есть, но прочитать не удалось
    #[error("failed to read quotes file: {}", path.display())]
    Io {
        /// путь к файлу коллекции
        path: PathBuf,
        /// исходная ошибка ввода-вывода
        #[source]
        source: io::Error,
    },

    /// Невалидный JSON или неверная структура верхнего уровня
    #[error("invalid JSON format in quotes file {source_name}: {source}")]
    Format {
        /// откуда читали
        source_name: CollectionSource,
        /// диагностика парсера
        #[source]
        source: serde_json::Error,
    },

    /// Запись не проходит проверку схемы
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Нарушения схемы отдельной записи
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Запись не является JSON-объектом
    #[error("quote at index {index} is not an object")]
    NotAnObject {
        /// индекс записи в массиве `quotes`
        index: usize,
    },

    /// Нет обязательных полей
    #[error("quote at index {index} is missing required fields: {}", missing.join(", "))]
    MissingFields {
        /// индекс записи в массиве `quotes`
        index: usize,
        /// имена отсутствующих полей
        missing: Vec<&'static str>,
    },

    /// Поле есть, но не строка
    #[error("quote at index {index}: field `{field}` must be a string")]
    InvalidField {
        /// индекс записи в массиве `quotes`
        index: usize,
        /// имя поля
        field: &'static str,
    },
}

impl SchemaError {
    /// Индекс записи, на которой сломалась проверка
    pub fn index(&self) -> usize {
        match self {
            SchemaError::NotAnObject { index }
            | SchemaError::MissingFields { index, .. }
            | SchemaError::InvalidField { index, .. } => *index,
        }
    }
}

/// Ошибки экспорта
#[derive(Debug, Error)]
pub enum ExportError {
    /// Не удалось создать/записать файл
    #[error("failed to write export file: {}", path.display())]
    Io {
        /// целевой файл
        path: PathBuf,
        /// исходная ошибка ввода-вывода
        #[source]
        source: io::Error,
    },

    /// Ошибка сериализации
    #[error("failed to serialize quotes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Попытка записать поверх исходного файла коллекции
    #[error("refusing to overwrite the source collection: {}", path.display())]
    SameAsSource {
        /// путь к исходному файлу
        path: PathBuf,
    },
}
