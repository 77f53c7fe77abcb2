//! # quote-core
//!
//! Коллекция цитат: загрузка, проверка, выборки, статистика и экспорт.
//!
//! Этот крейт содержит:
//!
//! - [`collection`] — загрузка и валидация коллекции из JSON
//! - [`query`] — фильтры по категории, автору и тексту
//! - [`generator`] — случайный выбор с явным, инициализируемым seed RNG
//! - [`stats`] — статистика по коллекции
//! - [`export`] — запись (отфильтрованной) коллекции в JSON-файл
//! - [`types`] — доменные типы
//! - [`error`] — типы ошибок, которые возвращают компоненты `quote-core`
//!
//! ## Быстрый пример
//!
//! ```rust
//! use quote_core::{CollectionSource, QuoteCollection, QuoteGenerator};
//!
//! let json = r#"{"quotes": [
//!     {"text": "Know thyself.", "author": "Socrates", "category": "wisdom"},
//!     {"text": "Carpe diem.", "author": "Horace", "category": "life"}
//! ]}"#;
//!
//! let collection = QuoteCollection::from_json_str(json, CollectionSource::Embedded).unwrap();
//! assert_eq!(collection.quotes_by_author("socr").len(), 1);
//!
//! let mut generator = QuoteGenerator::seeded(collection, 7);
//! let quote = generator.random_quote(Some("WISDOM")).unwrap();
//! assert_eq!(quote.author, "Socrates");
//! assert!(generator.random_quote(Some("poetry")).is_none());
//! ```
//!
//! ## Дизайн
//!
//! Коллекция загружается один раз и дальше только читается, поэтому
//! запросы никогда не возвращают ошибок: пустой результат вместо паники
//! или `Err`. Ошибки бывают только при загрузке ([`LoadError`]) и
//! экспорте ([`ExportError`]).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Загрузка и проверка коллекции.
pub mod collection;

/// Запросы на чтение: фильтры и поиск.
pub mod query;

/// Случайный выбор цитат.
pub mod generator;

/// Статистика по коллекции.
pub mod stats;

/// Экспорт в JSON.
pub mod export;

/// Доменные типы.
pub mod types;

/// Ошибки `quote-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{QUOTES_KEY, REQUIRED_FIELDS, TOP_AUTHORS_LIMIT, UNCATEGORIZED, UNKNOWN_AUTHOR};

// --- Re-exports (публичный фасад API) ---

pub use crate::collection::QuoteCollection;
pub use crate::error::{ExportError, LoadError, QuoteCoreError, SchemaError};
pub use crate::generator::QuoteGenerator;
pub use crate::stats::{CategorySummary, CollectionStats};
pub use crate::types::{CollectionSource, Quote};
