use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::constants::REQUIRED_FIELDS;
use crate::error::{LoadError, SchemaError};
use crate::types::{CollectionSource, Quote};

/// Неизменяемая коллекция цитат, загруженная целиком в память.
///
/// Создаётся один раз через [`QuoteCollection::load`] (или `from_*`),
/// после этого только читается. Частично загруженных коллекций не бывает:
/// одна невалидная запись - и загрузка падает целиком.
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
    source: CollectionSource,
}

/// Структура верхнего уровня входного файла.
/// Отсутствующий `quotes` = пустая коллекция.
#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    quotes: Vec<Value>,
}

impl QuoteCollection {
    /// Загружает и валидирует коллекцию из JSON-файла
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_json_str(&text, CollectionSource::File(path.to_path_buf()))
    }

    /// То же, что [`load`](Self::load), но из произвольного reader
    pub fn from_reader<R: io::Read>(reader: R, source: CollectionSource) -> Result<Self, LoadError> {
        let raw: RawCollection = match serde_json::from_reader(reader) {
            Ok(raw) => raw,
            Err(e) => {
                return Err(LoadError::Format {
                    source_name: source,
                    source: e,
                });
            }
        };
        Self::from_raw(raw, source)
    }

    /// Разбор коллекции из строки (например, вшитой через `include_str!`)
    pub fn from_json_str(text: &str, source: CollectionSource) -> Result<Self, LoadError> {
        let raw: RawCollection = match serde_json::from_str(text) {
            Ok(raw) => raw,
            Err(e) => {
                return Err(LoadError::Format {
                    source_name: source,
                    source: e,
                });
            }
        };
        Self::from_raw(raw, source)
    }

    /// Коллекция из уже готовых записей. Источник - [`CollectionSource::Embedded`].
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            source: CollectionSource::Embedded,
        }
    }

    fn from_raw(raw: RawCollection, source: CollectionSource) -> Result<Self, LoadError> {
        let quotes = raw
            .quotes
            .into_iter()
            .enumerate()
            .map(|(index, value)| validate_record(index, value))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("loaded {} quotes from {}", quotes.len(), source);

        Ok(Self { quotes, source })
    }

    /// Все цитаты в исходном порядке
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Итератор по цитатам
    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    /// Число цитат
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Пустая ли коллекция
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Откуда загружена коллекция
    pub fn source(&self) -> &CollectionSource {
        &self.source
    }
}

impl<'a> IntoIterator for &'a QuoteCollection {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

/// Проверка одной записи. Сначала собираем все отсутствующие поля,
/// потом проверяем типы.
fn validate_record(index: usize, value: Value) -> Result<Quote, SchemaError> {
    let Value::Object(mut obj) = value else {
        return Err(SchemaError::NotAnObject { index });
    };

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !obj.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingFields { index, missing });
    }

    Ok(Quote {
        text: take_string(&mut obj, index, "text")?,
        author: take_string(&mut obj, index, "author")?,
        category: take_string(&mut obj, index, "category")?,
    })
}

fn take_string(
    obj: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, SchemaError> {
    match obj.remove(field) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(SchemaError::InvalidField { index, field }),
    }
}
