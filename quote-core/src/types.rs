use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{UNCATEGORIZED, UNKNOWN_AUTHOR};

/// Одна цитата из коллекции.
///
/// Все три поля обязательны и проверяются при загрузке
/// (см. [`crate::collection`]). Лишние поля во входном JSON игнорируются.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Текст цитаты
    pub text: String,
    /// Автор
    pub author: String,
    /// Категория (motivation, wisdom, ...)
    pub category: String,
}

impl Quote {
    /// Новая цитата из трёх полей
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Имя автора для списков и статистики.
    /// Пустое (или из одних пробелов) значение заменяется на [`UNKNOWN_AUTHOR`].
    pub fn author_label(&self) -> &str {
        label_or(&self.author, UNKNOWN_AUTHOR)
    }

    /// Категория для списков и статистики.
    /// Пустое значение заменяется на [`UNCATEGORIZED`].
    pub fn category_label(&self) -> &str {
        label_or(&self.category, UNCATEGORIZED)
    }

    /// Длина текста в символах (Unicode scalar values, не байтах)
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" — {} [{}]",
            self.text,
            self.author_label(),
            self.category_label()
        )
    }
}

/// Откуда была загружена коллекция.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionSource {
    /// JSON-файл на диске
    File(PathBuf),
    /// Коллекция, вшитая в бинарник или собранная в памяти
    Embedded,
}

impl CollectionSource {
    /// Путь к файлу, если коллекция загружена с диска
    pub fn path(&self) -> Option<&Path> {
        match self {
            CollectionSource::File(p) => Some(p.as_path()),
            CollectionSource::Embedded => None,
        }
    }
}

impl fmt::Display for CollectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionSource::File(p) => write!(f, "{}", p.display()),
            CollectionSource::Embedded => write!(f, "<embedded>"),
        }
    }
}
