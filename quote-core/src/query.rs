use std::collections::BTreeSet;

use crate::collection::QuoteCollection;
use crate::types::Quote;

/// Сравнение категорий: точное совпадение без учёта регистра.
/// Сравнивается подпись ([`Quote::category_label`]), та же, что в `categories()`.
pub fn category_matches(quote: &Quote, category: &str) -> bool {
    quote.category_label().to_lowercase() == category.to_lowercase()
}

/// Поиск подстроки без учёта регистра
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl QuoteCollection {
    /// Пул кандидатов: вся коллекция или только записи указанной категории.
    /// Порядок исходный.
    pub fn pool(&self, category: Option<&str>) -> Vec<&Quote> {
        match category {
            Some(cat) => self.iter().filter(|q| category_matches(q, cat)).collect(),
            None => self.iter().collect(),
        }
    }

    /// Все различные категории
    pub fn categories(&self) -> BTreeSet<String> {
        self.iter()
            .map(|q| q.category_label().to_string())
            .collect()
    }

    /// Все различные авторы
    pub fn authors(&self) -> BTreeSet<String> {
        self.iter().map(|q| q.author_label().to_string()).collect()
    }

    /// Цитаты, у которых имя автора содержит `author` (без учёта регистра).
    /// Сравнивается подпись ([`Quote::author_label`]), та же, что в `authors()`.
    pub fn quotes_by_author(&self, author: &str) -> Vec<&Quote> {
        self.iter()
            .filter(|q| contains_ci(q.author_label(), author))
            .collect()
    }

    /// Цитаты, текст которых содержит `keyword` (без учёта регистра)
    pub fn search(&self, keyword: &str) -> Vec<&Quote> {
        self.iter()
            .filter(|q| contains_ci(&q.text, keyword))
            .collect()
    }
}
