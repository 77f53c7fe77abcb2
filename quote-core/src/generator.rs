use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, index};
use rand::{Rng, SeedableRng};

use crate::collection::QuoteCollection;
use crate::error::ExportError;
use crate::stats::{CategorySummary, CollectionStats};
use crate::types::Quote;

/// Фасад над коллекцией: случайный выбор + все запросы на чтение.
///
/// Генератор случайных чисел принадлежит экземпляру и передаётся явно,
/// поэтому выбор воспроизводим при фиксированном seed
/// (см. [`QuoteGenerator::seeded`]).
#[derive(Debug)]
pub struct QuoteGenerator<R = StdRng> {
    collection: QuoteCollection,
    rng: R,
}

impl QuoteGenerator<StdRng> {
    /// RNG инициализируется из ОС
    pub fn new(collection: QuoteCollection) -> Self {
        Self::with_rng(collection, StdRng::from_os_rng())
    }

    /// Детерминированный генератор
    pub fn seeded(collection: QuoteCollection, seed: u64) -> Self {
        Self::with_rng(collection, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuoteGenerator<R> {
    /// Генератор с произвольным RNG (например, для тестов)
    pub fn with_rng(collection: QuoteCollection, rng: R) -> Self {
        Self { collection, rng }
    }

    /// Коллекция, над которой работает генератор
    pub fn collection(&self) -> &QuoteCollection {
        &self.collection
    }

    /// Случайная цитата (опционально из категории).
    /// `None`, если подходящих записей нет.
    pub fn random_quote(&mut self, category: Option<&str>) -> Option<&Quote> {
        let pool = self.collection.pool(category);
        pool.choose(&mut self.rng).copied()
    }

    /// `count` случайных цитат.
    ///
    /// - пустой пул или `count == 0` -> пустой результат
    /// - `count <= pool.len()` -> выборка без повторов, порядок случайный
    /// - `count > pool.len()` -> выборка с возвращением, повторы возможны
    pub fn multiple_quotes(&mut self, count: usize, category: Option<&str>) -> Vec<&Quote> {
        let pool = self.collection.pool(category);
        if pool.is_empty() || count == 0 {
            return Vec::new();
        }

        if count <= pool.len() {
            // index::sample отдаёт индексы уже перемешанными
            index::sample(&mut self.rng, pool.len(), count)
                .into_iter()
                .map(|i| pool[i])
                .collect()
        } else {
            (0..count)
                .map(|_| pool[self.rng.random_range(0..pool.len())])
                .collect()
        }
    }

    /// См. [`QuoteCollection::categories`]
    pub fn categories(&self) -> BTreeSet<String> {
        self.collection.categories()
    }

    /// См. [`QuoteCollection::authors`]
    pub fn authors(&self) -> BTreeSet<String> {
        self.collection.authors()
    }

    /// См. [`QuoteCollection::quotes_by_author`]
    pub fn quotes_by_author(&self, author: &str) -> Vec<&Quote> {
        self.collection.quotes_by_author(author)
    }

    /// См. [`QuoteCollection::search`]
    pub fn search(&self, keyword: &str) -> Vec<&Quote> {
        self.collection.search(keyword)
    }

    /// См. [`QuoteCollection::author_frequencies`]
    pub fn author_frequencies(&self) -> IndexMap<String, usize> {
        self.collection.author_frequencies()
    }

    /// См. [`QuoteCollection::statistics`]
    pub fn statistics(&self) -> CollectionStats {
        self.collection.statistics()
    }

    /// См. [`QuoteCollection::category_summaries`]
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.collection.category_summaries()
    }

    /// См. [`QuoteCollection::export`]
    pub fn export(&self, path: impl AsRef<Path>, category: Option<&str>) -> Result<usize, ExportError> {
        self.collection.export(path, category)
    }
}
