use std::path::Path;

use quote_core::{CollectionSource, LoadError, QuoteCollection, QuoteGenerator};

/// Коллекция по умолчанию вшита в бинарник
const DEFAULT_QUOTES: &str = include_str!("../assets/quotes.json");

/// Загружает коллекцию из файла, если он задан, иначе встроенную.
pub(crate) fn load_collection(path: Option<&Path>) -> Result<QuoteCollection, LoadError> {
    match path {
        Some(p) => QuoteCollection::load(p),
        None => QuoteCollection::from_json_str(DEFAULT_QUOTES, CollectionSource::Embedded),
    }
}

pub(crate) fn build_generator(collection: QuoteCollection, seed: Option<u64>) -> QuoteGenerator {
    match seed {
        Some(seed) => QuoteGenerator::seeded(collection, seed),
        None => QuoteGenerator::new(collection),
    }
}
