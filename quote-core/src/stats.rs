use indexmap::IndexMap;
use serde::Serialize;

use crate::collection::QuoteCollection;
use crate::constants::TOP_AUTHORS_LIMIT;
use crate::types::Quote;

/// Сводная статистика по коллекции.
///
/// Частоты хранятся в [`IndexMap`] в порядке первого появления ключа;
/// на этом порядке держится разрешение ничьих в `top_authors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    /// всего цитат
    pub total_quotes: usize,
    /// различных категорий
    pub total_categories: usize,
    /// различных авторов
    pub total_authors: usize,
    /// категория -> число цитат
    pub categories: IndexMap<String, usize>,
    /// до [`TOP_AUTHORS_LIMIT`] самых частых авторов, по убыванию
    pub top_authors: IndexMap<String, usize>,
    /// средняя длина текста в символах, 0 для пустой коллекции
    pub average_quote_length: f64,
}

/// Разбивка по одной категории
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// подпись категории
    pub category: String,
    /// число цитат в категории
    pub count: usize,
    /// средняя длина текста в символах
    pub average_length: f64,
}

fn frequencies<'a>(labels: impl Iterator<Item = &'a str>) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Самые частые ключи. Сортировка стабильная, так что при равных
/// частотах раньше идёт тот, кто раньше встретился.
fn most_common(counts: &IndexMap<String, usize>, limit: usize) -> IndexMap<String, usize> {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));
    entries
        .into_iter()
        .take(limit)
        .map(|(k, v)| (k.clone(), *v))
        .collect()
}

fn average_len<'a>(quotes: impl Iterator<Item = &'a Quote>) -> f64 {
    let (total, n) = quotes.fold((0usize, 0usize), |(total, n), q| (total + q.text_len(), n + 1));
    if n == 0 { 0.0 } else { total as f64 / n as f64 }
}

impl QuoteCollection {
    /// категория -> число цитат, в порядке первого появления
    pub fn category_frequencies(&self) -> IndexMap<String, usize> {
        frequencies(self.iter().map(Quote::category_label))
    }

    /// автор -> число цитат, в порядке первого появления
    pub fn author_frequencies(&self) -> IndexMap<String, usize> {
        frequencies(self.iter().map(Quote::author_label))
    }

    /// Сводная статистика, см. [`CollectionStats`]
    pub fn statistics(&self) -> CollectionStats {
        let categories = self.category_frequencies();
        let authors = self.author_frequencies();

        CollectionStats {
            total_quotes: self.len(),
            total_categories: categories.len(),
            total_authors: authors.len(),
            top_authors: most_common(&authors, TOP_AUTHORS_LIMIT),
            categories,
            average_quote_length: average_len(self.iter()),
        }
    }

    /// Количество и средняя длина цитат по каждой категории,
    /// в порядке первого появления категории.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        let mut groups: IndexMap<&str, Vec<&Quote>> = IndexMap::new();
        for q in self.iter() {
            groups.entry(q.category_label()).or_default().push(q);
        }

        groups
            .into_iter()
            .map(|(category, quotes)| CategorySummary {
                category: category.to_string(),
                count: quotes.len(),
                average_length: average_len(quotes.into_iter()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::fixture;

    #[test]
    fn statistics_on_fixture() {
        let stats = fixture().statistics();

        assert_eq!(stats.total_quotes, 4);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.total_authors, 3);

        let cats: Vec<(&str, usize)> = stats
            .categories
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(cats, vec![("test", 2), ("motivation", 1), ("wisdom", 1)]);

        // "Test quote N" = 12 символов
        assert!((stats.average_quote_length - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn category_counts_sum_to_total() {
        let stats = fixture().statistics();
        let sum: usize = stats.categories.values().sum();
        assert_eq!(sum, stats.total_quotes);
    }

    #[test]
    fn top_authors_break_ties_by_first_appearance() {
        let col = QuoteCollection::from_quotes(
            ["B", "A", "C", "A", "D", "E", "F", "G", "F"]
                .into_iter()
                .map(|a| Quote::new("x", a, "c"))
                .collect(),
        );

        let stats = col.statistics();
        let top: Vec<(&str, usize)> = stats
            .top_authors
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();

        // ничьи по 1 разрешаются порядком появления: B, C, D
        assert_eq!(top, vec![("A", 2), ("F", 2), ("B", 1), ("C", 1), ("D", 1)]);
    }

    #[test]
    fn author_frequencies_count_exact_labels() {
        let freq = fixture().author_frequencies();
        assert_eq!(freq.get("Author 1"), Some(&2));
        assert_eq!(freq.get("Author 2"), Some(&1));
        assert_eq!(freq.get("author 1"), None);
    }

    #[test]
    fn empty_collection_has_zero_average() {
        let stats = QuoteCollection::from_quotes(Vec::new()).statistics();
        assert_eq!(stats.total_quotes, 0);
        assert_eq!(stats.average_quote_length, 0.0);
        assert!(stats.categories.is_empty());
        assert!(stats.top_authors.is_empty());
    }

    #[test]
    fn category_summaries_follow_first_appearance() {
        let col = QuoteCollection::from_quotes(vec![
            Quote::new("abcd", "a", "life"),
            Quote::new("ab", "b", "love"),
            Quote::new("abcdef", "c", "life"),
        ]);

        let got = col.category_summaries();
        assert_eq!(
            got,
            vec![
                CategorySummary {
                    category: "life".into(),
                    count: 2,
                    average_length: 5.0,
                },
                CategorySummary {
                    category: "love".into(),
                    count: 1,
                    average_length: 2.0,
                },
            ]
        );
    }
}
