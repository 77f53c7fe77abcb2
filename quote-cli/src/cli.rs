use std::path::{Path, PathBuf};

use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  quotes                              Get a random quote
  quotes --category motivation        Get a motivational quote
  quotes --author \"Steve Jobs\"        Get quotes by Steve Jobs
  quotes --count 3                    Get 3 random quotes
  quotes --stats                      Show collection statistics
  quotes --export output.json         Export all quotes to file";

/// Quotes - случайные цитаты из коллекции, поиск, статистика и экспорт.
///
/// За один запуск выполняется ровно один режим, по приоритету:
/// --list-categories, --list-authors, --stats, --search, --export,
/// --author, затем случайный выбор.
#[derive(Parser, Debug, Clone)]
#[command(name = "quotes", version, about, after_help = EXAMPLES)]
pub(crate) struct Args {
    /// Категория (например motivation, success, wisdom). Без учёта регистра
    #[arg(long)]
    pub(crate) category: Option<String>,

    /// Фильтр по автору (подстрока, без учёта регистра)
    #[arg(long)]
    pub(crate) author: Option<String>,

    /// Показать все категории
    #[arg(long)]
    pub(crate) list_categories: bool,

    /// Показать всех авторов
    #[arg(long)]
    pub(crate) list_authors: bool,

    /// Статистика по коллекции
    #[arg(long)]
    pub(crate) stats: bool,

    /// Сколько цитат показать (0 и 1 - одна случайная цитата)
    #[arg(long, default_value_t = 1)]
    pub(crate) count: usize,

    /// Поиск цитат по слову в тексте
    #[arg(long, value_name = "TERM")]
    pub(crate) search: Option<String>,

    /// Экспорт цитат (с учётом --category) в JSON-файл
    #[arg(long, value_name = "FILE")]
    pub(crate) export: Option<PathBuf>,

    /// Без цветного вывода
    #[arg(long)]
    pub(crate) no_color: bool,

    /// JSON-файл коллекции вместо встроенной
    #[arg(long, env = "QUOTES_FILE", value_name = "FILE")]
    pub(crate) quotes_file: Option<PathBuf>,

    /// Seed для воспроизводимого случайного выбора
    #[arg(long, env = "QUOTES_SEED")]
    pub(crate) seed: Option<u64>,
}

/// Режим работы, выбранный по флагам
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode<'a> {
    ListCategories,
    ListAuthors,
    Stats,
    Search(&'a str),
    Export {
        path: &'a Path,
        category: Option<&'a str>,
    },
    Author {
        name: &'a str,
        limit: usize,
    },
    Random {
        count: usize,
        category: Option<&'a str>,
    },
}

/// Пустая строка в флаге = флаг не задан
fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl Args {
    pub(crate) fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub(crate) fn mode(&self) -> Mode<'_> {
        if self.list_categories {
            return Mode::ListCategories;
        }
        if self.list_authors {
            return Mode::ListAuthors;
        }
        if self.stats {
            return Mode::Stats;
        }
        if let Some(term) = non_empty(&self.search) {
            return Mode::Search(term);
        }
        if let Some(path) = self.export.as_deref().filter(|p| !p.as_os_str().is_empty()) {
            return Mode::Export {
                path,
                category: self.category(),
            };
        }
        if let Some(name) = non_empty(&self.author) {
            return Mode::Author {
                name,
                limit: self.count,
            };
        }
        Mode::Random {
            count: self.count,
            category: self.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("quotes").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_is_single_random_pick() {
        assert_eq!(
            parse(&[]).mode(),
            Mode::Random {
                count: 1,
                category: None
            }
        );
    }

    #[test]
    fn count_and_category_go_to_random_mode() {
        let args = parse(&["--count", "3", "--category", "wisdom"]);
        assert_eq!(
            args.mode(),
            Mode::Random {
                count: 3,
                category: Some("wisdom")
            }
        );
    }

    #[test]
    fn priority_order_is_respected() {
        let all = [
            "--list-categories",
            "--list-authors",
            "--stats",
            "--search",
            "x",
            "--export",
            "out.json",
            "--author",
            "a",
        ];
        assert_eq!(parse(&all).mode(), Mode::ListCategories);
        assert_eq!(parse(&all[1..]).mode(), Mode::ListAuthors);
        assert_eq!(parse(&all[2..]).mode(), Mode::Stats);
        assert_eq!(parse(&all[3..]).mode(), Mode::Search("x"));
        assert_eq!(
            parse(&all[5..]).mode(),
            Mode::Export {
                path: Path::new("out.json"),
                category: None
            }
        );
        assert_eq!(
            parse(&all[7..]).mode(),
            Mode::Author {
                name: "a",
                limit: 1
            }
        );
    }

    #[test]
    fn export_takes_category_filter() {
        let args = parse(&["--export", "m.json", "--category", "motivation"]);
        assert_eq!(
            args.mode(),
            Mode::Export {
                path: Path::new("m.json"),
                category: Some("motivation")
            }
        );
    }

    #[test]
    fn empty_values_are_ignored() {
        let args = parse(&["--search", "", "--author", "", "--category", ""]);
        assert_eq!(
            args.mode(),
            Mode::Random {
                count: 1,
                category: None
            }
        );
    }

    #[test]
    fn zero_count_still_goes_to_random_mode() {
        assert_eq!(
            parse(&["--count", "0"]).mode(),
            Mode::Random {
                count: 0,
                category: None
            }
        );
    }
}
