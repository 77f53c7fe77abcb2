use std::fmt;

use colored::Colorize;
use quote_core::{CategorySummary, CollectionStats, Quote};

/// Форматирование вывода для терминала. Цвет можно выключить (`--no-color`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Formatter {
    pub(crate) color: bool,
}

impl Formatter {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    pub(crate) fn quote(&self, q: &Quote) -> String {
        let text = format!("\"{}\"", q.text);
        let author = format!("— {}", q.author_label());
        let category = format!("[{}]", q.category_label());

        if self.color {
            format!("\n{}\n  {}\n  {}\n", text.cyan(), author.bold(), category.yellow())
        } else {
            format!("\n{text}\n  {author}\n  {category}\n")
        }
    }

    /// Заголовок, подчёркнутый `=` по длине текста
    pub(crate) fn header(&self, text: &str) -> String {
        let underline = "=".repeat(text.chars().count());
        if self.color {
            format!("\n{}\n{underline}", text.bold().magenta())
        } else {
            format!("\n{text}\n{underline}")
        }
    }

    pub(crate) fn statistics<'a>(
        &self,
        stats: &'a CollectionStats,
        summaries: &'a [CategorySummary],
    ) -> StatsView<'a> {
        StatsView {
            color: self.color,
            stats,
            summaries,
        }
    }
}

/// Блок статистики; печатается через `Display`
pub(crate) struct StatsView<'a> {
    color: bool,
    stats: &'a CollectionStats,
    summaries: &'a [CategorySummary],
}

impl fmt::Display for StatsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = "📊 Quote Collection Statistics";
        let stats = self.stats;

        if self.color {
            writeln!(f, "\n{}\n", title.bold().magenta())?;
        } else {
            writeln!(f, "\n{title}\n")?;
        }

        writeln!(f, "Total Quotes: {}", stats.total_quotes)?;
        writeln!(f, "Total Categories: {}", stats.total_categories)?;
        writeln!(f, "Total Authors: {}", stats.total_authors)?;
        writeln!(
            f,
            "Average Quote Length: {:.0} characters",
            stats.average_quote_length
        )?;

        let mut categories: Vec<(&String, &usize)> = stats.categories.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1));

        writeln!(f, "\nTop Categories:")?;
        for (category, count) in categories {
            writeln!(f, "  • {category}: {count}")?;
        }

        writeln!(f, "\nTop Authors:")?;
        for (author, count) in &stats.top_authors {
            writeln!(f, "  • {author}: {count}")?;
        }

        if !self.summaries.is_empty() {
            writeln!(f, "\nCategory Analysis:")?;
            for s in self.summaries {
                writeln!(
                    f,
                    "  • {}: {}, avg length: {:.0} chars",
                    s.category,
                    plural(s.count, "quote"),
                    s.average_length
                )?;
            }
        }

        Ok(())
    }
}

/// "1 quote" / "3 quotes"
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::QuoteCollection;

    fn sample() -> Quote {
        Quote::new("Test quote", "Test Author", "test")
    }

    #[test]
    fn quote_without_color_has_no_escape_codes() {
        let out = Formatter::new(false).quote(&sample());
        assert_eq!(out, "\n\"Test quote\"\n  — Test Author\n  [test]\n");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn quote_with_color_has_escape_codes() {
        colored::control::set_override(true);
        let out = Formatter::new(true).quote(&sample());
        assert!(out.contains('\x1b'));
        assert!(out.contains("Test quote"));
        assert!(out.contains("Test Author"));
        assert!(out.contains("[test]"));
    }

    #[test]
    fn header_is_underlined_by_char_count() {
        let out = Formatter::new(false).header("Категории");
        assert_eq!(out, "\nКатегории\n=========");
    }

    #[test]
    fn statistics_without_color() {
        let col = QuoteCollection::from_quotes(vec![
            Quote::new("aaaa", "A", "life"),
            Quote::new("bb", "B", "love"),
            Quote::new("cccccc", "A", "love"),
        ]);
        let stats = col.statistics();
        let summaries = col.category_summaries();
        let out = Formatter::new(false).statistics(&stats, &summaries).to_string();

        assert!(out.contains("Total Quotes: 3"));
        assert!(out.contains("Total Categories: 2"));
        assert!(out.contains("Total Authors: 2"));
        assert!(out.contains("Average Quote Length: 4 characters"));
        assert!(out.contains("  • A: 2"));
        assert!(out.contains("  • life: 1 quote, avg length: 4 chars"));
        assert!(!out.contains('\x1b'));

        // love (2) выше life (1)
        let love = out.find("  • love: 2").unwrap();
        let life = out.find("  • life: 1").unwrap();
        assert!(love < life);
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "quote"), "1 quote");
        assert_eq!(plural(0, "quote"), "0 quotes");
        assert_eq!(plural(5, "quote"), "5 quotes");
    }
}
