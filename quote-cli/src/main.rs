//! Точка входа `quotes`.
//!
//! Жизненный цикл:
//! - парсинг CLI
//! - загрузка коллекции (файл из `--quotes-file` или встроенная)
//! - выбор одного режима по приоритету и вывод результата в stdout
//!
//! Код выхода 0 - успех, в том числе "ничего не найдено";
//! 1 - ошибка загрузки или экспорта (сообщение в stderr).

mod cli;
mod config;
mod format;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::debug;
use quote_core::QuoteGenerator;

use crate::cli::{Args, Mode};
use crate::format::{Formatter, plural};

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=debug
    env_logger::init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let collection = config::load_collection(args.quotes_file.as_deref())
        .context("failed to load quotes collection")?;

    let mut generator = config::build_generator(collection, args.seed);
    let stdout = io::stdout();
    run(&args, &mut generator, &mut stdout.lock())
}

/// Выполняет выбранный режим. Ошибкой считается только сбой экспорта
/// или записи в `out`.
fn run<W: Write>(args: &Args, generator: &mut QuoteGenerator, out: &mut W) -> anyhow::Result<()> {
    let fmt = Formatter::new(!args.no_color);
    let mode = args.mode();
    debug!("mode: {mode:?}, source: {}", generator.collection().source());

    match mode {
        Mode::ListCategories => {
            writeln!(out, "{}", fmt.header("Available Categories"))?;
            for category in generator.categories() {
                writeln!(out, "  • {category}")?;
            }
            writeln!(out)?;
        }
        Mode::ListAuthors => {
            writeln!(out, "{}", fmt.header("All Authors"))?;
            let counts = generator.author_frequencies();
            for author in generator.authors() {
                let n = counts.get(&author).copied().unwrap_or(0);
                writeln!(out, "  • {author} ({})", plural(n, "quote"))?;
            }
            writeln!(out)?;
        }
        Mode::Stats => {
            let stats = generator.statistics();
            let summaries = generator.category_summaries();
            writeln!(out, "{}", fmt.statistics(&stats, &summaries))?;
        }
        Mode::Search(term) => {
            let results = generator.search(term);
            if results.is_empty() {
                writeln!(out, "\nNo quotes found containing '{term}'\n")?;
            } else {
                writeln!(out, "{}", fmt.header(&format!("Search Results for '{term}'")))?;
                for q in results {
                    write!(out, "{}", fmt.quote(q))?;
                }
            }
        }
        Mode::Export { path, category } => {
            let n = generator
                .export(path, category)
                .with_context(|| format!("error exporting quotes to {}", path.display()))?;
            writeln!(
                out,
                "\n✓ Successfully exported {} to {}\n",
                plural(n, "quote"),
                path.display()
            )?;
        }
        Mode::Author { name, limit } => {
            let quotes = generator.quotes_by_author(name);
            if quotes.is_empty() {
                writeln!(out, "\nNo quotes found by author: {name}\n")?;
            } else {
                writeln!(out, "{}", fmt.header(&format!("Quotes by {name}")))?;
                for q in quotes.into_iter().take(limit) {
                    write!(out, "{}", fmt.quote(q))?;
                }
            }
        }
        Mode::Random { count, category } => {
            let quotes = if count > 1 {
                generator.multiple_quotes(count, category)
            } else {
                generator.random_quote(category).into_iter().collect()
            };

            if quotes.is_empty() {
                writeln!(out, "\n{}\n", no_match_message(category))?;
            } else {
                for q in quotes {
                    write!(out, "{}", fmt.quote(q))?;
                }
            }
        }
    }

    Ok(())
}

fn no_match_message(category: Option<&str>) -> String {
    match category {
        Some(c) => format!("No quotes found for category: {c}"),
        None => "The quotes collection is empty".to_string(),
    }
}
