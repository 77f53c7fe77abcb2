use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::collection::QuoteCollection;
use crate::error::ExportError;
use crate::types::Quote;

/// Формат экспорта совпадает с входным: `{"quotes": [...]}`
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    quotes: &'a [&'a Quote],
}

/// Пишет цитаты в `writer`: отступ 2 пробела, не-ASCII как есть,
/// в конце перевод строки.
pub fn write_quotes<W: Write>(mut writer: W, quotes: &[&Quote]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut writer, &ExportDocument { quotes })?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}

/// Экспортирует коллекцию (или одну категорию) в файл.
/// Существующий файл перезаписывается, кроме исходного файла коллекции.
pub fn export_quotes(
    collection: &QuoteCollection,
    path: impl AsRef<Path>,
    category: Option<&str>,
) -> Result<usize, ExportError> {
    let path = path.as_ref();

    if let Some(src) = collection.source().path() {
        if is_same_file(src, path) {
            return Err(ExportError::SameAsSource {
                path: path.to_path_buf(),
            });
        }
    }

    let quotes = collection.pool(category);

    let io_err = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    write_quotes(&mut writer, &quotes).map_err(|e| {
        if e.is_io() {
            io_err(e.into())
        } else {
            ExportError::Serialize(e)
        }
    })?;
    writer.flush().map_err(io_err)?;

    info!("exported {} quotes to {}", quotes.len(), path.display());
    Ok(quotes.len())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        // целевого файла ещё нет
        _ => false,
    }
}

impl QuoteCollection {
    /// См. [`export_quotes`]. Возвращает число записанных цитат.
    pub fn export(&self, path: impl AsRef<Path>, category: Option<&str>) -> Result<usize, ExportError> {
        export_quotes(self, path, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::{FIXTURE, fixture};
    use crate::types::CollectionSource;

    #[test]
    fn write_quotes_uses_two_space_indent_and_keeps_unicode() {
        let q = Quote::new("Всё течёт", "Гераклит", "философия");
        let mut buf = Vec::new();
        write_quotes(&mut buf, &[&q]).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("{\n  \"quotes\": [\n    {\n"), "{out}");
        assert!(out.contains("\"text\": \"Всё течёт\""), "{out}");
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn export_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let col = fixture();
        let written = col.export(&out, None).unwrap();
        assert_eq!(written, 4);

        let reloaded = QuoteCollection::load(&out).unwrap();
        assert_eq!(reloaded.quotes(), col.quotes());
    }

    #[test]
    fn export_filters_by_category() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("test_only.json");

        let written = fixture().export(&out, Some("Test")).unwrap();
        assert_eq!(written, 2);

        let reloaded = QuoteCollection::load(&out).unwrap();
        assert!(reloaded.iter().all(|q| q.category == "test"));
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");
        fs::write(&out, "garbage that is much longer than nothing").unwrap();

        fixture().export(&out, Some("nonexistent")).unwrap();

        let reloaded = QuoteCollection::load(&out).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn export_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("no/such/dir/out.json");

        let err = fixture().export(&out, None).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn export_refuses_to_overwrite_source() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("quotes.json");
        fs::write(&src, FIXTURE).unwrap();

        let col = QuoteCollection::load(&src).unwrap();
        assert_eq!(col.source(), &CollectionSource::File(src.clone()));

        let err = col.export(&src, None).unwrap_err();
        assert!(matches!(err, ExportError::SameAsSource { .. }));

        // исходник не тронут
        assert_eq!(fs::read_to_string(&src).unwrap(), FIXTURE);
    }
}
