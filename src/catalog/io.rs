//! Reading and writing item files.
//!
//! One item per line, `price,weight`, no header. Surrounding whitespace
//! is ignored and blank lines are skipped.

use super::item::{Catalog, Item};
use crate::error::CatalogError;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Loads a catalog from an item file.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let catalog = parse_items(&content)?;
    debug!(path = %path.display(), items = catalog.len(), "loaded item file");
    Ok(catalog)
}

/// Parses the item file format from a string.
pub fn parse_items(content: &str) -> Result<Catalog, CatalogError> {
    let mut items = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let item = parse_line(line).ok_or_else(|| CatalogError::Parse {
            line: idx + 1,
            content: raw.to_string(),
        })?;
        items.push(item);
    }
    Ok(Catalog::new(items))
}

fn parse_line(line: &str) -> Option<Item> {
    let (price, weight) = line.split_once(',')?;
    let price = price.trim().parse().ok()?;
    let weight = weight.trim().parse().ok()?;
    Some(Item { price, weight })
}

/// Writes a catalog in the item file format.
pub fn write_items<W: Write>(catalog: &Catalog, mut writer: W) -> io::Result<()> {
    for item in catalog {
        writeln!(writer, "{},{}", item.price, item.weight)?;
    }
    writer.flush()
}

/// Saves a catalog to an item file, replacing any existing content.
pub fn save_items<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), CatalogError> {
    let file = std::fs::File::create(path)?;
    write_items(catalog, io::BufWriter::new(file))?;
    Ok(())
}

/// Renders a catalog in the item file format.
pub fn to_text(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|item| format!("{},{}\n", item.price, item.weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let catalog = parse_items("10,5\n20,10\n30,15\n").unwrap();
        assert_eq!(
            catalog.items(),
            &[Item::new(10, 5), Item::new(20, 10), Item::new(30, 15)]
        );
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_blank_lines() {
        let catalog = parse_items("  7 , 3\r\n\n\n 1,1 \n").unwrap();
        assert_eq!(catalog.items(), &[Item::new(7, 3), Item::new(1, 1)]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_items("").unwrap().is_empty());
        assert!(parse_items("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        for (input, bad_line) in [
            ("1,2\nfoo\n", 2),
            ("1,2,3\n", 1),
            ("1\n", 1),
            ("4,4\n5,-1\n", 2),
            ("x,1\n", 1),
        ] {
            match parse_items(input) {
                Err(CatalogError::Parse { line, .. }) => {
                    assert_eq!(line, bad_line, "input {input:?}")
                }
                other => panic!("expected parse error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_write_matches_to_text() {
        let catalog: Catalog = [(1, 2), (30, 40)].into_iter().collect();
        let mut buf = Vec::new();
        write_items(&catalog, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,2\n30,40\n");
        assert_eq!(to_text(&catalog), "1,2\n30,40\n");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_items("/definitely/not/here/items.txt").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
