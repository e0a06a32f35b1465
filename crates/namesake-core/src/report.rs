//! Report files
//!
//! The noun list is plain text: a title line, a rule of `=` characters, a
//! blank line, then one noun per line in sorted order. Catalog results are
//! written as CSV with one row per match.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{NamesakeError, Result};
use crate::extract::ProperNounSet;
use crate::matcher::CatalogReport;

/// Default noun list title
pub const NOUN_LIST_TITLE: &str = "UNIQUE PROPER NOUNS FROM ALL TEXTS";

/// Width of the `=` rule under the title
pub const RULE_WIDTH: usize = 50;

/// Column headers of the match CSV
pub const MATCH_CSV_HEADER: [&str; 4] = ["Search Name", "Band Name", "URL", "Match Type"];

/// Write the noun list with its two-line header
pub fn write_noun_list(path: &Path, nouns: &ProperNounSet, title: &str) -> Result<()> {
    let mut out = String::with_capacity(nouns.len() * 12 + title.len() + RULE_WIDTH + 4);
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");
    for noun in nouns.iter() {
        out.push_str(noun);
        out.push('\n');
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| NamesakeError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, out).map_err(|e| NamesakeError::io_operation("write", path.display(), e))
}

/// Read a noun list, skipping its header
///
/// Everything up to and including the first `=` rule is header. Files
/// without a rule are read whole. Blank lines are ignored.
pub fn read_noun_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(NamesakeError::NounListNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)
        .map_err(|e| NamesakeError::io_operation("read", path.display(), e))?;

    let lines: Vec<&str> = content.lines().collect();
    let body = match lines.iter().position(|l| l.starts_with('=')) {
        Some(rule) => &lines[rule + 1..],
        None => &lines[..],
    };

    let nouns: Vec<String> = body
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('='))
        .map(str::to_string)
        .collect();

    if nouns.is_empty() {
        return Err(NamesakeError::EmptyNounList {
            path: path.to_path_buf(),
        });
    }
    Ok(nouns)
}

/// Write catalog results as CSV
pub fn write_match_csv(path: &Path, reports: &[CatalogReport]) -> Result<()> {
    let file = fs::File::create(path)
        .map_err(|e| NamesakeError::io_operation("create", path.display(), e))?;
    write_match_csv_to(file, reports)
}

/// Write catalog results as CSV to any writer
pub fn write_match_csv_to<W: Write>(writer: W, reports: &[CatalogReport]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(MATCH_CSV_HEADER)?;
    for report in reports {
        for m in &report.matches {
            out.write_record([
                report.name.as_str(),
                m.name.as_str(),
                m.reference.as_str(),
                m.kind.to_string().as_str(),
            ])?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimilarityConfig;
    use crate::matcher::{match_candidates, CatalogEntry};
    use tempfile::tempdir;

    fn nouns(words: &[&str]) -> ProperNounSet {
        ProperNounSet::from_candidates(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_noun_list_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("nouns.txt");
        write_noun_list(&path, &nouns(&["Shire", "Bree", "Hobbit", "Hobbits"]), "NOUNS").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let expected = format!("NOUNS\n{}\n\nBree\nHobbit\nShire\n", "=".repeat(50));
        assert_eq!(content, expected);
    }

    #[test]
    fn test_noun_list_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nouns.txt");
        write_noun_list(&path, &nouns(&["Mordor", "Frodo"]), NOUN_LIST_TITLE).unwrap();
        assert_eq!(read_noun_list(&path).unwrap(), vec!["Frodo", "Mordor"]);
    }

    #[test]
    fn test_read_headerless_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, "Gandalf\n\n  Sauron \n").unwrap();
        assert_eq!(read_noun_list(&path).unwrap(), vec!["Gandalf", "Sauron"]);
    }

    #[test]
    fn test_read_missing_and_empty_lists() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            read_noun_list(&missing),
            Err(NamesakeError::NounListNotFound { .. })
        ));

        let empty = dir.path().join("empty.txt");
        write_noun_list(&empty, &ProperNounSet::default(), NOUN_LIST_TITLE).unwrap();
        assert!(matches!(
            read_noun_list(&empty),
            Err(NamesakeError::EmptyNounList { .. })
        ));
    }

    #[test]
    fn test_match_csv_rows() {
        let entries = vec![
            CatalogEntry::new("Sauron", "https://example.org/1"),
            CatalogEntry::new("Sawron, Lord", "https://example.org/2"),
            CatalogEntry::new("Sawron", "https://example.org/3"),
        ];
        let report = CatalogReport {
            name: "Sauron".to_string(),
            matches: match_candidates("Sauron", &entries, &SimilarityConfig::default()),
            error: None,
        };

        let mut buf = Vec::new();
        write_match_csv_to(&mut buf, &[report]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Search Name,Band Name,URL,Match Type\n\
             Sauron,Sauron,https://example.org/1,exact\n\
             Sauron,Sawron,https://example.org/3,similar\n"
        );
    }
}
