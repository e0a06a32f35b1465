//! Corpus loading
//!
//! A corpus is a list of text segments held fully in memory. The usual
//! layout is one `<book>-chapters/` directory per book containing numbered
//! chapter files (`1.txt`, `2.txt`, ...); each book becomes one segment.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{NamesakeError, Result};

/// Directory suffix that marks a book folder
pub const CHAPTER_DIR_SUFFIX: &str = "-chapters";

/// The text under analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    segments: Vec<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.is_empty())
    }

    /// Total size in bytes
    pub fn len_bytes(&self) -> usize {
        self.segments.iter().map(String::len).sum()
    }

    /// Load every `*-chapters` directory directly under `root`
    ///
    /// Folders are visited in name order; chapters within a folder in
    /// numeric order of their file stem, non-numeric stems last.
    pub fn load_chapter_folders(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(NamesakeError::CorpusNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut folders: Vec<PathBuf> = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(CHAPTER_DIR_SUFFIX))
            })
            .map(|e| e.into_path())
            .collect();
        folders.sort();

        let mut corpus = Corpus::new();
        for folder in folders {
            tracing::info!(folder = %folder.display(), "reading chapters");
            corpus.push(combine_chapters(&folder)?);
        }
        Ok(corpus)
    }

    /// Load explicit files, one segment each
    pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut corpus = Corpus::new();
        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                return Err(NamesakeError::CorpusNotFound {
                    path: path.to_path_buf(),
                });
            }
            let text = fs::read_to_string(path)
                .map_err(|e| NamesakeError::io_operation("read", path.display(), e))?;
            corpus.push(text);
        }
        Ok(corpus)
    }
}

/// Concatenate a folder's chapters, each followed by a newline
fn combine_chapters(folder: &Path) -> Result<String> {
    let mut chapters: Vec<PathBuf> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    chapters.sort_by(|a, b| compare_chapters(a, b));

    let mut combined = String::new();
    for chapter in chapters {
        let text = fs::read_to_string(&chapter)
            .map_err(|e| NamesakeError::io_operation("read chapter", chapter.display(), e))?;
        combined.push_str(&text);
        combined.push('\n');
    }
    Ok(combined)
}

fn chapter_number(path: &Path) -> Option<u64> {
    path.file_stem()?.to_str()?.parse().ok()
}

fn compare_chapters(a: &Path, b: &Path) -> Ordering {
    match (chapter_number(a), chapter_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_chapters_sorted_numerically() {
        let dir = tempdir().unwrap();
        let book = dir.path().join("hobbit-chapters");
        fs::create_dir(&book).unwrap();
        fs::write(book.join("10.txt"), "ten").unwrap();
        fs::write(book.join("2.txt"), "two").unwrap();
        fs::write(book.join("1.txt"), "one").unwrap();
        fs::write(book.join("appendix.txt"), "appendix").unwrap();
        fs::write(book.join("notes.md"), "ignored").unwrap();

        let corpus = Corpus::load_chapter_folders(dir.path()).unwrap();
        assert_eq!(corpus.segments(), &["one\ntwo\nten\nappendix\n".to_string()]);
    }

    #[test]
    fn test_only_chapter_folders_are_read() {
        let dir = tempdir().unwrap();
        for name in ["b-chapters", "a-chapters", "drafts"] {
            let folder = dir.path().join(name);
            fs::create_dir(&folder).unwrap();
            fs::write(folder.join("1.txt"), name).unwrap();
        }

        let corpus = Corpus::load_chapter_folders(dir.path()).unwrap();
        assert_eq!(
            corpus.segments(),
            &["a-chapters\n".to_string(), "b-chapters\n".to_string()]
        );
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        let err = Corpus::load_chapter_folders(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, NamesakeError::CorpusNotFound { .. }));
    }

    #[test]
    fn test_no_folders_is_empty_corpus() {
        let dir = tempdir().unwrap();
        let corpus = Corpus::load_chapter_folders(dir.path()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_load_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tale.txt");
        fs::write(&path, "Frodo went to Mordor.").unwrap();

        let corpus = Corpus::load_files(&[&path]).unwrap();
        assert_eq!(corpus.len_bytes(), 21);
        assert!(Corpus::load_files(&[dir.path().join("missing.txt")]).is_err());
    }
}
