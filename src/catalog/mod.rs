//! In-memory book catalog and its three read-only queries.
//!
//! The catalog is built once at startup (either from the built-in reference
//! set or from a record file) and never mutated afterwards. Queries never
//! fail: no match is an empty result, not an error.

pub mod seed;

use crate::types::Book;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate book id '{0}'")]
    DuplicateId(String),

    #[error("failed to read catalog file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Read-only set of books, in insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateId(book.id.clone()));
            }
        }
        Ok(Self { books })
    }

    /// The built-in reference dataset.
    pub fn reference() -> Self {
        Self {
            books: seed::reference_books(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All books whose genre matches exactly (case-sensitive).
    pub fn list_by_genre(&self, genre: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.genre == genre)
            .cloned()
            .collect()
    }

    /// All books whose name matches exactly. Duplicate names are all returned.
    pub fn search_by_name(&self, name: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.name == name)
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Books { books: Vec<Book> },
    List(Vec<Book>),
}

impl RecordFile {
    fn into_books(self) -> Vec<Book> {
        match self {
            Self::Books { books } | Self::List(books) => books,
        }
    }
}

/// Load a catalog from a record file.
///
/// `.yml`/`.yaml` files are parsed as YAML, everything else as JSON. Either
/// format may hold a bare list of books or a `books:` key wrapping one.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    );
    debug!("Parsing catalog {:?} as {}", path, if is_yaml { "YAML" } else { "JSON" });

    let parsed: RecordFile = if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&contents).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let catalog = Catalog::new(parsed.into_books())?;
    info!("Loaded {} books from {:?}", catalog.len(), path);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn names(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn list_by_genre_keeps_insertion_order() {
        let catalog = Catalog::reference();
        assert_eq!(
            names(&catalog.list_by_genre("historical")),
            vec![
                "To Kill a Mockingbird",
                "All the Light We Cannot See",
                "Where the Crawdads Sing",
            ]
        );
        assert!(catalog.list_by_genre("dystopian").is_empty());
    }

    #[test]
    fn reference_set_is_the_three_historical_books() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.list_by_genre("historical"), catalog.books());
    }

    #[test]
    fn list_by_genre_is_exact_match() {
        let catalog = Catalog::reference();
        assert!(catalog.list_by_genre("sci-fi").is_empty());
        assert!(catalog.list_by_genre("Historical").is_empty());
        assert!(catalog.list_by_genre("").is_empty());
    }

    #[test]
    fn search_by_name_returns_matches() {
        let catalog = Catalog::reference();
        let found = catalog.search_by_name("To Kill a Mockingbird");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a1");
        assert!(catalog.search_by_name("harry potter").is_empty());
    }

    #[test]
    fn search_by_name_returns_every_duplicate() {
        let catalog = Catalog::new(vec![
            Book::new("b1", "Dune", "sci-fi", "first printing"),
            Book::new("b2", "Emma", "romance", ""),
            Book::new("b3", "Dune", "sci-fi", "second printing"),
        ])
        .unwrap();

        let ids: Vec<_> = catalog
            .search_by_name("Dune")
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec!["b1", "b3"]);
    }

    #[test]
    fn get_by_id_returns_at_most_one() {
        let catalog = Catalog::reference();
        let book = catalog.get_by_id("a2").unwrap();
        assert_eq!(book.name, "All the Light We Cannot See");
        assert!(catalog.get_by_id("zzz").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![
            Book::new("x", "One", "g", ""),
            Book::new("x", "Two", "g", ""),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn loads_json_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(
            &path,
            r#"[{"id":"j1","name":"Beloved","genre":"literary","description":"Sethe"}]"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_by_id("j1").unwrap().name, "Beloved");
    }

    #[test]
    fn loads_yaml_with_books_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.yaml");
        std::fs::write(
            &path,
            "books:\n  - id: y1\n    name: Kindred\n    genre: sci-fi\n    description: Dana\n",
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(names(&catalog.list_by_genre("sci-fi")), vec!["Kindred"]);
    }

    #[test]
    fn load_reports_parse_and_read_failures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_catalog(&path), Err(CatalogError::Parse { .. })));

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_catalog(&missing), Err(CatalogError::Read { .. })));
    }
}
