//! Full-text search index over a generated database.
//!
//! Lets a static frontend search items by name and description without a
//! server: every term maps to the ids of the items containing it.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::aggregate::Database;
use crate::error::ItemDbError;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

/// Shortest term (in characters) worth indexing.
const MIN_TERM_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub id: u32,
    pub name: String,
    /// Description with all markup removed.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub documents: Vec<SearchDocument>,
    pub terms: BTreeMap<String, BTreeSet<u32>>,
}

/// Remove every HTML tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Lowercased alphanumeric runs of at least [`MIN_TERM_LEN`] characters.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TERM_LEN)
        .map(str::to_lowercase)
}

impl SearchIndex {
    pub fn build(db: &Database) -> Self {
        let mut index = Self::default();

        for record in db.items.values() {
            let text = strip_tags(&record.text);
            for term in tokenize(&record.name).chain(tokenize(&text)) {
                index.terms.entry(term).or_default().insert(record.id);
            }
            index.documents.push(SearchDocument {
                id: record.id,
                name: record.name.clone(),
                text,
            });
        }

        index
    }

    pub fn write(&self, path: &Path) -> Result<(), ItemDbError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Ids of items containing every term of `query`.
    pub fn search(&self, query: &str) -> BTreeSet<u32> {
        let mut result: Option<BTreeSet<u32>> = None;
        for term in tokenize(query) {
            let ids = self.terms.get(&term).cloned().unwrap_or_default();
            result = Some(match result {
                Some(acc) => acc.intersection(&ids).copied().collect(),
                None => ids,
            });
        }
        result.unwrap_or_default()
    }
}

/// Read a database file and write its search index.
pub fn build_search_index(db_path: &Path, out_path: &Path) -> Result<SearchIndex, ItemDbError> {
    let db = Database::read(db_path)?;
    let index = SearchIndex::build(&db);
    index.write(out_path)?;
    log::info!(
        "Indexed {} items ({} terms) into {}",
        index.documents.len(),
        index.terms.len(),
        out_path.display()
    );
    Ok(index)
}

#[cfg(test)]
#[path = "tests/search_index_tests.rs"]
mod tests;
