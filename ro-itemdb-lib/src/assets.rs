//! Relocation of item bitmaps into flat, token-named directories.
//!
//! Works in two steps, plan then execute, so a dry run can show what would
//! move without touching the filesystem.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use ro_itemdb_core::Item;

use crate::error::ItemDbError;
use crate::fname::generate_filename;
use crate::layout::DataLayout;

/// Bitmap categories shipped by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// Card illustrations, named by the illustration table.
    Illustration,
    /// Inventory sprites, named by the resource table.
    Sprite,
    /// Collection (detail view) images, named by the resource table.
    Collection,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [Self::Illustration, Self::Sprite, Self::Collection];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Illustration => "illustration",
            Self::Sprite => "sprite",
            Self::Collection => "collection",
        }
    }

    /// The raw table value naming this asset for an item.
    pub fn raw_reference<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            Self::Illustration => item.ilus.as_deref(),
            Self::Sprite | Self::Collection => item.res.as_deref(),
        }
    }
}

/// The file name stem an asset is stored under: the last line of the raw
/// reference.
pub fn asset_reference(raw: &str) -> &str {
    raw.rsplit('\n').next().unwrap_or(raw)
}

/// A planned move of one bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub item_id: u32,
    pub kind: AssetKind,
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct RelocationPlan {
    pub relocations: Vec<Relocation>,
}

impl RelocationPlan {
    pub fn len(&self) -> usize {
        self.relocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relocations.is_empty()
    }
}

/// Outcome of executing a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationSummary {
    pub moved: usize,
    /// Sources that did not exist (never shipped, or moved by an earlier run).
    pub missing: usize,
}

/// Plan one move per asset category for every item that names the asset.
pub fn plan_relocations<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    layout: &DataLayout,
) -> RelocationPlan {
    let dirs: Vec<_> = AssetKind::ALL
        .iter()
        .map(|&kind| (kind, layout.asset_source_dir(kind), layout.asset_dest_dir(kind)))
        .collect();

    let mut plan = RelocationPlan::default();
    for item in items {
        for (kind, source_dir, dest_dir) in &dirs {
            let Some(raw) = kind.raw_reference(item) else {
                continue;
            };
            let reference = asset_reference(raw);
            plan.relocations.push(Relocation {
                item_id: item.id,
                kind: *kind,
                source: source_dir.join(format!("{reference}.bmp")),
                target: dest_dir.join(format!("{}.bmp", generate_filename(reference))),
            });
        }
    }
    plan
}

/// Move every planned file. Missing sources are skipped; any other I/O
/// failure aborts the run.
pub fn execute_relocations(plan: &RelocationPlan) -> Result<RelocationSummary, ItemDbError> {
    let mut summary = RelocationSummary::default();
    let mut created: HashSet<PathBuf> = HashSet::new();

    for relocation in &plan.relocations {
        if let Some(parent) = relocation.target.parent() {
            if !created.contains(parent) {
                fs::create_dir_all(parent)?;
                created.insert(parent.to_path_buf());
            }
        }

        match fs::rename(&relocation.source, &relocation.target) {
            Ok(()) => summary.moved += 1,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "No {} bitmap at {}",
                    relocation.kind.name(),
                    relocation.source.display()
                );
                summary.missing += 1;
            }
            Err(error) => {
                return Err(ItemDbError::Relocation {
                    from: relocation.source.clone(),
                    to: relocation.target.clone(),
                    error,
                });
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "tests/assets_tests.rs"]
mod tests;
