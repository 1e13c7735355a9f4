//! Item database extraction.
//!
//! Turns the client's item tables into a normalized JSON database and moves
//! the matching bitmaps into token-named files. The pipeline entry point is
//! [`process::process_data`].

pub mod aggregate;
pub mod assets;
pub mod description;
pub mod error;
pub mod fname;
pub mod layout;
pub mod process;
pub mod props;
pub mod search_index;

pub use aggregate::{
    Database, ItemRecord, Metaprops, SourceTables, build_items, build_metaprops,
};
pub use assets::{
    AssetKind, RelocationPlan, RelocationSummary, execute_relocations, plan_relocations,
};
pub use error::ItemDbError;
pub use fname::generate_filename;
pub use layout::{DataLayout, LayoutConfig};
pub use process::{ProcessOptions, ProcessReport, process_data};
pub use props::PropertyNormalizer;
pub use search_index::{SearchIndex, build_search_index};

// Re-export the shared types so the CLI only depends on this crate.
pub use ro_itemdb_core::{Description, Item, PropValue, Property};
