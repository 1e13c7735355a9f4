//! The one-shot conversion pipeline.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use ro_itemdb_core::Property;

use crate::aggregate::{Database, SourceTables, build_items};
use crate::assets::{AssetKind, RelocationSummary, execute_relocations, plan_relocations};
use crate::error::ItemDbError;
use crate::layout::DataLayout;

/// Options controlling a processing run.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Build everything but leave assets in place and skip writing the database.
    pub dry_run: bool,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

/// What a processing run did.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub items: usize,
    pub with_description: usize,
    pub planned_relocations: usize,
    /// `None` for dry runs.
    pub relocations: Option<RelocationSummary>,
    /// Number of distinct values per indexed property.
    pub metaprop_counts: BTreeMap<Property, usize>,
    pub database_path: PathBuf,
    pub written: bool,
}

/// Parse tables, join items, relocate assets and write the database.
///
/// Any I/O or serialization failure aborts the run. Assets already moved
/// stay moved.
pub fn process_data(
    layout: &DataLayout,
    options: &ProcessOptions,
) -> Result<ProcessReport, ItemDbError> {
    let normalizer = layout.normalizer()?;
    let tables = SourceTables::load(layout)?;

    let items = build_items(&tables, &normalizer);
    log::info!("Built {} items", items.len());

    let database = Database::build(&items);
    let plan = plan_relocations(items.values(), layout);
    log::info!("Planned {} asset moves", plan.len());

    let database_path = layout.database_path();
    let mut report = ProcessReport {
        items: items.len(),
        with_description: items.values().filter(|i| i.desc.is_some()).count(),
        planned_relocations: plan.len(),
        relocations: None,
        metaprop_counts: database
            .metaprops
            .iter()
            .map(|(prop, values)| (*prop, values.len()))
            .collect(),
        database_path: database_path.clone(),
        written: false,
    };

    if options.dry_run {
        for relocation in &plan.relocations {
            log::debug!(
                "Would move {} -> {}",
                relocation.source.display(),
                relocation.target.display()
            );
        }
        return Ok(report);
    }

    for kind in AssetKind::ALL {
        fs::create_dir_all(layout.asset_dest_dir(kind))?;
    }
    let summary = execute_relocations(&plan)?;
    log::info!("Moved {} assets ({} missing)", summary.moved, summary.missing);
    report.relocations = Some(summary);

    database.write(&database_path, options.pretty)?;
    log::info!("Wrote {}", database_path.display());
    report.written = true;

    Ok(report)
}
