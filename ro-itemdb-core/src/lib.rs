//! Core data types for the item database.
//!
//! Holds the canonical property vocabulary, the static label lookup table
//! and the item/description types shared by the table-processing crates.

pub mod item;
pub mod property;

pub use item::{Description, Item, PropValue, Props};
pub use property::{LABELS, METAPROPS, ParsePropertyError, Property, lookup_label};
