//! Property normalization for item descriptions.
//!
//! Description lines look like `Label: value`, where the label is free text
//! in several languages and spellings. Known labels collapse onto a
//! [`Property`]; everything else is dropped.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use ro_itemdb_core::{PropValue, Property, Props, lookup_label};
use ro_itemdb_tables::split_lines;

static CONJUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[eE]\s+").expect("static pattern"));
static LIST_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,/]\s*").expect("static pattern"));

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn trim_field(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == ':')
}

/// Split a list-valued property (`Cabeça e Corpo / Mão`) into its sorted,
/// deduplicated parts.
pub fn split_list(value: &str) -> Vec<String> {
    let joined = CONJUNCTION_RE.replace_all(value, ", ");
    LIST_SEPARATOR_RE
        .split(&joined)
        .map(|part| capitalize(part.trim()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Maps description text onto canonical properties.
///
/// Uses the built-in label table plus any aliases registered on top of it.
/// Aliases win over built-in labels.
#[derive(Debug, Clone, Default)]
pub struct PropertyNormalizer {
    aliases: HashMap<String, Property>,
}

impl PropertyNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, label: &str, property: Property) -> Self {
        self.add_alias(label, property);
        self
    }

    /// Register an extra label. The label is normalized the same way
    /// description labels are before lookup.
    pub fn add_alias(&mut self, label: &str, property: Property) {
        self.aliases.insert(capitalize(trim_field(label)), property);
    }

    /// Resolve an already-capitalized label.
    pub fn resolve(&self, label: &str) -> Option<Property> {
        self.aliases
            .get(label)
            .copied()
            .or_else(|| lookup_label(label))
    }

    /// Parse and normalize every `Label: value` line of plain text.
    ///
    /// When a property receives several distinct values, the first one
    /// seen is kept.
    pub fn normalize(&self, text: &str) -> Props {
        let lines = split_lines(text);
        let mut sets: BTreeMap<Property, IndexSet<String>> = BTreeMap::new();

        for line in &lines {
            let mut parts = line.split(':');
            let (Some(raw_label), Some(raw_value), None) =
                (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };

            let label = capitalize(trim_field(raw_label));
            let Some(prop) = self.resolve(&label) else {
                log::trace!("Unmapped property label: {label:?}");
                continue;
            };
            let value = trim_field(raw_value).to_string();

            let target = if prop == Property::ItemType && value == "Neutro" {
                // "Tipo: Neutro" describes the element, not the item type
                Property::Element
            } else if label.starts_with("Classe")
                && value.contains("Equipamento")
                && !sets
                    .get(&Property::ItemType)
                    .is_some_and(|types| types.contains("Carta"))
            {
                Property::ItemType
            } else if prop == Property::EquipIn && value == "1" {
                continue;
            } else if prop == Property::Weight && value == "1#" {
                sets.entry(prop).or_default().insert("1".to_string());
                continue;
            } else {
                prop
            };

            sets.entry(target).or_default().insert(value);
        }

        // Boxed items list the weight of both the box and its contents
        if sets.get(&Property::Weight).is_some_and(|w| w.len() > 1) {
            let head: String = lines.iter().take(3).map(|l| l.to_lowercase()).collect();
            if head.contains("caixa") {
                sets.insert(Property::Weight, IndexSet::from(["1".to_string()]));
            }
        }

        sets.into_iter()
            .filter_map(|(prop, values)| {
                let value = values.into_iter().next()?;
                let value = if prop.is_list() {
                    PropValue::List(split_list(&value))
                } else {
                    PropValue::Text(value)
                };
                Some((prop, value))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/props_tests.rs"]
mod tests;
