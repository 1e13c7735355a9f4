use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical property names that free-text description labels collapse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    Attack,
    Defense,
    MinimumLevel,
    MaximumLevel,
    /// Serialized as `weigth`, the spelling downstream consumers already expect.
    #[serde(rename = "weigth")]
    Weight,
    Element,
    EquipIn,
    ItemType,
    UseOn,
    WeaponLevel,
    /// Job class restriction. No built-in label maps here; configured
    /// aliases can.
    Class,
}

/// Properties whose observed values are collected into the global index.
pub const METAPROPS: [Property; 5] = [
    Property::Element,
    Property::EquipIn,
    Property::WeaponLevel,
    Property::ItemType,
    Property::UseOn,
];

impl Property {
    pub const ALL: [Property; 11] = [
        Self::Attack,
        Self::Defense,
        Self::MinimumLevel,
        Self::MaximumLevel,
        Self::Weight,
        Self::Element,
        Self::EquipIn,
        Self::ItemType,
        Self::UseOn,
        Self::WeaponLevel,
        Self::Class,
    ];

    /// The key used for this property in the JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::MinimumLevel => "minimumLevel",
            Self::MaximumLevel => "maximumLevel",
            Self::Weight => "weigth",
            Self::Element => "element",
            Self::EquipIn => "equipIn",
            Self::ItemType => "itemType",
            Self::UseOn => "useOn",
            Self::WeaponLevel => "weaponLevel",
            Self::Class => "class",
        }
    }

    /// Properties coerced to floating point in the output.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Attack | Self::Defense | Self::MinimumLevel | Self::MaximumLevel | Self::Weight
        )
    }

    /// Properties whose single value is split into a sorted list of parts.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Class | Self::EquipIn)
    }

    pub fn is_metaprop(&self) -> bool {
        METAPROPS.contains(self)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property: {0}")]
pub struct ParsePropertyError(pub String);

impl FromStr for Property {
    type Err = ParsePropertyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePropertyError(s.to_string()))
    }
}

/// Observed description labels and the property each one means.
///
/// Labels are stored already capitalized (first letter upper case, the rest
/// lower case), which is how the normalizer looks them up.
pub const LABELS: &[(&str, Property)] = &[
    ("Ataque", Property::Attack),
    ("Combina com", Property::UseOn),
    ("Def", Property::Defense),
    ("Def.", Property::Defense),
    ("Defense", Property::Defense),
    ("Defesa", Property::Defense),
    ("Elemento", Property::Element),
    ("Equipa em", Property::EquipIn),
    ("Equipado em", Property::EquipIn),
    ("Equipar em", Property::EquipIn),
    ("Equipe em", Property::EquipIn),
    ("Força de ataque", Property::Attack),
    ("Forçca de ataque", Property::Attack),
    ("Head position", Property::EquipIn),
    ("Limite de nível", Property::MaximumLevel),
    ("Nivel necessário", Property::MinimumLevel),
    ("Nv. mínimo necessário", Property::MinimumLevel),
    ("Níveis permitidos", Property::MinimumLevel),
    ("Nível da arma", Property::WeaponLevel),
    ("Nível limite", Property::MaximumLevel),
    ("Nível mínimo", Property::MinimumLevel),
    ("Nível necessário", Property::MinimumLevel),
    ("Nível necessário.", Property::MinimumLevel),
    ("Nível necesário", Property::MinimumLevel),
    ("Nível requerido", Property::MinimumLevel),
    ("Nível requisitado", Property::MinimumLevel),
    ("Peso", Property::Weight),
    ("Posição", Property::EquipIn),
    ("Propriedade", Property::Element),
    ("Required lv", Property::MinimumLevel),
    ("Tipo de arma", Property::ItemType),
    ("Tipo de item", Property::ItemType),
    ("Tipo", Property::ItemType),
    ("Type", Property::ItemType),
    ("Usado em", Property::EquipIn),
];

/// Look up a capitalized label in the built-in table.
pub fn lookup_label(label: &str) -> Option<Property> {
    LABELS
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, prop)| *prop)
}

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod tests;
