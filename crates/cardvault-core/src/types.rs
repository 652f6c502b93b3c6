//! # Domain Types
//!
//! The small closed vocabularies the rule engine is written in.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Rarity      │   │     Variant     │   │   BinderType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Common         │   │  Normal         │   │  Basic          │       │
//! │  │  Uncommon       │   │  ExtendedArt    │   │  Pauper         │       │
//! │  │  Rare           │   │  FullArt        │   │  Rares          │       │
//! │  │  Legendary      │   │  AltArt         │   │  Luxury         │       │
//! │  └─────────────────┘   └─────────────────┘   │  Collector      │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    DeckType     │   │  ContainerKind  │   │   Namespace     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Normal         │   │  Binder(type)   │   │  Binder         │       │
//! │  │  Sellable       │   │  Deck(type)     │   │  Deck           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of them parse case-insensitively from their display names so the
//! presentation layer can hand over whatever the user typed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

fn unknown(field: &str, value: &str, allowed: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("unknown value '{}', expected one of: {}", value, allowed),
    }
}

/// Lowercases and drops separators so "Extended-art", "extended_art" and
/// "EXTENDED ART" compare equal.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// Rarity
// =============================================================================

/// How rare a printed card is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Rare and legendary cards are the only ones that may carry a
    /// non-normal variant.
    #[inline]
    pub const fn is_rare_or_better(&self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Legendary)
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Rarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "common" => Ok(Rarity::Common),
            "uncommon" => Ok(Rarity::Uncommon),
            "rare" => Ok(Rarity::Rare),
            "legendary" => Ok(Rarity::Legendary),
            _ => Err(unknown(
                "rarity",
                s,
                "Common, Uncommon, Rare, Legendary",
            )),
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// The art treatment of a printed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Variant {
    Normal,
    ExtendedArt,
    FullArt,
    AltArt,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Normal,
        Variant::ExtendedArt,
        Variant::FullArt,
        Variant::AltArt,
    ];

    pub const fn display_name(&self) -> &'static str {
        match self {
            Variant::Normal => "Normal",
            Variant::ExtendedArt => "Extended-art",
            Variant::FullArt => "Full-art",
            Variant::AltArt => "Alt-art",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Variant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "normal" => Ok(Variant::Normal),
            "extendedart" => Ok(Variant::ExtendedArt),
            "fullart" => Ok(Variant::FullArt),
            "altart" => Ok(Variant::AltArt),
            _ => Err(unknown(
                "variant",
                s,
                "Normal, Extended-art, Full-art, Alt-art",
            )),
        }
    }
}

// =============================================================================
// Binder Type
// =============================================================================

/// The rule set a binder follows. See [`crate::policy`] for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinderType {
    /// Holds anything, cannot be sold.
    Basic,
    /// Commons and uncommons only.
    Pauper,
    /// Rares and legendaries only, sold with a handling fee.
    Rares,
    /// Rare-or-better special variants, optional custom price.
    Luxury,
    /// Rare-or-better special variants, kept, never sold.
    Collector,
}

impl BinderType {
    pub const ALL: [BinderType; 5] = [
        BinderType::Basic,
        BinderType::Pauper,
        BinderType::Rares,
        BinderType::Luxury,
        BinderType::Collector,
    ];

    pub const fn display_name(&self) -> &'static str {
        match self {
            BinderType::Basic => "Basic",
            BinderType::Pauper => "Pauper",
            BinderType::Rares => "Rares",
            BinderType::Luxury => "Luxury",
            BinderType::Collector => "Collector",
        }
    }
}

impl Default for BinderType {
    fn default() -> Self {
        BinderType::Basic
    }
}

impl fmt::Display for BinderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BinderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "basic" | "noncurated" => Ok(BinderType::Basic),
            "pauper" => Ok(BinderType::Pauper),
            "rares" | "rare" => Ok(BinderType::Rares),
            "luxury" => Ok(BinderType::Luxury),
            "collector" => Ok(BinderType::Collector),
            _ => Err(unknown(
                "binder type",
                s,
                "Basic, Pauper, Rares, Luxury, Collector",
            )),
        }
    }
}

// =============================================================================
// Deck Type
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckType {
    Normal,
    Sellable,
}

impl DeckType {
    pub const ALL: [DeckType; 2] = [DeckType::Normal, DeckType::Sellable];

    pub const fn display_name(&self) -> &'static str {
        match self {
            DeckType::Normal => "Normal",
            DeckType::Sellable => "Sellable",
        }
    }
}

impl Default for DeckType {
    fn default() -> Self {
        DeckType::Normal
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DeckType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "normal" => Ok(DeckType::Normal),
            "sellable" => Ok(DeckType::Sellable),
            _ => Err(unknown("deck type", s, "Normal, Sellable")),
        }
    }
}

// =============================================================================
// Container Kind / Namespace
// =============================================================================

/// Binders and decks live in separate name namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    Binder,
    Deck,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Binder => f.write_str("Binder"),
            Namespace::Deck => f.write_str("Deck"),
        }
    }
}

/// The type tag a container carries. The tag is the only thing the policy
/// table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "namespace", content = "type", rename_all = "snake_case")]
pub enum ContainerKind {
    Binder(BinderType),
    Deck(DeckType),
}

impl ContainerKind {
    #[inline]
    pub const fn namespace(&self) -> Namespace {
        match self {
            ContainerKind::Binder(_) => Namespace::Binder,
            ContainerKind::Deck(_) => Namespace::Deck,
        }
    }
}

impl From<BinderType> for ContainerKind {
    fn from(binder_type: BinderType) -> Self {
        ContainerKind::Binder(binder_type)
    }
}

impl From<DeckType> for ContainerKind {
    fn from(deck_type: DeckType) -> Self {
        ContainerKind::Deck(deck_type)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Binder(t) => write!(f, "{} binder", t),
            ContainerKind::Deck(t) => write!(f, "{} deck", t),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_gate() {
        assert!(!Rarity::Common.is_rare_or_better());
        assert!(!Rarity::Uncommon.is_rare_or_better());
        assert!(Rarity::Rare.is_rare_or_better());
        assert!(Rarity::Legendary.is_rare_or_better());
    }

    #[test]
    fn test_parse_is_case_and_separator_insensitive() {
        assert_eq!("legendary".parse::<Rarity>().unwrap(), Rarity::Legendary);
        assert_eq!(" RARE ".parse::<Rarity>().unwrap(), Rarity::Rare);
        assert_eq!("Extended-art".parse::<Variant>().unwrap(), Variant::ExtendedArt);
        assert_eq!("FULL_ART".parse::<Variant>().unwrap(), Variant::FullArt);
        assert_eq!("alt art".parse::<Variant>().unwrap(), Variant::AltArt);
        assert_eq!("pauper".parse::<BinderType>().unwrap(), BinderType::Pauper);
        assert_eq!("Sellable".parse::<DeckType>().unwrap(), DeckType::Sellable);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("mythic".parse::<Rarity>().is_err());
        assert!("foil".parse::<Variant>().is_err());
        assert!("vault".parse::<BinderType>().is_err());
        assert!("commander".parse::<DeckType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
        for binder_type in BinderType::ALL {
            assert_eq!(
                binder_type.to_string().parse::<BinderType>().unwrap(),
                binder_type
            );
        }
    }

    #[test]
    fn test_container_kind_namespace() {
        assert_eq!(
            ContainerKind::from(BinderType::Luxury).namespace(),
            Namespace::Binder
        );
        assert_eq!(
            ContainerKind::from(DeckType::Normal).namespace(),
            Namespace::Deck
        );
        assert_eq!(
            ContainerKind::Binder(BinderType::Rares).to_string(),
            "Rares binder"
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Variant::ExtendedArt).unwrap(),
            "\"EXTENDED_ART\""
        );
        assert_eq!(
            serde_json::to_string(&ContainerKind::Deck(DeckType::Sellable)).unwrap(),
            r#"{"namespace":"deck","type":"SELLABLE"}"#
        );
    }
}
