//! # Option Selection & Variant Resolution
//!
//! Maps the shopper's option choices to a concrete purchasable variant.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Variant Resolution                                │
//! │                                                                         │
//! │   SelectionState { "color": "Black", "size": "M" }                      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   Scan product.variants IN ORDER                                        │
//! │   First variant where EVERY selected_option is satisfied                │
//! │        │                                                                │
//! │        ├── match ──────────────────────────► Some(variant)              │
//! │        │                                                                │
//! │        └── no match                                                     │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │        product has EXACTLY ONE variant? ──yes──► Some(that variant)     │
//! │                 │ no                                                    │
//! │                 ▼                                                       │
//! │               None  (selection incomplete or contradictory)             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Rules
//! - Option NAMES are case-insensitive: keys are lowercased on write and on
//!   lookup, so `select("Color", ..)` and `select("color", ..)` hit the same
//!   axis. Option VALUES are compared byte-for-byte.
//! - The single-variant fallback applies even when the selection contradicts
//!   that variant: a product with one variant is always purchasable.
//! - Products whose variant list repeats an option combination resolve to the
//!   FIRST occurrence. `validation::find_duplicate_option_sets` flags such
//!   catalogs at ingestion time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ProductVariant;

// =============================================================================
// Selection State
// =============================================================================

/// The shopper's current option choices, one value per option axis.
///
/// Keys are lowercased option names; values are stored exactly as given.
/// This is the shape the product page keeps in the URL query string, so it
/// serializes as a flat string map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct SelectionState(HashMap<String, String>);

impl SelectionState {
    /// Creates an empty selection (no axis chosen yet).
    pub fn new() -> Self {
        SelectionState(HashMap::new())
    }

    /// Chooses a value on an option axis, replacing any previous choice
    /// on the same axis. The axis name is lowercased.
    pub fn select(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into().to_lowercase(), value.into());
    }

    /// Returns the chosen value for an option axis, if any.
    /// The lookup name is lowercased, mirroring `select`.
    pub fn value_for(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_lowercase()).map(String::as_str)
    }

    /// True when no axis has been chosen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of axes with a chosen value.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over (lowercased axis name, value) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Builds a selection from (name, value) pairs, e.g. URL query entries.
/// Later pairs overwrite earlier ones on the same axis.
impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for SelectionState {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut state = SelectionState::new();
        for (name, value) in iter {
            state.select(name, value);
        }
        state
    }
}

// =============================================================================
// Variant Resolution
// =============================================================================

/// Resolves the variant described by the given selection.
///
/// Scans `variants` in order and returns the first one whose every option is
/// satisfied by the selection (see [`ProductVariant::matches_selection`]).
/// When nothing matches and the product has exactly one variant, that variant
/// is returned regardless of the selection. Otherwise None: the selection is
/// incomplete or contradicts the catalog, and submission must not proceed.
pub fn resolve_variant<'a>(
    variants: &'a [ProductVariant],
    selection: &SelectionState,
) -> Option<&'a ProductVariant> {
    let matched = variants.iter().find(|v| v.matches_selection(selection));

    match matched {
        Some(variant) => Some(variant),
        // Single-variant products are purchasable without any selection
        None if variants.len() == 1 => variants.first(),
        None => None,
    }
}

/// Resolves just the variant id for the given selection.
#[inline]
pub fn resolve_variant_id<'a>(
    variants: &'a [ProductVariant],
    selection: &SelectionState,
) -> Option<&'a str> {
    resolve_variant(variants, selection).map(|v| v.id.as_str())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectedOption;

    fn variant(id: &str, options: &[(&str, &str)]) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            title: options
                .iter()
                .map(|(_, v)| *v)
                .collect::<Vec<_>>()
                .join(" / "),
            selected_options: options
                .iter()
                .map(|(n, v)| SelectedOption::new(*n, *v))
                .collect(),
            price_cents: 1999,
        }
    }

    fn shirt_variants() -> Vec<ProductVariant> {
        vec![
            variant("var-black-m", &[("Color", "Black"), ("Size", "M")]),
            variant("var-black-l", &[("Color", "Black"), ("Size", "L")]),
            variant("var-white-m", &[("Color", "White"), ("Size", "M")]),
        ]
    }

    #[test]
    fn test_exact_match_resolves() {
        let variants = shirt_variants();
        let selection =
            SelectionState::from_iter([("color", "Black"), ("size", "L")]);

        let resolved = resolve_variant(&variants, &selection);
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("var-black-l"));
    }

    #[test]
    fn test_partial_selection_resolves_to_none() {
        let variants = shirt_variants();
        let selection = SelectionState::from_iter([("color", "Black")]);

        assert!(resolve_variant(&variants, &selection).is_none());
    }

    #[test]
    fn test_contradictory_selection_resolves_to_none() {
        let variants = shirt_variants();
        // No White/L variant exists
        let selection =
            SelectionState::from_iter([("color", "White"), ("size", "L")]);

        assert!(resolve_variant(&variants, &selection).is_none());
    }

    #[test]
    fn test_single_variant_fallback() {
        let variants = vec![variant("var-only", &[("Size", "M")])];
        // Selection contradicts the sole variant; it still resolves
        let selection = SelectionState::from_iter([("size", "XL")]);

        let resolved = resolve_variant(&variants, &selection);
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("var-only"));
    }

    #[test]
    fn test_single_variant_fallback_with_empty_selection() {
        let variants = vec![variant("var-only", &[("Size", "M")])];
        let selection = SelectionState::new();

        let resolved = resolve_variant(&variants, &selection);
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("var-only"));
    }

    #[test]
    fn test_no_fallback_with_multiple_variants() {
        let variants = shirt_variants();
        let selection = SelectionState::new();

        assert!(resolve_variant(&variants, &selection).is_none());
    }

    #[test]
    fn test_duplicate_option_sets_resolve_to_first() {
        let variants = vec![
            variant("var-first", &[("Size", "M")]),
            variant("var-dup", &[("Size", "M")]),
        ];
        let selection = SelectionState::from_iter([("size", "M")]);

        let resolved = resolve_variant(&variants, &selection);
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("var-first"));
    }

    #[test]
    fn test_optionless_variant_shadows_later_variants() {
        // A variant with no options matches any selection, so everything
        // after it in the list is unreachable through resolution.
        let variants = vec![
            variant("var-bare", &[]),
            variant("var-sized", &[("Size", "M")]),
        ];
        let selection = SelectionState::from_iter([("size", "M")]);

        let resolved = resolve_variant(&variants, &selection);
        assert_eq!(resolved.map(|v| v.id.as_str()), Some("var-bare"));
    }

    #[test]
    fn test_resolve_variant_id() {
        let variants = shirt_variants();
        let selection =
            SelectionState::from_iter([("color", "White"), ("size", "M")]);

        assert_eq!(resolve_variant_id(&variants, &selection), Some("var-white-m"));
        assert_eq!(resolve_variant_id(&variants, &SelectionState::new()), None);
    }

    #[test]
    fn test_select_lowercases_axis_names() {
        let mut selection = SelectionState::new();
        selection.select("Color", "Black");

        assert_eq!(selection.value_for("color"), Some("Black"));
        assert_eq!(selection.value_for("COLOR"), Some("Black"));
        assert_eq!(selection.value_for("size"), None);
    }

    #[test]
    fn test_reselect_overwrites_axis() {
        let mut selection = SelectionState::new();
        selection.select("size", "M");
        selection.select("Size", "L");

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.value_for("size"), Some("L"));
    }

    #[test]
    fn test_selection_serializes_as_flat_map() {
        let selection = SelectionState::from_iter([("Color", "Black")]);
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json, serde_json::json!({ "color": "Black" }));
    }
}
