//! Weighted variant selection.
//!
//! The draw itself comes from the injected `RandomSource` port; this module
//! holds the pure walk so that tests can pin the draw and assert the exact
//! variant chosen.

use crate::domain::entities::prompt::Variant;

/// Select a variant by the weighted-walk rule.
///
/// `draw` is a point in `[0, total_weight)`. Weights are subtracted in array
/// order; the variant at which the remainder goes non-positive is selected.
/// Probability of variant *i* is therefore `weight_i / Σweights`.
///
/// A `draw` at or beyond the total (possible only through a misbehaving
/// random source) falls through to the last variant. Zero and negative
/// weights are not validated anywhere; with an all-zero version the walk
/// degenerates to the first variant.
///
/// Returns `None` only for an empty slice.
pub fn pick_variant(variants: &[Variant], draw: f64) -> Option<&Variant> {
    let mut remaining = draw;
    for variant in variants {
        remaining -= variant.weight;
        if remaining <= 0.0 {
            return Some(variant);
        }
    }
    variants.last()
}
