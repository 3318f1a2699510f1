//! Shopping Cart Domain Models
//!
//! Data structures for cart state: live lines, read-only snapshots,
//! and the persisted on-disk layout.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

// =============================================================================
// Live State
// =============================================================================

/// One product/quantity pairing within the cart.
///
/// Uniqueness invariant: the store never holds two lines for the same
/// product id, and a live line always has `quantity >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The product this line refers to
    pub product: Product,

    /// How many units of the product are in the cart
    pub quantity: u32,
}

impl CartLine {
    /// Returns this line's contribution to the cart total, using the
    /// product's discounted price when a discount applies.
    pub fn line_total(&self) -> f64 {
        self.product.effective_price() * f64::from(self.quantity)
    }
}

/// A read-only copy of cart state handed to consumers.
///
/// The derived fields are computed from the lines at snapshot time and
/// can never drift from them.
#[derive(Debug, Clone, Default)]
pub struct CartSnapshot {
    /// Cart lines in insertion order
    pub lines: Vec<CartLine>,

    /// Sum of all line quantities
    pub count: u32,

    /// Sum of all line totals (discounts applied)
    pub total: f64,
}

impl CartSnapshot {
    /// Builds a snapshot over the given lines, recomputing the derived
    /// count and total.
    pub(crate) fn of(lines: &[CartLine]) -> Self {
        Self {
            lines: lines.to_vec(),
            count: lines.iter().map(|l| l.quantity).sum(),
            total: lines.iter().map(CartLine::line_total).sum(),
        }
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Persisted Layout
// =============================================================================

/// One persisted `(productId, quantity)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLine {
    /// Id of the product; details are re-resolved from the catalog on load
    pub product_id: u32,

    /// Persisted quantity
    pub quantity: u32,
}

/// The persisted cart record: a sequence of `(productId, quantity)`
/// pairs in insertion order. Product details are never duplicated into
/// storage.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PersistedCart {
    /// The persisted pairs
    pub lines: Vec<PersistedLine>,
}

impl PersistedCart {
    /// Projects live cart lines down to their persisted pairs.
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|l| PersistedLine {
                    product_id: l.product.id,
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}
