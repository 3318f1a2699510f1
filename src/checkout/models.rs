//! Checkout Domain Models
//!
//! The order form with its field rules, derived order totals, and the
//! receipt returned by a successful submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Orders with a subtotal above this ship for free
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
/// Flat shipping cost below the free-shipping threshold
pub const FLAT_SHIPPING_COST: f64 = 9.99;
/// Sales tax rate applied to the subtotal
pub const TAX_RATE: f64 = 0.07;

// =============================================================================
// Errors
// =============================================================================

/// User-visible checkout failures. The cart is preserved on every one
/// of these so the user can retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("your cart is empty")]
    EmptyCart,

    #[error("{0}")]
    InvalidForm(&'static str),

    #[error("order submission timed out")]
    TimedOut,
}

// =============================================================================
// Order Form
// =============================================================================

/// Shipping and payment details collected at checkout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

impl OrderForm {
    /// Checks every field against its rule, reporting the first
    /// violation.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.full_name.trim().len() < 3 {
            return Err(CheckoutError::InvalidForm("Full name is required"));
        }
        if !is_plausible_email(&self.email) {
            return Err(CheckoutError::InvalidForm("Invalid email address"));
        }
        if self.address.trim().len() < 5 {
            return Err(CheckoutError::InvalidForm("Address is required"));
        }
        if self.city.trim().len() < 2 {
            return Err(CheckoutError::InvalidForm("City is required"));
        }
        if self.state.trim().len() < 2 {
            return Err(CheckoutError::InvalidForm("State is required"));
        }
        if self.zip_code.trim().len() < 5 {
            return Err(CheckoutError::InvalidForm("Valid ZIP code is required"));
        }
        if self.card_number.len() != 16 || !self.card_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(CheckoutError::InvalidForm("Valid card number is required"));
        }
        if self.card_expiry.len() < 5 {
            return Err(CheckoutError::InvalidForm("Expiry date required (MM/YY)"));
        }
        let cvc_ok = (3..=4).contains(&self.card_cvc.len())
            && self.card_cvc.chars().all(|c| c.is_ascii_digit());
        if !cvc_ok {
            return Err(CheckoutError::InvalidForm("CVC required"));
        }
        Ok(())
    }
}

/// Light plausibility check: one `@` with a non-empty local part and a
/// domain containing a dot.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

// =============================================================================
// Totals and Receipt
// =============================================================================

/// The order totals presented at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotals {
    /// Cart total, discounts applied
    pub subtotal: f64,
    /// Shipping cost (zero above the free-shipping threshold)
    pub shipping: f64,
    /// Sales tax on the subtotal
    pub tax: f64,
    /// Grand total
    pub total: f64,
}

impl OrderTotals {
    /// Derives shipping, tax, and the grand total from a cart subtotal.
    pub fn for_subtotal(subtotal: f64) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_COST
        };
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// The result of a successful order submission.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// Order reference shaped `ORD-` plus six digits
    pub order_number: String,

    /// One-line summary of the purchased items
    pub summary: String,

    /// Totals as charged
    pub totals: OrderTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> OrderForm {
        OrderForm {
            full_name: "John Doe".into(),
            email: "john@example.com".into(),
            address: "123 Main St".into(),
            city: "New York".into(),
            state: "NY".into(),
            zip_code: "10001".into(),
            card_number: "1234567890123456".into(),
            card_expiry: "12/27".into(),
            card_cvc: "123".into(),
        }
    }

    #[test]
    fn a_complete_form_validates() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn each_field_rule_is_enforced() {
        let mut form = valid_form();
        form.full_name = "Jo".into();
        assert_eq!(
            form.validate(),
            Err(CheckoutError::InvalidForm("Full name is required"))
        );

        let mut form = valid_form();
        form.email = "not-an-email".into();
        assert_eq!(
            form.validate(),
            Err(CheckoutError::InvalidForm("Invalid email address"))
        );

        let mut form = valid_form();
        form.card_number = "1234".into();
        assert_eq!(
            form.validate(),
            Err(CheckoutError::InvalidForm("Valid card number is required"))
        );

        let mut form = valid_form();
        form.card_cvc = "12a".into();
        assert_eq!(form.validate(), Err(CheckoutError::InvalidForm("CVC required")));
    }

    #[test]
    fn shipping_is_free_only_above_the_threshold() {
        let small = OrderTotals::for_subtotal(20.0);
        assert!((small.shipping - FLAT_SHIPPING_COST).abs() < 1e-9);
        assert!((small.total - (20.0 + 9.99 + 1.40)).abs() < 1e-9);

        // Exactly at the threshold still pays shipping
        let at_threshold = OrderTotals::for_subtotal(50.0);
        assert!((at_threshold.shipping - FLAT_SHIPPING_COST).abs() < 1e-9);

        let large = OrderTotals::for_subtotal(100.0);
        assert!((large.shipping).abs() < 1e-9);
        assert!((large.tax - 7.0).abs() < 1e-9);
        assert!((large.total - 107.0).abs() < 1e-9);
    }
}
