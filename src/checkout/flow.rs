//! Checkout Submission Flow
//!
//! Validates the order form, simulates order processing against the
//! cart snapshot, and clears the cart once submission resolves. No cart
//! mutation interleaves with an in-flight submission; the snapshot is
//! taken up front and the cart is only touched on success.

use std::time::Duration;

use tokio::time::timeout;
use uuid::Uuid;

use super::models::{CheckoutError, OrderForm, OrderTotals, Receipt};
use crate::cart::helpers::format_line_summary;
use crate::cart::SharedCartStore;

/// Simulated order-processing time.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Upper bound on a submission before it is abandoned as timed out.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(5);

/// The checkout collaborator. Holds a handle to the cart it settles.
pub struct CheckoutFlow {
    cart: SharedCartStore,
    processing_delay: Duration,
    submit_timeout: Duration,
}

impl CheckoutFlow {
    /// Creates a flow over the given cart with the default timings.
    pub fn new(cart: SharedCartStore) -> Self {
        Self::with_timings(cart, PROCESSING_DELAY, SUBMIT_TIMEOUT)
    }

    /// Creates a flow with explicit processing and timeout durations.
    pub fn with_timings(
        cart: SharedCartStore,
        processing_delay: Duration,
        submit_timeout: Duration,
    ) -> Self {
        Self {
            cart,
            processing_delay,
            submit_timeout,
        }
    }

    /// Returns the totals that would be charged for the current cart.
    pub fn order_totals(&self) -> OrderTotals {
        OrderTotals::for_subtotal(self.cart.total())
    }

    /// Submits the order.
    ///
    /// Fails fast on an invalid form or an empty cart. The simulated
    /// processing delay is bounded by the submit timeout; a timeout
    /// leaves the cart untouched so the user can retry. On success the
    /// cart is cleared and a receipt is returned.
    pub async fn submit(&self, form: &OrderForm) -> Result<Receipt, CheckoutError> {
        form.validate()?;

        let snapshot = self.cart.snapshot();
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let totals = OrderTotals::for_subtotal(snapshot.total);

        if timeout(self.submit_timeout, tokio::time::sleep(self.processing_delay))
            .await
            .is_err()
        {
            tracing::warn!("order submission timed out, cart preserved");
            return Err(CheckoutError::TimedOut);
        }

        self.cart.clear();

        let receipt = Receipt {
            order_number: new_order_number(),
            summary: format_line_summary(&snapshot.lines),
            totals,
        };
        tracing::info!(
            order_number = %receipt.order_number,
            total = receipt.totals.total,
            "order placed"
        );
        Ok(receipt)
    }
}

/// Generates an order reference shaped `ORD-` plus six digits.
fn new_order_number() -> String {
    let digits = Uuid::new_v4().as_u128() % 900_000 + 100_000;
    format!("ORD-{digits}")
}
