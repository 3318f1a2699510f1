//! Storefront demo session.
//!
//! Drives one scripted shopper session end to end: sign in, browse the
//! catalog, fill a cart, and check out. The cart file in the system
//! temp directory survives between runs, so a session that skips
//! checkout leaves its cart behind for the next run to restore.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use shopfront::auth::state::SIMULATED_LATENCY;
use shopfront::auth::AuthStore;
use shopfront::cart::helpers::format_money;
use shopfront::cart::{CartStore, SharedCartStore};
use shopfront::catalog::{Catalog, ProductQuery, SortBy};
use shopfront::checkout::{CheckoutFlow, OrderForm};
use shopfront::storage::JsonFileStorage;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Application-start wiring: one catalog, one cart, one auth store.
    let catalog = Catalog::with_demo_products();
    let cart_path = std::env::temp_dir().join("shopfront-cart.json");
    let storage = JsonFileStorage::new(&cart_path);
    let cart: SharedCartStore = Arc::new(CartStore::restore(&catalog, Box::new(storage)));
    let auth = AuthStore::with_demo_users(SIMULATED_LATENCY);

    if !cart.is_empty() {
        tracing::info!(count = cart.count(), "restored cart from previous session");
    }

    // Sign in with the demo account.
    match auth.login("user@example.com", "password123").await {
        Ok(user) => tracing::info!(name = %user.name, "signed in"),
        Err(err) => {
            tracing::error!(error = %err, "login failed");
            return;
        }
    }

    // Browse: featured products, then an audio search sorted by price.
    for product in catalog.featured_products() {
        tracing::info!(
            name = %product.name,
            price = %format_money(product.effective_price()),
            "featured"
        );
    }
    let speakers = catalog.search(
        &ProductQuery::new()
            .search("speaker")
            .sort(SortBy::PriceAsc),
    );
    tracing::info!(matches = speakers.len(), "searched for speakers");

    // Fill the cart, gating on stock at the call site.
    let mut updates = cart.subscribe();
    for (id, quantity) in [(1, 1), (5, 2), (4, 1)] {
        let Some(product) = catalog.product_by_id(id) else {
            continue;
        };
        if !product.in_stock {
            tracing::info!(name = %product.name, "out of stock, skipping");
            continue;
        }
        cart.add_to_cart(product, quantity);
    }
    cart.update_quantity(5, 1);

    {
        let snapshot = updates.borrow_and_update();
        tracing::info!(
            count = snapshot.count,
            total = %format_money(snapshot.total),
            "cart ready"
        );
    }

    // Check out with a canned order form.
    let flow = CheckoutFlow::new(Arc::clone(&cart));
    let totals = flow.order_totals();
    tracing::info!(
        subtotal = %format_money(totals.subtotal),
        shipping = %format_money(totals.shipping),
        tax = %format_money(totals.tax),
        total = %format_money(totals.total),
        "order summary"
    );

    let form = OrderForm {
        full_name: "Demo User".into(),
        email: "user@example.com".into(),
        address: "123 Main St".into(),
        city: "New York".into(),
        state: "NY".into(),
        zip_code: "10001".into(),
        card_number: "4242424242424242".into(),
        card_expiry: "12/27".into(),
        card_cvc: "123".into(),
    };
    match flow.submit(&form).await {
        Ok(receipt) => tracing::info!(
            order_number = %receipt.order_number,
            items = %receipt.summary,
            total = %format_money(receipt.totals.total),
            "order confirmed"
        ),
        Err(err) => tracing::error!(error = %err, "checkout failed, cart preserved"),
    }

    auth.logout();
}
