//! End-to-end purchase flows through the session API.
//!
//! These tests drive the same entry points the storefront screens use:
//! browse → add to cart → checkout, and product detail → buy now → checkout,
//! then verify the order history the user page renders.

use bazaar_core::{OrderStatus, PaymentMethod, Product};
use bazaar_session::{api, BuyNowLine, ErrorCode, SessionState};

fn catalog_product(id: &str, title: &str, price_cents: i64) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price_cents,
        image: format!("https://example.com/products/{}.png", id),
        category: "electronics".to_string(),
        description: format!("{} from the demo catalog", title),
    }
}

#[test]
fn cart_checkout_full_flow() {
    let state = SessionState::new();
    let speaker = catalog_product("1", "Bluetooth Speaker", 1000);
    let cable = catalog_product("2", "USB-C Cable", 500);

    // Two of the speaker, one cable: $25.00 total.
    api::add_to_cart(&state, speaker.clone()).unwrap();
    api::add_to_cart(&state, speaker).unwrap();
    api::add_to_cart(&state, cable).unwrap();

    let cart = api::get_cart(&state);
    assert_eq!(cart.totals.line_count, 2);
    assert_eq!(cart.totals.subtotal_cents, 2500);

    let receipt = api::complete_purchase(&state, "UPI", None).unwrap();
    assert_eq!(receipt.total_cents, 2500);
    assert_eq!(receipt.item_count, 2);

    // Cart emptied, history gained exactly one order.
    assert_eq!(api::get_cart(&state).totals.line_count, 0);
    let history = api::get_purchase_history(&state);
    assert_eq!(history.len(), 1);

    let order = &history[0];
    assert_eq!(order.id, receipt.order_id);
    assert_eq!(order.method, PaymentMethod::Upi);
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.total_cents, 2500);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[1].quantity, 1);
}

#[test]
fn buy_now_flow_leaves_cart_alone() {
    let state = SessionState::new();
    let in_cart = catalog_product("1", "Bluetooth Speaker", 1000);
    let buy_now = catalog_product("3", "Mechanical Keyboard", 2000);

    api::add_to_cart(&state, in_cart).unwrap();

    // Product detail screen: stage the item, pick quantity 3, pay by card.
    api::stage_for_checkout(&state, Some(buy_now.clone())).unwrap();
    let receipt = api::complete_purchase(
        &state,
        "Credit Card",
        Some(vec![BuyNowLine {
            product: buy_now,
            quantity: 3,
        }]),
    )
    .unwrap();

    assert_eq!(receipt.total_cents, 6000);

    // Stage consumed; the cart the user was still shopping with is intact.
    assert!(api::get_staged_item(&state).is_none());
    assert_eq!(api::get_cart(&state).totals.line_count, 1);

    let history = api::get_purchase_history(&state);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].method, PaymentMethod::CreditCard);
    assert_eq!(history[0].items.len(), 1);
    assert_eq!(history[0].items[0].quantity, 3);
}

#[test]
fn staged_item_checkout_without_explicit_lines() {
    let state = SessionState::new();
    let buy_now = catalog_product("7", "Desk Lamp", 1250);

    api::stage_for_checkout(&state, Some(buy_now)).unwrap();
    let receipt = api::complete_purchase(&state, "Cash on Delivery", None).unwrap();

    // Staged path defaults to a single line of quantity 1.
    assert_eq!(receipt.total_cents, 1250);
    assert_eq!(receipt.item_count, 1);
    assert!(api::get_staged_item(&state).is_none());
}

#[test]
fn empty_purchase_never_grows_history() {
    let state = SessionState::new();

    // Nothing in the cart, nothing staged, nothing explicit.
    let err = api::complete_purchase(&state, "UPI", None).unwrap_err();
    assert_eq!(err.code, ErrorCode::BusinessLogic);

    // Explicit empty list: also rejected, no fallback to other sources.
    let err = api::complete_purchase(&state, "UPI", Some(vec![])).unwrap_err();
    assert_eq!(err.code, ErrorCode::BusinessLogic);

    assert!(api::get_purchase_history(&state).is_empty());
    assert_eq!(api::get_cart(&state).totals.line_count, 0);
}

#[test]
fn committed_orders_are_immune_to_later_mutation() {
    let state = SessionState::new();
    let speaker = catalog_product("1", "Bluetooth Speaker", 1000);

    api::add_to_cart(&state, speaker.clone()).unwrap();
    api::add_to_cart(&state, speaker.clone()).unwrap();
    api::complete_purchase(&state, "UPI", None).unwrap();

    // Keep shopping with the same product after the order committed.
    api::add_to_cart(&state, speaker.clone()).unwrap();
    api::increase_quantity(&state, "1");
    api::increase_quantity(&state, "1");

    // A catalog price change re-adds at the new price...
    let mut repriced = speaker;
    repriced.price_cents = 9999;
    api::remove_from_cart(&state, "1");
    api::add_to_cart(&state, repriced).unwrap();

    // ...but the committed order still shows the original snapshot.
    let history = api::get_purchase_history(&state);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total_cents, 2000);
    assert_eq!(history[0].items[0].unit_price_cents, 1000);
    assert_eq!(history[0].items[0].quantity, 2);
}

#[test]
fn history_orders_most_recent_first() {
    let state = SessionState::new();

    api::add_to_cart(&state, catalog_product("1", "Speaker", 100)).unwrap();
    let first = api::complete_purchase(&state, "UPI", None).unwrap();

    api::add_to_cart(&state, catalog_product("2", "Cable", 200)).unwrap();
    let second = api::complete_purchase(&state, "Credit Card", None).unwrap();

    let history = api::get_purchase_history(&state);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.order_id);
    assert_eq!(history[1].id, first.order_id);
}

#[test]
fn quantity_controls_respect_floor_and_absence() {
    let state = SessionState::new();
    api::add_to_cart(&state, catalog_product("1", "Speaker", 1000)).unwrap();

    api::increase_quantity(&state, "1");
    api::increase_quantity(&state, "1");
    assert_eq!(api::get_cart(&state).lines[0].quantity, 3);

    api::decrease_quantity(&state, "1");
    api::decrease_quantity(&state, "1");
    api::decrease_quantity(&state, "1"); // at floor now
    api::decrease_quantity(&state, "1"); // no-op
    let cart = api::get_cart(&state);
    assert_eq!(cart.lines[0].quantity, 1);
    assert_eq!(cart.totals.line_count, 1);

    // Unknown ids are absorbed quietly.
    api::increase_quantity(&state, "404");
    api::decrease_quantity(&state, "404");
    assert_eq!(api::get_cart(&state).totals.line_count, 1);
}
