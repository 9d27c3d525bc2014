//! Commands posted to `/actions`.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use petcare_core::{CategoryFilter, PetKind, ProductCategory, Theme};
use petcare_integration_tests::TestContext;
use petcare_storefront::router::LEARN_MORE_MESSAGE;
use serde_json::json;

#[tokio::test]
async fn test_toggle_theme_triggers_client_event() {
    let ctx = TestContext::new();
    let resp = ctx.action(json!({"action": "toggle-theme"})).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("hx-trigger"), Some(r#"{"theme-changed": "dark"}"#));
    assert!(resp.body.contains("id=\"themeState\" data-theme=\"dark\""));
    assert!(resp.body.contains("hx-swap-oob=\"true\""));
    assert!(resp.body.contains("Switched to dark theme"));
    assert_eq!(ctx.state.theme_signal().current(), Theme::Dark);

    let back = ctx.action(json!({"action": "toggle-theme"})).await;
    assert_eq!(back.header("hx-trigger"), Some(r#"{"theme-changed": "light"}"#));
}

#[tokio::test]
async fn test_select_pet_swaps_tabs_and_profile() {
    let ctx = TestContext::new();
    let resp = ctx.action(json!({"action": "select-pet", "pet": "birds"})).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("id=\"petTabs\""));
    assert!(resp.body.contains("id=\"birdsProfile\" class=\"pet-profile active\""));
    assert_eq!(ctx.state.store().unwrap().selected_pet(), PetKind::Birds);
}

#[tokio::test]
async fn test_unknown_pet_is_a_no_op() {
    let ctx = TestContext::new();
    let before = ctx.state.store().unwrap().selected_pet();

    let resp = ctx.action(json!({"action": "select-pet", "pet": "dragons"})).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.is_empty());
    assert_eq!(ctx.state.store().unwrap().selected_pet(), before);
}

#[tokio::test]
async fn test_select_category_filters_grid() {
    let ctx = TestContext::new();
    let resp = ctx
        .action(json!({"action": "select-category", "category": "toys"}))
        .await;

    assert!(resp.body.contains("id=\"productsGrid\""));
    assert!(resp.body.contains("Interactive Cat Toy"));
    assert!(!resp.body.contains("Premium Dog Food"));
    assert_eq!(
        ctx.state.store().unwrap().product_filter(),
        CategoryFilter::Only(ProductCategory::Toys)
    );
}

#[tokio::test]
async fn test_select_step_accepts_number_or_string() {
    let ctx = TestContext::new();

    let resp = ctx.action(json!({"action": "select-step", "step": 3})).await;
    assert!(resp.body.contains("id=\"groomingTips\" data-step=\"3\""));

    let resp = ctx.action(json!({"action": "select-step", "step": "2"})).await;
    assert!(resp.body.contains("id=\"groomingTips\" data-step=\"2\""));

    let resp = ctx.action(json!({"action": "select-step", "step": "99"})).await;
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn test_select_step_accepts_whole_float() {
    let ctx = TestContext::new();
    let resp = ctx.action(json!({"action": "select-step", "step": 3.0})).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("id=\"groomingTips\" data-step=\"3\""));

    let resp = ctx.action(json!({"action": "select-step", "step": 2.5})).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn test_add_to_cart_shows_toast() {
    let ctx = TestContext::new();
    let resp = ctx
        .action(json!({"action": "add-to-cart", "product_id": "1"}))
        .await;

    assert!(resp.body.contains("id=\"toastSlot\""));
    assert!(resp.body.contains("Premium Dog Food"));
    assert!(resp.body.contains("to cart!"));
    let toast = ctx.state.toasts().current().unwrap();
    assert!(toast.message.contains("Premium Dog Food"));
}

#[tokio::test]
async fn test_add_unknown_product_is_a_no_op() {
    let ctx = TestContext::new();
    let resp = ctx
        .action(json!({"action": "add-to-cart", "product_id": 999}))
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.is_empty());
    assert!(ctx.state.toasts().current().is_none());
}

#[tokio::test]
async fn test_add_negative_or_huge_product_is_a_no_op() {
    let ctx = TestContext::new();

    for product_id in [json!(-1), json!(4_294_967_296_u64), json!(1.0e12)] {
        let resp = ctx
            .action(json!({"action": "add-to-cart", "product_id": product_id}))
            .await;
        assert_eq!(resp.status, StatusCode::OK);
        assert!(resp.body.is_empty());
    }
    assert!(ctx.state.toasts().current().is_none());
}

#[tokio::test]
async fn test_notifications_open_then_close() {
    let ctx = TestContext::new();

    let open = ctx.action(json!({"action": "open-notifications"})).await;
    assert!(open.body.contains("class=\"modal active\" id=\"notificationModal\""));
    assert!(open.body.contains("notification-count hidden"));

    let close = ctx.action(json!({"action": "close-notifications"})).await;
    assert!(close.body.contains("class=\"modal\" id=\"notificationModal\""));
}

#[tokio::test]
async fn test_login_modal_modes() {
    let ctx = TestContext::new();

    let open = ctx.action(json!({"action": "open-login"})).await;
    assert!(open.body.contains("class=\"modal active\" id=\"loginModal\""));

    let signup = ctx.action(json!({"action": "show-signup"})).await;
    assert!(signup.body.contains("id=\"signupForm\" class=\"auth-form active\""));
    assert!(signup.body.contains("id=\"loginForm\" class=\"auth-form\""));

    let submitted = ctx
        .action(json!({"action": "login", "email": "a@b.co", "password": "pw"}))
        .await;
    assert!(submitted.body.contains("class=\"modal\" id=\"loginModal\""));
    assert!(submitted.body.contains("Successfully signed in!"));
}

#[tokio::test]
async fn test_dismiss_tip_persists() {
    let ctx = TestContext::new();
    let resp = ctx.action(json!({"action": "dismiss-tip"})).await;

    assert!(resp.body.contains("id=\"tipOfDay\""));
    assert!(!resp.body.contains("id=\"dailyTip\""));

    let page = ctx.get("/").await;
    assert!(!page.body.contains("id=\"dailyTip\""));
}

#[tokio::test]
async fn test_learn_more_only_toasts() {
    let ctx = TestContext::new();
    let resp = ctx.action(json!({"action": "learn-more"})).await;

    assert!(resp.body.contains(LEARN_MORE_MESSAGE));
    assert!(resp.body.contains("notification-toast info"));
}

#[tokio::test]
async fn test_scroll_updates_navigation() {
    let ctx = TestContext::new();
    let resp = ctx
        .action(json!({
            "action": "scroll",
            "offset": 950.0,
            "sections": [
                {"id": "home", "top": 0.0, "height": 600.0},
                {"id": "services", "top": 600.0, "height": 500.0},
            ],
        }))
        .await;

    assert!(resp.body.contains("href=\"#services\" class=\"nav-link active\""));
    assert!(resp.body.contains("back-to-top visible"));

    let top = ctx.action(json!({"action": "scroll", "offset": 0.0})).await;
    assert!(!top.body.contains("back-to-top visible"));
}

#[tokio::test]
async fn test_mobile_menu_and_nav_links() {
    let ctx = TestContext::new();

    let opened = ctx.action(json!({"action": "toggle-menu"})).await;
    assert_eq!(opened.status, StatusCode::OK);
    assert!(opened.body.contains("class=\"nav-menu active\""));
    assert!(opened.body.contains("hx-swap-oob=\"true\""));

    let followed = ctx
        .action(json!({"action": "select-section", "section": "shop"}))
        .await;
    assert!(followed.body.contains("class=\"nav-menu\" id=\"navMenu\""));
    assert!(followed.body.contains("href=\"#shop\" class=\"nav-link active\""));
    assert!(followed.body.contains("back-to-top visible"));

    let back = ctx
        .action(json!({"action": "select-section", "section": "home"}))
        .await;
    assert!(back.body.contains("href=\"#home\" class=\"nav-link active\""));
    assert!(!back.body.contains("back-to-top visible"));

    let unknown = ctx
        .action(json!({"action": "select-section", "section": "cellar"}))
        .await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert!(unknown.body.is_empty());
}

#[tokio::test]
async fn test_search_bar_open_close() {
    let ctx = TestContext::new();

    let open = ctx.action(json!({"action": "open-search"})).await;
    assert!(open.body.contains("id=\"searchBar\""));
    assert!(open.body.contains("search-bar active"));
    assert!(open.body.contains("autofocus"));

    let closed = ctx.action(json!({"action": "close-search"})).await;
    assert!(!closed.body.contains("search-bar active"));
}

#[tokio::test]
async fn test_dismiss_toast() {
    let ctx = TestContext::new();
    ctx.action(json!({"action": "learn-more"})).await;
    let id = ctx.state.toasts().current().unwrap().id.get();

    let stale = ctx
        .send(
            axum::http::Request::post(format!("/actions/toast/{}/dismiss", id + 1))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert!(stale.body.contains("notification-toast"));

    let dismissed = ctx
        .send(
            axum::http::Request::post(format!("/actions/toast/{id}/dismiss"))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(dismissed.status, StatusCode::OK);
    assert!(dismissed.body.contains("notification-toast info leaving"));
}

#[tokio::test]
async fn test_malformed_command_is_rejected() {
    let ctx = TestContext::new();
    let resp = ctx.action(json!({"action": "launch-rocket"})).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
}
