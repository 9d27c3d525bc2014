//! Home page route handler.

use axum::{extract::State, response::IntoResponse};
use petcare_core::StepSelector;
use rand::seq::IndexedRandom;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::preferences::PreferenceKey;
use crate::render::templates::HomeTemplate;
use crate::render::views::{self, LoginModalView, NavigationView, ToastView};
use crate::render::{Fragment, render_toast};
use crate::state::AppState;
use crate::toast::ToastKind;

pub const WELCOME_MESSAGE: &str = "Welcome to PetCare Companion! 🐾";

/// Full page.
///
/// Greets with the welcome toast and picks a fresh daily tip unless the tip
/// was dismissed.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.toasts().show(WELCOME_MESSAGE, ToastKind::Success);
    build_page(&state)
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// Assemble the page from the current store and preferences.
///
/// # Errors
///
/// Returns an error if the store lock is poisoned or a template fails.
pub fn build_page(state: &AppState) -> Result<HomeTemplate> {
    let store = state.store()?;
    let preferences = state.preferences();

    let tip_dismissed = preferences.get(PreferenceKey::TipDismissed).as_deref() == Some("true");
    let tip = if tip_dismissed {
        None
    } else {
        store.daily_tips().choose(&mut rand::rng()).cloned()
    };

    let profile = views::pet_profile(&store, store.selected_pet().key()).ok_or_else(|| {
        AppError::Internal(format!("no guide for {}", store.selected_pet()))
    })?;
    let active_step = StepSelector::from(store.active_step());
    let step_tips = views::grooming_step_detail(&store, &active_step).ok_or_else(|| {
        AppError::Internal(format!("no grooming step {}", store.active_step()))
    })?;
    let filter = store.product_filter();
    let theme = views::theme_view(store.theme());

    let inline = |fragment: Fragment| fragment.render(false);

    // A fresh page starts at the top with the mobile menu closed
    let navigation = NavigationView::at_top();
    *state.navigation()? = navigation.clone();

    Ok(HomeTemplate {
        theme_state: inline(Fragment::Theme(theme.clone()))?,
        theme,
        navigation: inline(Fragment::Navigation(navigation))?,
        search_bar: inline(Fragment::SearchBar { open: false })?,
        notification_badge: inline(Fragment::NotificationBadge(views::notification_badge(
            &store,
        )))?,
        notification_panel: inline(Fragment::NotificationPanel(
            views::closed_notification_panel(&store),
        ))?,
        login_modal: inline(Fragment::LoginModal(LoginModalView::default()))?,
        pet_tabs: inline(Fragment::PetTabs(views::pet_tabs(&store)))?,
        pet_profiles: inline(Fragment::PetProfile(profile))?,
        category_bar: inline(Fragment::CategoryBar(views::category_bar(filter)))?,
        product_grid: inline(Fragment::ProductGrid(views::product_grid(&store, filter)))?,
        grooming_steps: inline(Fragment::GroomingSteps(views::grooming_steps(&store)))?,
        grooming_tips: inline(Fragment::GroomingTips(step_tips))?,
        pet_photo: inline(Fragment::PetPhoto(views::pet_photo(
            preferences.get(PreferenceKey::PetPhoto),
        )))?,
        newsletter_form: inline(Fragment::NewsletterForm {
            email: String::new(),
        })?,
        daily_tip: inline(Fragment::DailyTip(tip))?,
        toast: render_toast(state.toasts().current().as_ref().map(ToastView::from), false)?,
    })
}
