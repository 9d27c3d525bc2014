//! Event router.
//!
//! Every interactive element on the page posts a [`Command`] tagged by its
//! action identifier. [`EventRouter::dispatch`] performs the single state
//! transition that command names and returns the fragments to re-render.
//! Commands that address something unknown (a pet kind, a category, a step,
//! a product) are no-ops: nothing changes and nothing re-renders.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use petcare_core::{CategoryFilter, LooseNumber, PetKind, ProductId, StepSelector, Theme};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, action_breadcrumb};
use crate::preferences::PreferenceKey;
use crate::render::Fragment;
use crate::render::views::{self, LoginModalView, LoginMode, SectionBounds};
use crate::state::AppState;
use crate::toast::{ToastId, ToastKind};

pub const LEARN_MORE_MESSAGE: &str = "Coming soon: Video introduction!";
pub const LOGIN_MESSAGE: &str = "Successfully signed in! Welcome back!";
pub const SIGNUP_MESSAGE: &str = "Account created successfully! Welcome to PetCare Companion! 🎉";
pub const PHOTO_MESSAGE: &str = "Pet photo uploaded successfully! 🎉";

/// A user action, keyed by its action identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Command {
    ToggleTheme,
    SelectPet {
        pet: String,
    },
    SelectCategory {
        category: String,
    },
    SelectStep {
        step: StepSelector,
    },
    AddToCart {
        product_id: LooseNumber,
    },
    OpenNotifications,
    CloseNotifications,
    OpenLogin,
    CloseLogin,
    ShowLogin,
    ShowSignup,
    Login,
    Signup,
    DismissTip,
    LearnMore,
    Scroll {
        offset: f64,
        #[serde(default)]
        sections: Vec<SectionBounds>,
    },
    ToggleMenu,
    SelectSection {
        section: String,
    },
    OpenSearch,
    CloseSearch,
    UploadPhoto {
        content_type: String,
        bytes: Vec<u8>,
    },
    SubscribeNewsletter {
        email: String,
    },
}

impl Command {
    /// The action identifier.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::ToggleTheme => "toggle-theme",
            Self::SelectPet { .. } => "select-pet",
            Self::SelectCategory { .. } => "select-category",
            Self::SelectStep { .. } => "select-step",
            Self::AddToCart { .. } => "add-to-cart",
            Self::OpenNotifications => "open-notifications",
            Self::CloseNotifications => "close-notifications",
            Self::OpenLogin => "open-login",
            Self::CloseLogin => "close-login",
            Self::ShowLogin => "show-login",
            Self::ShowSignup => "show-signup",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::DismissTip => "dismiss-tip",
            Self::LearnMore => "learn-more",
            Self::Scroll { .. } => "scroll",
            Self::ToggleMenu => "toggle-menu",
            Self::SelectSection { .. } => "select-section",
            Self::OpenSearch => "open-search",
            Self::CloseSearch => "close-search",
            Self::UploadPhoto { .. } => "upload-photo",
            Self::SubscribeNewsletter { .. } => "subscribe-newsletter",
        }
    }

    /// The pet, category, section, step or product the command names.
    #[must_use]
    pub fn target(&self) -> Option<String> {
        match self {
            Self::SelectPet { pet: key }
            | Self::SelectCategory { category: key }
            | Self::SelectSection { section: key } => Some(key.clone()),
            Self::SelectStep { step: reference }
            | Self::AddToCart {
                product_id: reference,
            } => Some(match reference {
                LooseNumber::Number(n) => n.to_string(),
                LooseNumber::Text(text) => text.clone(),
            }),
            _ => None,
        }
    }
}

/// What a command changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    /// Regions to re-render, in order.
    pub fragments: Vec<Fragment>,
    /// Toast shown by the command, if any.
    pub toast: Option<ToastId>,
    /// New theme, when the command switched it.
    pub theme_changed: Option<Theme>,
}

impl Outcome {
    /// Nothing changed.
    #[must_use]
    pub fn unchanged() -> Self {
        Self::default()
    }

    fn with(fragments: Vec<Fragment>) -> Self {
        Self {
            fragments,
            ..Self::default()
        }
    }

    fn toast(mut self, id: ToastId) -> Self {
        self.toast = Some(id);
        self
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.fragments.is_empty() && self.toast.is_none() && self.theme_changed.is_none()
    }
}

/// Dispatches commands against the shared state.
#[derive(Clone)]
pub struct EventRouter {
    state: AppState,
}

impl EventRouter {
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Run one command.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidUpload` for a photo that is empty or not an
    /// image, and `AppError::Internal` if the store lock is poisoned. Lookup
    /// misses are not errors.
    #[instrument(skip_all, fields(action = command.action()))]
    pub async fn dispatch(&self, command: Command) -> Result<Outcome, AppError> {
        action_breadcrumb(command.action(), command.target().as_deref());

        let outcome = match command {
            Command::ToggleTheme => self.toggle_theme()?,
            Command::SelectPet { pet } => self.select_pet(&pet)?,
            Command::SelectCategory { category } => self.select_category(&category)?,
            Command::SelectStep { step } => self.select_step(&step)?,
            Command::AddToCart { product_id } => self.add_to_cart(&product_id)?,
            Command::OpenNotifications => {
                let panel = views::notification_list(&mut *self.state.store_mut()?);
                let badge = panel.badge;
                Outcome::with(vec![
                    Fragment::NotificationPanel(panel),
                    Fragment::NotificationBadge(badge),
                ])
            }
            Command::CloseNotifications => {
                let panel = views::closed_notification_panel(&*self.state.store()?);
                Outcome::with(vec![Fragment::NotificationPanel(panel)])
            }
            Command::OpenLogin | Command::ShowLogin => {
                Outcome::with(vec![login_modal(true, LoginMode::Login)])
            }
            Command::ShowSignup => Outcome::with(vec![login_modal(true, LoginMode::Signup)]),
            Command::CloseLogin => Outcome::with(vec![login_modal(false, LoginMode::Login)]),
            Command::Login => Outcome::with(vec![login_modal(false, LoginMode::Login)])
                .toast(self.toast(LOGIN_MESSAGE, ToastKind::Success)),
            // The modal reopens on the login form after a signup
            Command::Signup => Outcome::with(vec![login_modal(false, LoginMode::Login)])
                .toast(self.toast(SIGNUP_MESSAGE, ToastKind::Success)),
            Command::DismissTip => {
                self.state
                    .preferences()
                    .set(PreferenceKey::TipDismissed, "true");
                Outcome::with(vec![Fragment::DailyTip(None)])
            }
            Command::LearnMore => {
                Outcome::unchanged().toast(self.toast(LEARN_MORE_MESSAGE, ToastKind::Info))
            }
            Command::Scroll { offset, sections } => {
                let mut nav = self.state.navigation()?;
                nav.apply_scroll(views::navigation(offset, &sections));
                Outcome::with(vec![Fragment::Navigation(nav.clone())])
            }
            Command::ToggleMenu => {
                let mut nav = self.state.navigation()?;
                nav.menu_open = !nav.menu_open;
                Outcome::with(vec![Fragment::Navigation(nav.clone())])
            }
            Command::SelectSection { section } => self.select_section(&section)?,
            Command::OpenSearch => Outcome::with(vec![Fragment::SearchBar { open: true }]),
            Command::CloseSearch => Outcome::with(vec![Fragment::SearchBar { open: false }]),
            Command::UploadPhoto {
                content_type,
                bytes,
            } => self.upload_photo(&content_type, &bytes)?,
            Command::SubscribeNewsletter { email } => self.subscribe(&email).await,
        };

        tracing::debug!(
            fragments = outcome.fragments.len(),
            toast = outcome.toast.is_some(),
            "Command dispatched"
        );
        Ok(outcome)
    }

    fn toast(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.state.toasts().show(message, kind)
    }

    fn toggle_theme(&self) -> Result<Outcome, AppError> {
        let theme = {
            let mut store = self.state.store_mut()?;
            let theme = store.theme().toggled();
            store.set_theme(theme);
            theme
        };
        self.state
            .preferences()
            .set(PreferenceKey::Theme, theme.as_str());
        self.state.theme_signal().publish(theme);

        let id = self.toast(format!("Switched to {theme} theme"), ToastKind::Info);
        Ok(Outcome {
            fragments: vec![Fragment::Theme(views::theme_view(theme))],
            toast: Some(id),
            theme_changed: Some(theme),
        })
    }

    fn select_pet(&self, key: &str) -> Result<Outcome, AppError> {
        let Ok(kind) = key.parse::<PetKind>() else {
            tracing::debug!(pet = key, "Unknown pet kind ignored");
            return Ok(Outcome::unchanged());
        };
        let mut store = self.state.store_mut()?;
        if store.select_pet(kind).is_none() {
            return Ok(Outcome::unchanged());
        }
        let mut fragments = vec![Fragment::PetTabs(views::pet_tabs(&store))];
        fragments.extend(views::pet_profile(&store, kind.key()).map(Fragment::PetProfile));
        Ok(Outcome::with(fragments))
    }

    fn select_category(&self, key: &str) -> Result<Outcome, AppError> {
        let Ok(filter) = key.parse::<CategoryFilter>() else {
            tracing::debug!(category = key, "Unknown category ignored");
            return Ok(Outcome::unchanged());
        };
        let mut store = self.state.store_mut()?;
        store.set_product_filter(filter);
        Ok(Outcome::with(vec![
            Fragment::ProductGrid(views::product_grid(&store, filter)),
            Fragment::CategoryBar(views::category_bar(filter)),
        ]))
    }

    fn select_step(&self, selector: &StepSelector) -> Result<Outcome, AppError> {
        let mut store = self.state.store_mut()?;
        if store.select_step(selector).is_none() {
            tracing::debug!(?selector, "Unknown grooming step ignored");
            return Ok(Outcome::unchanged());
        }
        let mut fragments = vec![Fragment::GroomingSteps(views::grooming_steps(&store))];
        fragments.extend(views::grooming_step_detail(&store, selector).map(Fragment::GroomingTips));
        Ok(Outcome::with(fragments))
    }

    fn select_section(&self, section: &str) -> Result<Outcome, AppError> {
        let Some(next) = views::jump_to_section(section) else {
            tracing::debug!(section, "Unknown nav section ignored");
            return Ok(Outcome::unchanged());
        };
        let mut nav = self.state.navigation()?;
        *nav = next;
        Ok(Outcome::with(vec![Fragment::Navigation(nav.clone())]))
    }

    fn add_to_cart(&self, product_id: &LooseNumber) -> Result<Outcome, AppError> {
        let name = {
            let store = self.state.store()?;
            product_id
                .resolve::<ProductId>()
                .and_then(|id| store.product(id))
                .map(|p| p.name.clone())
        };
        let Some(name) = name else {
            tracing::debug!(?product_id, "Unknown product ignored");
            return Ok(Outcome::unchanged());
        };
        let id = self.toast(format!("Added \"{name}\" to cart!"), ToastKind::Success);
        Ok(Outcome::unchanged().toast(id))
    }

    fn upload_photo(&self, content_type: &str, bytes: &[u8]) -> Result<Outcome, AppError> {
        let mime = content_type.trim().to_ascii_lowercase();
        if !mime.starts_with("image/") {
            return Err(AppError::InvalidUpload(format!(
                "expected an image, got '{mime}'"
            )));
        }
        if bytes.is_empty() {
            return Err(AppError::InvalidUpload("file is empty".to_string()));
        }

        let data_uri = format!("data:{mime};base64,{}", STANDARD.encode(bytes));
        self.state
            .preferences()
            .set(PreferenceKey::PetPhoto, data_uri.clone());
        tracing::info!(mime = %mime, size = bytes.len(), "Pet photo stored");

        let id = self.toast(PHOTO_MESSAGE, ToastKind::Success);
        Ok(Outcome::with(vec![Fragment::PetPhoto(views::pet_photo(Some(data_uri)))]).toast(id))
    }

    async fn subscribe(&self, email: &str) -> Outcome {
        // No lock is held here; duplicate submissions each send a request
        match self.state.newsletter().subscribe(email).await {
            Ok(subscription) => {
                tracing::info!(email = %subscription.email, "Newsletter subscription confirmed");
                let id = self.toast(subscription.toast_message(), ToastKind::Success);
                Outcome::with(vec![Fragment::NewsletterForm {
                    email: String::new(),
                }])
                .toast(id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Newsletter subscription failed");
                let id = self.toast(e.toast_message(), ToastKind::Error);
                Outcome::with(vec![Fragment::NewsletterForm {
                    email: email.to_string(),
                }])
                .toast(id)
            }
        }
    }
}

fn login_modal(open: bool, mode: LoginMode) -> Fragment {
    Fragment::LoginModal(LoginModalView { open, mode })
}
