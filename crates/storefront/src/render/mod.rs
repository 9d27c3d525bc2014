//! Render layer.
//!
//! Rendering is split in two: [`views`] projects the store into view models
//! (pure, no markup) and [`templates`] turns view models into HTML.
//! [`Fragment`] names one replaceable region of the page and ties the two
//! together.

pub mod templates;
pub mod views;

use askama::Template;

use templates::{
    CategoryBarTemplate, DailyTipTemplate, GroomingStepsTemplate, GroomingTipsTemplate,
    LoginModalTemplate, NavigationTemplate, NewsletterFormTemplate, NotificationBadgeTemplate,
    NotificationPanelTemplate, PetPhotoTemplate, PetProfilesTemplate, PetTabsTemplate,
    ProductGridTemplate, SearchBarTemplate, ThemeStateTemplate, ToastTemplate,
};
use views::{
    Badge, CategoryButton, LoginModalView, NavigationView, NotificationPanel, PetPhotoView,
    PetProfileView, PetTab, ProductCard, StepTipsView, StepView, ThemeView, ToastView,
};

/// A page region re-rendered by an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Theme(ThemeView),
    ProductGrid(Vec<ProductCard>),
    CategoryBar(Vec<CategoryButton>),
    PetTabs(Vec<PetTab>),
    PetProfile(PetProfileView),
    GroomingSteps(Vec<StepView>),
    GroomingTips(StepTipsView),
    NotificationPanel(NotificationPanel),
    NotificationBadge(Badge),
    LoginModal(LoginModalView),
    NewsletterForm { email: String },
    PetPhoto(PetPhotoView),
    DailyTip(Option<String>),
    Navigation(NavigationView),
    SearchBar { open: bool },
}

impl Fragment {
    /// Stable name, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Theme(_) => "theme",
            Self::ProductGrid(_) => "product-grid",
            Self::CategoryBar(_) => "category-bar",
            Self::PetTabs(_) => "pet-tabs",
            Self::PetProfile(_) => "pet-profile",
            Self::GroomingSteps(_) => "grooming-steps",
            Self::GroomingTips(_) => "grooming-tips",
            Self::NotificationPanel(_) => "notification-panel",
            Self::NotificationBadge(_) => "notification-badge",
            Self::LoginModal(_) => "login-modal",
            Self::NewsletterForm { .. } => "newsletter-form",
            Self::PetPhoto(_) => "pet-photo",
            Self::DailyTip(_) => "daily-tip",
            Self::Navigation(_) => "navigation",
            Self::SearchBar { .. } => "search-bar",
        }
    }

    /// Render to HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(self, oob: bool) -> askama::Result<String> {
        match self {
            Self::Theme(theme) => ThemeStateTemplate { theme, oob }.render(),
            Self::ProductGrid(products) => ProductGridTemplate { products, oob }.render(),
            Self::CategoryBar(categories) => CategoryBarTemplate { categories, oob }.render(),
            Self::PetTabs(tabs) => PetTabsTemplate { tabs, oob }.render(),
            Self::PetProfile(profile) => PetProfilesTemplate { profile, oob }.render(),
            Self::GroomingSteps(steps) => GroomingStepsTemplate { steps, oob }.render(),
            Self::GroomingTips(detail) => GroomingTipsTemplate { detail, oob }.render(),
            Self::NotificationPanel(panel) => NotificationPanelTemplate { panel, oob }.render(),
            Self::NotificationBadge(badge) => NotificationBadgeTemplate { badge, oob }.render(),
            Self::LoginModal(modal) => LoginModalTemplate { modal, oob }.render(),
            Self::NewsletterForm { email } => NewsletterFormTemplate { email, oob }.render(),
            Self::PetPhoto(photo) => PetPhotoTemplate { photo, oob }.render(),
            Self::DailyTip(tip) => DailyTipTemplate { tip, oob }.render(),
            Self::Navigation(nav) => NavigationTemplate::new(nav, oob).render(),
            Self::SearchBar { open } => SearchBarTemplate { open, oob }.render(),
        }
    }
}

/// Render the toast slot (empty when no toast is showing).
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_toast(toast: Option<ToastView>, oob: bool) -> askama::Result<String> {
    ToastTemplate { toast, oob }.render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use petcare_core::{CategoryFilter, ProductCategory, StepSelector, Store, Theme};

    use super::*;

    #[test]
    fn test_product_grid_markup() {
        let store = Store::seeded();
        let html = Fragment::ProductGrid(views::product_grid(
            &store,
            CategoryFilter::Only(ProductCategory::Food),
        ))
        .render(false)
        .unwrap();

        assert!(html.contains("id=\"productsGrid\""));
        assert!(!html.contains("hx-swap-oob"));
        assert!(html.contains("$45.99"));
        assert!(html.contains("class=\"old-price\""));
        assert!(html.contains("FOOD"));
        assert!(!html.contains("Interactive Cat Toy"));
    }

    #[test]
    fn test_oob_marker() {
        let html = Fragment::NotificationBadge(Badge { count: 2 })
            .render(true)
            .unwrap();
        assert!(html.contains("hx-swap-oob=\"true\""));
        assert!(html.contains('2'));
    }

    #[test]
    fn test_hidden_badge() {
        let html = Fragment::NotificationBadge(Badge { count: 0 })
            .render(false)
            .unwrap();
        assert!(html.contains("hidden"));
    }

    #[test]
    fn test_pet_profiles_only_active_has_content() {
        let store = Store::seeded();
        let profile = views::pet_profile(&store, "birds").unwrap();
        let title = profile.title.clone();
        let html = Fragment::PetProfile(profile).render(false).unwrap();

        assert!(html.contains("id=\"birdsProfile\" class=\"pet-profile active\""));
        assert!(html.contains("id=\"dogsProfile\" class=\"pet-profile\""));
        assert_eq!(html.matches(&title).count(), 2);
    }

    #[test]
    fn test_grooming_tips_markup() {
        let store = Store::seeded();
        let detail = views::grooming_step_detail(&store, &StepSelector::from("2")).unwrap();
        let tips = detail.tips.clone();
        let html = Fragment::GroomingTips(detail).render(true).unwrap();
        for tip in tips {
            assert!(html.contains(&format!("<li>{tip}</li>")));
        }
    }

    #[test]
    fn test_escapes_user_text() {
        let html = Fragment::NewsletterForm {
            email: "<script>".to_string(),
        }
        .render(false)
        .unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_theme_state() {
        let html = Fragment::Theme(views::theme_view(Theme::Dark))
            .render(true)
            .unwrap();
        assert!(html.contains("data-theme=\"dark\""));
    }

    #[test]
    fn test_search_bar_focuses_when_open() {
        let open = Fragment::SearchBar { open: true }.render(true).unwrap();
        assert!(open.contains("class=\"search-bar active\""));
        assert!(open.contains("autofocus"));
        assert!(open.contains("close-search"));

        let closed = Fragment::SearchBar { open: false }.render(true).unwrap();
        assert!(closed.contains("class=\"search-bar\""));
        assert!(!closed.contains("autofocus"));
    }

    #[test]
    fn test_navigation_markup() {
        let nav = NavigationView {
            menu_open: true,
            ..NavigationView::at_top()
        };
        let html = Fragment::Navigation(nav).render(true).unwrap();
        assert!(html.contains("class=\"nav-menu active\""));
        assert!(html.contains("href=\"#home\" class=\"nav-link active\""));
        assert!(html.contains(r#""section": "shop""#));
        assert!(!html.contains("back-to-top visible"));
    }

    #[test]
    fn test_modal_backdrops_close() {
        let store = Store::seeded();
        let panel = Fragment::NotificationPanel(views::closed_notification_panel(&store))
            .render(false)
            .unwrap();
        let backdrop = panel.lines().next().unwrap();
        assert!(backdrop.contains("hx-trigger=\"click[target === this]\""));
        assert!(backdrop.contains("close-notifications"));

        let login = Fragment::LoginModal(LoginModalView {
            open: true,
            ..LoginModalView::default()
        })
        .render(false)
        .unwrap();
        let backdrop = login.lines().next().unwrap();
        assert!(backdrop.contains("hx-trigger=\"click[target === this]\""));
        assert!(backdrop.contains("close-login"));
    }

    #[test]
    fn test_empty_toast_slot() {
        let html = render_toast(None, false).unwrap();
        assert!(html.contains("id=\"toastSlot\""));
        assert!(!html.contains("notification-toast"));
    }
}
