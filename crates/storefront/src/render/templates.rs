//! Askama templates for every fragment and the full page.
//!
//! Fragment templates carry an `oob` flag. Set, the root element is marked
//! `hx-swap-oob` so it can ride along in an action response and replace its
//! counterpart by id.

use askama::Template;
use askama_web::WebTemplate;

use super::views::{
    Badge, CategoryButton, LoginModalView, NAV_SECTIONS, NavigationView, NotificationPanel,
    PetPhotoView, PetProfileView, PetTab, ProductCard, StepTipsView, StepView, ThemeView,
    ToastView,
};
use crate::filters;

#[derive(Template, WebTemplate)]
#[template(path = "fragments/theme_state.html")]
pub struct ThemeStateTemplate {
    pub theme: ThemeView,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCard>,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/category_bar.html")]
pub struct CategoryBarTemplate {
    pub categories: Vec<CategoryButton>,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/pet_tabs.html")]
pub struct PetTabsTemplate {
    pub tabs: Vec<PetTab>,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/pet_profiles.html")]
pub struct PetProfilesTemplate {
    pub profile: PetProfileView,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/grooming_steps.html")]
pub struct GroomingStepsTemplate {
    pub steps: Vec<StepView>,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/grooming_tips.html")]
pub struct GroomingTipsTemplate {
    pub detail: StepTipsView,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/notification_panel.html")]
pub struct NotificationPanelTemplate {
    pub panel: NotificationPanel,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/notification_badge.html")]
pub struct NotificationBadgeTemplate {
    pub badge: Badge,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/login_modal.html")]
pub struct LoginModalTemplate {
    pub modal: LoginModalView,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/newsletter_form.html")]
pub struct NewsletterFormTemplate {
    /// Value kept in the input; cleared after a successful subscription.
    pub email: String,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/pet_photo.html")]
pub struct PetPhotoTemplate {
    pub photo: PetPhotoView,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/daily_tip.html")]
pub struct DailyTipTemplate {
    /// `None` once dismissed.
    pub tip: Option<String>,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/navigation.html")]
pub struct NavigationTemplate {
    pub nav: NavigationView,
    pub sections: &'static [(&'static str, &'static str)],
    pub oob: bool,
}

impl NavigationTemplate {
    #[must_use]
    pub const fn new(nav: NavigationView, oob: bool) -> Self {
        Self {
            nav,
            sections: &NAV_SECTIONS,
            oob,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/search_bar.html")]
pub struct SearchBarTemplate {
    pub open: bool,
    pub oob: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "fragments/toast.html")]
pub struct ToastTemplate {
    pub toast: Option<ToastView>,
    pub oob: bool,
}

/// The whole page, assembled from pre-rendered fragments.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub theme: ThemeView,
    pub theme_state: String,
    pub navigation: String,
    pub search_bar: String,
    pub notification_badge: String,
    pub notification_panel: String,
    pub login_modal: String,
    pub pet_tabs: String,
    pub pet_profiles: String,
    pub category_bar: String,
    pub product_grid: String,
    pub grooming_steps: String,
    pub grooming_tips: String,
    pub pet_photo: String,
    pub newsletter_form: String,
    pub daily_tip: String,
    pub toast: String,
}
