//! View models.
//!
//! Pure projections of the store into exactly what the templates print.
//! Nothing here touches markup, so every render rule is testable on plain
//! data.

use petcare_core::{
    CategoryFilter, ChecklistItem, PetKind, Product, ProductCategory, StepSelector, Store, Theme,
};

use crate::theme::ChartPalette;
use crate::toast::Toast;

/// One product card in the shop grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: u32,
    pub name: String,
    /// Category label, upper-cased.
    pub category: String,
    pub price: String,
    pub old_price: Option<String>,
    pub image: String,
    pub badge: Option<String>,
    pub description: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u32(),
            name: product.name.clone(),
            category: product.category.key().to_uppercase(),
            price: product.price.display(),
            old_price: product.old_price.map(|p| p.display()),
            image: product.image.clone(),
            badge: product.badge.clone(),
            description: product.description.clone(),
        }
    }
}

/// Products passing `filter`, in catalog order.
#[must_use]
pub fn product_grid(store: &Store, filter: CategoryFilter) -> Vec<ProductCard> {
    store
        .catalog()
        .filtered(filter)
        .map(ProductCard::from)
        .collect()
}

/// A shop category button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// The category bar, `all` first, with the current filter active.
#[must_use]
pub fn category_bar(active: CategoryFilter) -> Vec<CategoryButton> {
    std::iter::once(CategoryFilter::All)
        .chain(ProductCategory::ALL.into_iter().map(CategoryFilter::Only))
        .map(|filter| CategoryButton {
            key: filter.key(),
            label: match filter {
                CategoryFilter::All => "All",
                CategoryFilter::Only(category) => category.label(),
            },
            active: filter == active,
        })
        .collect()
}

/// A pet guide tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetTab {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

/// One tab per guide, with the selected pet active.
#[must_use]
pub fn pet_tabs(store: &Store) -> Vec<PetTab> {
    store
        .pet_guides()
        .iter()
        .map(|guide| PetTab {
            key: guide.kind.key(),
            label: guide.kind.label(),
            icon: guide.kind.icon(),
            active: guide.kind == store.selected_pet(),
        })
        .collect()
}

/// A profile container; only the active one is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRegion {
    pub id: String,
    pub active: bool,
}

/// The care guide for one pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetProfileView {
    pub key: &'static str,
    pub title: String,
    pub description: String,
    pub checklist: Vec<ChecklistItem>,
    pub image: String,
    /// Every profile region, exactly one active.
    pub regions: Vec<ProfileRegion>,
}

/// Profile for the pet named by `key`.
///
/// Unknown keys and kinds without a guide give `None`, and the caller keeps
/// whatever profile was showing.
#[must_use]
pub fn pet_profile(store: &Store, key: &str) -> Option<PetProfileView> {
    let kind: PetKind = key.parse().ok()?;
    let guide = store.pet_guide(kind)?;
    Some(PetProfileView {
        key: kind.key(),
        title: guide.title.clone(),
        description: guide.description.clone(),
        checklist: guide.checklist.clone(),
        image: guide.image.clone(),
        regions: store
            .pet_guides()
            .iter()
            .map(|g| ProfileRegion {
                id: g.kind.profile_region(),
                active: g.kind == kind,
            })
            .collect(),
    })
}

/// One row of the grooming walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub active: bool,
}

/// All steps ascending, the active one flagged.
#[must_use]
pub fn grooming_steps(store: &Store) -> Vec<StepView> {
    let active = store.active_step();
    store
        .grooming_steps()
        .iter()
        .map(|step| StepView {
            number: step.number.get(),
            title: step.title.clone(),
            description: step.description.clone(),
            active: step.number == active,
        })
        .collect()
}

/// Tips for one grooming step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTipsView {
    pub number: u32,
    pub title: String,
    pub tips: Vec<String>,
}

/// Tips for the step addressed by `selector` (`3` and `"3"` alike).
#[must_use]
pub fn grooming_step_detail(store: &Store, selector: &StepSelector) -> Option<StepTipsView> {
    store.grooming_step(selector).map(|step| StepTipsView {
        number: step.number.get(),
        title: step.title.clone(),
        tips: step.tips.clone(),
    })
}

/// The unread counter on the bell icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub count: usize,
}

impl Badge {
    /// Hidden when there is nothing unread.
    #[must_use]
    pub const fn visible(self) -> bool {
        self.count > 0
    }
}

#[must_use]
pub fn notification_badge(store: &Store) -> Badge {
    Badge {
        count: store.unread_count(),
    }
}

/// One entry in the notification panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub title: String,
    pub message: String,
    pub time_label: String,
    pub icon: String,
    pub unread: bool,
}

/// The notification panel contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPanel {
    pub open: bool,
    pub items: Vec<NotificationView>,
    pub badge: Badge,
}

fn notification_items(store: &Store) -> Vec<NotificationView> {
    store
        .notifications()
        .iter()
        .map(|n| NotificationView {
            title: n.title.clone(),
            message: n.message.clone(),
            time_label: n.time_label.clone(),
            icon: n.icon.clone(),
            unread: !n.read,
        })
        .collect()
}

/// The panel as it sits closed, read state untouched.
#[must_use]
pub fn closed_notification_panel(store: &Store) -> NotificationPanel {
    NotificationPanel {
        open: false,
        items: notification_items(store),
        badge: notification_badge(store),
    }
}

/// Render the list, then mark everything read.
///
/// Entries show the unread flag they had when the panel opened; the
/// returned badge is recomputed after the transition and is therefore zero.
pub fn notification_list(store: &mut Store) -> NotificationPanel {
    let items = notification_items(store);
    let flipped = store.mark_all_notifications_read();
    tracing::debug!(flipped, "Notifications marked read");

    NotificationPanel {
        open: true,
        items,
        badge: notification_badge(store),
    }
}

/// Current toast as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: u64,
    pub message: String,
    pub kind: &'static str,
    pub icon: &'static str,
    pub phase: &'static str,
}

impl From<&Toast> for ToastView {
    fn from(toast: &Toast) -> Self {
        Self {
            id: toast.id.get(),
            message: toast.message.clone(),
            kind: toast.kind.as_str(),
            icon: toast.kind.icon(),
            phase: toast.phase.css_class(),
        }
    }
}

/// Theme switch state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeView {
    pub theme: &'static str,
    /// Icon for the toggle button: a moon in light mode, a sun in dark.
    pub toggle_icon: &'static str,
    pub palette_json: String,
}

#[must_use]
pub fn theme_view(theme: Theme) -> ThemeView {
    ThemeView {
        theme: theme.as_str(),
        toggle_icon: match theme {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        },
        palette_json: ChartPalette::for_theme(theme).to_json(),
    }
}

/// Default picture shown until the user uploads one.
pub const DEFAULT_PET_PHOTO: &str = "/static/img/pet-placeholder.svg";

/// The user's pet photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetPhotoView {
    pub src: String,
    pub uploaded: bool,
}

#[must_use]
pub fn pet_photo(saved: Option<String>) -> PetPhotoView {
    match saved {
        Some(src) => PetPhotoView {
            src,
            uploaded: true,
        },
        None => PetPhotoView {
            src: DEFAULT_PET_PHOTO.to_string(),
            uploaded: false,
        },
    }
}

/// Which form the login modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    Login,
    Signup,
}

/// Login modal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoginModalView {
    pub open: bool,
    pub mode: LoginMode,
}

impl LoginModalView {
    #[must_use]
    pub fn login_active(self) -> bool {
        self.mode == LoginMode::Login
    }

    #[must_use]
    pub fn signup_active(self) -> bool {
        self.mode == LoginMode::Signup
    }
}

/// A page section as measured by the browser.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Navigation chrome: highlighted link, back-to-top button and mobile menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationView {
    pub active_section: Option<String>,
    pub back_to_top: bool,
    pub menu_open: bool,
}

/// Offset past which the back-to-top button shows.
const BACK_TO_TOP_OFFSET: f64 = 300.0;
/// Lead applied to the offset when picking the active section.
const SECTION_LEAD: f64 = 100.0;

impl NavigationView {
    /// Page-load state: first link highlighted, everything else closed.
    #[must_use]
    pub fn at_top() -> Self {
        Self {
            active_section: Some(NAV_SECTIONS[0].0.to_string()),
            ..Self::default()
        }
    }

    /// Take the highlight and back-to-top state from a scroll report,
    /// leaving the mobile menu as it was.
    pub fn apply_scroll(&mut self, scrolled: Self) {
        self.active_section = scrolled.active_section;
        self.back_to_top = scrolled.back_to_top;
    }

    /// Whether `section` is the highlighted nav link.
    #[must_use]
    pub fn is_active(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }
}

/// Back-to-top visibility and the section containing `offset + 100`.
///
/// When sections overlap the last match wins.
#[must_use]
pub fn navigation(offset: f64, sections: &[SectionBounds]) -> NavigationView {
    let marker = offset + SECTION_LEAD;
    NavigationView {
        active_section: sections
            .iter()
            .rev()
            .find(|s| marker >= s.top && marker < s.top + s.height)
            .map(|s| s.id.clone()),
        back_to_top: offset > BACK_TO_TOP_OFFSET,
        menu_open: false,
    }
}

/// State after following the nav link for `section`.
///
/// The link is highlighted and the mobile menu closes. Anything but the first
/// section sits below the back-to-top threshold. Unknown sections give `None`.
#[must_use]
pub fn jump_to_section(section: &str) -> Option<NavigationView> {
    let (id, _) = NAV_SECTIONS.iter().find(|(id, _)| *id == section.trim())?;
    Some(NavigationView {
        active_section: Some((*id).to_string()),
        back_to_top: *id != NAV_SECTIONS[0].0,
        menu_open: false,
    })
}

/// Nav links in page order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("pet-care", "Pet Care"),
    ("shop", "Shop"),
    ("contact", "Contact"),
];
