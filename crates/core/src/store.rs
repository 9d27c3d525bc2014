//! The state store.
//!
//! `Store` owns every domain collection plus the selection pointers. Fields
//! are private: readers go through accessors, and the only mutations are the
//! methods below, each of which keeps the store's invariants:
//!
//! - exactly one selected pet guide, always present in the guide set
//! - exactly one active grooming step, always present in the step list
//! - notification `read` flags only ever go from `false` to `true`
//! - the theme is always a valid [`Theme`]

use crate::catalog::{Catalog, CatalogError, CategoryFilter, Product};
use crate::grooming::GroomingStep;
use crate::notifications::{self, Notification};
use crate::pets::{PetGuide, PetKind};
use crate::seed;
use crate::types::{ProductId, StepNumber, StepSelector, Theme};

/// Errors detected while assembling a store from custom content.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The default pet guide is missing.
    #[error("no guide for the default pet kind ({0})")]
    MissingDefaultGuide(PetKind),
    /// Grooming steps are not numbered 1..N in order.
    #[error("grooming steps must be numbered 1..N in order (found {found} at position {position})")]
    StepsNotDense { position: usize, found: StepNumber },
    /// There are no grooming steps, so none can be active.
    #[error("at least one grooming step is required")]
    NoSteps,
}

/// Raw content a store is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContent {
    pub products: Vec<Product>,
    pub pet_guides: Vec<PetGuide>,
    pub grooming_steps: Vec<GroomingStep>,
    pub notifications: Vec<Notification>,
    pub daily_tips: Vec<String>,
}

impl StoreContent {
    /// The fixed seed content.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
            pet_guides: seed::pet_guides(),
            grooming_steps: seed::grooming_steps(),
            notifications: seed::notifications(),
            daily_tips: seed::daily_tips(),
        }
    }
}

/// In-memory application state.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Catalog,
    pet_guides: Vec<PetGuide>,
    grooming_steps: Vec<GroomingStep>,
    notifications: Vec<Notification>,
    daily_tips: Vec<String>,
    theme: Theme,
    selected_pet: PetKind,
    active_step: StepNumber,
    product_filter: CategoryFilter,
}

impl Store {
    /// Build a store from custom content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the catalog is invalid, the default pet guide
    /// is missing, or the grooming steps are not a dense `1..N` sequence.
    pub fn new(content: StoreContent) -> Result<Self, StoreError> {
        let StoreContent {
            products,
            pet_guides,
            grooming_steps,
            notifications,
            daily_tips,
        } = content;
        let catalog = Catalog::new(products)?;

        if !pet_guides
            .iter()
            .any(|g| g.kind == PetKind::default())
        {
            return Err(StoreError::MissingDefaultGuide(PetKind::default()));
        }

        if grooming_steps.is_empty() {
            return Err(StoreError::NoSteps);
        }
        for (position, step) in grooming_steps.iter().enumerate() {
            let expected = u32::try_from(position + 1).unwrap_or(u32::MAX);
            if step.number.get() != expected {
                return Err(StoreError::StepsNotDense {
                    position,
                    found: step.number,
                });
            }
        }

        Ok(Self::assemble(
            catalog,
            pet_guides,
            grooming_steps,
            notifications,
            daily_tips,
        ))
    }

    /// Store populated from the fixed seed content.
    #[must_use]
    pub fn seeded() -> Self {
        let StoreContent {
            products,
            pet_guides,
            grooming_steps,
            notifications,
            daily_tips,
        } = StoreContent::seed();
        Self::assemble(
            Catalog::from_trusted(products),
            pet_guides,
            grooming_steps,
            notifications,
            daily_tips,
        )
    }

    fn assemble(
        catalog: Catalog,
        pet_guides: Vec<PetGuide>,
        grooming_steps: Vec<GroomingStep>,
        notifications: Vec<Notification>,
        daily_tips: Vec<String>,
    ) -> Self {
        Self {
            catalog,
            pet_guides,
            grooming_steps,
            notifications,
            daily_tips,
            theme: Theme::default(),
            selected_pet: PetKind::default(),
            active_step: StepNumber::FIRST,
            product_filter: CategoryFilter::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn selected_pet(&self) -> PetKind {
        self.selected_pet
    }

    #[must_use]
    pub const fn active_step(&self) -> StepNumber {
        self.active_step
    }

    #[must_use]
    pub const fn product_filter(&self) -> CategoryFilter {
        self.product_filter
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    #[must_use]
    pub fn pet_guides(&self) -> &[PetGuide] {
        &self.pet_guides
    }

    #[must_use]
    pub fn pet_guide(&self, kind: PetKind) -> Option<&PetGuide> {
        self.pet_guides.iter().find(|g| g.kind == kind)
    }

    /// Guide for the currently selected pet.
    #[must_use]
    pub fn selected_guide(&self) -> Option<&PetGuide> {
        self.pet_guide(self.selected_pet)
    }

    #[must_use]
    pub fn grooming_steps(&self) -> &[GroomingStep] {
        &self.grooming_steps
    }

    /// Look up a step, accepting either its number or its string spelling.
    ///
    /// Selectors that do not normalize to a step number are misses.
    #[must_use]
    pub fn grooming_step(&self, selector: &StepSelector) -> Option<&GroomingStep> {
        let number: StepNumber = selector.resolve()?;
        self.grooming_steps.iter().find(|s| s.number == number)
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        notifications::unread_count(&self.notifications)
    }

    #[must_use]
    pub fn daily_tips(&self) -> &[String] {
        &self.daily_tips
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    pub const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Point the guide selection at `kind`. Kinds without a guide are ignored.
    pub fn select_pet(&mut self, kind: PetKind) -> Option<&PetGuide> {
        let index = self.pet_guides.iter().position(|g| g.kind == kind)?;
        self.selected_pet = kind;
        self.pet_guides.get(index)
    }

    pub const fn set_product_filter(&mut self, filter: CategoryFilter) {
        self.product_filter = filter;
    }

    /// Activate the step addressed by `selector`. Misses leave the pointer alone.
    pub fn select_step(&mut self, selector: &StepSelector) -> Option<&GroomingStep> {
        let number: StepNumber = selector.resolve()?;
        let index = self.grooming_steps.iter().position(|s| s.number == number)?;
        self.active_step = number;
        self.grooming_steps.get(index)
    }

    /// Mark every notification read. Returns how many flipped.
    pub fn mark_all_notifications_read(&mut self) -> usize {
        let mut flipped = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            flipped += 1;
        }
        flipped
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::ProductCategory;

    #[test]
    fn test_seeded_defaults() {
        let store = Store::seeded();
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.selected_pet(), PetKind::Dogs);
        assert_eq!(store.active_step(), StepNumber::FIRST);
        assert_eq!(store.product_filter(), CategoryFilter::All);
        assert_eq!(store.catalog().len(), 8);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_new_accepts_seed_content() {
        let store = Store::new(StoreContent::seed()).unwrap();
        assert_eq!(store.grooming_steps().len(), 5);
    }

    #[test]
    fn test_new_keeps_custom_content() {
        let mut content = StoreContent::seed();
        content.products.truncate(2);
        content.daily_tips = vec!["Brush daily".to_string()];
        content.notifications.clear();

        let store = Store::new(content).unwrap();
        assert_eq!(store.catalog().len(), 2);
        assert_eq!(store.daily_tips(), ["Brush daily".to_string()]);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.pet_guides().len(), 4);
        assert_eq!(store.selected_pet(), PetKind::Dogs);
    }

    #[test]
    fn test_new_rejects_duplicate_product_ids() {
        let mut content = StoreContent::seed();
        let first = content.products.first().unwrap().clone();
        content.products.push(first);
        assert!(matches!(Store::new(content), Err(StoreError::Catalog(_))));
    }

    #[test]
    fn test_new_rejects_sparse_steps() {
        let mut content = StoreContent::seed();
        content.grooming_steps.remove(1);
        assert!(matches!(
            Store::new(content),
            Err(StoreError::StepsNotDense { position: 1, .. })
        ));
    }

    #[test]
    fn test_new_rejects_missing_default_guide() {
        let mut content = StoreContent::seed();
        content.pet_guides.retain(|g| g.kind != PetKind::Dogs);
        assert_eq!(
            Store::new(content).unwrap_err(),
            StoreError::MissingDefaultGuide(PetKind::Dogs)
        );
    }

    #[test]
    fn test_select_step_loose_lookup() {
        let mut store = Store::seeded();
        store.select_step(&StepSelector::from(3)).unwrap();
        let by_number = store.active_step();
        store.select_step(&StepSelector::from("3")).unwrap();
        assert_eq!(store.active_step(), by_number);
        assert_eq!(by_number, StepNumber::new(3));
    }

    #[test]
    fn test_select_step_miss_keeps_pointer() {
        let mut store = Store::seeded();
        store.select_step(&StepSelector::from(2));
        assert!(store.select_step(&StepSelector::from(42)).is_none());
        assert!(store.select_step(&StepSelector::from("nope")).is_none());
        assert_eq!(store.active_step(), StepNumber::new(2));
    }

    #[test]
    fn test_select_pet_miss_keeps_pointer() {
        let mut content = StoreContent::seed();
        content.pet_guides.retain(|g| g.kind != PetKind::Birds);
        let mut store = Store::new(content).unwrap();
        store.select_pet(PetKind::Cats);
        assert!(store.select_pet(PetKind::Birds).is_none());
        assert_eq!(store.selected_pet(), PetKind::Cats);
    }

    #[test]
    fn test_mark_all_read_is_idempotent() {
        let mut store = Store::seeded();
        assert_eq!(store.mark_all_notifications_read(), 2);
        assert_eq!(store.mark_all_notifications_read(), 0);
        assert_eq!(store.unread_count(), 0);
        assert!(store.notifications().iter().all(|n| n.read));
    }

    #[test]
    fn test_product_filter_pointer() {
        let mut store = Store::seeded();
        store.set_product_filter(CategoryFilter::Only(ProductCategory::Toys));
        let names: Vec<&str> = store
            .catalog()
            .filtered(store.product_filter())
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Interactive Cat Toy", "Cat Scratching Post"]);
    }
}
