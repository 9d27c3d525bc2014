//! Fixed seed content for the store.
//!
//! Every function here is pure: calling it twice yields equal values.

use crate::catalog::{Product, ProductCategory};
use crate::grooming::GroomingStep;
use crate::notifications::Notification;
use crate::pets::{ChecklistItem, PetGuide, PetKind};
use crate::types::{NotificationId, Price, ProductId};

const UNSPLASH_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}{UNSPLASH_PARAMS}")
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: ProductCategory,
    cents: u32,
    old_cents: Option<u32>,
    photo: &str,
    badge: Option<&str>,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category,
        price: Price::from_cents(cents),
        old_price: old_cents.map(Price::from_cents),
        image: unsplash(photo),
        badge: badge.map(str::to_string),
        description: description.to_string(),
    }
}

/// Shop products in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    use ProductCategory::{Food, Grooming, Health, Toys};

    vec![
        product(
            1,
            "Premium Dog Food",
            Food,
            4599,
            Some(5999),
            "photo-1568640347023-a616a30bc3bd",
            Some("BEST SELLER"),
            "High-protein, grain-free formula for adult dogs",
        ),
        product(
            2,
            "Interactive Cat Toy",
            Toys,
            1999,
            None,
            "photo-1592194996308-7b43878e84a6",
            None,
            "Keeps cats engaged and active for hours",
        ),
        product(
            3,
            "Professional Grooming Kit",
            Grooming,
            8999,
            Some(10999),
            "photo-1516734212186-a967f81ad0d7",
            Some("NEW"),
            "Complete grooming set for all pet types",
        ),
        product(
            4,
            "Joint Health Supplement",
            Health,
            2999,
            None,
            "photo-1589923186741-7d1d7c4e8c96",
            None,
            "Supports joint health and mobility",
        ),
        product(
            5,
            "Bird Feeding Station",
            Food,
            3499,
            None,
            "photo-1560743641-3914f2c45636",
            None,
            "Multi-level feeding station for birds",
        ),
        product(
            6,
            "Pet First Aid Kit",
            Health,
            3999,
            Some(4999),
            "photo-1579202673506-ca3ce28943ef",
            Some("ESSENTIAL"),
            "Emergency supplies for pet care",
        ),
        product(
            7,
            "Cat Scratching Post",
            Toys,
            4999,
            None,
            "photo-1514888286974-6d03bde4ba48",
            None,
            "Premium sisal scratching post",
        ),
        product(
            8,
            "Pet Shampoo & Conditioner",
            Grooming,
            2499,
            None,
            "photo-1556228453-efd6c1ff04f6",
            None,
            "Organic, tear-free shampoo for pets",
        ),
    ]
}

fn guide(
    kind: PetKind,
    title: &str,
    description: &str,
    checklist: &[(&str, &str)],
    photo: &str,
) -> PetGuide {
    PetGuide {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        checklist: checklist
            .iter()
            .map(|(t, d)| ChecklistItem::new(*t, *d))
            .collect(),
        image: unsplash(photo),
    }
}

/// Care guides, one per [`PetKind`], in tab order.
#[must_use]
pub fn pet_guides() -> Vec<PetGuide> {
    vec![
        guide(
            PetKind::Dogs,
            "Dog Care Guide",
            "Comprehensive care for man's best friend. From puppyhood to senior years.",
            &[
                ("Daily Exercise", "30-60 minutes of physical activity"),
                ("Nutrition", "High-quality protein diet with proper portions"),
                ("Grooming", "Weekly brushing, monthly bathing"),
                ("Training", "Consistent positive reinforcement"),
                (
                    "Socialization",
                    "Regular interaction with people and other dogs",
                ),
                ("Health Check-ups", "Annual vet visits and vaccinations"),
            ],
            "photo-1552053831-71594a27632d",
        ),
        guide(
            PetKind::Cats,
            "Cat Care Guide",
            "Everything you need to know about caring for your feline friend.",
            &[
                ("Litter Box", "Clean daily, provide one per cat plus extra"),
                ("Nutrition", "High-protein, low-carb diet"),
                ("Grooming", "Regular brushing to prevent hairballs"),
                ("Play Time", "15-30 minutes of interactive play daily"),
                ("Scratching Posts", "Provide appropriate scratching surfaces"),
                ("Veterinary Care", "Annual check-ups and vaccinations"),
            ],
            "photo-1514888286974-6d03bde4ba48",
        ),
        guide(
            PetKind::Birds,
            "Bird Care Guide",
            "Proper care for your feathered companions.",
            &[
                ("Cage Size", "Minimum 1.5x bird's wingspan in all directions"),
                ("Nutrition", "Varied diet of pellets, fruits, and vegetables"),
                ("Social Interaction", "Daily out-of-cage time and interaction"),
                ("Mental Stimulation", "Toys and foraging opportunities"),
                ("Grooming", "Regular nail and wing trimming as needed"),
                ("Veterinary Care", "Annual check-ups with avian vet"),
            ],
            "photo-1552728089-57bdde30beb3",
        ),
        guide(
            PetKind::SmallPets,
            "Small Pet Care Guide",
            "Care for rabbits, guinea pigs, hamsters, and other small pets.",
            &[
                ("Housing", "Spacious enclosure with hiding places"),
                (
                    "Nutrition",
                    "Species-specific diet with fresh hay/vegetables",
                ),
                ("Exercise", "Daily supervised out-of-cage time"),
                (
                    "Social Needs",
                    "Some species require same-species companions",
                ),
                ("Grooming", "Regular brushing and nail trimming"),
                ("Health Monitoring", "Regular weight checks and vet visits"),
            ],
            "photo-1559253664-ca249d4608c6",
        ),
    ]
}

/// Grooming walkthrough, steps 1 through 5.
#[must_use]
pub fn grooming_steps() -> Vec<GroomingStep> {
    vec![
        GroomingStep::new(
            1,
            "Brushing",
            "Regular brushing prevents mats and distributes natural oils.",
            &[
                "Brush in direction of hair growth",
                "Use proper brush for coat type",
                "Be gentle around sensitive areas",
            ],
        ),
        GroomingStep::new(
            2,
            "Bathing",
            "Use pet-safe shampoo and proper water temperature.",
            &[
                "Test water temperature first",
                "Use pet-specific shampoo",
                "Rinse thoroughly",
            ],
        ),
        GroomingStep::new(
            3,
            "Nail Trimming",
            "Trim carefully to avoid cutting the quick.",
            &[
                "Use sharp clippers",
                "Cut at 45-degree angle",
                "Stop if you see pink quick",
            ],
        ),
        GroomingStep::new(
            4,
            "Ear Cleaning",
            "Clean ears weekly to prevent infections.",
            &[
                "Use cotton balls, not swabs",
                "Use vet-approved solution",
                "Clean outer ear only",
            ],
        ),
        GroomingStep::new(
            5,
            "Dental Care",
            "Brush teeth regularly with pet toothpaste.",
            &[
                "Use pet toothpaste only",
                "Brush gently in circles",
                "Start slow with young pets",
            ],
        ),
    ]
}

fn notification(
    id: u32,
    title: &str,
    message: &str,
    time_label: &str,
    read: bool,
    icon: &str,
) -> Notification {
    Notification {
        id: NotificationId::new(id),
        title: title.to_string(),
        message: message.to_string(),
        time_label: time_label.to_string(),
        read,
        icon: icon.to_string(),
    }
}

/// Notification panel entries.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        notification(
            1,
            "Vaccination Reminder",
            "Max's rabies vaccine is due next week",
            "2 hours ago",
            false,
            "calendar-check",
        ),
        notification(
            2,
            "Order Shipped",
            "Your pet food order has been shipped",
            "5 hours ago",
            false,
            "shopping-cart",
        ),
        notification(
            3,
            "Training Session",
            "Your training session starts in 1 day",
            "1 day ago",
            true,
            "graduation-cap",
        ),
    ]
}

/// Tip-of-the-day pool.
#[must_use]
pub fn daily_tips() -> Vec<String> {
    [
        "Regular exercise keeps pets healthy and happy!",
        "Always provide fresh water for your pets daily.",
        "Regular grooming prevents matting and skin issues.",
        "Positive reinforcement works best for training.",
        "Annual vet check-ups are essential for pet health.",
        "Proper nutrition is key to a long, healthy life.",
        "Socialization helps prevent behavioral problems.",
        "Dental care is important for overall health.",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_seed_products_form_valid_catalog() {
        assert!(Catalog::new(products()).is_ok());
    }

    #[test]
    fn test_seed_is_idempotent() {
        assert_eq!(products(), products());
        assert_eq!(pet_guides(), pet_guides());
        assert_eq!(grooming_steps(), grooming_steps());
    }

    #[test]
    fn test_one_guide_per_kind() {
        let kinds: HashSet<PetKind> = pet_guides().iter().map(|g| g.kind).collect();
        assert_eq!(kinds.len(), PetKind::ALL.len());
    }

    #[test]
    fn test_grooming_steps_dense_and_ordered() {
        let numbers: Vec<u32> = grooming_steps().iter().map(|s| s.number.get()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_notification_ids_unique() {
        let ids: HashSet<NotificationId> = notifications().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), notifications().len());
    }
}
