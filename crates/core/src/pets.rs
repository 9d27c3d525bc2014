//! Pet-care guides shown in the tabbed guide section.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kinds of pet with a care guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PetKind {
    #[default]
    Dogs,
    Cats,
    Birds,
    SmallPets,
}

impl PetKind {
    /// All kinds in tab order.
    pub const ALL: [Self; 4] = [Self::Dogs, Self::Cats, Self::Birds, Self::SmallPets];

    /// Key used in `data-pet` attributes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dogs => "dogs",
            Self::Cats => "cats",
            Self::Birds => "birds",
            Self::SmallPets => "small-pets",
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dogs => "Dogs",
            Self::Cats => "Cats",
            Self::Birds => "Birds",
            Self::SmallPets => "Small Pets",
        }
    }

    /// Font Awesome icon for the tab.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dogs => "dog",
            Self::Cats => "cat",
            Self::Birds => "dove",
            Self::SmallPets => "paw",
        }
    }

    /// Id of the profile region this kind renders into.
    #[must_use]
    pub fn profile_region(self) -> String {
        format!("{}Profile", self.key())
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned for an unrecognised pet key.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pet kind: {0}")]
pub struct UnknownPet(pub String);

impl FromStr for PetKind {
    type Err = UnknownPet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| UnknownPet(s.to_string()))
    }
}

/// One line of a care checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub title: String,
    pub description: String,
}

impl ChecklistItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Care guide for one kind of pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetGuide {
    pub kind: PetKind,
    pub title: String,
    pub description: String,
    pub checklist: Vec<ChecklistItem>,
    pub image: String,
}
