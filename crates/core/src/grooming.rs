//! Grooming walkthrough steps.

use serde::{Deserialize, Serialize};

use crate::types::StepNumber;

/// One step of the grooming walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroomingStep {
    pub number: StepNumber,
    pub title: String,
    pub description: String,
    pub tips: Vec<String>,
}

impl GroomingStep {
    pub fn new(
        number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        tips: &[&str],
    ) -> Self {
        Self {
            number: StepNumber::new(number),
            title: title.into(),
            description: description.into(),
            tips: tips.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
