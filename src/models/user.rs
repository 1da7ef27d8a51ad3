//! User profile model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Fitness goal chosen on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FitnessGoal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    #[serde(rename = "Maintenance")]
    Maintenance,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    #[serde(rename = "General Fitness")]
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals, in dropdown order.
    pub const ALL: [FitnessGoal; 4] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::Maintenance,
        FitnessGoal::MuscleGain,
        FitnessGoal::GeneralFitness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::Maintenance => "Maintenance",
            FitnessGoal::MuscleGain => "Muscle Gain",
            FitnessGoal::GeneralFitness => "General Fitness",
        }
    }
}

/// User profile. Weight and height are display strings (kg / cm).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub weight: String,
    pub height: String,
    pub goal: FitnessGoal,
    /// Date of birth (`YYYY-MM-DD`)
    pub date_of_birth: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            weight: "70".to_string(),
            height: "175".to_string(),
            goal: FitnessGoal::Maintenance,
            date_of_birth: "1995-01-01".to_string(),
        }
    }
}
