#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

use std::{collections::BTreeSet, slice::Iter};

use derive_more::{AsRef, Display, Into};
use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Exercise;

pub const MAX_PLAN_EXERCISES: usize = 3;

const SUPPORT_MATCH_SCORE: i32 = 2;
const GOAL_MATCH_SCORE: i32 = 1;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(AsRef, Debug, Display, Into, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Accessibility and mobility needs a user may declare.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Support {
    WheelchairUser,
    LimitedUpperBodyMobility,
    LimitedLowerBodyMobility,
    LimitedGripStrength,
    BalanceIssues,
    ChronicPainFatigue,
    VisualImpairment,
    Neurodivergent,
    PostInjuryRecovery,
    BedBound,
}

impl Property for Support {
    fn iter() -> Iter<'static, Support> {
        static SUPPORTS: [Support; 10] = [
            Support::WheelchairUser,
            Support::LimitedUpperBodyMobility,
            Support::LimitedLowerBodyMobility,
            Support::LimitedGripStrength,
            Support::BalanceIssues,
            Support::ChronicPainFatigue,
            Support::VisualImpairment,
            Support::Neurodivergent,
            Support::PostInjuryRecovery,
            Support::BedBound,
        ];
        SUPPORTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Support::WheelchairUser => "Wheelchair User",
            Support::LimitedUpperBodyMobility => "Limited Upper-Body Mobility",
            Support::LimitedLowerBodyMobility => "Limited Lower-Body Mobility",
            Support::LimitedGripStrength => "Limited Grip Strength",
            Support::BalanceIssues => "Balance Issues / Vertigo",
            Support::ChronicPainFatigue => "Chronic Pain / Fatigue",
            Support::VisualImpairment => "Visual Impairment",
            Support::Neurodivergent => "Neurodivergent",
            Support::PostInjuryRecovery => "Post-Injury Recovery",
            Support::BedBound => "Bed-Bound / Bed Rest",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Equipment {
    ResistanceBands,
    LightWeights,
    Chair,
    YogaMat,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 4] = [
            Equipment::ResistanceBands,
            Equipment::LightWeights,
            Equipment::Chair,
            Equipment::YogaMat,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::LightWeights => "Light Weights",
            Equipment::Chair => "Chair",
            Equipment::YogaMat => "Yoga Mat",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Goal {
    Strength,
    #[default]
    Mobility,
    Balance,
    Cardio,
    WeightManagement,
    MentalWellbeing,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 6] = [
            Goal::Strength,
            Goal::Mobility,
            Goal::Balance,
            Goal::Cardio,
            Goal::WeightManagement,
            Goal::MentalWellbeing,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Mobility => "Mobility & Flexibility",
            Goal::Balance => "Balance & Stability",
            Goal::Cardio => "Cardiovascular Health",
            Goal::WeightManagement => "Weight Management",
            Goal::MentalWellbeing => "Mental Wellbeing",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Intensity {
    Gentle,
    Moderate,
    Energetic,
}

impl Property for Intensity {
    fn iter() -> Iter<'static, Intensity> {
        static INTENSITIES: [Intensity; 3] =
            [Intensity::Gentle, Intensity::Moderate, Intensity::Energetic];
        INTENSITIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Intensity::Gentle => "Gentle",
            Intensity::Moderate => "Moderate",
            Intensity::Energetic => "Energetic",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Category {
    SeatedStrength,
    WheelchairCardio,
    UpperBody,
    LowerBody,
    Mobility,
    Relaxation,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 6] = [
            Category::SeatedStrength,
            Category::WheelchairCardio,
            Category::UpperBody,
            Category::LowerBody,
            Category::Mobility,
            Category::Relaxation,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::SeatedStrength => "Seated Strength",
            Category::WheelchairCardio => "Cardio for Wheelchair Users",
            Category::UpperBody => "Upper Body Only",
            Category::LowerBody => "Lower Body Only",
            Category::Mobility => "Mobility & Stretch",
            Category::Relaxation => "Rest & Relaxation",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum AgeGroup {
    Under18,
    Age18To24,
    #[default]
    Age25To34,
    Age35To44,
    Age45To54,
    Age55To64,
    Over65,
}

impl Property for AgeGroup {
    fn iter() -> Iter<'static, AgeGroup> {
        static AGE_GROUPS: [AgeGroup; 7] = [
            AgeGroup::Under18,
            AgeGroup::Age18To24,
            AgeGroup::Age25To34,
            AgeGroup::Age35To44,
            AgeGroup::Age45To54,
            AgeGroup::Age55To64,
            AgeGroup::Over65,
        ];
        AGE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            AgeGroup::Under18 => "Under 18",
            AgeGroup::Age18To24 => "18-24",
            AgeGroup::Age25To34 => "25-34",
            AgeGroup::Age35To44 => "35-44",
            AgeGroup::Age45To54 => "45-54",
            AgeGroup::Age55To64 => "55-64",
            AgeGroup::Over65 => "65+",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Diet {
    #[default]
    NoPreference,
    Vegetarian,
    Vegan,
    GlutenFree,
    HighProtein,
}

impl Property for Diet {
    fn iter() -> Iter<'static, Diet> {
        static DIETS: [Diet; 5] = [
            Diet::NoPreference,
            Diet::Vegetarian,
            Diet::Vegan,
            Diet::GlutenFree,
            Diet::HighProtein,
        ];
        DIETS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Diet::NoPreference => "No Preference",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::GlutenFree => "Gluten-Free",
            Diet::HighProtein => "High Protein",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CoachingStyle {
    #[default]
    Gentle,
    Direct,
    Energetic,
}

impl Property for CoachingStyle {
    fn iter() -> Iter<'static, CoachingStyle> {
        static STYLES: [CoachingStyle; 3] = [
            CoachingStyle::Gentle,
            CoachingStyle::Direct,
            CoachingStyle::Energetic,
        ];
        STYLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            CoachingStyle::Gentle => "Gentle",
            CoachingStyle::Direct => "Direct",
            CoachingStyle::Energetic => "Energetic",
        }
    }
}

/// A user's declared needs, owned equipment and objective.
///
/// Replaced wholesale on profile edit. Missing optional fields deserialize to
/// empty sets and defaults. An empty `equipment` set means bodyweight only.
/// `age_group`, `diet` and `coaching_style` are carried for display and
/// never consumed by plan generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Name,
    #[serde(default)]
    pub age_group: AgeGroup,
    #[serde(default)]
    pub supports: BTreeSet<Support>,
    #[serde(default)]
    pub equipment: BTreeSet<Equipment>,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub diet: Diet,
    #[serde(default)]
    pub coaching_style: CoachingStyle,
}

/// Select up to [`MAX_PLAN_EXERCISES`] exercises tailored to the profile.
///
/// Exercises are evaluated independently: severe-constraint exclusions are
/// applied first, then the equipment gate (an exercise whose required
/// equipment the user does not own is never selected, regardless of how well
/// it matches otherwise), then a relevance score over declared needs and the
/// goal. From the positively scored candidates a uniform sample without
/// replacement is drawn using the given random source. An empty result is a
/// valid outcome and must be handled by the caller.
#[must_use]
pub fn generate_plan<'a, R: Rng>(
    exercises: &'a [Exercise],
    profile: &Profile,
    rng: &mut R,
) -> Vec<&'a Exercise> {
    let candidates = exercises
        .iter()
        .filter(|e| passes_severe_constraints(e, &profile.supports))
        .filter(|e| has_required_equipment(e, &profile.equipment))
        .filter(|e| relevance(e, profile) > 0)
        .collect::<Vec<_>>();

    if candidates.len() <= MAX_PLAN_EXERCISES {
        return candidates;
    }

    candidates
        .choose_multiple(rng, MAX_PLAN_EXERCISES)
        .copied()
        .collect()
}

fn passes_severe_constraints(exercise: &Exercise, supports: &BTreeSet<Support>) -> bool {
    if supports.contains(&Support::BedBound) && !exercise.suitability.contains(&Support::BedBound) {
        return false;
    }
    if supports.contains(&Support::WheelchairUser)
        && !exercise.suitability.contains(&Support::WheelchairUser)
        && exercise.category != Category::UpperBody
    {
        return false;
    }
    true
}

fn has_required_equipment(exercise: &Exercise, owned: &BTreeSet<Equipment>) -> bool {
    exercise.equipment.iter().all(|e| owned.contains(e))
}

fn relevance(exercise: &Exercise, profile: &Profile) -> i32 {
    let mut score = 0;
    if exercise
        .suitability
        .iter()
        .any(|s| profile.supports.contains(s))
    {
        score += SUPPORT_MATCH_SCORE;
    }
    if exercise.goals.contains(&profile.goal) {
        score += GOAL_MATCH_SCORE;
    }
    score
}
