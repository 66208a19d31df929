#![warn(clippy::pedantic)]

use chrono::{Local, Timelike};
use log::{debug, warn};
use rand::{Rng, seq::IndexedRandom};
use thiserror::Error;

use fitbod_domain::{Category, Intensity, Profile, catalog, catalog::Exercise, generate_plan};

const FALLBACK_PLAN_EXERCISES: usize = 2;

pub const QUOTES: [&str; 7] = [
    "Small steps every day lead to big changes.",
    "Listen to your body, it knows what it can do.",
    "Your pace is the best pace.",
    "Fitness is for everybody and every body.",
    "You showed up today, and that is a victory.",
    "Focus on what you CAN do.",
    "Believe in yourself and all that you are.",
];

/// Application state.
///
/// All session state lives here and is passed around explicitly. The plan is
/// cached until the profile is replaced or a new routine is requested.
#[derive(Debug, Default)]
pub struct AppState {
    profile: Option<Profile>,
    plan: Option<Vec<&'static Exercise>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Replace the profile wholesale and discard the current plan.
    pub fn submit_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.plan = None;
    }

    /// The current plan, generated on first access.
    pub fn current_plan(&mut self, rng: &mut impl Rng) -> &[&'static Exercise] {
        if self.plan.is_none() {
            self.plan = Some(self.generate(rng));
        }
        self.plan.as_deref().unwrap_or(&[])
    }

    /// Discard the current plan and generate a new one.
    pub fn regenerate_plan(&mut self, rng: &mut impl Rng) -> &[&'static Exercise] {
        self.plan = Some(self.generate(rng));
        self.plan.as_deref().unwrap_or(&[])
    }

    fn generate(&self, rng: &mut impl Rng) -> Vec<&'static Exercise> {
        let Some(profile) = &self.profile else {
            debug!("no profile submitted, using starter plan");
            return fallback_plan();
        };
        plan_or_fallback(generate_plan(catalog::all(), profile, rng))
    }
}

fn plan_or_fallback(plan: Vec<&'static Exercise>) -> Vec<&'static Exercise> {
    if plan.is_empty() {
        debug!("no tailored plan found, using starter plan");
        return fallback_plan();
    }
    plan
}

/// Gentle mobility starters shown when no tailored plan exists.
#[must_use]
pub fn fallback_plan() -> Vec<&'static Exercise> {
    catalog::all()
        .iter()
        .filter(|e| e.intensity == Intensity::Gentle || e.category == Category::Mobility)
        .take(FALLBACK_PLAN_EXERCISES)
        .collect()
}

/// A playable audio resource returned by a [`Narrator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    pub media_type: &'static str,
    pub data: Vec<u8>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NarrationError {
    #[error("narration unavailable")]
    Unavailable,
}

/// Text-to-speech boundary. Implementations must not block.
pub trait Narrator {
    fn narrate(&self, text: &str) -> Result<AudioClip, NarrationError>;
}

/// Best-effort spoken readout of an exercise. Failures degrade to `None`.
pub fn exercise_narration(narrator: &impl Narrator, exercise: &Exercise) -> Option<AudioClip> {
    let text = format!("{}. {}", exercise.title, exercise.instructions.join(" "));
    match narrator.narrate(&text) {
        Ok(clip) => Some(clip),
        Err(err) => {
            warn!("failed to narrate exercise {}: {err}", exercise.id);
            None
        }
    }
}

#[must_use]
pub fn greeting(name: &str) -> String {
    greeting_at(Local::now().hour(), name)
}

#[must_use]
pub fn greeting_at(hour: u32, name: &str) -> String {
    let message = if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    };
    if name.is_empty() {
        message.to_string()
    } else {
        format!("{message}, {name}!")
    }
}

#[must_use]
pub fn motivation(rng: &mut impl Rng) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
