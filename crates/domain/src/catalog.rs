use std::collections::BTreeMap;

use serde::Serialize;

use crate::{Category, Equipment, Goal, Intensity, Support};

/// A fixed exercise definition.
///
/// Records are immutable and defined at compile time. `instructions` is an
/// ordered sequence of steps. `equipment` lists everything required to
/// perform the exercise; an empty slice means no equipment is needed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub intensity: Intensity,
    pub suitability: &'static [Support],
    pub equipment: &'static [Equipment],
    pub goals: &'static [Goal],
    pub instructions: &'static [&'static str],
    pub safety_note: &'static str,
    pub calories: u32,
    pub duration_minutes: u32,
}

static EXERCISES_BY_ID: std::sync::LazyLock<BTreeMap<&'static str, &'static Exercise>> =
    std::sync::LazyLock::new(|| EXERCISES.iter().map(|e| (e.id, e)).collect());

// Sorted by id.
static EXERCISES: [Exercise; 12] = [
    Exercise {
        id: "band_pull_apart",
        title: "Resistance Band Pull-Aparts",
        category: Category::UpperBody,
        intensity: Intensity::Moderate,
        suitability: &[Support::WheelchairUser],
        equipment: &[Equipment::ResistanceBands],
        goals: &[Goal::Strength],
        instructions: &[
            "Hold a resistance band with both hands in front of you at shoulder height.",
            "Keep arms straight and pull the band apart by squeezing your shoulder blades together.",
            "Return to center with control.",
        ],
        safety_note: "Don't shrug your shoulders. Keep your neck relaxed.",
        calories: 45,
        duration_minutes: 5,
    },
    Exercise {
        id: "bed_ankle_pumps",
        title: "Ankle Pumps",
        category: Category::Mobility,
        intensity: Intensity::Gentle,
        suitability: &[Support::BedBound, Support::PostInjuryRecovery],
        equipment: &[],
        goals: &[Goal::Mobility],
        instructions: &[
            "Lie on your back with legs extended.",
            "Point your toes away from you, then flex them back towards your shins.",
            "Repeat in a slow, steady rhythm.",
        ],
        safety_note: "Keep movements small and pain-free. Stop if you feel cramping.",
        calories: 15,
        duration_minutes: 5,
    },
    Exercise {
        id: "bed_arm_raises",
        title: "Lying Arm Raises",
        category: Category::UpperBody,
        intensity: Intensity::Gentle,
        suitability: &[Support::BedBound, Support::LimitedLowerBodyMobility],
        equipment: &[],
        goals: &[Goal::Mobility, Goal::Strength],
        instructions: &[
            "Lie on your back with arms at your sides.",
            "Raise one arm up and over your head until it rests on the surface behind you.",
            "Lower it back down and repeat with the other arm.",
        ],
        safety_note: "Move within a comfortable range. Do not force the stretch.",
        calories: 20,
        duration_minutes: 5,
    },
    Exercise {
        id: "breathing_reset",
        title: "Box Breathing",
        category: Category::Relaxation,
        intensity: Intensity::Gentle,
        suitability: &[
            Support::Neurodivergent,
            Support::ChronicPainFatigue,
            Support::BedBound,
        ],
        equipment: &[],
        goals: &[Goal::MentalWellbeing],
        instructions: &[
            "Sit or lie comfortably and close your eyes if you like.",
            "Inhale through your nose for a count of four.",
            "Hold for four, exhale for four, hold for four.",
            "Repeat for several rounds.",
        ],
        safety_note: "Breathe at your own pace. Stop if you feel lightheaded.",
        calories: 5,
        duration_minutes: 4,
    },
    Exercise {
        id: "chair_squats",
        title: "Sit-to-Stand",
        category: Category::LowerBody,
        intensity: Intensity::Energetic,
        suitability: &[Support::LimitedUpperBodyMobility],
        equipment: &[Equipment::Chair],
        goals: &[Goal::Strength, Goal::Balance],
        instructions: &[
            "Sit on the edge of a sturdy chair.",
            "Lean slightly forward and stand up using your legs.",
            "Slowly lower yourself back down to the seat.",
            "Repeat.",
        ],
        safety_note: "Ensure the chair will not slide backwards.",
        calories: 70,
        duration_minutes: 8,
    },
    Exercise {
        id: "mat_cat_cow",
        title: "Cat-Cow Stretch",
        category: Category::Mobility,
        intensity: Intensity::Gentle,
        suitability: &[Support::ChronicPainFatigue, Support::PostInjuryRecovery],
        equipment: &[Equipment::YogaMat],
        goals: &[Goal::Mobility],
        instructions: &[
            "Start on hands and knees on your mat.",
            "Arch your back up towards the ceiling while tucking your chin.",
            "Then let your belly sink while lifting your head and tailbone.",
            "Alternate slowly with your breath.",
        ],
        safety_note: "Keep the movement slow and smooth. Avoid if kneeling is painful.",
        calories: 20,
        duration_minutes: 5,
    },
    Exercise {
        id: "neck_stretches",
        title: "Gentle Neck Release",
        category: Category::Mobility,
        intensity: Intensity::Gentle,
        suitability: &[Support::VisualImpairment, Support::Neurodivergent],
        equipment: &[],
        goals: &[Goal::Mobility],
        instructions: &[
            "Sit or stand comfortably.",
            "Slowly tilt your right ear towards your right shoulder.",
            "Hold for 10 seconds. Breathe deeply.",
            "Return to center and repeat on the left side.",
        ],
        safety_note: "Move slowly. Do not force your head down.",
        calories: 10,
        duration_minutes: 3,
    },
    Exercise {
        id: "seated_march",
        title: "Seated High Knees",
        category: Category::WheelchairCardio,
        intensity: Intensity::Energetic,
        suitability: &[Support::WheelchairUser, Support::LimitedLowerBodyMobility],
        equipment: &[],
        goals: &[Goal::Cardio, Goal::WeightManagement],
        instructions: &[
            "Sit tall in your chair.",
            "Lift one knee as high as comfortable, then lower it.",
            "Lift the other knee.",
            "Repeat in a rhythmic marching motion. Pump your arms for extra intensity.",
        ],
        safety_note: "Ensure your chair is stable and brakes are on.",
        calories: 60,
        duration_minutes: 10,
    },
    Exercise {
        id: "seated_shoulder_press",
        title: "Seated Shoulder Press",
        category: Category::SeatedStrength,
        intensity: Intensity::Moderate,
        suitability: &[Support::WheelchairUser, Support::LimitedLowerBodyMobility],
        equipment: &[Equipment::LightWeights],
        goals: &[Goal::Strength],
        instructions: &[
            "Sit upright with your back supported.",
            "Hold the weights at shoulder height, elbows bent.",
            "Push your hands up towards the ceiling until arms are fully extended.",
            "Slowly lower back to the starting position.",
        ],
        safety_note: "Keep your core engaged to protect your lower back. Stop if you feel sharp pain.",
        calories: 40,
        duration_minutes: 5,
    },
    Exercise {
        id: "standing_march",
        title: "Standing March",
        category: Category::LowerBody,
        intensity: Intensity::Energetic,
        suitability: &[],
        equipment: &[],
        goals: &[Goal::Cardio, Goal::Balance, Goal::WeightManagement],
        instructions: &[
            "Stand tall with feet hip-width apart.",
            "Lift one knee towards your hip, then lower it.",
            "Alternate legs in a steady marching rhythm.",
            "Swing your arms to raise the intensity.",
        ],
        safety_note: "March near a wall or counter you can hold for support.",
        calories: 65,
        duration_minutes: 10,
    },
    Exercise {
        id: "towel_grip_squeeze",
        title: "Towel Grip Squeeze",
        category: Category::SeatedStrength,
        intensity: Intensity::Gentle,
        suitability: &[Support::LimitedGripStrength, Support::PostInjuryRecovery],
        equipment: &[],
        goals: &[Goal::Strength],
        instructions: &[
            "Roll up a small towel and hold it in one hand.",
            "Squeeze as firmly as is comfortable and hold for five seconds.",
            "Release slowly and switch hands.",
        ],
        safety_note: "Squeeze gently at first. Skip this exercise during a pain flare-up.",
        calories: 15,
        duration_minutes: 3,
    },
    Exercise {
        id: "wall_pushup",
        title: "Wall Push-Ups",
        category: Category::UpperBody,
        intensity: Intensity::Moderate,
        suitability: &[Support::LimitedLowerBodyMobility, Support::BalanceIssues],
        equipment: &[],
        goals: &[Goal::Strength, Goal::Balance],
        instructions: &[
            "Stand facing a wall, arm-length away.",
            "Place palms on the wall at shoulder height.",
            "Bend elbows to bring your chest towards the wall.",
            "Push back to the starting position.",
        ],
        safety_note: "Ensure non-slip footwear. Keep your body in a straight line.",
        calories: 50,
        duration_minutes: 5,
    },
];

/// The full catalog in declaration order.
#[must_use]
pub fn all() -> &'static [Exercise] {
    &EXERCISES
}

#[must_use]
pub fn get(id: &str) -> Option<&'static Exercise> {
    EXERCISES_BY_ID.get(id).copied()
}

#[must_use]
pub fn by_category(category: Category) -> Vec<&'static Exercise> {
    EXERCISES.iter().filter(|e| e.category == category).collect()
}

#[must_use]
pub fn filter_by_title(text: &str) -> Vec<&'static Exercise> {
    let text = text.to_lowercase();
    EXERCISES
        .iter()
        .filter(|e| e.title.to_lowercase().contains(&text))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Property;

    #[test]
    fn test_exercises_order() {
        let ids = EXERCISES.iter().map(|e| e.id).collect::<Vec<_>>();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort_unstable();
        assert_eq!(ids, sorted_ids, "unsorted");
    }

    #[test]
    fn test_exercises_duplicate_ids() {
        let mut ids = HashSet::new();

        for exercise in &EXERCISES {
            assert!(!ids.contains(exercise.id), "duplicate id {}", exercise.id);
            ids.insert(exercise.id);
        }
    }

    #[test]
    fn test_exercises_invariants() {
        for exercise in &EXERCISES {
            let id = exercise.id;
            assert!(!exercise.title.is_empty(), "empty title for {id}");
            assert!(!exercise.instructions.is_empty(), "no instructions for {id}");
            assert!(
                exercise.instructions.iter().all(|i| !i.is_empty()),
                "empty instruction step for {id}"
            );
            assert!(!exercise.safety_note.is_empty(), "no safety note for {id}");
            assert!(
                !exercise.suitability.is_empty() || !exercise.goals.is_empty(),
                "neither suitability nor goals for {id}"
            );
            assert!(exercise.calories > 0, "zero calories for {id}");
            assert!(exercise.duration_minutes > 0, "zero duration for {id}");
        }
    }

    #[test]
    fn test_all_is_stable() {
        assert_eq!(all(), all());
        assert_eq!(all().len(), EXERCISES.len());
    }

    #[test]
    fn test_get() {
        assert_eq!(
            get("neck_stretches").map(|e| e.title),
            Some("Gentle Neck Release")
        );
        assert_eq!(get("unknown"), None);
    }

    #[test]
    fn test_by_category() {
        for category in Category::iter() {
            let exercises = by_category(*category);
            assert!(!exercises.is_empty());
            assert!(exercises.iter().all(|e| e.category == *category));
        }
    }

    #[test]
    fn test_filter_by_title() {
        assert_eq!(
            filter_by_title("seated")
                .iter()
                .map(|e| e.id)
                .collect::<Vec<_>>(),
            vec!["seated_march", "seated_shoulder_press"]
        );
        assert_eq!(filter_by_title("SEATED"), filter_by_title("seated"));
        assert_eq!(filter_by_title(""), all().iter().collect::<Vec<_>>());
        assert_eq!(filter_by_title("rowing machine"), Vec::<&Exercise>::new());
    }
}
