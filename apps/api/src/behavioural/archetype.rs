//! Archetype catalogue — maps classification bands to the canonical set of
//! named archetypes and their display cards.
//!
//! The catalogue is closed: 4 pure + 12 ordered blends + 1 balanced = 17
//! names. Earlier iterations of the product kept competing 12- and 17-name
//! tables in different pages; this table is now the only one.

use serde::Serialize;

use crate::behavioural::score::{Axis, Band, DiscScore};

/// Emoji and one-line description for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchetypeCard {
    pub emoji: &'static str,
    pub short_description: &'static str,
}

/// The balanced/default archetype every degenerate score falls back to.
pub const BALANCED_ARCHETYPE: &str = "Versatile Professional";

/// Card returned by `describe` for names outside the catalogue.
/// Never an error: unknown input gets a neutral card.
const DEFAULT_CARD: ArchetypeCard = ArchetypeCard {
    emoji: "💼",
    short_description: "A well-rounded professional who adapts their approach to the situation at hand.",
};

/// The canonical archetype table. Order: 4 pure, 12 blends, 1 balanced.
const CATALOGUE: &[(&str, ArchetypeCard)] = &[
    // Pure profiles
    (
        "Trailblazer",
        ArchetypeCard {
            emoji: "🚀",
            short_description: "A decisive driver who thrives on challenge, pace, and visible results.",
        },
    ),
    (
        "Social Butterfly",
        ArchetypeCard {
            emoji: "🦋",
            short_description: "An energetic connector who wins people over and keeps teams buzzing.",
        },
    ),
    (
        "Steady Anchor",
        ArchetypeCard {
            emoji: "⚓",
            short_description: "A dependable stabilizer who builds trust through patience and consistency.",
        },
    ),
    (
        "Strategic Ninja",
        ArchetypeCard {
            emoji: "🥷",
            short_description: "A precise analyst who works quietly, plans thoroughly, and gets details right.",
        },
    ),
    // Blended profiles, ordered (dominant, secondary)
    (
        "Bold Motivator",
        ArchetypeCard {
            emoji: "🔥",
            short_description: "A results-driven leader who rallies people around ambitious goals.",
        },
    ),
    (
        "Steadfast Driver",
        ArchetypeCard {
            emoji: "🎯",
            short_description: "A determined achiever who pushes forward without leaving the team behind.",
        },
    ),
    (
        "Decisive Analyst",
        ArchetypeCard {
            emoji: "🧭",
            short_description: "A direct decision-maker who backs bold calls with careful reasoning.",
        },
    ),
    (
        "Persuasive Driver",
        ArchetypeCard {
            emoji: "📣",
            short_description: "A charismatic influencer who turns enthusiasm into momentum and action.",
        },
    ),
    (
        "Team Builder",
        ArchetypeCard {
            emoji: "🤝",
            short_description: "A people-focused collaborator who brings groups together and keeps them together.",
        },
    ),
    (
        "Creative Communicator",
        ArchetypeCard {
            emoji: "🎨",
            short_description: "An expressive thinker who pairs fresh ideas with structured follow-through.",
        },
    ),
    (
        "Grounded Achiever",
        ArchetypeCard {
            emoji: "🧱",
            short_description: "A calm finisher who delivers steadily and steps up when stakes rise.",
        },
    ),
    (
        "Supportive Connector",
        ArchetypeCard {
            emoji: "🌱",
            short_description: "A warm team player who looks after people while keeping work moving.",
        },
    ),
    (
        "Reliable Specialist",
        ArchetypeCard {
            emoji: "🔍",
            short_description: "A consistent expert who combines patience with exacting standards.",
        },
    ),
    (
        "Systematic Executor",
        ArchetypeCard {
            emoji: "📊",
            short_description: "A methodical operator who plans rigorously and drives plans to completion.",
        },
    ),
    (
        "Engaging Analyst",
        ArchetypeCard {
            emoji: "🧩",
            short_description: "A detail-minded professional who makes complex work approachable for others.",
        },
    ),
    (
        "Methodical Planner",
        ArchetypeCard {
            emoji: "📘",
            short_description: "A thorough organizer who values accuracy, process, and dependable routines.",
        },
    ),
    // Balanced fallback
    (
        BALANCED_ARCHETYPE,
        ArchetypeCard {
            emoji: "🌟",
            short_description: "A flexible all-rounder whose style adapts to what the work needs most.",
        },
    ),
];

/// Classifies a score into an archetype name from the closed catalogue.
/// Total: every input, including degenerate vectors, returns a name.
pub fn classify(score: &DiscScore) -> &'static str {
    archetype_for_band(score.ranking().band())
}

/// Maps a classification band to its archetype name.
/// Shared by `classify` and `narrate` so the two can never disagree.
pub fn archetype_for_band(band: Band) -> &'static str {
    match band {
        Band::Pure(axis) => pure_name(axis),
        Band::Blended(dominant, secondary) => blended_name(dominant, secondary),
        Band::Balanced => BALANCED_ARCHETYPE,
    }
}

fn pure_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Dominance => "Trailblazer",
        Axis::Influence => "Social Butterfly",
        Axis::Steadiness => "Steady Anchor",
        Axis::Conscientiousness => "Strategic Ninja",
    }
}

/// Ordered-pair lookup: (dominant, secondary) is directional, so
/// Influence-led-by-Dominance and Dominance-led-by-Influence name
/// different archetypes.
fn blended_name(dominant: Axis, secondary: Axis) -> &'static str {
    use Axis::*;
    match (dominant, secondary) {
        (Dominance, Influence) => "Bold Motivator",
        (Dominance, Steadiness) => "Steadfast Driver",
        (Dominance, Conscientiousness) => "Decisive Analyst",
        (Influence, Dominance) => "Persuasive Driver",
        (Influence, Steadiness) => "Team Builder",
        (Influence, Conscientiousness) => "Creative Communicator",
        (Steadiness, Dominance) => "Grounded Achiever",
        (Steadiness, Influence) => "Supportive Connector",
        (Steadiness, Conscientiousness) => "Reliable Specialist",
        (Conscientiousness, Dominance) => "Systematic Executor",
        (Conscientiousness, Influence) => "Engaging Analyst",
        (Conscientiousness, Steadiness) => "Methodical Planner",
        // A band can never pair an axis with itself, but the lookup stays
        // total rather than panicking on an impossible input.
        _ => BALANCED_ARCHETYPE,
    }
}

/// Looks up the display card for an archetype name.
/// Names outside the catalogue get the neutral default card, never an error.
pub fn describe(name: &str) -> ArchetypeCard {
    CATALOGUE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, card)| *card)
        .unwrap_or(DEFAULT_CARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_seventeen_archetypes() {
        assert_eq!(CATALOGUE.len(), 17);
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        for (i, (name, _)) in CATALOGUE.iter().enumerate() {
            assert!(
                !CATALOGUE.iter().skip(i + 1).any(|(n, _)| n == name),
                "duplicate archetype name: {name}"
            );
        }
    }

    #[test]
    fn test_pure_dominance_profile() {
        let score = DiscScore::new(80.0, 5.0, 10.0, 5.0);
        assert_eq!(classify(&score), "Trailblazer");
    }

    #[test]
    fn test_influence_steadiness_blend_is_team_builder() {
        let score = DiscScore::new(22.0, 45.0, 28.0, 5.0);
        assert_eq!(classify(&score), "Team Builder");
    }

    #[test]
    fn test_zero_vector_classifies_balanced() {
        assert_eq!(classify(&DiscScore::default()), BALANCED_ARCHETYPE);
    }

    #[test]
    fn test_blend_direction_matters() {
        let influence_led = DiscScore::new(30.0, 45.0, 5.0, 5.0);
        let dominance_led = DiscScore::new(45.0, 30.0, 5.0, 5.0);
        assert_eq!(classify(&influence_led), "Persuasive Driver");
        assert_eq!(classify(&dominance_led), "Bold Motivator");
    }

    #[test]
    fn test_describe_known_name() {
        let card = describe("Social Butterfly");
        assert_eq!(card.emoji, "🦋");
        assert!(card.short_description.contains("connector"));
    }

    #[test]
    fn test_describe_unknown_name_returns_neutral_default() {
        let card = describe("Quantum Wizard");
        assert_eq!(card, DEFAULT_CARD);
        assert!(!card.emoji.is_empty());
    }

    #[test]
    fn test_every_classified_name_is_in_the_catalogue() {
        // Sweep a grid of scores: classify must always land in the table.
        for d in [0, 10, 30, 45, 60, 90] {
            for i in [0, 10, 30, 45, 60] {
                for s in [0, 25, 40] {
                    for c in [0, 20, 55] {
                        let score =
                            DiscScore::new(d as f32, i as f32, s as f32, c as f32);
                        let name = classify(&score);
                        assert!(
                            CATALOGUE.iter().any(|(n, _)| *n == name),
                            "classify produced a name outside the catalogue: {name}"
                        );
                        assert!(!describe(name).emoji.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_team_builder_description_mentions_people() {
        let card = describe("Team Builder");
        assert!(
            card.short_description.contains("people")
                || card.short_description.contains("collaborator"),
            "Team Builder card should read people-focused"
        );
    }
}
