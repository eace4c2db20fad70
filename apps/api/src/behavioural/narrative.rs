//! Narrative generation — `narrate` composes classification, the archetype
//! card, and the per-axis text banks into a complete `ArchetypeProfile`.
//!
//! The axis ranking is computed exactly once per call and every
//! sub-generator works from it, so the headline archetype and the detailed
//! narrative can never disagree about which axis leads.
//!
//! Pure and synchronous: no I/O, no clock, no randomness. The live profile
//! endpoint and the print/export snapshot call this same function, which is
//! what guarantees the PDF matches the dashboard byte for byte.

use serde::Serialize;

use crate::behavioural::archetype::{archetype_for_band, describe};
use crate::behavioural::pronouns::{fill, resolve, PronounContext};
use crate::behavioural::score::{Axis, Band, DiscScore};
use crate::behavioural::text_bank;

/// Fixed arities assumed by downstream card layouts.
pub const STRENGTH_COUNT: usize = 3;
pub const MOTIVATOR_COUNT: usize = 4;
pub const WORK_STYLE_STRENGTH_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthCard {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitledText {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkStyle {
    pub communication: TitledText,
    pub decision_making: TitledText,
}

/// The complete derived profile for one score. Created fresh on every call,
/// owned by the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeProfile {
    pub archetype: String,
    pub emoji: String,
    pub short_description: String,
    pub strengths: Vec<StrengthCard>,
    pub work_style: WorkStyle,
    pub career_motivators: Vec<String>,
    pub work_style_strengths: Vec<String>,
}

/// Derives the full narrative profile for a score. Total: every input,
/// including the zero vector, produces a fully populated profile.
pub fn narrate(score: &DiscScore, pronouns: &PronounContext) -> ArchetypeProfile {
    // Rank once; every sub-generator below shares this view of the score.
    let ranking = score.ranking();
    let band = ranking.band();

    let name = archetype_for_band(band);
    let card = describe(name);
    let set = resolve(pronouns.pronouns.as_deref());
    let display_name = if pronouns.display_name.is_empty() {
        "This candidate"
    } else {
        pronouns.display_name.as_str()
    };

    // Balanced profiles draw from the generic bank; pure and blended draw
    // from the dominant axis. Blends borrow one strength card from the
    // secondary axis so the pair actually shows in the text.
    let (lead_axis, support_axis) = match band {
        Band::Pure(axis) => (Some(axis), None),
        Band::Blended(dominant, secondary) => (Some(dominant), Some(secondary)),
        Band::Balanced => (None, None),
    };

    let strengths = build_strengths(lead_axis, support_axis)
        .into_iter()
        .map(|t| StrengthCard {
            title: t.title.to_string(),
            body: fill(t.body, &set, display_name),
        })
        .collect::<Vec<_>>();

    let (comm_title, comm_body) = text_bank::communication(lead_axis);
    let (dec_title, dec_body) = text_bank::decision_making(lead_axis);

    let career_motivators = text_bank::motivators(lead_axis)
        .iter()
        .take(MOTIVATOR_COUNT)
        .map(|m| fill(m, &set, display_name))
        .collect::<Vec<_>>();

    let work_style_strengths = text_bank::work_style_strengths(lead_axis)
        .iter()
        .take(WORK_STYLE_STRENGTH_COUNT)
        .map(|w| fill(w, &set, display_name))
        .collect::<Vec<_>>();

    ArchetypeProfile {
        archetype: name.to_string(),
        emoji: card.emoji.to_string(),
        short_description: card.short_description.to_string(),
        strengths,
        work_style: WorkStyle {
            communication: TitledText {
                title: comm_title.to_string(),
                body: fill(comm_body, &set, display_name),
            },
            decision_making: TitledText {
                title: dec_title.to_string(),
                body: fill(dec_body, &set, display_name),
            },
        },
        career_motivators,
        work_style_strengths,
    }
}

/// Picks exactly STRENGTH_COUNT strength templates. Blended profiles take
/// two from the dominant axis and one from the secondary; everything else
/// takes all three from its own bank.
fn build_strengths(
    lead: Option<Axis>,
    support: Option<Axis>,
) -> Vec<text_bank::StrengthTemplate> {
    let lead_bank = text_bank::strengths(lead);
    match support {
        Some(secondary) => {
            let support_bank = text_bank::strengths(Some(secondary));
            vec![lead_bank[0], lead_bank[1], support_bank[0]]
        }
        None => lead_bank.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavioural::archetype::classify;

    fn ctx(name: &str, pronouns: Option<&str>) -> PronounContext {
        PronounContext::new(name, pronouns.map(|s| s.to_string()))
    }

    fn assert_fully_populated(profile: &ArchetypeProfile) {
        assert!(!profile.archetype.is_empty());
        assert!(!profile.emoji.is_empty());
        assert!(!profile.short_description.is_empty());
        assert_eq!(profile.strengths.len(), STRENGTH_COUNT);
        assert_eq!(profile.career_motivators.len(), MOTIVATOR_COUNT);
        assert_eq!(
            profile.work_style_strengths.len(),
            WORK_STYLE_STRENGTH_COUNT
        );
        assert!(!profile.work_style.communication.body.is_empty());
        assert!(!profile.work_style.decision_making.body.is_empty());
        for s in &profile.strengths {
            assert!(!s.title.is_empty() && !s.body.is_empty());
            assert!(!s.body.contains('{'), "unsubstituted token in: {}", s.body);
        }
    }

    #[test]
    fn test_totality_over_degenerate_inputs() {
        let cases = [
            DiscScore::default(),
            DiscScore::new(-5.0, -1.0, -100.0, -2.0),
            DiscScore::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN),
            DiscScore::new(10_000.0, 0.0, 0.0, 0.0),
            DiscScore::new(0.1, 0.2, 0.3, 0.4),
        ];
        for score in cases {
            let profile = narrate(&score, &ctx("Sam", None));
            assert_fully_populated(&profile);
        }
    }

    #[test]
    fn test_zero_vector_gets_balanced_profile() {
        let profile = narrate(&DiscScore::default(), &ctx("Sam", None));
        assert_eq!(profile.archetype, "Versatile Professional");
        assert_fully_populated(&profile);
    }

    #[test]
    fn test_determinism() {
        let score = DiscScore::new(22.0, 45.0, 28.0, 5.0);
        let a = narrate(&score, &ctx("Priya", Some("she/her")));
        let b = narrate(&score, &ctx("Priya", Some("she/her")));
        assert_eq!(a, b);
    }

    #[test]
    fn test_narrate_agrees_with_classify() {
        let cases = [
            DiscScore::new(80.0, 5.0, 10.0, 5.0),
            DiscScore::new(22.0, 45.0, 28.0, 5.0),
            DiscScore::new(0.0, 0.0, 0.0, 0.0),
            DiscScore::new(40.0, 20.0, 5.0, 5.0),
            DiscScore::new(52.0, 48.0, 0.0, 0.0),
        ];
        for score in cases {
            let profile = narrate(&score, &ctx("Sam", None));
            assert_eq!(
                profile.archetype,
                classify(&score),
                "narrate and classify disagree for {score:?}"
            );
        }
    }

    #[test]
    fn test_influence_steadiness_scenario() {
        // The worked example from the assessment team: Influence leads,
        // Steadiness backs it up, she/her pronouns.
        let score = DiscScore::new(22.0, 45.0, 28.0, 5.0);
        let profile = narrate(&score, &ctx("Priya", Some("she/her")));

        assert_eq!(profile.archetype, "Team Builder");
        assert!(
            profile.short_description.contains("people")
                || profile.short_description.contains("collaborator")
        );
        assert_eq!(profile.strengths.len(), 3);
        assert!(
            profile.work_style.communication.body.contains("She")
                || profile.work_style.communication.body.contains("she")
        );
        assert!(!profile.work_style.communication.body.contains("they"));
    }

    #[test]
    fn test_pure_dominance_scenario() {
        let score = DiscScore::new(80.0, 5.0, 10.0, 5.0);
        let profile = narrate(&score, &ctx("Omar", Some("he/him")));
        assert_eq!(profile.archetype, "Trailblazer");
        assert!(profile.work_style.decision_making.body.contains("He")
            || profile.work_style.decision_making.body.contains("he"));
    }

    #[test]
    fn test_blended_profile_borrows_secondary_strength() {
        // Influence dominant, Steadiness secondary: third card comes from
        // the Steadiness bank.
        let score = DiscScore::new(22.0, 45.0, 28.0, 5.0);
        let profile = narrate(&score, &ctx("Sam", None));
        assert_eq!(profile.strengths[2].title, "Delivers consistently");
    }

    #[test]
    fn test_neutral_pronouns_conjugate_plurally() {
        let score = DiscScore::new(80.0, 5.0, 10.0, 5.0);
        let profile = narrate(&score, &ctx("Sam", Some("they/them")));
        let body = &profile.strengths[1].body;
        assert!(
            body.contains("They are") || body.contains("they are"),
            "expected plural conjugation, got: {body}"
        );
    }

    #[test]
    fn test_unrecognized_pronouns_fall_back_without_error() {
        let score = DiscScore::new(80.0, 5.0, 10.0, 5.0);
        let profile = narrate(&score, &ctx("Sam", Some("xe/xem")));
        assert!(
            profile.work_style.communication.body.contains("They")
                || profile.work_style.communication.body.contains("they")
        );
        assert_fully_populated(&profile);
    }

    #[test]
    fn test_empty_display_name_gets_placeholder() {
        let profile = narrate(&DiscScore::default(), &ctx("", None));
        assert_fully_populated(&profile);
    }

    #[test]
    fn test_serialized_shape_is_stable() {
        let profile = narrate(&DiscScore::new(60.0, 10.0, 5.0, 5.0), &ctx("Sam", None));
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("archetype").is_some());
        assert!(json.get("strengths").unwrap().as_array().unwrap().len() == 3);
        assert!(json.get("work_style").unwrap().get("communication").is_some());
    }
}
