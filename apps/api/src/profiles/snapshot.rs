//! Print snapshot — the exact payload the headless-browser PDF service
//! renders.
//!
//! Built from the same `narrate` call as the live profile endpoint and
//! deliberately free of request-time data (no timestamps, no request ids),
//! so the same candidate and score always produce byte-identical output in
//! both surfaces.

use serde::Serialize;

use crate::behavioural::{narrate, ArchetypeProfile, DiscScore, PronounContext};
use crate::models::candidate::{AssessmentRow, CandidateRow};

#[derive(Debug, Clone, Serialize)]
pub struct PrintSnapshot {
    pub candidate_name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub scores: DiscScore,
    pub profile: ArchetypeProfile,
}

/// Assembles the snapshot for a candidate. A candidate without an
/// assessment snapshots from the zero vector, which narrates to the
/// balanced profile rather than failing.
pub fn build_snapshot(candidate: &CandidateRow, assessment: Option<&AssessmentRow>) -> PrintSnapshot {
    let scores = score_of(assessment);
    let pronouns = PronounContext::new(candidate.full_name.clone(), candidate.pronouns.clone());

    PrintSnapshot {
        candidate_name: candidate.full_name.clone(),
        headline: candidate.headline.clone(),
        summary: candidate.summary.clone(),
        scores,
        profile: narrate(&scores, &pronouns),
    }
}

/// Converts the latest assessment row to a score; absent rows read as zero.
pub fn score_of(assessment: Option<&AssessmentRow>) -> DiscScore {
    assessment
        .map(|a| DiscScore::new(a.dominance, a.influence, a.steadiness, a.conscientiousness))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_candidate(pronouns: Option<&str>) -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            full_name: "Priya Sharma".to_string(),
            pronouns: pronouns.map(|p| p.to_string()),
            email: "priya@example.com".to_string(),
            headline: Some("Engineering lead".to_string()),
            summary: None,
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    fn make_assessment(d: f32, i: f32, s: f32, c: f32) -> AssessmentRow {
        AssessmentRow {
            id: Uuid::new_v4(),
            candidate_id: Uuid::new_v4(),
            version: 1,
            dominance: d,
            influence: i,
            steadiness: s,
            conscientiousness: c,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_snapshot_without_assessment_is_balanced() {
        let snapshot = build_snapshot(&make_candidate(None), None);
        assert_eq!(snapshot.profile.archetype, "Versatile Professional");
        assert_eq!(snapshot.scores, DiscScore::default());
    }

    #[test]
    fn test_snapshot_matches_live_narration() {
        // The export contract: same score, byte-identical narrative text.
        let candidate = make_candidate(Some("she/her"));
        let assessment = make_assessment(22.0, 45.0, 28.0, 5.0);

        let snapshot = build_snapshot(&candidate, Some(&assessment));
        let live = narrate(
            &score_of(Some(&assessment)),
            &PronounContext::new(candidate.full_name.clone(), candidate.pronouns.clone()),
        );

        assert_eq!(snapshot.profile, live);
    }

    #[test]
    fn test_snapshot_serialization_is_stable_across_calls() {
        let candidate = make_candidate(Some("he/him"));
        let assessment = make_assessment(80.0, 5.0, 10.0, 5.0);

        let a = serde_json::to_string(&build_snapshot(&candidate, Some(&assessment))).unwrap();
        let b = serde_json::to_string(&build_snapshot(&candidate, Some(&assessment))).unwrap();
        assert_eq!(a, b);
    }
}
