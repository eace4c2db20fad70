//! Match scoring — pluggable, trait-based scorer that measures a candidate
//! against a job posting's keyword list.
//!
//! Default: `KeywordMatchScorer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn MatchScorer>` so a semantic
//! backend can be swapped in without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// A single matched dimension between a candidate and a job keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDimension {
    pub keyword: String,
    pub evidence: String, // where the match was found
    pub strength: f32,    // 0.0 – 1.0
}

/// A job keyword the candidate shows no evidence for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchGap {
    pub keyword: String,
    /// Closest candidate tag, if any, for reviewer context.
    pub suggestion: Option<String>,
}

/// Full match report for one candidate against one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub overall_score: u32,                  // 0 – 100
    pub strong_matches: Vec<MatchDimension>, // strength ≥ 0.8
    pub partial_matches: Vec<MatchDimension>, // 0.4 – 0.79
    pub gaps: Vec<MatchGap>,                 // strength < 0.4
    pub recommendation: String,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, candidate: &CandidateRow, job: &JobRow)
        -> Result<MatchReport, AppError>;
}

/// Pure-Rust keyword-based match scorer. Fast, deterministic, no network.
///
/// Algorithm, per job keyword:
/// - candidate tag exact match → strength 1.0
/// - headline/summary substring match → strength 0.6
/// - no match → strength 0.0
/// overall_score = Σ(strength) / keyword_count × 100.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(
        &self,
        candidate: &CandidateRow,
        job: &JobRow,
    ) -> Result<MatchReport, AppError> {
        Ok(compute_keyword_match(candidate, job))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_keyword_match(candidate: &CandidateRow, job: &JobRow) -> MatchReport {
    if job.keywords.is_empty() {
        return MatchReport {
            overall_score: 0,
            strong_matches: vec![],
            partial_matches: vec![],
            gaps: vec![],
            recommendation: "This job has no keywords to match against.".to_string(),
            scorer_backend: "keyword".to_string(),
        };
    }

    let prose = format!(
        "{} {}",
        candidate.headline.as_deref().unwrap_or(""),
        candidate.summary.as_deref().unwrap_or("")
    )
    .to_lowercase();

    let mut strong_matches = Vec::new();
    let mut partial_matches = Vec::new();
    let mut gaps = Vec::new();
    let mut total = 0.0_f32;

    for keyword in &job.keywords {
        let keyword_lower = keyword.to_lowercase();

        let tag_match = candidate
            .tags
            .iter()
            .any(|t| t.to_lowercase() == keyword_lower);
        let text_match = prose.contains(&keyword_lower);

        let (strength, evidence) = if tag_match {
            (1.0, format!("tag '{keyword_lower}'"))
        } else if text_match {
            (0.6, "profile text".to_string())
        } else {
            (0.0, String::new())
        };

        total += strength;

        let dimension = MatchDimension {
            keyword: keyword.clone(),
            evidence,
            strength,
        };

        if strength >= 0.8 {
            strong_matches.push(dimension);
        } else if strength >= 0.4 {
            partial_matches.push(dimension);
        } else {
            gaps.push(MatchGap {
                keyword: keyword.clone(),
                suggestion: find_closest_tag(candidate, &keyword_lower),
            });
        }
    }

    let overall_score = ((total / job.keywords.len() as f32) * 100.0).round() as u32;
    let recommendation = build_recommendation(overall_score, &gaps);

    MatchReport {
        overall_score,
        strong_matches,
        partial_matches,
        gaps,
        recommendation,
        scorer_backend: "keyword".to_string(),
    }
}

/// Finds the candidate tag most closely overlapping with the keyword.
fn find_closest_tag(candidate: &CandidateRow, keyword: &str) -> Option<String> {
    candidate.tags.iter().find_map(|tag| {
        let tag_lower = tag.to_lowercase();
        if tag_lower.contains(keyword) || keyword.contains(&tag_lower) {
            Some(tag.clone())
        } else {
            None
        }
    })
}

/// Builds a human-readable recommendation string from score and gaps.
fn build_recommendation(score: u32, gaps: &[MatchGap]) -> String {
    let top_gaps: Vec<&str> = gaps.iter().take(3).map(|g| g.keyword.as_str()).collect();

    if score >= 80 {
        "Strong match. The candidate covers the key requirements for this role.".to_string()
    } else if score >= 60 {
        format!(
            "Moderate match ({score}/100). Probe these areas in screening: {}.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "Low match ({score}/100). Significant gaps: {}.",
            top_gaps.join(", ")
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_candidate(tags: Vec<&str>, summary: Option<&str>) -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            full_name: "Test Candidate".to_string(),
            pronouns: None,
            email: "test@example.com".to_string(),
            headline: None,
            summary: summary.map(|s| s.to_string()),
            tags: tags.into_iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    fn make_job(keywords: Vec<&str>) -> JobRow {
        JobRow {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Build services".to_string(),
            keywords: keywords.into_iter().map(|k| k.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_tag_match_scores_strong() {
        let candidate = make_candidate(vec!["rust", "postgres"], None);
        let job = make_job(vec!["rust", "postgres"]);
        let report = compute_keyword_match(&candidate, &job);
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.strong_matches.len(), 2);
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn test_text_match_scores_partial() {
        let candidate =
            make_candidate(vec![], Some("Extensive Kubernetes deployment experience"));
        let job = make_job(vec!["kubernetes"]);
        let report = compute_keyword_match(&candidate, &job);
        assert_eq!(report.partial_matches.len(), 1);
        assert_eq!(report.strong_matches.len(), 0);
        assert_eq!(report.overall_score, 60);
    }

    #[test]
    fn test_no_match_creates_gap() {
        let candidate = make_candidate(vec!["python"], None);
        let job = make_job(vec!["rust"]);
        let report = compute_keyword_match(&candidate, &job);
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.gaps[0].keyword, "rust");
    }

    #[test]
    fn test_gap_suggestion_finds_overlapping_tag() {
        let candidate = make_candidate(vec!["rust-async"], None);
        let job = make_job(vec!["rust"]);
        let report = compute_keyword_match(&candidate, &job);
        assert_eq!(report.gaps[0].suggestion.as_deref(), Some("rust-async"));
    }

    #[test]
    fn test_empty_keywords_returns_zero_score() {
        let candidate = make_candidate(vec!["rust"], None);
        let job = make_job(vec![]);
        let report = compute_keyword_match(&candidate, &job);
        assert_eq!(report.overall_score, 0);
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn test_overall_score_bounded_0_to_100() {
        let candidate = make_candidate(vec!["rust", "go", "sql"], Some("rust go sql"));
        let job = make_job(vec!["rust", "go", "sql"]);
        let report = compute_keyword_match(&candidate, &job);
        assert!(report.overall_score <= 100);
    }

    #[test]
    fn test_recommendation_moderate_lists_gaps() {
        let candidate = make_candidate(vec!["rust", "go"], Some("some kafka work"));
        let job = make_job(vec!["rust", "go", "kafka", "terraform"]);
        let report = compute_keyword_match(&candidate, &job);
        assert!(report.recommendation.contains("terraform"));
    }

    #[test]
    fn test_scorer_backend_label_is_keyword() {
        let report = compute_keyword_match(&make_candidate(vec![], None), &make_job(vec![]));
        assert_eq!(report.scorer_backend, "keyword");
    }

    #[tokio::test]
    async fn test_trait_object_scoring() {
        let scorer: std::sync::Arc<dyn MatchScorer> = std::sync::Arc::new(KeywordMatchScorer);
        let report = scorer
            .score(&make_candidate(vec!["rust"], None), &make_job(vec!["rust"]))
            .await
            .unwrap();
        assert_eq!(report.overall_score, 100);
    }
}
