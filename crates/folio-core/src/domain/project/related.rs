//! Related-project ranking
//!
//! Scores every other project against a reference project:
//!
//! ```text
//! tech      = |T(r) ∩ T(p)| / max(|T(r)|, |T(p)|)     (0 when both empty)
//! category  = category_bonus   if p.category == r.category
//! spotlight = spotlight_bonus  if p.spotlight
//! score     = tech + category + spotlight
//! ```
//!
//! Technologies are compared as sets. Candidates scoring at or below
//! `min_score` are dropped, the rest are ordered by score (ties keep catalog
//! order) and truncated to `limit`. The bonuses are promotional boosts, so
//! a score above 1.0 is expected.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use tracing::debug;

use super::entity::ProjectRecord;
use super::store::ProjectStore;

/// Tunables for related-project ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    /// Maximum number of results
    pub limit: usize,
    /// Exclusive lower bound a score must exceed
    pub min_score: f64,
    pub category_bonus: f64,
    pub spotlight_bonus: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            limit: 3,
            min_score: 0.1,
            category_bonus: 0.2,
            spotlight_bonus: 0.3,
        }
    }
}

impl RankingWeights {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProject<'a> {
    pub project: &'a ProjectRecord,
    pub score: f64,
    /// Number of technologies shared with the reference
    pub overlap_count: usize,
}

/// Breakdown of one candidate's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub overlap_count: usize,
    pub tech_score: f64,
    pub category_bonus: f64,
    pub spotlight_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.tech_score + self.category_bonus + self.spotlight_bonus
    }
}

/// Score `candidate` against `reference`
pub fn score_candidate(
    reference: &ProjectRecord,
    candidate: &ProjectRecord,
    weights: &RankingWeights,
) -> ScoreBreakdown {
    let reference_techs: HashSet<&str> =
        reference.technologies.iter().map(String::as_str).collect();
    let candidate_techs: HashSet<&str> =
        candidate.technologies.iter().map(String::as_str).collect();

    let overlap_count = reference_techs.intersection(&candidate_techs).count();
    let denominator = reference_techs.len().max(candidate_techs.len());
    let tech_score = if denominator == 0 {
        0.0
    } else {
        overlap_count as f64 / denominator as f64
    };

    ScoreBreakdown {
        overlap_count,
        tech_score,
        category_bonus: if candidate.category == reference.category {
            weights.category_bonus
        } else {
            0.0
        },
        spotlight_bonus: if candidate.spotlight {
            weights.spotlight_bonus
        } else {
            0.0
        },
    }
}

/// Top related projects for `reference_id`; unknown ids yield nothing
pub fn rank_related<'a>(
    store: &'a ProjectStore,
    reference_id: &str,
    weights: &RankingWeights,
) -> Vec<RelatedProject<'a>> {
    let Some(reference) = store.get(reference_id) else {
        debug!(reference = reference_id, "Reference project not in store");
        return Vec::new();
    };

    let mut ranked: Vec<RelatedProject<'a>> = store
        .records()
        .iter()
        .filter(|candidate| candidate.id != reference.id)
        .filter_map(|candidate| {
            let breakdown = score_candidate(reference, candidate, weights);
            let score = breakdown.total();
            (score > weights.min_score).then_some(RelatedProject {
                project: candidate,
                score,
                overlap_count: breakdown.overlap_count,
            })
        })
        .collect();

    // Stable, so equal scores keep catalog order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(weights.limit);

    debug!(
        reference = reference_id,
        results = ranked.len(),
        "Ranked related projects"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::entity::Year;
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-9;

    fn record(id: &str, category: &str, techs: &[&str]) -> ProjectRecord {
        ProjectRecord::new(id, id, category, Year::new(2024).unwrap())
            .with_technologies(techs.iter().copied())
    }

    fn ids<'a>(related: &[RelatedProject<'a>]) -> Vec<&'a str> {
        related.iter().map(|r| r.project.id.as_str()).collect()
    }

    #[test]
    fn test_example_scenario() {
        let store = ProjectStore::new(vec![
            record("a", "web", &["Node.js", "PostgreSQL"]),
            record("b", "web", &["Node.js", "PostgreSQL", "Express.js"]),
            record("c", "blockchain", &["Solidity"]),
        ])
        .unwrap();

        let related = rank_related(&store, "a", &RankingWeights::default());
        assert_eq!(ids(&related), vec!["b"]);
        assert_eq!(related[0].overlap_count, 2);
        assert!((related[0].score - (2.0 / 3.0 + 0.2)).abs() < EPSILON);
    }

    #[test]
    fn test_identical_tech_and_category_scores_at_least_1_2() {
        let a = record("a", "ai", &["React", "Three.js"]);
        let b = record("b", "ai", &["Three.js", "React"]);
        let breakdown = score_candidate(&a, &b, &RankingWeights::default());
        assert!((breakdown.tech_score - 1.0).abs() < EPSILON);
        assert!(breakdown.total() >= 1.2 - EPSILON);

        let spotlit = b.clone().with_spotlight(true);
        let breakdown = score_candidate(&a, &spotlit, &RankingWeights::default());
        assert!((breakdown.total() - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_unrelated_candidate_is_excluded() {
        let store = ProjectStore::new(vec![
            record("a", "web", &["Node.js"]),
            record("z", "games", &["Godot"]),
        ])
        .unwrap();
        assert!(rank_related(&store, "a", &RankingWeights::default()).is_empty());
    }

    #[test]
    fn test_spotlight_alone_clears_threshold() {
        let store = ProjectStore::new(vec![
            record("a", "web", &["Node.js"]),
            record("z", "games", &["Godot"]).with_spotlight(true),
        ])
        .unwrap();
        let related = rank_related(&store, "a", &RankingWeights::default());
        assert_eq!(ids(&related), vec!["z"]);
        assert_eq!(related[0].overlap_count, 0);
        assert!((related[0].score - 0.3).abs() < EPSILON);
    }

    #[test]
    fn test_top_k_bound_and_tie_order() {
        let store = ProjectStore::new(vec![
            record("ref", "web", &["Rust"]),
            record("p1", "web", &["Rust"]),
            record("p2", "web", &["Rust"]),
            record("p3", "web", &["Rust", "Go"]),
            record("p4", "web", &["Rust"]),
            record("p5", "web", &["Rust"]),
        ])
        .unwrap();

        let related = rank_related(&store, "ref", &RankingWeights::default());
        assert_eq!(related.len(), 3);
        // p3 scores 0.5 + 0.2; the 1.2 ties keep catalog order
        assert_eq!(ids(&related), vec!["p1", "p2", "p4"]);

        let related = rank_related(&store, "ref", &RankingWeights::default().with_limit(10));
        assert_eq!(ids(&related), vec!["p1", "p2", "p4", "p5", "p3"]);
    }

    #[test]
    fn test_duplicate_technologies_use_set_semantics() {
        let a = record("a", "x", &["Rust", "Rust", "Tokio"]);
        let b = record("b", "y", &["Rust"]);
        let breakdown = score_candidate(&a, &b, &RankingWeights::default());
        assert_eq!(breakdown.overlap_count, 1);
        assert!((breakdown.tech_score - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_empty_technologies_do_not_divide_by_zero() {
        let a = record("a", "web", &[]);
        let b = record("b", "web", &[]);
        let breakdown = score_candidate(&a, &b, &RankingWeights::default());
        assert_eq!(breakdown.tech_score, 0.0);
        assert!((breakdown.total() - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_unknown_reference_and_tiny_store() {
        let store = ProjectStore::new(vec![record("only", "web", &["Rust"])]).unwrap();
        assert!(rank_related(&store, "only", &RankingWeights::default()).is_empty());
        assert!(rank_related(&store, "ghost", &RankingWeights::default()).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let weights = RankingWeights {
            category_bonus: 0.1,
            ..RankingWeights::default()
        };
        let store = ProjectStore::new(vec![
            record("a", "web", &["Rust"]),
            record("b", "web", &["Go"]),
        ])
        .unwrap();
        assert!(rank_related(&store, "a", &weights).is_empty());
    }

    #[test]
    fn test_builtin_catalog_relations() {
        let store = ProjectStore::builtin().unwrap();
        let related = rank_related(&store, "campusconnect", &RankingWeights::default());
        let ids = ids(&related);
        assert_eq!(ids.len(), 3);
        // Hostel shares four of five technologies and the category
        assert_eq!(ids[0], "hostel-management");
        assert!(!ids.contains(&"campusconnect"));
    }
}
