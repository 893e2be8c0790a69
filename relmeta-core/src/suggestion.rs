//! Online service suggestions, tag assumptions and candidate ranking

use crate::actor::ActorIdentities;
use crate::aggregation::AggregationReport;
use crate::picture::Picture;
use crate::release::Release;
use crate::scoring::ReleaseScorer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Anything carrying a similarity score in [0, 1]
pub trait Scored {
    fn score(&self) -> f64;
}

/// A release found by an online service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub release: Release,
    #[serde(default, skip_serializing_if = "ActorIdentities::is_empty")]
    pub actors: ActorIdentities,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<Picture>,
    #[serde(rename = "service", default)]
    pub service_name: String,
    /// Similarity reported by the source service
    #[serde(rename = "score", default)]
    pub source_similarity: f64,
}

impl Suggestion {
    pub fn new(release: Release, service_name: &str, source_similarity: f64) -> Self {
        Self {
            release,
            service_name: service_name.to_string(),
            source_similarity,
            ..Default::default()
        }
    }

    /// Optimize the release, then lift its actor identifiers and pictures
    /// to the suggestion
    pub fn optimize(&mut self) -> AggregationReport {
        let report = self.release.optimize();
        self.actors.merge(&std::mem::take(&mut self.release.actors));
        self.pictures.append(&mut self.release.pictures);
        report
    }
}

impl Scored for Suggestion {
    fn score(&self) -> f64 {
        self.source_similarity
    }
}

/// The release as assembled from the tags of local files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assumption {
    pub release: Release,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<Picture>,
    #[serde(default, skip_serializing_if = "ActorIdentities::is_empty")]
    pub actors: ActorIdentities,
}

impl Assumption {
    pub fn new(release: Release) -> Self {
        Self {
            release,
            ..Default::default()
        }
    }

    /// Optimize the release, then lift its actor identifiers and the
    /// pictures that carry image data
    pub fn optimize(&mut self) -> AggregationReport {
        let report = self.release.optimize();
        self.actors.merge(&std::mem::take(&mut self.release.actors));
        let (embedded, linked): (Vec<Picture>, Vec<Picture>) =
            std::mem::take(&mut self.release.pictures)
                .into_iter()
                .partition(Picture::has_data);
        self.pictures.extend(embedded);
        self.release.pictures = linked;
        report
    }
}

/// Closed set of things a candidate can carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePayload {
    Release(Box<Release>),
    Suggestion(Box<Suggestion>),
}

impl CandidatePayload {
    /// The release underneath either payload kind
    pub fn release(&self) -> &Release {
        match self {
            CandidatePayload::Release(release) => release,
            CandidatePayload::Suggestion(suggestion) => &suggestion.release,
        }
    }
}

/// A scored payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub payload: CandidatePayload,
    pub score: f64,
}

impl Candidate {
    pub fn from_release(release: Release, score: f64) -> Self {
        Self {
            payload: CandidatePayload::Release(Box::new(release)),
            score,
        }
    }

    /// Candidate scored by the suggestion's own similarity
    pub fn from_suggestion(suggestion: Suggestion) -> Self {
        let score = suggestion.source_similarity;
        Self {
            payload: CandidatePayload::Suggestion(Box::new(suggestion)),
            score,
        }
    }
}

impl Scored for Candidate {
    fn score(&self) -> f64 {
        self.score
    }
}

/// Descending order by score; NaN ranks below everything
fn by_score_desc<T: Scored>(a: &T, b: &T) -> Ordering {
    let key = |item: &T| {
        let score = item.score();
        if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score
        }
    };
    key(b).total_cmp(&key(a))
}

/// The `n` best items by descending score
///
/// The sort is stable, so equal scores keep their input order. Scores are
/// never modified.
pub fn best_n_results<T: Scored>(mut items: Vec<T>, n: usize) -> Vec<T> {
    items.sort_by(by_score_desc);
    items.truncate(n);
    items
}

/// Score every candidate release against `base` and keep the best `n`
pub fn rank_releases(
    base: &Release,
    candidates: Vec<Release>,
    n: usize,
    scorer: &ReleaseScorer,
) -> Vec<Candidate> {
    let scored: Vec<Candidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = scorer.compare(base, &candidate);
            debug!(title = %candidate.title, score, "Candidate scored");
            Candidate::from_release(candidate, score)
        })
        .collect();
    best_n_results(scored, n)
}
