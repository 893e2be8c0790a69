//! Release identity scoring
//!
//! Two releases are compared field by field. Each comparator yields a
//! sub-score in [0, 1] together with its weight; the result is the weighted
//! mean. A comparator that has nothing to compare returns weight 0 so it
//! drops out instead of dragging the mean down.
//!
//! An identical catalog number is taken as proof of identity and ends the
//! comparison at 1.0.

use crate::disc::DiscFormat;
use crate::release::Release;
use crate::similarity::similarity;
use relmeta_common::ScoringWeights;
use serde::Serialize;
use tracing::debug;

/// One weighted comparator result
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SubScore {
    pub score: f64,
    pub weight: f64,
}

impl SubScore {
    /// Nothing to compare
    pub const NONE: SubScore = SubScore {
        score: 0.0,
        weight: 0.0,
    };

    pub fn new(score: f64, weight: f64) -> Self {
        Self { score, weight }
    }

    pub fn is_counted(&self) -> bool {
        self.weight > 0.0
    }
}

/// Every sub-score of one comparison plus the final result
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub publishing: SubScore,
    pub title: SubScore,
    pub performers: SubScore,
    pub tracks: SubScore,
    pub disc_format: SubScore,
    /// Identical catalog numbers ended the comparison early
    pub catalog_match: bool,
    pub total: f64,
}

impl ScoreBreakdown {
    fn sub_scores(&self) -> [SubScore; 5] {
        [
            self.publishing,
            self.title,
            self.performers,
            self.tracks,
            self.disc_format,
        ]
    }

    /// Weighted mean of the counted sub-scores; 0.0 when none counts
    fn weighted_mean(&self) -> f64 {
        let (sum, weights) = self
            .sub_scores()
            .iter()
            .fold((0.0, 0.0), |(sum, weights), sub| {
                (sum + sub.weight * sub.score, weights + sub.weight)
            });
        if weights > 0.0 {
            sum / weights
        } else {
            0.0
        }
    }
}

/// Stateless release comparator
#[derive(Debug, Clone, Default)]
pub struct ReleaseScorer {
    weights: ScoringWeights,
}

impl ReleaseScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Identity score of two releases in [0, 1]
    pub fn compare(&self, release: &Release, other: &Release) -> f64 {
        self.breakdown(release, other).total
    }

    /// Compare and keep every sub-score
    pub fn breakdown(&self, release: &Release, other: &Release) -> ScoreBreakdown {
        let publishing = self.publishing(release, other);
        if publishing.is_counted() && publishing.score == 1.0 {
            debug!(title = %release.title, "Catalog numbers match, releases identical");
            return ScoreBreakdown {
                publishing,
                catalog_match: true,
                total: 1.0,
                ..Default::default()
            };
        }

        let mut breakdown = ScoreBreakdown {
            publishing,
            title: SubScore::new(similarity(&release.title, &other.title), self.weights.title),
            performers: self.performers(release, other),
            tracks: self.tracks(release, other),
            disc_format: self.disc_formats(release, other),
            catalog_match: false,
            total: 0.0,
        };
        breakdown.total = breakdown.weighted_mean();

        debug!(
            publishing = breakdown.publishing.score,
            title = breakdown.title.score,
            performers = breakdown.performers.score,
            tracks = breakdown.tracks.score,
            disc_format = breakdown.disc_format.score,
            total = breakdown.total,
            "Release comparison"
        );
        breakdown
    }

    /// Best catalog number match; skipped unless both sides carry a catalog number
    fn publishing(&self, release: &Release, other: &Release) -> SubScore {
        let score = match (&release.publishing, &other.publishing) {
            (Some(mine), Some(theirs)) => mine.compare(theirs),
            _ => None,
        };
        score.map_or(SubScore::NONE, |score| SubScore::new(score, self.weights.publishing))
    }

    /// Best performer name match; skipped when no names match at all
    fn performers(&self, release: &Release, other: &Release) -> SubScore {
        let score = release
            .actor_roles
            .performers()
            .compare(&other.actor_roles.performers());
        if score == 0.0 {
            return SubScore::NONE;
        }
        SubScore::new(score, self.weights.performers)
    }

    /// Mean title similarity of index-paired tracks
    ///
    /// Only lists of equal, non-zero length are paired. The weight grows
    /// with the number of tracks.
    fn tracks(&self, release: &Release, other: &Release) -> SubScore {
        let count = release.tracks.len();
        if count == 0 || count != other.tracks.len() {
            return SubScore::NONE;
        }
        let sum: f64 = release
            .tracks
            .iter()
            .zip(&other.tracks)
            .map(|(track, other_track)| track.compare(other_track))
            .sum();
        SubScore::new(sum / count as f64, count as f64 * self.weights.track)
    }

    /// Best medium match of index-paired discs; lists of unequal length are skipped
    fn disc_formats(&self, release: &Release, other: &Release) -> SubScore {
        if release.discs.len() != other.discs.len() {
            return SubScore::NONE;
        }
        let best = release
            .discs
            .iter()
            .zip(&other.discs)
            .map(|(disc, other_disc)| {
                DiscFormat::compare(disc.format.as_ref(), other_disc.format.as_ref())
            })
            .fold(0.0_f64, f64::max);
        if best == 0.0 {
            return SubScore::NONE;
        }
        SubScore::new(best, self.weights.disc_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Media;
    use crate::publishing::Label;
    use crate::track::Track;

    fn release(title: &str, tracks: &[&str]) -> Release {
        let mut release = Release::new();
        release.title = title.to_string();
        for (i, title) in tracks.iter().enumerate() {
            let mut track = Track::new();
            track.set_position(&(i + 1).to_string());
            track.title = title.to_string();
            release.tracks.push(track);
        }
        release
    }

    #[test]
    fn test_weighted_mean_without_weights_is_zero() {
        let scorer = ReleaseScorer::new(ScoringWeights {
            publishing: 0.0,
            title: 0.0,
            performers: 0.0,
            track: 0.0,
            disc_format: 0.0,
        });
        let a = release("Abbey Road", &["Come Together"]);
        assert_eq!(scorer.compare(&a, &a), 0.0);
    }

    #[test]
    fn test_track_sub_score_is_mean_with_count_weight() {
        let scorer = ReleaseScorer::default();
        let a = release("A", &["One", "Two", "Three"]);
        let sub = scorer.tracks(&a, &a);
        assert_eq!(sub, SubScore::new(1.0, 3.0));

        let b = release("A", &["One", "Two"]);
        assert_eq!(scorer.tracks(&a, &b), SubScore::NONE);
    }

    #[test]
    fn test_disc_formats_unequal_counts_skipped() {
        let scorer = ReleaseScorer::default();
        let mut a = Release::new();
        a.disc_mut(1).format_mut().media = Media::Lp;
        let mut b = a.clone();
        assert_eq!(scorer.disc_formats(&a, &b), SubScore::new(1.0, 1.0));

        b.disc_mut(2).format_mut().media = Media::Lp;
        assert_eq!(scorer.disc_formats(&a, &b), SubScore::NONE);
    }

    #[test]
    fn test_publishing_without_labels_skipped() {
        let scorer = ReleaseScorer::default();
        let mut a = release("A", &[]);
        let b = release("A", &[]);
        a.publishing_mut().add_label(Label::new("Blue Note", "BST 84003"));
        assert_eq!(scorer.publishing(&a, &b), SubScore::NONE);
    }

    #[test]
    fn test_publishing_without_catalog_numbers_skipped() {
        let scorer = ReleaseScorer::default();
        let mut a = release("A", &[]);
        a.publishing_mut().add_label(Label::new("Blue Note", ""));
        assert_eq!(scorer.publishing(&a, &a), SubScore::NONE);
    }

    #[test]
    fn test_breakdown_reports_catalog_match() {
        let scorer = ReleaseScorer::default();
        let mut a = release("A", &["x"]);
        let mut b = release("Completely different", &["y", "z"]);
        a.publishing_mut().add_label(Label::new("Blue Note", "BST 84003"));
        b.publishing_mut().add_label(Label::new("Liberty", "BST 84003"));

        let breakdown = scorer.breakdown(&a, &b);
        assert!(breakdown.catalog_match);
        assert_eq!(breakdown.total, 1.0);
    }
}
