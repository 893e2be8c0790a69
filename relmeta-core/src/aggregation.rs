//! Hierarchical aggregation: promote data shared by tracks to their release
//!
//! Three passes run concurrently over the same track list:
//! - notes: a notes value common to every track moves to the release
//! - unprocessed: (key, value) vendor tags carried by every track move to the release
//! - actors: every track-level actor identifier moves to the release
//!
//! Each pass owns one attribute family of both the release and its tracks
//! (notes, unprocessed tags, actor identifiers). The borrow splitter hands
//! each pass exclusive references to its family only, so the passes need no
//! locking. `clean` runs after all three have joined.

use crate::actor::ActorIdentities;
use crate::release::Release;
use crate::track::Track;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

type TagMap = BTreeMap<String, String>;

/// What one `optimize` call moved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    /// Common track notes became the release notes
    pub notes_promoted: bool,
    /// Number of (key, value) tags promoted to the release
    pub unprocessed_promoted: usize,
    /// Number of actor identifiers taken off tracks
    pub actor_ids_hoisted: usize,
}

impl AggregationReport {
    pub fn is_noop(&self) -> bool {
        !self.notes_promoted && self.unprocessed_promoted == 0 && self.actor_ids_hoisted == 0
    }
}

/// Run the three promotion passes, wait for all of them, then prune
///
/// Running it again on its own output changes nothing.
pub fn optimize(release: &mut Release) -> AggregationReport {
    let report = {
        let Release {
            tracks,
            notes,
            unprocessed,
            actors,
            ..
        } = &mut *release;

        let mut positions: Vec<&str> = Vec::with_capacity(tracks.len());
        let mut track_notes: Vec<&mut String> = Vec::with_capacity(tracks.len());
        let mut track_tags: Vec<&mut TagMap> = Vec::with_capacity(tracks.len());
        let mut track_actors: Vec<&mut ActorIdentities> = Vec::with_capacity(tracks.len());
        for Track {
            position,
            notes,
            unprocessed,
            actors,
            ..
        } in tracks.iter_mut()
        {
            positions.push(position.as_str());
            track_notes.push(notes);
            track_tags.push(unprocessed);
            track_actors.push(actors);
        }

        let ((notes_promoted, unprocessed_promoted), actor_ids_hoisted) = rayon::join(
            || {
                rayon::join(
                    || aggregate_notes(notes, &mut track_notes),
                    || aggregate_unprocessed(unprocessed, &positions, &mut track_tags),
                )
            },
            || aggregate_actors(actors, &mut track_actors),
        );

        AggregationReport {
            notes_promoted,
            unprocessed_promoted,
            actor_ids_hoisted,
        }
    };

    release.clean();

    info!(
        tracks = release.tracks.len(),
        notes_promoted = report.notes_promoted,
        unprocessed_promoted = report.unprocessed_promoted,
        actor_ids_hoisted = report.actor_ids_hoisted,
        "Release optimized"
    );
    report
}

/// Promote a notes value shared by every track
///
/// Tracks that agree on empty notes promote nothing.
fn aggregate_notes(release_notes: &mut String, track_notes: &mut [&mut String]) -> bool {
    let common = {
        let distinct: BTreeSet<&str> = track_notes.iter().map(|notes| notes.as_str()).collect();
        if distinct.len() != 1 {
            debug!(distinct = distinct.len(), "Track notes differ, not promoted");
            return false;
        }
        match distinct.first() {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return false,
        }
    };

    *release_notes = common;
    for notes in track_notes.iter_mut() {
        notes.clear();
    }
    debug!(tracks = track_notes.len(), "Common track notes promoted");
    true
}

/// Promote (key, value) pairs carried by every track
///
/// Skipped entirely when any track lacks a position: without positions
/// there is no telling whether tracks are missing.
fn aggregate_unprocessed(
    release_tags: &mut TagMap,
    positions: &[&str],
    track_tags: &mut [&mut TagMap],
) -> usize {
    if track_tags.is_empty() {
        return 0;
    }
    if positions.iter().any(|position| position.is_empty()) {
        debug!("Track without position, unprocessed tags not aggregated");
        return 0;
    }

    let track_count = track_tags.len();
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for tags in track_tags.iter() {
        for (key, value) in tags.iter() {
            *counts.entry((key.as_str(), value.as_str())).or_default() += 1;
        }
    }
    let common: Vec<(String, String)> = counts
        .into_iter()
        .filter(|(_, count)| *count == track_count)
        .map(|((key, value), _)| (key.to_string(), value.to_string()))
        .collect();

    let promoted = common.len();
    for (key, value) in common {
        for tags in track_tags.iter_mut() {
            tags.remove(&key);
        }
        release_tags.insert(key, value);
    }
    debug!(promoted, "Common unprocessed tags promoted");
    promoted
}

/// Move every track actor identifier up; the release keeps its first value
fn aggregate_actors(
    release_actors: &mut ActorIdentities,
    track_actors: &mut [&mut ActorIdentities],
) -> usize {
    let hoisted: usize = track_actors
        .iter_mut()
        .map(|actors| actors.hoist_into(release_actors))
        .sum();
    debug!(hoisted, "Track actor identifiers hoisted");
    hoisted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> TagMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_aggregate_notes() {
        let mut release_notes = String::new();
        let mut a = "x".to_string();
        let mut b = "x".to_string();
        assert!(aggregate_notes(&mut release_notes, &mut [&mut a, &mut b]));
        assert_eq!(release_notes, "x");
        assert!(a.is_empty() && b.is_empty());

        let mut release_notes = String::new();
        let mut a = "x".to_string();
        let mut b = "y".to_string();
        assert!(!aggregate_notes(&mut release_notes, &mut [&mut a, &mut b]));
        assert!(release_notes.is_empty());
        assert_eq!((a.as_str(), b.as_str()), ("x", "y"));
    }

    #[test]
    fn test_aggregate_notes_keeps_release_notes_when_tracks_blank() {
        let mut release_notes = "liner".to_string();
        let mut a = String::new();
        assert!(!aggregate_notes(&mut release_notes, &mut [&mut a]));
        assert_eq!(release_notes, "liner");
    }

    #[test]
    fn test_aggregate_unprocessed() {
        let mut release_tags = TagMap::new();
        let mut first = tags(&[("A", "AA"), ("B", "BB")]);
        let mut second = tags(&[("A", "AA"), ("C", "CC")]);
        let promoted =
            aggregate_unprocessed(&mut release_tags, &["1", "2"], &mut [&mut first, &mut second]);

        assert_eq!(promoted, 1);
        assert_eq!(release_tags, tags(&[("A", "AA")]));
        assert_eq!(first, tags(&[("B", "BB")]));
        assert_eq!(second, tags(&[("C", "CC")]));
    }

    #[test]
    fn test_aggregate_unprocessed_requires_positions() {
        let mut release_tags = TagMap::new();
        let mut first = tags(&[("A", "AA")]);
        let mut second = tags(&[("A", "AA")]);
        let promoted =
            aggregate_unprocessed(&mut release_tags, &["1", ""], &mut [&mut first, &mut second]);

        assert_eq!(promoted, 0);
        assert!(release_tags.is_empty());
        assert_eq!(first, tags(&[("A", "AA")]));
    }

    #[test]
    fn test_aggregate_unprocessed_same_key_different_values() {
        let mut release_tags = TagMap::new();
        let mut first = tags(&[("A", "1")]);
        let mut second = tags(&[("A", "2")]);
        assert_eq!(
            aggregate_unprocessed(&mut release_tags, &["1", "2"], &mut [&mut first, &mut second]),
            0
        );
        assert!(release_tags.is_empty());
    }

    #[test]
    fn test_report_is_noop() {
        assert!(AggregationReport::default().is_noop());
        let report = AggregationReport {
            actor_ids_hoisted: 1,
            ..Default::default()
        };
        assert!(!report.is_noop());
    }
}
