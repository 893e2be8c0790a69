//! Release: the root of the record tree
//!
//! A release is one commercial publication of an album. It owns its discs
//! and tracks, the publishing block, release-level actor directories and
//! identifiers, pictures and the vendor tags nothing else models. An optional
//! `original` snapshot keeps the pre-edit state for provenance comparisons.

use crate::actor::{ActorIdentities, ActorRoles};
use crate::aggregation::{self, AggregationReport};
use crate::codec::is_zero;
use crate::disc::Disc;
use crate::ids::ReleaseIds;
use crate::picture::{Picture, PictureType};
use crate::publishing::Publishing;
use crate::release_flags::{ReleaseOrigin, ReleaseRemake, ReleaseRepeat, ReleaseStatus, ReleaseType};
use crate::track::Track;
use relmeta_common::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_discs: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discs: Vec<Disc>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub total_tracks: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracks: Vec<Track>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishing: Option<Publishing>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub year: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "ReleaseStatus::is_unset")]
    pub release_status: ReleaseStatus,
    #[serde(default, skip_serializing_if = "ReleaseType::is_unset")]
    pub release_type: ReleaseType,
    #[serde(default, skip_serializing_if = "ReleaseRepeat::is_unset")]
    pub release_repeat: ReleaseRepeat,
    #[serde(default, skip_serializing_if = "ReleaseRemake::is_unset")]
    pub release_remake: ReleaseRemake,
    #[serde(default, skip_serializing_if = "ReleaseOrigin::is_unset")]
    pub release_origin: ReleaseOrigin,
    #[serde(default, skip_serializing_if = "ActorIdentities::is_empty")]
    pub actors: ActorIdentities,
    #[serde(rename = "actors_roles", default, skip_serializing_if = "ActorRoles::is_empty")]
    pub actor_roles: ActorRoles,
    #[serde(default, skip_serializing_if = "ReleaseIds::is_empty")]
    pub ids: ReleaseIds,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pictures: Vec<Picture>,
    /// Vendor tag pairs with no dedicated field
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unprocessed: BTreeMap<String, String>,
    /// Pre-edit snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<Box<Release>>,
}

impl Release {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Disc with the 1-based `number`, creating it and any missing lower discs
    ///
    /// Number 0 is treated as 1.
    pub fn disc_mut(&mut self, number: u32) -> &mut Disc {
        let number = number.max(1);
        while self.discs.len() < number as usize {
            let next = self.discs.len() as u32 + 1;
            self.discs.push(Disc::new(next));
        }
        &mut self.discs[number as usize - 1]
    }

    pub fn track_by_position(&self, position: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.position == position)
    }

    /// Front cover picture, if any
    pub fn cover(&self) -> Option<&Picture> {
        self.pictures
            .iter()
            .find(|picture| picture.picture_type == PictureType::CoverFront)
    }

    pub fn publishing_mut(&mut self) -> &mut Publishing {
        self.publishing.get_or_insert_with(Publishing::default)
    }

    /// Promote redundant track data to the release, then prune
    pub fn optimize(&mut self) -> AggregationReport {
        aggregation::optimize(self)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.total_discs == 0
            && self.discs.iter().all(Disc::is_empty)
            && self.total_tracks == 0
            && self.tracks.iter().all(Track::is_empty)
            && self.publishing.as_ref().map_or(true, Publishing::is_empty)
            && self.country.is_empty()
            && self.year == 0
            && self.notes.is_empty()
            && self.release_status.is_unset()
            && self.release_type.is_unset()
            && self.release_repeat.is_unset()
            && self.release_remake.is_unset()
            && self.release_origin.is_unset()
            && self.actors.is_empty()
            && self.actor_roles.is_empty()
            && self.ids.is_empty()
            && self.pictures.iter().all(Picture::is_empty)
            && self.unprocessed.is_empty()
            && self.original.as_ref().map_or(true, |original| original.is_empty())
    }

    /// Recursively drop structurally empty attributes
    ///
    /// Discs are kept even when empty: their index carries the disc number.
    pub fn clean(&mut self) {
        for disc in &mut self.discs {
            disc.clean();
        }
        for track in &mut self.tracks {
            track.clean();
        }
        if let Some(publishing) = self.publishing.as_mut() {
            publishing.clean();
            if publishing.is_empty() {
                self.publishing = None;
            }
        }
        self.actors.clean();
        self.actor_roles.clean();
        for picture in &mut self.pictures {
            picture.clean();
        }
        self.pictures.retain(|picture| !picture.is_empty());
        if let Some(original) = self.original.as_mut() {
            original.clean();
            if original.is_empty() {
                self.original = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ReleaseIdKind;

    #[test]
    fn test_disc_mut_fills_gaps() {
        let mut release = Release::new();
        release.disc_mut(3).title = "Third".to_string();
        assert_eq!(release.discs.len(), 3);
        let numbers: Vec<u32> = release.discs.iter().map(|d| d.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(release.discs[2].title, "Third");

        release.disc_mut(1);
        assert_eq!(release.discs.len(), 3);
        release.disc_mut(0);
        assert_eq!(release.discs.len(), 3);
    }

    #[test]
    fn test_track_by_position() {
        let mut release = Release::new();
        let mut track = Track::new();
        track.set_position("1");
        track.title = "Intro".to_string();
        release.tracks.push(track);

        assert_eq!(release.track_by_position("01").map(|t| t.title.as_str()), Some("Intro"));
        assert!(release.track_by_position("02").is_none());
    }

    #[test]
    fn test_cover() {
        let mut release = Release::new();
        assert!(release.cover().is_none());
        release.pictures.push(Picture::new(PictureType::CoverBack));
        release.pictures.push(Picture::new(PictureType::CoverFront));
        assert_eq!(release.cover().map(|p| p.picture_type), Some(PictureType::CoverFront));
    }

    #[test]
    fn test_clean_prunes_recursively() {
        let mut release = Release::new();
        release.publishing_mut();
        release.disc_mut(1).format_mut();
        release.tracks.push(Track::from_file("", 0));
        release.pictures.push(Picture::default());
        release.original = Some(Box::new(Release::new()));

        release.clean();

        assert!(release.publishing.is_none());
        assert!(release.discs[0].format.is_none());
        assert!(release.tracks[0].file_info.is_none());
        assert!(release.pictures.is_empty());
        assert!(release.original.is_none());
        assert!(release.is_empty());
    }

    #[test]
    fn test_json_roundtrip_omits_empty_fields() {
        let mut release = Release::new();
        release.title = "Kind of Blue".to_string();
        release.year = 1959;
        release.release_status = ReleaseStatus::Official;
        release.ids.insert(ReleaseIdKind::DiscogsReleaseId, "123".to_string());
        release.actor_roles.add_role("Miles Davis", "performer");

        let json = release.to_json_pretty().unwrap();
        assert!(json.contains("\"actors_roles\""));
        assert!(!json.contains("\"tracks\""));
        assert!(!json.contains("\"release_type\""));

        let decoded = Release::from_json(&json).unwrap();
        assert_eq!(decoded, release);
    }

    #[test]
    fn test_from_json_permissive_enums_strict_ids() {
        let json = r#"{"title": "X", "release_status": "oficial", "release_type": "mixtape"}"#;
        let release = Release::from_json(json).unwrap();
        assert_eq!(release.release_status, ReleaseStatus::Official);
        assert!(release.release_type.is_unset());

        assert!(Release::from_json(r#"{"ids": {"spotify": "1"}}"#).is_err());
    }
}
