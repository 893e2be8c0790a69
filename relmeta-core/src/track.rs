//! Tracks: position, title and everything attached to one release slot

use crate::actor::{ActorIdentities, ActorRoles};
use crate::audio::{AudioInfo, FileInfo};
use crate::ids::{RecordingIdKind, TrackIds};
use crate::record::Record;
use crate::similarity::similarity;
use crate::work::Work;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common track metadata plus file and audio properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub position: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(rename = "composition", default, skip_serializing_if = "Option::is_none")]
    pub work: Option<Work>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
    #[serde(default, skip_serializing_if = "ActorIdentities::is_empty")]
    pub actors: ActorIdentities,
    #[serde(default, skip_serializing_if = "ActorRoles::is_empty")]
    pub actor_roles: ActorRoles,
    #[serde(default, skip_serializing_if = "TrackIds::is_empty")]
    pub ids: TrackIds,
    /// Vendor tags with no dedicated field
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unprocessed: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_info: Option<AudioInfo>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track read from a file
    pub fn from_file(file_name: &str, mod_time: i64) -> Self {
        Self {
            file_info: Some(FileInfo {
                file_name: file_name.to_string(),
                mod_time,
                file_size: 0,
            }),
            ..Default::default()
        }
    }

    /// Append a comment to the notes, one comment per line
    pub fn add_comment(&mut self, comment: &str) {
        if !self.notes.is_empty() {
            self.notes.push('\n');
        }
        self.notes.push_str(comment);
    }

    pub fn add_unprocessed(&mut self, key: &str, value: &str) {
        self.unprocessed.insert(key.to_string(), value.to_string());
    }

    pub fn set_position(&mut self, position: &str) {
        self.position = normalize_position(position);
    }

    pub fn set_lyrics(&mut self, text: &str, is_synchronized: bool) {
        let lyrics = self.work_mut().lyrics_mut();
        lyrics.text = text.to_string();
        lyrics.is_synchronized = is_synchronized;
    }

    pub fn set_lyrics_language(&mut self, language: &str) {
        self.work_mut().lyrics_mut().language = language.to_string();
    }

    /// ISRC belongs to the recording
    pub fn set_isrc(&mut self, isrc: &str) {
        self.record_mut()
            .ids
            .insert(RecordingIdKind::Isrc, isrc.to_string());
    }

    pub fn work_mut(&mut self) -> &mut Work {
        self.work.get_or_insert_with(Work::default)
    }

    pub fn record_mut(&mut self) -> &mut Record {
        self.record.get_or_insert_with(Record::default)
    }

    /// Title similarity
    pub fn compare(&self, other: &Track) -> f64 {
        similarity(&self.title, &other.title)
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
            && self.title.is_empty()
            && self.notes.is_empty()
            && self.work.as_ref().map_or(true, Work::is_empty)
            && self.record.as_ref().map_or(true, Record::is_empty)
            && self.actors.is_empty()
            && self.actor_roles.is_empty()
            && self.ids.is_empty()
            && self.unprocessed.is_empty()
            && self.file_info.as_ref().map_or(true, FileInfo::is_empty)
            && self.audio_info.as_ref().map_or(true, AudioInfo::is_empty)
    }

    /// Drop structurally empty attributes
    pub fn clean(&mut self) {
        if let Some(work) = self.work.as_mut() {
            work.clean();
            if work.is_empty() {
                self.work = None;
            }
        }
        if let Some(record) = self.record.as_mut() {
            record.clean();
            if record.is_empty() {
                self.record = None;
            }
        }
        self.actors.clean();
        self.actor_roles.clean();
        if self.file_info.as_ref().is_some_and(FileInfo::is_empty) {
            self.file_info = None;
        }
        if self.audio_info.as_ref().is_some_and(AudioInfo::is_empty) {
            self.audio_info = None;
        }
    }
}

/// Disc number implied by a track position
///
/// - `""` → 1
/// - `"2-5"`, `"2.10"`, `"3 - 1"` → leading number (1 if not numeric)
/// - vinyl sides: `A`/`B` → 1, `C`/`D` → 2, ...
/// - anything else → 1
pub fn disc_number_by_track_pos(position: &str) -> u32 {
    let fields: Vec<&str> = position
        .split(['-', '.'])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();
    if fields.len() == 2 {
        return fields[0].parse().unwrap_or(1);
    }
    match position.trim().bytes().next() {
        Some(side) if side.is_ascii_uppercase() => u32::from(side - b'A') / 2 + 1,
        _ => 1,
    }
}

/// Pad single-digit positions: `"1"` → `"01"`
pub fn normalize_position(position: &str) -> String {
    if position.len() == 1 && position.bytes().all(|b| b.is_ascii_digit()) {
        format!("0{}", position)
    } else {
        position.to_string()
    }
}

/// Position of a sub-track (movement)
pub fn complex_position(position: &str, sub_position: &str) -> String {
    format!("{}.{}", position, sub_position)
}

/// Title of a sub-track (movement)
pub fn complex_title(title: &str, sub_title: &str) -> String {
    format!("{}. {}", title, sub_title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TrackIdKind;

    #[test]
    fn test_disc_number_by_track_pos() {
        let cases = [
            ("A1", 1),
            ("B2", 1),
            ("C3", 2),
            ("D4", 2),
            ("E5", 3),
            ("", 1),
            ("1", 1),
            ("2.10", 2),
            ("3 - 1", 3),
            ("A.2", 1),
        ];
        for (position, expected) in cases {
            assert_eq!(disc_number_by_track_pos(position), expected, "for '{}'", position);
        }
    }

    #[test]
    fn test_complex_position_and_title() {
        assert_eq!(complex_position("1", "1"), "1.1");
        assert_eq!(
            complex_title("Sym.5 in C minor, op.67", "1. Allegro con brio"),
            "Sym.5 in C minor, op.67. 1. Allegro con brio"
        );
    }

    #[test]
    fn test_add_comment() {
        let mut track = Track::new();
        track.add_comment("1st comment");
        assert_eq!(track.notes, "1st comment");
        track.add_comment("2nd comment");
        assert_eq!(track.notes, "1st comment\n2nd comment");
    }

    #[test]
    fn test_set_position() {
        let mut track = Track::new();
        track.set_position("");
        assert!(track.position.is_empty());
        track.set_position("1");
        assert_eq!(track.position, "01");
        track.set_position("12");
        assert_eq!(track.position, "12");
    }

    #[test]
    fn test_set_lyrics_and_isrc() {
        let mut track = Track::new();
        track.set_lyrics("Bla-bla", false);
        track.set_lyrics_language("eng");
        let lyrics = track.work.as_ref().and_then(|w| w.lyrics.as_ref()).unwrap();
        assert_eq!(lyrics.text, "Bla-bla");
        assert_eq!(lyrics.language, "eng");

        track.set_isrc("USRC17607839");
        assert_eq!(
            track.record.as_ref().unwrap().ids.get(&RecordingIdKind::Isrc).unwrap(),
            "USRC17607839"
        );
    }

    #[test]
    fn test_clean_drops_empty_blocks() {
        let mut track = Track::from_file("", 0);
        track.work_mut();
        track.record_mut();
        track.audio_info = Some(AudioInfo::default());
        track.clean();
        assert!(track.work.is_none());
        assert!(track.record.is_none());
        assert!(track.file_info.is_none());
        assert!(track.audio_info.is_none());
        assert!(track.is_empty());
    }

    #[test]
    fn test_track_ids_marshal() {
        let mut track = Track::new();
        track.ids.insert(TrackIdKind::MusicbrainzTrackId, "12345".to_string());
        assert_eq!(
            serde_json::to_string(&track).unwrap(),
            r#"{"ids":{"musicbrainz_track_id":"12345"}}"#
        );
        assert!(serde_json::from_str::<Track>(r#"{"ids": {"unknown": "0"}}"#).is_err());
    }
}
