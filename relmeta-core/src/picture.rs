//! Pictures embedded in audio files or linked from catalogs

use crate::codec::{base64_bytes, is_zero, string_enum};
use serde::{Deserialize, Serialize};

string_enum! {
    /// ID3-style picture kind
    PictureType {
        PngIcon => "png_icon",
        OtherIcon => "other_icon",
        CoverFront => "cover_front",
        CoverBack => "cover_back",
        Leaflet => "leaflet",
        Media => "media",
        LeadArtist => "lead_artist" | "lad_artist",
        Artist => "artist",
        Conductor => "conductor",
        Orchestra => "orchestra",
        Composer => "composer",
        Lyricist => "lyricist",
        RecordingLocation => "recording_location",
        DuringRecording => "during_recording",
        DuringPerformance => "during_performance",
        MovieScreen => "movie_screen",
        BrightColorFish => "bright_color_fish",
        Illustration => "illustration",
        ArtistLogotype => "artist_logotype",
        PublisherLogotype => "publisher_logotype",
    }
}

/// Technical picture properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureMetadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub width: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub height: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub color_depth: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub colors: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u32,
}

impl PictureMetadata {
    pub fn is_empty(&self) -> bool {
        *self == PictureMetadata::default()
    }
}

/// A picture of some `PictureType`, either embedded (`data`) or linked (`cover_url`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(rename = "pict_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PictureMetadata>,
    #[serde(rename = "pict_type", default)]
    pub picture_type: PictureType,
    #[serde(rename = "description", default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cover_url: String,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "base64_bytes"
    )]
    pub data: Vec<u8>,
}

impl Picture {
    pub fn new(picture_type: PictureType) -> Self {
        Self {
            picture_type,
            ..Default::default()
        }
    }

    /// Whether the image itself travels with the record
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.meta.as_ref().map_or(true, PictureMetadata::is_empty)
            && self.picture_type.is_unset()
            && self.notes.is_empty()
            && self.cover_url.is_empty()
            && self.data.is_empty()
    }

    pub fn clean(&mut self) {
        if self.meta.as_ref().is_some_and(PictureMetadata::is_empty) {
            self.meta = None;
        }
    }
}
