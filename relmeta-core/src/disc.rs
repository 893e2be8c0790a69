//! Discs (physical or digital media) of a release

use crate::codec::string_enum;
use crate::ids::MediaIds;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Release medium
    Media {
        Sacd => "sacd",
        Cd => "cd",
        Digital => "digital",
        Reel => "reel",
        Lp => "lp",
    }
}

/// Markers used by download shops for lossless digital releases
const DIGITAL_MARKERS: [&str; 5] = [
    "[TR24][OF]",
    "[TR24][SM][OF]",
    "[DSD][OF]",
    "[DXD][OF]",
    "[DVDA][OF]",
];

impl Media {
    /// Guess the medium from free-form catalog text ("Vinyl", "2xCD", ...)
    pub fn from_description(text: &str) -> Media {
        let upper = text.trim().to_uppercase();
        if upper == "LP" || upper == "VINYL" {
            Media::Lp
        } else if upper.contains("SACD") {
            Media::Sacd
        } else if upper.contains("CD") {
            Media::Cd
        } else if DIGITAL_MARKERS.contains(&upper.as_str()) {
            Media::Digital
        } else if upper.contains("REEL") {
            Media::Reel
        } else {
            Media::Unset
        }
    }
}

/// Medium plus free-form format attributes ("180g", "Remastered", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscFormat {
    #[serde(default, skip_serializing_if = "Media::is_unset")]
    pub media: Media,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,
}

impl DiscFormat {
    pub fn new(media: Media) -> Self {
        Self {
            media,
            attrs: Vec::new(),
        }
    }

    /// 1.0 when both formats are present with the same known medium, else 0.0
    pub fn compare(format: Option<&DiscFormat>, other: Option<&DiscFormat>) -> f64 {
        match (format, other) {
            (Some(a), Some(b)) if !a.media.is_unset() && a.media == b.media => 1.0,
            _ => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_unset() && self.attrs.is_empty()
    }
}

/// A disc of a release; the disc a track sits on is derived from its position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disc {
    pub number: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DiscFormat>,
    #[serde(default, skip_serializing_if = "MediaIds::is_empty")]
    pub ids: MediaIds,
}

impl Disc {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Format block, created on first use
    pub fn format_mut(&mut self) -> &mut DiscFormat {
        self.format.get_or_insert_with(DiscFormat::default)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.format.as_ref().map_or(true, DiscFormat::is_empty)
            && self.ids.is_empty()
    }

    pub fn clean(&mut self) {
        if self.format.as_ref().is_some_and(DiscFormat::is_empty) {
            self.format = None;
        }
    }
}
