//! Technical properties of a track file

use crate::codec::is_zero;
use serde::{Deserialize, Serialize};

/// File system facts about a track file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    /// Modification time (Unix seconds)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub mod_time: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub file_size: i64,
}

impl FileInfo {
    pub fn is_empty(&self) -> bool {
        *self == FileInfo::default()
    }
}

/// Decoded stream properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioInfo {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub samplerate: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub avg_bitrate: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub channels: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub sample_size: u32,
}

impl AudioInfo {
    pub fn is_empty(&self) -> bool {
        *self == AudioInfo::default()
    }
}

