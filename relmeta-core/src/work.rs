//! Compositions (works) independent of any recording

use crate::actor::{ActorIdentities, ActorRoles};
use crate::codec::is_zero;
use crate::ids::WorkIds;
use serde::{Deserialize, Serialize};

/// Text of a song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// ISO 639-2 three-letter code
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_synchronized: bool,
}

impl Lyrics {
    pub fn is_empty(&self) -> bool {
        *self == Lyrics::default()
    }
}

/// A whole work or one part of it (a movement)
///
/// `position` orders parts within cycles, trilogies and the like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(rename = "index", default, skip_serializing_if = "is_zero")]
    pub position: u32,
    #[serde(default, skip_serializing_if = "ActorIdentities::is_empty")]
    pub actors: ActorIdentities,
    #[serde(default, skip_serializing_if = "ActorRoles::is_empty")]
    pub actor_roles: ActorRoles,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<Lyrics>,
    /// ISWC and friends
    #[serde(default, skip_serializing_if = "WorkIds::is_empty")]
    pub ids: WorkIds,
}

impl Work {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lyrics block, created on first use
    pub fn lyrics_mut(&mut self) -> &mut Lyrics {
        self.lyrics.get_or_insert_with(Lyrics::default)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.position == 0
            && self.actors.is_empty()
            && self.actor_roles.is_empty()
            && self.notes.is_empty()
            && self.lyrics.as_ref().map_or(true, Lyrics::is_empty)
            && self.ids.is_empty()
    }

    pub fn clean(&mut self) {
        self.actors.clean();
        self.actor_roles.clean();
        if self.lyrics.as_ref().is_some_and(Lyrics::is_empty) {
            self.lyrics = None;
        }
    }
}
