//! Recording facts of a performance

use crate::actor::{ActorIdentities, ActorRoles};
use crate::codec::is_zero;
use crate::ids::RecordingIds;
use crate::mood::Mood;
use serde::{Deserialize, Serialize};

/// Recording of a work: who played, how long, how it feels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Duration in milliseconds
    #[serde(default, skip_serializing_if = "is_zero")]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "ActorIdentities::is_empty")]
    pub actors: ActorIdentities,
    #[serde(default, skip_serializing_if = "ActorRoles::is_empty")]
    pub actor_roles: ActorRoles,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moods: Vec<Mood>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "RecordingIds::is_empty")]
    pub ids: RecordingIds,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_role(&mut self, name: &str, role: &str) {
        self.actor_roles.add_role(name, role);
    }

    pub fn performers(&self) -> ActorRoles {
        self.actor_roles.performers()
    }

    pub fn is_empty(&self) -> bool {
        *self == Record::default()
    }

    /// Prune empty actor entries and moods that failed to decode
    pub fn clean(&mut self) {
        self.actors.clean();
        self.actor_roles.clean();
        self.moods.retain(|mood| !mood.is_unset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_performers() {
        let mut record = Record::new();
        record.add_role("Miles Davis", "performer");
        record.add_role("Marcus Miller", "guitar");
        record.add_role("Milt Jackson", "performer");
        assert_eq!(record.performers().len(), 2);
    }

    #[test]
    fn test_record_is_empty_and_clean() {
        let mut record: Record =
            serde_json::from_str(r#"{"moods": ["gloomy"], "actors": {"Nemo": {}}}"#).unwrap();
        assert!(!record.is_empty());
        record.clean();
        assert!(record.is_empty());
    }
}
