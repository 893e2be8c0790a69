//! Actor directories
//!
//! An actor is any credited contributor (performer, composer, conductor,
//! engineer...). Two directories are kept per context (release, track,
//! recording, work), both keyed by actor name:
//! - `ActorRoles`: roles the actor holds in that context
//! - `ActorIdentities`: the actor's identifiers in external databases
//!
//! Names never map to empty placeholders once `clean` has run.

use crate::ids::{ActorIdKind, ActorIds};
use crate::similarity::similarity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ActorName = String;
pub type ActorRole = String;

/// Role marking an actor as a release performer
pub const PERFORMER_ROLE: &str = "performer";

/// Predicate selecting performers out of a role directory
pub fn is_performer(_name: &str, roles: &[ActorRole]) -> bool {
    roles.iter().any(|role| role == PERFORMER_ROLE)
}

/// Actor name → ordered, duplicate-free role list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorRoles(BTreeMap<ActorName, Vec<ActorRole>>);

impl ActorRoles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `role` for `name` unless already present; creates the entry if absent
    pub fn add_role(&mut self, name: &str, role: &str) {
        let roles = self.0.entry(name.to_string()).or_default();
        if !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }

    /// New directory holding only the entries accepted by `predicate`
    pub fn filter<P>(&self, predicate: P) -> ActorRoles
    where
        P: Fn(&str, &[ActorRole]) -> bool,
    {
        ActorRoles(
            self.0
                .iter()
                .filter(|(name, roles)| predicate(name, roles))
                .map(|(name, roles)| (name.clone(), roles.clone()))
                .collect(),
        )
    }

    /// Performer entries only
    pub fn performers(&self) -> ActorRoles {
        self.filter(is_performer)
    }

    /// Best pairwise name similarity between the two directories
    ///
    /// A single recognizably-same name dominates; 0.0 when either side is empty.
    pub fn compare(&self, other: &ActorRoles) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }
        let mut best = 0.0_f64;
        for name in self.0.keys() {
            for other_name in other.0.keys() {
                best = best.max(similarity(name, other_name));
            }
        }
        best
    }

    pub fn roles(&self, name: &str) -> Option<&[ActorRole]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// First actor name in key order
    pub fn first(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActorName, &Vec<ActorRole>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop actors whose role list is empty
    pub fn clean(&mut self) {
        self.0.retain(|_, roles| !roles.is_empty());
    }
}

impl FromIterator<(ActorName, Vec<ActorRole>)> for ActorRoles {
    fn from_iter<I: IntoIterator<Item = (ActorName, Vec<ActorRole>)>>(iter: I) -> Self {
        let mut roles = ActorRoles::new();
        for (name, list) in iter {
            for role in list {
                roles.add_role(&name, &role);
            }
        }
        roles
    }
}

/// Actor name → identifiers in external databases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorIdentities(BTreeMap<ActorName, ActorIds>);

impl ActorIdentities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an identifier; an existing value for the same kind is kept
    ///
    /// Returns `true` if the value was stored.
    pub fn add(&mut self, name: &str, kind: ActorIdKind, value: &str) -> bool {
        let ids = self.0.entry(name.to_string()).or_default();
        if ids.contains_key(&kind) {
            return false;
        }
        ids.insert(kind, value.to_string());
        true
    }

    /// Merge `other` in; first writer wins per (actor, kind)
    pub fn merge(&mut self, other: &ActorIdentities) {
        for (name, ids) in &other.0 {
            let target = self.0.entry(name.clone()).or_default();
            for (kind, value) in ids {
                target.entry(*kind).or_insert_with(|| value.clone());
            }
        }
    }

    /// Move every identifier of this directory into `parent`
    ///
    /// The parent keeps values it already holds for a given (actor, kind);
    /// moved pairs are removed from `self` either way, so `self` ends empty.
    /// Returns the number of pairs taken off `self`.
    pub fn hoist_into(&mut self, parent: &mut ActorIdentities) -> usize {
        let mut moved = 0;
        for (name, ids) in std::mem::take(&mut self.0) {
            let target = parent.0.entry(name).or_default();
            for (kind, value) in ids {
                target.entry(kind).or_insert(value);
                moved += 1;
            }
        }
        moved
    }

    pub fn ids(&self, name: &str) -> Option<&ActorIds> {
        self.0.get(name)
    }

    pub fn get(&self, name: &str, kind: ActorIdKind) -> Option<&str> {
        self.0.get(name)?.get(&kind).map(String::as_str)
    }

    /// First actor name in key order
    pub fn first(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<ActorIds> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActorName, &ActorIds)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop actors without identifiers
    pub fn clean(&mut self) {
        self.0.retain(|_, ids| !ids.is_empty());
    }
}

impl FromIterator<(ActorName, ActorIds)> for ActorIdentities {
    fn from_iter<I: IntoIterator<Item = (ActorName, ActorIds)>>(iter: I) -> Self {
        let mut identities = ActorIdentities::new();
        for (name, ids) in iter {
            for (kind, value) in ids {
                identities.add(&name, kind, &value);
            }
        }
        identities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_ids_add() {
        let mut actors = ActorIdentities::new();
        assert!(actors.add("John Doe", ActorIdKind::MusicbrainzAlbumArtistId, "12345"));
        assert_eq!(actors.len(), 1);
        assert!(!actors.add("John Doe", ActorIdKind::MusicbrainzAlbumArtistId, "99999"));
        assert_eq!(actors.ids("John Doe").unwrap().len(), 1);
        assert_eq!(
            actors.get("John Doe", ActorIdKind::MusicbrainzAlbumArtistId),
            Some("12345")
        );

        actors.add("Nemo", ActorIdKind::MusicbrainzAlbumArtistId, "234567");
        actors.add("Nemo", ActorIdKind::MusicbrainzOriginalArtistId, "abcdefg");
        assert_eq!(actors.len(), 2);
        assert_eq!(actors.ids("Nemo").unwrap().len(), 2);
    }

    #[test]
    fn test_actor_ids_merge_first_writer_wins() {
        let mut a1 = ActorIdentities::new();
        a1.add("John Doe", ActorIdKind::MusicbrainzAlbumArtistId, "12345");
        a1.add("Nemo", ActorIdKind::MusicbrainzAlbumArtistId, "abcd");

        let mut a2 = ActorIdentities::new();
        a2.add("John Doe", ActorIdKind::MusicbrainzOriginalArtistId, "zyxwv");
        a2.add("Nemo", ActorIdKind::MusicbrainzAlbumArtistId, "other");
        a2.add("Newcomer", ActorIdKind::DiscogsArtistId, "42");

        a1.merge(&a2);
        assert_eq!(a1.ids("John Doe").unwrap().len(), 2);
        assert_eq!(a1.get("Nemo", ActorIdKind::MusicbrainzAlbumArtistId), Some("abcd"));
        assert_eq!(a1.get("Newcomer", ActorIdKind::DiscogsArtistId), Some("42"));
    }

    #[test]
    fn test_hoist_into_empties_source() {
        let mut parent = ActorIdentities::new();
        parent.add("Nemo", ActorIdKind::DiscogsArtistId, "first");

        let mut child = ActorIdentities::new();
        child.add("Nemo", ActorIdKind::DiscogsArtistId, "second");
        child.add("Nemo", ActorIdKind::MusicbrainzArtistId, "mb");

        assert_eq!(child.hoist_into(&mut parent), 2);
        assert!(child.is_empty());
        assert_eq!(parent.get("Nemo", ActorIdKind::DiscogsArtistId), Some("first"));
        assert_eq!(parent.get("Nemo", ActorIdKind::MusicbrainzArtistId), Some("mb"));
    }

    #[test]
    fn test_actor_roles_add() {
        let mut roles = ActorRoles::new();
        roles.add_role("John Doe", "performer");
        assert_eq!(roles.len(), 1);
        roles.add_role("John Doe", "performer");
        assert_eq!(roles.roles("John Doe").unwrap().len(), 1);
        roles.add_role("John Doe", "conductor");
        assert_eq!(roles.roles("John Doe").unwrap(), ["performer", "conductor"]);
    }

    #[test]
    fn test_actor_roles_filter() {
        let mut roles = ActorRoles::new();
        roles.add_role("John Doe", "performer");
        roles.add_role("Jane Roe", "engineer");
        let performers = roles.filter(is_performer);
        assert_eq!(performers.len(), 1);
        assert_eq!(performers.first(), Some("John Doe"));
    }

    #[test]
    fn test_actor_roles_compare() {
        let mut left = ActorRoles::new();
        let right = ActorRoles::new();
        assert_eq!(left.compare(&right), 0.0);

        left.add_role("Miles Davis", "performer");
        assert_eq!(left.compare(&right), 0.0);

        let mut right = ActorRoles::new();
        right.add_role("John Coltrane", "performer");
        right.add_role("Miles Davis", "performer");
        assert_eq!(left.compare(&right), 1.0);
    }

    #[test]
    fn test_actor_roles_first() {
        let mut roles = ActorRoles::new();
        assert_eq!(roles.first(), None);
        roles.add_role("Nemo", "soloist");
        roles.add_role("John Doe", "performer");
        assert_eq!(roles.first(), Some("John Doe"));
    }

    #[test]
    fn test_clean_prunes_empty_entries() {
        let mut ids: ActorIdentities = [
            ("Nemo".to_string(), ActorIds::new()),
            (
                "John Doe".to_string(),
                ActorIds::from([(ActorIdKind::DiscogsArtistId, "1".to_string())]),
            ),
        ]
        .into_iter()
        .collect();
        // FromIterator only creates entries that carry identifiers
        assert_eq!(ids.len(), 1);
        ids.clean();
        assert_eq!(ids.first(), Some("John Doe"));

        let mut roles: ActorRoles =
            serde_json::from_str(r#"{"Nemo": [], "Jane": ["performer"]}"#).unwrap();
        roles.clean();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles.first(), Some("Jane"));
    }

    #[test]
    fn test_actor_ids_marshal() {
        let mut ids = ActorIdentities::new();
        ids.add("Nemo", ActorIdKind::MusicbrainzArtistId, "12345");
        assert_eq!(
            serde_json::to_string(&ids).unwrap(),
            r#"{"Nemo":{"musicbrainz_artist_id":"12345"}}"#
        );
        let decoded: ActorIdentities =
            serde_json::from_str(r#"{"Nemo": {"musicbrainz_artist_id": "12345"}}"#).unwrap();
        assert_eq!(decoded, ids);
    }
}
