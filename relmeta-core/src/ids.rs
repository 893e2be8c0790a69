//! External database identifier kinds
//!
//! Each record family has its own closed set of identifier kinds. They are
//! stored as keys of ordered maps and serialized as snake_case JSON object
//! keys; an unknown key fails decoding.

use crate::codec::id_kind;
use std::collections::BTreeMap;

id_kind! {
    /// Actor identifiers in external databases
    ActorIdKind {
        DiscogsArtistId => "discogs_artist_id",
        MusicbrainzAlbumArtistId => "musicbrainz_album_artist_id",
        MusicbrainzArtistId => "musicbrainz_artist_id",
        MusicbrainzOriginalArtistId => "musicbrainz_original_artist_id",
    }
}

id_kind! {
    /// Release identifiers in external databases
    ReleaseIdKind {
        DiscogsReleaseId => "discogs_release_id",
        DiscogsMasterId => "discogs_master_id",
        MusicbrainzAlbumId => "musicbrainz_album_id",
        MusicbrainzOriginalAlbumId => "musicbrainz_original_album_id",
        MusicbrainzReleaseGroupId => "musicbrainz_release_group_id",
        Rutracker => "rutracker",
        AccurateRip => "accurate_rip",
        Asin => "asin",
    }
}

id_kind! {
    /// Trade label identifiers
    LabelIdKind {
        DiscogsLabelId => "discogs_label_id",
        MusicbrainzLabelId => "musicbrainz_label_id",
    }
}

id_kind! {
    /// Publishing identifiers (UPC/EAN barcode)
    PublishingIdKind {
        Barcode => "barcode",
    }
}

id_kind! {
    /// Physical medium identifiers
    MediaIdKind {
        DiscId => "disc_id",
    }
}

id_kind! {
    /// Recording identifiers
    RecordingIdKind {
        MusicbrainzRecordingId => "musicbrainz_recording_id",
        Isrc => "isrc",
    }
}

id_kind! {
    /// Composition identifiers
    WorkIdKind {
        MusicbrainzWorkId => "musicbrainz_work_id",
    }
}

id_kind! {
    /// Release track identifiers
    TrackIdKind {
        MusicbrainzTrackId => "musicbrainz_track_id",
    }
}

/// Identifier set of one actor
pub type ActorIds = BTreeMap<ActorIdKind, String>;
pub type ReleaseIds = BTreeMap<ReleaseIdKind, String>;
pub type LabelIds = BTreeMap<LabelIdKind, String>;
pub type PublishingIds = BTreeMap<PublishingIdKind, String>;
pub type MediaIds = BTreeMap<MediaIdKind, String>;
pub type RecordingIds = BTreeMap<RecordingIdKind, String>;
pub type WorkIds = BTreeMap<WorkIdKind, String>;
pub type TrackIds = BTreeMap<TrackIdKind, String>;
