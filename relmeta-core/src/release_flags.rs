//! Release classification flags
//!
//! Catalogs describe a release with loose property lists ("Album",
//! "Reissue", "Live", ...). Each flag family decodes permissively so noisy
//! catalog text never fails ingestion.

use crate::codec::string_enum;

string_enum! {
    /// Commercial status of a release
    ReleaseStatus {
        Official => "official" | "oficial",
        Contrafact => "contrafact",
        Bootleg => "bootleg",
        Demonstration => "demonstration",
        Promotion => "promotion",
        Sampler => "sampler",
        Upcoming => "upcoming",
        Outtake => "outtake",
    }
}

string_enum! {
    /// Release size class
    ReleaseType {
        Single => "single",
        MaxiSingle => "maxisingle",
        MiniAlbum => "minialbum",
        Album => "album",
    }
}

string_enum! {
    /// How a release repeats earlier material
    ReleaseRepeat {
        Repress => "repress",
        Reissue => "reissue",
        Compilation => "compilation",
        Discography => "discography",
        Remake => "remake",
    }
}

string_enum! {
    /// Kind of reworking of earlier material
    ReleaseRemake {
        Remastered => "remastered",
        Tribute => "tribute",
        Cover => "cover",
        Remix => "remix",
    }
}

string_enum! {
    /// Where the material was recorded
    ReleaseOrigin {
        Studio => "studio",
        Live => "live",
        Rehearsal => "rehearsal",
        Home => "home",
        FieldRecording => "fieldrecording",
        Radio => "radio",
        Tv => "tv",
    }
}
