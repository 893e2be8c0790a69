//! # relmeta Core Library
//!
//! Music release metadata model and the algorithms working on it:
//! - Record tree: release, discs, tracks, recordings, works, publishing, pictures
//! - Actor directories (roles and external identifiers)
//! - Release identity scoring
//! - Hierarchical aggregation of track data into the release
//! - Ranking of candidate releases and service suggestions

mod codec;

pub mod actor;
pub mod aggregation;
pub mod audio;
pub mod disc;
pub mod ids;
pub mod mood;
pub mod picture;
pub mod publishing;
pub mod record;
pub mod release;
pub mod release_flags;
pub mod scoring;
pub mod similarity;
pub mod suggestion;
pub mod track;
pub mod work;

pub use actor::{ActorIdentities, ActorRoles};
pub use aggregation::{optimize, AggregationReport};
pub use disc::{Disc, DiscFormat, Media};
pub use picture::{Picture, PictureType};
pub use publishing::{Label, Publishing};
pub use record::Record;
pub use release::Release;
pub use scoring::{ReleaseScorer, ScoreBreakdown, SubScore};
pub use similarity::similarity;
pub use suggestion::{
    best_n_results, rank_releases, Assumption, Candidate, CandidatePayload, Scored, Suggestion,
};
pub use track::Track;
pub use work::{Lyrics, Work};
