//! Listening mood of a recording

use crate::codec::string_enum;

string_enum! {
    /// Mood evoked when listening to a track or album
    Mood {
        Happy => "happy",
        Exuberant => "exuberant",
        Energetic => "energetic",
        Frantic => "frantic",
        AnxiousSad => "anxious_sad",
        Depression => "depression",
        Calm => "calm",
        Contentment => "contentment",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_from_name() {
        assert_eq!(Mood::decode("unknown"), Mood::Unset);
        assert_eq!(Mood::decode("happy"), Mood::Happy);
    }

    #[test]
    fn test_mood_marshal_and_unmarshal() {
        assert_eq!(serde_json::to_string(&Mood::Unset).unwrap(), r#""""#);
        let json = serde_json::to_string(&Mood::Calm).unwrap();
        assert_eq!(json, r#""calm""#);
        assert_eq!(serde_json::from_str::<Mood>(&json).unwrap(), Mood::Calm);
    }
}
