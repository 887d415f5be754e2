use crate::dataset::Emotion;

/// Extract the emotion category from a source file name.
///
/// The category is the part of the name before the first `.`, so
/// `happiness.jpg` and `happiness.v2.jpg` both map to happiness. Returns
/// `None` when that part is not one of the seven known labels; callers
/// treat that as "skip this file".
pub fn parse_emotion_label(file_name: &str) -> Option<Emotion> {
    let label = file_name.split('.').next().unwrap_or("");
    match label {
        "anger" => Some(Emotion::Anger),
        "disgust" => Some(Emotion::Disgust),
        "fear" => Some(Emotion::Fear),
        "happiness" => Some(Emotion::Happiness),
        "neutral" => Some(Emotion::Neutral),
        "sadness" => Some(Emotion::Sadness),
        "surprise" => Some(Emotion::Surprise),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_known_labels() {
        for emotion in Emotion::ALL {
            let file_name = format!("{}.jpg", emotion.as_str());
            assert_eq!(parse_emotion_label(&file_name), Some(emotion));
        }
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(parse_emotion_label("unknown.jpg"), None);
        assert_eq!(parse_emotion_label("happy.jpg"), None);
    }

    #[test]
    fn test_parse_stops_at_first_dot() {
        assert_eq!(parse_emotion_label("happiness.v2.jpg"), Some(Emotion::Happiness));
        assert_eq!(parse_emotion_label("anger.backup.jpg"), Some(Emotion::Anger));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(parse_emotion_label("Anger.jpg"), None);
        assert_eq!(parse_emotion_label("HAPPINESS.jpg"), None);
    }

    #[test]
    fn test_parse_empty_stem() {
        assert_eq!(parse_emotion_label(".jpg"), None);
        assert_eq!(parse_emotion_label(""), None);
    }

    #[test]
    fn test_parse_rejects_generated_names() {
        // Names the organizer itself produces are not valid input labels.
        assert_eq!(parse_emotion_label("happiness_male_1.jpg"), None);
    }
}
