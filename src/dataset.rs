use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// The seven emotion categories the organizer recognizes. The lowercase
/// string form doubles as the input filename stem and the output
/// subdirectory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Happiness,
    Neutral,
    Sadness,
    Surprise,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happiness,
        Emotion::Neutral,
        Emotion::Sadness,
        Emotion::Surprise,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happiness => "happiness",
            Emotion::Neutral => "neutral",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    pub fn as_str(&self) -> &str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

/// Gender tag used in output filenames. Drawn at random per file; it is
/// a naming artifact, not a property read from the image or its
/// directory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// A candidate image found under the source root.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: PathBuf,
    pub file_name: String,
    /// Name of the directory the file sits in (a subject folder such as
    /// `person1` or `man_sub1`). Surfaced in diagnostics only; it never
    /// feeds into output naming.
    pub subject: Option<String>,
}

/// Lazily enumerate every `.jpg` file under `root`, at any depth.
///
/// The extension check is case-sensitive, so `anger.JPG` is not a
/// candidate. Traversal order is platform dependent; unreadable
/// subdirectories and non-UTF-8 file names are skipped.
pub fn scan_source(root: &Path) -> impl Iterator<Item = SourceImage> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_str()?.to_string();
            if !file_name.ends_with(".jpg") {
                return None;
            }
            let subject = entry
                .path()
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned());
            Some(SourceImage {
                path: entry.into_path(),
                file_name,
                subject,
            })
        })
}
