//! One-shot organizer that copies labeled face images into a train/test
//! tree grouped by emotion.
//!
//! Source files named `<emotion>.jpg` are assigned a split by weighted
//! coin flip and renamed `<emotion>_<gender>_<count>.jpg`, where the
//! gender tag is random and the count continues from whatever the target
//! tree already holds.

use std::collections::HashMap;
use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::OrganizeConfig;
use crate::dataset::{scan_source, Emotion, Gender, Split};
use crate::file_ops::{copy_file, count_dir_entries, ensure_dir, OrganizeResult};
use crate::label_parser::parse_emotion_label;

/// Counts reported back to the caller after a run.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    pub copied: usize,
    pub skipped: usize,
    pub train: usize,
    pub test: usize,
}

pub struct DatasetOrganizer {
    config: OrganizeConfig,
    rng: ChaCha8Rng,
    /// Per-emotion totals across both splits, seeded from the live target
    /// tree at the start of a run and advanced in-process afterwards.
    counts: HashMap<Emotion, usize>,
}

impl DatasetOrganizer {
    pub fn new(config: OrganizeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            counts: HashMap::new(),
        }
    }

    /// Ensure all 14 `<target>/<split>/<emotion>` directories exist.
    /// Safe to call when they already do; nothing is touched in that
    /// case.
    pub fn prepare_target_layout(&self) -> OrganizeResult<()> {
        for emotion in Emotion::ALL {
            for split in Split::ALL {
                ensure_dir(&self.split_dir(split, emotion))?;
            }
        }
        Ok(())
    }

    /// Perform the full organize pass: scaffold the target tree, seed
    /// the counters, then walk the source and copy every recognizable
    /// image.
    ///
    /// Stops at the first copy failure; files already copied stay in
    /// place, and a later run picks the numbering up where this one
    /// ended.
    pub fn run(&mut self) -> OrganizeResult<OrganizeSummary> {
        info!(
            "Organizing {:?} into {:?} (train ratio {})",
            self.config.source_dir, self.config.target_dir, self.config.train_ratio
        );

        self.prepare_target_layout()?;
        self.load_counts()?;

        let mut summary = OrganizeSummary::default();
        let source_dir = self.config.source_dir.clone();

        for image in scan_source(&source_dir) {
            let emotion = match parse_emotion_label(&image.file_name) {
                Some(emotion) => emotion,
                None => {
                    debug!("Skipping {:?}: not a known emotion label", image.path);
                    summary.skipped += 1;
                    continue;
                }
            };

            let gender = draw_gender(&mut self.rng);
            let count = self.counts.get(&emotion).copied().unwrap_or(0) + 1;
            let split = draw_split(&mut self.rng, self.config.train_ratio);

            let new_name = format!("{}_{}_{}.jpg", emotion.as_str(), gender.as_str(), count);
            let dest = self.split_dir(split, emotion).join(&new_name);

            copy_file(&image.path, &dest)?;
            debug!(
                "Copied {:?} (subject {:?}) as {}/{}/{}",
                image.path,
                image.subject,
                split.as_str(),
                emotion.as_str(),
                new_name
            );

            self.counts.insert(emotion, count);
            summary.copied += 1;
            match split {
                Split::Train => summary.train += 1,
                Split::Test => summary.test += 1,
            }
        }

        info!(
            "Organize pass complete: {} copied ({} train, {} test), {} skipped",
            summary.copied, summary.train, summary.test, summary.skipped
        );

        Ok(summary)
    }

    /// Initialize the per-emotion counters from what the target tree
    /// already contains, so numbering continues across runs.
    fn load_counts(&mut self) -> OrganizeResult<()> {
        for emotion in Emotion::ALL {
            let mut existing = 0;
            for split in Split::ALL {
                existing += count_dir_entries(&self.split_dir(split, emotion))?;
            }
            self.counts.insert(emotion, existing);
        }
        Ok(())
    }

    fn split_dir(&self, split: Split, emotion: Emotion) -> PathBuf {
        self.config
            .target_dir
            .join(split.as_str())
            .join(emotion.as_str())
    }
}

/// Weighted coin flip for split assignment. The draw is uniform in
/// [0, 1), so a ratio of 1.0 sends every file to train.
fn draw_split(rng: &mut impl Rng, train_ratio: f64) -> Split {
    if rng.gen::<f64>() < train_ratio {
        Split::Train
    } else {
        Split::Test
    }
}

/// Fair coin flip for the gender tag in the output name.
fn draw_gender(rng: &mut impl Rng) -> Gender {
    if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    }
}
