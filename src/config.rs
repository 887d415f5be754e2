use std::path::PathBuf;

/// Default fraction of images assigned to the train split.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Settings for a single organize run.
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// Root scanned for input images. A missing source yields an empty
    /// scan rather than an error.
    pub source_dir: PathBuf,
    /// Root the organized train/test tree is written under.
    pub target_dir: PathBuf,
    /// Probability that a file lands in the train split. Values at or
    /// above 1.0 send everything to train, values below 0.0 everything
    /// to test.
    pub train_ratio: f64,
    /// Seed for the random source. `None` seeds from OS entropy; setting
    /// it makes gender and split assignment reproducible.
    pub seed: Option<u64>,
}

impl OrganizeConfig {
    pub fn new(source_dir: PathBuf, target_dir: PathBuf) -> Self {
        Self {
            source_dir,
            target_dir,
            train_ratio: DEFAULT_TRAIN_RATIO,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = OrganizeConfig::new(PathBuf::from("/in"), PathBuf::from("/out"));
        assert_eq!(config.source_dir, PathBuf::from("/in"));
        assert_eq!(config.target_dir, PathBuf::from("/out"));
        assert_eq!(config.train_ratio, DEFAULT_TRAIN_RATIO);
        assert!(config.seed.is_none());
    }
}
