/// Configuration options for HMM estimation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Number of characters every sentence-initial tag must have.
    pub tag_width: usize,
    /// Count transitions on the rayon thread pool. Ignored unless the
    /// `parallel` feature is enabled.
    pub parallel: bool,
}

impl EstimatorConfig {
    /// Create a new config with the default tag width (2) and sequential counting.
    pub fn new() -> Self {
        Self {
            tag_width: 2,
            parallel: false,
        }
    }

    /// Customize the required tag width.
    pub fn with_tag_width(mut self, tag_width: usize) -> Self {
        self.tag_width = tag_width;
        self
    }

    /// Enable or disable parallel transition counting.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EstimatorConfig::default();
        assert_eq!(config.tag_width, 2);
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_overrides() {
        let config = EstimatorConfig::new().with_tag_width(3).with_parallel(true);
        assert_eq!(config.tag_width, 3);
        assert!(config.parallel);
    }
}
