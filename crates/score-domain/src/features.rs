use score_core::AppConfig;

/// Switches that select which flavour of the score counter is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub scoring: bool,
    pub persistence: bool,
}

impl Features {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            scoring: config.scoring_enabled(),
            persistence: config.persistence_enabled(),
        }
    }

    /// A plain reorderable name list with no scores and nothing saved.
    pub fn list_only() -> Self {
        Self {
            scoring: false,
            persistence: false,
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            scoring: true,
            persistence: true,
        }
    }
}
