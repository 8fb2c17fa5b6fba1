use crate::query::QueryMode;
use crate::types::NodeId;
use derive_builder::Builder;

/// Settings for a [`QueryEngine`](crate::query::QueryEngine).
///
/// ```
/// use bottleneck_paths::{EngineSettingsBuilder, QueryMode};
///
/// let settings = EngineSettingsBuilder::default()
///     .root(1)
///     .mode(QueryMode::Path)
///     .build()
///     .unwrap();
/// assert_eq!(settings.root, Some(1));
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Root of the single tree to index. `None` indexes every tree of the
    /// forest, each rooted at its smallest node.
    #[builder(default = "None", setter(strip_option))]
    pub root: Option<NodeId>,
    /// What the engine's queries return.
    #[builder(default = "QueryMode::Bottleneck")]
    pub mode: QueryMode,
    /// Answer repeated pairs of a batch from a cache.
    #[builder(default = "true")]
    pub cache_repeated: bool,
}

impl Default for EngineSettings {
    fn default() -> EngineSettings {
        EngineSettingsBuilder::default().build().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.root, None);
        assert_eq!(settings.mode, QueryMode::Bottleneck);
        assert!(settings.cache_repeated);
    }

    #[test]
    fn test_builder() {
        let settings = EngineSettingsBuilder::default()
            .root(7)
            .cache_repeated(false)
            .build()
            .unwrap();
        assert_eq!(settings.root, Some(7));
        assert!(!settings.cache_repeated);
    }
}
