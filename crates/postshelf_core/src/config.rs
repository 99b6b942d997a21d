//! Repository configuration.

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "alaome-blog-posts";

/// Options for constructing a `PostRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Key of the single slot holding the JSON post array.
    pub storage_key: String,
    /// Whether construction seeds example posts into an empty slot.
    pub seed_defaults: bool,
    /// Whether writes refuse to replace a stored value that cannot be read.
    ///
    /// Off by default: an unreadable value counts as an empty collection and
    /// the next write replaces it.
    pub protect_unreadable: bool,
}

impl RepoConfig {
    /// Default configuration with a custom storage key.
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            ..Self::default()
        }
    }

    /// Makes writes fail with `StorageRead` instead of replacing an
    /// unreadable stored value.
    pub fn protecting_unreadable(mut self) -> Self {
        self.protect_unreadable = true;
        self
    }

    /// Disables seeding on construction.
    pub fn without_seed(mut self) -> Self {
        self.seed_defaults = false;
        self
    }
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_defaults: true,
            protect_unreadable: false,
        }
    }
}
