/// Engram system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum token length retained by the tokenizer.
pub const MIN_TOKEN_LEN: usize = 2;

/// Term-frequency multiplier applied to tag tokens during indexing.
/// Tags are curated, so they count more than body text.
pub const TAG_WEIGHT: u32 = 2;

/// Default number of results returned by recall when unspecified.
pub const DEFAULT_TOP_K: usize = 10;
