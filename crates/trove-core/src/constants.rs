/// Trove system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delimiter between category hierarchy segments in the dataset.
pub const CATEGORY_DELIMITER: char = '|';

/// Tokens must be strictly longer than this to enter the suggestion vocabulary.
pub const VOCABULARY_MIN_TOKEN_LEN: usize = 3;

/// Filler words excluded from the suggestion vocabulary.
pub const VOCABULARY_STOPWORDS: &[&str] = &["with", "from", "this", "that", "pack"];
