//! Domain layer constants

/// Dimension of vectors produced by the default embedding model
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 768;

/// Default number of results returned by a search
pub const DEFAULT_TOP_K: usize = 5;

/// Similarity metric every backend scores with
pub const SIMILARITY_METRIC: &str = "cosine";

// Metadata field names

/// Participant display name
pub const FIELD_PARTICIPANT: &str = "participant";
/// Business focus label
pub const FIELD_BUSINESS_FOCUS: &str = "business_focus";
/// Urgency level (integer 1..=5)
pub const FIELD_URGENCY_LEVEL: &str = "urgency_level";
/// Primary goal text
pub const FIELD_PRIMARY_GOAL: &str = "primary_goal";
/// Main blocker text
pub const FIELD_MAIN_BLOCKER: &str = "main_blocker";
/// Mindset pattern text
pub const FIELD_MINDSET_PATTERN: &str = "mindset_pattern";
/// Secondary blockers list
pub const FIELD_SECONDARY_BLOCKERS: &str = "secondary_blockers";
/// Key emotions list
pub const FIELD_KEY_EMOTIONS: &str = "key_emotions";
/// Rendered searchable text
pub const FIELD_SEARCHABLE_TEXT: &str = "searchable_text";
/// Current stage text
pub const FIELD_CURRENT_STAGE: &str = "current_stage";

// Urgency scale

/// Lowest urgency level
pub const URGENCY_MIN: u8 = 1;
/// Highest urgency level
pub const URGENCY_MAX: u8 = 5;
/// Urgency assumed when the value is missing or unrecognized
pub const URGENCY_DEFAULT: u8 = 3;

// Metadata truncation limits (characters)

/// Limit for goal and blocker text
pub const MAX_GOAL_CHARS: usize = 500;
/// Limit for mindset text
pub const MAX_MINDSET_CHARS: usize = 300;
/// Limit for the searchable text copy
pub const MAX_SEARCHABLE_TEXT_CHARS: usize = 1000;

/// Message prefix of remote failures caused by rejected credentials
pub const AUTHENTICATION_FAILED: &str = "authentication failed";
