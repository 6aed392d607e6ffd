//! Insight Record Entity
//!
//! Structured insight extracted from a coaching transcript, plus the
//! renderings used to embed and filter it.

use crate::constants::{
    FIELD_BUSINESS_FOCUS, FIELD_KEY_EMOTIONS, FIELD_MAIN_BLOCKER, FIELD_MINDSET_PATTERN,
    FIELD_PARTICIPANT, FIELD_PRIMARY_GOAL, FIELD_SEARCHABLE_TEXT, FIELD_SECONDARY_BLOCKERS,
    FIELD_URGENCY_LEVEL, MAX_GOAL_CHARS, MAX_MINDSET_CHARS, MAX_SEARCHABLE_TEXT_CHARS,
    URGENCY_DEFAULT, URGENCY_MAX, URGENCY_MIN,
};
use crate::value_objects::{Metadata, MetadataValue};
use serde::{Deserialize, Deserializer, Serialize};

/// Entity: Insight Record
///
/// Identity is the `id`, which becomes the embedding record id when the
/// insight is indexed.
///
/// ## Example
///
/// ```rust
/// use insights_domain::entities::InsightRecord;
///
/// let insight: InsightRecord = serde_json::from_str(
///     r#"{"id": "s1", "participant": "Sarah", "urgency_level": "high"}"#,
/// ).unwrap();
/// assert_eq!(insight.urgency_level, 5);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsightRecord {
    /// Stable identifier (session id)
    pub id: String,
    /// Participant display name
    pub participant: String,
    /// What the participant wants to achieve
    #[serde(default)]
    pub primary_goal: String,
    /// Biggest obstacle
    #[serde(default)]
    pub main_blocker: String,
    /// Other obstacles mentioned
    #[serde(default)]
    pub secondary_blockers: Vec<String>,
    /// Business type or niche
    #[serde(default)]
    pub business_focus: String,
    /// Recurring mindset pattern
    #[serde(default)]
    pub mindset_pattern: String,
    /// Where the participant is in their journey
    #[serde(default)]
    pub current_stage: String,
    /// Emotions expressed
    #[serde(default)]
    pub key_emotions: Vec<String>,
    /// Urgency on a 1..=5 scale
    #[serde(default = "default_urgency", deserialize_with = "deserialize_urgency")]
    pub urgency_level: u8,
}

fn default_urgency() -> u8 {
    URGENCY_DEFAULT
}

fn deserialize_urgency<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(normalize_urgency(value.as_ref()))
}

/// Map a loosely typed urgency value onto the 1..=5 scale
///
/// Integers pass through (clamped), numeric strings parse, the labels
/// `low`, `medium`, `high`, `urgent` and `critical` map to 1, 3, 5, 5, 5.
/// Anything else yields the default of 3.
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_urgency(value: Option<&serde_json::Value>) -> u8 {
    use serde_json::Value;

    let level = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Some(Value::String(s)) => {
            let label = s.trim().to_lowercase();
            label.parse::<i64>().ok().or(match label.as_str() {
                "low" => Some(1),
                "medium" => Some(3),
                "high" | "urgent" | "critical" => Some(5),
                _ => None,
            })
        }
        _ => None,
    };

    level.map_or(URGENCY_DEFAULT, |l| {
        let clamped = l.clamp(i64::from(URGENCY_MIN), i64::from(URGENCY_MAX));
        u8::try_from(clamped).unwrap_or(URGENCY_DEFAULT)
    })
}

/// Truncate on a char boundary
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

impl InsightRecord {
    /// Text the embedding is generated from
    pub fn searchable_text(&self) -> String {
        let mut parts = vec![
            format!("Goal: {}", self.primary_goal),
            format!("Main challenge: {}", self.main_blocker),
            format!("Business: {}", self.business_focus),
            format!("Mindset: {}", self.mindset_pattern),
            format!("Current stage: {}", self.current_stage),
        ];
        if !self.secondary_blockers.is_empty() {
            parts.push(format!(
                "Other challenges: {}",
                self.secondary_blockers.join(", ")
            ));
        }
        if !self.key_emotions.is_empty() {
            parts.push(format!("Emotions: {}", self.key_emotions.join(", ")));
        }
        parts.join(" | ")
    }

    /// Metadata projection stored alongside the embedding
    pub fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        let mut put = |key: &str, value: MetadataValue| {
            metadata.insert(key.to_string(), value);
        };
        put(FIELD_PARTICIPANT, self.participant.clone().into());
        put(
            FIELD_PRIMARY_GOAL,
            truncate_chars(&self.primary_goal, MAX_GOAL_CHARS).into(),
        );
        put(
            FIELD_MAIN_BLOCKER,
            truncate_chars(&self.main_blocker, MAX_GOAL_CHARS).into(),
        );
        put(FIELD_BUSINESS_FOCUS, self.business_focus.clone().into());
        put(
            FIELD_MINDSET_PATTERN,
            truncate_chars(&self.mindset_pattern, MAX_MINDSET_CHARS).into(),
        );
        put(FIELD_URGENCY_LEVEL, self.urgency_level.into());
        put(FIELD_SECONDARY_BLOCKERS, self.secondary_blockers.clone().into());
        put(FIELD_KEY_EMOTIONS, self.key_emotions.clone().into());
        put(
            FIELD_SEARCHABLE_TEXT,
            truncate_chars(&self.searchable_text(), MAX_SEARCHABLE_TEXT_CHARS).into(),
        );
        metadata
    }
}
