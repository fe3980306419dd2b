//! Flashcard model.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ValidationError};

/// Lowest difficulty a card can carry.
pub const MIN_DIFFICULTY: u8 = 1;

/// Highest difficulty a card can carry.
pub const MAX_DIFFICULTY: u8 = 5;

/// Difficulty assigned when none is supplied.
pub const DEFAULT_DIFFICULTY: u8 = 1;

/// A flashcard: a question/answer pair tagged with categories and a
/// difficulty rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Unique identifier, assigned by the caller. Immutable once built.
    pub id: u64,

    /// Prompt side of the card.
    pub question: String,

    /// Answer side of the card.
    pub answer: String,

    /// Categorization labels, in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Recall difficulty, 1 (easy) to 5 (hard).
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,

    /// Creation timestamp (ISO 8601 UTC).
    pub created_at: DateTime<Utc>,

    /// Last update timestamp (ISO 8601 UTC).
    pub updated_at: DateTime<Utc>,
}

fn default_difficulty() -> u8 {
    DEFAULT_DIFFICULTY
}

impl Flashcard {
    /// Create a new flashcard with minimal required fields.
    ///
    /// Trusts the caller: no validation is performed. Both timestamps are
    /// stamped from a single reading of the clock.
    #[must_use]
    pub fn new(id: u64, question: impl Into<String>, answer: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            categories: Vec::new(),
            difficulty: DEFAULT_DIFFICULTY,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the categories.
    #[must_use]
    pub fn with_categories(
        mut self,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set both timestamps explicitly, for callers that own the clock
    /// decision (e.g. when rehydrating already-validated data).
    #[must_use]
    pub fn with_timestamps(
        mut self,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Parse a flashcard out of untrusted JSON.
    ///
    /// Missing timestamps default to the current time, read once.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first field that failed.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_value_at(value, Utc::now())
    }

    /// Parse a flashcard out of untrusted JSON, with an explicit `now` used
    /// for defaulted timestamps.
    ///
    /// Fields are checked in order: id, question, answer, categories,
    /// difficulty, timestamps. The first failure wins.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first field that failed.
    pub fn from_value_at(value: &Value, now: DateTime<Utc>) -> Result<Self> {
        let id = value
            .get("id")
            .and_then(Value::as_u64)
            .filter(|id| *id != 0)
            .ok_or(ValidationError::MissingId)?;

        let question = match value.get("question") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => return Err(ValidationError::MissingQuestion),
        };

        let answer = match value.get("answer") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => return Err(ValidationError::MissingAnswer),
        };

        let categories = match value.get("categories") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_owned)
                        .ok_or(ValidationError::InvalidCategories)
                })
                .collect::<Result<Vec<_>>>()?,
            _ => return Err(ValidationError::InvalidCategories),
        };

        let difficulty = match value.get("difficulty") {
            None | Some(Value::Null) => DEFAULT_DIFFICULTY,
            Some(v) => v
                .as_u64()
                .and_then(|d| u8::try_from(d).ok())
                .filter(|d| (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(d))
                .ok_or(ValidationError::InvalidDifficulty)?,
        };

        let created_at = parse_timestamp("createdAt", value.get("createdAt"), now)?;
        let updated_at = parse_timestamp("updatedAt", value.get("updatedAt"), now)?;

        Ok(Self {
            id,
            question,
            answer,
            categories,
            difficulty,
            created_at,
            updated_at,
        })
    }

    /// Touch the updated_at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Check if the card carries a specific category (exact match).
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Add a category if not already present.
    pub fn add_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.has_category(&category) {
            self.categories.push(category);
            self.touch();
        }
    }

    /// Remove every occurrence of a category.
    ///
    /// `updated_at` is refreshed even when the category was absent.
    /// Returns whether anything was removed.
    pub fn remove_category(&mut self, category: &str) -> bool {
        let initial_len = self.categories.len();
        self.categories.retain(|c| c != category);
        self.touch();
        self.categories.len() != initial_len
    }

    /// Set the difficulty if within [`MIN_DIFFICULTY`]..=[`MAX_DIFFICULTY`].
    /// Out-of-range requests are dropped without error or change.
    pub fn update_difficulty(&mut self, difficulty: u8) {
        if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            self.difficulty = difficulty;
            self.touch();
        }
    }
}

fn parse_timestamp(
    field: &str,
    value: Option<&Value>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    match value {
        None | Some(Value::Null) => Ok(now),
        Some(Value::String(s)) => s
            .parse::<DateTime<Utc>>()
            .map_err(|_| ValidationError::InvalidTimestamp(field.to_string())),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .ok_or_else(|| ValidationError::InvalidTimestamp(field.to_string())),
        Some(_) => Err(ValidationError::InvalidTimestamp(field.to_string())),
    }
}
