use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier wrapper for stored evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EvaluationId(pub String);

impl EvaluationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Venue profile of the assessed exhibition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhibitionType {
    SmallMuseum,
    LargeMuseum,
    TemporaryExhibition,
    OutdoorExhibition,
    TravelingExhibition,
    VirtualExhibition,
}

impl ExhibitionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SmallMuseum => "small_museum",
            Self::LargeMuseum => "large_museum",
            Self::TemporaryExhibition => "temporary_exhibition",
            Self::OutdoorExhibition => "outdoor_exhibition",
            Self::TravelingExhibition => "traveling_exhibition",
            Self::VirtualExhibition => "virtual_exhibition",
        }
    }
}

/// Lifecycle status of an evaluation. Automatic transitions only ever move
/// forward; `validated` and `archived` are reached through explicit review
/// actions, never from completion tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    Draft,
    InProgress,
    Completed,
    Validated,
    Archived,
}

impl EvaluationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Validated => "validated",
            Self::Archived => "archived",
        }
    }
}

/// Raw input exactly as the presentation layer submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// Typed value stored after validation. The criterion's declared kind
/// decides which representation is produced, so a stored value always
/// matches its definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

/// One accepted answer for one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub value: AnswerValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Answers recorded for one subcategory, keyed by criterion id, with the
/// completion percentage cached at the last mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubcategoryAnswers {
    pub questions: BTreeMap<String, QuestionAnswer>,
    pub completion_percentage: f64,
}

/// Answers recorded for one category, keyed by subcategory id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryAnswers {
    pub subcategories: BTreeMap<String, SubcategoryAnswers>,
    pub completion_percentage: f64,
}

/// Descriptive metadata for the exhibition being assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionMetadata {
    pub name: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default = "default_country")]
    pub country: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub exhibition_type: ExhibitionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_visitors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
}

fn default_country() -> String {
    "France".to_string()
}

impl ExhibitionMetadata {
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.name.trim().is_empty() {
            return Err(MetadataError::EmptyName);
        }
        if self.venue.trim().is_empty() {
            return Err(MetadataError::EmptyVenue);
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(MetadataError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }

    pub fn duration_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.start_date).num_days() + 1)
    }
}

/// Metadata rejected at evaluation setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    #[error("exhibition name must not be empty")]
    EmptyName,
    #[error("venue must not be empty")]
    EmptyVenue,
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}
