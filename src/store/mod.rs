//! Stateful collaborators kept apart from the pure color engine.

pub mod favorites;
pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A stored palette, shaped like the JSON the web client exchanges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub id: String,
    pub colors: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
