//! Message catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mailstorm_core::{EmotionalWeight, ImpactArea, Message, Urgency};

/// Embedded default message pool.
const EMBEDDED_MESSAGES: &str = include_str!("../data/messages.ron");

/// Errors raised while loading catalog data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog RON: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("catalog contains no messages")]
    Empty,
}

/// One authored message template (no id; ids are assigned per match).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSpec {
    pub text: String,
    pub urgency: Urgency,
    pub impact_area: ImpactArea,
    pub emotional_weight: EmotionalWeight,
}

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    messages: Vec<MessageSpec>,
}

/// Authored pool of message templates.
///
/// Templates carry no identity; [`MessageCatalog::deal`] stamps unique ids
/// at match start so repeated deals never alias across matches.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    specs: Vec<MessageSpec>,
}

impl MessageCatalog {
    /// Loads the catalog embedded in the binary.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_ron_str(EMBEDDED_MESSAGES)
    }

    /// Parses a catalog from RON text.
    pub fn from_ron_str(source: &str) -> Result<Self, LoadError> {
        let data: CatalogData = ron::from_str(source)?;
        if data.messages.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self {
            specs: data.messages,
        })
    }

    /// Loads a catalog from a RON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Number of distinct templates.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Produces exactly `count` messages with unique sequential ids,
    /// cycling the template pool as needed.
    pub fn deal(&self, count: usize) -> Vec<Message> {
        self.specs
            .iter()
            .cycle()
            .take(count)
            .enumerate()
            .map(|(index, spec)| {
                Message::new(
                    format!("msg-{:03}", index + 1),
                    spec.text.clone(),
                    spec.urgency,
                    spec.impact_area,
                    spec.emotional_weight,
                )
            })
            .collect()
    }
}
