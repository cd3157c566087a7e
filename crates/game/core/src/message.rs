//! Inbox message values and their classification attributes.

use std::fmt;

/// Unique identifier for a message within one match.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How quickly a message demands attention.
///
/// Urgency scales every immediate and delayed meter effect uniformly and
/// weights the end-of-match player profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Multiplier applied to all effect magnitudes for this urgency.
    pub const fn multiplier(self) -> f64 {
        match self {
            Urgency::High => 1.3,
            Urgency::Medium => 1.0,
            Urgency::Low => 0.7,
        }
    }

    /// Weight this urgency contributes to [`crate::score::PlayerProfile`].
    pub const fn profile_weight(self) -> f64 {
        match self {
            Urgency::High => 2.0,
            Urgency::Medium => 1.0,
            Urgency::Low => 0.5,
        }
    }
}

/// Which dimension of the company a message threatens or helps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ImpactArea {
    People,
    Product,
    Money,
}

/// Tone of the message as presented to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EmotionalWeight {
    Urgent,
    Neutral,
    Concerning,
}

/// Immutable inbox message.
///
/// Created once by the catalog at match start, never mutated, destroyed
/// only when the match resets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub urgency: Urgency,
    pub impact_area: ImpactArea,
    pub emotional_weight: EmotionalWeight,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        urgency: Urgency,
        impact_area: ImpactArea,
        emotional_weight: EmotionalWeight,
    ) -> Self {
        Self {
            id: MessageId::new(id),
            text: text.into(),
            urgency,
            impact_area,
            emotional_weight,
        }
    }
}
