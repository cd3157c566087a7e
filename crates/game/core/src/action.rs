//! Player decisions.

/// Decision applied to exactly one message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    /// Deal with the message personally, right now.
    Handle,
    /// Hand the message to someone on the team.
    Delegate,
    /// Push the message to later.
    Defer,
    /// Drop the message entirely.
    Ignore,
}

impl Action {
    /// Short label used by presentation layers.
    pub const fn label(self) -> &'static str {
        match self {
            Action::Handle => "Handle it now",
            Action::Delegate => "Delegate",
            Action::Defer => "Defer",
            Action::Ignore => "Ignore",
        }
    }
}
