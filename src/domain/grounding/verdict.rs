//! Tri-state relevance verdict

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of judging retrieved passages against a question
///
/// Variants are declared from least to most confident so the derived
/// ordering gives `CanAnswer > Partial > NoMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelevanceVerdict {
    /// Passages do not discuss the question's topic at all
    NoMatch,
    /// Passages touch the topic but lack details for a complete answer
    Partial,
    /// Passages contain enough explicit information to fully answer
    CanAnswer,
}

impl RelevanceVerdict {
    /// All verdicts, in label order used by prompts
    pub const ALL: [RelevanceVerdict; 3] = [Self::CanAnswer, Self::Partial, Self::NoMatch];

    /// Wire label of this verdict
    pub fn label(&self) -> &'static str {
        match self {
            Self::CanAnswer => "CAN_ANSWER",
            Self::Partial => "PARTIAL",
            Self::NoMatch => "NO_MATCH",
        }
    }

    /// Exact label lookup; no trimming or case folding
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }

    /// Trim and uppercase raw model output, then look it up as a label
    pub fn parse_response(raw: &str) -> Option<Self> {
        Self::from_label(&raw.trim().to_uppercase())
    }

    /// Map raw model output into the closed verdict set
    ///
    /// Anything that is not exactly one label after normalizing becomes
    /// `NoMatch`.
    pub fn from_response(raw: &str) -> Self {
        Self::parse_response(raw).unwrap_or(Self::NoMatch)
    }

    /// Whether drafting an answer is worthwhile
    pub fn is_answerable(&self) -> bool {
        matches!(self, Self::CanAnswer | Self::Partial)
    }
}

impl fmt::Display for RelevanceVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
