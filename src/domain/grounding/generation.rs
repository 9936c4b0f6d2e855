//! Generation settings and drafting output

use serde::{Deserialize, Serialize};

/// Answer used whenever the drafter has nothing usable to return
pub const FALLBACK_ANSWER: &str =
    "I cannot answer this question based on the provided documents.";

/// Sampling settings for one inference call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Deterministic settings sized for a single label word
    pub const CLASSIFIER: Self = Self {
        temperature: 0.0,
        max_output_tokens: 10,
    };

    /// Conservative but non-zero temperature with room for a paragraph answer
    pub const DRAFTER: Self = Self {
        temperature: 0.3,
        max_output_tokens: 300,
    };
}

/// Drafted answer together with the exact context it was grounded on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub draft_answer: String,
    pub context_used: String,
}

impl GenerationResult {
    pub fn new(draft_answer: impl Into<String>, context_used: impl Into<String>) -> Self {
        Self {
            draft_answer: draft_answer.into(),
            context_used: context_used.into(),
        }
    }

    /// Whether the draft is the fixed fallback rather than a model answer
    pub fn is_fallback(&self) -> bool {
        self.draft_answer == FALLBACK_ANSWER
    }
}
