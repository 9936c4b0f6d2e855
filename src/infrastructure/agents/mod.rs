//! Question answering agents
//!
//! The relevance classifier grades retrieved passages; the answer drafter
//! writes a grounded answer over passages the caller selected. Neither lets an
//! error escape: every failure resolves to a typed fallback value.

mod answer_drafter;
mod inference;
mod relevance_classifier;

pub use answer_drafter::AnswerDrafter;
pub use relevance_classifier::RelevanceClassifier;
