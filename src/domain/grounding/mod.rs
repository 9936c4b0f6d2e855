//! Grounded answering domain
//!
//! Types shared by the relevance classifier and the answer drafter, plus the
//! pure prompt builders both stages send to the inference service.

mod generation;
mod prompt;
mod verdict;

pub use generation::{GenerationConfig, GenerationResult, FALLBACK_ANSWER};
pub use prompt::{answer_prompt, join_chunk_contents, relevance_prompt, sanitize_response};
pub use verdict::RelevanceVerdict;
