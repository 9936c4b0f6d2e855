//! Retrieval domain
//!
//! Chunks of document text and the trait for fetching them by question.

mod chunk;
mod retriever;

pub use chunk::DocumentChunk;
pub use retriever::Retriever;

#[cfg(test)]
pub use retriever::MockRetriever;
