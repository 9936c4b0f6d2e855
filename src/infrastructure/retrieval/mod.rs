//! Local corpus ingestion and keyword retrieval

mod chunker;
mod corpus;
mod in_memory;
mod markdown;

pub use chunker::{ChunkingConfig, ParagraphChunker};
pub use corpus::CorpusLoader;
pub use in_memory::InMemoryRetriever;
pub use markdown::{split_sections, Section};
