//! Paragraph-based chunking

use crate::config::RetrievalConfig;
use crate::domain::DomainError;

/// Configuration for chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Target chunk size in bytes
    pub chunk_size: usize,
    /// Tail of the previous chunk repeated at the start of the next one
    pub chunk_overlap: usize,
    /// Chunks shorter than this absorb the following paragraph
    pub min_chunk_size: usize,
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            min_chunk_size: 50,
        }
    }

    pub fn with_min_chunk_size(mut self, min_size: usize) -> Self {
        self.min_chunk_size = min_size;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::validation("chunk_size must be greater than 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::validation(
                "chunk_overlap must be less than chunk_size",
            ));
        }

        if self.min_chunk_size > self.chunk_size {
            return Err(DomainError::validation(
                "min_chunk_size must be less than or equal to chunk_size",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            min_chunk_size: 50,
        }
    }
}

impl From<&RetrievalConfig> for ChunkingConfig {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
            min_chunk_size: config.min_chunk_size,
        }
    }
}

/// Splits text on blank lines and packs paragraphs up to the chunk size
#[derive(Debug, Clone)]
pub struct ParagraphChunker {
    config: ChunkingConfig,
}

impl ParagraphChunker {
    pub fn new(config: ChunkingConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config })
    }

    fn split_paragraphs(text: &str) -> Vec<&str> {
        text.split("\n\n")
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Last `overlap` bytes of `text`, moved forward to a char boundary
    fn overlap_tail(text: &str, overlap: usize) -> &str {
        let mut start = text.len().saturating_sub(overlap);
        while !text.is_char_boundary(start) {
            start += 1;
        }
        &text[start..]
    }

    /// Split `content` into chunks; a single oversized paragraph stays whole
    pub fn chunk(&self, content: &str) -> Vec<String> {
        let normalized = content.replace("\r\n", "\n");
        let content = normalized.trim();

        if content.is_empty() {
            return vec![];
        }

        if content.len() <= self.config.chunk_size {
            return vec![content.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        for paragraph in Self::split_paragraphs(content) {
            if current.is_empty() {
                current.push_str(paragraph);
            } else if current.len() + 2 + paragraph.len() <= self.config.chunk_size
                || current.len() < self.config.min_chunk_size
            {
                current.push_str("\n\n");
                current.push_str(paragraph);
            } else {
                let next = if self.config.chunk_overlap > 0 {
                    let tail = Self::overlap_tail(&current, self.config.chunk_overlap);
                    format!("{}\n\n{}", tail.trim_start(), paragraph)
                } else {
                    paragraph.to_string()
                };
                chunks.push(std::mem::replace(&mut current, next));
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}
