//! Loads a directory of documents into chunks

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::chunker::{ChunkingConfig, ParagraphChunker};
use super::markdown::{split_sections, Section};
use crate::domain::{DocumentChunk, DomainError};

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];
const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Reads `.md`, `.markdown` and `.txt` files from one directory
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    chunker: ParagraphChunker,
}

impl CorpusLoader {
    pub fn new(config: ChunkingConfig) -> Result<Self, DomainError> {
        Ok(Self {
            chunker: ParagraphChunker::new(config)?,
        })
    }

    /// Load every supported file directly inside `dir`, ordered by file name
    pub async fn load_dir(&self, dir: &Path) -> Result<Vec<DocumentChunk>, DomainError> {
        let files = Self::list_files(dir).await?;
        let mut chunks = Vec::new();

        for path in &files {
            let source = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            let text = tokio::fs::read_to_string(path).await.map_err(|e| {
                DomainError::ingestion(format!("Failed to read {}: {}", path.display(), e))
            })?;

            let document = self.chunk_document(&source, &text, is_markdown(path));
            debug!("Chunked {} into {} chunks", source, document.len());
            chunks.extend(document);
        }

        info!(
            "Loaded {} chunks from {} files in {}",
            chunks.len(),
            files.len(),
            dir.display()
        );

        Ok(chunks)
    }

    /// Chunk one document; ids are `{source}#{chunk_index}`
    pub fn chunk_document(&self, source: &str, text: &str, markdown: bool) -> Vec<DocumentChunk> {
        let sections = if markdown {
            split_sections(text)
        } else {
            vec![Section {
                header: None,
                text: text.to_string(),
            }]
        };

        sections
            .iter()
            .flat_map(|section| {
                self.chunker
                    .chunk(&section.text)
                    .into_iter()
                    .map(move |content| (section.header.as_deref(), content))
            })
            .enumerate()
            .map(|(index, (header, content))| {
                let mut chunk = DocumentChunk::new(format!("{}#{}", source, index), content)
                    .with_source(source)
                    .with_metadata("source", serde_json::json!(source))
                    .with_metadata("chunk_index", serde_json::json!(index));

                if let Some(header) = header {
                    chunk = chunk.with_metadata("header", serde_json::json!(header));
                }

                chunk
            })
            .collect()
    }

    async fn list_files(dir: &Path) -> Result<Vec<PathBuf>, DomainError> {
        let read_error = |e: std::io::Error| {
            DomainError::ingestion(format!(
                "Failed to read corpus directory {}: {}",
                dir.display(),
                e
            ))
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(read_error)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);

            if is_file && (is_markdown(&path) || has_extension(&path, TEXT_EXTENSIONS)) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_markdown(path: &Path) -> bool {
    has_extension(path, MARKDOWN_EXTENSIONS)
}
