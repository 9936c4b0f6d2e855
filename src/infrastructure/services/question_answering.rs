//! Classify-then-draft question answering

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{DocumentChunk, GenerationResult, RelevanceVerdict, Retriever};
use crate::infrastructure::agents::{AnswerDrafter, RelevanceClassifier};

/// Result of running a question through the pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QaOutcome {
    /// The classifier found the passages relevant and a draft was produced
    Answered {
        verdict: RelevanceVerdict,
        #[serde(flatten)]
        result: GenerationResult,
    },
    /// The classifier found nothing relevant; drafting was skipped
    NoAnswer,
}

impl QaOutcome {
    pub fn verdict(&self) -> RelevanceVerdict {
        match self {
            Self::Answered { verdict, .. } => *verdict,
            Self::NoAnswer => RelevanceVerdict::NoMatch,
        }
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answered { result, .. } => Some(&result.draft_answer),
            Self::NoAnswer => None,
        }
    }
}

/// Wires a retriever, a classifier and a drafter together
#[derive(Clone)]
pub struct QuestionAnsweringService {
    classifier: RelevanceClassifier,
    drafter: AnswerDrafter,
    retriever: Arc<dyn Retriever>,
    top_k: usize,
}

impl QuestionAnsweringService {
    pub fn new(
        classifier: RelevanceClassifier,
        drafter: AnswerDrafter,
        retriever: Arc<dyn Retriever>,
        top_k: usize,
    ) -> Self {
        Self {
            classifier,
            drafter,
            retriever,
            top_k,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Verdict for the top `top_k` retrieved chunks
    pub async fn check(&self, question: &str) -> RelevanceVerdict {
        self.classifier
            .classify(question, self.retriever.as_ref(), self.top_k)
            .await
    }

    /// Draft over the top `top_k` retrieved chunks without classifying
    pub async fn draft(&self, question: &str) -> GenerationResult {
        let documents = self.top_documents(question).await;
        self.drafter.generate(question, &documents).await
    }

    /// Classify, then draft unless the verdict is `NO_MATCH`
    pub async fn answer(&self, question: &str) -> QaOutcome {
        let verdict = self.check(question).await;

        if !verdict.is_answerable() {
            info!("Skipping draft for question='{}': {}", question, verdict);
            return QaOutcome::NoAnswer;
        }

        let result = self.draft(question).await;
        QaOutcome::Answered { verdict, result }
    }

    async fn top_documents(&self, question: &str) -> Vec<DocumentChunk> {
        match self.retriever.fetch(question).await {
            Ok(mut chunks) => {
                chunks.truncate(self.top_k);
                chunks
            }
            Err(e) => {
                warn!("Retriever failed, drafting without documents: {}", e);
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for QuestionAnsweringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionAnsweringService")
            .field("classifier", &self.classifier)
            .field("drafter", &self.drafter)
            .field("top_k", &self.top_k)
            .finish()
    }
}
