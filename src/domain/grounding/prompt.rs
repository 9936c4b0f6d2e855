//! Prompt builders and response sanitizing
//!
//! Everything here is a pure string function so prompts can be inspected in
//! tests without an inference provider.

use crate::domain::retrieval::DocumentChunk;

/// Separator placed between chunk contents
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Join chunk contents in the given order, separated by a blank line
pub fn join_chunk_contents<'a, I>(chunks: I) -> String
where
    I: IntoIterator<Item = &'a DocumentChunk>,
{
    chunks
        .into_iter()
        .map(|chunk| chunk.content.as_str())
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// Build the sufficiency-labelling prompt
///
/// Any mention of the question's topic or timeframe must be labelled
/// PARTIAL, never NO_MATCH.
pub fn relevance_prompt(question: &str, passages: &str) -> String {
    format!(
        r#"You are an AI relevance checker between a user's question and provided document content.

**Instructions:**
- Classify how well the document content addresses the user's question.
- Respond with only one of the following labels: CAN_ANSWER, PARTIAL, NO_MATCH.
- Do not include any additional text or explanation.

**Labels:**
1) "CAN_ANSWER": The passages contain enough explicit information to fully answer the question.
2) "PARTIAL": The passages mention or discuss the question's topic but do not provide all the details needed for a complete answer.
3) "NO_MATCH": The passages do not discuss or mention the question's topic at all.

**Important:** If the passages mention or reference the topic or timeframe of the question in any way, even if incomplete, respond with "PARTIAL" instead of "NO_MATCH".

**Question:** {question}
**Passages:** {passages}

**Respond ONLY with one of the following labels: CAN_ANSWER, PARTIAL, NO_MATCH**"#
    )
}

/// Build the grounded drafting prompt
pub fn answer_prompt(question: &str, context: &str) -> String {
    format!(
        r#"You are an AI assistant designed to provide precise and factual answers based on the given context.

**Instructions:**
- Answer the following question using only the provided context.
- Be clear, concise, and factual.
- Return as much information as you can get from the context.

**Question:** {question}
**Context:**
{context}

**Provide your answer below:**"#
    )
}

/// Strip surrounding whitespace; nothing else is touched
pub fn sanitize_response(raw: &str) -> &str {
    raw.trim()
}
