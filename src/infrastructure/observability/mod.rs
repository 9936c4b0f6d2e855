//! Observability infrastructure - metrics recording

mod recorder;

pub use recorder::{
    record_answer_fallback, record_llm_request, record_verdict, LlmRequestMetricParams,
};
