//! Metrics recording through the `metrics` facade
//!
//! Nothing here installs a recorder; without one the macros are no-ops.

use std::time::Duration;

use metrics::counter;
use metrics::histogram;

use crate::domain::RelevanceVerdict;

/// Parameters for inference request metrics
pub struct LlmRequestMetricParams<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub agent: &'a str,
    pub duration: Duration,
    pub success: bool,
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

/// Record an inference request metric
pub fn record_llm_request(params: LlmRequestMetricParams) {
    let labels = [
        ("provider", params.provider.to_string()),
        ("model", params.model.to_string()),
        ("agent", params.agent.to_string()),
        ("status", status_label(params.success).to_string()),
    ];

    counter!("llm_requests_total", &labels).increment(1);
    histogram!("llm_request_duration_seconds", &labels).record(params.duration.as_secs_f64());

    if let Some(tokens) = params.input_tokens {
        counter!("llm_input_tokens_total", &labels).increment(tokens);
    }

    if let Some(tokens) = params.output_tokens {
        counter!("llm_output_tokens_total", &labels).increment(tokens);
    }

    if !params.success {
        counter!("llm_errors_total", &labels).increment(1);
    }
}

/// Record a classifier verdict
pub fn record_verdict(verdict: RelevanceVerdict) {
    counter!("relevance_verdicts_total", "verdict" => verdict.label()).increment(1);
}

/// Record a drafter fallback and why it happened
pub fn record_answer_fallback(reason: &'static str) {
    counter!("answer_fallbacks_total", "reason" => reason).increment(1);
}

fn status_label(success: bool) -> &'static str {
    if success { "success" } else { "error" }
}
