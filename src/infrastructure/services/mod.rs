//! Application services

mod question_answering;

pub use question_answering::{QaOutcome, QuestionAnsweringService};
