//! grounded-qa
//!
//! Grounded question answering over a local document corpus:
//! - A relevance classifier that grades retrieved passages as
//!   `CAN_ANSWER`, `PARTIAL` or `NO_MATCH`
//! - An answer drafter that writes an answer using only supplied passages
//! - Gemini and OpenAI inference providers behind one trait
//! - A keyword retriever over markdown and text files

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
