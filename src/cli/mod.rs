//! CLI module for grounded-qa
//!
//! Subcommands:
//! - `ask`: classify the retrieved passages, then draft an answer if relevant
//! - `check`: relevance verdict only
//! - `draft`: draft over the retrieved passages without classifying

pub mod ask;
pub mod check;
pub mod draft;
mod setup;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Grounded question answering over a local document corpus
#[derive(Parser)]
#[command(name = "grounded-qa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify relevance and draft an answer when the corpus can help
    Ask(QuestionArgs),

    /// Print the relevance verdict only
    Check(QuestionArgs),

    /// Draft an answer from the top passages without classifying
    Draft(QuestionArgs),
}

/// Arguments shared by every subcommand
#[derive(Args, Clone, Debug)]
pub struct QuestionArgs {
    /// The question to answer
    pub question: String,

    /// Directory of .md/.markdown/.txt files (overrides config)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Number of passages to judge and draft from (overrides config)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Print machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,
}
