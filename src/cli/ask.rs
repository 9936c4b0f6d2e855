//! Ask command - classify, then draft when the corpus is relevant

use super::setup::{build_service, load_config};
use super::QuestionArgs;
use crate::domain::{RelevanceVerdict, FALLBACK_ANSWER};
use crate::infrastructure::services::QaOutcome;

pub async fn run(args: QuestionArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let service = build_service(&config).await?;

    let outcome = service.answer(&args.question).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        QaOutcome::Answered { verdict, result } => {
            println!("[{}]", verdict);
            println!("{}", result.draft_answer);
        }
        QaOutcome::NoAnswer => {
            println!("[{}]", RelevanceVerdict::NoMatch);
            println!("{}", FALLBACK_ANSWER);
        }
    }

    Ok(())
}
