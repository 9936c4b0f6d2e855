//! Draft command - answer from the top passages without classifying

use super::setup::{build_service, load_config};
use super::QuestionArgs;

pub async fn run(args: QuestionArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let service = build_service(&config).await?;

    let result = service.draft(&args.question).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.draft_answer);
    }

    Ok(())
}
