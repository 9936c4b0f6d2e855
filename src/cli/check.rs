//! Check command - relevance verdict only

use super::setup::{build_service, load_config};
use super::QuestionArgs;

pub async fn run(args: QuestionArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let service = build_service(&config).await?;

    let verdict = service.check(&args.question).await;

    if args.json {
        let body = serde_json::json!({ "question": args.question, "verdict": verdict });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", verdict);
    }

    Ok(())
}
