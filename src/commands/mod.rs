pub mod stake;
pub mod price;
pub mod apr;
pub mod recommend;
pub mod help;

use crate::context::AppContext;
use crate::utils::AppError;

/// What the input loop should do after a line
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
    Ignored,
}

pub async fn handle_message(ctx: &AppContext, content: &str) -> Result<Outcome, AppError> {
    let parts: Vec<&str> = content.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return Ok(Outcome::Ignored);
    };

    if !command.starts_with('$') {
        return Ok(Outcome::Ignored);
    }

    let reply = match command.to_lowercase().as_str() {
        "$stake" | "$sim" => stake::execute(ctx, args).await?,
        "$price" => price::execute(ctx, args).await?,
        "$apr" => apr::execute(ctx, args).await?,
        "$recommend" | "$rec" => recommend::execute(ctx).await?,
        "$help" => help::execute(),
        "$quit" | "$exit" => return Ok(Outcome::Quit),
        _ => format!("Unknown command `{}`. Type `$help` for the command list.", command),
    };

    Ok(Outcome::Reply(reply))
}

/// Build a command line from process arguments; `$stake` is implied
pub fn line_from_args(args: &[String]) -> Option<String> {
    let first = args.first()?;
    if first.starts_with('$') {
        Some(args.join(" "))
    } else {
        Some(format!("$stake {}", args.join(" ")))
    }
}

/// Message shown for a failed command
pub fn error_reply(error: &AppError) -> String {
    format!("❌ {}", error)
}
