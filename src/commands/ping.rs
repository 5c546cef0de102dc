use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::bot::{Command, CommandConfig, CommandHandler, Context, RunOutcome};

/// Round-trip check. Replies immediately, then reports how long the first
/// reply took to go through.
pub fn ping() -> Command {
    Command::new(
        CommandConfig {
            name: "ping".to_string(),
            triggers: vec!["p".to_string(), "pong".to_string()],
            ..Default::default()
        },
        Arc::new(PingHandler),
    )
}

struct PingHandler;

#[async_trait]
impl CommandHandler for PingHandler {
    async fn run(&self, ctx: &Context, _args: &[String]) -> anyhow::Result<RunOutcome> {
        let start = Instant::now();
        ctx.reply("Pinging...").await?;

        let latency = start.elapsed();
        ctx.reply(format!(
            "Pong! Latency: {}.",
            humantime::format_duration(latency)
        ))
        .await?;

        Ok(RunOutcome::Complete)
    }
}
