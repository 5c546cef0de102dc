use clap::Parser;
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use botd::auth::{Authorization, PermissionGate};
use botd::bot::{
    CommandRegistry, Context, DispatchConfig, DispatchOutcome, Dispatcher, IncomingMessage,
    RunOutcome,
};
use botd::commands;

mod cli;
mod logger;

/// On the local console the operator holds every capability.
struct ConsoleGate;

impl PermissionGate for ConsoleGate {
    fn user_has_permission(&self, _capability: &str) -> bool {
        true
    }

    fn bot_has_permission(&self, _capability: &str) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initiate logger
    let level = match cli.debug {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::max(),
    };
    logger::setup(cli.log.as_deref(), level)?;

    // Initiate the registry with the built-in commands
    let mut registry = CommandRegistry::new();
    for command in commands::builtin_commands() {
        registry.register(command)?;
    }

    let config = DispatchConfig {
        prefix: cli.prefix,
        developers: cli.developers.into_iter().collect(),
        default_prefix_len: None,
    };
    let dispatcher = Dispatcher::new(registry, config);
    let mention = format!("@{}", cli.name).to_lowercase();

    // Replies flow over a channel so a suspended handler never blocks the
    // read loop.
    let (tx, mut rx) = tokio::sync::mpsc::channel::<String>(64);
    let printer = tokio::spawn(async move {
        while let Some(reply) = rx.recv().await {
            println!("{}", reply);
        }
    });

    log::info!("ready, reading messages from stdin");

    let gate = ConsoleGate;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let message = IncomingMessage {
            is_direct_mention: line.trim().to_lowercase().starts_with(&mention),
            content: line,
            invoker_id: "console".to_string(),
            has_member_context: true,
        };

        let (command, args, authorization) = match dispatcher.dispatch(&message, &gate) {
            DispatchOutcome::NoMatch => continue,
            DispatchOutcome::Matched {
                command,
                args,
                authorization,
            } => (command, args, authorization),
        };

        match authorization {
            Authorization::Denied(reason) => println!("{}", reason),
            Authorization::Allowed => {
                let ctx = Context::new(message.invoker_id.as_str(), tx.clone());
                match command.run(&ctx, &args).await {
                    Ok(RunOutcome::Complete) => {}
                    Ok(RunOutcome::Incomplete) => {
                        println!("{} is not implemented yet", command.name())
                    }
                    Err(err) => log::error!("command {:?} failed: {}", command.name(), err),
                }
            }
        }
    }

    drop(tx);
    printer.await?;
    Ok(())
}
