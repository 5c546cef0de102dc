use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc::Sender;

use super::validate_error::CommandValidateError;

/// What a handler reports back after running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// The handler did its work; any output went through the context.
    Complete,
    /// The command has no real implementation behind it.
    Incomplete,
}

/// Execution context handed to a command handler. Replies flow back to the
/// host over a channel so a handler can suspend mid-run without blocking
/// the dispatch of other messages.
pub struct Context {
    invoker_id: String,
    replies: Sender<String>,
}

impl Context {
    pub fn new(invoker_id: impl Into<String>, replies: Sender<String>) -> Self {
        Self {
            invoker_id: invoker_id.into(),
            replies,
        }
    }

    pub fn invoker_id(&self) -> &str {
        &self.invoker_id
    }

    pub async fn reply(&self, text: impl Into<String>) -> anyhow::Result<()> {
        self.replies.send(text.into()).await?;
        Ok(())
    }
}

/// The action behind a command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn run(&self, ctx: &Context, args: &[String]) -> anyhow::Result<RunOutcome>;
}

/// Default delegate for definitions registered without a handler.
struct IncompleteHandler;

#[async_trait]
impl CommandHandler for IncompleteHandler {
    async fn run(&self, _ctx: &Context, _args: &[String]) -> anyhow::Result<RunOutcome> {
        Ok(RunOutcome::Incomplete)
    }
}

/// Declarative part of a command definition. Omitted fields take the
/// defaults: not dev-only, no aliases, no permission requirements.
#[derive(Debug, Clone, Default)]
pub struct CommandConfig {
    pub name: String,
    pub triggers: Vec<String>,
    pub dev_only: bool,
    pub permissions: Vec<String>,
    pub bot_permissions: Vec<String>,
}

/// A named, invocable action. Immutable once constructed; lives in the
/// registry for the process lifetime.
#[derive(Clone)]
pub struct Command {
    name: String,
    triggers: Vec<String>,
    dev_only: bool,
    permissions: Vec<String>,
    bot_permissions: Vec<String>,
    run: Arc<dyn CommandHandler>,
}

impl Command {
    /// Builds a command. The trigger list is seeded with `name` prepended,
    /// so the primary name always resolves.
    pub fn new(config: CommandConfig, run: Arc<dyn CommandHandler>) -> Self {
        let mut triggers = Vec::with_capacity(config.triggers.len() + 1);
        triggers.push(config.name.clone());
        triggers.extend(config.triggers);

        Self {
            name: config.name,
            triggers,
            dev_only: config.dev_only,
            permissions: config.permissions,
            bot_permissions: config.bot_permissions,
            run,
        }
    }

    /// Builds a command with the incomplete-command stub as its delegate.
    pub fn stub(config: CommandConfig) -> Self {
        Self::new(config, Arc::new(IncompleteHandler))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn dev_only(&self) -> bool {
        self.dev_only
    }

    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    pub fn bot_permissions(&self) -> &[String] {
        &self.bot_permissions
    }

    pub async fn run(&self, ctx: &Context, args: &[String]) -> anyhow::Result<RunOutcome> {
        self.run.run(ctx, args).await
    }

    /// Structural self-check, used at registration time to reject malformed
    /// definitions before they enter the registry. Reports the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), CommandValidateError> {
        if self.name.is_empty() {
            return Err(CommandValidateError::EmptyName);
        }
        match self.triggers.first() {
            Some(first) if *first == self.name => Ok(()),
            _ => Err(CommandValidateError::MissingSelfTrigger),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("triggers", &self.triggers)
            .field("dev_only", &self.dev_only)
            .field("permissions", &self.permissions)
            .field("bot_permissions", &self.bot_permissions)
            .finish()
    }
}
