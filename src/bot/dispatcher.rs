use std::collections::HashSet;

use crate::auth::{authorize, Authorization, PermissionGate};

use super::command::Command;
use super::invocation::{matches_prefix, Invocation};
use super::registry::CommandRegistry;

/// Static dispatch configuration supplied by the host, so the core never
/// reads ambient state.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Leading substring that marks a message as a command invocation.
    pub prefix: String,
    /// Invoker ids exempt from all permission and dev-only checks.
    pub developers: HashSet<String>,
    /// Prefix length to assume when no detected prefix is at hand.
    pub default_prefix_len: Option<usize>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            developers: HashSet::new(),
            default_prefix_len: None,
        }
    }
}

/// One incoming message as the host saw it.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub content: String,
    pub invoker_id: String,
    /// The message opens with an explicit mention of the bot.
    pub is_direct_mention: bool,
    /// A member/guild context is resolvable for the invoker.
    pub has_member_context: bool,
}

/// What one dispatch pass produced. Absence of a trigger match is a normal
/// negative result, not an error.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    NoMatch,
    Matched {
        command: Command,
        args: Vec<String>,
        authorization: Authorization,
    },
}

/// Runs the prefix check, invocation parsing, trigger resolution and
/// authorization as one pass over an incoming message.
pub struct Dispatcher {
    registry: CommandRegistry,
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, config: DispatchConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn dispatch(&self, message: &IncomingMessage, gate: &dyn PermissionGate) -> DispatchOutcome {
        if !matches_prefix(&message.content, &self.config.prefix, message.is_direct_mention) {
            return DispatchOutcome::NoMatch;
        }

        let invocation = Invocation::parse(
            &message.content,
            Some(&self.config.prefix),
            self.config.default_prefix_len,
        );

        let command = match self.registry.resolve(&invocation.command) {
            Some(command) => command.clone(),
            None => {
                log::debug!("no command behind token {:?}", invocation.command);
                return DispatchOutcome::NoMatch;
            }
        };

        let authorization = authorize(
            &message.invoker_id,
            message.has_member_context,
            &command,
            &self.config.developers,
            gate,
        );

        log::debug!(
            "dispatching {:?} for {:?}: {:?}",
            command.name(),
            message.invoker_id,
            authorization
        );

        DispatchOutcome::Matched {
            command,
            args: invocation.args,
            authorization,
        }
    }
}
