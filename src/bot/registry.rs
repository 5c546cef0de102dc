use fnv::FnvHashMap;

use super::command::Command;
use super::validate_error::CommandValidateError;

/// Process-lifetime set of command definitions, indexed by trigger word.
/// Built once at load time; read-only afterwards, so dispatch needs no
/// locking.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    triggers: FnvHashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the definition and indexes its triggers, lower-cased.
    /// A trigger already claimed by an earlier command keeps its first
    /// owner; empty aliases are never indexed.
    pub fn register(&mut self, command: Command) -> Result<(), CommandValidateError> {
        command.validate()?;

        let idx = self.commands.len();
        for trigger in command.triggers() {
            if trigger.is_empty() {
                log::warn!("command {:?} declares an empty alias, skipping it", command.name());
                continue;
            }
            let key = trigger.to_lowercase();
            if let Some(&owner) = self.triggers.get(&key) {
                log::warn!(
                    "trigger {:?} already resolves to {:?}, skipping it for {:?}",
                    trigger,
                    self.commands[owner].name(),
                    command.name()
                );
                continue;
            }
            self.triggers.insert(key, idx);
        }

        log::debug!(
            "registered command {:?} with trigger(s) {:?}",
            command.name(),
            command.triggers()
        );
        self.commands.push(command);
        Ok(())
    }

    /// Resolves a candidate token to the command owning that trigger.
    pub fn resolve(&self, trigger: &str) -> Option<&Command> {
        self.triggers
            .get(&trigger.to_lowercase())
            .map(|&idx| &self.commands[idx])
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
