use std::collections::HashSet;

use crate::bot::Command;

use super::gate::PermissionGate;

/// Why an invocation was turned down. Denials are expected outcomes
/// rendered back to the invoker, never raised as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DenialReason {
    NoMemberContext,
    DeveloperOnly,
    MissingBotPermissions(Vec<String>),
    MissingUserPermissions(Vec<String>),
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DenialReason::NoMemberContext => {
                write!(f, "Unable to verify permissions in this context.")
            }
            DenialReason::DeveloperOnly => write!(f, "This command is for developers only."),
            DenialReason::MissingBotPermissions(caps) => {
                write!(f, "I'm missing the following permissions: {}", caps.join(", "))
            }
            DenialReason::MissingUserPermissions(caps) => {
                write!(f, "You're missing the following permissions: {}", caps.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Authorization {
    Allowed,
    Denied(DenialReason),
}

impl Authorization {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Authorization::Allowed)
    }
}

/// Decides whether the invoker may run the command. Checks short-circuit
/// in a fixed order: member context, developer bypass, dev-only flag, bot
/// capabilities, then user capabilities. The bot's own capabilities come
/// first since the user's shortfall is moot if the bot cannot act anyway.
pub fn authorize(
    invoker_id: &str,
    has_member_context: bool,
    command: &Command,
    developers: &HashSet<String>,
    gate: &dyn PermissionGate,
) -> Authorization {
    if !has_member_context {
        return Authorization::Denied(DenialReason::NoMemberContext);
    }

    // Developers bypass every remaining check, dev_only included.
    if developers.contains(invoker_id) {
        return Authorization::Allowed;
    }

    if command.dev_only() {
        return Authorization::Denied(DenialReason::DeveloperOnly);
    }

    let missing: Vec<String> = command
        .bot_permissions()
        .iter()
        .filter(|cap| !gate.bot_has_permission(cap.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Authorization::Denied(DenialReason::MissingBotPermissions(missing));
    }

    let missing: Vec<String> = command
        .permissions()
        .iter()
        .filter(|cap| !gate.user_has_permission(cap.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Authorization::Denied(DenialReason::MissingUserPermissions(missing));
    }

    Authorization::Allowed
}

#[cfg(test)]
mod should {
    use super::*;
    use super::super::gate::MockPermissionGate;
    use crate::bot::CommandConfig;

    fn command(config: CommandConfig) -> Command {
        Command::stub(config)
    }

    fn developers(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn granting_nothing() -> MockPermissionGate {
        let mut gate = MockPermissionGate::new();
        gate.expect_user_has_permission().return_const(false);
        gate.expect_bot_has_permission().return_const(false);
        gate
    }

    #[test]
    fn deny_without_a_member_context_before_anything_else() {
        let command = command(CommandConfig {
            name: "ban".to_string(),
            dev_only: true,
            permissions: vec!["BAN_MEMBERS".to_string()],
            ..Default::default()
        });

        let result = authorize("dev-1", false, &command, &developers(&["dev-1"]), &granting_nothing());

        assert_eq!(
            result,
            Authorization::Denied(DenialReason::NoMemberContext)
        );
        assert_eq!(
            format!("{}", DenialReason::NoMemberContext),
            "Unable to verify permissions in this context."
        );
    }

    #[test]
    fn let_a_developer_through_every_check() {
        let command = command(CommandConfig {
            name: "reload".to_string(),
            dev_only: true,
            permissions: vec!["ADMINISTRATOR".to_string()],
            bot_permissions: vec!["ADMINISTRATOR".to_string()],
            ..Default::default()
        });

        let result = authorize("dev-1", true, &command, &developers(&["dev-1"]), &granting_nothing());

        assert_eq!(result, Authorization::Allowed);
    }

    #[test]
    fn deny_a_dev_only_command_to_a_regular_invoker() {
        let command = command(CommandConfig {
            name: "reload".to_string(),
            dev_only: true,
            ..Default::default()
        });

        let result = authorize("user-1", true, &command, &developers(&["dev-1"]), &granting_nothing());

        assert_eq!(result, Authorization::Denied(DenialReason::DeveloperOnly));
        assert_eq!(
            format!("{}", DenialReason::DeveloperOnly),
            "This command is for developers only."
        );
    }

    #[test]
    fn report_missing_bot_permissions_with_the_exact_wording() {
        let command = command(CommandConfig {
            name: "ban".to_string(),
            bot_permissions: vec!["BAN_MEMBERS".to_string()],
            ..Default::default()
        });

        let result = authorize("user-1", true, &command, &developers(&[]), &granting_nothing());

        let reason = match result {
            Authorization::Denied(reason) => reason,
            other => panic!("expected a denial, got {:?}", other),
        };
        assert_eq!(
            format!("{}", reason),
            "I'm missing the following permissions: BAN_MEMBERS"
        );
    }

    #[test]
    fn report_bot_permissions_before_user_permissions() {
        let command = command(CommandConfig {
            name: "ban".to_string(),
            permissions: vec!["BAN_MEMBERS".to_string()],
            bot_permissions: vec!["BAN_MEMBERS".to_string()],
            ..Default::default()
        });

        let result = authorize("user-1", true, &command, &developers(&[]), &granting_nothing());

        assert_eq!(
            result,
            Authorization::Denied(DenialReason::MissingBotPermissions(vec![
                "BAN_MEMBERS".to_string()
            ]))
        );
    }

    #[test]
    fn list_only_the_capabilities_the_user_lacks() {
        let command = command(CommandConfig {
            name: "purge".to_string(),
            permissions: vec![
                "MANAGE_MESSAGES".to_string(),
                "READ_HISTORY".to_string(),
            ],
            ..Default::default()
        });

        let mut gate = MockPermissionGate::new();
        gate.expect_user_has_permission()
            .returning(|cap| cap == "READ_HISTORY");

        let result = authorize("user-1", true, &command, &developers(&[]), &gate);

        assert_eq!(
            result,
            Authorization::Denied(DenialReason::MissingUserPermissions(vec![
                "MANAGE_MESSAGES".to_string()
            ]))
        );
        assert_eq!(
            format!("{}", DenialReason::MissingUserPermissions(vec!["MANAGE_MESSAGES".to_string()])),
            "You're missing the following permissions: MANAGE_MESSAGES"
        );
    }

    #[test]
    fn allow_when_every_capability_is_held() {
        let command = command(CommandConfig {
            name: "ban".to_string(),
            permissions: vec!["BAN_MEMBERS".to_string()],
            bot_permissions: vec!["BAN_MEMBERS".to_string()],
            ..Default::default()
        });

        let mut gate = MockPermissionGate::new();
        gate.expect_user_has_permission().return_const(true);
        gate.expect_bot_has_permission().return_const(true);

        let result = authorize("user-1", true, &command, &developers(&[]), &gate);

        assert!(result.is_allowed());
    }

    #[test]
    fn allow_a_command_with_no_requirements() {
        let command = command(CommandConfig {
            name: "ping".to_string(),
            ..Default::default()
        });

        // Gate must never be consulted when both capability lists are empty.
        let result = authorize("user-1", true, &command, &developers(&[]), &MockPermissionGate::new());

        assert!(result.is_allowed());
    }
}
