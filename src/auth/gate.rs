/// Capability checks supplied by the host environment. Decouples the
/// authorization pass from any particular chat-platform client: the host
/// answers whether a named capability is held in the current channel or
/// guild context.
#[cfg_attr(test, mockall::automock)]
pub trait PermissionGate {
    /// Whether the invoking user holds the capability.
    fn user_has_permission(&self, capability: &str) -> bool;

    /// Whether the bot itself holds the capability.
    fn bot_has_permission(&self, capability: &str) -> bool;
}
