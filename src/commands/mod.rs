mod ping;

pub use ping::ping;

use crate::bot::Command;

/// Commands every registry starts with.
pub fn builtin_commands() -> Vec<Command> {
    vec![ping()]
}
