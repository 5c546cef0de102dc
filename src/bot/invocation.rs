/// A message resolved into a candidate command token and its arguments.
/// Ephemeral, derived per incoming message.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Strips the prefix off the raw text and splits the rest on whitespace.
    /// The first token, lower-cased, is the candidate command; the remaining
    /// tokens keep their case. Prefix length falls back from the detected
    /// prefix to the configured default to 1, and is counted in chars so a
    /// multi-byte prefix cannot split the text mid-character.
    ///
    /// A message that is all prefix yields an empty candidate token, which
    /// no registered command can own.
    pub fn parse(content: &str, used_prefix: Option<&str>, default_prefix_len: Option<usize>) -> Self {
        let prefix_len = used_prefix
            .map(|prefix| prefix.chars().count())
            .or(default_prefix_len)
            .unwrap_or(1);

        let rest: String = content.chars().skip(prefix_len).collect();
        let mut tokens = rest.trim().split_whitespace();

        let command = tokens.next().unwrap_or_default().to_lowercase();
        let args = tokens.map(str::to_string).collect();

        Self { command, args }
    }
}

/// Whether the message is addressed to the bot at all. A direct mention
/// bypasses the prefix check; otherwise the trimmed, case-folded text must
/// start with the trimmed, case-folded prefix.
pub fn matches_prefix(content: &str, prefix: &str, is_direct_mention: bool) -> bool {
    if is_direct_mention {
        return true;
    }

    content
        .to_lowercase()
        .trim()
        .starts_with(prefix.to_lowercase().trim())
}
