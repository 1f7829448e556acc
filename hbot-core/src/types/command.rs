//! Chat commands understood by the relay.

/// A zero-argument slash command. Anything else starting with `/` is [`Command::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Cancel,
    Delete,
    Highlights,
    Help,
    Other(String),
}

impl Command {
    /// Parses the first token of `text` as a command. `/start@my_bot` is accepted; trailing
    /// arguments are ignored. Returns None for free text.
    pub fn parse(text: &str) -> Option<Self> {
        let token = text.trim_start().split_whitespace().next()?;
        let name = token.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        if name.is_empty() {
            return None;
        }
        Some(match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "cancel" => Command::Cancel,
            "delete" => Command::Delete,
            "highlights" => Command::Highlights,
            "help" => Command::Help,
            other => Command::Other(other.to_string()),
        })
    }
}
