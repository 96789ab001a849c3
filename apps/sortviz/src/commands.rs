//! Interactive line commands typed at the terminal prompt.

use shared::protocol::InboundEvent;

pub const HELP: &str = "commands: start <count> | sort | click <value> | reset | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Raw count text, validated by the session like the entry screen field.
    Start(String),
    Event(InboundEvent),
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Option<HostCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();

    let command = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("start", Some(raw)) => HostCommand::Start(raw.to_string()),
        ("start", None) => return Err("start needs a count".to_string()),
        ("sort", None) => HostCommand::Event(InboundEvent::SortToggleRequested),
        ("click", Some(raw)) => {
            let value = raw
                .parse::<u32>()
                .map_err(|_| format!("'{raw}' is not a value"))?;
            HostCommand::Event(InboundEvent::ValueClicked { value })
        }
        ("click", None) => return Err("click needs a value".to_string()),
        ("reset", None) => HostCommand::Event(InboundEvent::ResetRequested),
        ("help", _) => HostCommand::Help,
        ("quit" | "exit", _) => HostCommand::Quit,
        _ => return Err(format!("unknown command '{}'", line.trim())),
    };
    Ok(Some(command))
}
