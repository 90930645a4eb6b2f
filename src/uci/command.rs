//! Tokenizing UCI input lines into commands.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    /// Every token of the line, including the leading `position`
    Position(Vec<String>),
    Go {
        depth: Option<u32>,
    },
    SetOption {
        name: String,
        value: Option<String>,
    },
    /// Print the static evaluation
    Eval,
    /// Print the current position and game status
    Display,
    Quit,
    Unknown(String),
}

pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let cmd = match first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(parts.iter().map(|p| (*p).to_string()).collect()),
        "go" => UciCommand::Go {
            depth: parse_go_depth(&parts[1..]),
        },
        "setoption" => parse_setoption(&parts[1..]),
        "eval" => UciCommand::Eval,
        "d" => UciCommand::Display,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// `depth N` anywhere in the `go` arguments; other limits are ignored.
fn parse_go_depth(args: &[&str]) -> Option<u32> {
    args.iter()
        .position(|arg| *arg == "depth")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse::<u32>().ok())
}

/// `name <words...> [value <words...>]`; names may contain spaces.
fn parse_setoption(args: &[&str]) -> UciCommand {
    let name_start = args
        .iter()
        .position(|arg| *arg == "name")
        .map_or(0, |i| i + 1);
    let value_at = args.iter().position(|arg| *arg == "value");

    let name_end = value_at.unwrap_or(args.len()).max(name_start);
    let name = args[name_start..name_end].join(" ");
    let value = value_at
        .map(|i| args[i + 1..].join(" "))
        .filter(|v| !v.is_empty());

    UciCommand::SetOption { name, value }
}
