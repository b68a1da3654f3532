use std::str::FromStr;

use anyhow::{Context, bail};
use memfire_core::TileKey;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click(TileKey),
    Select(String),
    Sets,
    Reset,
    Show,
    Json,
    Wait,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Show);
        };
        let arg = words.next();

        Ok(match (verb, arg) {
            ("click" | "c", Some(key)) => Self::Click(
                key.parse::<TileKey>()
                    .with_context(|| format!("`{key}` is not a tile number"))?,
            ),
            ("set" | "s", Some(name)) => Self::Select(name.into()),
            ("sets", None) => Self::Sets,
            ("reset" | "r", None) => Self::Reset,
            ("show", None) => Self::Show,
            ("json", None) => Self::Json,
            ("wait" | "w", None) => Self::Wait,
            ("help" | "?", None) => Self::Help,
            ("quit" | "q" | "exit", None) => Self::Quit,
            (key, None) if key.chars().all(|c| c.is_ascii_digit()) => Self::Click(
                key.parse::<TileKey>()
                    .with_context(|| format!("`{key}` is not a tile number"))?,
            ),
            _ => bail!("Unknown command `{}`, try `help`", line.trim()),
        })
    }
}

pub const HELP: &str = "\
commands:
  click <n> | <n>   flip tile n
  set <name>        switch symbol set
  sets              list symbol sets
  reset             start over once the game has ended
  wait              wait for pending flips to settle
  show | json       print the board
  quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clicks() {
        assert_eq!("click 4".parse::<Command>().unwrap(), Command::Click(4));
        assert_eq!("  12 ".parse::<Command>().unwrap(), Command::Click(12));
    }

    #[test]
    fn parses_set_selection() {
        assert_eq!(
            "set fruit".parse::<Command>().unwrap(),
            Command::Select("fruit".into())
        );
    }

    #[test]
    fn blank_line_shows_board() {
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
    }

    #[test]
    fn rejects_garbage() {
        assert!("click x".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
        assert!("99999999".parse::<Command>().is_err());
    }
}
