use common::games::tictactoe::{CELL_COUNT, Difficulty, GameMode, Mark};

use crate::theme::{AnimationSpeed, ThemeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Board index, already converted from the 1-based cell number.
    Place(usize),
    NewGame,
    Jump(usize),
    History,
    Mode(GameMode),
    Difficulty(Difficulty),
    PlayAs(Mark),
    Theme(ThemeType),
    Speed(AnimationSpeed),
    Scores,
    ResetScores,
    Save,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                          place a mark (cells numbered left to right, top to bottom)
  new                          start a new game
  history                      list the moves of this game
  jump <n>                     go back to move n (0 is the empty board)
  mode human|ai                switch between Human vs Human and Human vs AI
  difficulty easy|medium|hard  set the AI difficulty
  play-as x|o                  choose your mark against the AI
  theme neon|elegance|modern   change the colour theme
  speed slow|normal|fast       change the animation speed
  scores                       show the score board
  reset-scores                 reset the score board
  save                         save the current settings
  help                         show this help
  quit                         exit";

pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(name) = parts.next() else {
        return Err("Enter a command, or 'help' for the list".to_string());
    };
    let argument = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments for '{}'", name));
    }

    let name = name.to_ascii_lowercase();
    if let Ok(cell) = name.parse::<usize>() {
        return parse_cell(cell, argument);
    }

    match (name.as_str(), argument) {
        ("new", None) => Ok(Command::NewGame),
        ("history", None) => Ok(Command::History),
        ("jump", Some(arg)) => arg
            .parse::<usize>()
            .map(Command::Jump)
            .map_err(|_| format!("'{}' is not a move number", arg)),
        ("mode", Some(arg)) => arg.parse().map(Command::Mode),
        ("difficulty", Some(arg)) => arg.parse().map(Command::Difficulty),
        ("play-as", Some(arg)) => arg.parse().map(Command::PlayAs),
        ("theme", Some(arg)) => arg.parse().map(Command::Theme),
        ("speed", Some(arg)) => arg.parse().map(Command::Speed),
        ("scores", None) => Ok(Command::Scores),
        ("reset-scores", None) => Ok(Command::ResetScores),
        ("save", None) => Ok(Command::Save),
        ("help" | "?", None) => Ok(Command::Help),
        ("quit" | "exit" | "q", None) => Ok(Command::Quit),
        ("jump" | "mode" | "difficulty" | "play-as" | "theme" | "speed", None) => {
            Err(format!("'{}' needs an argument, see 'help'", name))
        }
        (
            "new" | "history" | "scores" | "reset-scores" | "save" | "help" | "?" | "quit" | "exit"
            | "q",
            Some(_),
        ) => Err(format!("'{}' takes no arguments", name)),
        _ => Err(format!("Unknown command '{}', type 'help' for the list", name)),
    }
}

fn parse_cell(cell: usize, argument: Option<&str>) -> Result<Command, String> {
    if argument.is_some() {
        return Err("A move takes a single cell number".to_string());
    }
    if !(1..=CELL_COUNT).contains(&cell) {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }
    Ok(Command::Place(cell - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 5 "), Ok(Command::Place(4)));
        assert_eq!(parse_command("9"), Ok(Command::Place(8)));
    }

    #[test]
    fn test_cell_out_of_range() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("3 4").is_err());
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("NEW"), Ok(Command::NewGame));
        assert_eq!(parse_command("history"), Ok(Command::History));
        assert_eq!(parse_command("scores"), Ok(Command::Scores));
        assert_eq!(parse_command("reset-scores"), Ok(Command::ResetScores));
        assert_eq!(parse_command("save"), Ok(Command::Save));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(parse_command("jump 3"), Ok(Command::Jump(3)));
        assert_eq!(parse_command("mode ai"), Ok(Command::Mode(GameMode::HumanVsAi)));
        assert_eq!(parse_command("mode human"), Ok(Command::Mode(GameMode::HumanVsHuman)));
        assert_eq!(
            parse_command("difficulty hard"),
            Ok(Command::Difficulty(Difficulty::Hard))
        );
        assert_eq!(parse_command("play-as o"), Ok(Command::PlayAs(Mark::O)));
        assert_eq!(parse_command("theme modern"), Ok(Command::Theme(ThemeType::Modern)));
        assert_eq!(parse_command("speed slow"), Ok(Command::Speed(AnimationSpeed::Slow)));
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("   ").is_err());
        assert!(parse_command("jump").is_err());
        assert!(parse_command("jump back").is_err());
        assert!(parse_command("difficulty impossible").is_err());
        assert!(parse_command("play-as z").is_err());
        assert!(parse_command("new game").is_err());
        assert!(parse_command("fly").is_err());
    }
}
