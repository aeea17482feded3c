//! Plain text interface for playing a board in a terminal.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::data::Dir;
use crate::game::{Event, Game, Playable};

/// `verb` names the move command, its first letter is the short form.
fn help(verb: &str) -> String {
    let (short, rest) = verb.split_at(1);
    format!(
        "Commands:
  h(int)              -- hint next move
  l(oad) filename     -- load new puzzle file
  {}({}) {{N|S|E|W}}    -- {} in the given direction
  q(uit)              -- quit the game
  r(eset)             -- reset the current puzzle",
        short, rest, verb
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Hint,
    Load(String),
    Move(Dir),
    Quit,
    Reset,
    Invalid,
}

impl Command {
    fn parse(line: &str, verb: &str) -> Command {
        let mut words = line.split_whitespace();
        let cmd = match words.next() {
            Some(cmd) => cmd.to_lowercase(),
            None => return Command::Invalid,
        };
        let arg = words.next();
        let is_move = cmd == verb || cmd == verb[..1];

        match (cmd.as_str(), arg) {
            (_, Some(dir)) if is_move => match dir.parse() {
                Ok(dir) => Command::Move(dir),
                Err(_) => Command::Invalid,
            },
            ("h", _) | ("hint", _) => Command::Hint,
            ("l", Some(file)) | ("load", Some(file)) => Command::Load(file.to_string()),
            ("q", _) | ("quit", _) => Command::Quit,
            ("r", _) | ("reset", _) => Command::Reset,
            _ => Command::Invalid,
        }
    }
}

/// Reads commands until `quit` or the end of input.
pub fn run<B, R, W>(game: &mut Game<B>, mut input: R, out: &mut W) -> io::Result<()>
where
    B: Playable,
    R: BufRead,
    W: Write,
{
    let help = help(B::MOVE_COMMAND);
    writeln!(out, "{}", Event::Loaded(game.file().to_string()))?;
    write!(out, "{}", game.board())?;
    writeln!(out, "{}", help)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let command = Command::parse(&line, B::MOVE_COMMAND);
        debug!("Command: {:?}", command);
        let events = match command {
            Command::Quit => return Ok(()),
            Command::Invalid => {
                writeln!(out, "{}", help)?;
                continue;
            }
            Command::Hint => game.hint(),
            Command::Load(file) => vec![game.load_file(&file)],
            Command::Move(dir) => game.make_move(dir),
            Command::Reset => vec![game.reset()],
        };

        for event in &events {
            writeln!(out, "{}", event)?;
        }
        write!(out, "{}", game.board())?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::data::Pos;
    use crate::tilt::TiltConfig;
    use crate::tipover::TipOverConfig;

    const LEVEL: &str = "3 5 2 0 2 4\n0 0 0 0 0\n0 0 0 0 0\n2 0 0 1 1";

    fn run_on<B: Playable>(board: B, input: &str) -> (Game<B>, String) {
        let mut game = Game::new("test.txt", board);
        let mut out = Vec::new();
        run(&mut game, Cursor::new(input), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    fn play(input: &str) -> (Game<TipOverConfig>, String) {
        run_on(LEVEL.parse().unwrap(), input)
    }

    #[test]
    fn parsing_commands() {
        assert_eq!(Command::parse("h", "move"), Command::Hint);
        assert_eq!(Command::parse("HINT\n", "move"), Command::Hint);
        assert_eq!(Command::parse("m n", "move"), Command::Move(Dir::North));
        assert_eq!(Command::parse("move W", "move"), Command::Move(Dir::West));
        assert_eq!(
            Command::parse("l a.txt", "move"),
            Command::Load("a.txt".to_string())
        );
        assert_eq!(Command::parse("q", "move"), Command::Quit);
        assert_eq!(Command::parse("reset", "move"), Command::Reset);
        assert_eq!(Command::parse("m x", "move"), Command::Invalid);
        assert_eq!(Command::parse("m", "move"), Command::Invalid);
        assert_eq!(Command::parse("load", "move"), Command::Invalid);
        assert_eq!(Command::parse("dance", "move"), Command::Invalid);
        assert_eq!(Command::parse("", "move"), Command::Invalid);

        assert_eq!(Command::parse("t s", "tilt"), Command::Move(Dir::South));
        assert_eq!(Command::parse("Tilt e", "tilt"), Command::Move(Dir::East));
        assert_eq!(Command::parse("m n", "tilt"), Command::Invalid);
        assert_eq!(Command::parse("r", "tilt"), Command::Reset);
    }

    #[test]
    fn help_names_the_move() {
        assert!(help("move").contains("  m(ove) {N|S|E|W}    -- move in the given direction\n"));
        assert!(help("tilt").contains("  t(ilt) {N|S|E|W}    -- tilt in the given direction\n"));
    }

    #[test]
    fn winning() {
        let (game, out) = play("m e\nm e\nm e\nm e\nm e\nq\n");
        assert!(game.is_won());
        assert!(out.starts_with("Loaded: test.txt\n"));
        assert!(out.contains("A tower has been tipped over.\n"));
        assert_eq!(out.matches("Moved E.").count(), 3);
        assert!(out.contains("I WON!\n"));
        assert!(out.contains("Current board is already solved.\n"));
    }

    #[test]
    fn bad_moves_and_help() {
        let (game, out) = play("m s\nfly\nm n\n");
        assert_eq!(game.board().tipper(), Pos::new(1, 0));
        assert!(out.contains("Move goes off the board.\n"));
        assert!(out.contains("A tower has been tipped over.\n"));
        // once at the start and once for the bad command
        assert_eq!(out.matches("Commands:").count(), 2);
    }

    #[test]
    fn hint_and_reset() {
        let (game, out) = play("h\nr\nh\nh\n");
        assert!(out.contains("Next step!\n"));
        assert!(out.contains("Puzzle reset!\n"));
        assert!(!game.is_won());
        assert_eq!(game.board().tipper().c, 2);
    }

    #[test]
    fn loading_a_missing_file() {
        let (game, out) = play("l missing.txt\n");
        assert!(out.contains("Failed to load missing.txt\n"));
        assert_eq!(game.file(), "test.txt");
    }

    #[test]
    fn tilting() {
        let board: TiltConfig = "3\nG . .\n* . .\nB * O".parse().unwrap();
        let (game, out) = run_on(board, "m e\nt e\nt s\nq\n");
        assert!(game.is_won());
        // `m` is not a command here
        assert_eq!(out.matches("Commands:").count(), 2);
        assert!(out.contains("Tilted E.\n. . G\n* . .\nB * O\n"));
        assert!(out.contains("Tilted S.\nI WON!\n. . .\n* . .\nB * O\n"));
    }

    #[test]
    fn blue_slider_in_a_hole() {
        let board: TiltConfig = "3\nB G O\n* * *\n* * *".parse().unwrap();
        let (game, out) = run_on(board.clone(), "t e\nh\n");
        assert_eq!(game.board(), &board);
        assert!(out.contains("Illegal move. A blue slider will fall through the hole!\n"));
        assert!(out.contains("No solution\n"));
    }
}
