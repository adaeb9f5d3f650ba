//! Command-line demo for the `typo-core` engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p typo-cli -- spaces notes.md             # hard spaces, to stdout
//! cargo run -p typo-cli -- spaces notes.md --write     # rewrite the file in place
//! cargo run -p typo-cli -- apostrophes notes.md        # curl straight apostrophes
//! cargo run -p typo-cli -- type draft.txt              # replay the file as keystrokes
//! cargo run -p typo-cli -- invisibles notes.md         # list hard spaces and em dashes
//! ```
//!
//! The typing replay accepts the same JSON settings blob a host editor
//! would persist; omitted fields keep their defaults:
//!
//! ```bash
//! cargo run -p typo-cli -- type draft.txt --settings prefs.json
//! ```
//!
//! CRLF files are normalized on load and written back with their original
//! line endings.

use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use typo_core::{
    Document, HighlightKind, Key, KeyEvent, LineEnding, Position, PositionRange, Settings,
    Typographer, insert_hard_spaces, normalize_apostrophes, scan_invisibles,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Spaces,
    Apostrophes,
    Type,
    Invisibles,
}

struct CliArgs {
    command: Command,
    file: PathBuf,
    write: bool,
    settings_path: Option<PathBuf>,
}

fn print_usage(program: &str) {
    eprintln!("usage: {program} <command> <file> [options]");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  spaces       insert French hard spaces across the document");
    eprintln!("  apostrophes  replace straight apostrophes with typographic ones");
    eprintln!("  type         replay the file through the live typing rules");
    eprintln!("  invisibles   list non-breaking spaces and em dashes");
    eprintln!();
    eprintln!("options:");
    eprintln!("  -w, --write           rewrite the file instead of printing");
    eprintln!("  -s, --settings FILE   apply a JSON settings blob");
}

fn parse_args() -> Option<CliArgs> {
    let mut args = env::args().skip(1);

    let command = match args.next()?.as_str() {
        "spaces" => Command::Spaces,
        "apostrophes" => Command::Apostrophes,
        "type" => Command::Type,
        "invisibles" => Command::Invisibles,
        _ => return None,
    };

    let mut file = None;
    let mut write = false;
    let mut settings_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-w" | "--write" => write = true,
            "-s" | "--settings" => settings_path = Some(PathBuf::from(args.next()?)),
            _ if file.is_none() => file = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    Some(CliArgs {
        command,
        file: file?,
        write,
        settings_path,
    })
}

fn load_settings(path: &Path) -> io::Result<Settings> {
    let blob = fs::read_to_string(path)?;
    serde_json::from_str(&blob).map_err(io::Error::other)
}

/// Replay `text` one keystroke at a time, the way a host editor feeds the
/// engine, and return what ends up in the buffer.
fn replay_keystrokes(text: &str, settings: Settings) -> String {
    let mut typographer = Typographer::new(settings);
    let mut document = Document::new();
    let mut cursor = Position::new(0, 0);

    for ch in text.chars() {
        let key = if ch == '\n' { Key::Enter } else { Key::Char(ch) };
        let event = KeyEvent::new(key, cursor);

        if let Some(edit) = typographer.handle_key(&event, &document) {
            document.apply(&edit);
            cursor = document.clamp(edit.cursor);
        } else {
            document.replace_range(PositionRange::caret(cursor), &ch.to_string());
            cursor = if ch == '\n' {
                Position::new(cursor.line + 1, 0)
            } else {
                Position::new(cursor.line, cursor.column + 1)
            };
        }
    }

    document.text()
}

fn list_invisibles(text: &str) -> String {
    let document = Document::from_text(text);
    let mut out = String::new();

    for span in scan_invisibles(text, 0) {
        let position = document.char_offset_to_position(span.start);
        let label = match span.kind {
            HighlightKind::NonBreakingSpace => "non-breaking space",
            HighlightKind::EmDash => "em dash",
        };
        out.push_str(&format!(
            "{}:{}\t{label}\n",
            position.line + 1,
            position.column + 1
        ));
    }

    out
}

fn main() -> io::Result<()> {
    let Some(args) = parse_args() else {
        let program = env::args().next().unwrap_or_else(|| "typo".to_string());
        print_usage(&program);
        process::exit(1);
    };

    let settings = match &args.settings_path {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    let source = fs::read_to_string(&args.file)?;
    let ending = LineEnding::detect(&source);
    let text = LineEnding::normalize(&source);

    let output = match args.command {
        Command::Spaces => ending.restore(&insert_hard_spaces(&text)),
        Command::Apostrophes => ending.restore(&normalize_apostrophes(&text)),
        Command::Type => ending.restore(&replay_keystrokes(&text, settings)),
        Command::Invisibles => {
            print!("{}", list_invisibles(&text));
            return Ok(());
        }
    };

    if args.write {
        fs::write(&args.file, &output)?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_produces_typographic_text() {
        let result = replay_keystrokes("l'aube \"douce\"", Settings::default());
        assert_eq!(result, "l’aube « douce »");
    }

    #[test]
    fn test_replay_respects_settings() {
        let mut settings = Settings::default();
        settings.quotation_marks = false;
        let result = replay_keystrokes("dit \"oui\"", settings);
        assert_eq!(result, "dit \"oui\"");
    }

    #[test]
    fn test_replay_em_dash() {
        let result = replay_keystrokes("eh-- bien", Settings::default());
        assert_eq!(result, "eh— bien");
    }

    #[test]
    fn test_invisible_listing_positions() {
        let listing = list_invisibles("a\u{00A0}b\nc—d");
        assert_eq!(listing, "1:2\tnon-breaking space\n2:2\tem dash\n");
    }
}
