//! Typing rule tests
//!
//! Drives keystrokes through the session facade and applies the resulting
//! directives to a real document, the way a host would.

use typo_core::{
    Document, Key, KeyEvent, Position, PositionRange, QuoteParity, Settings, Typographer,
};

#[test]
fn test_apostrophe_keystroke() {
    let mut typographer = Typographer::default();
    let mut document = Document::from_text("its");

    let event = KeyEvent::new(Key::Char('\''), Position::new(0, 2));
    let edit = typographer.handle_key(&event, &document).unwrap();
    document.apply(&edit);

    assert_eq!(document.text(), "it’s");
    assert_eq!(edit.cursor, Position::new(0, 3));
}

#[test]
fn test_apostrophe_replaces_selection() {
    let mut typographer = Typographer::default();
    let mut document = Document::from_text("qu est-ce");

    let selection = PositionRange::new(Position::new(0, 2), Position::new(0, 3));
    let event = KeyEvent::new(Key::Char('\''), Position::new(0, 3)).with_selection(selection);
    let edit = typographer.handle_key(&event, &document).unwrap();
    document.apply(&edit);

    assert_eq!(document.text(), "qu’est-ce");
    assert_eq!(edit.cursor, Position::new(0, 3));
}

#[test]
fn test_quotation_alternation() {
    let mut typographer = Typographer::default();
    let document = Document::new();
    let event = KeyEvent::new(Key::Char('"'), Position::new(0, 0));

    let texts: Vec<String> = (0..3)
        .map(|_| typographer.handle_key(&event, &document).unwrap().text)
        .collect();

    assert_eq!(texts, vec!["« ", " »", "« "]);
}

#[test]
fn test_quotation_cursor_advances_two_columns() {
    let mut typographer = Typographer::default();
    let mut document = Document::from_text("dit ");

    let event = KeyEvent::new(Key::Char('"'), Position::new(0, 4));
    let edit = typographer.handle_key(&event, &document).unwrap();
    document.apply(&edit);

    assert_eq!(document.text(), "dit « ");
    assert_eq!(edit.cursor, Position::new(0, 6));
}

#[test]
fn test_em_dash_conversion() {
    let mut typographer = Typographer::default();
    let mut document = Document::from_text("a--");

    let event = KeyEvent::new(Key::Char(' '), Position::new(0, 3));
    let edit = typographer.handle_key(&event, &document).unwrap();
    document.apply(&edit);

    assert_eq!(document.text(), "a— ");
    assert_eq!(edit.cursor, Position::new(0, 3));
}

#[test]
fn test_em_dash_mid_line() {
    let mut typographer = Typographer::default();
    let mut document = Document::from_text("oui--non");

    let event = KeyEvent::new(Key::Char(' '), Position::new(0, 5));
    let edit = typographer.handle_key(&event, &document).unwrap();
    document.apply(&edit);

    assert_eq!(document.text(), "oui— non");
}

#[test]
fn test_em_dash_lookback_fails_safely() {
    let mut typographer = Typographer::default();

    // One character on the line: no two-character lookback, no rule
    let document = Document::from_text("-");
    let event = KeyEvent::new(Key::Char(' '), Position::new(0, 1));
    assert!(typographer.handle_key(&event, &document).is_none());

    // The hyphens are on the previous line: the window stays on the
    // cursor's own line
    let document = Document::from_text("--\nx");
    let event = KeyEvent::new(Key::Char(' '), Position::new(1, 1));
    assert!(typographer.handle_key(&event, &document).is_none());
}

#[test]
fn test_double_enter() {
    let mut settings = Settings::default();
    settings.two_enters = true;
    let mut typographer = Typographer::new(settings);
    let mut document = Document::from_text("fin de paragraphe");

    let event = KeyEvent::new(Key::Enter, Position::new(0, 17));
    let edit = typographer.handle_key(&event, &document).unwrap();
    document.apply(&edit);

    assert_eq!(document.text(), "fin de paragraphe\n\n");
    assert_eq!(edit.cursor, Position::new(2, 17));
}

#[test]
fn test_enter_passes_through_by_default() {
    let mut typographer = Typographer::default();
    let document = Document::from_text("texte");

    let event = KeyEvent::new(Key::Enter, Position::new(0, 5));
    assert!(typographer.handle_key(&event, &document).is_none());
}

#[test]
fn test_all_rules_disabled() {
    let settings = Settings {
        apostrophe: false,
        quotation_marks: false,
        em_dashes: false,
        two_enters: false,
        ..Settings::default()
    };
    let mut typographer = Typographer::new(settings);
    let document = Document::from_text("a--");

    for key in [Key::Char('\''), Key::Char('"'), Key::Char(' '), Key::Enter] {
        let event = KeyEvent::new(key, Position::new(0, 3));
        assert!(typographer.handle_key(&event, &document).is_none());
    }
    // The quotation flag being off means parity never moved
    assert_eq!(typographer.quote_parity(), QuoteParity::Opening);
}

#[test]
fn test_apostrophe_normalization_command() {
    let typographer = Typographer::default();
    let document = Document::from_text("l'arbre de l'île\nc'est d'accord");

    let rewrite = typographer.normalize_apostrophes(&document, Position::new(1, 6));
    assert_eq!(rewrite.text, "l’arbre de l’île\nc’est d’accord");
    assert_eq!(rewrite.cursor, Position::new(1, 6));

    // Idempotent
    let again = Document::from_text(&rewrite.text);
    assert_eq!(
        typographer.normalize_apostrophes(&again, rewrite.cursor).text,
        rewrite.text
    );
}
