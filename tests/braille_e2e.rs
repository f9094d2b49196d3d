//! End-to-end conversion tests across all four representations.

use brlconv::braille::{BrailleError, Converter, DotParseOptions, DotStyle, ErrorPolicy, Source, Target};

const LETTERS: &str = "ABCDEFGHIJ";
const LETTERS_UNICODE: &str = "⠁⠃⠉⠙⠑⠋⠛⠓⠊⠚";
const LETTERS_DOTS: &str = "p1p12p14p145p15p124p1245p125p24p245";

fn strict() -> Converter {
    Converter::new(ErrorPolicy::Raise)
}

// ==================== Letter Round Trip ====================

#[test]
fn test_letters_to_unicode() {
    assert_eq!(strict().ascii_to_unicode(LETTERS).unwrap(), LETTERS_UNICODE);
}

#[test]
fn test_letters_unicode_to_dots() {
    let dots = strict()
        .unicode_to_dots(LETTERS_UNICODE, &DotStyle::default())
        .unwrap();
    assert_eq!(dots, LETTERS_DOTS);
}

#[test]
fn test_letters_dots_back_to_unicode() {
    let unicode = strict()
        .dots_to_unicode(LETTERS_DOTS, &DotParseOptions::default())
        .unwrap();
    assert_eq!(unicode, LETTERS_UNICODE);
}

#[test]
fn test_letters_ascii_to_dots_and_back() {
    let conv = strict();
    let dots = conv.ascii_to_dots(LETTERS, &DotStyle::default()).unwrap();
    assert_eq!(dots, LETTERS_DOTS);
    assert_eq!(conv.dots_to_ascii(&dots, &DotParseOptions::default()).unwrap(), LETTERS);
}

#[test]
fn test_parenthesized_letters() {
    let conv = strict();
    let dots = conv.ascii_to_dots("LAB", &DotStyle::parenthesized()).unwrap();
    assert_eq!(dots, "(1,2,3)(1)(1,2)");
    let options = DotParseOptions::new("(", "012345678,() ");
    assert_eq!(conv.dots_to_ascii(&dots, &options).unwrap(), "LAB");
}

// ==================== Pseudo-Braille ====================

#[test]
fn test_pseudo_dots_1_2() {
    assert_eq!(
        strict().unicode_to_pseudo("⠃", true).unwrap(),
        "o .\no .\n. .\n. .\n"
    );
}

#[test]
fn test_pseudo_round_trips() {
    let conv = strict();
    for eight_dot in [false, true] {
        let grid = conv.ascii_to_pseudo(LETTERS, eight_dot).unwrap();
        assert_eq!(conv.pseudo_to_ascii(&grid).unwrap(), LETTERS);
        assert_eq!(conv.pseudo_to_unicode(&grid).unwrap(), LETTERS_UNICODE);
        assert_eq!(
            conv.pseudo_to_dots(&grid, &DotStyle::default()).unwrap(),
            LETTERS_DOTS
        );
    }
}

#[test]
fn test_dots_to_pseudo() {
    let grid = strict()
        .dots_to_pseudo("p1p12", &DotParseOptions::default(), false)
        .unwrap();
    assert_eq!(grid, "o .  o .\n. .  o .\n. .  . .\n");
}

#[test]
fn test_pseudo_passthrough_draws_error_glyph() {
    let grid = Converter::default().unicode_to_pseudo("⠁x", true).unwrap();
    assert_eq!(grid, "o .  INV\n. .  ALI\n. .  D!!\n. .  CHR\n");
}

#[test]
fn test_pseudo_raise_on_non_braille() {
    assert!(matches!(
        strict().unicode_to_pseudo("⠁x", true),
        Err(BrailleError::OutOfRange { .. })
    ));
}

// ==================== Error Policy ====================

#[test]
fn test_euro_under_each_policy() {
    assert_eq!(
        Converter::new(ErrorPolicy::Passthrough)
            .ascii_to_unicode("€")
            .unwrap(),
        "€"
    );
    assert_eq!(
        Converter::new(ErrorPolicy::Replace)
            .ascii_to_unicode("€")
            .unwrap(),
        "?"
    );
    assert_eq!(
        strict().ascii_to_unicode("€"),
        Err(BrailleError::UnknownMnemonic { ch: '€' })
    );
}

#[test]
fn test_passthrough_mixed_text_round_trips() {
    let conv = Converter::default();
    let unicode = conv.ascii_to_unicode("AB€CD").unwrap();
    assert_eq!(unicode, "⠁⠃€⠉⠙");
    assert_eq!(conv.unicode_to_ascii(&unicode).unwrap(), "AB€CD");
}

#[test]
fn test_converters_with_different_policies_coexist() {
    let pass = Converter::default();
    let replace = Converter::new(ErrorPolicy::Replace).with_replacement('_');
    let handles: Vec<_> = [pass, replace]
        .into_iter()
        .map(|conv| std::thread::spawn(move || conv.ascii_to_unicode("A~").unwrap()))
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["⠁~".to_string(), "⠁_".to_string()]);
}

// ==================== Structural Utilities ====================

#[test]
fn test_is_six_dot_across_formats() {
    let conv = strict();
    assert!(conv.is_six_dot(LETTERS, Source::Ascii).unwrap());
    assert!(!conv
        .is_six_dot("p1p17", Source::Dots(&DotParseOptions::default()))
        .unwrap());
}

#[test]
fn test_strip_then_encode_ascii() {
    let conv = strict();
    // ⡁ is dots 1 and 7: no mnemonic until dot 7 is removed
    assert!(conv.unicode_to_ascii("⡁").is_err());
    assert_eq!(
        conv.strip_dots78("⡁⣿", Source::Unicode, Target::Ascii).unwrap(),
        "A="
    );
}

#[test]
fn test_empty_input_is_empty_output() {
    let conv = strict();
    assert_eq!(conv.ascii_to_unicode("").unwrap(), "");
    assert_eq!(
        conv.dots_to_unicode("   ", &DotParseOptions::default()).unwrap(),
        ""
    );
    assert!(conv.is_six_dot("", Source::Unicode).unwrap());
}
