use super::*;
use proptest::prelude::*;

#[test]
fn test_short_text_single_line() {
    assert_eq!(wrap("M1, M2", 50).unwrap(), vec!["M1, M2"]);
}

#[test]
fn test_wraps_at_width() {
    let lines = wrap("aaa bbb ccc ddd", 7).unwrap();
    assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
}

#[test]
fn test_exact_fit() {
    assert_eq!(wrap("ab cd", 5).unwrap(), vec!["ab cd"]);
    assert_eq!(wrap("ab cd", 4).unwrap(), vec!["ab", "cd"]);
}

#[test]
fn test_long_word_kept_whole() {
    let lines = wrap("x supercalifragilistic y", 5).unwrap();
    assert_eq!(lines, vec!["x", "supercalifragilistic", "y"]);
}

#[test]
fn test_whitespace_collapses() {
    assert_eq!(wrap("  a \t b\n\nc  ", 80).unwrap(), vec!["a b c"]);
}

#[test]
fn test_blank_input() {
    assert!(wrap("", 10).unwrap().is_empty());
    assert!(wrap("   ", 10).unwrap().is_empty());
}

#[test]
fn test_zero_width_is_error() {
    assert_eq!(wrap("a", 0), Err(WrapError::ZeroWidth));
}

#[test]
fn test_counts_chars_not_bytes() {
    assert_eq!(wrap("éé éé", 5).unwrap(), vec!["éé éé"]);
}

proptest! {
    #[test]
    fn prop_wrap_preserves_words(words in prop::collection::vec("[a-z0-9,]{1,12}", 0..30), width in 1usize..60) {
        let text = words.join(" ");
        let lines = wrap(&text, width).unwrap();
        let rejoined: Vec<String> = lines
            .iter()
            .flat_map(|l| l.split(' ').map(str::to_owned).collect::<Vec<_>>())
            .collect();
        prop_assert_eq!(rejoined, words);
    }

    #[test]
    fn prop_lines_fit_unless_single_word(words in prop::collection::vec("[a-z]{1,15}", 1..30), width in 1usize..40) {
        for line in wrap(&words.join(" "), width).unwrap() {
            prop_assert!(line.chars().count() <= width || !line.contains(' '));
        }
    }
}
