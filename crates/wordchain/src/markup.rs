//! Chat text formatting with mIRC colour codes.

use crate::index::Variant;

/// White foreground.
pub const WHITE: &str = "\x0300";
/// Orange foreground, used for revealed middle words.
pub const YELLOW: &str = "\x0307";
/// Light green foreground, used for revealed separators.
pub const LGREEN: &str = "\x0309";
/// Light blue foreground, used for game titles.
pub const LBLUE: &str = "\x0312";
/// Light grey foreground, the default body colour.
pub const LGRAY: &str = "\x0315";

const COLOR: char = '\x03';
const MASKED_SEPARATOR: &str = " -> ";

/// Prefixes `msg` with the variant title.
pub fn announce(variant: Variant, msg: &str) -> String {
    format!("{}{}{}:{} {}", LBLUE, variant.title(), WHITE, LGRAY, msg)
}

/// Shows the endpoints with every middle word replaced by dashes.
pub fn masked_chain<S: AsRef<str>>(chain: &[S]) -> String {
    let last = chain.len().saturating_sub(1);
    chain
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let word = word.as_ref();
            if i == 0 || i == last {
                word.to_string()
            } else {
                "-".repeat(word.chars().count())
            }
        })
        .collect::<Vec<_>>()
        .join(MASKED_SEPARATOR)
}

/// Shows every word, highlighting the middle of the chain.
pub fn revealed_chain<S: AsRef<str>>(chain: &[S]) -> String {
    let separator = format!("{} > {}", LGREEN, YELLOW);
    match chain {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let body: Vec<&str> = init.iter().map(|w| w.as_ref()).collect();
            let body = body.join(separator.as_str());
            format!("{}{}{}{}", body, separator, LGRAY, last.as_ref())
        }
    }
}

/// The "(n possible solutions)" line.
pub fn solution_count(count: usize) -> String {
    format!(
        "({}{}{} possible solution{})",
        WHITE,
        count,
        LGRAY,
        if count == 1 { "" } else { "s" }
    )
}

/// Removes colour codes so text reads cleanly on plain transports.
pub fn strip_formatting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            COLOR => {
                // Up to two foreground digits, optionally ",bg" with two more.
                for _ in 0..2 {
                    if chars.next_if(char::is_ascii_digit).is_none() {
                        break;
                    }
                }
                if chars.peek() == Some(&',') {
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    if lookahead.peek().is_some_and(char::is_ascii_digit) {
                        chars.next();
                        for _ in 0..2 {
                            if chars.next_if(char::is_ascii_digit).is_none() {
                                break;
                            }
                        }
                    }
                }
            }
            '\x02' | '\x0f' | '\x16' | '\x1d' | '\x1f' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_chain_hides_middle_words() {
        assert_eq!(
            masked_chain(&["cats", "cars", "bars", "bard"]),
            "cats -> ---- -> ---- -> bard"
        );
        assert_eq!(
            masked_chain(&["planet", "plane", "lane", "lea"]),
            "planet -> ----- -> ---- -> lea"
        );
    }

    #[test]
    fn test_revealed_chain_markup() {
        assert_eq!(
            revealed_chain(&["cats", "cars", "bard"]),
            "cats\x0309 > \x0307cars\x0309 > \x0307\x0315bard"
        );
        assert_eq!(
            strip_formatting(&revealed_chain(&["cats", "cars", "bars", "bard"])),
            "cats > cars > bars > bard"
        );
    }

    #[test]
    fn test_solution_count_pluralizes() {
        assert_eq!(strip_formatting(&solution_count(1)), "(1 possible solution)");
        assert_eq!(strip_formatting(&solution_count(3)), "(3 possible solutions)");
        assert_eq!(solution_count(0), "(\x03000\x0315 possible solutions)");
    }

    #[test]
    fn test_announce_prefix() {
        assert_eq!(
            strip_formatting(&announce(Variant::Twist, "hello")),
            "WordTwist: hello"
        );
    }

    #[test]
    fn test_strip_formatting_keeps_digits_after_full_code() {
        // Colour codes take at most two digits; the rest is text.
        assert_eq!(strip_formatting("\x03001234"), "1234");
        assert_eq!(strip_formatting("\x0304,12red on blue"), "red on blue");
        assert_eq!(strip_formatting("a, b"), "a, b");
    }
}
