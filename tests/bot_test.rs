//! Tests for the bot host: commands, answers and the console transport.

use std::io::Write;
use tempfile::NamedTempFile;
use wordchain::SessionRegistry;
use wordgames::{Bot, BotConfig, console};

const TWIST_WORDS: &[&str] = &[
    "batter", "better", "bitter", "butter", "hatter", "hitter", "latter", "letter", "litter",
    "matter", "mutter", "natter", "patter", "potter", "putter", "setter", "sitter", "tatter",
];

/// Writes the word list to a temp file; the handle must outlive the bot.
fn word_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for word in TWIST_WORDS {
        writeln!(file, "{}", word).expect("Failed to write word");
    }
    file
}

fn bot(words: &NamedTempFile, color: bool) -> Bot {
    let config = BotConfig::from_toml(&format!("seed = 11\ncolor = {}", color))
        .expect("Config should parse")
        .with_word_file(words.path());
    Bot::new(&config)
}

#[test]
fn test_start_with_color() {
    let words = word_file();
    let mut bot = bot(&words, true);
    let lines = bot.handle("#words", "alice", "!wordtwist");
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains('\x03')));
}

#[test]
fn test_start_without_color() {
    let words = word_file();
    let mut bot = bot(&words, false);
    let lines = bot.handle("#words", "alice", "!wordtwist 4");
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| !l.contains('\x03')));
    assert!(lines[0].starts_with("WordTwist: "));
    assert!(lines[0].contains(" -> ------ -> ------ -> "));
    assert_eq!(bot.sessions().running_channels(), vec!["#words".to_string()]);
}

#[test]
fn test_solving_the_puzzle() {
    let words = word_file();
    let mut bot = bot(&words, false);
    bot.handle("#words", "alice", "!wordtwist");

    let chain = bot
        .sessions()
        .get("#words")
        .expect("Session stored")
        .puzzle()
        .chain()
        .clone();
    let lines = bot.handle("#words", "bob", &chain.join(" > "));
    assert_eq!(
        lines,
        vec![
            "WordTwist: bob got it!".to_string(),
            format!("WordTwist: {}", chain.join(" > ")),
        ]
    );
    assert!(bot.sessions().running_channels().is_empty());
    assert_eq!(bot.sessions().list_channels(), vec!["#words".to_string()]);

    let late = bot.handle("#words", "carol", &chain[1..3].join(" > "));
    assert_eq!(late, vec!["carol: Your solution is also valid.".to_string()]);
}

#[test]
fn test_commands_without_a_game() {
    let words = word_file();
    let mut bot = bot(&words, false);
    assert_eq!(
        bot.handle("#words", "alice", "!wordquit"),
        vec!["No word game currently running.".to_string()]
    );
    assert_eq!(
        bot.handle("#words", "alice", "!wordshrink four"),
        vec!["Please use a length between 4 and 7.".to_string()]
    );
    assert!(bot.handle("#words", "alice", "hello there").is_empty());
    assert!(bot.handle("#words", "alice", "!weather").is_empty());
}

#[test]
fn test_quit_reveals_chain() {
    let words = word_file();
    let mut bot = bot(&words, false);
    bot.handle("#words", "alice", "!wordtwist");
    let chain = bot
        .sessions()
        .get("#words")
        .expect("Session stored")
        .puzzle()
        .chain()
        .clone();

    assert_eq!(
        bot.handle("#words", "alice", "!wordquit"),
        vec![format!("WordTwist: {}", chain.join(" > "))]
    );
    assert!(bot.sessions().running_channels().is_empty());
}

#[test]
fn test_unreadable_word_file() {
    let config = BotConfig::default()
        .with_word_file("/nonexistent/words")
        .with_seed(Some(1));
    let mut bot = Bot::new(&config);
    let lines = bot.handle("#words", "alice", "!wordtwist");
    assert_eq!(
        lines,
        vec!["Unable to start a word game: the word list could not be loaded.".to_string()]
    );
}

#[tokio::test]
async fn test_console_transport() {
    let words = word_file();
    let mut bot = bot(&words, false);
    let input: &[u8] = b"#words alice !wordtwist\n\nnot-a-message\n#other bob !wordquit\n";
    let mut output = Vec::new();

    console::run(&mut bot, input, &mut output)
        .await
        .expect("Console should run");

    let text = String::from_utf8(output).expect("Output is UTF-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("[#words] WordTwist: "));
    assert!(lines[1].starts_with("[#words] ("));
    assert_eq!(lines[2], "[#other] No word game currently running.");
}
