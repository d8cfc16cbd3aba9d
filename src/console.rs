//! Line-oriented chat transport over stdin/stdout.
//!
//! Each input line is `<channel> <nick> <message>`; each reply is written
//! as `[<channel>] <line>`.

use crate::bot::Bot;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// One chat message read from the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound<'a> {
    /// Channel the message was sent to.
    pub channel: &'a str,
    /// Sender.
    pub nick: &'a str,
    /// Message body.
    pub text: &'a str,
}

/// Splits a console line into channel, nick and text.
pub fn parse_line(line: &str) -> Option<Inbound<'_>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (channel, rest) = line.split_once(' ')?;
    let (nick, text) = rest.split_once(' ').unwrap_or((rest, ""));
    if channel.is_empty() || nick.is_empty() {
        return None;
    }
    Some(Inbound {
        channel,
        nick,
        text,
    })
}

/// Reads messages until end of input, writing the bot's replies.
#[instrument(skip_all)]
pub async fn run<I, O>(bot: &mut Bot, input: I, mut output: O) -> std::io::Result<()>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    info!("Console transport ready");
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(message) = parse_line(&line) else {
            warn!(line = %line, "Expected '<channel> <nick> <message>'");
            continue;
        };
        let replies = bot.handle(message.channel, message.nick, message.text);
        debug!(channel = message.channel, replies = replies.len(), "Relaying replies");
        for reply in replies {
            output
                .write_all(format!("[{}] {}\n", message.channel, reply).as_bytes())
                .await?;
        }
        output.flush().await?;
    }
    info!("Input closed");
    Ok(())
}
