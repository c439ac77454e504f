// src/services/console.rs
//! Line-oriented front end for a [`ChatSession`].
//!
//! A line ending in `\` continues the message on the next line. Lines typed
//! while a request is in flight are dropped, not queued.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

use crate::message::{Message, MessageRole};
use crate::services::session::{ChatSession, Key, KeyOutcome, PendingSend};
use crate::services::transport::ChatTransport;

pub const SENDING: &str = "Sending...";
pub const HELP: &str = "(end a line with \\ to continue it; /balance, /forget, /quit)";

pub async fn run<R, W, T>(
    session: &mut ChatSession,
    transport: &T,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    T: ChatTransport + ?Sized,
{
    let mut lines = input.lines();
    let mut shown = render(session, 0, out)?;
    writeln!(out, "{HELP}")?;

    while let Some(line) = lines.next_line().await? {
        let pending = match line.trim() {
            "/quit" => break,
            "/forget" => {
                session.clear_remembered_id();
                writeln!(out, "(employee id forgotten)")?;
                continue;
            }
            "/balance" => session.begin_balance(),
            _ => match type_line(session, &line) {
                KeyOutcome::Submitted(pending) => pending,
                KeyOutcome::Edited | KeyOutcome::Ignored => None,
            },
        };
        let Some(pending) = pending else { continue };

        shown = render(session, shown, out)?;
        writeln!(out, "{SENDING}")?;
        out.flush()?;

        let input_open = await_reply(session, transport, pending, &mut lines, out).await?;
        shown = render(session, shown, out)?;
        if !input_open {
            break;
        }
    }
    Ok(())
}

/// Waits for `pending` while still draining input, so anything typed in the
/// meantime hits the loading guard. Returns `false` once input is exhausted.
async fn await_reply<R, W, T>(
    session: &mut ChatSession,
    transport: &T,
    pending: PendingSend,
    lines: &mut Lines<R>,
    out: &mut W,
) -> io::Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    T: ChatTransport + ?Sized,
{
    let request = pending.request().clone();
    let mut reply = transport.post(&request);
    let mut input_open = true;

    loop {
        tokio::select! {
            biased;

            outcome = &mut reply => {
                session.complete(pending, outcome);
                return Ok(input_open);
            }
            line = lines.next_line(), if input_open => match line? {
                Some(line) => {
                    if let KeyOutcome::Ignored = type_line(session, &line) {
                        debug!(line = %line, "input dropped while sending");
                        writeln!(out, "(busy, dropped: {})", line.trim())?;
                    }
                }
                None => input_open = false,
            },
        }
    }
}

fn type_line(session: &mut ChatSession, line: &str) -> KeyOutcome {
    let (text, continued) = match line.strip_suffix('\\') {
        Some(head) => (head, true),
        None => (line, false),
    };
    for c in text.chars() {
        if let KeyOutcome::Ignored = session.handle_key(Key::Char(c)) {
            return KeyOutcome::Ignored;
        }
    }
    session.handle_key(if continued { Key::ShiftEnter } else { Key::Enter })
}

fn render<W: Write>(session: &ChatSession, from: usize, out: &mut W) -> io::Result<usize> {
    let messages = session.messages();
    for Message { role, text } in &messages[from..] {
        let who = match role {
            MessageRole::User => "you",
            MessageRole::Assistant => "bot",
        };
        writeln!(out, "{who}> {text}")?;
    }
    Ok(messages.len())
}
