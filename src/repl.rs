//! Line-oriented terminal front-end over [`ConversationState`].

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use qa_chat_core::{ConversationState, Message, QaBackend, Theme};

const QUIT: &str = "/quit";
const TOGGLE_THEME: &str = "/theme";

const RESET: &str = "\x1b[0m";

fn prompt_colour(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "\x1b[34m",
        Theme::Dark => "\x1b[96m",
    }
}

pub fn render_message(message: &Message) -> String {
    if message.is_user() {
        format!("You: {}", message.content)
    } else {
        format!("🤖 Assistant: {}", message.content)
    }
}

/// Drives `conversation` from `input` until `/quit` or end of input and
/// returns it. Every non-command line becomes a draft and is submitted; blank
/// lines are skipped by the controller's own precondition.
pub async fn run<R, W, B>(
    input: R,
    output: &mut W,
    backend: &B,
    mut conversation: ConversationState,
) -> io::Result<ConversationState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    B: QaBackend + ?Sized,
{
    let mut theme = Theme::default();

    for message in conversation.messages() {
        write_line(output, &render_message(message)).await?;
    }

    let mut lines = input.lines();
    loop {
        output
            .write_all(format!("{}you>{RESET} ", prompt_colour(theme)).as_bytes())
            .await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            QUIT => break,
            TOGGLE_THEME => {
                theme = theme.toggle();
                write_line(output, &format!("Theme: {}", theme.as_str())).await?;
                continue;
            }
            _ => {}
        }

        conversation.update_draft(line);
        if !conversation.can_submit() {
            continue;
        }

        write_line(output, "Thinking…").await?;
        conversation.submit(backend).await;

        if let Some(err) = conversation.last_error() {
            write_line(output, &format!("[error] {err}")).await?;
        }
        if let Some(reply) = conversation.messages().last() {
            write_line(output, &render_message(reply)).await?;
        }
    }

    Ok(conversation)
}

async fn write_line<W>(output: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await
}
