//! The interactive chat loop.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use parlance_engine::executor::TurnOutcome;
use parlance_engine::session::ChatSession;

use crate::output::render_transcript;

const BANNER: &str =
    "parlance — type a message and press enter. :history shows the transcript, :quit exits.";

/// Run the REPL until EOF or `:quit`.
///
/// One turn runs to completion before the next line is read, so the
/// session never has more than one turn in flight.
pub async fn run(mut session: ChatSession) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    stdout.write_all(format!("{BANNER}\n").as_bytes()).await?;
    prompt(&mut stdout).await?;

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":exit" => break,
            ":history" => {
                let rendered = render_transcript(session.transcript());
                if rendered.is_empty() {
                    stdout.write_all(b"(no history yet)\n").await?;
                } else {
                    stdout.write_all(format!("{rendered}\n").as_bytes()).await?;
                }
            }
            _ => {
                if let TurnOutcome::Replied { text, .. } = session.submit(&line).await {
                    stdout.write_all(format!("bot> {text}\n").as_bytes()).await?;
                }
            }
        }
        prompt(&mut stdout).await?;
    }

    tracing::info!(
        session_id = %session.id(),
        turns = session.transcript().len() / 2,
        "chat session ended"
    );
    Ok(())
}

async fn prompt(stdout: &mut tokio::io::Stdout) -> Result<()> {
    stdout.write_all(b"you> ").await?;
    stdout.flush().await?;
    Ok(())
}
