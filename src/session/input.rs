use std::{
    io::{self, BufRead, Write},
    thread,
};

use tokio::sync::mpsc;

/// Line-oriented console input delivered over a channel.
///
/// A reader thread forwards stdin lines; turns poll the receiver against a
/// deadline instead of blocking on the terminal.
pub struct Console {
    lines: mpsc::Receiver<String>,
}

impl Console {
    /// Forward stdin lines into the console from a detached thread.
    ///
    /// The thread is not owned by the runtime, so a pending read never holds
    /// up shutdown once the game is over.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel(64);

        thread::spawn(move || forward_lines(io::stdin().lock(), &tx));

        Self::from_channel(rx)
    }

    pub fn from_channel(lines: mpsc::Receiver<String>) -> Self {
        Self { lines }
    }

    /// Print `message` and wait for the next line; `None` once input is closed
    pub async fn prompt(&mut self, message: &str) -> Option<String> {
        print!("{message}");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!("Failed to flush prompt: {}", e);
        }
        self.lines.recv().await
    }

    pub fn lines(&mut self) -> &mut mpsc::Receiver<String> {
        &mut self.lines
    }
}

/// Send each line of `reader` until it ends, fails, or the console is dropped
fn forward_lines(reader: impl BufRead, tx: &mpsc::Sender<String>) {
    for line in reader.lines() {
        match line {
            Ok(line) => {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read from stdin: {}", e);
                break;
            }
        }
    }
    tracing::debug!("Stdin reader finished");
}
