//! Line-based terminal input shared by the shell and the delete prompt.
//!
//! Prompts are written to stderr so stdout carries only command output,
//! which keeps `--json` output parseable.

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tokio::sync::Mutex;

use quill_core::ports::Confirm;

type Input = Lines<Box<dyn AsyncBufRead + Send + Unpin>>;
type Prompts = Box<dyn AsyncWrite + Send + Unpin>;

pub struct Terminal {
    lines: Mutex<Input>,
    prompts: Mutex<Prompts>,
}

impl Terminal {
    /// Read from stdin, prompt on stderr.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }

    pub fn with_io(
        input: impl AsyncBufRead + Send + Unpin + 'static,
        prompts: impl AsyncWrite + Send + Unpin + 'static,
    ) -> Self {
        let input: Box<dyn AsyncBufRead + Send + Unpin> = Box::new(input);
        Self {
            lines: Mutex::new(input.lines()),
            prompts: Mutex::new(Box::new(prompts)),
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub async fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut prompts = self.prompts.lock().await;
            prompts.write_all(prompt.as_bytes()).await?;
            prompts.flush().await?;
        }

        self.lines.lock().await.next_line().await
    }

    /// Read lines until one consisting of a single `.`, or end of input.
    pub async fn read_block(&self, prompt: &str) -> io::Result<String> {
        let mut block = Vec::new();
        while let Some(line) = self.read_line(prompt).await? {
            if line.trim_end() == "." {
                break;
            }
            block.push(line);
        }
        Ok(block.join("\n"))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Confirm for Terminal {
    async fn confirm(&self, prompt: &str) -> bool {
        match self.read_line(&format!("{prompt} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::ports::DELETE_PROMPT;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_confirm_prompt_goes_to_prompt_stream() {
        let (prompt_tx, mut prompt_rx) = tokio::io::duplex(256);
        let terminal = Terminal::with_io(&b"yes\n"[..], prompt_tx);

        assert!(terminal.confirm(DELETE_PROMPT).await);
        drop(terminal);

        let mut prompt = String::new();
        prompt_rx.read_to_string(&mut prompt).await.unwrap();
        assert_eq!(prompt, format!("{DELETE_PROMPT} [y/N] "));
    }

    #[tokio::test]
    async fn test_confirm_declines_at_end_of_input() {
        let terminal = Terminal::with_io(&b""[..], tokio::io::sink());
        assert!(!terminal.confirm(DELETE_PROMPT).await);
    }

    #[tokio::test]
    async fn test_read_block_stops_at_dot() {
        let terminal = Terminal::with_io(&b"one\ntwo\n.\nthree\n"[..], tokio::io::sink());

        assert_eq!(terminal.read_block("").await.unwrap(), "one\ntwo");
        assert_eq!(terminal.read_line("").await.unwrap().as_deref(), Some("three"));
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
