//! Interactive session.
//!
//! Every line is one user action against a single long-lived controller.
//! Errors are reported and the session carries on.

use std::sync::Arc;

use quill_core::BlogController;
use quill_core::domain::View;

use crate::commands::{delete, resolve_id, submit};
use crate::error::{AppError, AppResult};
use crate::render::Output;
use crate::terminal::Terminal;

const HELP: &str = "\
Commands:
  dashboard | list        switch screens
  new                     start a new post
  edit <id>               load a post into the editor
  title <text>            set the draft title
  content [text]          set the draft content (no text: read lines until '.')
  save                    publish or update the draft
  cancel                  stop editing and clear the draft
  delete <id>             delete a post (asks first)
  help                    show this help
  quit                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Navigate(View),
    Compose,
    Edit(String),
    Title(String),
    Content(Option<String>),
    Save,
    Cancel,
    Delete(String),
    Help,
    Quit,
    Empty,
}

pub fn parse(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "dashboard" | "list" => {
            ShellCommand::Navigate(word.parse::<View>().map_err(|e| e.to_string())?)
        }
        "new" => ShellCommand::Compose,
        "edit" => ShellCommand::Edit(required(word, rest)?),
        "title" => ShellCommand::Title(rest.to_string()),
        "content" => ShellCommand::Content((!rest.is_empty()).then(|| rest.to_string())),
        "save" => ShellCommand::Save,
        "cancel" => ShellCommand::Cancel,
        "delete" => ShellCommand::Delete(required(word, rest)?),
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(command)
}

fn required(word: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("usage: {word} <id>"))
    } else {
        Ok(rest.to_string())
    }
}

pub async fn run(
    controller: &mut BlogController,
    terminal: Arc<Terminal>,
    out: &Output,
) -> AppResult<()> {
    out.show(controller, None)?;
    out.note("Type 'help' for commands.");

    while let Some(line) = terminal.read_line("quill> ").await? {
        let command = match parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                out.note(&msg);
                continue;
            }
        };

        match step(command, controller, &terminal, out).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => out.error(&e),
        }
    }
    Ok(())
}

/// Apply one command. Returns `false` when the session should end.
async fn step(
    command: ShellCommand,
    controller: &mut BlogController,
    terminal: &Terminal,
    out: &Output,
) -> AppResult<bool> {
    match command {
        ShellCommand::Empty => {}
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Help => out.note(HELP),
        ShellCommand::Navigate(view) => {
            controller.navigate(view);
            out.show(controller, None)?;
        }
        ShellCommand::Compose => {
            controller.compose();
            out.show(controller, None)?;
        }
        ShellCommand::Edit(id) => {
            let id = resolve_id(controller, &id)?;
            controller.begin_edit(id)?;
            out.show(controller, None)?;
        }
        ShellCommand::Title(title) => {
            ensure_editor(controller);
            controller.set_title(title);
        }
        ShellCommand::Content(content) => {
            ensure_editor(controller);
            let content = match content {
                Some(content) => content,
                None => terminal.read_block("... ").await?,
            };
            controller.set_content(content);
        }
        ShellCommand::Save => {
            if controller.view() != View::Editor {
                return Err(AppError::BadRequest("nothing to save".to_string()));
            }
            let message = submit(controller).await?;
            out.show(controller, Some(&message))?;
        }
        ShellCommand::Cancel => {
            if !controller.is_editing() {
                return Err(AppError::BadRequest("not editing a post".to_string()));
            }
            controller.cancel_edit();
            controller.navigate(View::List);
            out.show(controller, Some("Edit cancelled"))?;
        }
        ShellCommand::Delete(id) => {
            let id = resolve_id(controller, &id)?;
            let message = delete(controller, id).await?;
            out.show(controller, Some(&message))?;
        }
    }
    Ok(true)
}

/// Typing into the form from another screen opens a fresh editor first.
fn ensure_editor(controller: &mut BlogController) {
    if controller.view() != View::Editor {
        controller.compose();
    }
}
