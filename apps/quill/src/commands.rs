//! One-shot commands.
//!
//! Each command drives the controller the way a click would, then prints
//! whichever screen the controller ends up on.

use quill_core::domain::{PostId, View};
use quill_core::{BlogController, DeleteOutcome, SubmitOutcome};

use crate::cli::Command;
use crate::error::{AppError, AppResult};
use crate::render::Output;

pub async fn run(
    command: Command,
    controller: &mut BlogController,
    out: &Output,
) -> AppResult<()> {
    match command {
        Command::Dashboard => {
            controller.navigate(View::Dashboard);
            out.show(controller, None)
        }
        Command::List => {
            controller.navigate(View::List);
            out.show(controller, None)
        }
        Command::New { title, content } => {
            controller.compose();
            controller.set_title(title);
            controller.set_content(content);
            let message = submit(controller).await?;
            out.show(controller, Some(&message))
        }
        Command::Edit { id, title, content } => {
            let id = resolve_id(controller, &id)?;
            controller.navigate(View::List);
            controller.begin_edit(id)?;

            if title.is_none() && content.is_none() {
                return out.show(controller, None);
            }
            if let Some(title) = title {
                controller.set_title(title);
            }
            if let Some(content) = content {
                controller.set_content(content);
            }
            let message = submit(controller).await?;
            out.show(controller, Some(&message))
        }
        Command::Delete { id, .. } => {
            let id = resolve_id(controller, &id)?;
            controller.navigate(View::List);
            let message = delete(controller, id).await?;
            out.show(controller, Some(&message))
        }
        Command::Shell => Err(AppError::BadRequest(
            "the shell is not a one-shot command".to_string(),
        )),
    }
}

/// Submit the draft and describe what happened.
pub async fn submit(controller: &mut BlogController) -> AppResult<String> {
    match controller.submit().await? {
        SubmitOutcome::Created(id) => Ok(format!("Published post {id}")),
        SubmitOutcome::Updated(id) => Ok(format!("Updated post {id}")),
        SubmitOutcome::Stale(id) => Err(AppError::NotFound(format!(
            "post {id} was deleted while being edited"
        ))),
        SubmitOutcome::Rejected => Err(AppError::BadRequest(
            "title and content must not be blank".to_string(),
        )),
    }
}

/// Delete after confirmation and describe what happened.
///
/// Deleting the post open in the editor also drops the edit.
pub async fn delete(controller: &mut BlogController, id: PostId) -> AppResult<String> {
    Ok(match controller.delete(id).await? {
        DeleteOutcome::Removed(id) => {
            if controller.mode().target() == Some(id) {
                controller.cancel_edit();
            }
            format!("Deleted post {id}")
        }
        DeleteOutcome::Missing(id) => format!("Post {id} was already gone"),
        DeleteOutcome::Declined => "Delete cancelled".to_string(),
    })
}

/// Resolve a full id or a unique, case-insensitive id prefix.
pub fn resolve_id(controller: &BlogController, input: &str) -> AppResult<PostId> {
    let input = input.trim();
    if let Ok(id) = input.parse::<PostId>() {
        return Ok(id);
    }
    if input.is_empty() {
        return Err(AppError::BadRequest("a post id is required".to_string()));
    }

    let needle = input.to_ascii_lowercase();
    let mut matches = controller
        .posts()
        .iter()
        .map(|p| p.id)
        .filter(|id| id.to_string().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(AppError::NotFound(format!("no post matches '{input}'"))),
        (Some(_), Some(_)) => Err(AppError::BadRequest(format!(
            "'{input}' matches more than one post"
        ))),
    }
}
