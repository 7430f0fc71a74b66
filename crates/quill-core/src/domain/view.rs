use std::fmt;
use std::str::FromStr;

use super::PostId;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Dashboard,
    List,
    Editor,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::List => "list",
            View::Editor => "editor",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct ParseViewError(String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(View::Dashboard),
            "list" | "posts" => Ok(View::List),
            "editor" | "create" => Ok(View::Editor),
            other => Err(ParseViewError(other.to_string())),
        }
    }
}

/// Whether the editor is composing a new post or editing an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Composing,
    Editing(PostId),
}

impl EditMode {
    pub fn target(&self) -> Option<PostId> {
        match self {
            EditMode::Composing => None,
            EditMode::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_defaults_to_dashboard() {
        assert_eq!(View::default(), View::Dashboard);
    }

    #[test]
    fn test_view_parse() {
        assert_eq!("list".parse::<View>().unwrap(), View::List);
        assert_eq!(" Editor ".parse::<View>().unwrap(), View::Editor);
        assert_eq!("posts".parse::<View>().unwrap(), View::List);
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_view_display_round_trips() {
        for view in [View::Dashboard, View::List, View::Editor] {
            assert_eq!(view.to_string().parse::<View>().unwrap(), view);
        }
    }

    #[test]
    fn test_edit_mode_target() {
        let id = PostId::new();
        assert_eq!(EditMode::Composing.target(), None);
        assert_eq!(EditMode::Editing(id).target(), Some(id));
    }
}
