use std::path::PathBuf;

/// A modal question shown over the text area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Ask for a file to open.
    Open { input: String },
    /// Ask for the path to save under.
    SaveAs { input: String },
    /// Ask before throwing away a non-empty document.
    ConfirmDiscard,
}

/// How a prompt was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Open(PathBuf),
    SaveAs(PathBuf),
    DiscardConfirmed,
    Cancelled,
}

impl Prompt {
    pub const fn open() -> Self {
        Self::Open {
            input: String::new(),
        }
    }

    /// Save As prompt prefilled with the current file path, if any.
    pub fn save_as(current: Option<&std::path::Path>) -> Self {
        Self::SaveAs {
            input: current.map(|p| p.display().to_string()).unwrap_or_default(),
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Open { .. } => "Open",
            Self::SaveAs { .. } => "Save As",
            Self::ConfirmDiscard => "New",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Open { .. } => "File to open:",
            Self::SaveAs { .. } => "Save as:",
            Self::ConfirmDiscard => "Discard the current document and start a new one?",
        }
    }

    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Open { .. } | Self::SaveAs { .. } => "Enter confirm \u{2502} Esc cancel",
            Self::ConfirmDiscard => "y/Enter discard \u{2502} n/Esc keep",
        }
    }

    /// The typed path, for prompts that take one.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Open { input } | Self::SaveAs { input } => Some(input),
            Self::ConfirmDiscard => None,
        }
    }

    pub fn set_input(&mut self, value: String) {
        if let Self::Open { input } | Self::SaveAs { input } = self {
            *input = value;
        }
    }

    /// Resolve the prompt as if the user pressed Enter.
    pub fn accept(&self) -> PromptOutcome {
        match self {
            Self::Open { input } => {
                expand_path(input).map_or(PromptOutcome::Cancelled, PromptOutcome::Open)
            }
            Self::SaveAs { input } => {
                expand_path(input).map_or(PromptOutcome::Cancelled, PromptOutcome::SaveAs)
            }
            Self::ConfirmDiscard => PromptOutcome::DiscardConfirmed,
        }
    }
}

/// Trim the typed path and expand a leading `~/`. Blank input yields `None`.
fn expand_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return Some(PathBuf::from(home).join(rest));
    }
    Some(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_prompt_accepts_trimmed_path() {
        let mut prompt = Prompt::open();
        prompt.set_input("  notes.txt ".to_string());
        assert_eq!(
            prompt.accept(),
            PromptOutcome::Open(PathBuf::from("notes.txt"))
        );
    }

    #[test]
    fn test_blank_input_cancels() {
        let prompt = Prompt::SaveAs {
            input: "   ".to_string(),
        };
        assert_eq!(prompt.accept(), PromptOutcome::Cancelled);
    }

    #[test]
    fn test_save_as_prefills_current_path() {
        let prompt = Prompt::save_as(Some(std::path::Path::new("/tmp/a.txt")));
        assert_eq!(prompt.input(), Some("/tmp/a.txt"));
        assert_eq!(
            prompt.accept(),
            PromptOutcome::SaveAs(PathBuf::from("/tmp/a.txt"))
        );
    }

    #[test]
    fn test_confirm_discard_has_no_input() {
        let mut prompt = Prompt::ConfirmDiscard;
        prompt.set_input("ignored".to_string());
        assert_eq!(prompt.input(), None);
        assert_eq!(prompt.accept(), PromptOutcome::DiscardConfirmed);
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let Some(home) = std::env::var_os("HOME") else {
            return;
        };
        let mut prompt = Prompt::open();
        prompt.set_input("~/doc.txt".to_string());
        assert_eq!(
            prompt.accept(),
            PromptOutcome::Open(PathBuf::from(home).join("doc.txt"))
        );
    }
}
