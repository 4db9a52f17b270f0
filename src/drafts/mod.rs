use crate::models::{NoteDraft, NoteTag};
use std::str::FromStr;

pub(crate) const TITLE_MIN: usize = 3;
pub(crate) const TITLE_MAX: usize = 50;
pub(crate) const CONTENT_MAX: usize = 500;

/// Raw create-form values, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DraftForm {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::default().to_string(),
        }
    }
}

/// Inline, per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

fn check_title(title: &str) -> Option<String> {
    // Lengths are in characters, not bytes.
    let len = title.chars().count();
    if len == 0 {
        Some("Title is required".to_string())
    } else if len < TITLE_MIN {
        Some(format!("Must be at least {TITLE_MIN} characters"))
    } else if len > TITLE_MAX {
        Some(format!("Must be {TITLE_MAX} characters or less"))
    } else {
        None
    }
}

fn check_content(content: &str) -> Option<String> {
    (content.chars().count() > CONTENT_MAX).then(|| format!("Must be {CONTENT_MAX} characters or less"))
}

fn check_tag(tag: &str) -> Result<NoteTag, String> {
    if tag.is_empty() {
        return Err("Tag is required".to_string());
    }
    NoteTag::from_str(tag).map_err(|_| "Tag is not valid".to_string())
}

/// Turn raw form values into a draft, or report every failing field.
pub(crate) fn validate_draft(form: &DraftForm) -> Result<NoteDraft, FieldErrors> {
    let tag = check_tag(&form.tag);
    let errors = FieldErrors {
        title: check_title(&form.title),
        content: check_content(&form.content),
        tag: tag.as_ref().err().cloned(),
    };

    match tag {
        Ok(tag) if errors.is_empty() => Ok(NoteDraft {
            title: form.title.clone(),
            content: form.content.clone(),
            tag,
        }),
        _ => Err(errors),
    }
}
