use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Category a note is filed under.
///
/// The wire strings are the variant names; NoteHub rejects anything else.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub(crate) enum NoteTag {
    #[default]
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,

    /// Opaque server timestamps; only displayed, never parsed.
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A validated note ready to be sent to `POST /notes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

/// One page of `GET /notes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotePage {
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Zero when nothing matches.
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}

impl NotePage {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_note_page_contract_deserialize() {
        let json = r#"{
            "notes": [{
                "id": "65ca67e7ae7f10c88b598384",
                "title": "Groceries",
                "content": "Milk, eggs",
                "tag": "Shopping",
                "createdAt": "2024-02-12T18:46:31.573Z",
                "updatedAt": "2024-02-12T18:46:31.573Z"
            }],
            "totalPages": 3,
            "page": 1,
            "perPage": 12
        }"#;
        let parsed: NotePage = serde_json::from_str(json).expect("page should parse");
        assert_eq!(parsed.total_pages, 3);
        assert_eq!(parsed.per_page, 12);
        assert_eq!(parsed.notes.len(), 1);
        assert_eq!(parsed.notes[0].tag, NoteTag::Shopping);
        assert_eq!(parsed.notes[0].created_at, "2024-02-12T18:46:31.573Z");
    }

    #[test]
    fn test_note_page_tolerates_missing_echo_fields() {
        let parsed: NotePage =
            serde_json::from_str(r#"{"notes": [], "totalPages": 0}"#).expect("should parse");
        assert!(parsed.is_empty());
        assert_eq!(parsed.total_pages, 0);
        assert_eq!(parsed.page, 0);
    }

    #[test]
    fn test_note_rejects_unknown_tag() {
        let json = r#"{"id": "1", "title": "abc", "content": "", "tag": "Hobby"}"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }

    #[test]
    fn test_draft_serializes_wire_shape() {
        let draft = NoteDraft {
            title: "Standup".to_string(),
            content: String::new(),
            tag: NoteTag::Meeting,
        };
        let v = serde_json::to_value(draft).expect("should serialize");
        assert_eq!(v, serde_json::json!({"title": "Standup", "content": "", "tag": "Meeting"}));
    }

    #[test]
    fn test_tag_strings_match_wire_values() {
        let names: Vec<String> = NoteTag::iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["Todo", "Work", "Personal", "Meeting", "Shopping"]);
        assert_eq!(NoteTag::from_str("Work").ok(), Some(NoteTag::Work));
        assert!(NoteTag::from_str("work").is_err());
        assert_eq!(NoteTag::default(), NoteTag::Todo);
    }
}
