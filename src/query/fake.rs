//! In-memory gateway for unit tests.

use crate::api::{NoteError, NoteGateway, NoteResult};
use crate::models::{Note, NoteDraft, NotePage, NoteTag};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory NoteHub: case-insensitive title search, 1-indexed pages.
#[derive(Default)]
pub(crate) struct FakeGateway {
    pub notes: RefCell<Vec<Note>>,
    pub list_calls: Cell<usize>,
    pub create_calls: Cell<usize>,
    pub delete_calls: Cell<usize>,
    pub fail_list: RefCell<Option<NoteError>>,
    pub fail_delete: RefCell<Option<NoteError>>,
}

impl FakeGateway {
    pub fn with_titles<'a>(titles: impl IntoIterator<Item = &'a str>) -> Rc<Self> {
        let gw = Self::default();
        for (i, title) in titles.into_iter().enumerate() {
            gw.notes.borrow_mut().push(note(&format!("n{i}"), title));
        }
        Rc::new(gw)
    }
}

pub(crate) fn note(id: &str, title: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: String::new(),
        tag: NoteTag::Todo,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[async_trait(?Send)]
impl NoteGateway for FakeGateway {
    async fn list(&self, search: &str, page: u32, per_page: u32) -> NoteResult<NotePage> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(e) = self.fail_list.borrow().clone() {
            return Err(e);
        }
        let needle = search.to_lowercase();
        let matching: Vec<Note> = self
            .notes
            .borrow()
            .iter()
            .filter(|n| needle.is_empty() || n.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let total_pages = (matching.len() as u32).div_ceil(per_page);
        let notes = matching
            .into_iter()
            .skip((page.saturating_sub(1) * per_page) as usize)
            .take(per_page as usize)
            .collect();
        Ok(NotePage {
            notes,
            total_pages,
            page,
            per_page,
        })
    }

    async fn create(&self, draft: &NoteDraft) -> NoteResult<Note> {
        self.create_calls.set(self.create_calls.get() + 1);
        let mut n = note(&format!("new{}", self.create_calls.get()), &draft.title);
        n.content = draft.content.clone();
        n.tag = draft.tag;
        self.notes.borrow_mut().insert(0, n.clone());
        Ok(n)
    }

    async fn delete(&self, id: &str) -> NoteResult<Note> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        if let Some(e) = self.fail_delete.borrow().clone() {
            return Err(e);
        }
        let mut notes = self.notes.borrow_mut();
        match notes.iter().position(|n| n.id == id) {
            Some(i) => Ok(notes.remove(i)),
            None => Err(NoteError::NotFound("Note not found".to_string())),
        }
    }
}
