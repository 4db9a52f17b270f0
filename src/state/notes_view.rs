use crate::api::{NoteError, NoteResult};
use crate::drafts::{validate_draft, DraftForm, FieldErrors};
use crate::models::{Note, NoteDraft, NotePage};
use crate::query::{CachedPage, DeleteOutcome, MutationState, QueryKey};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
enum FetchStatus {
    Idle,
    Loading,
    Ready,
    Failed(NoteError),
}

/// What the list region renders. An error wins over any data.
#[derive(Clone, Debug)]
pub(crate) enum ListArea {
    Error(String),
    Loading,
    Empty,
    Notes(Arc<NotePage>),
}

impl PartialEq for ListArea {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Loading, Self::Loading) | (Self::Empty, Self::Empty) => true,
            (Self::Notes(a), Self::Notes(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pager {
    pub current: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FetchOutcome {
    /// A newer read started after this one; nothing changed.
    Superseded,
    Shown { announce_empty: bool },
    Failed(NoteError),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CreateStart {
    Ready(NoteDraft),
    /// Field errors were recorded; nothing was sent.
    Invalid,
    Busy,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DeleteNotice {
    Deleted,
    Failed(String),
}

/// State of the notes list view.
///
/// The raw search box text stays with the input; only debounced commits
/// reach this struct. Pure data: the page component owns the signals, timers and requests and
/// feeds their results back through these methods.
#[derive(Clone, Debug)]
pub(crate) struct NotesViewState {
    committed_search: String,
    current_page: u32,
    per_page: u32,
    is_create_open: bool,
    deleting_id: Option<String>,
    create: MutationState,
    form_errors: FieldErrors,
    status: FetchStatus,
    /// Last successful page, kept on screen while the next key loads.
    shown: Option<CachedPage>,
    generation: u64,
    /// Bumped after each successful mutation so the current key is read again.
    revision: u64,
}

impl NotesViewState {
    pub fn new(per_page: u32) -> Self {
        Self {
            committed_search: String::new(),
            current_page: 1,
            per_page: per_page.max(1),
            is_create_open: false,
            deleting_id: None,
            create: MutationState::default(),
            form_errors: FieldErrors::default(),
            status: FetchStatus::Idle,
            shown: None,
            generation: 0,
            revision: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_create_open(&self) -> bool {
        self.is_create_open
    }

    pub fn deleting_id(&self) -> Option<&str> {
        self.deleting_id.as_deref()
    }

    pub fn is_creating(&self) -> bool {
        self.create.is_pending()
    }

    pub fn form_errors(&self) -> &FieldErrors {
        &self.form_errors
    }

    /// Generic message for a rejected submission, shown inside the form.
    pub fn create_error(&self) -> Option<String> {
        self.create.error().map(NoteError::user_message)
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::new(self.committed_search.clone(), self.current_page, self.per_page)
    }

    /// Apply a debounced search value. Every commit puts the list back on
    /// page 1; returns whether the committed term changed.
    pub fn commit_search(&mut self, value: String) -> bool {
        self.current_page = 1;
        if value == self.committed_search {
            return false;
        }
        self.committed_search = value;
        true
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Start reading the current key. The returned token must be passed back
    /// to [`Self::apply_fetch`].
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        self.generation
    }

    pub fn apply_fetch(&mut self, generation: u64, result: NoteResult<CachedPage>) -> FetchOutcome {
        if generation != self.generation {
            return FetchOutcome::Superseded;
        }

        let cached = match result {
            Ok(cached) => cached,
            Err(e) => {
                self.status = FetchStatus::Failed(e.clone());
                return FetchOutcome::Failed(e);
            }
        };

        let total = cached.page.total_pages;
        // The page shrank under us (last note of the last page deleted).
        let relocating = total >= 1 && self.current_page > total;
        if relocating {
            self.current_page = total;
        }

        // Announce on entering an empty result, not on re-reads of the one already shown.
        let same_as_shown = self.shown.as_ref().is_some_and(|shown| shown.seq == cached.seq);
        let announce_empty = !relocating && cached.page.is_empty() && !same_as_shown;

        self.status = FetchStatus::Ready;
        self.shown = Some(cached);
        FetchOutcome::Shown { announce_empty }
    }

    pub fn list_area(&self) -> ListArea {
        if let FetchStatus::Failed(e) = &self.status {
            return ListArea::Error(e.user_message());
        }
        match &self.shown {
            None => ListArea::Loading,
            Some(cached) if cached.page.is_empty() => ListArea::Empty,
            Some(cached) => ListArea::Notes(Arc::clone(&cached.page)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Present only when there is more than one page.
    pub fn pager(&self) -> Option<Pager> {
        let cached = self.shown.as_ref()?;
        let total = cached.page.total_pages;
        (total > 1).then_some(Pager {
            current: self.current_page.min(total),
            total,
        })
    }

    pub fn open_create(&mut self) {
        self.is_create_open = true;
        self.create.reset();
        self.form_errors = FieldErrors::default();
    }

    /// Refused while a submission is in flight.
    pub fn close_create(&mut self) -> bool {
        if self.create.is_pending() {
            return false;
        }
        self.is_create_open = false;
        true
    }

    pub fn begin_create(&mut self, form: &DraftForm) -> CreateStart {
        if self.create.is_pending() {
            return CreateStart::Busy;
        }
        match validate_draft(form) {
            Err(errors) => {
                self.form_errors = errors;
                CreateStart::Invalid
            }
            Ok(draft) => {
                self.form_errors = FieldErrors::default();
                self.create.begin();
                CreateStart::Ready(draft)
            }
        }
    }

    /// On success the modal closes and the list returns to page 1. On failure
    /// the modal stays open with the form values intact.
    pub fn finish_create(&mut self, result: &NoteResult<Note>) {
        self.create.settle(result);
        if result.is_ok() {
            self.is_create_open = false;
            self.current_page = 1;
            self.revision += 1;
        }
    }

    /// One delete at a time.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.deleting_id.is_some() {
            return false;
        }
        self.deleting_id = Some(id.to_string());
        true
    }

    pub fn finish_delete(&mut self, result: &NoteResult<DeleteOutcome>) -> DeleteNotice {
        self.deleting_id = None;
        match result {
            Ok(_) => {
                self.revision += 1;
                DeleteNotice::Deleted
            }
            Err(e) => DeleteNotice::Failed(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fake::FakeGateway;
    use crate::query::QueryClient;
    use crate::util::Debouncer;
    use futures::executor::block_on;
    use std::rc::Rc;

    fn load(state: &mut NotesViewState, client: &QueryClient) -> FetchOutcome {
        let token = state.begin_fetch();
        let result = block_on(client.fetch(&state.query_key()));
        state.apply_fetch(token, result)
    }

    fn form(title: &str) -> DraftForm {
        DraftForm {
            title: title.to_string(),
            ..DraftForm::default()
        }
    }

    #[test]
    fn test_first_load_reads_page_one_unfiltered() {
        let state = NotesViewState::new(12);
        assert_eq!(state.query_key(), QueryKey::new("", 1, 12));
        assert_eq!(state.list_area(), ListArea::Loading);
        assert_eq!(state.pager(), None);
    }

    #[test]
    fn test_empty_first_load_announces_once() {
        let gw = Rc::new(FakeGateway::default());
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);

        assert_eq!(load(&mut state, &client), FetchOutcome::Shown { announce_empty: true });
        assert_eq!(state.list_area(), ListArea::Empty);
        assert_eq!(state.pager(), None);

        // Re-reading the same cached page does not repeat the toast.
        assert_eq!(load(&mut state, &client), FetchOutcome::Shown { announce_empty: false });
        assert_eq!(gw.list_calls.get(), 1);
    }

    #[test]
    fn test_debounced_typing_commits_once() {
        let gw = FakeGateway::with_titles(["meeting", "other"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);
        let mut debouncer = Debouncer::new(1000);
        load(&mut state, &client);

        let tickets: Vec<_> = ["m", "me", "mee", "meet", "meeting"]
            .into_iter()
            .map(|text| debouncer.push(text.to_string()))
            .collect();
        let commits: Vec<String> = tickets.into_iter().filter_map(|t| debouncer.fire(t)).collect();
        assert_eq!(commits, vec!["meeting".to_string()]);

        for value in commits {
            assert!(state.commit_search(value));
            load(&mut state, &client);
        }
        assert_eq!(state.query_key(), QueryKey::new("meeting", 1, 12));
        assert_eq!(gw.list_calls.get(), 2);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = NotesViewState::new(12);
        assert!(state.go_to_page(3));
        assert!(state.commit_search("work".to_string()));
        assert_eq!(state.current_page(), 1);

        state.go_to_page(2);
        assert!(!state.commit_search("work".to_string()));
        assert_eq!(state.current_page(), 1);

        assert!(state.commit_search(String::new()));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_recommitting_same_search_returns_to_page_one() {
        // "work" -> "workx" -> "work" inside one debounce window commits "work" again.
        let mut state = NotesViewState::new(12);
        state.commit_search("work".to_string());
        state.go_to_page(3);
        let before = state.query_key();

        assert!(!state.commit_search("work".to_string()));
        assert_eq!(state.current_page(), 1);
        assert_ne!(state.query_key(), before);
        assert_eq!(state.query_key(), QueryKey::new("work", 1, 12));
    }

    #[test]
    fn test_returning_to_cached_empty_result_announces_again() {
        let gw = FakeGateway::with_titles(["a"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);

        state.commit_search("zzz".to_string());
        assert_eq!(load(&mut state, &client), FetchOutcome::Shown { announce_empty: true });
        state.commit_search(String::new());
        assert_eq!(load(&mut state, &client), FetchOutcome::Shown { announce_empty: false });
        state.commit_search("zzz".to_string());
        assert_eq!(load(&mut state, &client), FetchOutcome::Shown { announce_empty: true });
        assert_eq!(gw.list_calls.get(), 2);
    }

    #[test]
    fn test_go_to_page_clamps_to_one() {
        let mut state = NotesViewState::new(12);
        state.go_to_page(4);
        assert!(state.go_to_page(0));
        assert_eq!(state.current_page(), 1);
        assert!(!state.go_to_page(1));
    }

    #[test]
    fn test_invalid_submission_sends_nothing() {
        let gw = FakeGateway::with_titles(["a"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);
        state.open_create();

        let start = state.begin_create(&form("Hi"));
        if let CreateStart::Ready(draft) = start.clone() {
            let result = block_on(client.create(draft));
            state.finish_create(&result);
        }
        assert_eq!(start, CreateStart::Invalid);
        assert_eq!(state.form_errors().title.as_deref(), Some("Must be at least 3 characters"));
        assert!(state.is_create_open());
        assert!(!state.is_creating());
        assert_eq!(gw.create_calls.get(), 0);
    }

    #[test]
    fn test_successful_create_closes_modal_and_reloads_page_one() {
        let gw = FakeGateway::with_titles(["a", "b"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(1);
        state.go_to_page(2);
        load(&mut state, &client);
        let revision = state.revision();

        state.open_create();
        let draft = match state.begin_create(&form("Groceries")) {
            CreateStart::Ready(draft) => draft,
            other => panic!("expected a valid draft, got {other:?}"),
        };
        assert!(state.is_creating());
        assert!(!state.close_create());
        assert_eq!(state.begin_create(&form("Groceries")), CreateStart::Busy);

        let result = block_on(client.create(draft));
        state.finish_create(&result);
        assert!(!state.is_create_open());
        assert_eq!(state.current_page(), 1);
        assert!(state.revision() > revision);

        load(&mut state, &client);
        match state.list_area() {
            ListArea::Notes(page) => assert_eq!(page.notes[0].title, "Groceries"),
            other => panic!("expected notes, got {other:?}"),
        }
        assert_eq!(gw.list_calls.get(), 2);
    }

    #[test]
    fn test_reopening_create_clears_previous_errors() {
        let mut state = NotesViewState::new(12);
        state.open_create();
        state.begin_create(&form(""));
        state.finish_create(&Err(NoteError::Network("offline".to_string())));
        assert!(state.create_error().is_some());
        assert!(state.close_create());

        state.open_create();
        assert!(state.form_errors().is_empty());
        assert_eq!(state.create_error(), None);
    }

    #[test]
    fn test_failed_create_keeps_modal_open() {
        let mut state = NotesViewState::new(12);
        state.open_create();
        assert!(matches!(state.begin_create(&form("Valid title")), CreateStart::Ready(_)));
        state.finish_create(&Err(NoteError::Server {
            status: 500,
            message: "boom".to_string(),
        }));
        assert!(state.is_create_open());
        assert!(!state.is_creating());
        assert!(state.create_error().is_some());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_deleting_last_note_of_last_page_moves_back() {
        let titles: Vec<String> = (0..25).map(|i| format!("note {i}")).collect();
        let gw = FakeGateway::with_titles(titles.iter().map(String::as_str));
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);
        state.go_to_page(3);
        load(&mut state, &client);
        assert_eq!(state.pager(), Some(Pager { current: 3, total: 3 }));

        let id = match state.list_area() {
            ListArea::Notes(page) => page.notes[0].id.clone(),
            other => panic!("expected notes, got {other:?}"),
        };
        assert!(state.begin_delete(&id));
        assert!(!state.begin_delete("another"));
        assert_eq!(state.deleting_id(), Some(id.as_str()));

        let result = block_on(client.delete(&id));
        assert_eq!(state.finish_delete(&result), DeleteNotice::Deleted);
        assert_eq!(state.deleting_id(), None);

        // Page 3 no longer exists; no empty toast while moving back.
        assert_eq!(load(&mut state, &client), FetchOutcome::Shown { announce_empty: false });
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.pager(), Some(Pager { current: 2, total: 2 }));

        load(&mut state, &client);
        match state.list_area() {
            ListArea::Notes(page) => assert_eq!(page.notes.len(), 12),
            other => panic!("expected notes, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_delete_clears_deleting_flag() {
        let gw = FakeGateway::with_titles(["a"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);
        *gw.fail_delete.borrow_mut() = Some(NoteError::Network("offline".to_string()));

        assert!(state.begin_delete("n0"));
        let result = block_on(client.delete("n0"));
        assert!(matches!(state.finish_delete(&result), DeleteNotice::Failed(_)));
        assert_eq!(state.deleting_id(), None);
        assert_eq!(state.revision(), 0);
        assert!(state.begin_delete("n0"));
    }

    #[test]
    fn test_error_wins_over_previous_data() {
        let gw = FakeGateway::with_titles(["a"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);
        load(&mut state, &client);
        assert!(matches!(state.list_area(), ListArea::Notes(_)));

        *gw.fail_list.borrow_mut() = Some(NoteError::Network("offline".to_string()));
        state.commit_search("x".to_string());
        assert!(matches!(load(&mut state, &client), FetchOutcome::Failed(_)));
        assert!(matches!(state.list_area(), ListArea::Error(_)));
    }

    #[test]
    fn test_previous_page_stays_visible_while_loading() {
        let gw = FakeGateway::with_titles(["a"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);
        load(&mut state, &client);

        state.commit_search("a".to_string());
        state.begin_fetch();
        assert!(state.is_loading());
        assert!(matches!(state.list_area(), ListArea::Notes(_)));
    }

    #[test]
    fn test_superseded_response_is_ignored() {
        let gw = FakeGateway::with_titles(["meeting", "other"]);
        let client = QueryClient::new(gw.clone());
        let mut state = NotesViewState::new(12);

        let old_token = state.begin_fetch();
        let old = block_on(client.fetch(&state.query_key()));
        state.commit_search("meeting".to_string());
        let new_token = state.begin_fetch();
        let new = block_on(client.fetch(&state.query_key()));

        assert_eq!(state.apply_fetch(new_token, new), FetchOutcome::Shown { announce_empty: false });
        assert_eq!(state.apply_fetch(old_token, old), FetchOutcome::Superseded);
        match state.list_area() {
            ListArea::Notes(page) => assert_eq!(page.notes.len(), 1),
            other => panic!("expected notes, got {other:?}"),
        }
    }
}
