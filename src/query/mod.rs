//! Client-side cache for note list queries.
//!
//! One entry per [`QueryKey`], each in one of the states
//! `NotRequested | Pending | Ready | Failed`. Reads of a pending key share the
//! single outstanding request, so a key never has two `list` calls in flight
//! from ordinary reads. Mutations go through the same client and invalidate
//! every entry when they succeed.

#[cfg(test)]
pub(crate) mod fake;
mod mutation;

pub(crate) use mutation::MutationState;

use crate::api::{NoteError, NoteGateway, NoteResult};
use crate::models::{Note, NoteDraft, NotePage};
use crate::util::upsert_lru_by_key;
use futures::future::{self, FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tracing::{debug, info};

pub(crate) const DEFAULT_MAX_ENTRIES: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct QueryKey {
    /// Empty means unfiltered.
    pub search: String,
    pub page: u32,
    pub per_page: u32,
}

impl QueryKey {
    pub fn new(search: impl Into<String>, page: u32, per_page: u32) -> Self {
        Self {
            search: search.into(),
            page,
            per_page,
        }
    }
}

/// A successful list response.
///
/// `seq` identifies the request that produced it, so every read served from
/// the same entry carries the same `seq`.
#[derive(Clone, Debug)]
pub(crate) struct CachedPage {
    pub seq: u64,
    pub page: Arc<NotePage>,
}

impl PartialEq for CachedPage {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq && Arc::ptr_eq(&self.page, &other.page)
    }
}

pub(crate) type PageFetch = Shared<LocalBoxFuture<'static, NoteResult<CachedPage>>>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum QueryStatus {
    NotRequested,
    Loading,
    Ready { stale: bool },
    Failed(NoteError),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DeleteOutcome {
    Deleted(Note),
    /// The note was already gone server-side (404). Handled like a delete.
    AlreadyGone,
}

enum Entry {
    Pending { seq: u64, fetch: PageFetch },
    Ready { page: CachedPage, stale: bool },
    /// Never served as data; the next read issues a new request.
    Failed(NoteError),
}

struct Store {
    entries: HashMap<QueryKey, Entry>,
    /// Most recently read first.
    recency: Vec<QueryKey>,
    next_seq: u64,
    max_entries: usize,
}

impl Store {
    fn touch(&mut self, key: &QueryKey) {
        let dropped = upsert_lru_by_key(&mut self.recency, key.clone(), |a, b| a == b, self.max_entries);
        for old in dropped {
            if matches!(self.entries.get(&old), Some(Entry::Pending { .. })) {
                self.recency.push(old);
            } else {
                debug!(search = %old.search, page = old.page, "evicting cached page");
                self.entries.remove(&old);
            }
        }
    }

    /// Record a response, unless the request was superseded (invalidated or
    /// replaced) while in flight.
    fn settle(&mut self, key: &QueryKey, seq: u64, result: &NoteResult<CachedPage>) {
        let current = matches!(self.entries.get(key), Some(Entry::Pending { seq: s, .. }) if *s == seq);
        if !current {
            debug!(seq, search = %key.search, page = key.page, "discarding superseded response");
            return;
        }

        let entry = match result {
            Ok(page) => Entry::Ready {
                page: page.clone(),
                stale: false,
            },
            Err(e) => Entry::Failed(e.clone()),
        };
        self.entries.insert(key.clone(), entry);
    }
}

/// Shared query/mutation orchestrator for the notes view.
///
/// Single-threaded (`Rc`): it lives on the browser event loop next to the
/// `!Send` gateway futures.
#[derive(Clone)]
pub(crate) struct QueryClient {
    gateway: Rc<dyn NoteGateway>,
    store: Rc<RefCell<Store>>,
}

impl QueryClient {
    pub fn new(gateway: Rc<dyn NoteGateway>) -> Self {
        Self::with_capacity(gateway, DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(gateway: Rc<dyn NoteGateway>, max_entries: usize) -> Self {
        Self {
            gateway,
            store: Rc::new(RefCell::new(Store {
                entries: HashMap::new(),
                recency: Vec::new(),
                next_seq: 0,
                max_entries: max_entries.max(1),
            })),
        }
    }

    /// Read `key`: a fresh cached page resolves immediately, a pending request
    /// is joined, anything else starts a new request.
    pub fn fetch(&self, key: &QueryKey) -> PageFetch {
        let mut store = self.store.borrow_mut();
        store.touch(key);

        match store.entries.get(key) {
            Some(Entry::Ready { page, stale: false }) => {
                debug!(search = %key.search, page = key.page, "cache hit");
                return future::ready(Ok(page.clone())).boxed_local().shared();
            }
            Some(Entry::Pending { fetch, .. }) => {
                debug!(search = %key.search, page = key.page, "joining in-flight request");
                return fetch.clone();
            }
            _ => {}
        }

        store.next_seq += 1;
        let seq = store.next_seq;

        let gateway = Rc::clone(&self.gateway);
        let weak: Weak<RefCell<Store>> = Rc::downgrade(&self.store);
        let k = key.clone();
        let fetch = async move {
            let result = gateway
                .list(&k.search, k.page, k.per_page)
                .await
                .map(|page| CachedPage {
                    seq,
                    page: Arc::new(page),
                });
            if let Some(store) = weak.upgrade() {
                store.borrow_mut().settle(&k, seq, &result);
            }
            result
        }
        .boxed_local()
        .shared();

        store.entries.insert(
            key.clone(),
            Entry::Pending {
                seq,
                fetch: fetch.clone(),
            },
        );
        fetch
    }

    /// The cached page for `key`, if present and not invalidated. A hit
    /// counts as a read for eviction.
    pub fn cached(&self, key: &QueryKey) -> Option<CachedPage> {
        let mut store = self.store.borrow_mut();
        let page = match store.entries.get(key) {
            Some(Entry::Ready { page, stale: false }) => page.clone(),
            _ => return None,
        };
        store.touch(key);
        Some(page)
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        match self.store.borrow().entries.get(key) {
            None => QueryStatus::NotRequested,
            Some(Entry::Pending { .. }) => QueryStatus::Loading,
            Some(Entry::Ready { stale, .. }) => QueryStatus::Ready { stale: *stale },
            Some(Entry::Failed(e)) => QueryStatus::Failed(e.clone()),
        }
    }

    /// Mark every cached page stale and detach in-flight requests so their
    /// late responses are not written back.
    pub fn invalidate_all(&self) {
        let mut store = self.store.borrow_mut();
        let Store { entries, recency, .. } = &mut *store;

        entries.retain(|_, entry| match entry {
            Entry::Ready { stale, .. } => {
                *stale = true;
                true
            }
            Entry::Pending { .. } | Entry::Failed(_) => false,
        });
        recency.retain(|k| entries.contains_key(k));
        debug!(kept = entries.len(), "invalidated note list cache");
    }

    /// `POST /notes`; invalidates the cache on success. Never retried.
    pub async fn create(&self, draft: NoteDraft) -> NoteResult<Note> {
        let note = self.gateway.create(&draft).await?;
        info!(note_id = %note.id, tag = %note.tag, "note created");
        self.invalidate_all();
        Ok(note)
    }

    /// `DELETE /notes/{id}`; invalidates the cache on success or when the note
    /// was already gone. Never retried.
    pub async fn delete(&self, id: &str) -> NoteResult<DeleteOutcome> {
        match self.gateway.delete(id).await {
            Ok(note) => {
                info!(note_id = %note.id, "note deleted");
                self.invalidate_all();
                Ok(DeleteOutcome::Deleted(note))
            }
            Err(NoteError::NotFound(msg)) => {
                info!(note_id = id, reason = %msg, "note already deleted");
                self.invalidate_all();
                Ok(DeleteOutcome::AlreadyGone)
            }
            Err(e) => Err(e),
        }
    }
}
