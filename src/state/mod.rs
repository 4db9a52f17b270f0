mod notes_view;

pub(crate) use notes_view::{CreateStart, DeleteNotice, FetchOutcome, ListArea, NotesViewState, Pager};

use crate::config::AppConfig;
use crate::query::QueryClient;
use leptos::prelude::*;

/// App-wide handles, provided once the configuration resolved.
///
/// The query client is `!Send` (it owns wasm request futures), so it lives in
/// local arena storage.
#[derive(Clone, Copy)]
pub(crate) struct AppContext {
    pub config: StoredValue<AppConfig>,
    pub queries: StoredValue<QueryClient, LocalStorage>,
}

impl AppContext {
    pub fn new(config: AppConfig, queries: QueryClient) -> Self {
        Self {
            config: StoredValue::new(config),
            queries: StoredValue::new_local(queries),
        }
    }

    pub fn query_client(&self) -> QueryClient {
        self.queries.with_value(|q| q.clone())
    }
}
