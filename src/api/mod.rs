mod error;

pub(crate) use error::{error_body_message, NoteError, NoteResult};

use crate::config::AppConfig;
use crate::models::{Note, NoteDraft, NotePage};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// The three remote operations the notes UI depends on.
///
/// Futures are `!Send`: on wasm they run on the browser event loop.
#[async_trait(?Send)]
pub(crate) trait NoteGateway {
    /// `search == ""` means unfiltered.
    async fn list(&self, search: &str, page: u32, per_page: u32) -> NoteResult<NotePage>;

    async fn create(&self, draft: &NoteDraft) -> NoteResult<Note>;

    /// Returns the deleted note's last representation.
    async fn delete(&self, id: &str) -> NoteResult<Note>;
}

/// Authenticated NoteHub HTTP client.
///
/// Only built from a resolved [`AppConfig`], so a request without a token is
/// unrepresentable.
#[derive(Clone)]
pub(crate) struct NoteHubClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl NoteHubClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone(), config.token.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn note_url(&self, id: &str) -> String {
        self.url(&format!("/notes/{}", urlencoding::encode(id)))
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn with_auth_headers(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("Authorization", self.auth_header())
    }

    /// Query string for `GET /notes`. An empty search is left out entirely so
    /// the API does not read it as "match the empty string".
    pub(crate) fn list_query(search: &str, page: u32, per_page: u32) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params.push(("page", page.max(1).to_string()));
        params.push(("perPage", per_page.max(1).to_string()));
        params
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder, op: &str) -> NoteResult<T> {
        let res = self
            .with_auth_headers(req)
            .send()
            .await
            .map_err(NoteError::network)?;

        let status = res.status();
        if status.is_success() {
            res.json().await.map_err(NoteError::malformed)
        } else {
            let body = res.text().await.unwrap_or_default();
            let err = NoteError::from_status(status.as_u16(), error_body_message(&body));
            warn!(op, status = status.as_u16(), error = %err, "NoteHub request failed");
            Err(err)
        }
    }
}

#[async_trait(?Send)]
impl NoteGateway for NoteHubClient {
    async fn list(&self, search: &str, page: u32, per_page: u32) -> NoteResult<NotePage> {
        debug!(op = "list", search, page, per_page, "GET /notes");
        let req = self
            .http
            .get(self.url("/notes"))
            .query(&Self::list_query(search, page, per_page));
        self.send(req, "list").await
    }

    async fn create(&self, draft: &NoteDraft) -> NoteResult<Note> {
        let req = self.http.post(self.url("/notes")).json(draft);
        self.send(req, "create").await
    }

    async fn delete(&self, id: &str) -> NoteResult<Note> {
        let req = self.http.delete(self.note_url(id));
        self.send(req, "delete").await
    }
}
