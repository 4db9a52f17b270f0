use crate::api::{NoteError, NoteHubClient};
use crate::components::{Toaster, Toasts};
use crate::config::AppConfig;
use crate::pages::{ConfigErrorPage, NotFoundPage, NotesPage};
use crate::query::QueryClient;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use std::rc::Rc;

#[component]
pub fn App(config: Result<AppConfig, NoteError>) -> impl IntoView {
    let config = match config {
        Ok(config) => config,
        Err(e) => return view! { <ConfigErrorPage message=e.user_message() /> }.into_any(),
    };

    let gateway = Rc::new(NoteHubClient::from_config(&config));
    provide_context(AppContext::new(config, QueryClient::new(gateway)));
    provide_context(Toasts::new());

    // Leptos CSR requires the `csr` feature on `leptos`; router hooks require a <Router>.
    view! {
        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("") view=NotesPage />
                <Route path=path!("notes") view=NotesPage />
            </Routes>
        </Router>
        <Toaster />
    }
    .into_any()
}
