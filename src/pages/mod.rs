use crate::components::ui::{Button, ErrorMessage, Loader, Modal};
use crate::components::{use_toasts, NoteForm, NoteList, Pagination, SearchBox};
use crate::drafts::DraftForm;
use crate::query::DeleteOutcome;
use crate::state::{AppContext, CreateStart, DeleteNotice, FetchOutcome, ListArea, NotesViewState};
use crate::util::Debouncer;
use icons::Plus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;

pub(crate) const NO_NOTES_MESSAGE: &str = "No notes found for your request.";

/// Pending search commit and the browser timer that will deliver it.
struct SearchTimer {
    debouncer: Debouncer<String>,
    timer_id: Option<i32>,
}

impl SearchTimer {
    fn clear(&mut self) {
        if let (Some(tid), Some(win)) = (self.timer_id.take(), web_sys::window()) {
            win.clear_timeout_with_handle(tid);
        }
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let toasts = use_toasts();
    let config = app_state.config.get_value();

    let vm = RwSignal::new(NotesViewState::new(config.per_page));
    let search_text: RwSignal<String> = RwSignal::new(String::new());

    // Late responses must not touch a disposed view.
    let alive = Arc::new(AtomicBool::new(true));
    let search_timer = Arc::new(Mutex::new(SearchTimer {
        debouncer: Debouncer::new(config.search_debounce_ms),
        timer_id: None,
    }));
    {
        let alive = alive.clone();
        let search_timer = search_timer.clone();
        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            if let Ok(mut t) = search_timer.lock() {
                t.clear();
                if t.debouncer.cancel() {
                    debug!("dropped uncommitted search");
                }
            }
        });
    }

    let on_search = Callback::new({
        let search_timer = search_timer.clone();
        move |text: String| {
            let Some(win) = web_sys::window() else {
                return;
            };
            let Ok(mut t) = search_timer.lock() else {
                return;
            };
            t.clear();
            let ticket = t.debouncer.push(text);

            let timer = search_timer.clone();
            let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
                let value = timer.lock().ok().and_then(|mut t| {
                    t.timer_id = None;
                    t.debouncer.fire(ticket)
                });
                if let Some(value) = value {
                    vm.try_update(|s| {
                        if s.commit_search(value.clone()) {
                            debug!(search = %value, "search committed");
                        }
                    });
                }
            });
            let delay = t.debouncer.delay_ms();
            t.timer_id = win
                .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay)
                .ok();
        }
    });

    // Read the list whenever the key changes or a mutation asks for a refresh.
    let request = Memo::new(move |_| vm.with(|s| (s.query_key(), s.revision())));
    {
        let alive = alive.clone();
        Effect::new(move |_| {
            let (key, _) = request.get();
            let Some(token) = vm.try_update(|s| s.begin_fetch()) else {
                return;
            };
            let client = app_state.query_client();
            debug!(search = %key.search, page = key.page, status = ?client.status(&key), "reading notes");

            // Cached pages are applied synchronously so the list does not flash.
            if let Some(cached) = client.cached(&key) {
                if let Some(FetchOutcome::Shown { announce_empty: true }) =
                    vm.try_update(|s| s.apply_fetch(token, Ok(cached)))
                {
                    toasts.info(NO_NOTES_MESSAGE);
                }
                return;
            }
            let fetch = client.fetch(&key);

            let alive = alive.clone();
            spawn_local(async move {
                let result = fetch.await;
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match vm.try_update(|s| s.apply_fetch(token, result)) {
                    Some(FetchOutcome::Shown { announce_empty: true }) => toasts.info(NO_NOTES_MESSAGE),
                    Some(FetchOutcome::Failed(e)) => {
                        warn!(search = %key.search, page = key.page, error = %e, "loading notes failed");
                    }
                    _ => {}
                }
            });
        });
    }

    let on_page = Callback::new(move |page: u32| {
        vm.update(|s| {
            if s.go_to_page(page) {
                debug!(page, "page changed");
            }
        });
    });

    let on_create = Callback::new({
        let alive = alive.clone();
        move |form: DraftForm| {
            let Some(start) = vm.try_update(|s| s.begin_create(&form)) else {
                return;
            };
            let draft = match start {
                CreateStart::Ready(draft) => draft,
                CreateStart::Invalid => {
                    debug!("create form rejected by validation");
                    return;
                }
                CreateStart::Busy => return,
            };

            let client = app_state.query_client();
            let alive = alive.clone();
            spawn_local(async move {
                let result = client.create(draft).await;
                if let Err(e) = &result {
                    warn!(error = %e, "creating note failed");
                }
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                let created = result.is_ok();
                vm.try_update(|s| s.finish_create(&result));
                if created {
                    toasts.success("Note created");
                }
            });
        }
    });

    let on_delete = Callback::new({
        let alive = alive.clone();
        move |id: String| {
            if vm.try_update(|s| s.begin_delete(&id)) != Some(true) {
                return;
            }

            let client = app_state.query_client();
            let alive = alive.clone();
            spawn_local(async move {
                let result = client.delete(&id).await;
                match &result {
                    Ok(DeleteOutcome::Deleted(note)) => debug!(note_id = %id, title = %note.title, "note removed"),
                    Ok(DeleteOutcome::AlreadyGone) => debug!(note_id = %id, "note was already gone"),
                    Err(e) => warn!(note_id = %id, error = %e, "deleting note failed"),
                }
                if !alive.load(Ordering::Relaxed) {
                    return;
                }
                match vm.try_update(|s| s.finish_delete(&result)) {
                    Some(DeleteNotice::Deleted) => toasts.success("Note deleted"),
                    Some(DeleteNotice::Failed(message)) => toasts.error(message),
                    None => {}
                }
            });
        }
    });

    let open_create = move |_: web_sys::MouseEvent| {
        vm.update(|s| s.open_create());
        debug!("create form opened");
    };
    let close_create = Callback::new(move |_: ()| {
        vm.update(|s| {
            s.close_create();
        });
    });

    let list_area = Memo::new(move |_| vm.with(|s| s.list_area()));
    let pager = Memo::new(move |_| vm.with(|s| s.pager()));
    let is_loading = Memo::new(move |_| vm.with(|s| s.is_loading()));
    let create_open = Signal::derive(move || vm.with(|s| s.is_create_open()));
    let creating = Signal::derive(move || vm.with(|s| s.is_creating()));
    let form_errors = Signal::derive(move || vm.with(|s| s.form_errors().clone()));
    let create_error = Signal::derive(move || vm.with(|s| s.create_error()));
    let deleting_id = Signal::derive(move || vm.with(|s| s.deleting_id().map(str::to_string)));

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex w-full max-w-5xl flex-col gap-6 px-4 py-8">
                <header class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                    <SearchBox value=search_text on_change=on_search />

                    {move || pager.get().map(|p| view! { <Pagination pager=p on_change=on_page /> })}

                    <Button on:click=open_create>
                        <Plus />
                        "Create note"
                    </Button>
                </header>

                <main class="relative" aria-busy=move || is_loading.get().then_some("true")>
                    {move || match list_area.get() {
                        ListArea::Error(message) => view! { <ErrorMessage message=message /> }.into_any(),
                        ListArea::Loading => view! { <Loader /> }.into_any(),
                        ListArea::Empty => {
                            view! {
                                <p class="py-10 text-center text-sm text-muted-foreground">{NO_NOTES_MESSAGE}</p>
                            }
                                .into_any()
                        }
                        ListArea::Notes(page) => {
                            view! { <NoteList page=page deleting_id=deleting_id on_delete=on_delete /> }.into_any()
                        }
                    }}
                </main>
            </div>

            <Modal open=create_open on_close=close_create title="New note">
                <NoteForm
                    errors=form_errors
                    submit_error=create_error
                    pending=creating
                    on_submit=on_create
                    on_cancel=close_create
                />
            </Modal>
        </div>
    }
}

/// Shown instead of the app when startup configuration is unusable.
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-md flex-col justify-center gap-4 px-4 py-10">
                <h1 class="text-lg font-semibold">"NoteHub"</h1>
                <ErrorMessage message=message />
                <p class="text-xs text-muted-foreground">
                    "Set NOTEHUB_TOKEN (and optionally API_URL) in window.ENV or at build time, then reload."
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }
}
