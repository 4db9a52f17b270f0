use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Auto-dismiss delay.
pub(crate) const TOAST_MS: i32 = 3_000;
const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Append a toast, dropping the oldest ones past the visible limit.
fn push_capped(list: &mut Vec<Toast>, toast: Toast) {
    list.push(toast);
    if list.len() > MAX_TOASTS {
        let excess = list.len() - MAX_TOASTS;
        list.drain(..excess);
    }
}

/// App-wide toast queue, provided through context.
#[derive(Clone, Copy)]
pub(crate) struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.with_value(|n| *n) + 1;
        self.next_id.set_value(id);
        self.items.update(|list| push_capped(list, Toast { id, kind, message }));

        let Some(win) = web_sys::window() else {
            return;
        };
        let this = *self;
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || this.dismiss(id));
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), TOAST_MS);
    }
}

pub(crate) fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div
            data-name="Toaster"
            aria-live="polite"
            class="pointer-events-none fixed top-4 right-4 z-[70] flex w-full max-w-xs flex-col gap-2"
        >
            <For each=move || toasts.items.get() key=|t| t.id let:toast>
                <div
                    role="status"
                    class=toast_class(toast.kind)
                    on:click=move |_| toasts.dismiss(toast.id)
                >
                    {toast.message}
                </div>
            </For>
        </div>
    }
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "pointer-events-auto cursor-pointer rounded-md border border-emerald-300 bg-emerald-50 px-4 py-3 text-sm text-emerald-900 shadow-md",
        ToastKind::Error => "pointer-events-auto cursor-pointer rounded-md border border-destructive/40 bg-background px-4 py-3 text-sm text-destructive shadow-md",
        ToastKind::Info => "pointer-events-auto cursor-pointer rounded-md border bg-background px-4 py-3 text-sm text-foreground shadow-md",
    }
}
