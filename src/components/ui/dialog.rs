use icons::X;
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {DialogHeader, div, "flex flex-col gap-2 pr-8 text-left"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogFooter, footer, "flex flex-col-reverse gap-2 sm:flex-row sm:justify-end"}
}

pub use components::*;

/// Signal-driven modal. Closes on backdrop click, the close button and
/// Escape; each of those goes through `on_close`, which may refuse.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "relative bg-background border rounded-2xl shadow-lg p-6 w-full max-w-lg max-h-[85vh] overflow-y-auto flex flex-col gap-4",
        class
    );
    let title = StoredValue::new(title);
    let merged_class = StoredValue::new(merged_class);

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || key_handle.remove());

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="ModalBackdrop"
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4"
                on:click=move |_| on_close.run(())
            >
                <div
                    data-name="ModalContent"
                    role="dialog"
                    aria-modal="true"
                    class=merged_class.get_value()
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 p-1 rounded-sm focus:ring-2 focus:ring-offset-2 focus:outline-none focus:ring-ring [&_svg:not([class*='size-'])]:size-4"
                        aria-label="Close dialog"
                        on:click=move |_| on_close.run(())
                    >
                        <X />
                    </button>

                    <DialogHeader>
                        <DialogTitle>{title.get_value()}</DialogTitle>
                    </DialogHeader>

                    {children()}
                </div>
            </div>
        </Show>
    }
}
