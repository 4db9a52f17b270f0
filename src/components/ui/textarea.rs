use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

use super::input::FIELD_CLASS;

#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(default = 6)] rows: u32,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into, optional)] invalid: Signal<bool>,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!("min-h-24 py-2 resize-y", FIELD_CLASS, class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(area) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok()) {
            bind_value.set(area.value());
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            rows=rows
            disabled=move || disabled.get()
            aria-invalid=move || invalid.get().then_some("true")
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
