use leptos::prelude::*;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;

use crate::components::ui::input::FIELD_CLASS;
use crate::components::ui::{
    Button, ButtonVariant, DialogFooter, ErrorMessage, FieldError, Input, Label, Spinner, Textarea,
};
use crate::drafts::{DraftForm, FieldErrors};
use crate::models::NoteTag;

/// Create-note form. Holds the raw field values; validation and submission
/// are the caller's.
#[component]
pub fn NoteForm(
    #[prop(into)] errors: Signal<FieldErrors>,
    #[prop(into)] submit_error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<DraftForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let tag = RwSignal::new(NoteTag::default().to_string());

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        on_submit.run(DraftForm {
            title: title.get_untracked(),
            content: content.get_untracked(),
            tag: tag.get_untracked(),
        });
    };

    let on_tag_change = move |ev: web_sys::Event| {
        if let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) {
            tag.set(select.value());
        }
    };

    let title_error = Signal::derive(move || errors.with(|e| e.title.clone()));
    let content_error = Signal::derive(move || errors.with(|e| e.content.clone()));
    let tag_error = Signal::derive(move || errors.with(|e| e.tag.clone()));

    view! {
        <form data-name="NoteForm" class="flex flex-col gap-4" novalidate=true on:submit=on_form_submit>
            <div class="flex flex-col gap-1.5">
                <Label html_for="note-title">"Title"</Label>
                <Input
                    id="note-title"
                    name="title"
                    bind_value=title
                    disabled=pending
                    invalid=Signal::derive(move || title_error.with(Option::is_some))
                    autofocus=true
                />
                <FieldError message=title_error />
            </div>

            <div class="flex flex-col gap-1.5">
                <Label html_for="note-content">"Content"</Label>
                <Textarea
                    id="note-content"
                    name="content"
                    bind_value=content
                    disabled=pending
                    invalid=Signal::derive(move || content_error.with(Option::is_some))
                />
                <FieldError message=content_error />
            </div>

            <div class="flex flex-col gap-1.5">
                <Label html_for="note-tag">"Tag"</Label>
                <select
                    id="note-tag"
                    name="tag"
                    class=format!("flex h-9 {FIELD_CLASS}")
                    disabled=move || pending.get()
                    aria-invalid=move || tag_error.with(Option::is_some).then_some("true")
                    prop:value=move || tag.get()
                    on:change=on_tag_change
                >
                    {NoteTag::iter()
                        .map(|t| view! { <option value=t.as_ref().to_string()>{t.to_string()}</option> })
                        .collect_view()}
                </select>
                <FieldError message=tag_error />
            </div>

            {move || submit_error.get().map(|message| view! { <ErrorMessage message=message /> })}

            <DialogFooter>
                <Button
                    variant=ButtonVariant::Outline
                    attr:r#type="button"
                    attr:disabled=move || pending.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button attr:r#type="submit" attr:disabled=move || pending.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || pending.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if pending.get() { "Creating..." } else { "Create note" }}
                    </span>
                </Button>
            </DialogFooter>
        </form>
    }
}
