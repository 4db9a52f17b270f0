use std::sync::Arc;

use leptos::prelude::*;

use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardList, CardTitle, Spinner,
};
use crate::models::{Note, NotePage};

#[component]
pub fn NoteList(
    page: Arc<NotePage>,
    #[prop(into)] deleting_id: Signal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <CardList attr:data-name="NoteList">
            {page
                .notes
                .iter()
                .cloned()
                .map(|note| view! { <NoteItem note=note deleting_id=deleting_id on_delete=on_delete /> })
                .collect_view()}
        </CardList>
    }
}

#[component]
fn NoteItem(note: Note, deleting_id: Signal<Option<String>>, on_delete: Callback<String>) -> impl IntoView {
    let id = StoredValue::new(note.id);
    let is_deleting = move || deleting_id.with(|d| id.with_value(|id| d.as_deref() == Some(id.as_str())));
    // One delete at a time.
    let busy = move || deleting_id.with(Option::is_some);

    view! {
        <Card attr:data-note-id=id.get_value()>
            <CardTitle>{note.title}</CardTitle>
            <CardContent>{note.content}</CardContent>
            <CardFooter>
                <Badge>{note.tag.to_string()}</Badge>
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    attr:disabled=busy
                    attr:aria-busy=move || is_deleting().then_some("true")
                    on:click=move |_| on_delete.run(id.get_value())
                >
                    <Show when=is_deleting fallback=|| "Delete">
                        <Spinner />
                    </Show>
                </Button>
            </CardFooter>
        </Card>
    }
}
