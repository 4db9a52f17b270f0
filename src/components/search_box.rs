use leptos::prelude::*;

use crate::components::ui::Input;

#[component]
pub fn SearchBox(#[prop(into)] value: RwSignal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <div data-name="SearchBox" class="w-full sm:max-w-xs">
            <Input
                r#type="search"
                name="search"
                placeholder="Search notes"
                bind_value=value
                on_value=on_change
                attr:aria-label="Search notes"
            />
        </div>
    }
}
