use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

/// Error banner for a failed list read or submission.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert class="border-destructive/30 text-destructive" attr:role="alert">
            <AlertDescription class="text-destructive">{message}</AlertDescription>
        </Alert>
    }
}
