use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {CardList, ul, "grid gap-4 sm:grid-cols-2 lg:grid-cols-3"}
    clx! {Card, li, "bg-card text-card-foreground flex flex-col gap-3 rounded-xl border p-5 shadow-sm"}
    clx! {CardTitle, h2, "leading-snug font-semibold break-words"}
    clx! {CardContent, p, "text-muted-foreground text-sm whitespace-pre-wrap break-words grow"}
    clx! {CardFooter, footer, "flex items-center justify-between gap-2 pt-2"}
    clx! {Badge, span, "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium"}
}

pub use components::*;
