use icons::{ChevronLeft, ChevronRight};
use leptos::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::state::Pager;
use crate::util::{page_window, PageSlot};

/// Page numbers shown either side of the current page.
const RADIUS: u32 = 2;

#[component]
pub fn Pagination(pager: Pager, on_change: Callback<u32>) -> impl IntoView {
    let Pager { current, total } = pager;
    let go = move |page: u32| {
        if page != current && (1..=total).contains(&page) {
            on_change.run(page);
        }
    };

    let slots = page_window(current, total, RADIUS)
        .into_iter()
        .map(|slot| match slot {
            PageSlot::Page(n) => {
                let is_current = n == current;
                let variant = if is_current { ButtonVariant::Current } else { ButtonVariant::Ghost };
                view! {
                    <Button
                        variant=variant
                        size=ButtonSize::Icon
                        attr:aria-current=is_current.then_some("page")
                        on:click=move |_| go(n)
                    >
                        {n}
                    </Button>
                }
                .into_any()
            }
            PageSlot::Gap => view! { <span class="px-1 text-muted-foreground">"…"</span> }.into_any(),
        })
        .collect_view();

    view! {
        <nav data-name="Pagination" aria-label="Pagination" class="flex flex-wrap items-center justify-center gap-1">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Previous page"
                attr:disabled={current <= 1}
                on:click=move |_| go(current.saturating_sub(1))
            >
                <ChevronLeft />
            </Button>
            {slots}
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Next page"
                attr:disabled={current >= total}
                on:click=move |_| go(current + 1)
            >
                <ChevronRight />
            </Button>
        </nav>
    }
}
