use crate::shared::icons::icon;
use crate::shared::pagination::Paginator;
use leptos::prelude::*;

/// Pager shown under a client-side paginated table
#[component]
pub fn PaginationControls(
    /// Paging position, owned by the table
    paginator: RwSignal<Paginator>,

    /// Number of rows in the full (unpaged) list
    #[prop(into)]
    total_count: Signal<usize>,

    /// Available page size options
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_default();

    let current_page = move || paginator.get().effective_page(total_count.get());
    let total_pages = move || paginator.get().total_pages(total_count.get());
    let go_to = move |page: usize| paginator.update(|p| p.go_to(page, total_count.get_untracked()));
    let at_start = move || current_page() == 0;
    let at_end = move || current_page() + 1 >= total_pages();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        paginator.update(|p| p.set_page_size(size));
                    }
                }
                prop:value=move || paginator.get().page_size.to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || paginator.get().page_size == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || paginator.get().summary(total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(current_page().saturating_sub(1))
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(current_page() + 1)
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(total_pages().saturating_sub(1))
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
