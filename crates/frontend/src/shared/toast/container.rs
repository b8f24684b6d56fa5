use super::ToastService;
use leptos::prelude::*;

/// Renders the global toast stack in the top-right corner.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let queue = toasts.queue();

    view! {
        <Show when=move || !queue.with(|q| q.is_empty())>
            <div class="toast-container" role="status" aria-live="polite">
                <For
                    each=move || queue.get().toasts().to_vec()
                    key=|toast| toast.id
                    children=move |toast| {
                        let id = toast.id;
                        let class = format!("toast {}", toast.notification.kind.css_modifier());
                        view! {
                            <div class=class on:click=move |_| toasts.dismiss(id)>
                                {toast.notification.message}
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
