use crate::domain::a002_subcategory::ui::management::SubcategoryManagement;
use crate::shared::toast::{ToastContainer, ToastService};
use crate::store::AppStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to the whole app via context.
    provide_context(AppStore::new());

    // Single global toast layer
    provide_context(ToastService::new());

    view! {
        <SubcategoryManagement />
        <ToastContainer />
    }
}
