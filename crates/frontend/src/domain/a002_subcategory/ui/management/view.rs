use super::effects::{run_effect, EffectContext};
use super::view_model::{parent_category_name, update, Msg, SubcategoryForm};
use crate::shared::catalog_api::HttpCatalogApi;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use crate::shared::pagination::Paginator;
use crate::shared::toast::ToastService;
use crate::store::AppStore;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Reactive side of the screen: form signal plus the context services
/// effects run against.
#[derive(Clone, Copy)]
struct Screen {
    form: RwSignal<SubcategoryForm>,
    store: AppStore,
    toasts: ToastService,
}

impl Screen {
    /// Apply `msg` and spawn its effects. Effects are not serialized, so two
    /// quick submits both reach the API.
    fn send(self, msg: Msg) {
        let effects = self
            .form
            .try_update(|form| update(form, msg))
            .unwrap_or_default();
        for effect in effects {
            spawn_local(async move {
                let ctx = EffectContext {
                    api: &HttpCatalogApi,
                    store: &self.store,
                    notifier: &self.toasts,
                    confirm: &BrowserConfirm,
                };
                if let Some(next) = run_effect(&ctx, effect).await {
                    self.send(next);
                }
            });
        }
    }
}

#[component]
pub fn SubcategoryManagement() -> impl IntoView {
    let store = use_context::<AppStore>().expect("AppStore not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let screen = Screen {
        form: RwSignal::new(SubcategoryForm::default()),
        store,
        toasts,
    };
    let paginator = RwSignal::new(Paginator::default());

    screen.send(Msg::Mounted);

    let categories = Signal::derive(move || store.categories.with(|s| s.categories.clone()));
    let rows = Signal::derive(move || store.subcategories.with(|s| s.subcategories.clone()));
    let loading = Signal::derive(move || store.subcategories.with(|s| s.loading));
    let total_count = Signal::derive(move || rows.with(|r| r.len()));
    let page_rows = move || {
        let p = paginator.get();
        rows.with(|r| p.slice(r).to_vec())
    };

    let selected_category = move || {
        screen.form.with(|f| {
            f.category_id
                .as_ref()
                .map(|c| c.as_string())
                .unwrap_or_default()
        })
    };
    let submit_label = move || screen.form.with(|f| f.submit_label());

    view! {
        <div class="content subcategory-management">
            <div class="page__header">
                <h2 class="page__title">"Subcategory Management"</h2>
            </div>

            <form
                class="details-form subcategory-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    screen.send(Msg::Submit);
                }
            >
                <div class="form-group">
                    <select
                        id="category"
                        class="form-control"
                        prop:value=selected_category
                        on:change=move |ev| {
                            let category_id = CategoryId::from_string(&event_target_value(&ev)).ok();
                            screen.send(Msg::CategorySelected(category_id));
                        }
                    >
                        <option value="">"Select Category"</option>
                        <For
                            each=move || categories.get()
                            key=|c| (c.id.clone(), c.name.clone())
                            children=move |c: Category| {
                                let id = c.id.as_string();
                                let id_for_selected = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || selected_category() == id_for_selected
                                    >
                                        {c.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <input
                        type="text"
                        id="sub-name"
                        class="form-control"
                        placeholder="Subcategory Name"
                        prop:value=move || screen.form.with(|f| f.sub_name.clone())
                        on:input=move |ev| screen.send(Msg::NameChanged(event_target_value(&ev)))
                    />
                </div>

                <div class="details-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| screen.send(Msg::Cancel)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary">
                        {submit_label}
                    </button>
                </div>
            </form>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="table-progress">
                        <Spinner />
                    </div>
                }
            >
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Subcategory Name"</TableHeaderCell>
                                <TableHeaderCell>"Parent Category"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=page_rows
                                key=|row| (row.id.clone(), row.name.clone(), row.category_id.clone())
                                children=move |row: Subcategory| {
                                    let parent_id = row.category_id.clone();
                                    let delete_id = row.id.clone();
                                    let name = row.name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || categories.with(|c| parent_category_name(c, &parent_id))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="button button--primary button--icon"
                                                        title="Edit"
                                                        on:click=move |_| screen.send(Msg::Edit(row.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--danger button--icon"
                                                        title="Delete"
                                                        on:click=move |_| screen.send(Msg::DeleteRequested(delete_id.clone()))
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (total_count.get() == 0).then(|| view! {
                        <div class="table__empty">"There are no records to display"</div>
                    })}
                </div>
                <PaginationControls
                    paginator=paginator
                    total_count=total_count
                    page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                />
            </Show>
        </div>
    }
}
