//! Async actions for the subcategories slice
//!
//! Each thunk reports its lifecycle to the store and hands the outcome back
//! to the caller. Mutations do not patch the cached list.

use crate::shared::api_error::ApiError;
use crate::shared::catalog_api::CatalogApi;
use crate::store::{StoreDispatch, SubcategoriesAction};
use contracts::domain::a001_category::aggregate::CategoryId;
use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto, SubcategoryId};

pub async fn fetch_subcategories<A, S>(
    api: &A,
    store: &S,
    category_id: &CategoryId,
) -> Result<Vec<Subcategory>, ApiError>
where
    A: CatalogApi + ?Sized,
    S: StoreDispatch + ?Sized,
{
    store.dispatch(SubcategoriesAction::FetchPending.into());
    match api.fetch_subcategories(category_id).await {
        Ok(subcategories) => {
            store.dispatch(
                SubcategoriesAction::FetchFulfilled {
                    category_id: category_id.clone(),
                    subcategories: subcategories.clone(),
                }
                .into(),
            );
            Ok(subcategories)
        }
        Err(e) => {
            log::warn!("fetch subcategories of {} failed: {}", category_id.value(), e);
            store.dispatch(SubcategoriesAction::FetchRejected(e.message()).into());
            Err(e)
        }
    }
}

pub async fn create_subcategory<A, S>(
    api: &A,
    store: &S,
    data: &SubcategoryDto,
) -> Result<Option<Subcategory>, ApiError>
where
    A: CatalogApi + ?Sized,
    S: StoreDispatch + ?Sized,
{
    store.dispatch(SubcategoriesAction::MutationPending.into());
    let result = api.create_subcategory(data).await;
    settle(store, "create", result)
}

pub async fn update_subcategory<A, S>(
    api: &A,
    store: &S,
    id: &SubcategoryId,
    data: &SubcategoryDto,
) -> Result<Option<Subcategory>, ApiError>
where
    A: CatalogApi + ?Sized,
    S: StoreDispatch + ?Sized,
{
    store.dispatch(SubcategoriesAction::MutationPending.into());
    let result = api.update_subcategory(id, data).await;
    settle(store, "update", result)
}

pub async fn delete_subcategory<A, S>(api: &A, store: &S, id: &SubcategoryId) -> Result<(), ApiError>
where
    A: CatalogApi + ?Sized,
    S: StoreDispatch + ?Sized,
{
    store.dispatch(SubcategoriesAction::MutationPending.into());
    let result = api.delete_subcategory(id).await;
    settle(store, "delete", result)
}

fn settle<S, T>(store: &S, op: &str, result: Result<T, ApiError>) -> Result<T, ApiError>
where
    S: StoreDispatch + ?Sized,
{
    if let Err(e) = &result {
        log::warn!("{} subcategory failed: {}", op, e);
        store.dispatch(SubcategoriesAction::MutationRejected(e.message()).into());
    }
    result
}
