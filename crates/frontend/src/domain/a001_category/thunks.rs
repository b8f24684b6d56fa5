use crate::shared::api_error::ApiError;
use crate::shared::catalog_api::CatalogApi;
use crate::store::{CategoriesAction, StoreDispatch};
use contracts::domain::a001_category::aggregate::Category;

/// Load every category into the store.
pub async fn fetch_categories<A, S>(api: &A, store: &S) -> Result<Vec<Category>, ApiError>
where
    A: CatalogApi + ?Sized,
    S: StoreDispatch + ?Sized,
{
    store.dispatch(CategoriesAction::FetchPending.into());
    match api.fetch_categories().await {
        Ok(categories) => {
            store.dispatch(CategoriesAction::FetchFulfilled(categories.clone()).into());
            Ok(categories)
        }
        Err(e) => {
            log::warn!("fetch categories failed: {}", e);
            store.dispatch(CategoriesAction::FetchRejected(e.message()).into());
            Err(e)
        }
    }
}
