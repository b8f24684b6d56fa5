use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, read_json};
use contracts::domain::a001_category::aggregate::Category;
use gloo_net::http::Request;

/// Fetch all categories
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let response = Request::get(&api_url("/api/categories"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}
