use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, ensure_ok, read_json, read_json_lenient};
use contracts::domain::a001_category::aggregate::CategoryId;
use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto, SubcategoryId};
use gloo_net::http::Request;

fn collection_path(category_id: &CategoryId) -> String {
    format!(
        "/api/subcategories?categoryId={}",
        urlencoding::encode(category_id.value())
    )
}

fn item_path(id: &SubcategoryId) -> String {
    format!("/api/subcategories/{}", urlencoding::encode(id.value()))
}

/// Fetch the subcategories of one category
pub async fn fetch_by_category(category_id: &CategoryId) -> Result<Vec<Subcategory>, ApiError> {
    let response = Request::get(&api_url(&collection_path(category_id)))
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Create a subcategory. `None` when the reply carries no recognizable record.
pub async fn create(data: &SubcategoryDto) -> Result<Option<Subcategory>, ApiError> {
    let response = Request::post(&api_url("/api/subcategories"))
        .header("Accept", "application/json")
        .json(data)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json_lenient(response).await
}

/// Update name and parent of a subcategory
pub async fn update(
    id: &SubcategoryId,
    data: &SubcategoryDto,
) -> Result<Option<Subcategory>, ApiError> {
    let response = Request::put(&api_url(&item_path(id)))
        .header("Accept", "application/json")
        .json(data)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json_lenient(response).await
}

/// Delete a subcategory
pub async fn delete(id: &SubcategoryId) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&item_path(id)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    ensure_ok(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_encoded() {
        assert_eq!(
            collection_path(&CategoryId::new("64f0 c2")),
            "/api/subcategories?categoryId=64f0%20c2"
        );
        assert_eq!(
            item_path(&SubcategoryId::new("a/b")),
            "/api/subcategories/a%2Fb"
        );
    }
}
