//! Seam between the screen and the remote catalog service

use super::api_error::ApiError;
use crate::domain::{a001_category, a002_subcategory};
use async_trait::async_trait;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto, SubcategoryId};

/// Remote operations the admin screens consume.
///
/// Futures are `?Send` because every implementation runs on the browser's
/// single-threaded executor.
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn fetch_subcategories(&self, category_id: &CategoryId)
        -> Result<Vec<Subcategory>, ApiError>;

    /// A 2xx reply is success; the record is returned only when the body holds one.
    async fn create_subcategory(&self, data: &SubcategoryDto)
        -> Result<Option<Subcategory>, ApiError>;

    async fn update_subcategory(
        &self,
        id: &SubcategoryId,
        data: &SubcategoryDto,
    ) -> Result<Option<Subcategory>, ApiError>;

    async fn delete_subcategory(&self, id: &SubcategoryId) -> Result<(), ApiError>;
}

/// `CatalogApi` over HTTP, rooted at `api_base()`
#[derive(Clone, Copy, Default)]
pub struct HttpCatalogApi;

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        a001_category::api::fetch_categories().await
    }

    async fn fetch_subcategories(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Subcategory>, ApiError> {
        a002_subcategory::api::fetch_by_category(category_id).await
    }

    async fn create_subcategory(
        &self,
        data: &SubcategoryDto,
    ) -> Result<Option<Subcategory>, ApiError> {
        a002_subcategory::api::create(data).await
    }

    async fn update_subcategory(
        &self,
        id: &SubcategoryId,
        data: &SubcategoryDto,
    ) -> Result<Option<Subcategory>, ApiError> {
        a002_subcategory::api::update(id, data).await
    }

    async fn delete_subcategory(&self, id: &SubcategoryId) -> Result<(), ApiError> {
        a002_subcategory::api::delete(id).await
    }
}

/// In-memory `CatalogApi` that records every call, for driving screens in tests.
#[cfg(test)]
pub mod fake {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        FetchCategories,
        FetchSubcategories(CategoryId),
        Create(SubcategoryDto),
        Update(SubcategoryId, SubcategoryDto),
        Delete(SubcategoryId),
    }

    #[derive(Default)]
    pub struct FakeCatalogApi {
        pub categories: Vec<Category>,
        pub subcategories: RefCell<Vec<Subcategory>>,
        mutation_error: RefCell<Option<ApiError>>,
        calls: RefCell<Vec<Call>>,
        next_id: Cell<u32>,
        bodyless_replies: Cell<bool>,
    }

    impl FakeCatalogApi {
        pub fn new(categories: Vec<Category>, subcategories: Vec<Subcategory>) -> Self {
            Self {
                categories,
                subcategories: RefCell::new(subcategories),
                ..Default::default()
            }
        }

        /// Make every following create/update/delete fail with `error`.
        pub fn fail_mutations(&self, error: ApiError) {
            *self.mutation_error.borrow_mut() = Some(error);
        }

        /// Answer successful create/update with a 2xx that carries no record.
        pub fn reply_without_body(&self) {
            self.bodyless_replies.set(true);
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.calls.borrow().iter().filter(|c| pred(c)).count()
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        fn reply(&self, record: Subcategory) -> Option<Subcategory> {
            (!self.bodyless_replies.get()).then_some(record)
        }

        fn mutation_result(&self) -> Result<(), ApiError> {
            match self.mutation_error.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for FakeCatalogApi {
        async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
            self.record(Call::FetchCategories);
            Ok(self.categories.clone())
        }

        async fn fetch_subcategories(
            &self,
            category_id: &CategoryId,
        ) -> Result<Vec<Subcategory>, ApiError> {
            self.record(Call::FetchSubcategories(category_id.clone()));
            Ok(self
                .subcategories
                .borrow()
                .iter()
                .filter(|s| &s.category_id == category_id)
                .cloned()
                .collect())
        }

        async fn create_subcategory(
            &self,
            data: &SubcategoryDto,
        ) -> Result<Option<Subcategory>, ApiError> {
            self.record(Call::Create(data.clone()));
            self.mutation_result()?;
            self.next_id.set(self.next_id.get() + 1);
            let created = Subcategory::new(
                SubcategoryId::new(format!("new-{}", self.next_id.get())),
                data.name.clone(),
                data.category_id.clone(),
            );
            self.subcategories.borrow_mut().push(created.clone());
            Ok(self.reply(created))
        }

        async fn update_subcategory(
            &self,
            id: &SubcategoryId,
            data: &SubcategoryDto,
        ) -> Result<Option<Subcategory>, ApiError> {
            self.record(Call::Update(id.clone(), data.clone()));
            self.mutation_result()?;
            let mut subs = self.subcategories.borrow_mut();
            let sub = subs.iter_mut().find(|s| &s.id == id).ok_or(ApiError::Http {
                status: 404,
                message: Some("Subcategory not found".to_string()),
            })?;
            sub.name = data.name.clone();
            sub.category_id = data.category_id.clone();
            Ok(self.reply(sub.clone()))
        }

        async fn delete_subcategory(&self, id: &SubcategoryId) -> Result<(), ApiError> {
            self.record(Call::Delete(id.clone()));
            self.mutation_result()?;
            self.subcategories.borrow_mut().retain(|s| &s.id != id);
            Ok(())
        }
    }
}
