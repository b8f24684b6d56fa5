use contracts::domain::a001_category::aggregate::Category;

/// `categories` slice of the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoriesState {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoriesAction {
    FetchPending,
    FetchFulfilled(Vec<Category>),
    FetchRejected(String),
}

impl CategoriesAction {
    pub fn name(&self) -> &'static str {
        match self {
            CategoriesAction::FetchPending => "categories/fetch/pending",
            CategoriesAction::FetchFulfilled(_) => "categories/fetch/fulfilled",
            CategoriesAction::FetchRejected(_) => "categories/fetch/rejected",
        }
    }
}

impl CategoriesState {
    pub fn reduce(&mut self, action: CategoriesAction) {
        match action {
            CategoriesAction::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            CategoriesAction::FetchFulfilled(categories) => {
                self.categories = categories;
                self.loading = false;
            }
            CategoriesAction::FetchRejected(error) => {
                self.loading = false;
                self.error = Some(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::CategoryId;

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = CategoriesState::default();
        state.reduce(CategoriesAction::FetchPending);
        assert!(state.loading);

        let loaded = vec![Category::new(CategoryId::new("c1"), "Shoes")];
        state.reduce(CategoriesAction::FetchFulfilled(loaded.clone()));
        assert!(!state.loading);
        assert_eq!(state.categories, loaded);
    }

    #[test]
    fn test_rejection_keeps_previous_list() {
        let mut state = CategoriesState::default();
        let loaded = vec![Category::new(CategoryId::new("c1"), "Shoes")];
        state.reduce(CategoriesAction::FetchFulfilled(loaded.clone()));
        state.reduce(CategoriesAction::FetchPending);
        state.reduce(CategoriesAction::FetchRejected("HTTP 500".into()));

        assert_eq!(state.categories, loaded);
        assert_eq!(state.error.as_deref(), Some("HTTP 500"));
        assert!(!state.loading);
    }
}
