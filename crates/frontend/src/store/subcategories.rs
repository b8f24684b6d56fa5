use contracts::domain::a001_category::aggregate::CategoryId;
use contracts::domain::a002_subcategory::aggregate::Subcategory;

/// `subcategories` slice of the store
///
/// Holds the list of one category at a time; mutations never touch the list,
/// the screen re-fetches instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubcategoriesState {
    pub subcategories: Vec<Subcategory>,
    pub loading: bool,
    pub error: Option<String>,
    /// Category the current list was fetched for
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubcategoriesAction {
    FetchPending,
    FetchFulfilled {
        category_id: CategoryId,
        subcategories: Vec<Subcategory>,
    },
    FetchRejected(String),
    MutationPending,
    MutationRejected(String),
}

impl SubcategoriesAction {
    pub fn name(&self) -> &'static str {
        match self {
            SubcategoriesAction::FetchPending => "subcategories/fetch/pending",
            SubcategoriesAction::FetchFulfilled { .. } => "subcategories/fetch/fulfilled",
            SubcategoriesAction::FetchRejected(_) => "subcategories/fetch/rejected",
            SubcategoriesAction::MutationPending => "subcategories/mutation/pending",
            SubcategoriesAction::MutationRejected(_) => "subcategories/mutation/rejected",
        }
    }
}

impl SubcategoriesState {
    pub fn reduce(&mut self, action: SubcategoriesAction) {
        match action {
            SubcategoriesAction::FetchPending => {
                self.loading = true;
                self.error = None;
            }
            // Whichever response lands last wins.
            SubcategoriesAction::FetchFulfilled {
                category_id,
                subcategories,
            } => {
                self.subcategories = subcategories;
                self.category_id = Some(category_id);
                self.loading = false;
            }
            SubcategoriesAction::FetchRejected(error) => {
                self.loading = false;
                self.error = Some(error);
            }
            SubcategoriesAction::MutationPending => {
                self.error = None;
            }
            SubcategoriesAction::MutationRejected(error) => {
                self.error = Some(error);
            }
        }
    }
}
