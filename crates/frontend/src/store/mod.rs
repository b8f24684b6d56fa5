//! Client-side store
//!
//! Each slice is plain data with a reducer. `AppStore` is the reactive
//! holder provided through context; screens only read it, thunks write to it
//! through `StoreDispatch`.

pub mod categories;
pub mod subcategories;

pub use categories::{CategoriesAction, CategoriesState};
pub use subcategories::{SubcategoriesAction, SubcategoriesState};

use leptos::prelude::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Categories(CategoriesAction),
    Subcategories(SubcategoriesAction),
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::Categories(a) => a.name(),
            StoreAction::Subcategories(a) => a.name(),
        }
    }
}

impl From<CategoriesAction> for StoreAction {
    fn from(action: CategoriesAction) -> Self {
        StoreAction::Categories(action)
    }
}

impl From<SubcategoriesAction> for StoreAction {
    fn from(action: SubcategoriesAction) -> Self {
        StoreAction::Subcategories(action)
    }
}

/// Sink for store actions
pub trait StoreDispatch {
    fn dispatch(&self, action: StoreAction);
}

/// Whole store as plain data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub categories: CategoriesState,
    pub subcategories: SubcategoriesState,
}

impl AppState {
    pub fn reduce(&mut self, action: StoreAction) {
        match action {
            StoreAction::Categories(a) => self.categories.reduce(a),
            StoreAction::Subcategories(a) => self.subcategories.reduce(a),
        }
    }
}

impl StoreDispatch for RefCell<AppState> {
    fn dispatch(&self, action: StoreAction) {
        self.borrow_mut().reduce(action);
    }
}

/// Reactive store provided to the component tree
#[derive(Clone, Copy)]
pub struct AppStore {
    pub categories: RwSignal<CategoriesState>,
    pub subcategories: RwSignal<SubcategoriesState>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(CategoriesState::default()),
            subcategories: RwSignal::new(SubcategoriesState::default()),
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreDispatch for AppStore {
    fn dispatch(&self, action: StoreAction) {
        log::debug!("store: {}", action.name());
        match action {
            StoreAction::Categories(a) => self.categories.update(|s| s.reduce(a)),
            StoreAction::Subcategories(a) => self.subcategories.update(|s| s.reduce(a)),
        }
    }
}
