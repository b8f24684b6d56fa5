pub mod api;
pub mod thunks;
pub mod ui;
