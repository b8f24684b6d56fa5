pub mod api;
pub mod thunks;
