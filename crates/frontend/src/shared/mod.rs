pub mod api_error;
pub mod api_utils;
pub mod catalog_api;
pub mod components;
pub mod config;
pub mod confirm;
pub mod icons;
pub mod pagination;
pub mod toast;
