//! Shared DTOs exchanged between the admin frontend and the catalog API

pub mod domain;
