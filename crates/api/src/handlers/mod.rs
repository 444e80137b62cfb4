pub mod admin;
pub mod authors;
pub mod pages;
pub mod recipes_api;
pub mod recipes_api_v1;
pub mod tokens;
