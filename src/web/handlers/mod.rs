//! Request handlers for the board page and the JSON API.

pub mod api;
pub mod pages;
