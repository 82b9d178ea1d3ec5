pub mod api;
pub mod app;
pub mod card;
pub mod composer;
pub mod config;
pub mod errors;
pub mod feed;
pub mod logger;
pub mod post;
pub mod route;
pub mod text_utils;
pub mod view;
#[cfg(test)]
mod test_data;
