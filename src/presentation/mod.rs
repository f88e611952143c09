// Presentation layer - HTTP surface and page rendering
pub mod app_state;
pub mod handlers;
pub mod page;
