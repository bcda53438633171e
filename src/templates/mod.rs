pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

pub use components::html_error_response;
pub use layouts::desktop::desktop_layout;
