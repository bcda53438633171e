pub mod html;
pub mod json;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::{html_response, html_response_with_status};
pub use json::{json_response, no_content};
pub use redirect::{redirect, redirect_with_cookie};
pub use xlsx::xlsx_response;
