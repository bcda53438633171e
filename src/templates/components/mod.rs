pub mod card;
pub mod error;
pub mod fields;
pub mod lead_form;

pub use card::{card, notice, stat_rows};
pub use error::html_error_response;
pub use fields::{checkbox, number_field, LiveForm};
pub use lead_form::{lead_form, lead_invalid, lead_result};
