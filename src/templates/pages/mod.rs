pub mod admin;
pub mod admin_login;
pub mod calculators;
pub mod contact;
pub mod home;
pub mod rent_estimate;

pub use admin::admin_page;
pub use admin_login::admin_login_page;
pub use calculators::{cap_rate_page, readiness_page, renovation_page, vacancy_cost_page};
pub use contact::{contact_page, contact_result_page};
pub use home::home_page;
pub use rent_estimate::{estimate_result, rent_estimate_page, EstimateVm};
