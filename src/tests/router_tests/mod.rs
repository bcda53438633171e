mod admin_tests;
mod calculator_tests;
mod contact_tests;
mod rent_estimate_tests;
