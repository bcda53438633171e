//! Small owner-facing calculators. Each one clamps its inputs and does
//! straight arithmetic; none of them share state.

pub mod cap_rate;
pub mod readiness;
pub mod renovation;
pub mod vacancy;
