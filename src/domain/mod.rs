pub mod lead;
pub mod normalize;
pub mod property;
pub mod usage;

pub use lead::LeadMessage;
pub use property::{PropertyInputs, PropertyType};
pub use usage::UsageEvent;
