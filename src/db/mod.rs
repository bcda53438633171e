pub mod connection;
pub mod leads;
pub mod usage;

pub use connection::Database;
