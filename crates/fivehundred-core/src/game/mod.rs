pub mod serialization;
pub mod session;
pub mod table;
