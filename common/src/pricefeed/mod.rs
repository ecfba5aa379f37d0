pub mod guards;
pub mod interface;
pub mod types;
