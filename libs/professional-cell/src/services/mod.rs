pub mod availability;
pub mod catalog;
