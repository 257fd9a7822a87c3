pub mod availability;
pub mod ledger;
