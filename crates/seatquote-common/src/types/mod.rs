pub mod billing;
pub mod deliverable;
pub mod payment;
pub mod selection;
pub mod tier;
