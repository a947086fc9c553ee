pub mod parameters;
pub mod production;
