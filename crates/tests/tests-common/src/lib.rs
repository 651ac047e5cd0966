pub mod deployment;
pub mod fake_store;
