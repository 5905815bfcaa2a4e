pub mod client;
pub mod generated;
