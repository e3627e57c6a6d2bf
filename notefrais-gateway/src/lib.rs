//! notefrais-gateway: implementations of the remote bills service contract

pub mod http;
pub mod memory;

pub use http::HttpBillsGateway;
pub use memory::{MemoryBillsGateway, fixture_bills};
