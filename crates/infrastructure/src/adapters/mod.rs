//! Adapters implementing the catalog ports.

mod reqwest_client;

pub use reqwest_client::ReqwestProductApi;
