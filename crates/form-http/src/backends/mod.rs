//! Transport backends

pub mod reqwest_backend;

pub use reqwest_backend::ReqwestTransport;
