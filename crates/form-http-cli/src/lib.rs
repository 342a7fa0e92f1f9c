//! Command line front-end for the form-http request helpers

pub mod cli;
pub mod command;
pub mod config;
