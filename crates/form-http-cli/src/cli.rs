//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};
use form_http::{parse_header_line, Method};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(
    name = "form-http",
    version = env!("CARGO_PKG_VERSION"),
    about = "Send form-urlencoded HTTP requests",
    long_about = "Send GET/POST/PUT/DELETE requests with form-urlencoded data and print the result as JSON"
)]
pub struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        env = "FORM_HTTP_CONFIG",
        help = "TOML config file (defaults to ~/.form-http/config.toml when present)",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Additional headers to include in the request (format: 'Name: Value')
    #[arg(
        short = 'H',
        long = "header",
        help = "Additional header, can be specified multiple times",
        value_parser = parse_header
    )]
    pub headers: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, help = "Abort the request after this many seconds")]
    pub timeout: Option<u64>,

    /// Request method and its arguments
    #[command(subcommand)]
    pub command: Commands,
}

/// Request subcommands, one per method
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a GET request, data goes into the query string
    Get(RequestArgs),
    /// Send a POST request, data goes into the body
    Post(RequestArgs),
    /// Send a PUT request, data goes into the body
    Put(RequestArgs),
    /// Send a DELETE request, data goes into the body
    Delete(RequestArgs),
}

impl Commands {
    /// Method and arguments of the subcommand
    pub fn into_parts(self) -> (Method, RequestArgs) {
        match self {
            Commands::Get(args) => (Method::Get, args),
            Commands::Post(args) => (Method::Post, args),
            Commands::Put(args) => (Method::Put, args),
            Commands::Delete(args) => (Method::Delete, args),
        }
    }
}

/// Arguments shared by every request subcommand
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Target URL, resolved against `base_url` from the config when relative
    #[arg(value_hint = ValueHint::Url)]
    pub url: String,

    /// Form field (format: key=value)
    #[arg(
        short,
        long = "data",
        help = "Form field as key=value, can be specified multiple times",
        value_parser = parse_pair,
        conflicts_with = "raw"
    )]
    pub data: Vec<(String, String)>,

    /// Raw body or query string sent as-is
    #[arg(long, help = "Send this string untouched instead of form fields")]
    pub raw: Option<String>,
}

/// Validate a header argument and normalize it to `Name: Value`
fn parse_header(s: &str) -> Result<String, String> {
    let (name, value) = parse_header_line(s)?;
    Ok(format!("{name}: {value}"))
}

/// Parse a form field argument in the format `key=value`
fn parse_pair(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err("Data must be in format 'key=value'".to_string());
    };

    if key.is_empty() {
        return Err("Data key cannot be empty".to_string());
    }

    Ok((key.to_string(), value.to_string()))
}
