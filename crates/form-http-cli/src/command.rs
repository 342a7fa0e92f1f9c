//! Request execution for the CLI

use std::time::Duration;

use anyhow::{Context, Result};
use form_http::{into_value, Dispatcher, Method, ReqwestTransport, RequestOptions};
use serde_json::Value;
use tracing_subscriber::filter::Directive;
use url::Url;

use crate::cli::{Cli, RequestArgs};
use crate::config::Settings;

/// Exit status when the result mapping carries `error`
pub const EXIT_FAILED: i32 = 1;
/// Exit status when the command itself cannot be built
pub const EXIT_COMMAND_ERROR: i32 = 2;

/// Outcome of a CLI invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Uniform result mapping
    pub value: Value,
    /// Whether the mapping describes a failure
    pub failed: bool,
}

/// Load the settings `cli` points at and check the configured log level
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings =
        Settings::load(cli.config.as_deref()).context("Cannot load configuration")?;
    log_directive(&settings.log_level)?;
    Ok(settings)
}

/// Parse a configured log level into a tracing directive
pub fn log_directive(level: &str) -> Result<Directive> {
    level
        .parse()
        .with_context(|| format!("Invalid log level: {level}"))
}

/// Resolve `target` against `base` unless it is already absolute
pub fn resolve_url(base: Option<&str>, target: &str) -> Result<String> {
    if Url::parse(target).is_ok() {
        return Ok(target.to_string());
    }

    match base {
        Some(base) => {
            let base = Url::parse(base).with_context(|| format!("Invalid base URL: {base}"))?;
            let joined = base
                .join(target)
                .with_context(|| format!("Cannot resolve {target} against {base}"))?;
            Ok(joined.to_string())
        }
        None => Ok(target.to_string()),
    }
}

/// Build request options from settings and command line arguments
///
/// Configured headers come before command line headers.
pub fn build_options(
    settings: &Settings,
    headers: &[String],
    method: Method,
    args: RequestArgs,
) -> Result<RequestOptions> {
    let url = resolve_url(settings.base_url.as_deref(), &args.url)?;

    let options = RequestOptions::new(url)
        .method(method.as_str())
        .headers(settings.headers.iter().cloned())
        .headers(headers.iter().cloned());

    Ok(match args.raw {
        Some(raw) => options.raw_body(raw),
        None => options.params(args.data),
    })
}

/// Run the parsed command and shape its result
pub async fn execute_command(cli: Cli, settings: &Settings) -> Result<Outcome> {
    let mut transport = ReqwestTransport::new();
    if let Some(secs) = cli.timeout.or(settings.timeout_secs) {
        transport = transport.with_timeout(Duration::from_secs(secs));
    }
    let dispatcher = Dispatcher::with_transport(transport);

    let (method, args) = cli.command.into_parts();
    let options = build_options(settings, &cli.headers, method, args)?;
    tracing::info!("{} {}", method, options.url);

    let result = dispatcher.request(options).await;
    let failed = result.is_err();

    Ok(Outcome {
        value: into_value(result),
        failed,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(url: &str) -> RequestArgs {
        RequestArgs {
            url: url.to_string(),
            data: Vec::new(),
            raw: None,
        }
    }

    #[test]
    fn test_log_directive() {
        assert!(log_directive("warn").is_ok());
        assert!(log_directive("form_http=debug").is_ok());
        assert!(log_directive("bogus=level=x").is_err());
    }

    #[test]
    fn test_load_settings_missing_config() {
        let cli = Cli::try_parse_from([
            "form-http",
            "--config",
            "/nonexistent/form-http.toml",
            "get",
            "http://localhost/",
        ])
        .expect("Arguments should parse");

        let err = load_settings(&cli).expect_err("A missing config file is an error");
        assert!(format!("{err:#}").starts_with("Cannot load configuration"));
    }

    #[test]
    fn test_resolve_absolute_url_untouched() {
        assert_eq!(
            resolve_url(Some("http://base/"), "https://other.example.com/x")
                .expect("Absolute URL should resolve"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_resolve_relative_url() {
        assert_eq!(
            resolve_url(Some("https://api.example.com/v1/"), "items?page=2")
                .expect("Relative URL should resolve"),
            "https://api.example.com/v1/items?page=2"
        );
    }

    #[test]
    fn test_resolve_relative_without_base() {
        assert_eq!(
            resolve_url(None, "/items").expect("Relative URL is passed through"),
            "/items"
        );
    }

    #[test]
    fn test_resolve_invalid_base() {
        assert!(resolve_url(Some("not a url"), "/items").is_err());
    }

    #[test]
    fn test_build_options_header_order() {
        let settings = Settings {
            headers: vec!["X-Config: 1".to_string()],
            ..Settings::default()
        };
        let options = build_options(
            &settings,
            &["X-Cli: 2".to_string()],
            Method::Put,
            args("http://localhost/r"),
        )
        .expect("Options should build");

        assert_eq!(options.method, "PUT");
        assert_eq!(options.headers, vec!["X-Config: 1", "X-Cli: 2"]);
    }

    #[test]
    fn test_build_options_form_data() {
        let mut request_args = args("http://localhost/r");
        request_args.data = vec![("a".to_string(), "1".to_string())];

        let options = build_options(&Settings::default(), &[], Method::Post, request_args)
            .expect("Options should build");
        assert_eq!(options.data.encode(), "a=1");
    }

    #[test]
    fn test_build_options_raw_data() {
        let mut request_args = args("http://localhost/r");
        request_args.raw = Some("{\"a\":1}".to_string());

        let options = build_options(&Settings::default(), &[], Method::Delete, request_args)
            .expect("Options should build");
        assert_eq!(options.data, form_http::RequestData::Raw("{\"a\":1}".to_string()));
    }
}
