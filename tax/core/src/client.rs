//! Shared HTTP client and network options.

use anyhow::Result;
use std::ops::Deref;

/// Network options shared by both provider configurations.
///
/// Resolved once at bootstrap and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkOptions {
    /// Optional HTTP proxy host.
    pub proxy_host: Option<String>,
    /// Optional HTTP proxy port. `None` when unset, never zero.
    pub proxy_port: Option<u16>,
    /// Whether TLS certificate verification is enforced.
    pub strict_tls: bool,
}

impl Default for NetworkOptions {
    fn default() -> Self {
        // TLS verification stays on unless explicitly disabled.
        Self {
            proxy_host: None,
            proxy_port: None,
            strict_tls: true,
        }
    }
}

/// Thin clonable wrapper over `reqwest::Client`.
///
/// Holds transport configuration only — no per-request or per-invoice
/// state — so a single instance is shared across concurrent calls.
#[derive(Debug, Clone)]
pub struct Client(reqwest::Client);

impl Client {
    /// Create a client with default transport settings.
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }

    /// Build a client from the resolved network options.
    ///
    /// Pure in-memory construction; no network I/O happens here.
    pub fn build(options: &NetworkOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(host) = &options.proxy_host {
            let proxy = match options.proxy_port {
                Some(port) => format!("http://{host}:{port}"),
                None => format!("http://{host}"),
            };
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        if !options.strict_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(Self(builder.build()?))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Client {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
