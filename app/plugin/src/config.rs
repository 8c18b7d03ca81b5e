//! Settings resolution for the tax plugin.
//!
//! Pure transformation over the host's key→string property map. Absence
//! is structural: a provider candidate is produced only when every
//! required field is present and non-empty, never as a partially-filled
//! record. Whether anything usable was configured is the selector's call,
//! not the resolver's.

use std::collections::HashMap;
use tax::NetworkOptions;

/// Recognized configuration keys.
pub mod keys {
    /// HTTP proxy host shared by both providers.
    pub const PROXY_HOST: &str = "proxyHost";
    /// HTTP proxy port shared by both providers.
    pub const PROXY_PORT: &str = "proxyPort";
    /// TLS strictness toggle; absent means verification stays on.
    pub const STRICT_SSL: &str = "strictSSL";
    /// AvaTax base endpoint.
    pub const URL: &str = "url";
    /// AvaTax account number.
    pub const ACCOUNT_NUMBER: &str = "accountNumber";
    /// AvaTax license key.
    pub const LICENSE_KEY: &str = "licenseKey";
    /// Optional AvaTax company code.
    pub const COMPANY_CODE: &str = "companyCode";
    /// TaxRates base endpoint.
    pub const TAX_RATES_URL: &str = "taxratesUrl";
    /// TaxRates API key.
    pub const TAX_RATES_API_KEY: &str = "taxratesApiKey";
}

/// Errors surfaced while resolving provider configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither provider variant is fully configured.
    Incomplete,
    /// A recognized setting holds an unparsable value.
    InvalidSetting {
        /// The offending key.
        key: &'static str,
        /// The raw value as provided by the host.
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete => write!(f, "no tax provider is fully configured"),
            Self::InvalidSetting { key, value } => {
                write!(f, "invalid value {value:?} for setting {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete configuration for the AvaTax provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvaTaxConfig {
    /// Base API endpoint.
    pub url: String,
    /// Account number half of the basic credentials.
    pub account_number: String,
    /// License key half of the basic credentials.
    pub license_key: String,
    /// Optional company code scoped onto every transaction.
    pub company_code: Option<String>,
}

/// Complete configuration for the TaxRates provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxRatesConfig {
    /// Base API endpoint.
    pub url: String,
    /// Bearer API key.
    pub api_key: String,
}

/// The provider configuration chosen at startup.
///
/// A tagged union so "at most one active provider" is enforced by the
/// type, not by nullable-field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    /// Full transaction-based provider.
    AvaTax(AvaTaxConfig),
    /// Rates-only fallback provider.
    TaxRates(TaxRatesConfig),
}

impl ProviderConfig {
    /// Human-readable provider kind string for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AvaTax(_) => "avatax",
            Self::TaxRates(_) => "taxrates",
        }
    }
}

/// Settings resolved into network options plus provider candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Shared proxy and TLS options.
    pub network: NetworkOptions,
    /// AvaTax candidate, present only when fully configured.
    pub avatax: Option<AvaTaxConfig>,
    /// TaxRates candidate, present only when fully configured.
    pub taxrates: Option<TaxRatesConfig>,
}

impl ResolvedConfig {
    /// Whether both candidates are complete. Resolved deterministically
    /// by priority, but worth an operator warning.
    pub fn is_ambiguous(&self) -> bool {
        self.avatax.is_some() && self.taxrates.is_some()
    }

    /// Pick the active provider in fixed priority order: AvaTax first,
    /// TaxRates as the fallback. Neither complete is a fatal
    /// configuration error.
    pub fn select(self) -> Result<ProviderConfig, ConfigError> {
        if let Some(avatax) = self.avatax {
            Ok(ProviderConfig::AvaTax(avatax))
        } else if let Some(taxrates) = self.taxrates {
            Ok(ProviderConfig::TaxRates(taxrates))
        } else {
            Err(ConfigError::Incomplete)
        }
    }
}

/// Resolve the host's property map into candidate configurations.
///
/// No I/O; empty strings count as absent everywhere.
pub fn resolve(settings: &HashMap<String, String>) -> Result<ResolvedConfig, ConfigError> {
    let proxy_port = match non_empty(settings, keys::PROXY_PORT) {
        Some(raw) => Some(raw.parse::<u16>().map_err(|_| ConfigError::InvalidSetting {
            key: keys::PROXY_PORT,
            value: raw.to_owned(),
        })?),
        None => None,
    };
    let strict_tls =
        non_empty(settings, keys::STRICT_SSL).is_none_or(|raw| raw.eq_ignore_ascii_case("true"));
    let network = NetworkOptions {
        proxy_host: non_empty(settings, keys::PROXY_HOST).map(str::to_owned),
        proxy_port,
        strict_tls,
    };

    let avatax = match (
        non_empty(settings, keys::URL),
        non_empty(settings, keys::ACCOUNT_NUMBER),
        non_empty(settings, keys::LICENSE_KEY),
    ) {
        (Some(url), Some(account_number), Some(license_key)) => Some(AvaTaxConfig {
            url: url.to_owned(),
            account_number: account_number.to_owned(),
            license_key: license_key.to_owned(),
            company_code: non_empty(settings, keys::COMPANY_CODE).map(str::to_owned),
        }),
        _ => None,
    };

    let taxrates = match (
        non_empty(settings, keys::TAX_RATES_URL),
        non_empty(settings, keys::TAX_RATES_API_KEY),
    ) {
        (Some(url), Some(api_key)) => Some(TaxRatesConfig {
            url: url.to_owned(),
            api_key: api_key.to_owned(),
        }),
        _ => None,
    };

    Ok(ResolvedConfig {
        network,
        avatax,
        taxrates,
    })
}

fn non_empty<'a>(settings: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    settings
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
