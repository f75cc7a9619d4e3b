use contracts::dashboards::d400_profitability::pricing::{
    MarginBasis, DEFAULT_MARGIN_PERCENT, DEFAULT_MINIMUM_MARGIN_PERCENT,
};
use contracts::usecases::u501_curtain_quote::request::ResetPolicy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub quote: QuoteConfig,
    #[serde(default)]
    pub profitability: ProfitabilityConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct QuoteConfig {
    #[serde(default)]
    pub reset_after_submit: bool,
}

impl QuoteConfig {
    pub fn reset_policy(&self) -> ResetPolicy {
        ResetPolicy::from_flag(self.reset_after_submit)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProfitabilityConfig {
    #[serde(default = "default_margin_percent")]
    pub default_margin_percent: f64,
    #[serde(default = "default_minimum_margin_percent")]
    pub minimum_margin_percent: f64,
    #[serde(default)]
    pub margin_basis: MarginBasis,
}

impl Default for ProfitabilityConfig {
    fn default() -> Self {
        Self {
            default_margin_percent: DEFAULT_MARGIN_PERCENT,
            minimum_margin_percent: DEFAULT_MINIMUM_MARGIN_PERCENT,
            margin_basis: MarginBasis::default(),
        }
    }
}

fn default_margin_percent() -> f64 {
    DEFAULT_MARGIN_PERCENT
}

fn default_minimum_margin_percent() -> f64 {
    DEFAULT_MINIMUM_MARGIN_PERCENT
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"

[quote]
reset_after_submit = false

[profitability]
default_margin_percent = 30.0
minimum_margin_percent = 20.0
margin_basis = "on_cost"
"#;

/// Load configuration.
///
/// The bundle has no file system, so the embedded default is parsed and then
/// patched with `BACKEND_URL` / `QUOTE_RESET_AFTER_SUBMIT` captured at build time.
pub fn load_config() -> Result<Config, String> {
    let config: Config = toml::from_str(DEFAULT_CONFIG).map_err(|e| e.to_string())?;
    Ok(apply_overrides(
        config,
        option_env!("BACKEND_URL"),
        option_env!("QUOTE_RESET_AFTER_SUBMIT"),
    ))
}

fn apply_overrides(
    mut config: Config,
    backend_url: Option<&str>,
    reset_after_submit: Option<&str>,
) -> Config {
    if let Some(url) = backend_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(flag) = reset_after_submit {
        match flag.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => config.quote.reset_after_submit = true,
            "0" | "false" | "no" => config.quote.reset_after_submit = false,
            other => log::warn!("ignoring QUOTE_RESET_AFTER_SUBMIT={}", other),
        }
    }
    config
}

thread_local! {
    static CONFIG: Config = load_config().unwrap_or_else(|e| {
        log::error!("embedded config is invalid: {}", e);
        Config {
            api: ApiConfig { base_url: "http://localhost:8000".to_string() },
            quote: QuoteConfig::default(),
            profitability: ProfitabilityConfig::default(),
        }
    });
}

/// Active configuration, loaded once per thread
pub fn config() -> Config {
    CONFIG.with(|c| c.clone())
}
