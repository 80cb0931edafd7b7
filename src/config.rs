use std::time::Duration;

use crate::catalogue::CatalogueLocation;
use crate::error::ConfigError;
use crate::filter::{ListingQuery, StatusFilter};
use crate::showcase::DEFAULT_ROTATION_PERIOD;

/// Settings for one showcase session
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    pub catalogue: CatalogueLocation,
    pub query: ListingQuery,
    /// Property ids to toggle, in order
    pub reserve: Vec<String>,
    pub auto_release_expired: bool,
    pub rotation_period: Duration,
    pub showcase_ticks: usize,
    pub export_path: String,
    pub log_level: String,
}

/// Load configuration from the environment, reading `.env` first if present.
pub fn load_config() -> Result<ShowcaseConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build configuration from an arbitrary variable lookup so parsing can be
/// tested without touching the process environment.
pub fn build_config<F>(lookup: F) -> Result<ShowcaseConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let status = or_default("PLOT_STATUS", "all")
        .parse::<StatusFilter>()
        .map_err(|reason| invalid("PLOT_STATUS", reason))?;

    let auto_release_expired = match or_default("PLOT_AUTO_RELEASE_EXPIRED", "false")
        .trim()
        .to_ascii_lowercase()
        .as_str()
    {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        other => {
            return Err(invalid(
                "PLOT_AUTO_RELEASE_EXPIRED",
                format!("expected a boolean, got '{}'", other),
            ))
        }
    };

    let interval_secs = or_default("PLOT_SHOWCASE_INTERVAL_SECS", "")
        .trim()
        .to_string();
    let rotation_period = if interval_secs.is_empty() {
        DEFAULT_ROTATION_PERIOD
    } else {
        let secs = interval_secs
            .parse::<u64>()
            .map_err(|e| invalid("PLOT_SHOWCASE_INTERVAL_SECS", e.to_string()))?;
        if secs == 0 {
            return Err(invalid(
                "PLOT_SHOWCASE_INTERVAL_SECS",
                "must be greater than zero".to_string(),
            ));
        }
        Duration::from_secs(secs)
    };

    let showcase_ticks = or_default("PLOT_SHOWCASE_TICKS", "0")
        .trim()
        .parse::<usize>()
        .map_err(|e| invalid("PLOT_SHOWCASE_TICKS", e.to_string()))?;

    let reserve = or_default("PLOT_RESERVE", "")
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ShowcaseConfig {
        catalogue: CatalogueLocation::parse(&or_default("PLOT_CATALOGUE", "seed")),
        query: ListingQuery {
            search: or_default("PLOT_SEARCH", ""),
            status,
            size: or_default("PLOT_SIZE", ""),
        },
        reserve,
        auto_release_expired,
        rotation_period,
        showcase_ticks,
        export_path: or_default("PLOT_EXPORT_PATH", "catalogue_snapshot.json"),
        log_level: or_default("PLOT_LOG_LEVEL", "info"),
    })
}
