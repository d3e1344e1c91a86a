use log::LevelFilter;
use scoreboard_api::client::Endpoints;
use std::time::Duration;

pub const DEFAULT_REFRESH_SECS: u64 = 30;
pub const MIN_REFRESH_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub endpoints: Endpoints,
    pub refresh_interval: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            endpoints: Endpoints::default(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
        }
    }
}

impl AppSettings {
    /// Read `SCOREBOARD_*` from the environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Endpoints::default();

        let endpoints = Endpoints {
            proxy_base: get("SCOREBOARD_API_BASE").unwrap_or(defaults.proxy_base),
            nhl_base: get("SCOREBOARD_NHL_API").unwrap_or(defaults.nhl_base),
            nba_data_base: get("SCOREBOARD_NBA_DATA").unwrap_or(defaults.nba_data_base),
            cors_proxy: get("SCOREBOARD_CORS_PROXY").unwrap_or(defaults.cors_proxy),
        };

        let refresh_secs = get("SCOREBOARD_REFRESH_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS)
            .max(MIN_REFRESH_SECS);

        let log_level = get("SCOREBOARD_LOG").and_then(|v| v.parse::<LevelFilter>().ok());

        Self {
            full_screen: false,
            log_level,
            endpoints,
            refresh_interval: Duration::from_secs(refresh_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppSettings {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let s = settings(&[]);
        assert_eq!(s.endpoints, Endpoints::default());
        assert_eq!(s.refresh_interval, Duration::from_secs(30));
        assert_eq!(s.log_level, None);
        assert!(!s.full_screen);
    }

    #[test]
    fn environment_overrides() {
        let s = settings(&[
            ("SCOREBOARD_API_BASE", "https://scores.example.com"),
            ("SCOREBOARD_CORS_PROXY", "https://cors.example.com/"),
            ("SCOREBOARD_REFRESH_SECS", "60"),
            ("SCOREBOARD_LOG", "debug"),
        ]);
        assert_eq!(s.endpoints.proxy_base, "https://scores.example.com");
        assert_eq!(s.endpoints.cors_proxy, "https://cors.example.com/");
        assert_eq!(s.endpoints.nhl_base, Endpoints::default().nhl_base);
        assert_eq!(s.refresh_interval, Duration::from_secs(60));
        assert_eq!(s.log_level, Some(LevelFilter::Debug));
    }

    #[test]
    fn refresh_interval_has_a_floor() {
        assert_eq!(settings(&[("SCOREBOARD_REFRESH_SECS", "1")]).refresh_interval, Duration::from_secs(5));
        assert_eq!(settings(&[("SCOREBOARD_REFRESH_SECS", "soon")]).refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn blank_values_are_ignored() {
        let s = settings(&[("SCOREBOARD_API_BASE", "  "), ("SCOREBOARD_LOG", "loud")]);
        assert_eq!(s.endpoints.proxy_base, Endpoints::default().proxy_base);
        assert_eq!(s.log_level, None);
    }
}
