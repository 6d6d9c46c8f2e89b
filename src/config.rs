use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const REGION_LAYOUT_KEY: &str = "Region Layout";
const TIME_LIMIT_KEY: &str = "Time Limit";
const REFRESH_RATE_KEY: &str = "Refresh Rate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Layout file, relative to the config file.
    pub region_layout: String,
    #[serde(default)]
    pub time_limit: u64,
    #[serde(default)]
    pub refresh_rate: u64,
}

impl Config {
    /// Parses the `Key:value` line format. Unknown keys are ignored; missing
    /// numeric keys default to zero.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let mut region_layout = None;
        let mut time_limit = 0;
        let mut refresh_rate = 0;

        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                REGION_LAYOUT_KEY => region_layout = Some(value.to_string()),
                TIME_LIMIT_KEY => time_limit = parse_u64(TIME_LIMIT_KEY, value)?,
                REFRESH_RATE_KEY => refresh_rate = parse_u64(REFRESH_RATE_KEY, value)?,
                _ => {}
            }
        }

        let region_layout = region_layout
            .filter(|path| !path.is_empty())
            .ok_or(ConfigError::Missing(REGION_LAYOUT_KEY))?;
        Ok(Self {
            region_layout,
            time_limit,
            refresh_rate,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_rate == 0 {
            return Err(ConfigError::ZeroRefreshRate);
        }
        Ok(())
    }
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_format() {
        let config =
            Config::from_text("Region Layout:region1.csv\r\nTime Limit:20\nRefresh Rate: 1\n")
                .unwrap();
        assert_eq!(
            config,
            Config {
                region_layout: "region1.csv".into(),
                time_limit: 20,
                refresh_rate: 1,
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_ignored_and_numbers_default() {
        let config = Config::from_text("Mayor:Bob\nRegion Layout:map.csv\n").unwrap();
        assert_eq!(config.time_limit, 0);
        assert_eq!(config.refresh_rate, 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRefreshRate));
    }

    #[test]
    fn missing_layout_is_an_error() {
        assert_eq!(
            Config::from_text("Time Limit:5\n"),
            Err(ConfigError::Missing("Region Layout"))
        );
    }

    #[test]
    fn bad_number_is_an_error() {
        assert_eq!(
            Config::from_text("Region Layout:a.csv\nTime Limit:soon\n"),
            Err(ConfigError::InvalidNumber {
                key: "Time Limit",
                value: "soon".into()
            })
        );
    }

    #[test]
    fn yaml_form_deserializes() {
        let config: Config =
            serde_yaml::from_str("region_layout: town.csv\ntime_limit: 8\nrefresh_rate: 2\n")
                .unwrap();
        assert_eq!(config.region_layout, "town.csv");
        assert_eq!(config.time_limit, 8);
        assert_eq!(config.refresh_rate, 2);
    }
}
