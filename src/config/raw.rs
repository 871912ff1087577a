use duration_str::deserialize_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("tagmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub source: Option<Source>,
    pub cloud: Option<Cloud>,
    pub colors: Option<Colors>,
    pub report: Option<Report>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Source {
    pub data_dir: PathBuf,
}

impl Default for Source {
    fn default() -> Self {
        Config::default().source.expect("Source configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cloud {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub padding: f64,
    pub font_scale: f64,
    pub font_family: String,
}

impl Default for Cloud {
    fn default() -> Self {
        Config::default().cloud.expect("Cloud configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Colors {
    pub coverage_low: String,
    pub coverage_high: String,
    pub covered: String,
    pub uncovered: String,
    pub highlight: String,
}

impl Default for Colors {
    fn default() -> Self {
        Config::default().colors.expect("Colors configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    pub output: PathBuf,
    #[serde(deserialize_with = "deserialize_duration")]
    pub transition: Duration,
}

impl Default for Report {
    fn default() -> Self {
        Config::default().report.expect("Report configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(cfg.source.is_some());
        assert!(cfg.cloud.is_some());
        assert!(cfg.colors.is_some());
        assert!(cfg.report.is_some());
    }

    #[test]
    fn default_report_config() {
        let cfg = Report::default();
        assert_eq!(cfg.transition, Duration::from_millis(150));
        assert_eq!(cfg.output, PathBuf::from("tagmap.html"));
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r##"
            [colors]
            coverage-low = "#000"
            coverage-high = "#fff"
            covered = "#0f0"
            uncovered = "#f00"
            highlight = "orange"
            "##,
        )
        .unwrap();
        assert!(cfg.cloud.is_none());
        assert_eq!(cfg.colors.unwrap().highlight, "orange");
    }
}
