use anyhow::{anyhow, Context as _, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use tagmap_core::{cloud::Palette, entities::color::Rgb, layout::CloudLayout};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tagmap.toml";

const ENV_NAME_DATA_DIR: &str = "TAGMAP_DATA_DIR";

pub struct Config {
    pub source: Source,
    pub cloud: Cloud,
    pub palette: Palette,
    pub report: Report,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(data_dir) = env::var(ENV_NAME_DATA_DIR) {
            cfg.source.data_dir = data_dir.into();
        }
        Ok(cfg)
    }
}

pub struct Source {
    /// File system directory with one JSON file per course.
    pub data_dir: PathBuf,
}

pub struct Cloud {
    /// Outer width of the SVG.
    pub width: f64,
    /// Outer height of the SVG.
    pub height: f64,
    pub margin: f64,
    pub padding: f64,
    pub font_scale: f64,
    pub font_family: String,
}

impl Cloud {
    /// The layout canvas inside of the margins.
    pub fn layout(&self) -> CloudLayout {
        CloudLayout::new(
            self.width - 2.0 * self.margin,
            self.height - 2.0 * self.margin,
        )
        .with_padding(self.padding)
        .with_font_scale(self.font_scale)
    }
}

pub struct Report {
    pub output: PathBuf,
    /// Duration of the hover color transition.
    pub transition: Duration,
}

fn parse_color(name: &str, value: &str) -> Result<Rgb> {
    value
        .parse()
        .with_context(|| format!("Invalid color '{value}' for '{name}'"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            source,
            cloud,
            colors,
            report,
        } = from;

        let raw::Source { data_dir } = source.unwrap_or_default();
        let source = Source { data_dir };

        let raw::Cloud {
            width,
            height,
            margin,
            padding,
            font_scale,
            font_family,
        } = cloud.unwrap_or_default();

        if margin < 0.0 || padding < 0.0 {
            return Err(anyhow!("Margin and padding must not be negative"));
        }
        if width <= 2.0 * margin || height <= 2.0 * margin {
            return Err(anyhow!(
                "The cloud ({width}x{height}) leaves no room inside of its margin ({margin})"
            ));
        }
        if font_scale.is_nan() || font_scale <= 0.0 {
            return Err(anyhow!("The font scale must be positive"));
        }
        let cloud = Cloud {
            width,
            height,
            margin,
            padding,
            font_scale,
            font_family,
        };

        let raw::Colors {
            coverage_low,
            coverage_high,
            covered,
            uncovered,
            highlight,
        } = colors.unwrap_or_default();

        let palette = Palette {
            coverage_low: parse_color("coverage-low", &coverage_low)?,
            coverage_high: parse_color("coverage-high", &coverage_high)?,
            covered: parse_color("covered", &covered)?,
            uncovered: parse_color("uncovered", &uncovered)?,
            highlight: parse_color("highlight", &highlight)?,
        };

        let raw::Report { output, transition } = report.unwrap_or_default();
        let report = Report { output, transition };

        Ok(Self {
            source,
            cloud,
            palette,
            report,
        })
    }
}
