use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bridgemap_gateways::source::CsvSource;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "bridgemap.toml";

const ENV_NAME_CSV_SOURCE: &str = "BRIDGEMAP_CSV";

#[derive(Debug)]
pub struct Config {
    pub data: Data,
    pub page: Page,
    pub export: Export,
}

#[derive(Debug)]
pub struct Data {
    pub csv: CsvSource,
}

#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct Export {
    /// `None` means stdout
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => {
                    return Err(err).with_context(|| {
                        format!("Unable to read configuration file {}", file_path.display())
                    })
                }
            },
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(csv) = env::var(ENV_NAME_CSV_SOURCE) {
            cfg.override_csv_source(&csv);
        }
        Ok(cfg)
    }

    pub fn override_csv_source(&mut self, csv: &str) {
        let Ok(source) = csv.parse::<CsvSource>();
        log::debug!("Override CSV source with {source}");
        self.data.csv = source;
    }
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { data, page, export } = from;

        let raw::Data { csv } = data.unwrap_or_default();
        let Ok(csv) = csv.parse::<CsvSource>();
        let data = Data { csv };

        let raw::Page { title, output } = page.unwrap_or_default();
        let page = Page { title, output };

        let raw::Export { output, pretty } = export.unwrap_or_default();
        let export = Export { output, pretty };

        Self { data, page, export }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = Some(Path::new("this-file-does-not-exist.toml"));
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(cfg.page.output, PathBuf::from("index.html"));
        assert!(cfg.export.output.is_none());
        assert!(!cfg.export.pretty);
    }

    #[test]
    fn load_full_example() {
        let cfg = Config::try_load_from_file_or_default(Some(
            "src/config/bridgemap.full-example.toml",
        ))
        .unwrap();
        assert_eq!(cfg.page.output, PathBuf::from("public/index.html"));
        assert_eq!(
            cfg.export.output,
            Some(PathBuf::from("public/bridges.geojson"))
        );
    }

    #[test]
    fn csv_source_override_wins() {
        let mut cfg = Config::from(raw::Config::default());
        assert_eq!(cfg.data.csv, CsvSource::File("Bridges_Only.csv".into()));
        cfg.override_csv_source("https://example.org/b.csv");
        assert_eq!(
            cfg.data.csv,
            CsvSource::Url("https://example.org/b.csv".into())
        );
    }
}
