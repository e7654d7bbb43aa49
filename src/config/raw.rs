use std::path::PathBuf;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("bridgemap.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub data: Option<Data>,
    pub page: Option<Page>,
    pub export: Option<Export>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Data {
    pub csv: String,
}

impl Default for Data {
    fn default() -> Self {
        Config::default().data.expect("Data configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Page {
    pub title: String,
    pub output: PathBuf,
}

impl Default for Page {
    fn default() -> Self {
        Config::default().page.expect("Page configuration")
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Export {
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
}
