use std::{
    future::Future,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bridgemap_boundary as json;
use bridgemap_core::{
    gateways::reproject::Reprojector,
    map::MarkerLayer,
    popup::render_html,
    usecases::{plot_bridges, setup_map, PlotSummary},
};
use bridgemap_entities::planar::PlanarPoint;
use bridgemap_gateways::{proj4::Proj4Reprojector, source::CsvSource};
use bridgemap_page::{map_page, StaticMap};
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "bridgemap", version, about = "Put bridge records on a web map")]
struct Args {
    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Local file or http(s) URL of the bridge CSV
    #[arg(long, global = true, value_name = "PATH|URL")]
    csv: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write a self-contained HTML map page
    Render {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write all bridges as a GeoJSON feature collection
    Export {
        /// Defaults to stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Convert planar state plane coordinates (U.S. survey feet) to longitude and latitude
    Project {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::debug!("{args:?}");
    let Args {
        config,
        csv,
        command,
    } = args;

    match command {
        Command::Project { x, y } => {
            let reprojector = Proj4Reprojector::south_dakota_north()?;
            let (lng, lat) = project(&reprojector, x, y)?;
            println!("{lng} {lat}");
            Ok(())
        }
        Command::Render { output } => {
            let cfg = load_config(config, csv)?;
            let output = output.unwrap_or_else(|| cfg.page.output.clone());
            block_on(render(&cfg, &output))
        }
        Command::Export { output } => {
            let cfg = load_config(config, csv)?;
            let output = output.or_else(|| cfg.export.output.clone());
            block_on(export(&cfg, output.as_deref()))
        }
    }
}

fn load_config(file: Option<PathBuf>, csv: Option<String>) -> Result<Config> {
    let mut cfg = Config::try_load_from_file_or_default(file)?;
    if let Some(csv) = csv {
        cfg.override_csv_source(&csv);
    }
    Ok(cfg)
}

fn block_on<F>(task: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(task)
}

fn project<R: Reprojector>(reprojector: &R, x: f64, y: f64) -> Result<(f64, f64)> {
    let pt = PlanarPoint::new(x, y);
    anyhow::ensure!(pt.is_finite(), "Coordinates must be finite numbers");
    let (lat, lng) = reprojector
        .reproject(pt)
        .with_context(|| format!("Unable to reproject {pt}"))?
        .to_lat_lng_deg();
    Ok((lng, lat))
}

/// Runs the whole pipeline on a fresh map.
async fn load_map(csv: &CsvSource) -> Result<(StaticMap, MarkerLayer, PlotSummary)> {
    let mut map = StaticMap::new();
    setup_map(&mut map);

    let reprojector = Proj4Reprojector::south_dakota_north()?;
    let csv_text = csv
        .fetch_text()
        .await
        .with_context(|| format!("Unable to load bridges from {csv}"))?;

    let mut layer = MarkerLayer::new();
    let summary = plot_bridges(&mut map, &reprojector, &mut layer, &csv_text);
    if let Some(bbox) = layer.bbox() {
        log::info!("Bridges are located within {bbox}");
    }
    Ok((map, layer, summary))
}

async fn render(cfg: &Config, output: &Path) -> Result<()> {
    let (map, _, _) = load_map(&cfg.data.csv).await?;
    let html = map_page(&cfg.page.title, map.config())?.into_string();
    tokio::fs::write(output, html)
        .await
        .with_context(|| format!("Unable to write {}", output.display()))?;
    log::info!("Wrote map page to {}", output.display());
    Ok(())
}

fn feature_collection(layer: &MarkerLayer) -> json::FeatureCollection {
    layer
        .markers()
        .iter()
        .map(|placed| {
            let mut feature = json::Feature::from(&placed.marker);
            feature
                .properties
                .insert("popup".to_owned(), render_html(&placed.marker.popup).into());
            feature
        })
        .collect()
}

async fn export(cfg: &Config, output: Option<&Path>) -> Result<()> {
    let (_, layer, _) = load_map(&cfg.data.csv).await?;
    let collection = feature_collection(&layer);
    let geojson = if cfg.export.pretty {
        serde_json::to_string_pretty(&collection)?
    } else {
        serde_json::to_string(&collection)?
    };
    match output {
        Some(path) => {
            tokio::fs::write(path, geojson)
                .await
                .with_context(|| format!("Unable to write {}", path.display()))?;
            log::info!("Wrote {} features to {}", layer.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{geojson}")?;
        }
    }
    Ok(())
}
