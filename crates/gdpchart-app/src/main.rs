// File: crates/gdpchart-app/src/main.rs
// Summary: Fetches the GDP JSON once, drives the chart state machine, writes an SVG frame.

use anyhow::{Context, Result};
use gdpchart_core::view::{ChartState, Event};
use gdpchart_core::{Scene, Series, Theme};
use tracing::{error, info};

const DATA_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/GDP-data.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Output path from CLI or the default under target/.
    let out = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/out/gdp.svg".to_string());

    let mut state = ChartState::new();

    // One-shot fetch; no retry. Failure becomes a first-class Failed frame
    // instead of hanging on the loading placeholder.
    match fetch_series(DATA_URL).await {
        Ok(series) => {
            info!(points = series.len(), "loaded GDP dataset");
            state.apply(Event::DataLoaded(series));
        }
        Err(err) => {
            error!("fetch failed: {err:#}");
            state.apply(Event::FetchFailed(err.to_string()));
        }
    }

    let scene = Scene::build(&state, &Theme::default());
    gdpchart_svg::write_svg(&scene, &out).with_context(|| format!("rendering {out}"))?;
    info!(primitives = scene.primitives.len(), "wrote {out}");
    Ok(())
}

async fn fetch_series(url: &str) -> Result<Series> {
    let body = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("GET {url}"))?
        .text()
        .await
        .context("reading response body")?;
    Series::from_json(&body).context("decoding GDP payload")
}
