//! demos/dashboard_data.rs
//!
//! Builds the client against the two CSV snapshots and prints the data each
//! dashboard view consumes, as JSON.
//!
//! To run:
//! cargo run --example dashboard_data -- GlobalTemperatures.csv GlobalLandTemperaturesByCountry.csv

use climatedash::{ClimateDash, ReferenceBaseline, Season, TemperatureKind};
use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let global_data: PathBuf = args
        .next()
        .unwrap_or_else(|| "GlobalTemperatures.csv".to_string())
        .into();
    let country_data: PathBuf = args
        .next()
        .unwrap_or_else(|| "GlobalLandTemperaturesByCountry.csv".to_string())
        .into();

    let dash = ClimateDash::builder()
        .global_data(global_data)
        .country_data(country_data)
        .build()?;

    println!("Global year bounds: {:?}", dash.global_year_bounds()?);

    let land_ocean = dash
        .global_series()
        .start_year(1900)
        .end_year(2015)
        .kind(TemperatureKind::Both)
        .call()?;
    println!("Global series: {}", serde_json::to_string(&land_ocean)?);

    let seasons = dash
        .seasonal_series()
        .start_year(1900)
        .end_year(2015)
        .seasons(vec![Season::Winter, Season::Summer])
        .call()?;
    println!("Seasonal series: {}", serde_json::to_string(&seasons)?);

    let heatmap = dash.month_matrix().start_year(1900).end_year(2015).call()?;
    println!("Heatmap grid: {}", serde_json::to_string(&heatmap)?);

    let map = dash.country_temperature_map().year(2000).call()?;
    println!("Choropleth: {}", serde_json::to_string(&map)?);

    let anomalies = dash
        .anomaly_map()
        .year(2000)
        .baseline(ReferenceBaseline::Wmo1961To1990)
        .call()?;
    println!("Anomaly choropleth: {}", serde_json::to_string(&anomalies)?);

    if let Some(kpi) = dash.global_average_kpi(2000)? {
        println!("{}: {}", kpi.label, kpi.value);
    }
    if let Some(kpi) = dash.global_anomaly_kpi(2000, ReferenceBaseline::Wmo1961To1990)? {
        println!("{}: {}", kpi.label, kpi.value);
    }

    Ok(())
}
