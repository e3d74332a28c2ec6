use std::str::FromStr;

use anyhow::{Context, Result};
use brewtint::{DEFAULT_PATH_CM, Rgb, Scale};

const USAGE: &str = "\
Usage: brewtint [srm|ebc] [max_rating] [path_cm] [--json]

Prints the color of every rating from 1 to max_rating (default 50) on the
chosen scale (default srm), through path_cm of beer (default 5.0, a typical
glass diameter). Default output is CSV; --json emits a palette array.";

#[derive(serde::Serialize)]
struct PaletteEntry {
    scale: String,
    rating: u32,
    path_cm: f64,
    hex: String,
    rgb: Rgb,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let scale = match positional.first() {
        Some(s) => Scale::from_str(s)
            .map_err(|_| anyhow::anyhow!("unknown scale '{s}', expected srm or ebc"))?,
        None => Scale::default(),
    };
    let max_rating: u32 = positional
        .get(1)
        .map(|s| s.parse())
        .transpose()
        .context("max rating must be a whole number")?
        .unwrap_or(50);
    let path_cm: f64 = positional
        .get(2)
        .map(|s| s.parse())
        .transpose()
        .context("path length must be a number of centimeters")?
        .unwrap_or(DEFAULT_PATH_CM);

    tracing::debug!(%scale, max_rating, path_cm, "rendering palette");

    if json {
        let entries: Vec<PaletteEntry> = (1..=max_rating)
            .map(|rating| {
                let rgb = scale.to_srgb(rating as f64, path_cm);
                PaletteEntry {
                    scale: scale.to_string(),
                    rating,
                    path_cm,
                    hex: rgb.to_hex(),
                    rgb,
                }
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{scale},sRGB");
        for rating in 1..=max_rating {
            let rgb = scale.to_srgb(rating as f64, path_cm);
            println!("{rating},{}", rgb.to_hex());
        }
    }

    Ok(())
}
