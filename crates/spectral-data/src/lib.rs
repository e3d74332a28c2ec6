//! Proc macro that embeds a tristimulus reference table from a CSV file at
//! compile time: the CIE 1931 2-degree standard observer color matching
//! functions paired with the CIE D65 illuminant power at each wavelength.
//!
//! Tabular data follows the ASBC tristimulus MOA spectral shape (380-780 nm
//! in 5 nm steps), sourced from Bruce Lindbloom's tables
//! (<http://www.brucelindbloom.com>) and the Colour Science for Python package.

use proc_macro::TokenStream;
use std::path::PathBuf;
use syn::{LitStr, parse_macro_input};

/// Reads a tristimulus CSV and expands to an array literal of
/// `(f64, f64, f64, f64, f64)` tuples:
/// `(wavelength_nm, x_bar, y_bar, z_bar, illuminant_power)`.
///
/// The path is resolved relative to the calling crate's `CARGO_MANIFEST_DIR`.
/// Wavelengths must be strictly increasing and uniformly spaced; a violation
/// is a compile error, not a runtime condition.
///
/// ```ignore
/// const SAMPLES: [(f64, f64, f64, f64, f64); 81] =
///     spectral_data::tristimulus_table!("data/asbc_tristimulus_5nm.csv");
/// ```
#[proc_macro]
pub fn tristimulus_table(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    let path = resolve_path(&lit.value());

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));

    let mut entries = Vec::new();
    let mut wavelengths: Vec<f64> = Vec::new();
    for result in rdr.records() {
        let record =
            result.unwrap_or_else(|e| panic!("CSV parse error in {}: {e}", path.display()));
        assert_eq!(
            record.len(),
            5,
            "Expected 5 columns in {}, got {} at record {}",
            path.display(),
            record.len(),
            entries.len() + 1,
        );

        let parse = |idx: usize, name: &str| -> f64 {
            record[idx]
                .trim()
                .parse()
                .unwrap_or_else(|e| panic!("Invalid {name} '{}': {e}", &record[idx]))
        };

        let wl = parse(0, "wavelength");
        let x = parse(1, "x_bar");
        let y = parse(2, "y_bar");
        let z = parse(3, "z_bar");
        let power = parse(4, "illuminant_power");

        wavelengths.push(wl);
        entries.push(format!(
            "({wl}_f64, {x}_f64, {y}_f64, {z}_f64, {power}_f64)"
        ));
    }

    assert!(!entries.is_empty(), "CSV file {} is empty", path.display());

    if wavelengths.len() > 1 {
        let step = wavelengths[1] - wavelengths[0];
        assert!(
            step > 0.0,
            "Wavelengths in {} must be strictly increasing",
            path.display()
        );
        for w in wavelengths.windows(2) {
            assert!(
                (w[1] - w[0] - step).abs() < 1e-9,
                "Non-uniform wavelength spacing in {}: {} -> {}",
                path.display(),
                w[0],
                w[1],
            );
        }
    }

    let body = entries.join(",\n    ");
    let code = format!("[\n    {body}\n]");

    code.parse()
        .expect("failed to parse generated array literal")
}

/// Resolve a path relative to the calling crate's CARGO_MANIFEST_DIR.
fn resolve_path(relative: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let path = PathBuf::from(manifest_dir).join(relative);
    assert!(
        path.exists(),
        "Tristimulus data file not found at {}",
        path.display()
    );
    path
}
