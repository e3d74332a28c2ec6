//! Colorimetric sRGB rendering of SRM/EBC beer color ratings.
//!
//! A rating and a transmission path length are turned into a display color by
//! simulating the transmission spectrum of beer and integrating it against
//! the CIE 1931 2-degree observer under the D65 illuminant. The algorithmic
//! background is discussed by A.J. deLange in Bamforth's Brewing Materials
//! and Processes (DOI: 10.1016/B978-0-12-799954-8.00011-3); computational
//! methods and tabular data follow Bruce Lindbloom's webpage
//! (<http://www.brucelindbloom.com>) and the Colour Science for Python package.
//!
//! ```
//! let rgb = brewtint::srm_to_srgb(10.0, brewtint::DEFAULT_PATH_CM);
//! assert_eq!(rgb.to_hex(), "#ba5b00");
//! ```

pub mod spectral;
pub mod srgb;
pub mod transmission;

pub use srgb::Rgb;

/// Default transmission path in cm, the typical beer glass diameter
/// specified by the BJCP color guide.
pub const DEFAULT_PATH_CM: f64 = 5.0;

/// Beer color rating scale.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Scale {
    /// Standard Reference Method (ASBC).
    #[default]
    Srm,
    /// European Brewery Convention.
    Ebc,
}

impl Scale {
    /// Dimensionless absorption coefficient at 430 nm for a rating on this
    /// scale. Total over all reals; negative ratings are not rejected.
    pub fn absorption_coefficient(self, rating: f64) -> f64 {
        match self {
            Scale::Srm => rating / 12.7,
            Scale::Ebc => rating / 25.0,
        }
    }

    /// Color for a rating on this scale through `path_cm` of beer.
    pub fn to_srgb(self, rating: f64, path_cm: f64) -> Rgb {
        absorbance_to_srgb(self.absorption_coefficient(rating), path_cm)
    }
}

/// Color of beer with absorption coefficient `a430` through `path_cm`
/// centimeters, in relative sRGB intensity.
pub fn absorbance_to_srgb(a430: f64, path_cm: f64) -> Rgb {
    let (x, y, z) = spectral::tristimulus(a430, path_cm);
    srgb::xyz_to_srgb(x, y, z)
}

/// Color for an SRM rating through `path_cm` centimeters of beer
/// (glass diameter). Use [`DEFAULT_PATH_CM`] for a typical sample glass.
pub fn srm_to_srgb(srm: f64, path_cm: f64) -> Rgb {
    Scale::Srm.to_srgb(srm, path_cm)
}

/// Color for an EBC rating through `path_cm` centimeters of beer
/// (glass diameter). Use [`DEFAULT_PATH_CM`] for a typical sample glass.
pub fn ebc_to_srgb(ebc: f64, path_cm: f64) -> Rgb {
    Scale::Ebc.to_srgb(ebc, path_cm)
}
