//! Area-type profiles: harmonic tables and noise scales.
//!
//! Amplitudes, phases and noise scales are hand-calibrated constants
//! from Wang et al., "An Approach for Spatial-Temporal Traffic Modeling
//! in Mobile Cellular Networks" (ITC 2015). They are configuration, not
//! computed values.

/// Area type selecting a diurnal traffic profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AreaType {
    /// Park / recreational area.
    Park,
    /// University campus.
    Campus,
    /// Central business district.
    Cbd,
    /// Whole-area average profile.
    #[default]
    Average,
}

/// Harmonic description of one area type's mean diurnal curve.
#[derive(Debug, Clone, Copy)]
pub struct AreaProfile {
    /// Constant term followed by up to three harmonic amplitudes.
    pub amplitudes: [f64; 4],
    /// Phase per harmonic (radians).
    pub phases: [f64; 3],
    /// Underlying-normal noise scale, divided by 10 before sampling.
    pub noise_scale: f64,
}

impl AreaType {
    /// Parses an area tag. Unrecognized tags fall back to the average
    /// profile; matching is case-insensitive.
    pub fn parse(tag: &str) -> AreaType {
        match tag.to_lowercase().as_str() {
            "park" => AreaType::Park,
            "campus" => AreaType::Campus,
            "cbd" => AreaType::Cbd,
            _ => AreaType::Average,
        }
    }

    /// Returns the calibrated harmonic profile for this area type.
    pub fn profile(self) -> AreaProfile {
        match self {
            AreaType::Park => AreaProfile {
                amplitudes: [351.06, 222.7, 96.24, 0.0],
                phases: [3.11, 2.36, 0.0],
                noise_scale: 1.3,
            },
            AreaType::Campus => AreaProfile {
                amplitudes: [323.04, 143.8, 109.4, 38.43],
                phases: [2.98, 2.15, 1.0],
                noise_scale: 3.6,
            },
            AreaType::Cbd => AreaProfile {
                amplitudes: [75.72, 47.52, 16.71, 0.0],
                phases: [2.56, 1.45, 0.0],
                noise_scale: 2.8,
            },
            AreaType::Average => AreaProfile {
                amplitudes: [173.9, 89.83, 52.6, 16.68],
                phases: [3.08, 2.08, 1.13],
                noise_scale: 1.5,
            },
        }
    }
}
