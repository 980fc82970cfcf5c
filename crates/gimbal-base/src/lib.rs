use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Angular part of a camera orbit: azimuth (theta) and polar angle (phi),
/// both in radians. The zoom radius is deliberately not part of this type;
/// each viewer keeps its own radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitAngles {
    pub theta: f64,
    pub phi: f64,
}

impl OrbitAngles {
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }
}

impl fmt::Display for OrbitAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad {}rad", self.theta, self.phi)
    }
}

/// Zoom component of a camera orbit, in the widget's own radius grammar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RadiusSpec {
    Auto,
    Percent(f64),
    Meters(f64),
}

impl Default for RadiusSpec {
    fn default() -> Self {
        Self::Auto
    }
}

impl fmt::Display for RadiusSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Percent(value) => write!(f, "{value}%"),
            Self::Meters(value) => write!(f, "{value}m"),
        }
    }
}

impl FromStr for RadiusSpec {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if text == "auto" {
            return Ok(Self::Auto);
        }
        if let Some(number) = text.strip_suffix('%') {
            return Ok(Self::Percent(parse_number(number, text)?));
        }
        if let Some(number) = text.strip_suffix('m') {
            return Ok(Self::Meters(parse_number(number, text)?));
        }
        Err(Error::InvalidOrbitSpec(format!("bad radius field: {text}")))
    }
}

/// Full orbit state as exposed by one viewer widget. The angles are the only
/// part the synchronization layer ever copies between viewers; the radius
/// always stays with its owning viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraOrbit {
    pub angles: OrbitAngles,
    pub radius: RadiusSpec,
}

impl CameraOrbit {
    pub const fn new(angles: OrbitAngles, radius: RadiusSpec) -> Self {
        Self { angles, radius }
    }

    /// Same radius, new angles.
    pub fn with_angles(self, angles: OrbitAngles) -> Self {
        Self { angles, ..self }
    }

    /// Same angles, new radius.
    pub fn with_radius(self, radius: RadiusSpec) -> Self {
        Self { radius, ..self }
    }
}

impl fmt::Display for CameraOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.angles, self.radius)
    }
}

impl FromStr for CameraOrbit {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let &[theta, phi, radius] = fields.as_slice() else {
            return Err(Error::InvalidOrbitSpec(format!(
                "expected three fields, got {}: {text}",
                fields.len()
            )));
        };
        Ok(Self {
            angles: OrbitAngles::new(parse_radians(theta)?, parse_radians(phi)?),
            radius: radius.parse()?,
        })
    }
}

fn parse_radians(field: &str) -> Result<f64> {
    let Some(number) = field.strip_suffix("rad") else {
        return Err(Error::InvalidOrbitSpec(format!(
            "angle field without rad suffix: {field}"
        )));
    };
    parse_number(number, field)
}

fn parse_number(number: &str, field: &str) -> Result<f64> {
    number
        .trim()
        .parse()
        .map_err(|_| Error::InvalidOrbitSpec(format!("bad number in field: {field}")))
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid camera orbit spec: {0}")]
    InvalidOrbitSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_spec_round_trip() -> Result<()> {
        let orbit: CameraOrbit = "0.785rad 1.1rad 200%".parse()?;
        assert_eq!(orbit.angles, OrbitAngles::new(0.785, 1.1));
        assert_eq!(orbit.radius, RadiusSpec::Percent(200.0));
        assert_eq!(orbit.to_string(), "0.785rad 1.1rad 200%");
        Ok(())
    }

    #[test]
    fn radius_grammar_variants() -> Result<()> {
        assert_eq!("auto".parse::<RadiusSpec>()?, RadiusSpec::Auto);
        assert_eq!("1.5m".parse::<RadiusSpec>()?, RadiusSpec::Meters(1.5));
        let orbit: CameraOrbit = "0rad 0rad auto".parse()?;
        assert_eq!(orbit.radius, RadiusSpec::Auto);
        Ok(())
    }

    #[test]
    fn malformed_specs_are_rejected() {
        for text in ["", "1rad 2rad", "1deg 2rad auto", "1rad 2rad 3", "xrad 2rad auto"] {
            assert!(
                text.parse::<CameraOrbit>().is_err(),
                "accepted malformed spec: {text:?}"
            );
        }
    }

    #[test]
    fn angle_and_radius_swaps_keep_the_other_field() {
        let orbit = CameraOrbit::new(OrbitAngles::new(0.1, 0.2), RadiusSpec::Percent(160.0));
        let moved = orbit.with_angles(OrbitAngles::new(1.0, 2.0));
        assert_eq!(moved.radius, RadiusSpec::Percent(160.0));
        let zoomed = orbit.with_radius(RadiusSpec::Auto);
        assert_eq!(zoomed.angles, orbit.angles);
    }
}
