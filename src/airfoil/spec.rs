use crate::errors::ProfileError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub const DEFAULT_CHORD_LENGTH: f64 = 1000.0;
pub const DEFAULT_INCREMENT: f64 = 1.0;

/// Upper bound on the number of chordwise steps a single profile may be sampled with
pub const MAX_STATIONS: f64 = 10_000_000.0;

/// A validated NACA 4-digit designation of the form MPXX, where M is the maximum camber in percent
/// of the chord, P is the location of the maximum camber in tenths of the chord, and XX is the
/// maximum thickness in percent of the chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NacaNumber {
    digits: [u8; 4],
}

impl NacaNumber {
    pub fn parse(text: &str) -> Result<Self, ProfileError> {
        if text.chars().count() != 4 {
            return Err(ProfileError::UnsupportedFormat(text.to_string()));
        }

        let mut digits = [0u8; 4];
        for (d, c) in digits.iter_mut().zip(text.chars()) {
            *d = c
                .to_digit(10)
                .ok_or_else(|| ProfileError::InvalidDigits(text.to_string()))? as u8;
        }

        Ok(NacaNumber { digits })
    }

    /// The maximum camber as a fraction of the chord, so 0.02 for a 2412
    pub fn max_camber(&self) -> f64 {
        self.digits[0] as f64 / 100.0
    }

    /// The location of the maximum camber as a fraction of the chord, so 0.4 for a 2412
    pub fn camber_position(&self) -> f64 {
        self.digits[1] as f64 / 10.0
    }

    /// The maximum thickness as a fraction of the chord, so 0.12 for a 2412
    pub fn relative_thickness(&self) -> f64 {
        (self.digits[2] * 10 + self.digits[3]) as f64 / 100.0
    }
}

impl Display for NacaNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for d in self.digits.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// The raw parameter set describing the airfoil to generate. This is what a caller (a form, a CLI,
/// a JSON file) hands to the generator; nothing here has been checked yet. Use `validate` to turn
/// it into `DerivedParameters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirfoilSpec {
    pub naca_number: Option<NacaInput>,
    pub thickness: Option<f64>,
    pub chord_length: f64,
    pub increment: f64,
    pub plot_to_length: Option<f64>,
    pub is_sharp: bool,
}

impl Default for AirfoilSpec {
    fn default() -> Self {
        AirfoilSpec {
            naca_number: None,
            thickness: None,
            chord_length: DEFAULT_CHORD_LENGTH,
            increment: DEFAULT_INCREMENT,
            plot_to_length: None,
            is_sharp: true,
        }
    }
}

/// The NACA number as it arrived from the caller. Anything other than text (a bare JSON number,
/// for instance) is kept as-is so validation can report it as a type mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NacaInput {
    Text(String),
    Other(Value),
}

impl From<&str> for NacaInput {
    fn from(text: &str) -> Self {
        NacaInput::Text(text.to_string())
    }
}

impl AirfoilSpec {
    pub fn from_naca(naca: &str) -> Self {
        AirfoilSpec {
            naca_number: Some(naca.into()),
            ..Default::default()
        }
    }

    pub fn from_thickness(thickness: f64) -> Self {
        AirfoilSpec {
            thickness: Some(thickness),
            ..Default::default()
        }
    }

    pub fn with_chord_length(mut self, chord_length: f64) -> Self {
        self.chord_length = chord_length;
        self
    }

    pub fn with_increment(mut self, increment: f64) -> Self {
        self.increment = increment;
        self
    }

    pub fn with_plot_to_length(mut self, plot_to_length: Option<f64>) -> Self {
        self.plot_to_length = plot_to_length;
        self
    }

    pub fn with_sharp(mut self, is_sharp: bool) -> Self {
        self.is_sharp = is_sharp;
        self
    }

    /// Parses a spec from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// An empty string counts as not supplied
    fn active_naca(&self) -> Option<&NacaInput> {
        match &self.naca_number {
            Some(NacaInput::Text(s)) if s.is_empty() => None,
            Some(NacaInput::Other(Value::Null)) => None,
            other => other.as_ref(),
        }
    }

    /// A zero thickness counts as not supplied
    fn active_thickness(&self) -> Option<f64> {
        self.thickness.filter(|t| *t != 0.0)
    }

    /// Checks the parameters and computes the values the generator works from. All input errors
    /// are raised here, before any geometry exists.
    pub fn validate(&self) -> Result<DerivedParameters, ProfileError> {
        if let (Some(naca), Some(thickness)) = (self.active_naca(), self.active_thickness()) {
            let naca = match naca {
                NacaInput::Text(s) => s.clone(),
                NacaInput::Other(v) => v.to_string(),
            };
            return Err(ProfileError::ConflictingInput { naca, thickness });
        }

        let designation = match self.active_naca() {
            Some(NacaInput::Text(text)) => Designation::Naca(NacaNumber::parse(text)?),
            Some(NacaInput::Other(v)) => return Err(ProfileError::TypeMismatch(v.to_string())),
            None => Designation::Thickness(self.thickness.unwrap_or(0.0)),
        };

        let chord_length = self.chord_length;
        if !chord_length.is_finite() || chord_length <= 0.0 {
            return Err(ProfileError::invalid(
                "chord_length",
                format!("must be positive, got {}", chord_length),
            ));
        }

        if !self.increment.is_finite() || self.increment <= 0.0 {
            return Err(ProfileError::invalid(
                "increment",
                format!("must be positive, got {}", self.increment),
            ));
        }

        if self.increment > chord_length {
            return Err(ProfileError::invalid(
                "increment",
                format!("{} exceeds the chord length {}", self.increment, chord_length),
            ));
        }

        // Anything past the chord is clamped to it below
        if let Some(p) = self.plot_to_length {
            if !p.is_finite() || p <= 0.0 {
                return Err(ProfileError::invalid(
                    "plot_to_length",
                    format!("must be positive, got {}", p),
                ));
            }
        }

        let (max_camber, camber_position, relative_thickness) = match designation {
            Designation::Naca(n) => {
                if n.max_camber() > 0.0 && n.camber_position() == 0.0 {
                    return Err(ProfileError::UndefinedCamberPosition(n.to_string()));
                }
                (n.max_camber(), n.camber_position(), n.relative_thickness())
            }
            Designation::Thickness(t) => {
                if !t.is_finite() || t < 0.0 {
                    return Err(ProfileError::invalid(
                        "thickness",
                        format!("must be non-negative, got {}", t),
                    ));
                }
                (0.0, 0.0, t / chord_length)
            }
        };

        let calculate_to = self
            .plot_to_length
            .unwrap_or(chord_length)
            .min(chord_length);

        let steps = calculate_to / self.increment;
        if !steps.is_finite() || steps > MAX_STATIONS {
            return Err(ProfileError::invalid(
                "increment",
                format!(
                    "{} is too fine for a length of {}, at most {} steps are sampled",
                    self.increment, calculate_to, MAX_STATIONS
                ),
            ));
        }

        Ok(DerivedParameters {
            designation,
            max_camber,
            camber_position,
            relative_thickness,
            chord_length,
            increment: self.increment,
            calculate_to,
            is_sharp: self.is_sharp,
        })
    }
}

/// Which of the two mutually exclusive inputs produced the airfoil
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Designation {
    Naca(NacaNumber),

    /// A symmetric airfoil given by its absolute maximum thickness
    Thickness(f64),
}

impl Display for Designation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Designation::Naca(n) => write!(f, "NACA {}", n),
            Designation::Thickness(t) => write!(f, "Thickness {}", t),
        }
    }
}

/// Values computed once from a validated `AirfoilSpec`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedParameters {
    pub designation: Designation,
    pub max_camber: f64,
    pub camber_position: f64,
    pub relative_thickness: f64,
    pub chord_length: f64,
    pub increment: f64,
    pub calculate_to: f64,
    pub is_sharp: bool,
}

impl DerivedParameters {
    /// The thickness path is always symmetric, the NACA path is symmetric when M is zero
    pub fn is_symmetric(&self) -> bool {
        match self.designation {
            Designation::Thickness(_) => true,
            Designation::Naca(_) => self.max_camber == 0.0,
        }
    }
}
