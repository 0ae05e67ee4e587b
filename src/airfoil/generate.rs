use crate::airfoil::spec::{AirfoilSpec, DerivedParameters};
use crate::airfoil::{AirfoilProfile, ProfileSample};
use crate::algorithms::station_positions;
use crate::errors::ProfileError;

/// Coefficients of the NACA 4-digit thickness polynomial for the sqrt(r), r, r^2 and r^3 terms
const THICKNESS_COEFFICIENTS: [f64; 4] = [0.2969, -0.1260, -0.3516, 0.2843];

/// The r^4 coefficient which closes the trailing edge to zero thickness
const SHARP_TE_COEFFICIENT: f64 = -0.1036;

/// The classic r^4 coefficient, which leaves a finite trailing edge thickness
const BLUNT_TE_COEFFICIENT: f64 = -0.1015;

/// Height and slope of the mean camber line at a station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberPoint {
    pub y: f64,
    pub slope: f64,
}

/// An AirfoilGenerator is an entity which can generate the height and slope of the mean camber
/// line and the half-thickness of the airfoil at an absolute chordwise position. This provides
/// the information necessary to compute the airfoil surfaces, which are offset from the camber
/// line perpendicular to it.
pub trait AirfoilGenerator {
    /// Return the camber line height and slope at chordwise position x
    fn camber_line(&self, x: f64) -> CamberPoint;

    /// Return the thickness of the airfoil on either side of the camber line at chordwise
    /// position x
    fn half_thickness(&self, x: f64) -> f64;

    fn station_at(&self, x: f64) -> ProfileSample {
        let cl = self.camber_line(x);
        let yt = self.half_thickness(x);
        let angle = cl.slope.atan();
        let (sin, cos) = angle.sin_cos();

        ProfileSample {
            x,
            x_top: x - yt * sin,
            y_top: cl.y + yt * cos,
            x_bot: x + yt * sin,
            y_bot: cl.y - yt * cos,
            camber_line: cl.y,
            half_thickness: yt,
        }
    }

    fn stations(&self, positions: &[f64]) -> Vec<ProfileSample> {
        positions.iter().map(|x| self.station_at(*x)).collect()
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
pub struct Naca4Digit {
    t: f64,
    chord_len: f64,
    m: f64,
    p: f64,
    te: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `chord_len` - the actual length of the airfoil chord
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    ///
    /// * `is_sharp` - whether the trailing edge closes to zero thickness
    pub fn new(
        t_max: f64,
        chord_len: f64,
        max_camber: f64,
        max_camber_chord: f64,
        is_sharp: bool,
    ) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            chord_len,
            m: max_camber,
            p: max_camber_chord,
            te: if is_sharp {
                SHARP_TE_COEFFICIENT
            } else {
                BLUNT_TE_COEFFICIENT
            },
        }
    }

    pub fn from_parameters(params: &DerivedParameters) -> Naca4Digit {
        // The thickness path never carries camber
        let (m, p) = if params.is_symmetric() {
            (0.0, 0.0)
        } else {
            (params.max_camber, params.camber_position)
        };

        Naca4Digit::new(
            params.relative_thickness,
            params.chord_length,
            m,
            p,
            params.is_sharp,
        )
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn camber_line(&self, x: f64) -> CamberPoint {
        if self.m == 0.0 {
            return CamberPoint { y: 0.0, slope: 0.0 };
        }

        let (c, m, p) = (self.chord_len, self.m, self.p);
        let r = x / c;
        if x < p * c {
            CamberPoint {
                y: m * (x / p.powi(2)) * (2.0 * p - r),
                slope: 2.0 * (m / p.powi(2)) * (p - r),
            }
        } else {
            CamberPoint {
                y: m * ((c - x) / (1.0 - p).powi(2)) * (1.0 + r - 2.0 * p),
                slope: 2.0 * m / (1.0 - p).powi(2) * (p - r),
            }
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        let r = x / self.chord_len;
        let [c0, c1, c2, c3] = THICKNESS_COEFFICIENTS;

        5.0 * self.t
            * self.chord_len
            * (c0 * r.sqrt() + c1 * r + c2 * r.powi(2) + c3 * r.powi(3) + self.te * r.powi(4))
    }
}

/// Validates the parameters and samples the airfoil over [0, calculate_to]. Nothing is generated
/// if the parameters are rejected.
pub fn generate(spec: &AirfoilSpec) -> Result<AirfoilProfile, ProfileError> {
    let params = spec.validate()?;
    let generator = Naca4Digit::from_parameters(&params);
    let positions = station_positions(params.calculate_to, params.increment);

    Ok(AirfoilProfile::from_samples(
        generator.stations(&positions),
        &params,
    ))
}
