use crate::serialize;
use itertools::Itertools;
use ncollide2d::na::Point2;
use serde::Serialize;
use spec::DerivedParameters;

pub mod generate;
pub mod spec;

/// The airfoil geometry at one chordwise station: the upper and lower surface points, the height
/// of the mean camber line and the half-thickness measured perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSample {
    pub x: f64,
    pub x_top: f64,
    pub y_top: f64,
    pub x_bot: f64,
    pub y_bot: f64,
    pub camber_line: f64,
    pub half_thickness: f64,
}

impl ProfileSample {
    pub fn upper(&self) -> Point2<f64> {
        Point2::new(self.x_top, self.y_top)
    }

    pub fn lower(&self) -> Point2<f64> {
        Point2::new(self.x_bot, self.y_bot)
    }

    pub fn camber(&self) -> Point2<f64> {
        Point2::new(self.x, self.camber_line)
    }

    pub fn thickness(&self) -> Point2<f64> {
        Point2::new(self.x, self.half_thickness)
    }
}

/// A generated airfoil cross-section, with the samples ordered by increasing chordwise position
#[derive(Debug, Clone, Serialize)]
pub struct AirfoilProfile {
    pub title: String,
    pub chord_length: f64,
    pub calculate_to: f64,
    pub is_symmetric: bool,
    pub is_sharp: bool,
    pub samples: Vec<ProfileSample>,
}

impl AirfoilProfile {
    pub fn from_samples(samples: Vec<ProfileSample>, params: &DerivedParameters) -> AirfoilProfile {
        AirfoilProfile {
            title: params.designation.to_string(),
            chord_length: params.chord_length,
            calculate_to: params.calculate_to,
            is_symmetric: params.is_symmetric(),
            is_sharp: params.is_sharp,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn upper(&self) -> Vec<Point2<f64>> {
        self.samples.iter().map(|s| s.upper()).collect()
    }

    pub fn lower(&self) -> Vec<Point2<f64>> {
        self.samples.iter().map(|s| s.lower()).collect()
    }

    pub fn camber(&self) -> Vec<Point2<f64>> {
        self.samples.iter().map(|s| s.camber()).collect()
    }

    pub fn half_thickness(&self) -> Vec<Point2<f64>> {
        self.samples.iter().map(|s| s.thickness()).collect()
    }

    /// The upper surface from leading to trailing edge followed by the lower surface back to the
    /// leading edge.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper();
        let mut lower = self.lower();
        lower.reverse();
        result.append(&mut lower);
        result
    }

    /// The largest half-thickness and the station it occurs at
    pub fn max_half_thickness(&self) -> Option<&ProfileSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.half_thickness.total_cmp(&b.half_thickness))
    }

    /// The lowest and highest y values reached by either surface
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .flat_map(|s| [s.y_top, s.y_bot])
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
    }
}

/// The surface points of a profile in a form convenient for JSON output
#[derive(Serialize)]
pub struct ProfileCurves {
    pub title: String,
    #[serde(serialize_with = "serialize::points")]
    pub upper: Vec<Point2<f64>>,
    #[serde(serialize_with = "serialize::points")]
    pub lower: Vec<Point2<f64>>,
    #[serde(serialize_with = "serialize::points")]
    pub camber: Vec<Point2<f64>>,
}

impl From<&AirfoilProfile> for ProfileCurves {
    fn from(profile: &AirfoilProfile) -> Self {
        ProfileCurves {
            title: profile.title.clone(),
            upper: profile.upper(),
            lower: profile.lower(),
            camber: profile.camber(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;
    use crate::airfoil::spec::AirfoilSpec;
    use approx::assert_relative_eq;

    fn naca(text: &str) -> AirfoilProfile {
        generate(&AirfoilSpec::from_naca(text)).unwrap()
    }

    #[test]
    fn test_outer_contour_order() {
        let profile = naca("2412");
        let contour = profile.to_outer_contour();
        assert_eq!(profile.len() * 2, contour.len());
        assert_eq!(profile.samples[0].upper(), contour[0]);
        assert_eq!(profile.samples[0].lower(), *contour.last().unwrap());
        assert_eq!(
            profile.samples.last().unwrap().lower(),
            contour[profile.len()]
        );
    }

    #[test]
    fn test_max_half_thickness() {
        let profile = naca("0012");
        let s = profile.max_half_thickness().unwrap();
        assert_relative_eq!(300.0, s.x, epsilon = 10.0);
        assert_relative_eq!(60.0, s.half_thickness, epsilon = 0.1);
    }

    #[test]
    fn test_y_bounds_symmetric() {
        let (lo, hi) = naca("0012").y_bounds().unwrap();
        assert_relative_eq!(-hi, lo, epsilon = 1e-12);
        assert!(hi > 59.0);
    }

    #[test]
    fn test_title() {
        assert_eq!("NACA 2412", naca("2412").title);
        let profile = generate(&AirfoilSpec::from_thickness(25.0)).unwrap();
        assert_eq!("Thickness 25", profile.title);
    }

    #[test]
    fn test_curves_json() {
        let spec = AirfoilSpec::from_naca("0012")
            .with_chord_length(1.0)
            .with_increment(0.5);
        let profile = generate(&spec).unwrap();
        let value = serde_json::to_value(ProfileCurves::from(&profile)).unwrap();
        assert_eq!("NACA 0012", value["title"]);
        assert_eq!(3, value["upper"].as_array().unwrap().len());
        assert_eq!(0.5, value["camber"][1]["x"]);
        assert_eq!(0.0, value["camber"][1]["y"]);
    }
}
