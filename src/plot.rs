use crate::airfoil::AirfoilProfile;
use crate::serialize;
use itertools::Itertools;
use ncollide2d::na::Point2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotOptions {
    pub show_legend: bool,
    pub show_thickness: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Curve {
    pub label: &'static str,
    pub style: LineStyle,
    #[serde(serialize_with = "serialize::points")]
    pub points: Vec<Point2<f64>>,
}

/// Everything a front end needs to draw a profile: the curves with their labels, the title, and
/// the axis bounds. The x-range is clipped to the computed length and the axes use an equal aspect
/// ratio so the section is not distorted.
#[derive(Debug, Clone, Serialize)]
pub struct PlotDescription {
    pub title: String,
    pub curves: Vec<Curve>,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub equal_aspect: bool,
    pub show_legend: bool,
}

impl PlotDescription {
    /// Builds the plot for a profile. The camber line and half-thickness overlays, and the legend,
    /// only apply to cambered profiles.
    pub fn from_profile(profile: &AirfoilProfile, options: &PlotOptions) -> Self {
        let surface = if profile.is_sharp {
            LineStyle::Solid
        } else {
            LineStyle::Dashed
        };

        let mut curves = vec![
            Curve {
                label: "upper",
                style: surface,
                points: profile.upper(),
            },
            Curve {
                label: "lower",
                style: surface,
                points: profile.lower(),
            },
        ];

        let cambered = !profile.is_symmetric;
        if cambered && options.show_thickness {
            curves.push(Curve {
                label: "camber line",
                style: LineStyle::Dashed,
                points: profile.camber(),
            });
            curves.push(Curve {
                label: "half thickness",
                style: LineStyle::Dashed,
                points: profile.half_thickness(),
            });
        }

        let y_range = curves
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.y))
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or((0.0, 0.0));

        PlotDescription {
            title: profile.title.clone(),
            curves,
            x_range: (0.0, profile.calculate_to),
            y_range,
            equal_aspect: true,
            show_legend: cambered && options.show_legend,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.curves.iter().map(|c| c.label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;
    use crate::airfoil::spec::AirfoilSpec;
    use test_case::test_case;

    fn all_on() -> PlotOptions {
        PlotOptions {
            show_legend: true,
            show_thickness: true,
        }
    }

    #[test_case("2412", all_on(), vec!["upper", "lower", "camber line", "half thickness"], true)]
    #[test_case("2412", PlotOptions::default(), vec!["upper", "lower"], false)]
    #[test_case("0012", all_on(), vec!["upper", "lower"], false)]
    fn test_overlays(naca: &str, options: PlotOptions, labels: Vec<&str>, legend: bool) {
        let profile = generate(&AirfoilSpec::from_naca(naca).with_increment(5.0)).unwrap();
        let plot = PlotDescription::from_profile(&profile, &options);
        assert_eq!(labels, plot.labels());
        assert_eq!(legend, plot.show_legend);
    }

    #[test]
    fn test_thickness_title_and_no_overlay() {
        let profile = generate(&AirfoilSpec::from_thickness(40.0)).unwrap();
        let plot = PlotDescription::from_profile(&profile, &all_on());
        assert_eq!("Thickness 40", plot.title);
        assert_eq!(2, plot.curves.len());
        assert!(!plot.show_legend);
    }

    #[test]
    fn test_x_range_clipped() {
        let spec = AirfoilSpec::from_naca("2412").with_plot_to_length(Some(250.0));
        let plot = PlotDescription::from_profile(&generate(&spec).unwrap(), &all_on());
        assert_eq!((0.0, 250.0), plot.x_range);
        assert!(plot.equal_aspect);
    }

    #[test]
    fn test_blunt_is_dashed() {
        let spec = AirfoilSpec::from_naca("0012").with_sharp(false);
        let plot = PlotDescription::from_profile(&generate(&spec).unwrap(), &all_on());
        assert!(plot.curves.iter().all(|c| c.style == LineStyle::Dashed));
    }

    #[test]
    fn test_y_range_covers_surfaces() {
        let profile = generate(&AirfoilSpec::from_naca("4412")).unwrap();
        let plot = PlotDescription::from_profile(&profile, &PlotOptions::default());
        assert_eq!(profile.y_bounds().unwrap(), plot.y_range);
    }

    #[test]
    fn test_json_shape() {
        let spec = AirfoilSpec::from_naca("2412")
            .with_chord_length(1.0)
            .with_increment(0.25);
        let plot = PlotDescription::from_profile(&generate(&spec).unwrap(), &all_on());
        let value = serde_json::to_value(&plot).unwrap();
        assert_eq!("NACA 2412", value["title"]);
        assert_eq!("solid", value["curves"][0]["style"]);
        assert_eq!(5, value["curves"][0]["points"].as_array().unwrap().len());
        assert_eq!(1.0, value["x_range"][1]);
    }
}
