use crate::airfoil::spec::{AirfoilSpec, DEFAULT_CHORD_LENGTH, DEFAULT_INCREMENT};
use crate::plot::PlotOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Naca,
    Thickness,
}

/// The state behind an interactive airfoil form. It is owned by whoever drives the form, and it
/// remembers the value of the inactive input so switching between NACA and thickness entry brings
/// back what was typed before. Only the active input ever reaches the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub mode: InputMode,
    pub naca_number: String,
    pub thickness: f64,
    pub chord_length: f64,
    pub increment: f64,
    pub plot_to_length: Option<f64>,
    pub is_sharp: bool,
    pub show_legend: bool,
    pub show_thickness: bool,
}

impl Default for ProfileForm {
    fn default() -> Self {
        ProfileForm {
            mode: InputMode::Naca,
            naca_number: "2412".to_string(),
            thickness: 0.0,
            chord_length: DEFAULT_CHORD_LENGTH,
            increment: DEFAULT_INCREMENT,
            plot_to_length: None,
            is_sharp: true,
            show_legend: false,
            show_thickness: false,
        }
    }
}

impl ProfileForm {
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Changes the chord, pulling the plot-to length back inside it if needed
    pub fn set_chord_length(&mut self, chord_length: f64) {
        self.chord_length = chord_length;
        if let Some(p) = self.plot_to_length {
            if p > chord_length {
                self.plot_to_length = Some(chord_length);
            }
        }
    }

    pub fn to_spec(&self) -> AirfoilSpec {
        let base = AirfoilSpec::default()
            .with_chord_length(self.chord_length)
            .with_increment(self.increment)
            .with_plot_to_length(self.plot_to_length)
            .with_sharp(self.is_sharp);

        match self.mode {
            InputMode::Naca => AirfoilSpec {
                naca_number: Some(self.naca_number.as_str().into()),
                ..base
            },
            InputMode::Thickness => AirfoilSpec {
                thickness: Some(self.thickness),
                ..base
            },
        }
    }

    pub fn plot_options(&self) -> PlotOptions {
        PlotOptions {
            show_legend: self.show_legend,
            show_thickness: self.show_thickness,
        }
    }

    /// The legend and thickness toggles are only offered for cambered airfoils
    pub fn shows_camber_options(&self) -> bool {
        self.to_spec()
            .validate()
            .map(|p| !p.is_symmetric())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;
    use crate::airfoil::spec::NacaInput;

    #[test]
    fn test_mode_switch_restores_values() {
        let mut form = ProfileForm::default();
        form.naca_number = "4415".to_string();
        form.set_mode(InputMode::Thickness);
        form.thickness = 55.0;

        let spec = form.to_spec();
        assert_eq!(None, spec.naca_number);
        assert_eq!(Some(55.0), spec.thickness);

        form.set_mode(InputMode::Naca);
        let spec = form.to_spec();
        assert_eq!(Some(NacaInput::from("4415")), spec.naca_number);
        assert_eq!(None, spec.thickness);

        form.set_mode(InputMode::Thickness);
        assert_eq!(Some(55.0), form.to_spec().thickness);
    }

    #[test]
    fn test_inactive_input_never_conflicts() {
        let mut form = ProfileForm::default();
        form.thickness = 30.0;
        assert!(generate(&form.to_spec()).is_ok());
        form.set_mode(InputMode::Thickness);
        assert!(generate(&form.to_spec()).is_ok());
    }

    #[test]
    fn test_chord_change_clamps_plot_to() {
        let mut form = ProfileForm::default();
        form.plot_to_length = Some(800.0);
        form.set_chord_length(500.0);
        assert_eq!(Some(500.0), form.plot_to_length);

        form.set_chord_length(2000.0);
        assert_eq!(Some(500.0), form.plot_to_length);
    }

    #[test]
    fn test_camber_options() {
        let mut form = ProfileForm::default();
        assert!(form.shows_camber_options());

        form.naca_number = "0012".to_string();
        assert!(!form.shows_camber_options());

        form.naca_number = "2412".to_string();
        form.set_mode(InputMode::Thickness);
        assert!(!form.shows_camber_options());
    }

    #[test]
    fn test_plot_options_follow_toggles() {
        let mut form = ProfileForm::default();
        assert_eq!(PlotOptions::default(), form.plot_options());

        form.show_legend = true;
        let options = form.plot_options();
        assert!(options.show_legend);
        assert!(!options.show_thickness);
    }

    #[test]
    fn test_empty_naca_is_flat_plate() {
        let form = ProfileForm {
            naca_number: String::new(),
            ..ProfileForm::default()
        };
        let profile = generate(&form.to_spec()).unwrap();
        assert!(profile.is_symmetric);
        assert!(profile.samples.iter().all(|s| s.y_top == 0.0));
    }

    #[test]
    fn test_form_from_json() {
        let form: ProfileForm =
            serde_json::from_str(r#"{"mode": "thickness", "thickness": 12.5}"#).unwrap();
        assert_eq!(InputMode::Thickness, form.mode);
        assert_eq!("2412", form.naca_number);
        assert_eq!(Some(12.5), form.to_spec().thickness);
    }
}
