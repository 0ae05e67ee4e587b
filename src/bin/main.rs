use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use naca_profile::airfoil::generate::generate;
use naca_profile::airfoil::spec::{AirfoilSpec, DEFAULT_CHORD_LENGTH, DEFAULT_INCREMENT};
use naca_profile::airfoil::ProfileCurves;
use naca_profile::form::{InputMode, ProfileForm};
use naca_profile::plot::PlotDescription;
use ncollide2d::na::Point2;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// "x, y" lines of the closed outline
    Points,
    /// Upper, lower and camber curves as JSON
    Json,
    /// Render-ready plot description as JSON
    Plot,
}

#[derive(Parser, Debug)]
#[command(name = "naca-profile", version, about = "Sample the section of a NACA 4-digit airfoil")]
struct Opts {
    /// NACA 4-digit designation, e.g. 2412
    #[arg(long, conflicts_with = "thickness")]
    naca: Option<String>,

    /// Absolute maximum thickness of a symmetric section, instead of a NACA number
    #[arg(long)]
    thickness: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_CHORD_LENGTH)]
    chord: f64,

    /// Chordwise sampling step
    #[arg(long, default_value_t = DEFAULT_INCREMENT)]
    increment: f64,

    /// Only compute the section up to this chordwise position
    #[arg(long)]
    plot_to: Option<f64>,

    /// Use the open trailing edge coefficient
    #[arg(long)]
    blunt: bool,

    /// Read the parameters from a JSON file instead of the flags above
    #[arg(
        long,
        conflicts_with_all = ["naca", "thickness", "chord", "increment", "plot_to", "blunt"]
    )]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Points)]
    format: Format,

    /// Show the legend (cambered sections only)
    #[arg(long)]
    legend: bool,

    /// Overlay the camber line and half-thickness (cambered sections only)
    #[arg(long)]
    show_thickness: bool,

    /// Output file (default: stdout)
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Opts {
    fn form(&self) -> ProfileForm {
        let mut form = ProfileForm {
            naca_number: self.naca.clone().unwrap_or_default(),
            thickness: self.thickness.unwrap_or(0.0),
            increment: self.increment,
            plot_to_length: self.plot_to,
            is_sharp: !self.blunt,
            show_legend: self.legend,
            show_thickness: self.show_thickness,
            ..ProfileForm::default()
        };
        form.set_chord_length(self.chord);
        if self.thickness.is_some() {
            form.set_mode(InputMode::Thickness);
        }
        form
    }

    fn spec(&self, form: &ProfileForm) -> Result<AirfoilSpec> {
        match &self.config {
            Some(path) => {
                let s = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                AirfoilSpec::from_json(&s)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(form.to_spec()),
        }
    }
}

fn write_points(out: &mut dyn Write, v: &[Point2<f64>]) -> io::Result<()> {
    for p in v.iter() {
        writeln!(out, "{}, {}", &p.x, &p.y)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let opt = Opts::parse();

    let form = opt.form();
    let spec = opt.spec(&form)?;
    let profile = generate(&spec).context("invalid airfoil parameters")?;

    let mut out: Box<dyn Write> = match &opt.out {
        Some(p) => Box::new(
            File::create(p).with_context(|| format!("creating {}", p.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match opt.format {
        Format::Points => write_points(&mut out, &profile.to_outer_contour())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &ProfileCurves::from(&profile))?;
            writeln!(out)?;
        }
        Format::Plot => {
            let plot = PlotDescription::from_profile(&profile, &form.plot_options());
            serde_json::to_writer_pretty(&mut out, &plot)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    eprintln!("{}: {} stations", profile.title, profile.len());
    Ok(())
}
