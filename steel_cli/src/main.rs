//! # Steelref CLI Application
//!
//! Terminal front end for the steel_core calculators.
//!
//! ## Subcommands
//! - `section` - H-beam section properties (listed area or free-form)
//! - `unfold experience` - flat length by empirical deduction
//! - `unfold kfactor` - flat length by K-factor bend allowance
//! - `materials` - list the deduction table
//!
//! Add `--json` for machine-readable output. Log verbosity comes from
//! `--log-level`, `STEEL_LOG` or `RUST_LOG`.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use steel_core::calculations::{
    calculate_from_dimensions, calculate_unfold_length, try_compute_section_properties, BeamDimensions,
    BendDirection, BendTemplate, CalculationResult, ExperienceInput, KFactorInput, SectionProperties, UnfoldInput,
};
use steel_core::materials::MaterialId;
use steel_core::CalcError;

#[derive(Parser)]
#[command(name = "steel_cli")]
#[command(version)]
#[command(about = "Structural steel section properties and sheet-metal unfold length", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (e.g. "warn", "steel_core=debug"); falls back to RUST_LOG
    #[arg(long, global = true, env = "STEEL_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// H-beam section properties from H, B, t1, t2 (mm)
    Section(SectionArgs),

    /// Sheet-metal flat length for L/U profiles
    #[command(subcommand)]
    Unfold(UnfoldCommand),

    /// List the empirical deduction table
    Materials,
}

#[derive(Args)]
struct SectionArgs {
    /// Overall height H (mm)
    #[arg(long)]
    height: f64,

    /// Flange width B (mm)
    #[arg(long)]
    width: f64,

    /// Web thickness t1 (mm)
    #[arg(long)]
    web: f64,

    /// Flange thickness t2 (mm)
    #[arg(long)]
    flange: f64,

    /// Listed section area (cm²); estimated from the dimensions when omitted
    #[arg(long)]
    area: Option<f64>,
}

#[derive(Subcommand)]
enum UnfoldCommand {
    /// Empirical deduction method
    Experience {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Material for the deduction table
        #[arg(long, default_value = "carbon_5mm")]
        material: MaterialId,

        /// Custom deduction per bend (mm), overrides the table when positive
        #[arg(long)]
        deduction: Option<f64>,
    },

    /// K-factor bend allowance method
    Kfactor {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Bend angle (degrees)
        #[arg(long, default_value_t = 90.0)]
        angle: f64,

        /// Inner bend radius R (mm)
        #[arg(long)]
        radius: f64,

        /// K-factor, (0, 0.5]
        #[arg(long, default_value_t = 0.33)]
        k: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    L,
    U,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Up,
    Down,
}

#[derive(Args)]
struct ProfileArgs {
    /// Profile shape
    #[arg(long, value_enum, default_value = "l")]
    template: TemplateArg,

    /// Outer edge A (mm)
    #[arg(short = 'a', long)]
    edge_a: f64,

    /// Outer edge B (mm)
    #[arg(short = 'b', long)]
    edge_b: f64,

    /// Outer edge C (mm), U profile only
    #[arg(short = 'c', long, required_if_eq("template", "u"))]
    edge_c: Option<f64>,

    /// Sheet thickness T (mm)
    #[arg(short = 't', long)]
    thickness: f64,

    /// Bend direction
    #[arg(long, value_enum, default_value = "up")]
    direction: DirectionArg,
}

impl ProfileArgs {
    fn template(&self) -> BendTemplate {
        match self.template {
            TemplateArg::L => BendTemplate::l(self.edge_a, self.edge_b),
            // Missing C is caught by clap; 0 would be reported as an edgeC error anyway
            TemplateArg::U => BendTemplate::u(self.edge_a, self.edge_b, self.edge_c.unwrap_or(0.0)),
        }
    }

    fn direction(&self) -> BendDirection {
        match self.direction {
            DirectionArg::Up => BendDirection::Up,
            DirectionArg::Down => BendDirection::Down,
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let outcome = match cli.command {
        Commands::Section(args) => run_section(&args, cli.json),
        Commands::Unfold(command) => run_unfold(command, cli.json),
        Commands::Materials => run_materials(cli.json),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CalcError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_section(args: &SectionArgs, json: bool) -> Result<ExitCode, CalcError> {
    let dims = BeamDimensions::new(args.height, args.width, args.web, args.flange);
    let props = match args.area {
        Some(area) => try_compute_section_properties(&dims, area)?,
        None => calculate_from_dimensions(&dims)?,
    };
    debug!(listed_area = args.area.is_some(), "section calculated");

    if json {
        print_json(&props)?;
    } else {
        print_section(&dims, &props, args.area.is_some());
    }
    Ok(ExitCode::SUCCESS)
}

fn print_section(dims: &BeamDimensions, props: &SectionProperties, listed_area: bool) {
    println!("═══════════════════════════════════════");
    println!("  H-BEAM SECTION PROPERTIES");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  H×B×t1×t2 = {}×{}×{}×{} mm",
        dims.height_mm, dims.width_mm, dims.web_thickness_mm, dims.flange_thickness_mm
    );
    println!();
    println!("Properties:");
    println!(
        "  A  = {:>10.2} cm²  {}",
        props.area_cm2,
        if listed_area { "(listed)" } else { "(estimated)" }
    );
    println!("  G  = {:>10.2} kg/m", props.weight_kg_per_m);
    println!("  Ix = {:>10.0} cm⁴", props.ix_cm4);
    println!("  Iy = {:>10.0} cm⁴", props.iy_cm4);
    println!("  Wx = {:>10.0} cm³", props.wx_cm3);
    println!("  Wy = {:>10.0} cm³", props.wy_cm3);
    println!("  ix = {:>10.2} cm", props.rx_cm);
    println!("  iy = {:>10.2} cm", props.ry_cm);
    println!("  S  = {:>10.2} m²/m", props.surface_area_m2_per_m);
}

fn run_unfold(command: UnfoldCommand, json: bool) -> Result<ExitCode, CalcError> {
    let input = match command {
        UnfoldCommand::Experience {
            profile,
            material,
            deduction,
        } => UnfoldInput::Experience(ExperienceInput {
            template: profile.template(),
            thickness_mm: profile.thickness,
            material,
            custom_deduction_mm: deduction,
            direction: profile.direction(),
        }),
        UnfoldCommand::Kfactor {
            profile,
            angle,
            radius,
            k,
        } => UnfoldInput::KFactor(KFactorInput {
            template: profile.template(),
            thickness_mm: profile.thickness,
            angle_deg: angle,
            inner_radius_mm: radius,
            k_factor: k,
            direction: profile.direction(),
        }),
    };

    let result = calculate_unfold_length(&input);

    if json {
        print_json(&result)?;
    } else {
        print_unfold(&input, &result);
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_unfold(input: &UnfoldInput, result: &CalculationResult) {
    let method = match input {
        UnfoldInput::Experience(_) => "EMPIRICAL DEDUCTION",
        UnfoldInput::KFactor(_) => "K-FACTOR",
    };
    println!("═══════════════════════════════════════");
    println!("  UNFOLD LENGTH - {} ({} profile)", method, input.template().name());
    println!("═══════════════════════════════════════");
    println!();

    match result.length_mm() {
        Some(length) => {
            for line in result.breakdown() {
                println!("  {}", line);
            }
            if !result.bend_lines().is_empty() {
                println!();
                println!("Bend lines:");
                for bend in result.bend_lines() {
                    println!("  {:?}: {}", bend.edge, bend.calculation);
                }
            }
            if !result.warnings().is_empty() {
                println!();
                for warning in result.warnings() {
                    println!("  [WARN] {}", warning);
                }
            }
            println!();
            println!("═══════════════════════════════════════");
            println!("  FLAT LENGTH: {} mm", length);
            println!("═══════════════════════════════════════");
        }
        None => {
            println!("Input rejected:");
            for error in result.errors() {
                println!("  [ERROR] {}: {}", error.field, error.message);
            }
        }
    }
}

fn run_materials(json: bool) -> Result<ExitCode, CalcError> {
    let rows: Vec<_> = MaterialId::ALL.iter().map(MaterialId::deduction).collect();
    if json {
        print_json(&rows)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{:<14} {:>10} {:>10}  Description", "Material", "T (mm)", "d (mm)");
    for row in rows {
        let fmt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:>10} {:>10}  {}",
            row.material.code(),
            fmt(row.thickness_mm),
            fmt(row.deduction_mm),
            row.description
        );
    }
    Ok(ExitCode::SUCCESS)
}
