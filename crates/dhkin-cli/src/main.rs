//! dhkin CLI - inspect and pose Denavit–Hartenberg robot descriptions
//!
//! Loads a JSON robot description, optionally drives named joints, and
//! prints the world pose of every joint frame and link.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use dhkin_fk::pose_robot;
use dhkin_model::{Base64MeshCodec, MeshBytes, Robot, RobotDescription};

mod config;
mod report;

use report::PoseRow;

#[derive(Parser)]
#[command(name = "dhkin")]
#[command(about = "Forward kinematics for DH robot descriptions", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a description defines a valid chain
    Validate {
        /// Robot description (.json)
        file: PathBuf,
    },
    /// List the joints and DH parameters of a description
    Info {
        /// Robot description (.json)
        file: PathBuf,
    },
    /// Compute joint and link poses
    Pose {
        /// Robot description (.json)
        file: PathBuf,
        /// Joint angle as NAME=RADIANS (or NAME=DEGREESdeg); repeatable
        #[arg(short, long = "angle", value_parser = parse_angle)]
        angles: Vec<(String, f64)>,
        /// Start from each joint's default pose hint
        #[arg(long)]
        default_pose: bool,
        /// Engine settings file (.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate { file } => {
            let robot = load_robot(&file)?;
            println!("{}: valid chain of {} joints", file.display(), robot.joint_count());
        }
        Commands::Info { file } => {
            let robot = load_robot(&file)?;
            print!("{}", report::info_table(&robot));
        }
        Commands::Pose {
            file,
            angles,
            default_pose,
            config,
            json,
        } => {
            let settings = config::load(config.as_deref())?;
            let mut robot = load_robot(&file)?;

            if default_pose {
                let moved = robot.apply_default_pose()?;
                tracing::debug!(moved, "applied default pose");
            }
            for (name, theta) in &angles {
                robot
                    .set_joint_angle(name, *theta)
                    .with_context(|| format!("setting angle of {name}"))?;
            }

            let base = settings.base.to_transform()?;
            let poses = pose_robot(&robot, &base)?;
            let rows: Vec<PoseRow> = robot
                .joints()
                .iter()
                .zip(&poses)
                .map(|(joint, pose)| PoseRow::new(joint, pose))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", report::pose_table(&rows));
            }
        }
    }

    Ok(())
}

/// Structured logging to stderr; `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_robot(path: &Path) -> Result<Robot<MeshBytes>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let description = RobotDescription::from_json(&json)
        .with_context(|| format!("parsing robot description {}", path.display()))?;
    let robot = description
        .to_robot(&Base64MeshCodec)
        .with_context(|| format!("loading robot from {}", path.display()))?;
    Ok(robot)
}

/// Parse `NAME=VALUE`, where VALUE is radians or degrees with a `deg` suffix.
fn parse_angle(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {arg:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing joint name in {arg:?}"));
    }

    let value = value.trim();
    let (number, degrees) = match value.strip_suffix("deg") {
        Some(number) => (number.trim(), true),
        None => (value, false),
    };
    let angle: f64 = number
        .parse()
        .map_err(|_| format!("invalid angle {value:?} for joint {name}"))?;
    if !angle.is_finite() {
        return Err(format!("angle for joint {name} must be finite"));
    }

    Ok((name.to_string(), if degrees { angle.to_radians() } else { angle }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_angle_radians() {
        assert_eq!(parse_angle("elbow=0.5"), Ok(("elbow".to_string(), 0.5)));
        assert_eq!(parse_angle(" wrist = -1 "), Ok(("wrist".to_string(), -1.0)));
    }

    #[test]
    fn parse_angle_degrees() {
        let (name, angle) = parse_angle("shoulder=90deg").unwrap();
        assert_eq!(name, "shoulder");
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn parse_angle_rejects_garbage() {
        assert!(parse_angle("elbow").is_err());
        assert!(parse_angle("=1.0").is_err());
        assert!(parse_angle("elbow=fast").is_err());
        assert!(parse_angle("elbow=inf").is_err());
    }

    #[test]
    fn cli_parses_pose_arguments() {
        let cli = Cli::try_parse_from([
            "dhkin", "pose", "arm.json", "-a", "elbow=0.25", "--angle", "wrist=10deg", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Pose { file, angles, json, default_pose, config } => {
                assert_eq!(file, PathBuf::from("arm.json"));
                assert_eq!(angles.len(), 2);
                assert_eq!(angles[0], ("elbow".to_string(), 0.25));
                assert!(json);
                assert!(!default_pose);
                assert!(config.is_none());
            }
            _ => panic!("expected pose subcommand"),
        }
    }
}
