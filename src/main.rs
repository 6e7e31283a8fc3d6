//! keystrip entry point
//!
//! Parses the command line, loads the app list, computes the screen
//! regions once, wires the Win32 implementations into the controller and
//! dispatches the requested operation. Contract violations terminate via
//! `app::fatal`; everything else is reported and exits nonzero.

mod app;
mod config;
mod domain;
mod input;
mod platform;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "keystrip", about = "On-screen key strip window locator and key synthesizer")]
struct Cli {
    /// Path to the launchable-app descriptor file
    #[arg(long, default_value = "apps.json")]
    config: PathBuf,

    /// Height in pixels of the overlay band the regions surround
    #[arg(long, default_value_t = 320)]
    band_height: i32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Region {
    Above,
    Below,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the computed screen regions
    Regions,
    /// List the configured applications and whether each is running
    List,
    /// Launch the named application or bring its window into position
    Open { name: String },
    /// Move the current foreground window into a region
    MoveActive { region: Region },
    /// Synthesize and inject the key sequence for a button identifier
    Key { button: String },
}

#[cfg(windows)]
fn main() {
    use app::{AppError, Controller, fatal};
    use config::{Keymap, apps};
    use domain::ScreenRegions;
    use input::{StateEffect, Synthesizer, inject::Win32KeyInjector};
    use platform::{Win32WindowSystem, WindowSystem};

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = (|| -> Result<(), AppError> {
        let system = Win32WindowSystem::new();
        let work_area = system.work_area()?;
        let regions = ScreenRegions::compute(work_area, cli.band_height)?;
        let apps = apps::load(&cli.config)?;

        let controller = Controller::new(
            system,
            Win32KeyInjector::new(),
            Synthesizer::new(Keymap::standard()),
            regions,
            apps,
        );

        match cli.command {
            Command::Regions => {
                println!(
                    "above: y 0..{} ({}px), band: y {}..{}, below: y {}..{} ({}px), width {}",
                    regions.above_end_y,
                    regions.above_height(),
                    regions.above_end_y,
                    regions.below_start_y,
                    regions.below_start_y,
                    regions.below_end_y,
                    regions.below_height(),
                    regions.available_width,
                );
            }
            Command::List => {
                for app in controller.apps() {
                    let state = if controller.running(&app.display_name)? {
                        "running"
                    } else {
                        "stopped"
                    };
                    println!("{:<24} {}", app.display_name, state);
                }
            }
            Command::Open { name } => controller.open_or_show(&name)?,
            Command::MoveActive { region } => {
                controller.move_active(region == Region::Above)?
            }
            Command::Key { button } => match controller.activate_key(&button)? {
                StateEffect::None => {}
                effect => println!("{effect:?}"),
            },
        }
        Ok(())
    })();

    if let Err(error) = result {
        if error.is_contract_violation() {
            fatal::abort(&error);
        }
        tracing::error!(%error, "command failed");
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
fn main() {
    let _ = Cli::parse();
    eprintln!("keystrip drives the Windows window manager and input queue; this platform is unsupported");
    std::process::exit(1);
}
