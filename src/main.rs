use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dosekit::cli::{Cli, Command};
use dosekit::{commands, init_logging, layout_options, SettingsManager, BUILD_DATE, VERSION};
use dosekit_layout::{GridTileParams, LinearTileParams, TileOperation};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.log_format)?;
    tracing::debug!("dosekit {} (built {})", VERSION, BUILD_DATE);

    let mut settings = match &cli.config {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Settings file {} not found", path.display());
            SettingsManager::load_or_default(path)
        }
        None => SettingsManager::load_default(),
    }
    .context("Failed to load settings")?;
    let options = layout_options(settings.config());

    match cli.command {
        Command::Check { layout } => {
            let report = commands::check(&layout, &options)?;
            println!(
                "{}: {} components, {} groups, {} exposure batch(es)",
                layout.display(),
                report.components,
                report.groups,
                report.batches
            );
            for id in &report.off_bed {
                println!("warning: component {id} extends past the print bed");
            }
            if report.is_clear() {
                println!("No overlaps");
                return Ok(ExitCode::SUCCESS);
            }
            for (a, b) in report.overlaps.pairs() {
                println!("overlap: {a} <-> {b}");
            }
            Ok(ExitCode::FAILURE)
        }
        Command::Export { layout, output } => {
            let exported = commands::export(&layout, &output, &options)?;
            println!(
                "Exported {} components in {} groups to {}",
                exported.components.len(),
                exported.groups.len(),
                output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Tile {
            layout,
            x0,
            y0,
            dx,
            dy,
            count,
            target,
        } => {
            let op = TileOperation::Linear(LinearTileParams::new(x0, y0, dx, dy, count));
            let outcome = commands::tile(&layout, &op, &target, &options)?;
            report_tiles(&mut settings, &outcome);
            Ok(ExitCode::SUCCESS)
        }
        Command::Grid {
            layout,
            x_start,
            y_start,
            x_gap,
            y_gap,
            columns,
            rows,
            target,
        } => {
            let op = TileOperation::Grid(GridTileParams::new(
                x_start, y_start, x_gap, y_gap, columns, rows,
            ));
            let outcome = commands::tile(&layout, &op, &target, &options)?;
            report_tiles(&mut settings, &outcome);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report_tiles(settings: &mut SettingsManager, outcome: &commands::TileOutcome) {
    println!(
        "Added {} components, saved to {}",
        outcome.added.len(),
        outcome.saved_to.display()
    );
    if !outcome.overlaps.is_clear() {
        println!(
            "warning: {} overlapping pair(s) must be resolved before export",
            outcome.overlaps.len()
        );
    }
    if let Err(e) = settings.record_recent_file(&outcome.saved_to) {
        tracing::warn!("Could not update recent files: {}", e);
    }
}
