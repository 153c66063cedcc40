//! Crossword desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Crossword application.

use clap::Parser;
use crossword_app::{app::CrosswordApp, version};
use crossword_catalog::Catalog;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Catalog index of the puzzle to open. Out-of-range indices wrap around.
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    puzzle: usize,

    /// Print the bundled puzzles and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.crossword";

    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let catalog = Catalog::samples();

    if args.list {
        for (index, title) in catalog.titles().enumerate() {
            println!("{index}: {title}");
        }
        return Ok(());
    }

    log::info!(
        "Starting Crossword, version={}, puzzle={}",
        version::build_version(),
        args.puzzle
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 600.0))
            .with_min_inner_size((480.0, 320.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Crossword",
        options,
        Box::new(move |cc| Ok(Box::new(CrosswordApp::new(cc, catalog, args.puzzle)))),
    )
}
