use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use journey_tracker::domain::{JourneyState, StopCatalog};
use journey_tracker::loader::load_stops_file;
use journey_tracker::view::ProgressSnapshot;

/// Stops file used when no path is given on the command line.
const DEFAULT_STOPS_PATH: &str = "data/stops.txt";

/// Width of the rendered progress bar, in characters.
const PROGRESS_BAR_WIDTH: usize = 30;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STOPS_PATH.to_string());

    // Fail fast on an unreadable stops file; garbage *inside* the file is
    // handled leniently by the loader.
    let catalog = match load_stops_file(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut state = JourneyState::new();
    let stdin = io::stdin();

    loop {
        let snapshot = ProgressSnapshot::build(&catalog, &state);
        render(&snapshot);

        print!("[n] next stop  [u] switch units  [j] json  [q] quit > ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break; // EOF
        }

        match line.trim() {
            "n" => state.advance(&catalog),
            "u" => state.toggle_unit(),
            "j" => print_json(&catalog, &state),
            "q" => break,
            "" => {}
            other => println!("Unknown command: {other:?}"),
        }
    }
}

fn render(snapshot: &ProgressSnapshot) {
    println!();
    println!("=== Journey Progress ===");
    println!(
        "{} {:.0}%",
        progress_bar(snapshot.progress_fraction),
        snapshot.progress_fraction * 100.0
    );
    println!(
        "Distance covered: {} {}",
        snapshot.distance_covered, snapshot.unit_label
    );
    println!(
        "Distance left: {} {}",
        snapshot.distance_left, snapshot.unit_label
    );

    match &snapshot.current_stop {
        Some(current) => {
            println!("Current Stop: {}", current.city_name);
            println!("Visa Requirement: {}", current.visa_requirement);
            println!(
                "Distance to Next: {} {}",
                current.distance_to_next, snapshot.unit_label
            );
            println!("Time to Next: {} hours", current.time_to_next_hours);
        }
        None => println!("Journey Completed!"),
    }

    println!();
    println!("All Stops:");
    for row in &snapshot.stops {
        let marker = if row.is_current { "  <- currently here" } else { "" };
        println!(
            "  {} (visa: {}) - {} {} / {} h{}",
            row.city_name,
            row.visa_requirement,
            row.distance_to_next,
            snapshot.unit_label,
            row.time_to_next_hours,
            marker
        );
    }
    println!();
}

fn print_json(catalog: &StopCatalog, state: &JourneyState) {
    let snapshot = ProgressSnapshot::build(catalog, state);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize snapshot: {e}"),
    }
}

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}
