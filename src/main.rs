use std::fs;
use std::process::ExitCode;

use station_slots::cli::args::{self, USAGE};
use station_slots::config::EditorConfig;
use station_slots::io::TerminalIO;
use station_slots::{logging, EditorResult, SlotInspector, SlotRecord};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> EditorResult<()> {
    let args = args::parse()?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = EditorConfig::resolve(&args)?;
    logging::init(&config.log_filter);

    let existing: Vec<SlotRecord> = match &args.load {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Vec::new(),
    };

    let mut inspector = SlotInspector::new();
    inspector.open(config.station_kind, &existing, config.slot_count);

    let mut terminal = TerminalIO;
    let mut output = TerminalIO;
    inspector.run(&mut terminal, &mut output)?;

    println!("{}", inspector.export_json()?);
    Ok(())
}
