use e_sketch::logging::{init_logging, LogDestination};
use e_sketch::{tui, SketchConfig};
use log::info;

fn show_help() {
    println!("E-Sketch - interactive drawing grid");
    println!();
    println!("Usage:");
    println!("  e_sketch                               Start drawing with default settings");
    println!("  e_sketch --config <file>               Load settings from a JSON file");
    println!("  e_sketch --write-default-config <file> Write the default settings and exit");
    println!("  e_sketch --help                        Show this message");
    println!();
    println!("Environment:");
    println!("  SKETCH_GRID_SIZE       Initial squares per side (1-100)");
    println!("  SKETCH_INITIAL_MODE    hover | click | rainbow | darkening");
    println!("  SKETCH_SEED            Seed for rainbow colors");
    println!("  SKETCH_CONTAINER_SIZE  Drawing area size in pixels");
    println!("  SKETCH_LOG_FILE        Write logs to this file");
    println!("  RUST_LOG               Log filter (overrides the configured level)");
    println!();
    println!("Keys: m toggle mode, r reset, n new grid, h help, q quit");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("-h") | Some("--help") => {
            show_help();
            return Ok(());
        }
        Some("--write-default-config") => {
            let Some(path) = args.get(2) else {
                eprintln!("❌ --write-default-config needs a file path");
                std::process::exit(2);
            };
            SketchConfig::default().save_to_file(path)?;
            println!("✅ Default configuration written to {}", path);
            return Ok(());
        }
        Some("--config") => {
            let Some(path) = args.get(2) else {
                eprintln!("❌ --config needs a file path");
                std::process::exit(2);
            };
            let mut config = SketchConfig::load_from_file(path)?;
            config.apply_env();
            config
        }
        Some(unknown) => {
            eprintln!("❌ Unknown argument: {}", unknown);
            eprintln!("Run 'e_sketch --help' for usage information");
            std::process::exit(2);
        }
        None => SketchConfig::from_env(),
    };

    config.validate()?;

    let destination = init_logging(&config.logging, true)?;
    if let LogDestination::File(path) = &destination {
        info!("📝 Logging to {}", path);
    }

    tui::run(&config)?;
    Ok(())
}
