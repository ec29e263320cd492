use clap::Parser;
use std::path::PathBuf;

use stashsort_core::{run, SorterSettings};

#[derive(Debug, Parser)]
#[command(name = "stashsort", version, about = "Diablo II shared/personal stash sorter")]
struct Args {
    /// Stash file to sort (.sss or .d2x).
    input: PathBuf,

    /// Write the sorted stash here instead of replacing the input.
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file with grouping rules and upgrade switches.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the decoded items as JSON and exit without writing.
    #[arg(long, default_value_t = false)]
    dump_items: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn init_logging(debug: bool) -> Result<(), log::SetLoggerError> {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(args.debug) {
        eprintln!("Failed to set up logging: {err}");
    }

    let settings = SorterSettings {
        input_path: args.input,
        output_path: args.output,
        config_path: args.config,
        dump_items: args.dump_items,
        debug: args.debug,
    };

    match run(&settings) {
        Ok(summary) => {
            if let Some(dump) = summary.dump {
                println!("{dump}");
            } else {
                log::info!(
                    "sorted {} items onto {} pages",
                    summary.items_written,
                    summary.pages_written
                );
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
