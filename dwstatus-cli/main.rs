use clap::Parser;
use std::io::Write;

use dwstatus::{input, report, Result};
use dwstatus_raw::current_chip::sys_status::SYS_STATUS;

#[derive(Parser, Debug)]
#[command(name = "dwstatus")]
#[command(about = "Decode DW1000 system event status register values")]
struct Args {
    #[arg(help = "Register value as 0x-prefixed hex, e.g. 0x2006F02")]
    value: String,

    #[arg(short, long, help = "Enable verbose logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging based on verbose flag; diagnostics go to stderr so the
    // report on stdout stays clean
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let raw = match input::parse_register_value(&args.value) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Expected a 0x-prefixed hex value, e.g.: dwstatus 0x2006F02");
            std::process::exit(1);
        }
    };

    let table = &*SYS_STATUS;
    tracing::debug!("Decoding 0x{:X} against {}", raw, table.name());

    let ignored = table.out_of_range_mask(raw);
    if ignored != 0 {
        tracing::warn!(
            "Bits above {} are outside {} and ignored: 0x{:X}",
            table.max_bit(),
            table.name(),
            ignored
        );
    }

    let rendered = report::render(table, raw);
    std::io::stdout().write_all(rendered.as_bytes())?;

    Ok(())
}
