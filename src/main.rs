use clap::Parser;
use michigan_cities::{catalog, sampling, server};

/// Michigan Cities — static city catalog with random sampling
///
/// A fixed table of 55 Michigan cities with stable ids and WGS84
/// coordinates. Lists, looks up, and samples cities; optionally serves
/// the catalog over HTTP.
///
/// Examples:
///   micities --list
///   micities --id 16
///   micities --sample 5
///   micities --region
///   micities --serve --port 8080
#[derive(Parser)]
#[command(name = "micities", version, about, long_about = None)]
struct Cli {
    /// List every city in the catalog.
    #[arg(long)]
    list: bool,

    /// Show one city by its stable id.
    #[arg(long)]
    id: Option<u32>,

    /// Sample N distinct cities at random.
    #[arg(long, allow_hyphen_values = true)]
    sample: Option<i64>,

    /// Print the two-peninsula map region.
    #[arg(long)]
    region: bool,

    /// Serve the catalog over HTTP.
    #[arg(long)]
    serve: bool,

    /// Host to bind in server mode.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind in server mode.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port));
        return;
    }

    // ── Lookup by id ────────────────────────────────────────────

    if let Some(id) = cli.id {
        let city = catalog::entry(id).unwrap_or_else(|| {
            eprintln!(
                "Error: No city with id {} (valid ids are 1..={}).",
                id,
                catalog::count()
            );
            std::process::exit(1);
        });
        eprintln!("  {}", city);
        println!("{}", serde_json::to_string_pretty(&city).unwrap());
        return;
    }

    // ── Random sample ───────────────────────────────────────────

    if let Some(count) = cli.sample {
        let cities = sampling::sample(count).unwrap_or_else(|| {
            eprintln!("Error: Sample count must be positive, got {}.", count);
            std::process::exit(1);
        });
        for city in &cities {
            eprintln!("  {}", city);
        }
        println!("{}", serde_json::to_string_pretty(&cities).unwrap());
        return;
    }

    // ── Map region ──────────────────────────────────────────────

    if cli.region {
        let region = catalog::map_region();
        println!("{}", serde_json::to_string_pretty(&region).unwrap());
        return;
    }

    // ── Full listing ────────────────────────────────────────────

    if cli.list {
        let cities = catalog::all_entries();
        for city in &cities {
            eprintln!("  {}", city);
        }
        println!("{}", serde_json::to_string_pretty(&cities).unwrap());
        return;
    }

    eprintln!("Error: No action specified.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  micities --list");
    eprintln!("  micities --id 16");
    eprintln!("  micities --sample 5");
    eprintln!("  micities --region");
    eprintln!("  micities --serve --port 8080");
    std::process::exit(1);
}
