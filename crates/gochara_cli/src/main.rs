use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gochara_base::{
    BASE_DEG, CoordinateSystem, DRIFT_ARCSEC_PER_YEAR, LinearAyanamsha, REFERENCE_YEAR,
    deg_to_dms, nakshatra_from_longitude, rashi_from_longitude, resolve_longitude,
    sidereal_longitude,
};
use gochara_core::{LongitudeTable, SnapshotProvider, SummaryOptions, summarize};
use gochara_horizons::HorizonsClient;
use gochara_narrative::{NarrativeConfig, OpenAiNarrator, narrate};
use gochara_server::{ServerConfig, run_server};
use gochara_time::UtcTime;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gochara", about = "Daily graha positions, rashis and nakshatras")]
struct Cli {
    #[command(flatten)]
    ayanamsha: AyanamshaArgs,
    #[command(subcommand)]
    command: Commands,
}

/// Linear ayanamsha constants (default: Lahiri, 24.102 deg in 2025).
#[derive(Args, Debug, Clone, Copy)]
struct AyanamshaArgs {
    /// Reference year of the linear ayanamsha
    #[arg(long, global = true, default_value_t = REFERENCE_YEAR)]
    aya_reference_year: i32,
    /// Ayanamsha at the reference year, degrees
    #[arg(long, global = true, default_value_t = BASE_DEG)]
    #[arg(value_parser = finite_degrees)]
    aya_base: f64,
    /// Yearly drift, arcseconds
    #[arg(long, global = true, default_value_t = DRIFT_ARCSEC_PER_YEAR)]
    #[arg(value_parser = finite_degrees)]
    aya_drift_arcsec: f64,
}

impl AyanamshaArgs {
    fn model(&self) -> LinearAyanamsha {
        LinearAyanamsha::new(self.aya_reference_year, self.aya_base, self.aya_drift_arcsec)
    }
}

/// Where tropical longitudes come from.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// JSON file of tropical longitudes: {"Sun": 280.0, "Moon": 10.0, ...}
    #[arg(long, conflicts_with = "horizons")]
    table: Option<PathBuf>,
    /// Fetch longitudes from JPL Horizons
    #[arg(long)]
    horizons: bool,
    /// Horizons API endpoint
    #[arg(long, requires = "horizons")]
    horizons_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        lon: f64,
    },
    /// Linear ayanamsha for a year
    Ayanamsha {
        /// Calendar year (default: current UTC year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Tropical longitude in the requested system, with rashi and nakshatra
    Resolve {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        lon: f64,
        /// tropical or sidereal
        #[arg(long, default_value_t = CoordinateSystem::Sidereal)]
        system: CoordinateSystem,
        /// UTC date or datetime (YYYY-MM-DD[Thh:mm[:ss]][Z]); default now
        #[arg(long)]
        date: Option<UtcTime>,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true, value_parser = finite_degrees)]
        deg: f64,
    },
    /// Daily summary of the seven grahas
    Summary {
        /// UTC date or datetime; default now
        #[arg(long)]
        date: Option<UtcTime>,
        /// tropical or sidereal
        #[arg(long, default_value_t = CoordinateSystem::Sidereal)]
        system: CoordinateSystem,
        #[command(flatten)]
        source: SourceArgs,
        /// Also print the structured summary as JSON
        #[arg(long)]
        debug: bool,
        /// Append a language-model reflection (needs OPENAI_API_KEY)
        #[arg(long)]
        narrate: bool,
        /// Omit nakshatras
        #[arg(long)]
        no_nakshatra: bool,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, default_value_t = 3000)]
        port: u16,
        /// Answer every request for this instant instead of now
        #[arg(long)]
        date: Option<UtcTime>,
        #[command(flatten)]
        source: SourceArgs,
        /// Omit nakshatras
        #[arg(long)]
        no_nakshatra: bool,
    },
}

/// Angles must be finite; `nan` and `inf` parse as f64 but have no position.
fn finite_degrees(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{raw} is not a finite number of degrees"))
    }
}

enum Source {
    Table(LongitudeTable),
    Horizons(HorizonsClient),
}

fn load_source(args: &SourceArgs) -> Source {
    if let Some(path) = &args.table {
        let table = LongitudeTable::from_path(path).unwrap_or_else(|e| {
            eprintln!("Failed to load longitude table {}: {e}", path.display());
            std::process::exit(1);
        });
        return Source::Table(table);
    }
    if args.horizons {
        let client = match &args.horizons_url {
            Some(url) => HorizonsClient::with_base_url(url.clone()),
            None => HorizonsClient::new(),
        };
        return Source::Horizons(client);
    }
    eprintln!("No position source: pass --table <json> or --horizons");
    std::process::exit(1);
}

fn require_valid(utc: UtcTime) -> UtcTime {
    if let Err(e) = utc.validate() {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    }
    utc
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_rashi(lon: f64) {
    let info = rashi_from_longitude(lon);
    let dms = info.dms;
    println!(
        "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
        info.rashi.name(),
        info.rashi.western_name(),
        dms.degrees,
        dms.minutes,
        dms.seconds,
        info.degrees_in_rashi
    );
}

fn print_nakshatra(lon: f64) {
    let info = nakshatra_from_longitude(lon);
    println!(
        "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
        info.nakshatra.name(),
        info.nakshatra_index,
        info.pada,
        info.degrees_in_nakshatra
    );
}

async fn snapshot_of(source: &Source, utc: &UtcTime) -> LongitudeTable {
    let result = match source {
        Source::Table(table) => table.snapshot(utc).await,
        Source::Horizons(client) => client.snapshot(utc).await,
    };
    result.unwrap_or_else(|e| {
        eprintln!("Failed to fetch longitudes: {e}");
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    let model = cli.ayanamsha.model();
    debug!(?model, "ayanamsha model");

    match cli.command {
        Commands::Rashi { lon } => print_rashi(lon),

        Commands::Nakshatra { lon } => print_nakshatra(lon),

        Commands::Ayanamsha { year } => {
            let year = year.unwrap_or_else(|| UtcTime::now().year());
            let aya = model.at_year(year);
            println!("Ayanamsha {year}: {aya:.6} deg ({})", deg_to_dms(aya));
        }

        Commands::Resolve { lon, system, date } => {
            let utc = require_valid(date.unwrap_or_else(UtcTime::now));
            let resolved = resolve_longitude(lon, &utc, system, &model);
            println!("Ayanamsha: {:.4} deg", model.at(&utc));
            println!("{system}: {resolved:.4} deg");
            print_rashi(resolved);
            print_nakshatra(sidereal_longitude(lon, &utc, &model));
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            let sign = if deg < 0.0 { "-" } else { "" };
            println!(
                "{sign}{} deg {} min {:.4} sec",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Summary {
            date,
            system,
            source,
            debug,
            narrate: with_narrative,
            no_nakshatra,
        } => {
            let utc = require_valid(date.unwrap_or_else(UtcTime::now));
            let source = load_source(&source);
            let table = snapshot_of(&source, &utc).await;
            let options = SummaryOptions {
                nakshatras: !no_nakshatra,
            };
            let summary = summarize(&table, &utc, system, &model, options).unwrap_or_else(|e| {
                eprintln!("Failed to summarize: {e}");
                std::process::exit(1);
            });

            if with_narrative {
                let narrator = NarrativeConfig::from_env().narrator();
                let narration = narrate(&summary, narrator.as_ref()).await;
                println!("{}", narration.message(&summary.rendered));
            } else {
                println!("{}", summary.rendered);
            }

            if debug {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to encode summary: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Serve {
            host,
            port,
            date,
            source,
            no_nakshatra,
        } => {
            let config = ServerConfig {
                host,
                port,
                nakshatras: !no_nakshatra,
                ayanamsha: model,
                instant: date,
            };
            let narrator = NarrativeConfig::from_env().narrator();
            let result = match load_source(&source) {
                Source::Table(table) => {
                    run_server::<_, OpenAiNarrator>(config, table, narrator).await
                }
                Source::Horizons(client) => {
                    run_server::<_, OpenAiNarrator>(config, client, narrator).await
                }
            };
            if let Err(e) = result {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn summary_defaults() {
        let cli = Cli::try_parse_from(["gochara", "summary", "--table", "t.json"]).unwrap();
        match cli.command {
            Commands::Summary {
                system,
                source,
                debug,
                narrate,
                no_nakshatra,
                date,
            } => {
                assert_eq!(system, CoordinateSystem::Sidereal);
                assert_eq!(source.table, Some(PathBuf::from("t.json")));
                assert!(!source.horizons);
                assert!(!debug && !narrate && !no_nakshatra);
                assert!(date.is_none());
            }
            _ => panic!("expected summary"),
        }
        assert_eq!(cli.ayanamsha.model(), LinearAyanamsha::default());
    }

    #[test]
    fn table_and_horizons_conflict() {
        let parsed =
            Cli::try_parse_from(["gochara", "summary", "--table", "t.json", "--horizons"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_system_rejected() {
        let parsed = Cli::try_parse_from(["gochara", "resolve", "10", "--system", "draconic"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn non_finite_longitude_rejected() {
        assert!(Cli::try_parse_from(["gochara", "rashi", "nan"]).is_err());
        assert!(Cli::try_parse_from(["gochara", "nakshatra", "-inf"]).is_err());
        assert!(Cli::try_parse_from(["gochara", "--aya-base", "inf", "ayanamsha"]).is_err());
        assert!(Cli::try_parse_from(["gochara", "rashi", "-12.5"]).is_ok());
    }

    #[test]
    fn ayanamsha_flags_are_global() {
        let cli = Cli::try_parse_from([
            "gochara",
            "ayanamsha",
            "--year",
            "2030",
            "--aya-base",
            "23.5",
        ])
        .unwrap();
        assert_eq!(cli.ayanamsha.model().base_deg, 23.5);
    }

    #[test]
    fn serve_parses_date() {
        let cli = Cli::try_parse_from([
            "gochara",
            "serve",
            "--port",
            "8080",
            "--horizons",
            "--date",
            "2025-01-15",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { port, date, .. } => {
                assert_eq!(port, 8080);
                assert_eq!(date, Some(UtcTime::from_date(2025, 1, 15)));
            }
            _ => panic!("expected serve"),
        }
    }
}
