use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use metro_planner::context::normalize_station_id;
use metro_planner::gtfs::IngestConfig;
use metro_planner::history::{format_duration, format_stop, QueryHistory};
use metro_planner::web::{start_server, ServerConfig};
use metro_planner::{PlannerContext, Route, StationNames};

/// Stations listed per search in the terminal
const CLI_LIST_LIMIT: usize = 50;
/// History entries shown by the interactive menu
const HISTORY_SHOWN: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-time metro routes from a GTFS feed", long_about = None)]
struct Args {
    /// GTFS directory containing stops.txt, stop_times.txt and transfers.txt
    #[arg(long, global = true, default_value = "gtfs")]
    gtfs: PathBuf,

    /// Weight of explicit transfers without min_transfer_time, in seconds
    #[arg(long, global = true, default_value_t = 120)]
    default_transfer_secs: u32,

    /// Weight of transfers between platforms of one station, in seconds
    #[arg(long, global = true, default_value_t = 180)]
    station_transfer_secs: u32,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the fastest route between two stations
    Route { start: String, end: String },
    /// List stations whose id or name contains TERM
    Stations { term: Option<String> },
    /// Serve the JSON API over HTTP
    Serve {
        #[arg(short, long, default_value = "127.0.0.1")]
        address: Ipv4Addr,
        #[arg(short, long, default_value_t = 3005)]
        port: u16,
        /// Directory of static files served next to the API
        #[arg(long)]
        static_dir: Option<PathBuf>,
        #[arg(long)]
        no_cors: bool,
    },
    /// Menu-driven session with history and export
    Interactive {
        /// Where exported routes are written
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = IngestConfig {
        default_transfer_secs: args.default_transfer_secs,
        station_transfer_secs: args.station_transfer_secs,
        ..IngestConfig::default()
    };
    let planner = PlannerContext::from_gtfs(&args.gtfs, &config)?;
    info!("Loaded network from {}", args.gtfs.display());

    match args.cmd {
        Command::Route { start, end } => {
            let start = normalize_station_id(&start);
            let end = normalize_station_id(&end);
            match planner.route(&start, &end) {
                Ok(route) => print_route(&planner, &route),
                Err(err) => {
                    eprintln!("✗ {}", err);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Stations { term } => {
            list_stations(&planner, term.as_deref().unwrap_or(""));
        }
        Command::Serve {
            address,
            port,
            static_dir,
            no_cors,
        } => {
            let config = ServerConfig {
                host: address.octets(),
                port,
                static_dir,
                enable_cors: !no_cors,
            };
            println!("🚀 Serving on http://{}:{}", address, port);
            start_server(planner, config).await?;
        }
        Command::Interactive { export_dir } => {
            run_interactive(&planner, &export_dir)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_route(planner: &PlannerContext<u32>, route: &Route<u32>) {
    let (Some(start), Some(end)) = (route.path.first(), route.path.last()) else {
        return;
    };
    let names = &planner.names;
    let rule = "=".repeat(70);

    println!("✓ Route found\n");
    println!("{}", rule);
    println!("From: {} - {}", start, names.label(start));
    println!("To: {} - {}", end, names.label(end));
    println!(
        "Total time: {} s ({})",
        route.total_weight,
        format_duration(route.total_weight)
    );
    println!("Stations: {}", route.path.len());
    println!("{}\n", rule);
    for (i, id) in route.path.iter().enumerate() {
        println!("{}", format_stop(i + 1, id, names));
    }
    println!();
}

fn list_stations(planner: &PlannerContext<u32>, term: &str) {
    let total = planner.count_stations(term);
    if total == 0 {
        println!("✗ No matching stations");
        return;
    }

    println!("{} stations found:\n", total);
    for (i, (id, _)) in planner.search_stations(term, CLI_LIST_LIMIT).iter().enumerate() {
        println!("{}", format_stop(i + 1, id, &planner.names));
    }
    if total > CLI_LIST_LIMIT {
        println!("\n... and {} more", total - CLI_LIST_LIMIT);
    }
    println!();
}

fn show_history(history: &QueryHistory) {
    if history.is_empty() {
        println!("✗ No queries yet\n");
        return;
    }
    println!("Query history ({} total):\n", history.len());
    for (number, entry) in history.recent(HISTORY_SHOWN) {
        println!("{}. [{}]", number, entry.timestamp.format("%Y-%m-%d %H:%M:%S"));
        println!("   {} → {}", entry.start, entry.end);
        println!(
            "   {}, {} stations\n",
            format_duration(entry.duration_secs),
            entry.path.len()
        );
    }
}

fn show_help() {
    println!(
        "\
Commands:
  1  Find a route      fastest route between two station ids
  2  Search stations   match on id or name
  3  History           queries made in this session
  4  Export            write a past route to a text file
  5  Help              show this message
  0  Quit
"
    );
}

fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    lines.next().transpose().map(|line| line.map(|l| l.trim().to_string()))
}

fn run_interactive(planner: &PlannerContext<u32>, export_dir: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut history = QueryHistory::new();

    println!("Metro Route Planner - {} stations loaded\n", planner.count_stations(""));
    show_help();

    loop {
        let Some(choice) = prompt(&mut lines, "Choose (0-5): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(start) = prompt(&mut lines, "Start station id: ")? else { break };
                let Some(end) = prompt(&mut lines, "End station id: ")? else { break };
                let (start, end) = (normalize_station_id(&start), normalize_station_id(&end));
                match planner.route(&start, &end) {
                    Ok(route) => {
                        print_route(planner, &route);
                        history.record(&route);
                    }
                    Err(err) => println!("✗ {}\n", err),
                }
            }
            "2" => {
                let Some(term) = prompt(&mut lines, "Search term: ")? else { break };
                list_stations(planner, &term);
            }
            "3" => show_history(&history),
            "4" => {
                if history.is_empty() {
                    println!("✗ No queries yet\n");
                    continue;
                }
                show_history(&history);
                let Some(number) = prompt(&mut lines, "Number to export: ")? else { break };
                println!("{}\n", export_entry(&history, &number, &planner.names, export_dir));
            }
            "5" => show_help(),
            "0" => break,
            other => println!("✗ Unknown option {:?}, enter 0-5\n", other),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Exports the history entry the user typed and describes the outcome
fn export_entry(history: &QueryHistory, input: &str, names: &StationNames, export_dir: &Path) -> String {
    let Ok(number) = input.trim().parse::<usize>() else {
        return format!("✗ Enter a number between 1 and {}", history.len());
    };
    match history.export(number, names, export_dir) {
        Ok(path) => format!("✓ Exported to {}", path.display()),
        Err(err) => format!("✗ {}", err),
    }
}
