use auction_sim::{Auction, AuctionConfig, Outcome};

fn print_help() {
    eprintln!(
        r#"Auction Simulator - round-synchronized ascending auction

USAGE:
    auction-sim [OPTIONS]

OPTIONS:
    --config <PATH>     Load auction configuration from JSON file
    --seed <N>          Seed for bid increments and activation order
    --json              Print the final report as JSON
    --quiet             Only log warnings (ignored if RUST_LOG is set)
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter

EXAMPLES:
    # Run the built-in scenario
    auction-sim

    # Run a reproducible auction from a config file
    auction-sim --config auction.json --seed 42
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--seed" | "-s" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(value) => seed = Some(value),
                    None => {
                        eprintln!("Error: --seed requires an unsigned integer");
                        std::process::exit(1);
                    }
                }
            }
            "--json" => json = true,
            "--quiet" | "-q" => quiet = true,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Initialize logging
    let default_filter = if quiet { "warn" } else { "auction_sim=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let loaded = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            AuctionConfig::from_file(&path)
        }
        None => AuctionConfig::load_default(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if seed.is_some() {
        config.seed = seed;
    }

    let mut auction = match Auction::new(config) {
        Ok(auction) => auction,
        Err(e) => {
            eprintln!("Error: invalid auction configuration: {}", e);
            std::process::exit(1);
        }
    };

    let report = auction.run();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &report.outcome {
        Outcome::Sold { winner, price } => {
            println!("Auction over. Object sold to buyer {} for {}.", winner, price)
        }
        Outcome::Unsold => println!("Auction over. Item not sold as no bid met reserve price."),
    }
    println!("Auction ended");
    for buyer in &report.buyers {
        println!("Buyer {} {}.", buyer.name, buyer.status);
    }

    Ok(())
}
