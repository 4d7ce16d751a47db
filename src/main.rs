use sphinx_inventory::{HttpFetcher, SphinxInventory};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <inventory-url> [name ...]", args[0]);
        std::process::exit(1);
    }

    let url = &args[1];
    let names = &args[2..];

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("ERROR: Failed to set up HTTP client");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let report = |category: &str, message: &str| eprintln!("{}: {}", category, message);
    let mut inventory = SphinxInventory::new(fetcher, report);

    if inventory.try_load(url).is_err() {
        std::process::exit(1);
    }

    if names.is_empty() {
        println!("{} records, base url {}", inventory.len(), inventory.base_url());
        return;
    }

    let mut missing = false;
    for name in names {
        match inventory.get_link(name) {
            Some(link) => println!("{}", link),
            None => {
                println!("{}: not found", name);
                missing = true;
            }
        }
    }
    if missing {
        std::process::exit(2);
    }
}
