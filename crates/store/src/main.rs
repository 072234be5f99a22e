use std::io::{self, BufRead, Write};

use clap::Parser;

use runway_catalog::CatalogClient;
use runway_store::commands::{self, Command};
use runway_store::view;
use runway_store::Session;

/// Interactive storefront client for the Runway catalog.
#[derive(Debug, Parser)]
#[command(name = "runway-store", version, about)]
struct Args {
    /// Endpoint serving the product catalog as a JSON array.
    #[arg(
        long,
        env = "RUNWAY_CATALOG_URL",
        default_value = "http://127.0.0.1:5173/public/database-response.json"
    )]
    catalog_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    runway_observability::init();
    let args = Args::parse();

    let client = CatalogClient::new(&args.catalog_url);
    let mut session = Session::new();
    session.load_catalog(&client).await;

    if let Some(message) = session.load_error() {
        println!("{message}");
        return Ok(());
    }

    println!("{}", view::header());
    println!();
    println!("{}", view::product_grid(&session.visible()));
    println!();
    println!("Type \"help\" for the list of commands.");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", commands::apply(&mut session, command)),
            Err(err) => println!("{err}"),
        }
    }

    println!("{}", view::footer());
    Ok(())
}
