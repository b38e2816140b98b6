//! Trolley operator CLI
//!
//! Drives the shopping flow against a configured row-store endpoint: list
//! the catalog, or run one claim → scan → checkout pass on a cart.

use std::process;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use trolley_app::{
    config::StoreConfig,
    context::AppContext,
    domain::{products::ProductsService as _, sessions::SessionsService as _},
};

#[derive(Debug, Parser)]
#[command(name = "trolley-app", about = "Trolley shopping CLI", long_about = None)]
struct Cli {
    /// Row-store endpoint URL
    #[arg(long, env = "TROLLEY_STORE_URL")]
    store_url: String,

    /// Row-store service API key
    #[arg(long, env = "TROLLEY_STORE_KEY", hide_env_values = true)]
    store_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the product catalog
    Products,
    /// Claim a cart, scan barcodes and check out
    Shop(ShopArgs),
}

#[derive(Debug, Args)]
struct ShopArgs {
    /// Cart code printed on the trolley QR label
    #[arg(long)]
    cart: String,

    /// Shopper identifier
    #[arg(long)]
    user: String,

    /// Product barcode to scan; repeat to scan several
    #[arg(long = "scan", required = true)]
    scans: Vec<String>,

    /// Payment method recorded on the order
    #[arg(long, default_value = "cash")]
    payment: String,

    /// Discount applied at checkout
    #[arg(long, default_value = "0")]
    discount: Decimal,
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<(), String> {
    let context = AppContext::from_config(StoreConfig::new(cli.store_url, cli.store_key))
        .map_err(|error| error.to_string())?;

    match cli.command {
        Commands::Products => list_products(&context).await,
        Commands::Shop(args) => shop(&context, args).await,
    }
}

async fn list_products(context: &AppContext) -> Result<(), String> {
    let products = context
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    for product in products {
        println!("{}  {}  {}", product.barcode, product.price, product.name);
    }

    Ok(())
}

async fn shop(context: &AppContext, args: ShopArgs) -> Result<(), String> {
    let session = context
        .sessions
        .start_session(&args.cart, &args.user)
        .await
        .map_err(|error| format!("failed to start session: {error}"))?;

    println!("session {} opened on cart {}", session.session_id, session.cart_id);

    for barcode in &args.scans {
        let item = context
            .sessions
            .add_item(barcode, session.session_id)
            .await
            .map_err(|error| format!("failed to scan {barcode}: {error}"))?;

        println!("scanned {}  x{}  {}", item.barcode, item.quantity, item.total_price);
    }

    let order = context
        .sessions
        .checkout(session.session_id, &args.payment, args.discount)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    println!(
        "order {}: total {}  discount {}  due {}",
        order.order_id, order.total_amount, order.discount_amount, order.final_amount
    );

    Ok(())
}
