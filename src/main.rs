use std::io;
use std::path::PathBuf;

use clap::Parser;

use disha::banner::{BannerInfo, print_banner};
use disha::catalog::Catalog;
use disha::config::Config;
use disha::narrator::anthropic::AnthropicNarrator;
use disha::session::Session;
use disha::store::UserStore;

#[derive(Parser)]
#[command(name = "disha", version, about = "A compass needle for student internships.")]
struct Cli {
    /// Path to the user record store
    #[arg(long)]
    users: Option<PathBuf>,

    /// Path to the internship catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Model used to phrase the results
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.users, cli.catalog, cli.model)?;

    // Catalog problems are fatal; a missing store is just a first run
    let catalog = Catalog::load(&config.catalog_path)?;
    let mut store = UserStore::load(&config.store_path)?;

    print_banner(&BannerInfo {
        model: &config.model,
        catalog_path: &config.catalog_path,
        listings: catalog.len(),
        store_path: &config.store_path,
        known_users: store.len(),
    });

    let narrator = AnthropicNarrator::new(Some(config.model.clone()), config.api_key.clone());

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut session = Session::new(stdin, stdout, &mut store, &catalog, &narrator);
    let reply = session.run().await?;

    println!("\n🤖 {reply}");
    Ok(())
}
