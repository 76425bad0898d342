use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::pool::DbPool;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite store with its kv and log tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let store_path = cli.db.clone().unwrap_or_else(|| cfg.store.clone());

    println!("⚙️  Initializing evman…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Store      : {}", &store_path);

    // DbPool::open creates the schema on first contact
    let pool = DbPool::open(&store_path)?;
    ttlog(&pool, "init", "", "store initialized")?;

    println!("✅ Done.");
    Ok(())
}
