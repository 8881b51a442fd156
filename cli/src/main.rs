//! CLI for browsing the ecsite catalog and managing a session cart
//!
//! Cart contents and the login flag survive between invocations in a
//! session directory; everything else is fetched or reset on every run.
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! ecsite-cli --help
//!
//! # list the catalog
//! ecsite-cli items
//!
//! # log in, add two large items to the cart and check out
//! ecsite-cli login 1
//! ecsite-cli cart add 3 --size L --quantity 2
//! ecsite-cli checkout
//!
//! # start over with an empty cart, logged out
//! ecsite-cli reset
//! ```
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use ecsite_store::{
    catalog::{self, CatalogFetcher, HttpCatalogFetcher},
    persist,
    storage::{FileStorage, SessionStorage},
    store::{Dispatcher, StateGetter, Store, action::Action, derived},
    types::{CartPayload, Item, OrderItem, SIZE_L, SIZE_M},
};
use itertools::Itertools;
use log::*;
use std::{fs, path::PathBuf, rc::Rc};

use crate::config::{Config, ConfigManager};

#[doc(hidden)]
mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI for browsing the ecsite catalog and managing a session cart
struct Args {
    /// Output results in json instead of table text
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Only print results nothing else
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,

    /// Prints debug logs including those from ecsite-store
    #[arg(long, default_value_t = false, global = true)]
    debug: bool,

    /// Directory holding the session storage
    #[arg(long, global = true)]
    session_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the catalog, cheapest first
    Items,

    /// Log in as the given user
    Login {
        /// ID of the user
        user_id: String,
    },

    /// Log out
    Logout,

    /// Show or change the cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// Proceed to checkout with the current cart
    Checkout,

    /// Discard the persisted session (login flag and cart)
    Reset,

    /// Show or change the configuration
    Config {
        /// Catalog endpoint to fetch items from
        #[arg(long)]
        catalog_url: Option<String>,

        /// Session storage key the cart is persisted under
        #[arg(long)]
        storage_key: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum CartCommand {
    /// Print the cart with subtotals
    List,

    /// Add a catalog item to the cart
    Add {
        /// ID of the catalog item
        item_id: i64,

        /// Size selection
        #[arg(short, long, default_value = SIZE_M, value_parser = [SIZE_M, SIZE_L])]
        size: String,

        /// Number of units
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove the cart entry at a position (negative counts from the end)
    Remove {
        /// Zero-based position of the entry
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "ecsite-cli")
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn get_config_path(args: &Args) -> Result<String> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => {
            let project_dir = get_project_dirs()?;
            let config_dir = project_dir.config_dir();
            fs::create_dir_all(config_dir)?;
            config_dir.join("config.yml")
        }
    };

    let config_file_path = path
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();

    Ok(config_file_path)
}

#[doc(hidden)]
fn get_session_dir(args: &Args) -> Result<PathBuf> {
    match &args.session_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(get_project_dirs()?.cache_dir().join("session")),
    }
}

#[doc(hidden)]
fn print_config(args: &Args, config_path: &str, config: &Config) -> Result<()> {
    if args.json {
        let j: String = serde_json::to_string(config)?;
        println!("{}", j);
    } else {
        let mut table = prettytable::Table::new();
        table.add_row(prettytable::row!["KEY", "VALUE"]);
        table.add_row(prettytable::row!["path", config_path]);
        table.add_row(prettytable::row!["catalog_url", config.catalog_url]);
        table.add_row(prettytable::row!["storage_key", config.storage_key]);
        table.printstd();
    }

    Ok(())
}

#[doc(hidden)]
fn print_items(args: &Args, items: &[Item]) -> Result<()> {
    info!("catalog:");

    if args.json {
        let j: String = serde_json::to_string(items)?;
        println!("{}", j);
    } else {
        let mut table = prettytable::Table::new();

        table.add_row(prettytable::row![
            "ID",
            "NAME",
            "PRICE_M",
            "PRICE_L",
            "DELETED",
            "DESCRIPTION",
        ]);

        for item in items {
            table.add_row(prettytable::row![
                item.id,
                item.name,
                item.price_m,
                item.price_l,
                item.deleted,
                item.description
            ]);
        }

        table.printstd();
    }

    Ok(())
}

#[doc(hidden)]
fn print_cart(args: &Args, cart: &[OrderItem], total: u64) -> Result<()> {
    info!("cart:");

    if args.json {
        let j: String = serde_json::to_string(cart)?;
        println!("{}", j);
    } else {
        let mut table = prettytable::Table::new();

        table.add_row(prettytable::row![
            "#", "ITEM", "SIZE", "QUANTITY", "TOPPINGS", "SUBTOTAL",
        ]);

        for (index, entry) in cart.iter().enumerate() {
            let toppings = entry
                .order_topping_list
                .iter()
                .map(|t| t.topping.name.as_str())
                .join(", ");
            table.add_row(prettytable::row![
                index,
                entry.item.name,
                entry.size,
                entry.quantity,
                toppings,
                entry.subtotal()
            ]);
        }

        table.add_row(prettytable::row!["", "", "", "", "TOTAL", total]);
        table.printstd();
    }

    Ok(())
}

#[doc(hidden)]
fn print_current_cart(args: &Args, store: &Store) -> Result<()> {
    let state = store.get_state();
    print_cart(args, &derived::cart_list(&state), derived::cart_total(&state))
}

#[doc(hidden)]
fn new_order_item(store: &Store, item: Item, size: String, quantity: u32) -> OrderItem {
    let id = store
        .get_state()
        .cart_list
        .iter()
        .map(|entry| entry.id)
        .max()
        .unwrap_or(0)
        + 1;

    OrderItem {
        id,
        item_id: item.id,
        order_id: 0,
        quantity,
        size,
        item,
        order_topping_list: Vec::new(),
    }
}

#[doc(hidden)]
fn process_cart(
    args: &Args,
    command: &CartCommand,
    store: &Store,
    fetcher: &dyn CatalogFetcher,
) -> Result<()> {
    match command {
        CartCommand::List => {}
        CartCommand::Add {
            item_id,
            size,
            quantity,
        } => {
            catalog::fetch_catalog(store, fetcher)?;

            let item = derived::item_list(&store.get_state())
                .iter()
                .find(|i| i.id == *item_id && !i.deleted)
                .cloned()
                .ok_or_else(|| eyre!("item {} not found in catalog", item_id))?;

            debug!("adding item to cart: {:?}", item);

            let entry = new_order_item(store, item, size.clone(), *quantity);
            store.dispatch(Action::AppendToCart(CartPayload::from(entry)));
        }
        CartCommand::Remove { index } => {
            store.dispatch(Action::RemoveFromCartAt(*index));
        }
    }

    print_current_cart(args, store)
}

#[doc(hidden)]
fn checkout(args: &Args, store: &Store) -> Result<()> {
    let state = store.get_state();

    if !derived::login_status(&state) {
        return Err(eyre!("login required before checkout"));
    }

    if state.cart_list.is_empty() {
        return Err(eyre!("cart is empty"));
    }

    store.dispatch(Action::SetProceededToCheckout);

    info!("proceeding to checkout");
    print_current_cart(args, store)
}

#[doc(hidden)]
fn run(
    args: &Args,
    store: &Store,
    storage: &dyn SessionStorage,
    fetcher: &dyn CatalogFetcher,
    config_manager: &mut ConfigManager,
) -> Result<()> {
    match &args.command {
        Command::Items => {
            catalog::fetch_catalog(store, fetcher)?;
            print_items(args, derived::item_list(&store.get_state()))
        }
        Command::Login { user_id } => {
            store.dispatch(Action::SetLoggedIn);
            store.dispatch(Action::SetUserId(user_id.clone()));
            info!("logged in as {}", user_id);
            Ok(())
        }
        Command::Logout => {
            store.dispatch(Action::SetLoggedOut);
            info!("logged out");
            Ok(())
        }
        Command::Cart(command) => process_cart(args, command, store, fetcher),
        Command::Checkout => checkout(args, store),
        Command::Reset => {
            persist::clear(storage, &config_manager.get().storage_key)?;
            info!("session cleared");
            Ok(())
        }
        Command::Config {
            catalog_url,
            storage_key,
        } => {
            if catalog_url.is_some() || storage_key.is_some() {
                let current = config_manager.get().clone();
                config_manager.update_config(Config {
                    catalog_url: catalog_url.clone().unwrap_or(current.catalog_url),
                    storage_key: storage_key.clone().unwrap_or(current.storage_key),
                })?;
            }
            print_config(args, config_manager.path(), config_manager.get())
        }
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let mut config_manager = ConfigManager::builder()
        .path(get_config_path(&args)?)
        .build()?;

    let config = config_manager.get().clone();
    let session_dir = get_session_dir(&args)?;

    debug!("config:      {:?}", config);
    debug!("session_dir: {}", session_dir.display());

    let storage = Rc::new(FileStorage::new(session_dir));
    let store = persist::create_store(storage.clone(), &config.storage_key);

    let fetcher = HttpCatalogFetcher::builder()
        .url(config.catalog_url)
        .build()?;

    run(&args, &store, &*storage, &fetcher, &mut config_manager)
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
