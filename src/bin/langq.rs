// CLASSIFICATION: COMMUNITY
// Filename: langq.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-12-08

//! Query tool for installed language modules.

use clap::{Parser, Subcommand};

use langlib::config;
use langlib::languages;
use langlib::registry::LanguageRegistry;

#[derive(Parser)]
#[command(about = "Locale language module query tool")]
struct Cli {
    /// Language module to open; defaults to the configured language.
    #[arg(long)]
    lang: Option<String>,
    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Look up one or more catalog string ids
    Lookup { ids: Vec<u32> },
    /// Show module identity and capability mask
    Info,
    /// List installed language modules
    List,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let registry = LanguageRegistry::global();
    languages::install_bundled(registry)?;
    let name = cli.lang.unwrap_or_else(config::default_language);

    match cli.cmd {
        Cmd::List => {
            for installed in registry.installed()? {
                println!("{installed}");
            }
        }
        Cmd::Info => {
            let handle = registry.open(&name)?;
            let info = handle.info();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "name": info.name,
                        "native_name": info.native_name,
                        "version": info.version,
                        "revision": info.revision,
                        "mask": handle.mask().bits(),
                    }))?
                );
            } else {
                println!(
                    "{} ({}) {}.{} mask=0x{:x}",
                    info.name,
                    info.native_name,
                    info.version,
                    info.revision,
                    handle.mask().bits()
                );
            }
        }
        Cmd::Lookup { ids } => {
            let handle = registry.open(&name)?;
            if cli.json {
                let mut out = serde_json::Map::new();
                for id in ids {
                    out.insert(id.to_string(), handle.lang_string(id).into());
                }
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for id in ids {
                    match handle.lang_string(id) {
                        Some(s) => println!("{id}\t{s}"),
                        None => println!("{id}\t<absent>"),
                    }
                }
            }
        }
    }
    Ok(())
}
