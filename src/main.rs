mod cli;
mod envfile;
mod inventory;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use cli::Args;
use envfile::EnvFile;

fn main() -> Result<()> {
    // Ansible treats any non-JSON response as a broken inventory plugin, so
    // unrecognized invocations fall through to the default output instead of
    // clap's error exit.
    let args = Args::try_parse().unwrap_or_default();

    let env_path = args
        .env_file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_env_path);

    let env_file = EnvFile::read(&env_path);
    let environ: HashMap<String, String> = std::env::vars().collect();
    let inv = inventory::build_inventory(&env_file.vars, &environ, dirs::home_dir().as_deref());

    if args.list {
        println!("{}", serde_json::to_string(&inv)?);
        return Ok(());
    }

    if let Some(name) = args.host.as_deref() {
        let hostvars = inv.meta.hostvars.get(name).cloned().unwrap_or_default();
        println!("{}", serde_json::to_string(&hostvars)?);
        return Ok(());
    }

    if inv.shopana.hosts.is_empty() {
        eprintln!("SHOPANA_HOST is empty. Provide it via .env or environment variables.");
        eprintln!("Expected path: {}", env_path.display());
    }
    println!("{}", serde_json::to_string(&inv)?);
    Ok(())
}

/// `.env` lives one directory above the binary, so resolution does not
/// depend on the directory Ansible happens to run from.
fn default_env_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(|dir| dir.join(".env")))
        .unwrap_or_else(|| PathBuf::from(".env"))
}
