pub mod types;

use std::collections::HashMap;
use std::path::Path;

use types::{Group, HostVars, Inventory, Meta};

/// The single host this inventory describes.
pub const TARGET_HOST: &str = "shopana_target";

const KEY_HOST: &str = "SHOPANA_HOST";
const KEY_USER: &str = "SHOPANA_USER";
const KEY_PORT: &str = "SHOPANA_SSH_PORT";
const KEY_SSH_KEY: &str = "SHOPANA_SSH_KEY";

const FALLBACK_KEYS: [&str; 4] = [KEY_HOST, KEY_USER, KEY_PORT, KEY_SSH_KEY];

const DEFAULT_USER: &str = "ubuntu";
const DEFAULT_PORT: u16 = 22;

/// Build the inventory document from `.env` values, with process environment
/// fallbacks. File values win: the environment only fills keys the file left
/// empty or unset.
pub fn build_inventory(
    file_vars: &HashMap<String, String>,
    environ: &HashMap<String, String>,
    home: Option<&Path>,
) -> Inventory {
    let mut effective = file_vars.clone();
    for key in FALLBACK_KEYS {
        if effective.get(key).map_or(true, |v| v.is_empty()) {
            if let Some(value) = environ.get(key) {
                if !value.is_empty() {
                    effective.insert(key.to_string(), value.clone());
                }
            }
        }
    }

    let host = lookup(&effective, KEY_HOST, "");
    let user = lookup(&effective, KEY_USER, DEFAULT_USER);
    let port = lookup(&effective, KEY_PORT, "22");
    let key_path = lookup(&effective, KEY_SSH_KEY, "");

    let hostvars = if host.is_empty() {
        HostVars::default()
    } else {
        HostVars {
            ansible_host: Some(host.to_string()),
            ansible_user: Some(user.to_string()),
            ansible_port: Some(parse_port(port)),
            ansible_ssh_private_key_file: if key_path.is_empty() {
                None
            } else {
                Some(expand_tilde(key_path, home))
            },
        }
    };

    let hosts = if host.is_empty() {
        Vec::new()
    } else {
        vec![TARGET_HOST.to_string()]
    };

    let mut all_hostvars = HashMap::new();
    all_hostvars.insert(TARGET_HOST.to_string(), hostvars);

    Inventory {
        meta: Meta {
            hostvars: all_hostvars,
        },
        shopana: Group { hosts },
    }
}

/// The value for `key` if present and non-empty, else `default`. Trimmed.
fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str, default: &'a str) -> &'a str {
    match vars.get(key) {
        Some(value) if !value.is_empty() => value.trim(),
        _ => default,
    }
}

/// A port must be all digits and fit in u16; anything else falls back to 22.
fn parse_port(raw: &str) -> u16 {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().unwrap_or(DEFAULT_PORT)
    } else {
        DEFAULT_PORT
    }
}

/// Expand a leading `~` or `~/` to the home directory. `~user` forms and
/// mid-path tildes are left alone.
fn expand_tilde(raw: &str, home: Option<&Path>) -> String {
    match home {
        Some(home) => {
            if raw == "~" {
                home.display().to_string()
            } else if let Some(rest) = raw.strip_prefix("~/") {
                home.join(rest).display().to_string()
            } else {
                raw.to_string()
            }
        }
        None => raw.to_string(),
    }
}
