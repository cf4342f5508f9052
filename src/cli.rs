use clap::Parser;

/// Shopinv - Ansible dynamic inventory for the Shopana deploy target
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "shopinv", version, about)]
pub struct Args {
    /// Print the full inventory document as JSON
    #[arg(long, conflicts_with = "host")]
    pub list: bool,

    /// Print the hostvars of a single inventory host as JSON
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,

    /// Path to the .env file (defaults to the directory above the binary)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<String>,
}
