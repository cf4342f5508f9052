use std::collections::HashMap;

use serde::Serialize;

/// Connection variables for one host, shaped the way Ansible expects them
/// under `_meta.hostvars`. Serializes to `{}` when no host is configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HostVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_ssh_private_key_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub hostvars: HashMap<String, HostVars>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub hosts: Vec<String>,
}

/// The full dynamic inventory document (`--list` output): one fixed group
/// holding at most one host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inventory {
    #[serde(rename = "_meta")]
    pub meta: Meta,
    pub shopana: Group,
}
