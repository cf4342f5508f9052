use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Best-effort read of a `.env` file.
///
/// The file is optional: Ansible invokes the inventory unconditionally, so a
/// missing or broken file must yield an empty mapping rather than an error.
/// `source` records whether a file was actually read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    #[allow(dead_code)]
    pub source: Source,
    pub vars: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A regular file existed and was read as UTF-8.
    File,
    /// No regular file at the path, or the read failed.
    Absent,
}

impl EnvFile {
    pub fn read(path: &Path) -> Self {
        if path.as_os_str().is_empty() || !path.is_file() {
            return Self::absent();
        }
        match fs::read_to_string(path) {
            Ok(contents) => Self {
                source: Source::File,
                vars: parse(&contents),
            },
            Err(_) => Self::absent(),
        }
    }

    fn absent() -> Self {
        Self {
            source: Source::Absent,
            vars: HashMap::new(),
        }
    }
}

/// Parse `KEY=VALUE` lines. Empty lines, `#` comments and lines without `=`
/// are skipped; later duplicate keys overwrite earlier ones.
fn parse(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = strip_quotes(value.trim());
            vars.insert(key.to_string(), value.to_string());
        }
    }

    vars
}

/// Strip exactly one outer pair of matching double or single quotes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
