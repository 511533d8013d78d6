use crate::format::Format;

pub struct Config {
    /// Output format the inventory is rendered in.
    pub format: Format,
    /// Host names to keep. Empty keeps every host.
    pub hosts: Vec<String>,
    /// Group names to keep. Empty keeps every group.
    ///
    /// Hosts are kept only if they belong to at least one of these groups.
    pub groups: Vec<String>,
    /// Suppresses informational terminal output (0 = normal).
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::Yaml,
            hosts: Vec::new(),
            groups: Vec::new(),
            quiet: 0,
        }
    }
}
