/// A stored command-line snippet: how to do something, on what platform,
/// with which command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub id: i32,
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

/// Insert shape. Fields stay optional so a missing value travels to the
/// storage layer and fails its NOT NULL constraint there, rather than being
/// rejected up front.
#[derive(Debug, Clone, Default)]
pub struct NewCommand {
    pub how_to: Option<String>,
    pub platform: Option<String>,
    pub command_line: Option<String>,
}
