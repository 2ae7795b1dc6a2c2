use serde::{Deserialize, Serialize};

/// Closed set of entity kinds a parameter can map to.
///
/// Processable kinds yield a unit of work; `Display` and `Reserved` are
/// informational and never produce one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Reserved,
    Display,
    Message,
    Daemon,
    File,
    Computation,
    Batch,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::Display => "display",
            Self::Message => "message",
            Self::Daemon => "daemon",
            Self::File => "file",
            Self::Computation => "computation",
            Self::Batch => "batch",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reserved" => Some(Self::Reserved),
            "display" => Some(Self::Display),
            "message" => Some(Self::Message),
            "daemon" => Some(Self::Daemon),
            "file" => Some(Self::File),
            "computation" => Some(Self::Computation),
            "batch" => Some(Self::Batch),
            _ => None,
        }
    }

    /// Whether this kind produces a processing unit.
    pub fn is_processable(&self) -> bool {
        !matches!(self, Self::Display | Self::Reserved)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
