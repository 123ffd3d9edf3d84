//! Bridge kind value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which scripting bridge asks the IDE to open a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BridgeKind {
    /// `osascript` AppleScript `open` sent to a named application
    #[default]
    Osascript,
    /// Xcode's `xed` command line launcher
    Xed,
}

impl BridgeKind {
    /// All bridge kinds
    pub const ALL: [BridgeKind; 2] = [BridgeKind::Osascript, BridgeKind::Xed];

    /// Name as used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeKind::Osascript => "osascript",
            BridgeKind::Xed => "xed",
        }
    }
}

impl fmt::Display for BridgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BridgeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "osascript" | "applescript" => Ok(BridgeKind::Osascript),
            "xed" => Ok(BridgeKind::Xed),
            other => Err(format!(
                "unknown bridge '{}' (expected one of: osascript, xed)",
                other
            )),
        }
    }
}
