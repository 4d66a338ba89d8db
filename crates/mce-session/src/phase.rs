//! Edit phase of a session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which form is active.
///
/// Every session starts in `Main`. The `Add*` phases are sub-forms that
/// return to `Main` when saved or abandoned. `Finishing` is terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPhase {
    #[default]
    Main,
    AddAuthor,
    AddUnit,
    AddVariable,
    Finishing,
}

impl EditPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::AddAuthor => "add author",
            Self::AddUnit => "add unit",
            Self::AddVariable => "add variable",
            Self::Finishing => "finishing",
        }
    }

    pub fn is_sub_form(&self) -> bool {
        matches!(self, Self::AddAuthor | Self::AddUnit | Self::AddVariable)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finishing)
    }
}

impl fmt::Display for EditPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
