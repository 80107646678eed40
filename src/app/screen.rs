// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for top-level navigation.

use crate::error::Error;

/// Screens reachable from the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Showcase,
    Components,
    Effects,
}

impl Screen {
    /// All screens in display order; the first one is the default.
    pub const ALL: [Screen; 3] = [Screen::Showcase, Screen::Components, Screen::Effects];

    /// Stable string id, used by the `--section` flag.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Showcase => "showcase",
            Screen::Components => "components",
            Screen::Effects => "effects",
        }
    }

    /// Resolves a string id; ids outside the set are rejected.
    pub fn from_id(id: &str) -> Result<Screen, Error> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.id() == id)
            .ok_or_else(|| Error::InvalidSelection(id.to_string()))
    }

    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Screen::Showcase => "nav-showcase",
            Screen::Components => "nav-components",
            Screen::Effects => "nav-effects",
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::ALL[0]
    }
}
