// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Action selection.
//!
//! ```text
//! []                       --> LOCAL | THUNDERSTORE
//! [thunderstore, local]    --> LOCAL | THUNDERSTORE
//! [local, local]           --> LOCAL
//! execution order is always: local, thunderstore
//! ```

use bitflags::bitflags;
use clap::ValueEnum;

/// A single action token on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    /// Copy build output into the local r2modman profile.
    Local,
    /// Build the Thunderstore package.
    Thunderstore,
}

impl Action {
    /// Execution order.
    pub const ALL: [Self; 2] = [Self::Local, Self::Thunderstore];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Thunderstore => "thunderstore",
        }
    }

    const fn flag(self) -> Actions {
        match self {
            Self::Local => Actions::LOCAL,
            Self::Thunderstore => Actions::THUNDERSTORE,
        }
    }
}

bitflags! {
    /// Set of actions to execute.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Actions: u8 {
        /// Deploy to the local profile.
        const LOCAL = 0x01;

        /// Write the Thunderstore package.
        const THUNDERSTORE = 0x02;
    }
}

impl Default for Actions {
    fn default() -> Self {
        Self::all()
    }
}

impl Actions {
    /// Builds the set from command-line tokens; no tokens selects everything.
    #[must_use]
    pub fn from_requested(requested: &[Action]) -> Self {
        if requested.is_empty() {
            return Self::all();
        }
        requested
            .iter()
            .fold(Self::empty(), |set, action| set | action.flag())
    }

    /// Selected actions in execution order.
    pub fn ordered(self) -> impl Iterator<Item = Action> {
        Action::ALL
            .into_iter()
            .filter(move |action| self.contains(action.flag()))
    }

    /// Comma-separated action names in execution order.
    #[must_use]
    pub fn describe(self) -> String {
        self.ordered()
            .map(Action::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
