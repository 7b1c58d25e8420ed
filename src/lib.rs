// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              local / thunderstore
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   project     config      |
//!              | locate, manifest, TOML +  |
//!              | artifacts     env layers  |
//!              '-----+---------------+-----'
//!                    |               |
//!                    v               v
//!                 deploy          package
//!              r2modman copy   Thunderstore zip
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod deploy;
pub mod error;
pub mod logging;
pub mod package;
pub mod project;
pub mod utility;
