// SPDX-License-Identifier: MPL-2.0
//! Portfolio page content and the page-level presentation state around it.
//!
//! - [`catalog`] - TOML catalog of projects, design cards and skills
//! - [`filter`] - Project category filter
//! - [`reveal`] - Card entrance states (`Hidden`, `Entering`, `Visible`)

pub mod catalog;
pub mod filter;
pub mod reveal;

pub use catalog::{Catalog, DesignCard, Project, Skill};
pub use filter::ProjectFilter;
pub use reveal::{Reveal, RevealSchedule};
