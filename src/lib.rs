// SPDX-License-Identifier: MPL-2.0
//! `cad_folio` is a desktop portfolio page built with the Iced GUI framework.
//!
//! The page lists projects with category filters and mechanical-design
//! cards. Each design card opens a modal gallery with keyboard navigation,
//! a thumbnail strip and asynchronous image loading.

#![doc(html_root_url = "https://docs.rs/cad_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod portfolio;
pub mod ui;
