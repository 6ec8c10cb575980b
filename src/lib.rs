// SPDX-License-Identifier: MPL-2.0
//! `recipe_lens` is a bilingual recipe browser built with the Iced GUI
//! framework.
//!
//! Recipes come either from a bundled English/Spanish dataset or from
//! TheMealDB (random batches or alphabetical pages loaded on scroll).
//! Language, theme and per-recipe cooking progress persist between runs.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod reactive;
pub mod recipe;
pub mod storage;
pub mod ui;
