// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the
//! application, and a `view` taking a `ViewContext`.
//!
//! # Screens
//!
//! - [`recipe_list`] - Card grid with filtering and infinite scroll
//! - [`recipe_detail`] - Single recipe with cooking mode
//!
//! # Shared Infrastructure
//!
//! - [`cooking`] - Persisted cooking checklist
//! - [`language_toggle`] - Header language and theme buttons
//! - [`thumbnails`] - LRU cache of downloaded images
//! - [`theming`] - Persisted light/dark mode
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod cooking;
pub mod design_tokens;
pub mod language_toggle;
pub mod recipe_detail;
pub mod recipe_list;
pub mod styles;
pub mod theming;
pub mod thumbnails;
