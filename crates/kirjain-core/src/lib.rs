//! Shared types and utilities for the kirjain letter game.
//!
//! - [`character`] -- character classification and simple case mapping
//! - [`case`] -- proper-noun capitalisation check
//! - [`keyboard`] -- the on-screen keyboard layout

pub mod case;
pub mod character;
pub mod keyboard;
