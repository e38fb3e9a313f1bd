//! VybeBot Core Library
//!
//! The formatting and validation core of VybeBot, a Telegram bot for
//! Solana on-chain analytics backed by the Vybe Network API.
//!
//! This crate provides the pure functionality the bot layers build on:
//! - Converting numbers, dates and timestamps for display
//! - Validating user input (addresses, time ranges, limits)
//! - Rendering API response data into Telegram Markdown messages
//!
//! The Telegram transport, HTTP client and chart rendering live in
//! separate crates; nothing here performs I/O.

pub mod convert;
pub mod render;
pub mod validate;
