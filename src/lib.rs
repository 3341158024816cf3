//! Mixdeck - recorded mix library manager
//!
//! This crate manages a library of recorded DJ mixes: listing, playback
//! selection, simulated export to mp3/wav/flac, simulated download and deletion.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Catalog, settings, export session state machine, errors
//! - **Application**: The recording panel use case and port interfaces (traits)
//! - **Infrastructure**: Simulated exporter/transfer, notifiers, config store, logging
//! - **CLI**: Command-line interface, interactive shell and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
