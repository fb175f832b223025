//! Inbound adapters driving the domain.

pub mod cli;
