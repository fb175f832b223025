//! Outbound adapters implementing domain ports.

pub mod postal_pincode;
