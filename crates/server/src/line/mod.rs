//! LINE Messaging API webhook types and request signing.

pub mod events;
pub mod signature;
