//! HTTP request handlers for the Summit API

pub mod index;
pub mod tracks;
pub mod trips;
