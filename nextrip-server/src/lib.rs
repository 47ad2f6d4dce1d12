//! Metro Transit departure server.
//!
//! Answers "when is the next train or bus?" for a route, stop and direction
//! with short plain-text lines, suitable for shortcuts, widgets and chat
//! bots. Predictions come from Metro Transit's NexTrip API.

pub mod config;
pub mod domain;
pub mod format;
pub mod nextrip;
pub mod web;
