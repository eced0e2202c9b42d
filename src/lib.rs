//! Hiring Cost Engine library crate.
//!
//! This crate exposes a pure, synchronous engine for estimating the
//! fully-loaded cost of hiring an employee: staff time per hiring
//! phase, direct spend, productivity loss during onboarding, the cost
//! of the vacant position and a probability-weighted bad-hire risk.
//! External applications depend on the `hirecost_engine` crate and
//! call into `engine::compute_totals` with an input snapshot and a
//! configuration value; presentation, persistence and rounding are
//! left to the caller.

pub mod models;
pub mod config;
pub mod pay;
pub mod blocks;
pub mod services;
pub mod risk;
pub mod warnings;
pub mod engine;
