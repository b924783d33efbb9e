//! Benefits Engine
//!
//! This crate calculates employee paychecks: gross pay, benefit cost
//! deductions and net pay per pay period, based on salary, dependents and a
//! configurable set of benefit cost rules. It also exposes employees and
//! their paychecks through a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
