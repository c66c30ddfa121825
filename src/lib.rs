// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Library root: selection geometry, crop export and the session model.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
