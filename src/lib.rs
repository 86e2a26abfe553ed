// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod context;
pub mod db;
pub mod license;
pub mod models;
pub mod offline;
pub mod profile;
pub mod router;
pub mod store;
pub mod utils;
pub mod views;
