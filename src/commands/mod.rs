// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cache;
pub mod categories;
pub mod exporter;
pub mod license;
pub mod nav;
pub mod plans;
pub mod profile;
pub mod reports;
pub mod transactions;
