// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use serde::{Deserialize, Serialize};

/// One atom parsed out of an XYZ coordinate block.
///
/// `index` is 1-based and counts accepted atoms, not raw input lines.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub index: usize,
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AtomRecord {
    pub fn new(index: usize, symbol: String, x: f64, y: f64, z: f64) -> Self {
        Self {
            index,
            symbol,
            x,
            y,
            z,
        }
    }
}
