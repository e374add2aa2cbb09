// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports implemented by infrastructure adapters.

pub mod port;
