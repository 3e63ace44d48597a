/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!RingCT ring signatures
//!
//!Given a ring containing the spent output (along with decoys), its one-time private key,
//!and a pseudo-output commitment, create a ring signature which proves that:
//! 1. the output's one-time key authorizes the signature, without revealing which output is being spent
//! 2. the key image (accessible with `signature.key_image`) is correct
//! 3. the pseudo-output commits to the same value as the spent output

mod mlsag;
mod signature_utils;

pub use mlsag::{RingMLSAG, MlsagSignParams};
pub use signature_utils::key_image;
