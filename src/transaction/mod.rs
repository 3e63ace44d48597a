/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Transactions: outputs with masked amounts, spend credentials, the signed prefix,
//! and the RingCT signature binding them together.

mod amount;
mod output;
mod input;
mod prefix;
mod rct_bulletproofs;
mod builder;

pub use amount::MaskedAmount;
pub use output::{TxOut, OutputAndSharedSecret};
pub use input::InputCredential;
pub use prefix::{TxIn, TxPrefix};
pub use rct_bulletproofs::{InputSecret, SignatureRctBulletproofs};
pub use builder::{Tx, TransactionBuilder};
