/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;
use crate::address::{PublicAddress, onetime_keys::*};
use super::amount::MaskedAmount;

///A transaction output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxOut {
    ///The committed and masked amount.
    pub masked_amount: MaskedAmount,
    ///The one-time public key which owns this output.
    pub target_key: RistrettoPoint,
    ///The transaction public key `R`, from which the recipient derives the shared secret.
    pub public_key: RistrettoPoint,
    ///Opaque hint for the recipient's view server, may be empty.
    #[serde(with = "hex::serde")]
    pub e_fog_hint: Vec<u8>

} impl TxOut {
    ///Create an output of `value` to `recipient` with transaction private key `tx_private_key`.
    pub fn new(value: u64, recipient: &PublicAddress, tx_private_key: &Scalar, e_fog_hint: Vec<u8>) -> Self {
        let shared_secret = create_shared_secret(&recipient.view, tx_private_key);
        return Self {
            masked_amount: MaskedAmount::new(value, &shared_secret),
            target_key: create_onetime_public_key(tx_private_key, recipient),
            public_key: create_tx_public_key(tx_private_key, recipient),
            e_fog_hint
        }
    }

    ///The public parts a ring signature needs.
    pub fn reduce(&self) -> ReducedTxOut {
        return ReducedTxOut {
            public_key: self.public_key,
            target_key: self.target_key,
            commitment: self.masked_amount.commitment
        }
    }

    ///The shared secret `a * R` seen by the holder of view private key `a`.
    pub fn shared_secret(&self, view_private_key: &Scalar) -> RistrettoPoint {
        return create_shared_secret(&self.public_key, view_private_key)
    }

    ///Unmask this output's value and blinding with the recipient's view private key.
    pub fn get_value(&self, view_private_key: &Scalar) -> Result<(u64, Scalar), TransactionError> {
        return self.masked_amount.get_value(&self.shared_secret(view_private_key))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for TxOut {}

///A freshly built output, with the sender's side of its shared secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputAndSharedSecret {
    pub tx_out: TxOut,
    pub shared_secret: RistrettoPoint,
    ///Last block in which the recipient's fog public key is valid, if any.
    pub pubkey_expiry: Option<u64>

} impl OutputAndSharedSecret {
    ///Build an output of `value` to `recipient` and keep its shared secret.
    pub fn new(value: u64, recipient: &PublicAddress, tx_private_key: &Scalar, e_fog_hint: Vec<u8>) -> Self {
        return Self {
            tx_out: TxOut::new(value, recipient, tx_private_key, e_fog_hint),
            shared_secret: create_shared_secret(&recipient.view, tx_private_key),
            pubkey_expiry: None
        }
    }

    ///Limit the transaction's tombstone block to `expiry`.
    pub fn with_pubkey_expiry(mut self, expiry: u64) -> Self {
        self.pubkey_expiry = Some(expiry);
        return self
    }

    ///The value and blinding of the output, recovered from the shared secret.
    pub fn value_with_blinding(&self) -> Result<(u64, Scalar), TransactionError> {
        return self.tx_out.masked_amount.get_value(&self.shared_secret)
    }
}
