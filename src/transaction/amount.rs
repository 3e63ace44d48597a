/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::internal_common::*;

///The committed amount of an output, with its value masked for the recipient.
///
///Both the value mask and the commitment blinding are derived from the
///ECDH shared secret between sender and recipient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaskedAmount {
    ///Commitment to the value over the ledger generators.
    pub commitment: Commitment,
    ///`value XOR mask`
    pub masked_value: u64

} impl MaskedAmount {
    ///Mask `value` and commit to it, with keys derived from `shared_secret`.
    pub fn new(value: u64, shared_secret: &RistrettoPoint) -> Self {
        return Self {
            commitment: Commitment::commit(value, Self::get_blinding(shared_secret)),
            masked_value: value ^ Self::get_value_mask(shared_secret)
        }
    }

    ///Unmask the value and check it against the commitment.
    ///
    ///Returns the value and its blinding factor.
    pub fn get_value(&self, shared_secret: &RistrettoPoint) -> Result<(u64, Scalar), TransactionError> {
        let value = self.masked_value ^ Self::get_value_mask(shared_secret);
        let blinding = Self::get_blinding(shared_secret);

        if Commitment::commit(value, blinding) != self.commitment {
            return Err(TransactionError::AmountVerificationFailed)
        }
        return Ok((value, blinding))
    }

    ///First 8 bytes (little-endian) of `Hs(amount value tag || shared_secret)`.
    pub fn get_value_mask(shared_secret: &RistrettoPoint) -> u64 {
        let scalar = domain_h_scalar(AMOUNT_VALUE_DOMAIN_TAG, &[&encode_point(shared_secret)]);
        let mut mask = [0u8; 8];
        mask.copy_from_slice(&scalar.as_bytes()[0..8]);
        return u64::from_le_bytes(mask)
    }

    ///`Hs(amount blinding tag || shared_secret)`
    pub fn get_blinding(shared_secret: &RistrettoPoint) -> Scalar {
        return domain_h_scalar(AMOUNT_BLINDING_DOMAIN_TAG, &[&encode_point(shared_secret)])
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for MaskedAmount {}
