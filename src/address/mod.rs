/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Account keys and the stealth addressing used by transaction outputs.

use rand::{thread_rng, RngCore, CryptoRng};
use zeroize::Zeroize;

use crate::internal_common::*;

pub mod onetime_keys;
use onetime_keys::*;

///Private keys of an account: the view key `a` and the spend key `d`.
///
///These keys can view *and* spend funds sent to the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Zeroize)]
pub struct AccountKey {
    view_private_key: Scalar,
    spend_private_key: Scalar

} impl AccountKey {
    ///Import from private keys.
    pub fn from_keys(view_private_key: Scalar, spend_private_key: Scalar) -> Self {
        return Self { view_private_key, spend_private_key }
    }

    ///Generate random new keys.
    pub fn generate() -> Self {
        return Self::generate_with_rng(&mut thread_rng())
    }

    ///Generate new keys from `rng`.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        return Self::from_keys(random_scalar_with_rng(rng), random_scalar_with_rng(rng))
    }

    pub fn view_private_key(&self) -> &Scalar {
        return &self.view_private_key
    }

    pub fn spend_private_key(&self) -> &Scalar {
        return &self.spend_private_key
    }

    ///The public address: `D = d * G`, `C = a * D`.
    pub fn public_address(&self) -> PublicAddress {
        let spend = &self.spend_private_key * G;
        return PublicAddress {
            view: self.view_private_key * spend,
            spend
        }
    }

    ///The shared secret `a * R` with the sender of an output.
    pub fn shared_secret(&self, tx_public_key: &RistrettoPoint) -> RistrettoPoint {
        return create_shared_secret(tx_public_key, &self.view_private_key)
    }

    ///The one-time private key of an output sent to this account.
    pub fn onetime_private_key(&self, tx_public_key: &RistrettoPoint) -> Scalar {
        return recover_onetime_private_key(tx_public_key, &self.view_private_key, &self.spend_private_key)
    }

    ///Check whether an output with these keys was sent to this account.
    pub fn owns(&self, target_key: &RistrettoPoint, tx_public_key: &RistrettoPoint) -> bool {
        return recover_public_subaddress_spend_key(&self.view_private_key, target_key, tx_public_key)
            == &self.spend_private_key * G
    }

} impl Drop for AccountKey {
    fn drop(&mut self) {
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for AccountKey {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok([self.view_private_key.to_bytes(), self.spend_private_key.to_bytes()].concat())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 64 {
            return Err(SerializationError::DecodingError)
        }
        return Ok(Self::from_keys(decode_scalar(&bytes[0..32])?, decode_scalar(&bytes[32..64])?))
    }
}

///Public keys of an account: the view key `C` and the spend key `D`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicAddress {
    pub view: RistrettoPoint,
    pub spend: RistrettoPoint

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for PublicAddress {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok([encode_point(&self.view), encode_point(&self.spend)].concat())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 64 {
            return Err(SerializationError::DecodingError)
        }
        return Ok(Self {
            view: decode_point(&bytes[0..32])?,
            spend: decode_point(&bytes[32..64])?
        })
    }
}
