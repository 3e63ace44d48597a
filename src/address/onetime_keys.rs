/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! One-time keys of outputs sent to a subaddress `(C, D)`, with `C = a * D`.
//!
//! The sender picks a transaction private key `r` and publishes `R = r * D`.
//! Both sides then share the secret `r * C = a * R`, and the output's
//! one-time key is `P = Hs(r * C) * G + D`, spendable with `x = Hs(a * R) + d`.

use crate::internal_common::*;
use super::PublicAddress;

///Hash a shared secret to the scalar offset of a one-time key.
fn onetime_offset(shared_secret: &RistrettoPoint) -> Scalar {
    return domain_h_scalar(HASH_TO_SCALAR_DOMAIN_TAG, &[&encode_point(shared_secret)])
}

///ECDH: `private_key * public_key`
pub fn create_shared_secret(public_key: &RistrettoPoint, private_key: &Scalar) -> RistrettoPoint {
    return private_key * public_key
}

///The transaction public key `R = r * D`.
pub fn create_tx_public_key(tx_private_key: &Scalar, recipient: &PublicAddress) -> RistrettoPoint {
    return tx_private_key * recipient.spend
}

///The one-time key `P = Hs(r * C) * G + D`.
pub fn create_onetime_public_key(tx_private_key: &Scalar, recipient: &PublicAddress) -> RistrettoPoint {
    let shared_secret = create_shared_secret(&recipient.view, tx_private_key);
    return &onetime_offset(&shared_secret) * G + recipient.spend
}

///The one-time private key `x = Hs(a * R) + d`.
pub fn recover_onetime_private_key(
    tx_public_key: &RistrettoPoint,
    view_private_key: &Scalar,
    spend_private_key: &Scalar
) -> Scalar {
    let shared_secret = create_shared_secret(tx_public_key, view_private_key);
    return onetime_offset(&shared_secret) + spend_private_key
}

///Recover the subaddress spend key `D = P - Hs(a * R) * G` an output was sent to.
pub fn recover_public_subaddress_spend_key(
    view_private_key: &Scalar,
    onetime_public_key: &RistrettoPoint,
    tx_public_key: &RistrettoPoint
) -> RistrettoPoint {
    let shared_secret = create_shared_secret(tx_public_key, view_private_key);
    return onetime_public_key - &onetime_offset(&shared_secret) * G
}
