/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(non_snake_case)]

use crate::internal_common::*;

///Given a one-time private key `x`, return its key image `x * Hp(x * G)`
pub fn key_image(onetime_private_key: &Scalar) -> RistrettoPoint {
    let public_key = onetime_private_key * G;
    return onetime_private_key * hash_to_point(&public_key)
}

///The MLSAG challenge for the next ring position:
///`Hs(tag || message || I || L0 || R0 || L1)`
pub(crate) fn challenge(
    message: &[u8],
    key_image: &RistrettoPoint,
    L0: &RistrettoPoint,
    R0: &RistrettoPoint,
    L1: &RistrettoPoint
) -> Scalar {
    return domain_h_scalar(RING_MLSAG_CHALLENGE_DOMAIN_TAG, &[
        message,
        &encode_point(key_image),
        &encode_point(L0),
        &encode_point(R0),
        &encode_point(L1)
    ])
}
