/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use blake2::{
    Blake2b,
    Digest,
    digest::consts::U64
};
use sha3::Sha3_512;

use crate::curve::*;
use crate::constants::HASH_TO_POINT_DOMAIN_TAG;

type Blake2b512 = Blake2b<U64>;

///Hash a domain tag followed by `data` to 64 bytes.
///The tag is absorbed first, then each part in order.
pub fn domain_h_wide(domain: &[u8], data: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Blake2b512::default();
    hasher.update(domain);
    for part in data {
        hasher.update(part);
    }
    let mut wide = [0u8; 64];
    wide.copy_from_slice(hasher.finalize().as_slice());
    return wide
}

///Hash bytes to scalar, domain separated (wide reduction).
pub fn domain_h_scalar(domain: &[u8], data: &[&[u8]]) -> Scalar {
    return Scalar::from_bytes_mod_order_wide(&domain_h_wide(domain, data))
}

///Hash bytes to elliptic curve point, domain separated.
pub fn domain_h_point(domain: &[u8], data: &[&[u8]]) -> RistrettoPoint {
    return RistrettoPoint::from_uniform_bytes(&domain_h_wide(domain, data))
}

///Map a public key to the point used for its key image: `Hp(P)`.
pub fn hash_to_point(point: &RistrettoPoint) -> RistrettoPoint {
    return domain_h_point(HASH_TO_POINT_DOMAIN_TAG, &[&encode_point(point)])
}

///Hash bytes to elliptic curve point with SHA3-512, no domain.
pub fn sha3_h_point(msg: &[u8]) -> RistrettoPoint {
    let mut hasher = Sha3_512::default();
    hasher.update(msg);
    let mut wide = [0u8; 64];
    wide.copy_from_slice(hasher.finalize().as_slice());
    return RistrettoPoint::from_uniform_bytes(&wide)
}
