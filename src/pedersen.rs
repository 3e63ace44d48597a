/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Pedersen commitments

use serde::{Serialize, Deserialize};

use crate::curve::*;
use crate::hashes::*;

lazy_static! {
    ///Generators used for every amount commitment on the ledger.
    pub static ref LEDGER_PEDERSEN_GENS: PedersenGens = PedersenGens::ledger();
    ///The default Bulletproofs generators.
    pub static ref DEFAULT_PEDERSEN_GENS: PedersenGens = PedersenGens::default();
}

///A pair of independent base points `(B, B_blinding)`.
///
///`commit(v, r) = v * B + r * B_blinding`
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PedersenGens {
    ///Base for the committed value.
    pub B: RistrettoPoint,
    ///Base for the blinding factor.
    pub B_blinding: RistrettoPoint

} impl PedersenGens {
    ///Commit to `value` with blinding factor `blinding`.
    pub fn commit(&self, value: Scalar, blinding: Scalar) -> RistrettoPoint {
        return RistrettoPoint::multiscalar_mul(&[value, blinding], &[self.B, self.B_blinding])
    }

    ///The ledger's amount generators:
    ///`B` is the basepoint hashed to a point, and `B_blinding` is the basepoint itself.
    ///
    ///This way a difference of two commitments to the same value is a multiple of the basepoint.
    pub fn ledger() -> Self {
        return Self {
            B: hash_to_point(&G_POINT),
            B_blinding: G_POINT
        }
    }

} impl Default for PedersenGens {
    ///`B` is the basepoint, `B_blinding` is SHA3-512 of the basepoint's encoding mapped to a point.
    fn default() -> Self {
        return Self {
            B: G_POINT,
            B_blinding: sha3_h_point(&encode_point(&G_POINT))
        }
    }
}
