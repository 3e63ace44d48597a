/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::iter::Sum;

use crate::tobytes::*;
use crate::curve::*;
use crate::pedersen::*;

///A pedersen commitment to an amount, over the ledger generators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment(
    pub RistrettoPoint

); impl Commitment {
    ///create a commitment to `value` with blinding factor `blinding`
    pub fn commit(value: u64, blinding: Scalar) -> Self {
        //(v * B) + (r * B_blinding)
        return Self(LEDGER_PEDERSEN_GENS.commit(Scalar::from(value), blinding))
    }

    ///Return the elliptic curve point which represents this commitment.
    ///To convert an elliptic curve point back into a commitment, use `Commitment(point)`.
    pub fn to_point(&self) -> RistrettoPoint {
        return self.0;
    }

    ///Given input commitments, output commitments, and "extra" output (ie fees),
    ///check if the equation is balanced.
    ///
    ///`in == (out + extra)`, where `extra` is committed with a zero blinding factor.
    pub fn is_balanced(in_commitments: &[Commitment], out_commitments: &[Commitment], extra: u64) -> bool {
        let extra = Commitment::commit(extra, Scalar::zero());
        return in_commitments.iter().copied().sum::<Commitment>()
            == out_commitments.iter().copied().chain(std::iter::once(extra)).sum::<Commitment>()
    }

    ///Hex encoding of the compressed point.
    pub fn to_hex(&self) -> String {
        return point_to_hex(&self.0)
    }

    ///Decode a hex encoded commitment.
    pub fn from_hex(encoded: &str) -> Result<Self, SerializationError> {
        return Ok(Self(point_from_hex(encoded)?))
    }

} impl Sum for Commitment {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        return Commitment(iter.map(|com| com.to_point()).sum())
    }
}

#[cfg(feature = "to_bytes")] impl ToBytes<'_> for Commitment {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(encode_point(&self.0).to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return Ok(Self(decode_point(bytes)?))
    }
}

///The public parts of an output which a ring signature needs:
///its transaction public key, its one-time target key and its amount commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReducedTxOut {
    pub public_key: RistrettoPoint,
    pub target_key: RistrettoPoint,
    pub commitment: Commitment

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for ReducedTxOut {}
