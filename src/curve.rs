/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

use crate::errors::SerializationError;
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        CompressedRistretto,
        RistrettoBasepointTable
    },
    traits::{
        Identity,
        IsIdentity,
        MultiscalarMul,
        VartimeMultiscalarMul
    }
};
use rand::{thread_rng, RngCore, CryptoRng};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &RistrettoBasepointTable = &constants::RISTRETTO_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

///Encode a point to its canonical 32-byte form.
///
///Every transcript append, hash input and proof serialization uses this encoding.
pub fn encode_point(point: &RistrettoPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Decode a canonical 32-byte point encoding.
pub fn decode_point(bytes: &[u8]) -> Result<RistrettoPoint, SerializationError> {
    if bytes.len() != 32 {
        return Err(SerializationError::DecodingError)
    }
    return CompressedRistretto::from_slice(bytes).decompress()
        .ok_or(SerializationError::DecodingError)
}

///Decode a canonical 32-byte scalar encoding.
pub fn decode_scalar(bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let bytes: [u8; 32] = bytes.try_into()
        .map_err(|_| SerializationError::DecodingError)?;
    return Scalar::from_canonical_bytes(bytes)
        .ok_or(SerializationError::DecodingError)
}

///Decode a hex encoded point.
pub fn point_from_hex(encoded: &str) -> Result<RistrettoPoint, SerializationError> {
    return decode_point(&hex::decode(encoded)?)
}

///Hex encode a point.
pub fn point_to_hex(point: &RistrettoPoint) -> String {
    return hex::encode(encode_point(point))
}

///return a random scalar drawn from `rng`
pub fn random_scalar_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    rng.fill_bytes(&mut scalar_bytes);
    return Scalar::from_bytes_mod_order_wide(&scalar_bytes);
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    return random_scalar_with_rng(&mut thread_rng());
}

///return a random point on the curve
pub fn random_point() -> RistrettoPoint {
    return &random_scalar() * G;
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.reduce().to_bytes().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return decode_scalar(bytes)
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for RistrettoPoint {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(encode_point(self).to_vec());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return decode_point(bytes)
    }
}
