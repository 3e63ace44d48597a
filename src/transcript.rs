/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Fiat-Shamir transcripts.
//!
//! This extends `merlin::Transcript` with the labelled appends used by the
//! range proof and the inner-product argument. The labels and their order are
//! part of the proof format.

use merlin::Transcript;

use crate::curve::*;
use crate::errors::RangeProofError;

pub trait TranscriptProtocol {
    ///Append a domain separator for an `n`-bit, `m`-party range proof.
    fn rangeproof_domain_sep(&mut self, n: u64, m: u64);
    ///Append a domain separator for a length-`n` inner product proof.
    fn innerproduct_domain_sep(&mut self, n: u64);
    ///Append a `scalar` with the given `label`.
    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar);
    ///Append a `point` with the given `label`.
    fn append_point(&mut self, label: &'static [u8], point: &RistrettoPoint);
    ///Check that a point is not the identity, then append it.
    fn validate_and_append_point(
        &mut self, label: &'static [u8], point: &RistrettoPoint
    ) -> Result<(), RangeProofError>;
    ///Compute a `label`ed challenge variable.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;

} impl TranscriptProtocol for Transcript {
    fn rangeproof_domain_sep(&mut self, n: u64, m: u64) {
        self.append_message(b"dom-sep", b"rangeproof v1");
        self.append_u64(b"n", n);
        self.append_u64(b"m", m);
    }

    fn innerproduct_domain_sep(&mut self, n: u64) {
        self.append_message(b"dom-sep", b"ipp v1");
        self.append_u64(b"n", n);
    }

    fn append_scalar(&mut self, label: &'static [u8], scalar: &Scalar) {
        self.append_message(label, scalar.as_bytes());
    }

    fn append_point(&mut self, label: &'static [u8], point: &RistrettoPoint) {
        self.append_message(label, &encode_point(point));
    }

    fn validate_and_append_point(
        &mut self, label: &'static [u8], point: &RistrettoPoint
    ) -> Result<(), RangeProofError> {
        if point.is_identity() {
            return Err(RangeProofError::VerificationError)
        }
        self.append_point(label, point);
        return Ok(())
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        //64 bytes, reduced wide for a uniform scalar
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        return Scalar::from_bytes_mod_order_wide(&buf)
    }
}
