/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Messages exchanged between the dealer and the parties of an aggregated range proof.
//!
//! Parties only ever see challenges by value; the transcript stays with the dealer.

#![allow(non_snake_case)]

use std::iter;

use serde::{Serialize, Deserialize};

use crate::curve::*;
use crate::errors::RangeProofError;
use crate::pedersen::PedersenGens;
use super::generators::BulletproofGens;
use super::util::*;

///A commitment to the bits of a party's value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BitCommitment {
    pub(super) V_j: RistrettoPoint,
    pub(super) A_j: RistrettoPoint,
    pub(super) S_j: RistrettoPoint,

} impl BitCommitment {
    ///The value commitment of this party.
    pub fn value_commitment(&self) -> RistrettoPoint {
        return self.V_j
    }
}

///Challenges derived from every party's `BitCommitment`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BitChallenge {
    pub(super) y: Scalar,
    pub(super) z: Scalar,
}

///A commitment to a party's polynomial coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolyCommitment {
    pub(super) T_1_j: RistrettoPoint,
    pub(super) T_2_j: RistrettoPoint,
}

///Challenge derived from every party's `PolyCommitment`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolyChallenge {
    pub(super) x: Scalar,
}

///A party's proof share, ready to be aggregated into a `RangeProof`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofShare {
    pub(super) t_x: Scalar,
    pub(super) t_x_blinding: Scalar,
    pub(super) e_blinding: Scalar,
    pub(super) l_vec: Vec<Scalar>,
    pub(super) r_vec: Vec<Scalar>,

} impl ProofShare {
    ///Check that the share's vectors have length `expected_n`
    ///and fit in the generators of party `j`.
    pub(super) fn check_size(
        &self,
        expected_n: usize,
        bp_gens: &BulletproofGens,
        j: usize,
    ) -> Result<(), RangeProofError> {
        if self.l_vec.len() != expected_n || self.r_vec.len() != expected_n {
            return Err(RangeProofError::MalformedProofShares { bad_shares: vec![j] })
        }
        if expected_n > bp_gens.gens_capacity || j >= bp_gens.party_capacity {
            return Err(RangeProofError::MalformedProofShares { bad_shares: vec![j] })
        }
        return Ok(())
    }

    ///Check this share against the messages party `j` sent and received.
    ///
    ///Used by the dealer to find which parties are responsible
    ///when the aggregated proof does not verify.
    pub(super) fn audit_share(
        &self,
        bp_gens: &BulletproofGens,
        pc_gens: &PedersenGens,
        j: usize,
        bit_commitment: &BitCommitment,
        bit_challenge: &BitChallenge,
        poly_commitment: &PolyCommitment,
        poly_challenge: &PolyChallenge,
    ) -> Result<(), RangeProofError> {
        let n = self.l_vec.len();
        self.check_size(n, bp_gens, j)?;

        let (y, z) = (&bit_challenge.y, &bit_challenge.z);
        let x = &poly_challenge.x;

        let zz = z * z;
        let minus_z = -z;
        let z_j = scalar_exp_vartime(z, j as u64);
        let y_jn = scalar_exp_vartime(y, (j * n) as u64);
        let y_jn_inv = y_jn.invert();
        let y_inv = y.invert();

        if self.t_x != inner_product(&self.l_vec, &self.r_vec) {
            return Err(RangeProofError::VerificationError)
        }

        //A + x*S == e_blinding*B_blinding + <l, G> + <r', H>, with H rescaled by y^-i
        let g = self.l_vec.iter().map(|l_i| minus_z - l_i);
        let h = self.r_vec.iter()
            .zip(exp_iter(Scalar::from(2u64)))
            .zip(exp_iter(y_inv))
            .map(|((r_i, exp_2), exp_y_inv)| {
                z + exp_y_inv * y_jn_inv * (-r_i) + exp_y_inv * y_jn_inv * (zz * z_j * exp_2)
            });

        let P_check = RistrettoPoint::vartime_multiscalar_mul(
            iter::once(Scalar::one())
                .chain(iter::once(*x))
                .chain(iter::once(-self.e_blinding))
                .chain(g)
                .chain(h),
            iter::once(&bit_commitment.A_j)
                .chain(iter::once(&bit_commitment.S_j))
                .chain(iter::once(&pc_gens.B_blinding))
                .chain(bp_gens.share(j).G(n))
                .chain(bp_gens.share(j).H(n)),
        );
        if !P_check.is_identity() {
            return Err(RangeProofError::VerificationError)
        }

        let sum_of_powers_y = sum_of_powers(y, n);
        let sum_of_powers_2 = sum_of_powers(&Scalar::from(2u64), n);
        let delta = (z - zz) * sum_of_powers_y * y_jn - z * zz * sum_of_powers_2 * z_j;

        //t_x*B + t_x_blinding*B_blinding == z^2*z^j*V + delta*B + x*T_1 + x^2*T_2
        let t_check = RistrettoPoint::vartime_multiscalar_mul(
            iter::once(zz * z_j)
                .chain(iter::once(*x))
                .chain(iter::once(x * x))
                .chain(iter::once(delta - self.t_x))
                .chain(iter::once(-self.t_x_blinding)),
            iter::once(&bit_commitment.V_j)
                .chain(iter::once(&poly_commitment.T_1_j))
                .chain(iter::once(&poly_commitment.T_2_j))
                .chain(iter::once(&pc_gens.B))
                .chain(iter::once(&pc_gens.B_blinding)),
        );

        return match t_check.is_identity() {
            true => Ok(()),
            false => Err(RangeProofError::VerificationError)
        }
    }
}
