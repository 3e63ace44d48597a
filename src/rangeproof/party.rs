/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Party states of the aggregated range proof protocol.
//!
//! Every step consumes the previous state, so steps cannot be repeated or reordered.
//! Secrets are wiped when a state is dropped.

#![allow(non_snake_case)]

use std::iter;

use rand::{thread_rng, RngCore, CryptoRng};
use zeroize::Zeroize;

use crate::curve::*;
use crate::errors::RangeProofError;
use crate::pedersen::PedersenGens;
use super::generators::BulletproofGens;
use super::messages::*;
use super::util::{self, VecPoly1, Poly2};

///Entry point for a party of the aggregated range proof protocol.
pub struct Party {}

impl Party {
    ///Create a party proving that `v` is in `[0, 2^n)`.
    pub fn new<'a>(
        bp_gens: &'a BulletproofGens,
        pc_gens: &'a PedersenGens,
        v: u64,
        v_blinding: Scalar,
        n: usize,
    ) -> Result<PartyAwaitingPosition<'a>, RangeProofError> {
        if !(n == 8 || n == 16 || n == 32 || n == 64) {
            return Err(RangeProofError::InvalidBitsize(n))
        }
        if bp_gens.gens_capacity < n {
            return Err(RangeProofError::InvalidGeneratorsLength {
                required: n,
                capacity: bp_gens.gens_capacity
            })
        }
        if n < 64 && (v >> n) != 0 {
            return Err(RangeProofError::OutOfRange { value: v, bits: n })
        }

        let V = pc_gens.commit(Scalar::from(v), v_blinding);

        return Ok(PartyAwaitingPosition {
            bp_gens,
            pc_gens,
            n,
            v,
            v_blinding,
            V
        })
    }
}

///A party waiting for the dealer to assign its position in the aggregation.
pub struct PartyAwaitingPosition<'a> {
    bp_gens: &'a BulletproofGens,
    pc_gens: &'a PedersenGens,
    n: usize,
    v: u64,
    v_blinding: Scalar,
    V: RistrettoPoint

} impl<'a> PartyAwaitingPosition<'a> {
    ///Take position `j` and commit to the bits of the value.
    pub fn assign_position(
        self,
        j: usize
    ) -> Result<(PartyAwaitingBitChallenge<'a>, BitCommitment), RangeProofError> {
        return self.assign_position_with_rng(j, &mut thread_rng())
    }

    ///Take position `j` and commit to the bits of the value, drawing blindings from `rng`.
    pub fn assign_position_with_rng<R: RngCore + CryptoRng>(
        self,
        j: usize,
        rng: &mut R
    ) -> Result<(PartyAwaitingBitChallenge<'a>, BitCommitment), RangeProofError> {
        if self.bp_gens.party_capacity <= j {
            return Err(RangeProofError::InvalidGeneratorsLength {
                required: j + 1,
                capacity: self.bp_gens.party_capacity
            })
        }

        let bp_share = self.bp_gens.share(j);

        //a_L is the bit vector of v, a_R = a_L - 1
        //A = a_blinding * B_blinding + <a_L, G> + <a_R, H>
        let a_blinding = random_scalar_with_rng(rng);
        let mut a_L: Vec<Scalar> = (0..self.n)
            .map(|i| Scalar::from((self.v >> i) & 1))
            .collect();
        let mut a_R: Vec<Scalar> = a_L.iter()
            .map(|bit| bit - Scalar::one())
            .collect();
        let A = RistrettoPoint::multiscalar_mul(
            iter::once(&a_blinding).chain(a_L.iter()).chain(a_R.iter()),
            iter::once(&self.pc_gens.B_blinding)
                .chain(bp_share.G(self.n))
                .chain(bp_share.H(self.n))
        );
        a_L.zeroize();
        a_R.zeroize();

        //S = s_blinding * B_blinding + <s_L, G> + <s_R, H>
        let s_blinding = random_scalar_with_rng(rng);
        let s_L: Vec<Scalar> = (0..self.n).map(|_| random_scalar_with_rng(rng)).collect();
        let s_R: Vec<Scalar> = (0..self.n).map(|_| random_scalar_with_rng(rng)).collect();
        let S = RistrettoPoint::multiscalar_mul(
            iter::once(&s_blinding).chain(s_L.iter()).chain(s_R.iter()),
            iter::once(&self.pc_gens.B_blinding)
                .chain(bp_share.G(self.n))
                .chain(bp_share.H(self.n))
        );

        let bit_commitment = BitCommitment {
            V_j: self.V,
            A_j: A,
            S_j: S
        };
        let next_state = PartyAwaitingBitChallenge {
            n: self.n,
            v: self.v,
            v_blinding: self.v_blinding,
            pc_gens: self.pc_gens,
            j,
            a_blinding,
            s_blinding,
            s_L,
            s_R
        };
        return Ok((next_state, bit_commitment))
    }

} impl<'a> Drop for PartyAwaitingPosition<'a> {
    fn drop(&mut self) {
        self.v.zeroize();
        self.v_blinding.zeroize();
    }
}

///A party which has committed to the bits of its value
///and waits for the dealer's `BitChallenge`.
pub struct PartyAwaitingBitChallenge<'a> {
    n: usize,
    v: u64,
    v_blinding: Scalar,
    j: usize,
    pc_gens: &'a PedersenGens,
    a_blinding: Scalar,
    s_blinding: Scalar,
    s_L: Vec<Scalar>,
    s_R: Vec<Scalar>

} impl<'a> PartyAwaitingBitChallenge<'a> {
    ///Apply the `BitChallenge` and commit to the coefficients of `t(X)`.
    pub fn apply_challenge(
        self,
        vc: &BitChallenge
    ) -> (PartyAwaitingPolyChallenge, PolyCommitment) {
        return self.apply_challenge_with_rng(vc, &mut thread_rng())
    }

    ///Apply the `BitChallenge` and commit to the coefficients of `t(X)`,
    ///drawing blindings from `rng`.
    pub fn apply_challenge_with_rng<R: RngCore + CryptoRng>(
        self,
        vc: &BitChallenge,
        rng: &mut R
    ) -> (PartyAwaitingPolyChallenge, PolyCommitment) {
        let n = self.n;
        let offset_y = util::scalar_exp_vartime(&vc.y, (self.j * n) as u64);
        let offset_z = util::scalar_exp_vartime(&vc.z, self.j as u64);

        let mut l_poly = VecPoly1::zero(n);
        let mut r_poly = VecPoly1::zero(n);

        let offset_zz = vc.z * vc.z * offset_z;
        //y^(jn) and 2^0
        let mut exp_y = offset_y;
        let mut exp_2 = Scalar::one();
        for i in 0..n {
            let a_L_i = Scalar::from((self.v >> i) & 1);
            let a_R_i = a_L_i - Scalar::one();

            l_poly.0[i] = a_L_i - vc.z;
            l_poly.1[i] = self.s_L[i];
            r_poly.0[i] = exp_y * (a_R_i + vc.z) + offset_zz * exp_2;
            r_poly.1[i] = exp_y * self.s_R[i];

            exp_y *= vc.y;
            exp_2 = exp_2 + exp_2;
        }

        let t_poly = l_poly.inner_product(&r_poly);

        let t_1_blinding = random_scalar_with_rng(rng);
        let t_2_blinding = random_scalar_with_rng(rng);
        let T_1 = self.pc_gens.commit(t_poly.1, t_1_blinding);
        let T_2 = self.pc_gens.commit(t_poly.2, t_2_blinding);

        let poly_commitment = PolyCommitment {
            T_1_j: T_1,
            T_2_j: T_2
        };

        let next_state = PartyAwaitingPolyChallenge {
            v_blinding: self.v_blinding,
            a_blinding: self.a_blinding,
            s_blinding: self.s_blinding,
            offset_zz,
            l_poly,
            r_poly,
            t_poly,
            t_1_blinding,
            t_2_blinding
        };

        return (next_state, poly_commitment)
    }

} impl<'a> Drop for PartyAwaitingBitChallenge<'a> {
    fn drop(&mut self) {
        self.v.zeroize();
        self.v_blinding.zeroize();
        self.a_blinding.zeroize();
        self.s_blinding.zeroize();
        self.s_L.zeroize();
        self.s_R.zeroize();
    }
}

///A party which has committed to its polynomial coefficients
///and waits for the dealer's `PolyChallenge`.
pub struct PartyAwaitingPolyChallenge {
    offset_zz: Scalar,
    l_poly: VecPoly1,
    r_poly: VecPoly1,
    t_poly: Poly2,
    v_blinding: Scalar,
    a_blinding: Scalar,
    s_blinding: Scalar,
    t_1_blinding: Scalar,
    t_2_blinding: Scalar

} impl PartyAwaitingPolyChallenge {
    ///Apply the `PolyChallenge` and compute this party's proof share.
    ///
    ///A zero challenge would cancel the blinding of `T_1` and `T_2`,
    ///so it is refused with `MaliciousDealer`.
    pub fn apply_challenge(self, pc: &PolyChallenge) -> Result<ProofShare, RangeProofError> {
        if pc.x == Scalar::zero() {
            return Err(RangeProofError::MaliciousDealer)
        }

        let t_blinding_poly = Poly2(
            self.offset_zz * self.v_blinding,
            self.t_1_blinding,
            self.t_2_blinding
        );

        let t_x = self.t_poly.eval(pc.x);
        let t_x_blinding = t_blinding_poly.eval(pc.x);
        let e_blinding = self.a_blinding + self.s_blinding * pc.x;
        let l_vec = self.l_poly.eval(pc.x);
        let r_vec = self.r_poly.eval(pc.x);

        return Ok(ProofShare {
            t_x,
            t_x_blinding,
            e_blinding,
            l_vec,
            r_vec
        })
    }

} impl Drop for PartyAwaitingPolyChallenge {
    fn drop(&mut self) {
        //the polynomials wipe themselves
        self.v_blinding.zeroize();
        self.a_blinding.zeroize();
        self.s_blinding.zeroize();
        self.t_1_blinding.zeroize();
        self.t_2_blinding.zeroize();
    }
}
