/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Bulletproofs generators.
//!
//! Each party `j` owns two generator vectors, `G_j` and `H_j`, read from a
//! SHAKE256 stream keyed by `"GeneratorsChain" || label || j` (with `j` as a
//! little-endian `u32`). Every generator consumes 64 bytes of its stream,
//! which makes the derivation resumable: extending the capacity appends new
//! generators and never changes the existing ones.

#![allow(non_snake_case)]

use sha3::{
    Shake256,
    Shake256Reader,
    digest::{ExtendableOutput, Update, XofReader}
};

use crate::curve::*;

///The generator stream for one party and one label.
struct GeneratorsChain {
    reader: Shake256Reader

} impl GeneratorsChain {
    fn new(label: &[u8]) -> Self {
        let mut shake = Shake256::default();
        shake.update(b"GeneratorsChain");
        shake.update(label);

        return GeneratorsChain {
            reader: shake.finalize_xof()
        }
    }

    ///Skip the first `n` generators of the chain.
    fn fast_forward(mut self, n: usize) -> Self {
        let mut buf = [0u8; 64];
        for _ in 0..n {
            self.reader.read(&mut buf);
        }
        return self
    }

} impl Iterator for GeneratorsChain {
    type Item = RistrettoPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let mut uniform_bytes = [0u8; 64];
        self.reader.read(&mut uniform_bytes);

        return Some(RistrettoPoint::from_uniform_bytes(&uniform_bytes))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (usize::MAX, None)
    }
}

///Chain label of party `party_index` for generator family `family` (`b'G'` or `b'H'`).
fn chain_label(family: u8, party_index: usize) -> [u8; 5] {
    let mut label = [family, 0, 0, 0, 0];
    label[1..].copy_from_slice(&(party_index as u32).to_le_bytes());
    return label
}

///Generators for (aggregated) range proofs, sized `party_capacity x gens_capacity`.
#[derive(Debug, Clone)]
pub struct BulletproofGens {
    ///Number of generators per party.
    pub gens_capacity: usize,
    ///Maximum number of parties in an aggregated proof.
    pub party_capacity: usize,
    G_vec: Vec<Vec<RistrettoPoint>>,
    H_vec: Vec<Vec<RistrettoPoint>>,

} impl BulletproofGens {
    ///Create `gens_capacity` generators for each of `party_capacity` parties.
    pub fn new(gens_capacity: usize, party_capacity: usize) -> Self {
        let mut gens = BulletproofGens {
            gens_capacity: 0,
            party_capacity,
            G_vec: (0..party_capacity).map(|_| Vec::new()).collect(),
            H_vec: (0..party_capacity).map(|_| Vec::new()).collect(),
        };
        gens.increase_capacity(gens_capacity);
        return gens
    }

    ///Return a view of the generators of party `j`.
    pub fn share(&self, j: usize) -> BulletproofGensShare<'_> {
        return BulletproofGensShare {
            gens: self,
            share: j
        }
    }

    ///Grow every party's vectors to `new_capacity` generators.
    ///
    ///Existing generators are kept, new ones continue each party's chain.
    ///Does nothing if the capacity is already large enough.
    pub fn increase_capacity(&mut self, new_capacity: usize) {
        if self.gens_capacity >= new_capacity {
            return
        }

        let extra = new_capacity - self.gens_capacity;
        for i in 0..self.party_capacity {
            self.G_vec[i].extend(
                GeneratorsChain::new(&chain_label(b'G', i))
                    .fast_forward(self.gens_capacity)
                    .take(extra)
            );
            self.H_vec[i].extend(
                GeneratorsChain::new(&chain_label(b'H', i))
                    .fast_forward(self.gens_capacity)
                    .take(extra)
            );
        }
        self.gens_capacity = new_capacity;
    }

    ///The first `n` `G` generators of each of the first `m` parties, party-major.
    pub fn G(&self, n: usize, m: usize) -> impl Iterator<Item = &RistrettoPoint> {
        return AggregatedGensIter {
            n,
            m,
            array: &self.G_vec,
            party_idx: 0,
            gen_idx: 0,
        }
    }

    ///The first `n` `H` generators of each of the first `m` parties, party-major.
    pub fn H(&self, n: usize, m: usize) -> impl Iterator<Item = &RistrettoPoint> {
        return AggregatedGensIter {
            n,
            m,
            array: &self.H_vec,
            party_idx: 0,
            gen_idx: 0,
        }
    }
}

///Flattening iterator over `m` parties' first `n` generators.
struct AggregatedGensIter<'a> {
    array: &'a Vec<Vec<RistrettoPoint>>,
    n: usize,
    m: usize,
    party_idx: usize,
    gen_idx: usize,

} impl<'a> Iterator for AggregatedGensIter<'a> {
    type Item = &'a RistrettoPoint;

    fn next(&mut self) -> Option<Self::Item> {
        //indices stop moving once exhausted
        if self.n == 0 || self.party_idx >= self.m {
            return None
        }
        if self.gen_idx >= self.n {
            self.gen_idx = 0;
            self.party_idx += 1;
            if self.party_idx >= self.m {
                return None
            }
        }

        let cur_gen = self.gen_idx;
        self.gen_idx += 1;
        return self.array.get(self.party_idx)
            .and_then(|party| party.get(cur_gen))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.n
            .saturating_mul(self.m.saturating_sub(self.party_idx))
            .saturating_sub(self.gen_idx);
        return (size, Some(size))
    }
}

///The generators of a single party.
#[derive(Copy, Clone)]
pub struct BulletproofGensShare<'a> {
    gens: &'a BulletproofGens,
    share: usize,

} impl<'a> BulletproofGensShare<'a> {
    ///The first `n` `G` generators of this party.
    pub fn G(&self, n: usize) -> impl Iterator<Item = &'a RistrettoPoint> {
        return self.gens.G_vec[self.share].iter().take(n)
    }

    ///The first `n` `H` generators of this party.
    pub fn H(&self, n: usize) -> impl Iterator<Item = &'a RistrettoPoint> {
        return self.gens.H_vec[self.share].iter().take(n)
    }
}
