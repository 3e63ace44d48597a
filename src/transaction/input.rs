/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use zeroize::Zeroize;

use crate::internal_common::*;
use super::output::TxOut;

///Everything needed to spend one output: its ring, its position in the ring, and its keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputCredential {
    ///The ring, sorted by public key, without duplicates.
    pub ring: Vec<TxOut>,
    ///Index of the real output in `ring`.
    pub real_index: usize,
    onetime_private_key: Scalar,
    view_private_key: Scalar

} impl InputCredential {
    ///Create a credential spending `real_output` among the decoys of `ring`.
    ///
    ///If `real_output` is not in the ring it replaces the first member.
    ///The ring is then sorted by public key and de-duplicated, and the real output located.
    pub fn new(
        real_output: TxOut,
        mut ring: Vec<TxOut>,
        onetime_private_key: Scalar,
        view_private_key: Scalar
    ) -> Result<Self, TransactionError> {
        if &onetime_private_key * G != real_output.target_key {
            return Err(TransactionError::OnetimeKeyMismatch)
        }

        if !ring.contains(&real_output) {
            match ring.first_mut() {
                Some(first) => *first = real_output.clone(),
                None => ring.push(real_output.clone())
            }
        }

        //keyed by compressed public key, which also drops duplicates
        let mut by_public_key: HashMap<[u8; 32], TxOut> = HashMap::with_capacity(ring.len());
        for tx_out in ring {
            by_public_key.insert(encode_point(&tx_out.public_key), tx_out);
        }
        //a decoy sharing the real output's public key never displaces it
        by_public_key.insert(encode_point(&real_output.public_key), real_output.clone());
        let mut keys: Vec<[u8; 32]> = by_public_key.keys().copied().collect();
        keys.sort_unstable();

        let mut sorted_ring: Vec<TxOut> = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(tx_out) = by_public_key.remove(&key) {
                sorted_ring.push(tx_out);
            }
        }

        let real_index = sorted_ring.iter()
            .position(|tx_out| *tx_out == real_output)
            .ok_or(TransactionError::OnetimeKeyMismatch)?;

        return Ok(Self {
            ring: sorted_ring,
            real_index,
            onetime_private_key,
            view_private_key
        })
    }

    pub fn onetime_private_key(&self) -> &Scalar {
        return &self.onetime_private_key
    }

    ///The output being spent.
    pub fn real_output(&self) -> &TxOut {
        return &self.ring[self.real_index]
    }

    ///The value and blinding of the real output.
    pub fn value_with_blinding(&self) -> Result<(u64, Scalar), TransactionError> {
        return self.real_output().get_value(&self.view_private_key)
    }

    ///The ring as a ring signature sees it.
    pub fn reduced_ring(&self) -> Vec<ReducedTxOut> {
        return self.ring.iter().map(|tx_out| tx_out.reduce()).collect()
    }

} impl Drop for InputCredential {
    fn drop(&mut self) {
        self.onetime_private_key.zeroize();
        self.view_private_key.zeroize();
    }
}
