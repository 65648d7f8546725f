//! Merkle membership verification for the presale allowlist.
//!
//! Leaves are the double SHA-256 of the bech32 address bytes. Interior
//! nodes hash the byte-wise smaller child first, so proofs carry no
//! left/right positions. Verification is a pure predicate: malformed
//! input rejects, it never errors.

use cosmwasm_std::HexBinary;
use sha2::{Digest, Sha256};

pub const HASH_SIZE: usize = 32;

fn sha256(input: &[u8]) -> [u8; HASH_SIZE] {
    Sha256::digest(input).into()
}

/// `SHA256(SHA256(address))`. The inner hash keeps a second preimage of
/// the outer hash from being usable as a forged leaf.
pub fn leaf_hash(address: &str) -> [u8; HASH_SIZE] {
    sha256(&sha256(address.as_bytes()))
}

/// Hash a sibling pair, smaller value first.
pub fn node_hash(a: &[u8; HASH_SIZE], b: &[u8; HASH_SIZE]) -> [u8; HASH_SIZE] {
    let mut hasher = Sha256::new();
    if a <= b {
        hasher.update(a);
        hasher.update(b);
    } else {
        hasher.update(b);
        hasher.update(a);
    }
    hasher.finalize().into()
}

/// Fold the address leaf through the proof and compare against the
/// committed root.
pub fn verify_membership(address: &str, proof: &[HexBinary], root: &HexBinary) -> bool {
    if root.len() != HASH_SIZE {
        return false;
    }

    let mut node = leaf_hash(address);
    for sibling in proof {
        let sibling: [u8; HASH_SIZE] = match sibling.to_array() {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        node = node_hash(&node, &sibling);
    }

    node.as_slice() == root.as_slice()
}


#[cfg(test)]
mod tests {
    use super::testing::build_tree;
    use super::*;

    const MEMBERS: [&str; 4] = ["addr0001", "addr0002", "addr0003", "addr0004"];

    #[test]
    fn single_member_tree() {
        let (root, proofs) = build_tree(&["addr0001"]);
        // one leaf: the root is the leaf and the proof is empty
        assert!(proofs[0].is_empty());
        assert!(verify_membership("addr0001", &proofs[0], &root));
        assert!(!verify_membership("addr0002", &proofs[0], &root));
    }

    #[test]
    fn every_member_verifies() {
        let (root, proofs) = build_tree(&MEMBERS);
        for (member, proof) in MEMBERS.iter().zip(proofs.iter()) {
            assert!(verify_membership(member, proof, &root));
        }
    }

    #[test]
    fn verification_is_idempotent() {
        let (root, proofs) = build_tree(&MEMBERS);
        assert!(verify_membership(MEMBERS[0], &proofs[0], &root));
        assert!(verify_membership(MEMBERS[0], &proofs[0], &root));
    }

    #[test]
    fn non_member_rejected() {
        let (root, proofs) = build_tree(&MEMBERS);
        assert!(!verify_membership("addr0009", &proofs[0], &root));
    }

    #[test]
    fn proof_for_other_member_rejected() {
        let (root, proofs) = build_tree(&MEMBERS);
        assert!(!verify_membership(MEMBERS[0], &proofs[1], &root));
    }

    #[test]
    fn truncated_proof_rejected() {
        let (root, proofs) = build_tree(&MEMBERS);
        let truncated = &proofs[0][..proofs[0].len() - 1];
        assert!(!verify_membership(MEMBERS[0], truncated, &root));
    }

    #[test]
    fn reordered_proof_rejected() {
        let (root, proofs) = build_tree(&MEMBERS);
        let mut reordered = proofs[0].clone();
        reordered.reverse();
        assert!(!verify_membership(MEMBERS[0], &reordered, &root));
    }

    #[test]
    fn malformed_sibling_rejected() {
        let (root, proofs) = build_tree(&MEMBERS);
        let mut proof = proofs[0].clone();
        proof[0] = HexBinary::from(vec![0u8; 16]);
        assert!(!verify_membership(MEMBERS[0], &proof, &root));
    }

    #[test]
    fn odd_leaf_count_tree() {
        let members = ["addr0001", "addr0002", "addr0003"];
        let (root, proofs) = build_tree(&members);
        for (member, proof) in members.iter().zip(proofs.iter()) {
            assert!(verify_membership(member, proof, &root));
        }
        assert!(!verify_membership("addr0004", &proofs[2], &root));
    }
}
