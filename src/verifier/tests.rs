#[cfg(test)]
mod test {

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;

    use ethers::types::{Address, H256, U256};

    use crate::config::{default_claim_amount, AirdropConfig};
    use crate::error::ClaimError;
    use crate::merkle_tree::AllowlistTree;
    use crate::verifier::{ClaimStatus, ClaimVerifier, InMemoryLedger, Ledger, LedgerError};

    const AUTHORITY: u64 = 0xa11ce;

    fn setup(
        allowlist: &[Address],
        ledger: InMemoryLedger,
    ) -> (AllowlistTree, ClaimVerifier<InMemoryLedger>) {
        let tree = AllowlistTree::new(allowlist).unwrap();
        let config = AirdropConfig::new(Address::from_low_u64_be(AUTHORITY));
        let verifier = ClaimVerifier::new(&config, tree.root(), ledger);
        (tree, verifier)
    }

    #[test]
    fn test_three_address_scenario() {
        let a = Address::from_low_u64_be(0xa);
        let b = Address::from_low_u64_be(0xb);
        let c = Address::from_low_u64_be(0xc);
        let d = Address::from_low_u64_be(0xd);
        let (tree, verifier) = setup(&[a, b, c], InMemoryLedger::new());

        assert_eq!(verifier.root(), tree.root());
        assert_eq!(verifier.status(&a), ClaimStatus::Unclaimed);

        // A claims with its proof
        let proof_a = tree.proof_for(&a).unwrap();
        let receipt = verifier.verify_and_claim(a, &proof_a).unwrap();
        assert_eq!(receipt.claimant, a);
        assert_eq!(receipt.amount, default_claim_amount());
        assert_eq!(receipt.root, tree.root());

        // ledger credited once, claim record holds A only
        assert_eq!(verifier.ledger().balance_of(&a), default_claim_amount());
        assert_eq!(verifier.ledger().total_supply(), default_claim_amount());
        assert_eq!(verifier.status(&a), ClaimStatus::Claimed);
        assert_eq!(verifier.claimed_count(), 1);

        // the same claim again is refused and the ledger does not move
        assert_eq!(
            verifier.verify_and_claim(a, &proof_a),
            Err(ClaimError::AlreadyClaimed(a))
        );
        assert_eq!(verifier.ledger().total_supply(), default_claim_amount());

        // D is not on the allow-list
        assert_eq!(
            verifier.verify_and_claim(d, &[]),
            Err(ClaimError::InvalidProof)
        );
        assert_eq!(verifier.status(&d), ClaimStatus::Unclaimed);
        assert_eq!(verifier.claimed_count(), 1);
    }

    #[test]
    fn test_every_member_claims_exactly_once() {
        let allowlist: Vec<Address> = (1..=21).map(Address::from_low_u64_be).collect();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::new());

        for address in &allowlist {
            let proof = tree.proof_for(address).unwrap();
            assert!(verifier.verify_and_claim(*address, &proof).is_ok());
            assert_eq!(
                verifier.verify_and_claim(*address, &proof),
                Err(ClaimError::AlreadyClaimed(*address))
            );
        }

        assert_eq!(verifier.claimed_count(), allowlist.len());
        assert_eq!(
            verifier.ledger().total_supply(),
            default_claim_amount() * U256::from(allowlist.len())
        );
    }

    #[test]
    fn test_outsider_is_rejected_with_any_proof() {
        let allowlist: Vec<Address> = (1..=8).map(Address::from_low_u64_be).collect();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::new());
        let outsider = Address::from_low_u64_be(1000);

        // borrowing members' proofs does not help
        for address in &allowlist {
            let proof = tree.proof_for(address).unwrap();
            assert_eq!(
                verifier.verify_and_claim(outsider, &proof),
                Err(ClaimError::InvalidProof)
            );
        }
        assert_eq!(
            verifier.verify_and_claim(outsider, &[]),
            Err(ClaimError::InvalidProof)
        );
        assert_eq!(verifier.ledger().total_supply(), U256::zero());
    }

    #[test]
    fn test_wrong_proof_for_member_is_rejected_without_mutation() {
        let allowlist: Vec<Address> = (1..=8).map(Address::from_low_u64_be).collect();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::new());

        let member = allowlist[3];
        let mut proof = tree.proof_for(&member).unwrap();
        proof[1].as_bytes_mut()[31] ^= 0xff;

        assert_eq!(
            verifier.verify_and_claim(member, &proof),
            Err(ClaimError::InvalidProof)
        );
        assert_eq!(verifier.status(&member), ClaimStatus::Unclaimed);

        // the member can still claim with the correct proof
        let proof = tree.proof_for(&member).unwrap();
        assert!(verifier.verify_and_claim(member, &proof).is_ok());
    }

    #[test]
    fn test_rotate_root_requires_authority() {
        let allowlist: Vec<Address> = (1..=4).map(Address::from_low_u64_be).collect();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::new());
        let intruder = Address::from_low_u64_be(1);
        let new_root = H256::repeat_byte(0xd1);

        assert_eq!(
            verifier.rotate_root(new_root, intruder),
            Err(ClaimError::Unauthorized(intruder))
        );
        assert_eq!(verifier.root(), tree.root());

        let previous = verifier
            .rotate_root(new_root, Address::from_low_u64_be(AUTHORITY))
            .unwrap();
        assert_eq!(previous, tree.root());
        assert_eq!(verifier.root(), new_root);
    }

    #[test]
    fn test_rotation_keeps_claim_record() {
        let first: Vec<Address> = (1..=4).map(Address::from_low_u64_be).collect();
        let second: Vec<Address> = (3..=6).map(Address::from_low_u64_be).collect();
        let (first_tree, verifier) = setup(&first, InMemoryLedger::new());
        let second_tree = AllowlistTree::new(&second).unwrap();
        let authority = Address::from_low_u64_be(AUTHORITY);

        let claimant = Address::from_low_u64_be(3);
        let old_proof = first_tree.proof_for(&claimant).unwrap();
        verifier.verify_and_claim(claimant, &old_proof).unwrap();

        verifier.rotate_root(second_tree.root(), authority).unwrap();

        // proofs against the old root are now stale
        let member_of_first = Address::from_low_u64_be(1);
        let stale_proof = first_tree.proof_for(&member_of_first).unwrap();
        assert_eq!(
            verifier.verify_and_claim(member_of_first, &stale_proof),
            Err(ClaimError::InvalidProof)
        );

        // a claimant of the old root stays claimed under the new one
        let new_proof = second_tree.proof_for(&claimant).unwrap();
        assert_eq!(
            verifier.verify_and_claim(claimant, &new_proof),
            Err(ClaimError::AlreadyClaimed(claimant))
        );

        // new members claim against the new root
        let newcomer = Address::from_low_u64_be(6);
        let proof = second_tree.proof_for(&newcomer).unwrap();
        let receipt = verifier.verify_and_claim(newcomer, &proof).unwrap();
        assert_eq!(receipt.root, second_tree.root());
    }

    #[test]
    fn test_refused_credit_leaves_claim_unrecorded() {
        let allowlist: Vec<Address> = (1..=3).map(Address::from_low_u64_be).collect();
        let cap = default_claim_amount();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::with_supply_cap(cap));

        let first = allowlist[0];
        let proof = tree.proof_for(&first).unwrap();
        verifier.verify_and_claim(first, &proof).unwrap();

        let second = allowlist[1];
        let proof = tree.proof_for(&second).unwrap();
        assert_eq!(
            verifier.verify_and_claim(second, &proof),
            Err(ClaimError::Ledger(LedgerError::SupplyCapExceeded {
                amount: default_claim_amount(),
                cap,
            }))
        );
        assert_eq!(verifier.status(&second), ClaimStatus::Unclaimed);
        assert_eq!(verifier.ledger().balance_of(&second), U256::zero());
        assert_eq!(verifier.claimed_count(), 1);
    }

    #[test]
    fn test_concurrent_claims_for_one_address_succeed_once() {
        const THREADS: usize = 16;

        let allowlist: Vec<Address> = (1..=10).map(Address::from_low_u64_be).collect();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::new());
        let claimant = allowlist[4];
        let proof = tree.proof_for(&claimant).unwrap();

        let barrier = Barrier::new(THREADS);
        let successes = AtomicUsize::new(0);
        let already_claimed = AtomicUsize::new(0);

        thread::scope(|scope| {
            for _ in 0..THREADS {
                scope.spawn(|| {
                    barrier.wait();
                    match verifier.verify_and_claim(claimant, &proof) {
                        Ok(_) => successes.fetch_add(1, Ordering::SeqCst),
                        Err(ClaimError::AlreadyClaimed(_)) => {
                            already_claimed.fetch_add(1, Ordering::SeqCst)
                        }
                        Err(error) => panic!("unexpected error: {}", error),
                    };
                });
            }
        });

        assert_eq!(successes.load(Ordering::SeqCst), 1);
        assert_eq!(already_claimed.load(Ordering::SeqCst), THREADS - 1);
        assert_eq!(
            verifier.ledger().balance_of(&claimant),
            default_claim_amount()
        );
    }

    #[test]
    fn test_concurrent_claims_with_rotation() {
        let allowlist: Vec<Address> = (1..=32).map(Address::from_low_u64_be).collect();
        let (tree, verifier) = setup(&allowlist, InMemoryLedger::new());
        let authority = Address::from_low_u64_be(AUTHORITY);

        thread::scope(|scope| {
            for chunk in allowlist.chunks(8) {
                let tree = &tree;
                let verifier = &verifier;
                scope.spawn(move || {
                    for address in chunk {
                        let proof = tree.proof_for(address).unwrap();
                        verifier.verify_and_claim(*address, &proof).unwrap();
                    }
                });
            }
            // rotating to the same root must not disturb in-flight claims
            scope.spawn(|| {
                verifier.rotate_root(tree.root(), authority).unwrap();
            });
        });

        assert_eq!(verifier.claimed_count(), allowlist.len());
    }

    struct CountingLedger {
        credits: AtomicUsize,
    }

    impl Ledger for CountingLedger {
        fn credit(&self, _account: Address, _amount: U256) -> Result<(), LedgerError> {
            self.credits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_custom_ledger_is_credited_once_per_claim() {
        let allowlist: Vec<Address> = (1..=3).map(Address::from_low_u64_be).collect();
        let tree = AllowlistTree::new(&allowlist).unwrap();
        let config = AirdropConfig::new(Address::from_low_u64_be(AUTHORITY))
            .with_claim_amount(U256::from(1u64));
        let verifier = ClaimVerifier::new(
            &config,
            tree.root(),
            CountingLedger {
                credits: AtomicUsize::new(0),
            },
        );

        for address in &allowlist {
            let proof = tree.proof_for(address).unwrap();
            verifier.verify_and_claim(*address, &proof).unwrap();
            let _ = verifier.verify_and_claim(*address, &proof);
        }
        let _ = verifier.verify_and_claim(Address::from_low_u64_be(99), &[]);

        assert_eq!(verifier.ledger().credits.load(Ordering::SeqCst), 3);
        assert_eq!(verifier.claim_amount(), U256::from(1u64));
    }
}
