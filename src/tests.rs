//! Crate-level test vectors for the curve engine and derivation pipeline

use crate::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::GROUP_ORDER;
    use num_bigint::BigUint;
    use num_traits::Zero;
    use rand::Rng;

    /// A known private key and every value it should produce.
    struct TestVector {
        private_key: &'static str,
        public_x: &'static str,
        public_y: &'static str,
        compressed: &'static str,
        public_key_hash: &'static str,
        checksum: &'static str,
        address: &'static str,
    }

    /// Worked examples from Mastering Bitcoin, pages 69-70.
    const TEST_VECTORS: &[TestVector] = &[
        TestVector {
            private_key: "038109007313a5807b2eccc082c8c3fbb988a973cacf1a7df9ce725c31b14776",
            public_x: "02a406624211f2abbdc68da3df929f938c3399dd79fac1b51b0e4ad1d26a47aa",
            public_y: "9f3bc9f3948a19dabb796a2a744aae50367ce38a3e6b60ae7d72159caeb0c102",
            compressed: "0202a406624211f2abbdc68da3df929f938c3399dd79fac1b51b0e4ad1d26a47aa",
            public_key_hash: "f5f2d624cfb5c3f66d06123d0829d1c9cebf770e",
            checksum: "2c13a798",
            address: "1PRTTaJesdNovgne6Ehcdu1fpEdX7913CK",
        },
        TestVector {
            private_key: "1e99423a4ed27608a15a2616a2b0e9e52ced330ac530edcc32c8ffc6a526aedd",
            public_x: "f028892bad7ed57d2fb57bf33081d5cfcf6f9ed3d3d7f159c2e2fff579dc341a",
            public_y: "07cf33da18bd734c600b96a72bbc4749d5141c90ec8ac328ae52ddfe2e505bdb",
            compressed: "03f028892bad7ed57d2fb57bf33081d5cfcf6f9ed3d3d7f159c2e2fff579dc341a",
            public_key_hash: "bbc1e42a39d05a4cc61752d6963b7f69d09bb27b",
            checksum: "37fefcd0",
            address: "1J7mdg5rbQyUHENYdx39WVWK7fsLpEoXZy",
        },
    ];

    /// Published coordinates of small generator multiples.
    struct MultipleVector {
        scalar: u64,
        x: &'static str,
        y: &'static str,
    }

    const SMALL_MULTIPLES: &[MultipleVector] = &[
        MultipleVector {
            scalar: 2,
            x: "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            y: "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        },
        MultipleVector {
            scalar: 3,
            x: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            y: "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        },
        MultipleVector {
            scalar: 4,
            x: "e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13",
            y: "51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922",
        },
        MultipleVector {
            scalar: 7,
            x: "5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc",
            y: "6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da",
        },
    ];

    /// A random scalar in [1, n-1].
    fn random_scalar<R: Rng>(rng: &mut R) -> BigUint {
        loop {
            let bytes: [u8; 32] = rng.gen();
            let candidate = BigUint::from_bytes_be(&bytes) % &*GROUP_ORDER;
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }

    #[test]
    fn test_pipeline_vectors() {
        let generator = AddressGenerator::new(Network::Mainnet);

        for vector in TEST_VECTORS {
            let private_key = PrivateKey::from_hex(vector.private_key).unwrap();
            let public_key = PublicKey::from_private_key(&private_key);

            match public_key.point() {
                CurvePoint::Affine { x, y } => {
                    assert_eq!(format!("{:064x}", x.value()), vector.public_x);
                    assert_eq!(format!("{:064x}", y.value()), vector.public_y);
                }
                CurvePoint::Infinity => panic!("public key must be affine"),
            }
            assert!(public_key.point().is_on_curve());

            let serialized = public_key.serialize_compressed().unwrap();
            assert_eq!(hex::encode(serialized), vector.compressed);
            assert_eq!(hex::encode(hash::hash160(&serialized)), vector.public_key_hash);

            let derived = generator.derive(&private_key).unwrap();
            assert_eq!(derived.checksum, vector.checksum);
            assert_eq!(derived.address, vector.address);
        }
    }

    #[test]
    fn test_small_multiples() {
        let g = CurvePoint::generator();
        for vector in SMALL_MULTIPLES {
            let point = g.multiply(&BigUint::from(vector.scalar));
            match point {
                CurvePoint::Affine { x, y } => {
                    assert_eq!(format!("{:064x}", x.value()), vector.x, "x of {}G", vector.scalar);
                    assert_eq!(format!("{:064x}", y.value()), vector.y, "y of {}G", vector.scalar);
                }
                CurvePoint::Infinity => panic!("{}G must be affine", vector.scalar),
            }
        }
    }

    #[test]
    fn test_multiples_satisfy_curve_equation() {
        let g = CurvePoint::generator();
        for d in 1u32..=64 {
            let point = g.multiply(&BigUint::from(d));
            assert!(point.is_on_curve(), "{}G is off the curve", d);
            assert!(!point.is_infinity());
        }
    }

    #[test]
    fn test_random_scalars_stay_on_curve() {
        let mut rng = rand::thread_rng();
        let g = CurvePoint::generator();

        for _ in 0..8 {
            let d = random_scalar(&mut rng);
            let point = g.multiply(&d);
            assert!(point.is_on_curve());
            assert!(!point.is_infinity());
        }
    }

    #[test]
    fn test_scalar_multiplication_is_homomorphic() {
        let g = CurvePoint::generator();
        let pairs = [(1u32, 2u32), (17, 40), (100, 155), (254, 1)];

        for (d1, d2) in pairs {
            let lhs = g.multiply(&BigUint::from(d1 + d2));
            let rhs = g.multiply(&BigUint::from(d1)).add(&g.multiply(&BigUint::from(d2)));
            assert_eq!(lhs, rhs, "({} + {})G", d1, d2);
        }
    }

    #[test]
    fn test_homomorphism_with_random_scalars() {
        let mut rng = rand::thread_rng();
        let g = CurvePoint::generator();

        for _ in 0..4 {
            let d1 = random_scalar(&mut rng);
            let d2 = random_scalar(&mut rng);
            let lhs = g.multiply(&(&d1 + &d2));
            let rhs = g.multiply(&d1).add(&g.multiply(&d2));
            assert_eq!(lhs, rhs);
        }
    }

    #[test]
    fn test_address_decodes_back_to_payload() {
        for vector in TEST_VECTORS {
            let decoded = base58::decode(vector.address).unwrap();
            assert_eq!(decoded.len(), ADDRESS_PAYLOAD_LEN);
            assert_eq!(decoded[0], 0x00);
            assert_eq!(hex::encode(&decoded[1..21]), vector.public_key_hash);

            // Re-encoding reproduces the address, leading '1' included.
            assert_eq!(base58::encode(&decoded).unwrap(), vector.address);
        }
    }

    #[test]
    fn test_checksum_is_double_sha256_prefix() {
        for vector in TEST_VECTORS {
            let decoded = base58::decode(vector.address).unwrap();
            let (payload, found) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
            assert_eq!(found, hash::checksum(payload));
            assert_eq!(hex::encode(found), vector.checksum);
        }
    }

    #[test]
    fn test_zero_scalar_yields_infinity() {
        let g = CurvePoint::generator();
        assert_eq!(g.multiply(&BigUint::zero()), CurvePoint::Infinity);

        // And infinity cannot be serialized or keyed.
        assert!(PublicKey::from_point(CurvePoint::Infinity)
            .serialize_compressed()
            .is_err());
        assert!(PrivateKey::new(BigUint::zero()).is_err());
    }
}
