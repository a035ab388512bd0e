use chord_curve::arithmetic::{Modular, Point};
use chord_curve::curve::Curve;
use chord_curve::U256;

use bigint::Encoding;
use sha3::{Digest, Keccak256};

pub struct PointHasher {
    hasher: Keccak256,
}

impl PointHasher {
    pub fn new(hash_id: &[u8]) -> Self {
        let mut hasher = Keccak256::new();
        hasher.update(hash_id);

        Self { hasher }
    }

    pub fn insert_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    pub fn insert_point<C: Curve>(&mut self, pt: &Point<C>) {
        self.hasher.update(pt.x().inner().to_be_bytes());
        self.hasher.update(pt.y().inner().to_be_bytes());
    }

    pub fn finalize(self) -> U256 {
        let finalized = self.hasher.finalize();
        // NOTE unwrap is fine because the digest is always 32 bytes
        U256::from_be_bytes(finalized[0..32].try_into().unwrap())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chord_curve::curve::NistP256;

    #[test]
    fn domain_separation() {
        let mut first = PointHasher::new(b"first");
        let mut second = PointHasher::new(b"second");
        first.insert_point(&Point::<NistP256>::GENERATOR);
        second.insert_point(&Point::<NistP256>::GENERATOR);
        assert_ne!(first.finalize(), second.finalize());
    }

    #[test]
    fn deterministic() {
        let mut first = PointHasher::new(b"id");
        let mut second = PointHasher::new(b"id");
        first.insert_bytes(b"payload");
        second.insert_bytes(b"payload");
        assert_eq!(first.finalize(), second.finalize());
    }
}
