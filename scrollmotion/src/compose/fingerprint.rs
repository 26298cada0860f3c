use xxhash_rust::xxh3::Xxh3;

use crate::animation::length::Unit;
use crate::compose::snapshot::Value;

const XXH3_SEED: u64 = 0x5c70_11a3_9e1d_4b27;

/// Stable fingerprint of an [`OutputSnapshot`](crate::OutputSnapshot)'s channel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotFingerprint {
    /// High 64 bits of the digest.
    pub hi: u64,
    /// Low 64 bits of the digest.
    pub lo: u64,
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // +0 and -0 render the same
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> SnapshotFingerprint {
        let v = self.inner.digest128();
        SnapshotFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn unit_tag(u: Unit) -> u8 {
    match u {
        Unit::None => 0,
        Unit::Px => 1,
        Unit::Vh => 2,
        Unit::Vw => 3,
        Unit::Percent => 4,
    }
}

pub(crate) fn fingerprint_values(names: &[String], values: &[Value]) -> SnapshotFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(values.len() as u64);
    for (name, v) in names.iter().zip(values) {
        h.write_str(name);
        match v {
            Value::Number(n) => {
                h.write_u8(0);
                h.write_f64(*n);
            }
            Value::Length(l) => {
                h.write_u8(1);
                h.write_u8(unit_tag(l.unit));
                h.write_f64(l.value);
            }
        }
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/fingerprint.rs"]
mod tests;
