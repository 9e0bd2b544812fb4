use crate::style::props::{Scalar, StyleProp, TargetKey};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5c2d_91e4_07ab_36f1;

/// Stable fingerprint of a batch of style writes.
///
/// Used to skip re-applying a frame that is identical to the last one written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StyleFingerprint {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

pub(crate) fn fingerprint_writes(writes: &[(TargetKey, StyleProp)]) -> StyleFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(writes.len() as u64);
    for (target, prop) in writes {
        h.write_str(target.as_str());
        write_prop(&mut h, prop);
    }
    h.finish()
}

fn write_prop(h: &mut StableHasher, prop: &StyleProp) {
    match prop {
        StyleProp::Scalar(s, v) => {
            h.write_u8(0);
            h.write_u8(match s {
                Scalar::Opacity => 0,
                Scalar::Scale => 1,
                Scalar::ScaleY => 2,
                Scalar::TranslateY => 3,
            });
            h.write_f64(*v);
        }
        StyleProp::Transform(a) => {
            h.write_u8(1);
            for c in a.as_coeffs() {
                h.write_f64(c);
            }
        }
        StyleProp::Gradient(g) => {
            h.write_u8(2);
            h.write_u64(g.stops.len() as u64);
            for s in &g.stops {
                h.write_f64(s.offset);
                h.write_bytes(&[s.color.r, s.color.g, s.color.b]);
            }
        }
    }
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
        // -0.0 and 0.0 paint the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> StyleFingerprint {
        let v = self.inner.digest128();
        StyleFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}
