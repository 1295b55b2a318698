//! 주입 가능한 균등 난수 공급원.
//!
//! ROI 계산의 "현실감" 변동은 이 trait 하나로만 난수를 받는다.
//! 테스트에서는 [`FixedSource`]나 [`SequenceSource`]로 고정된 값을 넣는다.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `[0, 1)` 구간의 균등 분포 값을 하나씩 내주는 공급원.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// `rand` 생성기를 감싼 실제 난수 공급원.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// OS 엔트로피로 초기화한다.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// 재현 가능한 시드로 초기화한다.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// 항상 같은 값을 돌려준다. 0.5면 변동이 0이 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource(pub f64);

impl FixedSource {
    /// 변동 없음(중앙값).
    pub const NEUTRAL: FixedSource = FixedSource(0.5);
}

impl UniformSource for FixedSource {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// 정해진 값 목록을 순환하며 돌려준다.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
