//! 채굴 수익성 계산 모듈 모음.
//! 자산별 상수표, 수익성 공식, 누적 수익 차트 시리즈로 구성한다.

pub mod assets;
pub mod profitability;
pub mod projection;

pub use assets::*;
pub use profitability::*;
pub use projection::*;
