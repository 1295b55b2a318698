//! 투자 ROI 시뮬레이션 모듈 모음.

pub mod categories;
pub mod comparison;
pub mod roi;

pub use categories::*;
pub use comparison::*;
pub use roi::*;
