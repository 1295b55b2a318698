//! 입력 범위 컨트롤. GUI 슬라이더와 CLI 인자 검증이 같은 범위를 쓴다.
//! 계산 함수는 이 범위를 검사하지 않는다.

use std::ops::RangeInclusive;

/// 해시레이트 슬라이더 범위 [TH/s]
pub const HASHRATE_THS: RangeInclusive<f64> = 1.0..=1000.0;
/// 전기 요금 슬라이더 범위 [현지 통화/kWh]
pub const ELECTRICITY_COST: RangeInclusive<f64> = 0.0..=5.0;
/// 채굴 기간 선택지 [개월]
pub const MINING_DURATIONS: [u32; 5] = [1, 3, 6, 12, 24];
/// 투자 금액 슬라이더 범위 [현지 통화]
pub const PRINCIPAL: RangeInclusive<f64> = 1_000.0..=1_000_000.0;
/// 투자 기간 선택지 [개월]
pub const INVESTMENT_DURATIONS: [u32; 5] = [3, 6, 12, 24, 36];

/// 범위를 벗어난 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeError {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} 값이 허용 범위({} ~ {})를 벗어났습니다", self.value, self.min, self.max)
    }
}

impl std::error::Error for RangeError {}

/// 값이 범위 안에 있는지 확인한다. NaN은 거부한다.
pub fn check_range(value: f64, range: &RangeInclusive<f64>) -> Result<f64, RangeError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(RangeError {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// 기간을 가장 가까운 선택지로 맞춘다.
pub fn nearest_duration(months: u32, options: &[u32]) -> u32 {
    options
        .iter()
        .copied()
        .min_by_key(|o| o.abs_diff(months))
        .unwrap_or(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert!(check_range(10.0, &HASHRATE_THS).is_ok());
        assert!(check_range(0.0, &HASHRATE_THS).is_err());
        assert!(check_range(f64::NAN, &ELECTRICITY_COST).is_err());
        assert_eq!(check_range(5.0, &ELECTRICITY_COST), Ok(5.0));
    }

    #[test]
    fn snaps_duration() {
        assert_eq!(nearest_duration(10, &MINING_DURATIONS), 12);
        assert_eq!(nearest_duration(0, &INVESTMENT_DURATIONS), 3);
    }
}
