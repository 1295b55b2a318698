use serde::Serialize;

use super::profitability::{compute_mining, MiningInput, DAYS_PER_MONTH};
use crate::display::round_half_up;

/// 차트에 표시하는 최대 기간 수.
pub const MAX_PROJECTION_MONTHS: u32 = 24;

/// 누적 수익 차트의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month: u32,
    /// 누적 순이익 [현지 통화, 정수 반올림]
    pub cumulative_earnings: f64,
}

/// 월별 누적 순이익 시리즈를 만든다. 기간이 24개월을 넘으면 앞 24개월만 포함한다.
pub fn projection(input: &MiningInput) -> Vec<ProjectionPoint> {
    let daily_profit = compute_mining(input).daily_profit;
    let months = input.duration_months.min(MAX_PROJECTION_MONTHS);
    (1..=months)
        .map(|month| ProjectionPoint {
            month,
            cumulative_earnings: round_half_up(daily_profit * DAYS_PER_MONTH * f64::from(month)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mining::CryptoAsset;

    #[test]
    fn caps_at_24_points() {
        let input = MiningInput {
            hashrate_ths: 50.0,
            electricity_cost_per_kwh: 0.8,
            duration_months: 36,
            asset: CryptoAsset::Eth,
        };
        let points = projection(&input);
        assert_eq!(points.len(), 24);
        assert_eq!(points[0].month, 1);
        assert_eq!(points[23].month, 24);
    }

    #[test]
    fn empty_for_zero_duration() {
        let input = MiningInput {
            hashrate_ths: 10.0,
            electricity_cost_per_kwh: 1.2,
            duration_months: 0,
            asset: CryptoAsset::Btc,
        };
        assert!(projection(&input).is_empty());
    }
}
