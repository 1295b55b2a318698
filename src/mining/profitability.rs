use serde::{Deserialize, Serialize};

use super::assets::{constants, CryptoAsset};

/// TH/s 당 소비 전력 [kW]. 장비와 무관한 고정 계수.
pub const KW_PER_THS: f64 = 3.5;
/// 월 환산 일수.
pub const DAYS_PER_MONTH: f64 = 30.0;
const HOURS_PER_DAY: f64 = 24.0;

/// 채굴 수익성 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiningInput {
    /// 사용자 해시레이트 [TH/s]
    pub hashrate_ths: f64,
    /// 전기 요금 [현지 통화/kWh]
    pub electricity_cost_per_kwh: f64,
    /// 운영 기간 [개월]
    pub duration_months: u32,
    /// 채굴 자산
    pub asset: CryptoAsset,
}

/// 채굴 수익성 계산 결과. 입력이 바뀔 때마다 통째로 다시 계산한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiningResult {
    /// 일 매출 [현지 통화]
    pub daily_revenue: f64,
    /// 일 전기 비용 [현지 통화]
    pub daily_electricity_cost: f64,
    /// 일 순이익 [현지 통화]
    pub daily_profit: f64,
    /// 월 순이익 [현지 통화]
    pub monthly_profit: f64,
    /// 기간 전체 순이익 [현지 통화]
    pub total_profit: f64,
    /// 기간 전체 매출 [현지 통화]
    pub total_revenue: f64,
    /// 기간 전체 전기 비용 [현지 통화]
    pub total_electricity_cost: f64,
    /// 전기 비용 대비 수익률 [%]
    pub profitability_pct: f64,
}

/// 채굴 수익성을 계산한다.
///
/// 입력 범위 검증은 호출 측(UI 범위 컨트롤)의 책임이며 여기서는 하지 않는다.
/// 수익률은 총 전기 비용 대비로 정의되고, 전기 비용이 0이면 0%로 둔다.
pub fn compute_mining(input: &MiningInput) -> MiningResult {
    let params = constants(input.asset);
    let months = f64::from(input.duration_months);

    let user_share = input.hashrate_ths / params.network_hashrate_ths;
    let daily_reward_units = user_share * params.block_reward_units * params.blocks_per_day;
    let daily_revenue = daily_reward_units * params.price_local_currency;

    // kW × h × 요금 / 1000
    let daily_electricity_cost =
        input.hashrate_ths * KW_PER_THS * HOURS_PER_DAY * input.electricity_cost_per_kwh / 1000.0;
    let daily_profit = daily_revenue - daily_electricity_cost;

    let monthly_profit = daily_profit * DAYS_PER_MONTH;
    let total_profit = daily_profit * DAYS_PER_MONTH * months;
    let total_revenue = daily_revenue * DAYS_PER_MONTH * months;
    let total_electricity_cost = daily_electricity_cost * DAYS_PER_MONTH * months;

    let profitability_pct = if total_electricity_cost > 0.0 {
        (total_revenue - total_electricity_cost) / total_electricity_cost * 100.0
    } else {
        0.0
    };

    MiningResult {
        daily_revenue,
        daily_electricity_cost,
        daily_profit,
        monthly_profit,
        total_profit,
        total_revenue,
        total_electricity_cost,
        profitability_pct,
    }
}

/// 수익률 구간 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfitStatus {
    HighlyProfitable,
    Profitable,
    Marginal,
    NotProfitable,
}

impl ProfitStatus {
    /// 수익률[%]을 네 구간으로 나눈다. 경계값은 아래 구간에 속한다.
    pub fn classify(profitability_pct: f64) -> Self {
        if profitability_pct > 50.0 {
            ProfitStatus::HighlyProfitable
        } else if profitability_pct > 20.0 {
            ProfitStatus::Profitable
        } else if profitability_pct > 0.0 {
            ProfitStatus::Marginal
        } else {
            ProfitStatus::NotProfitable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc(hashrate: f64, cost: f64, months: u32) -> MiningInput {
        MiningInput {
            hashrate_ths: hashrate,
            electricity_cost_per_kwh: cost,
            duration_months: months,
            asset: CryptoAsset::Btc,
        }
    }

    #[test]
    fn btc_reference_case() {
        let res = compute_mining(&btc(10.0, 1.2, 12));
        // 10/1.5e8 × 6.25 × 144 × 435000
        assert!((res.daily_revenue - 26.1).abs() < 1e-9, "rev={}", res.daily_revenue);
        assert!((res.daily_electricity_cost - 1.008).abs() < 1e-12);
        assert!((res.daily_profit - 25.092).abs() < 1e-9);
        assert!((res.total_profit - 25.092 * 360.0).abs() < 1e-6);
        assert!(res.profitability_pct > 2000.0);
    }

    #[test]
    fn zero_electricity_price_gives_zero_profitability() {
        let res = compute_mining(&btc(10.0, 0.0, 12));
        assert_eq!(res.profitability_pct, 0.0);
        assert_eq!(res.daily_electricity_cost, 0.0);
    }

    #[test]
    fn zero_hashrate_is_finite() {
        let res = compute_mining(&btc(0.0, 1.2, 6));
        assert_eq!(res.profitability_pct, 0.0);
        assert_eq!(res.total_profit, 0.0);
    }

    #[test]
    fn status_boundaries_fall_to_lower_bucket() {
        assert_eq!(ProfitStatus::classify(50.0), ProfitStatus::Profitable);
        assert_eq!(ProfitStatus::classify(50.01), ProfitStatus::HighlyProfitable);
        assert_eq!(ProfitStatus::classify(20.0), ProfitStatus::Marginal);
        assert_eq!(ProfitStatus::classify(0.0), ProfitStatus::NotProfitable);
        assert_eq!(ProfitStatus::classify(-12.0), ProfitStatus::NotProfitable);
    }
}
