use log::trace;
use serde::{Deserialize, Serialize};

use super::categories::{constants, InvestmentCategory, RiskLevel};
use crate::random::UniformSource;

/// 변동 폭의 절반 [%p]. 변동은 [-2, +2] 구간에서 균등하게 뽑는다.
pub const ROI_VARIATION_HALF_WIDTH: f64 = 2.0;
/// 유효 ROI 하한 [%]
pub const MIN_EFFECTIVE_ROI: f64 = 5.0;
/// 유효 ROI 상한 [%]
pub const MAX_EFFECTIVE_ROI: f64 = 40.0;

/// 투자 시뮬레이션 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// 투자 원금 [현지 통화]
    pub principal: f64,
    pub category: InvestmentCategory,
    /// 투자 기간 [개월]
    pub duration_months: u32,
    pub risk: RiskLevel,
}

/// 투자 시뮬레이션 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentResult {
    /// 변동 반영 후 연 ROI [%]
    pub effective_roi_pct: f64,
    /// 월 이율(소수)
    pub monthly_rate: f64,
    /// 만기 총액 [현지 통화]
    pub total_return: f64,
    /// 순이익 [현지 통화]
    pub net_profit: f64,
    /// 월 평균 수입 [현지 통화]
    pub monthly_income: f64,
}

/// 분류 중간값에 위험 수준 가감치를 적용한 기준 ROI [%].
pub fn base_roi(category: InvestmentCategory, risk: RiskLevel) -> f64 {
    let params = constants(category);
    let mid = (params.min_roi_pct + params.max_roi_pct) / 2.0;
    mid + risk.adjustment_pct()
}

/// 변동을 포함해 나올 수 있는 유효 ROI 범위 [%].
pub fn roi_bounds(category: InvestmentCategory, risk: RiskLevel) -> (f64, f64) {
    let base = base_roi(category, risk);
    (
        clamp_roi(base - ROI_VARIATION_HALF_WIDTH),
        clamp_roi(base + ROI_VARIATION_HALF_WIDTH),
    )
}

fn clamp_roi(roi: f64) -> f64 {
    roi.clamp(MIN_EFFECTIVE_ROI, MAX_EFFECTIVE_ROI)
}

/// 난수 공급원에서 한 번 뽑아 유효 ROI를 정하고 복리 수익을 계산한다.
pub fn compute_investment(input: &InvestmentInput, source: &mut dyn UniformSource) -> InvestmentResult {
    let base = base_roi(input.category, input.risk);
    let variation = (source.next_uniform() - 0.5) * 2.0 * ROI_VARIATION_HALF_WIDTH;
    trace!("roi draw: base={base:.2} variation={variation:.3}");
    compute_investment_with_roi(input, clamp_roi(base + variation))
}

/// 주어진 연 ROI[%]로 월 복리 수익을 계산한다.
///
/// 기간이 0이면 총액은 원금과 같고 월 수입은 0으로 둔다.
pub fn compute_investment_with_roi(input: &InvestmentInput, roi_pct: f64) -> InvestmentResult {
    let monthly_rate = roi_pct / 12.0 / 100.0;
    let exponent = i32::try_from(input.duration_months).unwrap_or(i32::MAX);
    let total_return = input.principal * (1.0 + monthly_rate).powi(exponent);
    let net_profit = total_return - input.principal;
    let monthly_income = if input.duration_months > 0 {
        net_profit / f64::from(input.duration_months)
    } else {
        0.0
    };
    InvestmentResult {
        effective_roi_pct: roi_pct,
        monthly_rate,
        total_return,
        net_profit,
        monthly_income,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSource;

    fn input(category: InvestmentCategory, risk: RiskLevel, months: u32) -> InvestmentInput {
        InvestmentInput {
            principal: 50_000.0,
            category,
            duration_months: months,
            risk,
        }
    }

    #[test]
    fn mining_medium_neutral_draw() {
        let res = compute_investment(
            &input(InvestmentCategory::Mining, RiskLevel::Medium, 12),
            &mut FixedSource::NEUTRAL,
        );
        assert!((res.effective_roi_pct - 17.5).abs() < 1e-12);
        assert!((res.monthly_rate - 0.0145833333).abs() < 1e-9);
        let expected = 50_000.0 * (1.0 + 17.5 / 1200.0_f64).powi(12);
        assert!((res.total_return - expected).abs() < 1e-6);
        assert!((res.total_return - 59_487.0).abs() < 2.0, "{}", res.total_return);
        assert!((res.net_profit - (expected - 50_000.0)).abs() < 1e-6);
    }

    #[test]
    fn risk_shifts_base_by_two_points() {
        let low = base_roi(InvestmentCategory::Exchange, RiskLevel::Low);
        let mid = base_roi(InvestmentCategory::Exchange, RiskLevel::Medium);
        let high = base_roi(InvestmentCategory::Exchange, RiskLevel::High);
        assert_eq!(mid, 22.5);
        assert_eq!(low, 20.5);
        assert_eq!(high, 24.5);
    }

    #[test]
    fn extreme_draws_stay_within_two_points() {
        let i = input(InvestmentCategory::Technology, RiskLevel::High, 6);
        let lo = compute_investment(&i, &mut FixedSource(0.0)).effective_roi_pct;
        let hi = compute_investment(&i, &mut FixedSource(0.999_999)).effective_roi_pct;
        assert!((lo - 30.0).abs() < 1e-9);
        assert!(hi < 34.0 && hi > 33.99);
        assert_eq!(roi_bounds(InvestmentCategory::Technology, RiskLevel::High), (30.0, 34.0));
    }

    #[test]
    fn zero_duration_returns_principal() {
        let res = compute_investment_with_roi(&input(InvestmentCategory::Token, RiskLevel::Low, 0), 21.0);
        assert_eq!(res.total_return, 50_000.0);
        assert_eq!(res.net_profit, 0.0);
        assert_eq!(res.monthly_income, 0.0);
    }
}
