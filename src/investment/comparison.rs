use serde::Serialize;

use super::categories::{constants, InvestmentCategory, Liquidity, RiskLevel};
use super::roi::{base_roi, compute_investment_with_roi, roi_bounds, InvestmentInput, InvestmentResult};

/// 투자 분류 비교표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: InvestmentCategory,
    pub min_roi_pct: f64,
    pub max_roi_pct: f64,
    pub typical_risk: RiskLevel,
    pub liquidity: Liquidity,
    /// 선택한 위험 수준에서 가능한 유효 ROI 하한/상한 [%]
    pub roi_low_pct: f64,
    pub roi_high_pct: f64,
    /// 변동 없이 기준 ROI로 계산한 결과
    pub projected: InvestmentResult,
}

/// 같은 원금/기간/위험 수준으로 모든 분류를 나란히 계산한다. 난수를 쓰지 않는다.
pub fn compare_categories(principal: f64, duration_months: u32, risk: RiskLevel) -> Vec<CategoryComparison> {
    InvestmentCategory::ALL
        .iter()
        .map(|&category| {
            let params = constants(category);
            let (roi_low_pct, roi_high_pct) = roi_bounds(category, risk);
            let input = InvestmentInput {
                principal,
                category,
                duration_months,
                risk,
            };
            CategoryComparison {
                category,
                min_roi_pct: params.min_roi_pct,
                max_roi_pct: params.max_roi_pct,
                typical_risk: params.typical_risk,
                liquidity: params.liquidity,
                roi_low_pct,
                roi_high_pct,
                projected: compute_investment_with_roi(&input, base_roi(category, risk)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_category_in_fixed_order() {
        let rows = compare_categories(10_000.0, 12, RiskLevel::Medium);
        let cats: Vec<_> = rows.iter().map(|r| r.category).collect();
        assert_eq!(cats, InvestmentCategory::ALL.to_vec());
        assert_eq!(rows[2].projected.effective_roi_pct, 30.0);
        assert_eq!(rows[3].liquidity, Liquidity::Variable);
    }
}
