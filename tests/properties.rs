use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use mining_yield_toolbox::display::{format_integer, NumberFormat};
use mining_yield_toolbox::investment::{
    compute_investment, roi_bounds, InvestmentCategory, InvestmentInput, RiskLevel, MAX_EFFECTIVE_ROI,
    MIN_EFFECTIVE_ROI,
};
use mining_yield_toolbox::limits;
use mining_yield_toolbox::mining::{compute_mining, projection, CryptoAsset, MiningInput, KW_PER_THS};
use mining_yield_toolbox::random::FixedSource;

/// 임의 값을 닫힌 구간으로 접는다.
fn fold_into(x: f64, lo: f64, hi: f64) -> f64 {
    if !x.is_finite() {
        return lo;
    }
    lo + (x.abs() % 1.0) * (hi - lo)
}

fn mining_input(seed: u8, hashrate: f64, cost: f64) -> MiningInput {
    let asset = CryptoAsset::ALL[usize::from(seed) % CryptoAsset::ALL.len()];
    let months = limits::MINING_DURATIONS[usize::from(seed) % limits::MINING_DURATIONS.len()];
    MiningInput {
        hashrate_ths: fold_into(hashrate, *limits::HASHRATE_THS.start(), *limits::HASHRATE_THS.end()),
        electricity_cost_per_kwh: fold_into(cost, *limits::ELECTRICITY_COST.start(), *limits::ELECTRICITY_COST.end()),
        duration_months: months,
        asset,
    }
}

#[quickcheck]
fn revenue_strictly_grows_with_hashrate(seed: u8, hashrate: f64, cost: f64, step: f64) -> bool {
    let a = mining_input(seed, hashrate, cost);
    let mut b = a;
    b.hashrate_ths = a.hashrate_ths + fold_into(step, 0.5, 100.0);
    compute_mining(&b).daily_revenue > compute_mining(&a).daily_revenue
}

#[quickcheck]
fn profit_grows_while_revenue_per_ths_beats_power(seed: u8, hashrate: f64, cost: f64, step: f64) -> TestResult {
    let a = mining_input(seed, hashrate, cost);
    let ra = compute_mining(&a);
    let power_per_ths = KW_PER_THS * 24.0 * a.electricity_cost_per_kwh / 1000.0;
    if ra.daily_revenue / a.hashrate_ths <= power_per_ths {
        return TestResult::discard();
    }
    let mut b = a;
    b.hashrate_ths = a.hashrate_ths + fold_into(step, 0.5, 100.0);
    TestResult::from_bool(compute_mining(&b).daily_profit > ra.daily_profit)
}

#[quickcheck]
fn profitability_is_always_finite(seed: u8, hashrate: f64, cost: f64) -> bool {
    let res = compute_mining(&mining_input(seed, hashrate, cost));
    res.profitability_pct.is_finite() && res.total_profit.is_finite()
}

#[quickcheck]
fn total_profit_is_daily_times_days(seed: u8, hashrate: f64, cost: f64) -> bool {
    let input = mining_input(seed, hashrate, cost);
    let res = compute_mining(&input);
    let expected = res.daily_profit * 30.0 * f64::from(input.duration_months);
    (res.total_profit - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

#[quickcheck]
fn projection_length_is_capped_duration(seed: u8, hashrate: f64, months: u8) -> bool {
    let mut input = mining_input(seed, hashrate, 0.5);
    input.duration_months = u32::from(months);
    projection(&input).len() == usize::from(months).min(24)
}

#[quickcheck]
fn effective_roi_stays_in_bounds(u: f64, cat: u8, risk: u8) -> bool {
    let category = InvestmentCategory::ALL[usize::from(cat) % 4];
    let risk = RiskLevel::ALL[usize::from(risk) % 3];
    let input = InvestmentInput {
        principal: 10_000.0,
        category,
        duration_months: 12,
        risk,
    };
    let roi = compute_investment(&input, &mut FixedSource(fold_into(u, 0.0, 1.0))).effective_roi_pct;
    let (lo, hi) = roi_bounds(category, risk);
    (MIN_EFFECTIVE_ROI..=MAX_EFFECTIVE_ROI).contains(&roi) && roi >= lo - 1e-12 && roi <= hi + 1e-12
}

#[quickcheck]
fn grouped_integer_has_no_stray_separators(v: i32) -> bool {
    let s = format_integer(f64::from(v), NumberFormat::ENGLISH);
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits == v.unsigned_abs().to_string() && !s.starts_with(',') && !s.ends_with(',')
}
