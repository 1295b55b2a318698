use mining_yield_toolbox::mining::{
    compute_mining, constants, projection, CryptoAsset, MiningInput, ProfitStatus, MAX_PROJECTION_MONTHS,
};

fn btc_reference() -> MiningInput {
    MiningInput {
        hashrate_ths: 10.0,
        electricity_cost_per_kwh: 1.2,
        duration_months: 12,
        asset: CryptoAsset::Btc,
    }
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn btc_reference_case() {
    let res = compute_mining(&btc_reference());
    assert!(close(res.daily_revenue, 26.1, 1e-9), "revenue={}", res.daily_revenue);
    assert!(close(res.daily_electricity_cost, 1.008, 1e-12));
    assert!(close(res.daily_profit, 25.092, 1e-9));
    assert!(close(res.monthly_profit, 752.76, 1e-6));
    assert!(close(res.total_profit, 9_033.12, 1e-6));
    assert!(close(res.total_revenue, 9_396.0, 1e-6));
    assert!(close(res.total_electricity_cost, 362.88, 1e-9));
    assert!(close(res.profitability_pct, 2_489.2857, 1e-3), "pct={}", res.profitability_pct);
    assert_eq!(ProfitStatus::classify(res.profitability_pct), ProfitStatus::HighlyProfitable);
}

#[test]
fn free_electricity_reports_zero_profitability() {
    let mut input = btc_reference();
    input.electricity_cost_per_kwh = 0.0;
    let res = compute_mining(&input);
    assert_eq!(res.daily_electricity_cost, 0.0);
    assert_eq!(res.profitability_pct, 0.0);
    assert!(res.daily_profit > 0.0);
    assert_eq!(ProfitStatus::classify(res.profitability_pct), ProfitStatus::NotProfitable);
}

#[test]
fn power_costlier_than_revenue_is_unprofitable() {
    // 계산 자체는 범위를 검사하지 않는다
    let mut input = btc_reference();
    input.electricity_cost_per_kwh = 40.0;
    let res = compute_mining(&input);
    assert!(close(res.daily_electricity_cost, 33.6, 1e-9));
    assert!(res.daily_profit < 0.0);
    assert!(res.profitability_pct < 0.0);
    assert_eq!(ProfitStatus::classify(res.profitability_pct), ProfitStatus::NotProfitable);
}

#[test]
fn results_scale_linearly_with_duration() {
    let mut short = btc_reference();
    short.duration_months = 3;
    let mut long = btc_reference();
    long.duration_months = 24;
    let a = compute_mining(&short);
    let b = compute_mining(&long);
    assert_eq!(a.daily_profit, b.daily_profit);
    assert!(close(b.total_profit, a.total_profit * 8.0, 1e-6));
    // 수익률은 기간과 무관
    assert!(close(a.profitability_pct, b.profitability_pct, 1e-9));
}

#[test]
fn status_boundaries_fall_to_lower_band() {
    assert_eq!(ProfitStatus::classify(50.0), ProfitStatus::Profitable);
    assert_eq!(ProfitStatus::classify(50.01), ProfitStatus::HighlyProfitable);
    assert_eq!(ProfitStatus::classify(20.0), ProfitStatus::Marginal);
    assert_eq!(ProfitStatus::classify(0.0), ProfitStatus::NotProfitable);
    assert_eq!(ProfitStatus::classify(-12.0), ProfitStatus::NotProfitable);
}

#[test]
fn projection_matches_rounded_cumulative_profit() {
    let pts = projection(&btc_reference());
    assert_eq!(pts.len(), 12);
    assert_eq!(pts[0].month, 1);
    assert_eq!(pts[0].cumulative_earnings, 753.0);
    assert_eq!(pts[11].cumulative_earnings, 9_033.0);
    assert!(pts.windows(2).all(|w| w[1].cumulative_earnings >= w[0].cumulative_earnings));
}

#[test]
fn projection_is_capped() {
    let mut input = btc_reference();
    input.duration_months = 60;
    let pts = projection(&input);
    assert_eq!(pts.len(), MAX_PROJECTION_MONTHS as usize);
    assert_eq!(pts.last().map(|p| p.month), Some(MAX_PROJECTION_MONTHS));
}

#[test]
fn every_asset_has_positive_constants() {
    for asset in CryptoAsset::ALL {
        let c = constants(asset);
        assert!(c.network_hashrate_ths > 0.0, "{asset:?}");
        assert!(c.price_local_currency > 0.0, "{asset:?}");
        assert!(c.blocks_per_day > 0.0, "{asset:?}");
    }
}

#[test]
fn more_hashrate_deepens_loss_when_power_costs_more() {
    let mut small = btc_reference();
    small.electricity_cost_per_kwh = 40.0;
    let mut big = small;
    big.hashrate_ths = 20.0;
    let (a, b) = (compute_mining(&small), compute_mining(&big));
    assert!(b.daily_revenue > a.daily_revenue);
    assert!(b.daily_profit < a.daily_profit);
}
