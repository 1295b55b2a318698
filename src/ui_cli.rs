use std::io::{self, BufRead, Write};

use log::debug;

use crate::app::AppError;
use crate::config::Config;
use crate::display::{self, FieldId};
use crate::i18n::{keys, Translator};
use crate::investment::{
    compare_categories, compute_investment, CategoryComparison, InvestmentCategory, InvestmentInput,
    InvestmentResult, RiskLevel,
};
use crate::limits;
use crate::mining::{compute_mining, projection, CryptoAsset, MiningInput, MiningResult, ProjectionPoint};
use crate::random::RngSource;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Mining,
    Investment,
    Compare,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu(tr: &Translator, input: &mut dyn BufRead) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MENU_TITLE));
    println!("1) {}", tr.t(keys::MENU_MINING));
    println!("2) {}", tr.t(keys::MENU_INVESTMENT));
    println!("3) {}", tr.t(keys::MENU_COMPARE));
    println!("4) {}", tr.t(keys::MENU_SETTINGS));
    println!("0) {}", tr.t(keys::MENU_EXIT));
    loop {
        let sel = match read_line(input, &tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(MenuChoice::Exit),
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Mining),
            "2" => return Ok(MenuChoice::Investment),
            "3" => return Ok(MenuChoice::Compare),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 채굴 수익성 메뉴를 처리한다. 입력값은 설정의 기본값으로 남긴다.
pub fn handle_mining(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut dyn BufRead,
) -> Result<(MiningInput, MiningResult, Vec<ProjectionPoint>), AppError> {
    println!("{}", tr.t(keys::MINING_HEADING));
    let currency = cfg.currency.clone();
    let hashrate = read_f64_in(tr, input, &label(tr, keys::LABEL_HASHRATE, &currency), &limits::HASHRATE_THS)?;
    let electricity = read_f64_in(
        tr,
        input,
        &label(tr, keys::LABEL_ELECTRICITY, &currency),
        &limits::ELECTRICITY_COST,
    )?;
    let months = read_choice(tr, input, &tr.t(keys::LABEL_MINING_DURATION), &limits::MINING_DURATIONS)?;
    let tickers: Vec<(CryptoAsset, String)> =
        CryptoAsset::ALL.iter().map(|a| (*a, a.ticker().to_string())).collect();
    let asset = read_option(tr, input, &tr.t(keys::LABEL_ASSET), &tickers)?;

    let mining = MiningInput {
        hashrate_ths: hashrate,
        electricity_cost_per_kwh: electricity,
        duration_months: months,
        asset,
    };
    let result = compute_mining(&mining);
    let points = projection(&mining);
    debug!("mining recalculated: {mining:?}");
    print_mining(tr, &mining, &result, &points, &currency);

    cfg.mining.hashrate_ths = hashrate;
    cfg.mining.electricity_cost_per_kwh = electricity;
    cfg.mining.duration_months = months;
    cfg.mining.asset = asset;
    Ok((mining, result, points))
}

/// 투자 수익률 메뉴를 처리한다.
pub fn handle_investment(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut dyn BufRead,
) -> Result<(InvestmentInput, InvestmentResult), AppError> {
    println!("{}", tr.t(keys::INVEST_HEADING));
    let currency = cfg.currency.clone();
    let principal = read_f64_in(tr, input, &label(tr, keys::LABEL_AMOUNT, &currency), &limits::PRINCIPAL)?;
    let categories: Vec<(InvestmentCategory, String)> = InvestmentCategory::ALL
        .iter()
        .map(|c| (*c, display::category_label(*c, tr)))
        .collect();
    let category = read_option(tr, input, &tr.t(keys::LABEL_CATEGORY), &categories)?;
    let months = read_choice(tr, input, &tr.t(keys::LABEL_INVEST_DURATION), &limits::INVESTMENT_DURATIONS)?;
    let risk = read_risk(tr, input)?;

    let investment = InvestmentInput {
        principal,
        category,
        duration_months: months,
        risk,
    };
    let result = compute_investment(&investment, &mut RngSource::from_entropy());
    debug!("investment recalculated: {investment:?}");
    print_investment(tr, &result, &currency);

    cfg.investment.principal = principal;
    cfg.investment.category = category;
    cfg.investment.duration_months = months;
    cfg.investment.risk = risk;
    Ok((investment, result))
}

/// 투자 상품 비교 메뉴를 처리한다.
pub fn handle_compare(
    tr: &Translator,
    cfg: &Config,
    input: &mut dyn BufRead,
) -> Result<Vec<CategoryComparison>, AppError> {
    let risk = read_risk(tr, input)?;
    let rows = compare_categories(cfg.investment.principal, cfg.investment.duration_months, risk);
    print_comparison(tr, &rows, &cfg.currency);
    Ok(rows)
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config, input: &mut dyn BufRead) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(input, &tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let lang = match sel.trim() {
        "" => return Ok(false),
        "1" => "auto",
        "2" => "en-us",
        "3" => "fr-fr",
        "4" => "ko-kr",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = lang.to_string();
    Ok(true)
}

/// 채굴 결과를 출력한다.
pub fn print_mining(
    tr: &Translator,
    input: &MiningInput,
    result: &MiningResult,
    points: &[ProjectionPoint],
    currency: &str,
) {
    let fields = display::mining_fields(result, input.asset, tr, currency);
    let value = |id| display::field_value(&fields, id).unwrap_or_default();
    for (key, native, local) in [
        (keys::RESULT_DAILY, FieldId::DailyEarnings, FieldId::DailyEarningsLocal),
        (keys::RESULT_MONTHLY, FieldId::MonthlyEarnings, FieldId::MonthlyEarningsLocal),
        (keys::RESULT_TOTAL, FieldId::TotalEarnings, FieldId::TotalEarningsLocal),
    ] {
        println!("{}: {} ({})", tr.t(key), value(native), value(local));
    }
    println!(
        "{}: {} ({})",
        tr.t(keys::RESULT_PROFITABILITY),
        value(FieldId::Profitability),
        value(FieldId::ProfitStatus)
    );
    if !points.is_empty() {
        println!("{}", tr.fill(keys::CHART_SERIES, &[("currency", currency.to_string())]));
        let fmt = tr.number_format();
        for (label, v) in display::chart_series(points, tr) {
            println!("  {label:>10}  {:>14}", display::format_integer(v, fmt));
        }
    }
}

/// 투자 결과를 출력한다.
pub fn print_investment(tr: &Translator, result: &InvestmentResult, currency: &str) {
    let fields = display::investment_fields(result, tr, currency);
    for (key, id) in [
        (keys::RESULT_EXPECTED_ROI, FieldId::ExpectedRoi),
        (keys::RESULT_TOTAL_RETURN, FieldId::TotalReturn),
        (keys::RESULT_NET_PROFIT, FieldId::NetProfit),
        (keys::RESULT_MONTHLY_INCOME, FieldId::MonthlyIncome),
    ] {
        println!(
            "{}: {}",
            tr.t(key),
            display::field_value(&fields, id).unwrap_or_default()
        );
    }
}

/// 비교표를 출력한다.
pub fn print_comparison(tr: &Translator, rows: &[CategoryComparison], currency: &str) {
    let fmt = tr.number_format();
    println!("{}", tr.t(keys::COMPARE_HEADING));
    println!(
        "{:<22} {:<14} {:<12} {:<10} {}",
        tr.t(keys::LABEL_CATEGORY),
        tr.t(keys::COMPARE_COL_ROI_RANGE),
        tr.t(keys::COMPARE_COL_RISK),
        tr.t(keys::COMPARE_COL_LIQUIDITY),
        tr.t(keys::COMPARE_COL_PROFIT)
    );
    for row in rows {
        println!(
            "{:<22} {:<14} {:<12} {:<10} {}",
            display::category_label(row.category, tr),
            format!(
                "{}–{}",
                display::format_percent(row.roi_low_pct, fmt),
                display::format_percent(row.roi_high_pct, fmt)
            ),
            display::risk_label(row.typical_risk, tr),
            display::liquidity_label(row.liquidity, tr),
            display::format_currency(row.projected.net_profit, fmt, currency)
        );
    }
}

fn label(tr: &Translator, key: &str, currency: &str) -> String {
    tr.fill(key, &[("currency", currency.to_string())])
}

fn read_risk(tr: &Translator, input: &mut dyn BufRead) -> Result<RiskLevel, AppError> {
    let risks: Vec<(RiskLevel, String)> = RiskLevel::ALL
        .iter()
        .map(|r| (*r, display::risk_label(*r, tr)))
        .collect();
    read_option(tr, input, &tr.t(keys::LABEL_RISK), &risks)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof`.
fn read_line(input: &mut dyn BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64_in(
    tr: &Translator,
    input: &mut dyn BufRead,
    prompt: &str,
    range: &std::ops::RangeInclusive<f64>,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, &format!("{prompt}: "))?;
        match s.trim().replace(',', ".").parse::<f64>() {
            Ok(v) => match limits::check_range(v, range) {
                Ok(v) => return Ok(v),
                Err(e) => println!(
                    "{}",
                    tr.fill(
                        keys::ERROR_OUT_OF_RANGE,
                        &[("min", e.min.to_string()), ("max", e.max.to_string())]
                    )
                ),
            },
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_choice(tr: &Translator, input: &mut dyn BufRead, prompt: &str, options: &[u32]) -> Result<u32, AppError> {
    let listed: Vec<String> = options.iter().map(u32::to_string).collect();
    loop {
        let s = read_line(input, &format!("{prompt} ({}): ", listed.join("/")))?;
        match s.trim().parse::<u32>() {
            Ok(v) if options.contains(&v) => return Ok(v),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_option<T: Copy>(
    tr: &Translator,
    input: &mut dyn BufRead,
    prompt: &str,
    options: &[(T, String)],
) -> Result<T, AppError> {
    println!("{prompt}:");
    for (i, (_, text)) in options.iter().enumerate() {
        println!("  {}) {text}", i + 1);
    }
    loop {
        let s = read_line(input, &tr.t(keys::PROMPT_SELECT))?;
        match s.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(options[n - 1].0),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
