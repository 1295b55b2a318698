//! 계산 결과를 화면 표시용 문자열로 바꾸는 어댑터.
//!
//! 상태를 갖지 않으며, 반올림과 자릿수 구분 외의 계산은 하지 않는다.

use crate::i18n::{keys, Translator};
use crate::investment::{InvestmentCategory, InvestmentResult, Liquidity, RiskLevel};
use crate::mining::{constants, CryptoAsset, MiningResult, ProfitStatus, ProjectionPoint};

/// 숫자 표기 규칙(천 단위 구분자, 소수점 문자).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub group_separator: &'static str,
    pub decimal_separator: char,
}

impl NumberFormat {
    pub const ENGLISH: NumberFormat = NumberFormat {
        group_separator: ",",
        decimal_separator: '.',
    };
    /// 프랑스식: 좁은 줄바꿈 없는 공백 + 쉼표 소수점
    pub const FRENCH: NumberFormat = NumberFormat {
        group_separator: "\u{202f}",
        decimal_separator: ',',
    };
}

/// 출력 필드 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    DailyEarnings,
    DailyEarningsLocal,
    MonthlyEarnings,
    MonthlyEarningsLocal,
    TotalEarnings,
    TotalEarningsLocal,
    Profitability,
    ProfitStatus,
    ExpectedRoi,
    TotalReturn,
    NetProfit,
    MonthlyIncome,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::DailyEarnings => "daily-earnings",
            FieldId::DailyEarningsLocal => "daily-earnings-mad",
            FieldId::MonthlyEarnings => "monthly-earnings",
            FieldId::MonthlyEarningsLocal => "monthly-earnings-mad",
            FieldId::TotalEarnings => "total-earnings",
            FieldId::TotalEarningsLocal => "total-earnings-mad",
            FieldId::Profitability => "profitability",
            FieldId::ProfitStatus => "profit-status",
            FieldId::ExpectedRoi => "expected-roi",
            FieldId::TotalReturn => "total-return",
            FieldId::NetProfit => "net-profit",
            FieldId::MonthlyIncome => "monthly-income",
        }
    }
}

/// 0.5는 양의 방향으로 올린다(-2.5 → -2).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn group_digits(digits: &str, sep: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}

/// 정수로 반올림한 뒤 천 단위로 구분한다.
pub fn format_integer(value: f64, fmt: NumberFormat) -> String {
    let rounded = round_half_up(value);
    if !rounded.is_finite() {
        return rounded.to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_digits(&digits, fmt.group_separator);
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// 고정 소수 자릿수로 표기한다(천 단위 구분 없음).
pub fn format_decimal(value: f64, decimals: usize, fmt: NumberFormat) -> String {
    let s = format!("{value:.decimals$}");
    if fmt.decimal_separator == '.' {
        s
    } else {
        s.replace('.', &fmt.decimal_separator.to_string())
    }
}

/// 현지 통화 금액: "1,235 MAD"
pub fn format_currency(value: f64, fmt: NumberFormat, currency: &str) -> String {
    format!("{} {currency}", format_integer(value, fmt))
}

/// 현지 통화 금액을 자산 단가로 나눠 6자리로 표기한다: "0.000058 BTC"
pub fn format_asset(value_local: f64, price_local: f64, fmt: NumberFormat, ticker: &str) -> String {
    let units = if price_local > 0.0 {
        value_local / price_local
    } else {
        0.0
    };
    format!("{} {ticker}", format_decimal(units, 6, fmt))
}

/// 백분율: "17.5%"
pub fn format_percent(pct: f64, fmt: NumberFormat) -> String {
    format!("{}%", format_decimal(pct, 1, fmt))
}

pub fn status_label(status: ProfitStatus, tr: &Translator) -> String {
    tr.t(match status {
        ProfitStatus::HighlyProfitable => keys::STATUS_HIGHLY_PROFITABLE,
        ProfitStatus::Profitable => keys::STATUS_PROFITABLE,
        ProfitStatus::Marginal => keys::STATUS_MARGINAL,
        ProfitStatus::NotProfitable => keys::STATUS_NOT_PROFITABLE,
    })
}

pub fn category_label(category: InvestmentCategory, tr: &Translator) -> String {
    tr.t(match category {
        InvestmentCategory::Mining => keys::CATEGORY_MINING,
        InvestmentCategory::Exchange => keys::CATEGORY_EXCHANGE,
        InvestmentCategory::Technology => keys::CATEGORY_TECHNOLOGY,
        InvestmentCategory::Token => keys::CATEGORY_TOKEN,
    })
}

pub fn risk_label(risk: RiskLevel, tr: &Translator) -> String {
    tr.t(match risk {
        RiskLevel::Low => keys::RISK_LOW,
        RiskLevel::Medium => keys::RISK_MEDIUM,
        RiskLevel::High => keys::RISK_HIGH,
    })
}

pub fn liquidity_label(liquidity: Liquidity, tr: &Translator) -> String {
    tr.t(match liquidity {
        Liquidity::Low => keys::LIQUIDITY_LOW,
        Liquidity::Medium => keys::LIQUIDITY_MEDIUM,
        Liquidity::High => keys::LIQUIDITY_HIGH,
        Liquidity::Variable => keys::LIQUIDITY_VARIABLE,
    })
}

/// 채굴 결과를 (필드, 문자열) 목록으로 변환한다.
pub fn mining_fields(
    result: &MiningResult,
    asset: CryptoAsset,
    tr: &Translator,
    currency: &str,
) -> Vec<(FieldId, String)> {
    let fmt = tr.number_format();
    let price = constants(asset).price_local_currency;
    let ticker = asset.ticker();
    vec![
        (FieldId::DailyEarnings, format_asset(result.daily_profit, price, fmt, ticker)),
        (FieldId::DailyEarningsLocal, format_currency(result.daily_profit, fmt, currency)),
        (FieldId::MonthlyEarnings, format_asset(result.monthly_profit, price, fmt, ticker)),
        (FieldId::MonthlyEarningsLocal, format_currency(result.monthly_profit, fmt, currency)),
        (FieldId::TotalEarnings, format_asset(result.total_profit, price, fmt, ticker)),
        (FieldId::TotalEarningsLocal, format_currency(result.total_profit, fmt, currency)),
        (FieldId::Profitability, format_percent(result.profitability_pct, fmt)),
        (
            FieldId::ProfitStatus,
            status_label(ProfitStatus::classify(result.profitability_pct), tr),
        ),
    ]
}

/// 투자 결과를 (필드, 문자열) 목록으로 변환한다.
pub fn investment_fields(result: &InvestmentResult, tr: &Translator, currency: &str) -> Vec<(FieldId, String)> {
    let fmt = tr.number_format();
    vec![
        (FieldId::ExpectedRoi, format_percent(result.effective_roi_pct, fmt)),
        (FieldId::TotalReturn, format_currency(result.total_return, fmt, currency)),
        (FieldId::NetProfit, format_currency(result.net_profit, fmt, currency)),
        (FieldId::MonthlyIncome, format_currency(result.monthly_income, fmt, currency)),
    ]
}

/// 차트 협력자에게 넘길 (라벨, 누적 수익) 시리즈.
pub fn chart_series(points: &[ProjectionPoint], tr: &Translator) -> Vec<(String, f64)> {
    points
        .iter()
        .map(|p| {
            (
                tr.fill(keys::CHART_PERIOD, &[("n", p.month.to_string())]),
                p.cumulative_earnings,
            )
        })
        .collect()
}

/// 필드 목록에서 값을 찾는다.
pub fn field_value(fields: &[(FieldId, String)], id: FieldId) -> Option<&str> {
    fields.iter().find(|(f, _)| *f == id).map(|(_, v)| v.as_str())
}
