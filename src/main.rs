use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use mining_yield_toolbox::{
    app, config, i18n,
    investment::{compare_categories, compute_investment, InvestmentCategory, InvestmentInput, RiskLevel},
    limits,
    mining::{compute_mining, projection, CryptoAsset, MiningInput},
    random::{RngSource, UniformSource},
    report::SimulationReport,
    ui_cli,
};

/// 채굴 수익성과 투자 수익률을 계산하는 CLI.
#[derive(Debug, Parser)]
#[command(name = "mining_yield_toolbox_cli", version)]
struct Cli {
    /// 표시 언어 (auto/en/fr/ko)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    lang: String,
    /// 계산 결과를 TOML 보고서로 저장할 경로
    #[arg(long, global = true)]
    export: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 채굴 수익성 계산
    Mining {
        #[arg(long)]
        asset: Option<CryptoAsset>,
        /// 해시레이트 [TH/s]
        #[arg(long, value_parser = parse_hashrate)]
        hashrate: Option<f64>,
        /// 전기 요금 [현지 통화/kWh]
        #[arg(long, value_parser = parse_electricity)]
        electricity: Option<f64>,
        #[arg(long)]
        months: Option<u32>,
    },
    /// 투자 수익률 계산
    Invest {
        #[arg(long, value_parser = parse_principal)]
        amount: Option<f64>,
        #[arg(long)]
        category: Option<InvestmentCategory>,
        #[arg(long)]
        months: Option<u32>,
        #[arg(long)]
        risk: Option<RiskLevel>,
        /// 재현 가능한 ROI 변동을 위한 시드
        #[arg(long)]
        seed: Option<u64>,
    },
    /// 투자 상품 비교표
    Compare {
        #[arg(long, value_parser = parse_principal)]
        amount: Option<f64>,
        #[arg(long)]
        months: Option<u32>,
        #[arg(long)]
        risk: Option<RiskLevel>,
    },
}

fn parse_in(s: &str, range: &std::ops::RangeInclusive<f64>) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    limits::check_range(v, range).map_err(|e| e.to_string())
}

fn parse_hashrate(s: &str) -> Result<f64, String> {
    parse_in(s, &limits::HASHRATE_THS)
}

fn parse_electricity(s: &str) -> Result<f64, String> {
    parse_in(s, &limits::ELECTRICITY_COST)
}

fn parse_principal(s: &str) -> Result<f64, String> {
    parse_in(s, &limits::PRINCIPAL)
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() {
    env_logger::init();
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    info!("language: {}", tr.language_code());

    let currency = cfg.currency.clone();
    let report = match cli.command {
        None => app::run(&mut cfg, &mut tr)?,
        Some(Command::Mining {
            asset,
            hashrate,
            electricity,
            months,
        }) => {
            let d = &cfg.mining;
            let input = MiningInput {
                hashrate_ths: hashrate.unwrap_or(d.hashrate_ths),
                electricity_cost_per_kwh: electricity.unwrap_or(d.electricity_cost_per_kwh),
                duration_months: months.map_or(d.duration_months, |m| {
                    limits::nearest_duration(m, &limits::MINING_DURATIONS)
                }),
                asset: asset.unwrap_or(d.asset),
            };
            let result = compute_mining(&input);
            let points = projection(&input);
            ui_cli::print_mining(&tr, &input, &result, &points, &currency);
            SimulationReport::new(currency.clone()).with_mining(input, result, points)
        }
        Some(Command::Invest {
            amount,
            category,
            months,
            risk,
            seed,
        }) => {
            let d = &cfg.investment;
            let input = InvestmentInput {
                principal: amount.unwrap_or(d.principal),
                category: category.unwrap_or(d.category),
                duration_months: months.map_or(d.duration_months, |m| {
                    limits::nearest_duration(m, &limits::INVESTMENT_DURATIONS)
                }),
                risk: risk.unwrap_or(d.risk),
            };
            let mut source: Box<dyn UniformSource> = match seed {
                Some(s) => Box::new(RngSource::seeded(s)),
                None => Box::new(RngSource::from_entropy()),
            };
            let result = compute_investment(&input, source.as_mut());
            ui_cli::print_investment(&tr, &result, &currency);
            SimulationReport::new(currency.clone()).with_investment(input, result)
        }
        Some(Command::Compare { amount, months, risk }) => {
            let d = &cfg.investment;
            let rows = compare_categories(
                amount.unwrap_or(d.principal),
                months.map_or(d.duration_months, |m| {
                    limits::nearest_duration(m, &limits::INVESTMENT_DURATIONS)
                }),
                risk.unwrap_or(d.risk),
            );
            ui_cli::print_comparison(&tr, &rows, &currency);
            SimulationReport::new(currency.clone()).with_comparison(rows)
        }
    };

    if let Some(path) = cli.export {
        report.save(&path)?;
        println!(
            "{}",
            tr.fill(i18n::keys::EXPORT_SAVED, &[("path", path.display().to_string())])
        );
    }
    Ok(())
}
