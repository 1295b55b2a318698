use log::debug;
use std::io::{self, BufRead};

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::report::{ReportError, SimulationReport};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 보고서 저장 오류
    Report(ReportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Report(e) => write!(f, "보고서 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ReportError> for AppError {
    fn from(value: ReportError) -> Self {
        AppError::Report(value)
    }
}

/// 표준 입력으로 대화형 CLI를 실행한다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<SimulationReport, AppError> {
    run_with(config, tr, &mut io::stdin().lock())
}

/// 대화형 CLI의 메인 루프를 실행한다. 종료 시 마지막 결과를 보고서에 담아 반환한다.
pub fn run_with(
    config: &mut Config,
    tr: &mut Translator,
    input: &mut dyn BufRead,
) -> Result<SimulationReport, AppError> {
    let mut report = SimulationReport::new(config.currency.clone());
    loop {
        match ui_cli::main_menu(tr, input)? {
            MenuChoice::Mining => {
                let (mining, result, points) = ui_cli::handle_mining(tr, config, input)?;
                report = report.with_mining(mining, result, points);
            }
            MenuChoice::Investment => {
                let (investment, result) = ui_cli::handle_investment(tr, config, input)?;
                report = report.with_investment(investment, result);
            }
            MenuChoice::Compare => {
                let rows = ui_cli::handle_compare(tr, config, input)?;
                report = report.with_comparison(rows);
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config, input)? {
                    config.save()?;
                    let resolved = i18n::resolve_language(&config.language, None);
                    *tr = Translator::new_with_pack(&resolved, config.language_pack_dir.as_deref());
                    debug!("language switched to {}", tr.language_code());
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(report)
}
