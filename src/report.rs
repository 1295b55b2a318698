//! 시뮬레이션 결과를 TOML 보고서로 내보낸다.

use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::investment::{CategoryComparison, InvestmentInput, InvestmentResult};
use crate::mining::{MiningInput, MiningResult, ProjectionPoint};

#[derive(Debug, Clone, Serialize)]
pub struct MiningSection {
    pub input: MiningInput,
    pub result: MiningResult,
    pub projection: Vec<ProjectionPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentSection {
    pub input: InvestmentInput,
    pub result: InvestmentResult,
}

/// 내보낼 보고서. 비어 있는 절은 생략한다.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimulationReport {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mining: Option<MiningSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment: Option<InvestmentSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comparison: Vec<CategoryComparison>,
}

/// 보고서 저장 오류.
#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ReportError::Serialize(e) => write!(f, "보고서 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(value: std::io::Error) -> Self {
        ReportError::Io(value)
    }
}

impl From<toml::ser::Error> for ReportError {
    fn from(value: toml::ser::Error) -> Self {
        ReportError::Serialize(value)
    }
}

impl SimulationReport {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Default::default()
        }
    }

    pub fn with_mining(mut self, input: MiningInput, result: MiningResult, projection: Vec<ProjectionPoint>) -> Self {
        self.mining = Some(MiningSection {
            input,
            result,
            projection,
        });
        self
    }

    pub fn with_investment(mut self, input: InvestmentInput, result: InvestmentResult) -> Self {
        self.investment = Some(InvestmentSection { input, result });
        self
    }

    pub fn with_comparison(mut self, rows: Vec<CategoryComparison>) -> Self {
        self.comparison = rows;
        self
    }

    pub fn to_toml(&self) -> Result<String, ReportError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_toml()?)?;
        info!("report written to {}", path.display());
        Ok(())
    }
}
