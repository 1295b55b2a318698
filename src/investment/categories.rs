use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 투자 상품 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentCategory {
    Mining,
    Exchange,
    Technology,
    Token,
}

impl InvestmentCategory {
    pub const ALL: [InvestmentCategory; 4] = [
        InvestmentCategory::Mining,
        InvestmentCategory::Exchange,
        InvestmentCategory::Technology,
        InvestmentCategory::Token,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            InvestmentCategory::Mining => "mining",
            InvestmentCategory::Exchange => "exchange",
            InvestmentCategory::Technology => "technology",
            InvestmentCategory::Token => "token",
        }
    }
}

impl FromStr for InvestmentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mining" => Ok(InvestmentCategory::Mining),
            "exchange" => Ok(InvestmentCategory::Exchange),
            "technology" | "tech" => Ok(InvestmentCategory::Technology),
            "token" => Ok(InvestmentCategory::Token),
            other => Err(format!("알 수 없는 투자 분류: {other}")),
        }
    }
}

/// 위험 수준. 중간 ROI에 고정 가감치를 적용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn code(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// 중간 ROI에 더할 가감치 [%p].
    pub fn adjustment_pct(&self) -> f64 {
        match self {
            RiskLevel::Low => -2.0,
            RiskLevel::Medium => 0.0,
            RiskLevel::High => 2.0,
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" | "mid" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("알 수 없는 위험 수준: {other}")),
        }
    }
}

/// 환금성 등급(비교표 표시용).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquidity {
    Low,
    Medium,
    High,
    Variable,
}

impl Liquidity {
    pub fn code(&self) -> &'static str {
        match self {
            Liquidity::Low => "low",
            Liquidity::Medium => "medium",
            Liquidity::High => "high",
            Liquidity::Variable => "variable",
        }
    }
}

/// 분류별 상수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentCategoryConstants {
    /// 최소 연 ROI [%]
    pub min_roi_pct: f64,
    /// 최대 연 ROI [%]
    pub max_roi_pct: f64,
    /// 대표 위험 수준
    pub typical_risk: RiskLevel,
    pub liquidity: Liquidity,
}

const MINING: InvestmentCategoryConstants = InvestmentCategoryConstants {
    min_roi_pct: 15.0,
    max_roi_pct: 20.0,
    typical_risk: RiskLevel::Low,
    liquidity: Liquidity::Medium,
};

const EXCHANGE: InvestmentCategoryConstants = InvestmentCategoryConstants {
    min_roi_pct: 20.0,
    max_roi_pct: 25.0,
    typical_risk: RiskLevel::Medium,
    liquidity: Liquidity::High,
};

const TECHNOLOGY: InvestmentCategoryConstants = InvestmentCategoryConstants {
    min_roi_pct: 25.0,
    max_roi_pct: 35.0,
    typical_risk: RiskLevel::High,
    liquidity: Liquidity::Low,
};

const TOKEN: InvestmentCategoryConstants = InvestmentCategoryConstants {
    min_roi_pct: 18.0,
    max_roi_pct: 28.0,
    typical_risk: RiskLevel::Medium,
    liquidity: Liquidity::Variable,
};

/// 분류에 해당하는 상수 행을 반환한다.
pub fn constants(category: InvestmentCategory) -> &'static InvestmentCategoryConstants {
    match category {
        InvestmentCategory::Mining => &MINING,
        InvestmentCategory::Exchange => &EXCHANGE,
        InvestmentCategory::Technology => &TECHNOLOGY,
        InvestmentCategory::Token => &TOKEN,
    }
}
