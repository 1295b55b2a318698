use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::investment::{InvestmentCategory, InvestmentInput, RiskLevel};
use crate::mining::{CryptoAsset, MiningInput};

const CONFIG_FILE: &str = "config.toml";

/// 채굴 시뮬레이터 초기 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningDefaults {
    pub hashrate_ths: f64,
    pub electricity_cost_per_kwh: f64,
    pub duration_months: u32,
    pub asset: CryptoAsset,
}

impl Default for MiningDefaults {
    fn default() -> Self {
        Self {
            hashrate_ths: 10.0,
            electricity_cost_per_kwh: 1.2,
            duration_months: 12,
            asset: CryptoAsset::Btc,
        }
    }
}

impl MiningDefaults {
    pub fn to_input(&self) -> MiningInput {
        MiningInput {
            hashrate_ths: self.hashrate_ths,
            electricity_cost_per_kwh: self.electricity_cost_per_kwh,
            duration_months: self.duration_months,
            asset: self.asset,
        }
    }
}

/// 투자 시뮬레이터 초기 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentDefaults {
    pub principal: f64,
    pub category: InvestmentCategory,
    pub duration_months: u32,
    pub risk: RiskLevel,
}

impl Default for InvestmentDefaults {
    fn default() -> Self {
        Self {
            principal: 50_000.0,
            category: InvestmentCategory::Mining,
            duration_months: 12,
            risk: RiskLevel::Medium,
        }
    }
}

impl InvestmentDefaults {
    pub fn to_input(&self) -> InvestmentInput {
        InvestmentInput {
            principal: self.principal,
            category: self.category,
            duration_months: self.duration_months,
            risk: self.risk,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/en-us/fr-fr/ko-kr)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 현지 통화 표기
    pub currency: String,
    pub window_alpha: f32,
    pub mining: MiningDefaults,
    pub investment: InvestmentDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            currency: "MAD".to_string(),
            window_alpha: 1.0,
            mining: MiningDefaults::default(),
            investment: InvestmentDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로에서 설정을 읽는다. 파일이 없으면 기본값을 저장하고 반환한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!("config loaded from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        info!("default config written to {}", path.display());
        Ok(cfg)
    }
}

pub fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, Path::new(CONFIG_FILE))?;
        debug!("config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "fr"
            [mining]
            asset = "kas"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language, "fr");
        assert_eq!(cfg.currency, "MAD");
        assert_eq!(cfg.mining.asset, CryptoAsset::Kas);
        assert_eq!(cfg.mining.duration_months, 12);
        assert_eq!(cfg.investment.risk, RiskLevel::Medium);
    }

    #[test]
    fn load_creates_then_reads_back() {
        let path = std::env::temp_dir().join(format!("myt-config-{}.toml", std::process::id()));
        let _ = fs::remove_file(&path);
        let created = load_from(&path).unwrap();
        assert_eq!(created, Config::default());

        let mut changed = created.clone();
        changed.currency = "EUR".into();
        changed.investment.category = InvestmentCategory::Token;
        save_to(&changed, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), changed);
        let _ = fs::remove_file(&path);
    }
}
