use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 채굴 대상 암호자산.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoAsset {
    Btc,
    Eth,
    Kas,
    Doge,
}

impl CryptoAsset {
    pub const ALL: [CryptoAsset; 4] = [
        CryptoAsset::Btc,
        CryptoAsset::Eth,
        CryptoAsset::Kas,
        CryptoAsset::Doge,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "btc",
            CryptoAsset::Eth => "eth",
            CryptoAsset::Kas => "kas",
            CryptoAsset::Doge => "doge",
        }
    }

    /// 화면 표시용 티커.
    pub fn ticker(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "BTC",
            CryptoAsset::Eth => "ETH",
            CryptoAsset::Kas => "KAS",
            CryptoAsset::Doge => "DOGE",
        }
    }
}

impl FromStr for CryptoAsset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "btc" | "bitcoin" => Ok(CryptoAsset::Btc),
            "eth" | "ethereum" => Ok(CryptoAsset::Eth),
            "kas" | "kaspa" => Ok(CryptoAsset::Kas),
            "doge" | "dogecoin" => Ok(CryptoAsset::Doge),
            other => Err(format!("알 수 없는 자산: {other}")),
        }
    }
}

/// 자산별 네트워크 상수. 프로세스 시작 시 고정되며 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningAssetConstants {
    /// 전체 네트워크 해시레이트 [TH/s]
    pub network_hashrate_ths: f64,
    /// 블록 보상 [자산 단위]
    pub block_reward_units: f64,
    /// 하루 블록 수
    pub blocks_per_day: f64,
    /// 자산 단가 [현지 통화]
    pub price_local_currency: f64,
    /// 난이도(공식에는 사용하지 않음)
    pub difficulty: f64,
}

const BTC: MiningAssetConstants = MiningAssetConstants {
    network_hashrate_ths: 150_000_000.0,
    block_reward_units: 6.25,
    blocks_per_day: 144.0,
    price_local_currency: 435_000.0,
    difficulty: 25_000_000_000_000.0,
};

const ETH: MiningAssetConstants = MiningAssetConstants {
    network_hashrate_ths: 1_000_000.0,
    block_reward_units: 2.0,
    blocks_per_day: 7_200.0,
    price_local_currency: 23_000.0,
    difficulty: 58_000_000_000_000_000.0,
};

const KAS: MiningAssetConstants = MiningAssetConstants {
    network_hashrate_ths: 100_000.0,
    block_reward_units: 500.0,
    blocks_per_day: 86_400.0,
    price_local_currency: 0.5,
    difficulty: 1_000_000_000.0,
};

const DOGE: MiningAssetConstants = MiningAssetConstants {
    network_hashrate_ths: 10_000.0,
    block_reward_units: 10_000.0,
    blocks_per_day: 144.0,
    price_local_currency: 1.2,
    difficulty: 5_000_000.0,
};

/// 자산에 해당하는 상수 행을 반환한다.
pub fn constants(asset: CryptoAsset) -> &'static MiningAssetConstants {
    match asset {
        CryptoAsset::Btc => &BTC,
        CryptoAsset::Eth => &ETH,
        CryptoAsset::Kas => &KAS,
        CryptoAsset::Doge => &DOGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_tickers() {
        assert_eq!("BTC".parse::<CryptoAsset>(), Ok(CryptoAsset::Btc));
        assert_eq!(" doge ".parse::<CryptoAsset>(), Ok(CryptoAsset::Doge));
        assert!("xrp".parse::<CryptoAsset>().is_err());
    }

    #[test]
    fn every_asset_has_positive_price_and_network() {
        for asset in CryptoAsset::ALL {
            let c = constants(asset);
            assert!(c.network_hashrate_ths > 0.0, "{}", asset.ticker());
            assert!(c.price_local_currency > 0.0, "{}", asset.ticker());
        }
    }
}
