use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::display::NumberFormat;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const MENU_TITLE: &str = "main_menu.title";
    pub const MENU_MINING: &str = "main_menu.mining";
    pub const MENU_INVESTMENT: &str = "main_menu.investment";
    pub const MENU_COMPARE: &str = "main_menu.compare";
    pub const MENU_SETTINGS: &str = "main_menu.settings";
    pub const MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const MINING_HEADING: &str = "mining.heading";
    pub const LABEL_HASHRATE: &str = "mining.hashrate";
    pub const LABEL_ELECTRICITY: &str = "mining.electricity";
    pub const LABEL_MINING_DURATION: &str = "mining.duration";
    pub const LABEL_ASSET: &str = "mining.asset";
    pub const RESULT_DAILY: &str = "mining.result.daily";
    pub const RESULT_MONTHLY: &str = "mining.result.monthly";
    pub const RESULT_TOTAL: &str = "mining.result.total";
    pub const RESULT_PROFITABILITY: &str = "mining.result.profitability";
    pub const RESULT_STATUS: &str = "mining.result.status";

    pub const STATUS_HIGHLY_PROFITABLE: &str = "status.highly_profitable";
    pub const STATUS_PROFITABLE: &str = "status.profitable";
    pub const STATUS_MARGINAL: &str = "status.marginal";
    pub const STATUS_NOT_PROFITABLE: &str = "status.not_profitable";

    pub const INVEST_HEADING: &str = "investment.heading";
    pub const LABEL_AMOUNT: &str = "investment.amount";
    pub const LABEL_CATEGORY: &str = "investment.category";
    pub const LABEL_INVEST_DURATION: &str = "investment.duration";
    pub const LABEL_RISK: &str = "investment.risk";
    pub const RESULT_EXPECTED_ROI: &str = "investment.result.expected_roi";
    pub const RESULT_TOTAL_RETURN: &str = "investment.result.total_return";
    pub const RESULT_NET_PROFIT: &str = "investment.result.net_profit";
    pub const RESULT_MONTHLY_INCOME: &str = "investment.result.monthly_income";

    pub const CATEGORY_MINING: &str = "category.mining";
    pub const CATEGORY_EXCHANGE: &str = "category.exchange";
    pub const CATEGORY_TECHNOLOGY: &str = "category.technology";
    pub const CATEGORY_TOKEN: &str = "category.token";

    pub const RISK_LOW: &str = "risk.low";
    pub const RISK_MEDIUM: &str = "risk.medium";
    pub const RISK_HIGH: &str = "risk.high";

    pub const LIQUIDITY_LOW: &str = "liquidity.low";
    pub const LIQUIDITY_MEDIUM: &str = "liquidity.medium";
    pub const LIQUIDITY_HIGH: &str = "liquidity.high";
    pub const LIQUIDITY_VARIABLE: &str = "liquidity.variable";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_COL_ROI_RANGE: &str = "compare.col_roi_range";
    pub const COMPARE_COL_RISK: &str = "compare.col_risk";
    pub const COMPARE_COL_LIQUIDITY: &str = "compare.col_liquidity";
    pub const COMPARE_COL_PROFIT: &str = "compare.col_profit";
    pub const COMPARE_SELECT: &str = "compare.select";

    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_PERIOD: &str = "chart.period";
    pub const CHART_SERIES: &str = "chart.series";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_ALPHA: &str = "settings.alpha";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_SAVE_FAILED: &str = "settings.save_failed";

    pub const CALCULATE: &str = "action.calculate";
    pub const RECALCULATED: &str = "action.recalculated";
    pub const EXPORT_BUTTON: &str = "export.button";
    pub const EXPORT_SAVED: &str = "export.saved";
    pub const EXPORT_FAILED: &str = "export.failed";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";

    pub const HELP_MINING: &str = "help.mining";
    pub const HELP_INVESTMENT: &str = "help.investment";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Fr,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("fr") {
            Language::Fr
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ko => "ko",
        }
    }

    /// 언어별 숫자 표기 규칙.
    pub fn number_format(&self) -> NumberFormat {
        match self {
            Language::Fr => NumberFormat::FRENCH,
            Language::En | Language::Ko => NumberFormat::ENGLISH,
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 내장 문자열만 쓰는 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: built_in_pack(lang_code),
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 내장 팩 위에 locales/, 그 위에 지정 디렉터리의 팩을 덮어쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let mut merged = built_in_pack(lang_code).unwrap_or_default();
        let layers = [Some("locales"), pack_dir];
        for dir in layers.into_iter().flatten() {
            if let Some(map) = load_overrides(dir, lang_code) {
                merged.extend(map);
            }
        }
        let overrides = (!merged.is_empty()).then_some(merged);
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    pub fn number_format(&self) -> NumberFormat {
        self.lang.number_format()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩 → 내장 문자열 → 영어 → 키 순으로 폴백한다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::Fr => fr(key).or_else(|| en(key)),
            Language::En | Language::Ko => en(key),
        };
        builtin.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역을 반환한다.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        let mut out = self.t(key);
        for (k, v) in vars {
            out = out.replace(&format!("{{{k}}}"), v);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("fr") => Some("fr-fr".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match Language::from_code(lang) {
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        Language::En | Language::Fr => None,
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "Mining Yield Toolbox",
        APP_EXIT => "Exiting application.",
        ERROR_PREFIX => "Error",
        MENU_TITLE => "\n=== Mining Yield Toolbox ===",
        MENU_MINING => "Mining profitability",
        MENU_INVESTMENT => "Investment ROI",
        MENU_COMPARE => "Compare investments",
        MENU_SETTINGS => "Settings",
        MENU_EXIT => "Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        MINING_HEADING => "\n-- Mining Profitability --",
        LABEL_HASHRATE => "Hashrate [TH/s]",
        LABEL_ELECTRICITY => "Electricity cost [{currency}/kWh]",
        LABEL_MINING_DURATION => "Duration [months]",
        LABEL_ASSET => "Crypto asset",
        RESULT_DAILY => "Daily earnings",
        RESULT_MONTHLY => "Monthly earnings",
        RESULT_TOTAL => "Total earnings",
        RESULT_PROFITABILITY => "Profitability",
        RESULT_STATUS => "Status",
        STATUS_HIGHLY_PROFITABLE => "Highly profitable",
        STATUS_PROFITABLE => "Profitable",
        STATUS_MARGINAL => "Marginally profitable",
        STATUS_NOT_PROFITABLE => "Not profitable",
        INVEST_HEADING => "\n-- Investment ROI --",
        LABEL_AMOUNT => "Investment amount [{currency}]",
        LABEL_CATEGORY => "Investment type",
        LABEL_INVEST_DURATION => "Duration [months]",
        LABEL_RISK => "Risk level",
        RESULT_EXPECTED_ROI => "Expected annual ROI",
        RESULT_TOTAL_RETURN => "Total return",
        RESULT_NET_PROFIT => "Net profit",
        RESULT_MONTHLY_INCOME => "Monthly income",
        CATEGORY_MINING => "Mining pool",
        CATEGORY_EXCHANGE => "Exchange",
        CATEGORY_TECHNOLOGY => "Technology",
        CATEGORY_TOKEN => "Token",
        RISK_LOW => "Low",
        RISK_MEDIUM => "Medium",
        RISK_HIGH => "High",
        LIQUIDITY_LOW => "Low",
        LIQUIDITY_MEDIUM => "Medium",
        LIQUIDITY_HIGH => "High",
        LIQUIDITY_VARIABLE => "Variable",
        COMPARE_HEADING => "\n-- Investment Comparison --",
        COMPARE_COL_ROI_RANGE => "Annual ROI",
        COMPARE_COL_RISK => "Typical risk",
        COMPARE_COL_LIQUIDITY => "Liquidity",
        COMPARE_COL_PROFIT => "Projected net profit",
        COMPARE_SELECT => "Simulate",
        CHART_HEADING => "Cumulative earnings",
        CHART_PERIOD => "Month {n}",
        CHART_SERIES => "Cumulative earnings ({currency})",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Auto  2) English  3) Français  4) 한국어",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_ALPHA => "Window transparency",
        SETTINGS_SAVE => "Save settings",
        SETTINGS_SAVE_FAILED => "Could not save settings: {error}",
        CALCULATE => "Calculate",
        RECALCULATED => "Simulation updated.",
        EXPORT_BUTTON => "Export report",
        EXPORT_SAVED => "Report saved: {path}",
        EXPORT_FAILED => "Could not save report: {error}",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_OUT_OF_RANGE => "Value must be between {min} and {max}.",
        HELP_MINING => "Daily revenue = hashrate / network hashrate × block reward × blocks per day × price. Electricity = hashrate × 3.5 kW × 24 h × tariff / 1000.",
        HELP_INVESTMENT => "Expected ROI = category midpoint ± 2 (risk) ± 2 (market variation), kept within 5–40%. Returns compound monthly.",
        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Fermeture de l'application.",
        ERROR_PREFIX => "Erreur",
        MENU_MINING => "Rentabilité du minage",
        MENU_INVESTMENT => "Rendement d'investissement",
        MENU_COMPARE => "Comparer les investissements",
        MENU_SETTINGS => "Paramètres",
        MENU_EXIT => "Quitter",
        PROMPT_MENU_SELECT => "Choix du menu : ",
        PROMPT_SELECT => "Choix : ",
        INVALID_SELECTION_RETRY => "Saisie invalide. Veuillez réessayer.",
        MINING_HEADING => "\n-- Rentabilité du minage --",
        LABEL_HASHRATE => "Puissance de calcul [TH/s]",
        LABEL_ELECTRICITY => "Coût de l'électricité [{currency}/kWh]",
        LABEL_MINING_DURATION => "Durée [mois]",
        LABEL_ASSET => "Cryptomonnaie",
        RESULT_DAILY => "Gains journaliers",
        RESULT_MONTHLY => "Gains mensuels",
        RESULT_TOTAL => "Gains totaux",
        RESULT_PROFITABILITY => "Rentabilité",
        RESULT_STATUS => "Statut",
        STATUS_HIGHLY_PROFITABLE => "Très rentable",
        STATUS_PROFITABLE => "Rentable",
        STATUS_MARGINAL => "Légèrement rentable",
        STATUS_NOT_PROFITABLE => "Non rentable",
        INVEST_HEADING => "\n-- Rendement d'investissement --",
        LABEL_AMOUNT => "Montant investi [{currency}]",
        LABEL_CATEGORY => "Type d'investissement",
        LABEL_INVEST_DURATION => "Durée [mois]",
        LABEL_RISK => "Niveau de risque",
        RESULT_EXPECTED_ROI => "ROI annuel attendu",
        RESULT_TOTAL_RETURN => "Retour total",
        RESULT_NET_PROFIT => "Bénéfice net",
        RESULT_MONTHLY_INCOME => "Revenu mensuel",
        CATEGORY_MINING => "Pool de minage",
        CATEGORY_EXCHANGE => "Plateforme d'échange",
        CATEGORY_TECHNOLOGY => "Technologie",
        CATEGORY_TOKEN => "Jeton",
        RISK_LOW => "Faible",
        RISK_MEDIUM => "Moyen",
        RISK_HIGH => "Élevé",
        LIQUIDITY_LOW => "Faible",
        LIQUIDITY_MEDIUM => "Moyenne",
        LIQUIDITY_HIGH => "Élevée",
        LIQUIDITY_VARIABLE => "Variable",
        COMPARE_HEADING => "\n-- Comparaison des investissements --",
        COMPARE_COL_ROI_RANGE => "ROI annuel",
        COMPARE_COL_RISK => "Risque typique",
        COMPARE_COL_LIQUIDITY => "Liquidité",
        COMPARE_COL_PROFIT => "Bénéfice net estimé",
        COMPARE_SELECT => "Simuler",
        CHART_HEADING => "Revenus cumulés",
        CHART_PERIOD => "Mois {n}",
        CHART_SERIES => "Revenus cumulés ({currency})",
        SETTINGS_HEADING => "\n-- Paramètres --",
        SETTINGS_CURRENT_LANGUAGE => "Langue actuelle :",
        SETTINGS_PROMPT_CHANGE => "Numéro à modifier (entrée pour annuler) : ",
        SETTINGS_INVALID => "Saisie invalide ; langue inchangée.",
        SETTINGS_SAVED => "Paramètres enregistrés.",
        SETTINGS_ALPHA => "Transparence de la fenêtre",
        SETTINGS_SAVE => "Enregistrer",
        SETTINGS_SAVE_FAILED => "Impossible d'enregistrer les paramètres : {error}",
        CALCULATE => "Calculer",
        RECALCULATED => "Simulation mise à jour.",
        EXPORT_BUTTON => "Exporter le rapport",
        EXPORT_SAVED => "Rapport enregistré : {path}",
        EXPORT_FAILED => "Impossible d'enregistrer le rapport : {error}",
        ERROR_INVALID_NUMBER => "Veuillez saisir un nombre.",
        ERROR_OUT_OF_RANGE => "La valeur doit être comprise entre {min} et {max}.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_falls_back_to_english_for_missing_keys() {
        let tr = Translator::new("fr-fr");
        assert_eq!(tr.t(keys::STATUS_MARGINAL), "Légèrement rentable");
        assert_eq!(tr.t(keys::APP_TITLE), "Mining Yield Toolbox");
    }

    #[test]
    fn unknown_key_returns_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn korean_pack_is_built_in() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::STATUS_PROFITABLE), "수익성 있음");
    }

    #[test]
    fn partial_user_pack_keeps_built_in_korean() {
        let dir = std::env::temp_dir().join(format!("myt_pack_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ko-kr.toml"), "[status]\nprofitable = \"이익\"\n").unwrap();
        let tr = Translator::new_with_pack("ko-kr", dir.to_str());
        assert_eq!(tr.t(keys::STATUS_PROFITABLE), "이익");
        assert_eq!(tr.t(keys::STATUS_MARGINAL), Translator::new("ko-kr").t(keys::STATUS_MARGINAL));
        assert_ne!(tr.t(keys::STATUS_MARGINAL), Translator::new("en").t(keys::STATUS_MARGINAL));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn fill_replaces_placeholders() {
        let tr = Translator::new("en");
        let s = tr.fill(keys::CHART_PERIOD, &[("n", "3".to_string())]);
        assert_eq!(s, "Month 3");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("fr", Some("en")), "fr-fr");
        assert_eq!(resolve_language("auto", Some("ko")), "ko-kr");
    }
}
