//! 채굴 수익성/투자 수익률 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod display;
pub mod i18n;
pub mod investment;
pub mod limits;
pub mod mining;
pub mod notify;
pub mod random;
pub mod report;
pub mod ui_cli;
