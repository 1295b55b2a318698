#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use log::{debug, warn};
use rfd::FileDialog;
use std::time::{Duration, Instant};
use std::{env, fs, path::Path};
use mining_yield_toolbox::{
    config,
    display::{self, FieldId, NumberFormat},
    i18n::{self, keys},
    investment::{
        compare_categories, compute_investment, roi_bounds, InvestmentCategory, InvestmentInput,
        InvestmentResult, RiskLevel,
    },
    limits,
    mining::{compute_mining, projection, CryptoAsset, MiningInput, MiningResult, ProjectionPoint},
    notify::{NotifyLevel, Toasts},
    random::{RngSource, UniformSource},
    report::SimulationReport,
};

const CHART_GREEN: egui::Color32 = egui::Color32::from_rgb(0x10, 0xB9, 0x81);

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/fr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 760.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Mining Yield Toolbox",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["assets/icon.png", "icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

fn level_color(level: NotifyLevel) -> egui::Color32 {
    match level {
        NotifyLevel::Info => egui::Color32::from_rgb(0x25, 0x63, 0xEB),
        NotifyLevel::Success => egui::Color32::from_rgb(0x16, 0xA3, 0x4A),
        NotifyLevel::Warning => egui::Color32::from_rgb(0xCA, 0x8A, 0x04),
        NotifyLevel::Error => egui::Color32::from_rgb(0xDC, 0x26, 0x26),
    }
}

fn duration_combo(ui: &mut egui::Ui, id: &str, value: &mut u32, options: &[u32], unit: &str) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(id)
        .selected_text(format!("{value} {unit}"))
        .show_ui(ui, |ui| {
            for &m in options {
                changed |= ui.selectable_value(&mut *value, m, format!("{m} {unit}")).changed();
            }
        });
    changed
}

/// "기간 [개월]" 형태의 라벨에서 대괄호 안 단위를 꺼낸다.
fn bracket_unit(label: &str) -> String {
    label
        .split_once('[')
        .map(|(_, rest)| rest.trim_end_matches(']').to_string())
        .unwrap_or_default()
}

fn result_row(ui: &mut egui::Ui, label: &str, fields: &[(FieldId, String)], ids: &[FieldId]) {
    ui.label(label);
    let text: Vec<&str> = ids
        .iter()
        .filter_map(|id| display::field_value(fields, *id))
        .collect();
    ui.strong(text.join("  |  "));
    ui.end_row();
}

/// 누적 수익 꺾은선 차트를 그린다. y축은 0을 포함한다.
fn draw_chart(ui: &mut egui::Ui, series: &[(String, f64)], fmt: NumberFormat) {
    let desired = egui::vec2(ui.available_width().max(240.0), 240.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;
    let visuals = ui.visuals().clone();
    painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);
    if series.is_empty() {
        return;
    }

    let plot = egui::Rect::from_min_max(rect.min + egui::vec2(72.0, 12.0), rect.max - egui::vec2(16.0, 24.0));
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let min = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::min);
    let span = (max - min).max(1.0);
    let n = series.len();
    let x_at = |i: usize| {
        if n == 1 {
            plot.center().x
        } else {
            plot.left() + plot.width() * i as f32 / (n - 1) as f32
        }
    };
    let y_at = |v: f64| plot.bottom() - ((v - min) / span) as f32 * plot.height();

    let grid = egui::Stroke::new(1.0, visuals.weak_text_color().gamma_multiply(0.4));
    let font = egui::FontId::proportional(11.0);
    for v in [min, (min + max) / 2.0, max] {
        let y = y_at(v);
        painter.line_segment([egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)], grid);
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            display::format_integer(v, fmt),
            font.clone(),
            visuals.text_color(),
        );
    }

    let points: Vec<egui::Pos2> = series
        .iter()
        .enumerate()
        .map(|(i, (_, v))| egui::pos2(x_at(i), y_at(*v)))
        .collect();
    painter.add(egui::Shape::line(points.clone(), egui::Stroke::new(2.0, CHART_GREEN)));
    for p in &points {
        painter.circle_filled(*p, 2.5, CHART_GREEN);
    }

    let step = (n / 6).max(1);
    for (i, (label, _)) in series.iter().enumerate().step_by(step) {
        painter.text(
            egui::pos2(x_at(i), plot.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            label,
            font.clone(),
            visuals.text_color(),
        );
    }

    if let Some(pos) = response.hover_pos() {
        let nearest = points
            .iter()
            .enumerate()
            .min_by(|a, b| {
                (a.1.x - pos.x)
                    .abs()
                    .partial_cmp(&(b.1.x - pos.x).abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i);
        if let Some(i) = nearest {
            let (label, v) = &series[i];
            painter.circle_stroke(points[i], 5.0, egui::Stroke::new(1.5, CHART_GREEN));
            painter.text(
                points[i] + egui::vec2(0.0, -10.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{label}: {}", display::format_integer(*v, fmt)),
                font,
                visuals.strong_text_color(),
            );
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    Mining,
    Investment,
    Compare,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    lang_input: String,
    window_alpha: f32,
    show_settings_modal: bool,
    show_formula_modal: bool,
    // 채굴
    hashrate: f64,
    electricity: f64,
    mining_months: u32,
    asset: CryptoAsset,
    mining_result: MiningResult,
    mining_points: Vec<ProjectionPoint>,
    // 투자
    principal: f64,
    category: InvestmentCategory,
    invest_months: u32,
    risk: RiskLevel,
    investment_result: InvestmentResult,
    source: Box<dyn UniformSource>,
    // 비교
    compare_risk: RiskLevel,
    toasts: Toasts,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self::with_source(config, Box::new(RngSource::from_entropy()))
    }

    fn with_source(config: config::Config, mut source: Box<dyn UniformSource>) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let mining_input = config.mining.to_input();
        let investment_input = config.investment.to_input();
        let investment_result = compute_investment(&investment_input, source.as_mut());
        Self {
            tr,
            tab: Tab::Mining,
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha,
            show_settings_modal: false,
            show_formula_modal: false,
            hashrate: mining_input.hashrate_ths,
            electricity: mining_input.electricity_cost_per_kwh,
            mining_months: mining_input.duration_months,
            asset: mining_input.asset,
            mining_result: compute_mining(&mining_input),
            mining_points: projection(&mining_input),
            principal: investment_input.principal,
            category: investment_input.category,
            invest_months: investment_input.duration_months,
            risk: investment_input.risk,
            investment_result,
            source,
            compare_risk: investment_input.risk,
            toasts: Toasts::new(),
            config,
        }
    }

    fn mining_input(&self) -> MiningInput {
        MiningInput {
            hashrate_ths: self.hashrate,
            electricity_cost_per_kwh: self.electricity,
            duration_months: self.mining_months,
            asset: self.asset,
        }
    }

    fn investment_input(&self) -> InvestmentInput {
        InvestmentInput {
            principal: self.principal,
            category: self.category,
            duration_months: self.invest_months,
            risk: self.risk,
        }
    }

    fn recalc_mining(&mut self) {
        let input = self.mining_input();
        self.mining_result = compute_mining(&input);
        self.mining_points = projection(&input);
        debug!("mining recalculated: {input:?}");
    }

    fn recalc_investment(&mut self) {
        let input = self.investment_input();
        self.investment_result = compute_investment(&input, self.source.as_mut());
        debug!("investment recalculated: {input:?}");
    }

    /// 비교표에서 분류를 고르면 투자 탭으로 이동해 다시 계산한다.
    fn select_category(&mut self, category: InvestmentCategory) {
        self.category = category;
        self.tab = Tab::Investment;
        self.recalc_investment();
    }

    /// 현재 입력값을 설정의 기본값으로 옮긴다.
    fn sync_config(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        let m = self.mining_input();
        self.config.mining.hashrate_ths = m.hashrate_ths;
        self.config.mining.electricity_cost_per_kwh = m.electricity_cost_per_kwh;
        self.config.mining.duration_months = m.duration_months;
        self.config.mining.asset = m.asset;
        let inv = self.investment_input();
        self.config.investment.principal = inv.principal;
        self.config.investment.category = inv.category;
        self.config.investment.duration_months = inv.duration_months;
        self.config.investment.risk = inv.risk;
    }

    fn save_settings(&mut self) {
        self.sync_config();
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        match self.config.save() {
            Ok(()) => self
                .toasts
                .push(NotifyLevel::Success, self.tr.t(keys::SETTINGS_SAVED), Instant::now()),
            Err(e) => self.toasts.push(
                NotifyLevel::Error,
                self.tr.fill(keys::SETTINGS_SAVE_FAILED, &[("error", e.to_string())]),
                Instant::now(),
            ),
        }
    }

    fn build_report(&self) -> SimulationReport {
        SimulationReport::new(self.config.currency.clone())
            .with_mining(self.mining_input(), self.mining_result, self.mining_points.clone())
            .with_investment(self.investment_input(), self.investment_result)
    }

    fn export_report(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("simulation.toml")
            .save_file()
        else {
            return;
        };
        let now = Instant::now();
        match self.build_report().save(&path) {
            Ok(()) => self.toasts.push(
                NotifyLevel::Success,
                self.tr.fill(keys::EXPORT_SAVED, &[("path", path.display().to_string())]),
                now,
            ),
            Err(e) => self.toasts.push(
                NotifyLevel::Error,
                self.tr.fill(keys::EXPORT_FAILED, &[("error", e.to_string())]),
                now,
            ),
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.add_space(8.0);
        for (tab, label) in [
            (Tab::Mining, tr.t(keys::MENU_MINING)),
            (Tab::Investment, tr.t(keys::MENU_INVESTMENT)),
            (Tab::Compare, tr.t(keys::MENU_COMPARE)),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_mining(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let currency = self.config.currency.clone();
        let month_unit = bracket_unit(&tr.t(keys::LABEL_MINING_DURATION));
        ui.heading(tr.t(keys::MENU_MINING)).on_hover_text(tr.t(keys::HELP_MINING));
        ui.add_space(8.0);

        let mut changed = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("mining_inputs")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::LABEL_HASHRATE));
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.hashrate, limits::HASHRATE_THS)
                                .logarithmic(true)
                                .suffix(" TH/s"),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(tr.fill(keys::LABEL_ELECTRICITY, &[("currency", currency.clone())]));
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.electricity, limits::ELECTRICITY_COST)
                                .step_by(0.05)
                                .suffix(format!(" {currency}/kWh")),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_MINING_DURATION));
                    changed |= duration_combo(
                        ui,
                        "mining_months",
                        &mut self.mining_months,
                        &limits::MINING_DURATIONS,
                        &month_unit,
                    );
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_ASSET));
                    egui::ComboBox::from_id_source("mining_asset")
                        .selected_text(self.asset.ticker())
                        .show_ui(ui, |ui| {
                            for asset in CryptoAsset::ALL {
                                changed |= ui.selectable_value(&mut self.asset, asset, asset.ticker()).changed();
                            }
                        });
                    ui.end_row();
                });
            if ui.button(tr.t(keys::CALCULATE)).clicked() {
                changed = true;
                self.toasts.push(NotifyLevel::Info, tr.t(keys::RECALCULATED), Instant::now());
            }
        });
        if changed {
            self.recalc_mining();
        }

        ui.add_space(8.0);
        let fields = display::mining_fields(&self.mining_result, self.asset, &tr, &currency);
        egui::Grid::new("mining_results")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                result_row(ui, &tr.t(keys::RESULT_DAILY), &fields, &[FieldId::DailyEarnings, FieldId::DailyEarningsLocal]);
                result_row(
                    ui,
                    &tr.t(keys::RESULT_MONTHLY),
                    &fields,
                    &[FieldId::MonthlyEarnings, FieldId::MonthlyEarningsLocal],
                );
                result_row(ui, &tr.t(keys::RESULT_TOTAL), &fields, &[FieldId::TotalEarnings, FieldId::TotalEarningsLocal]);
                result_row(ui, &tr.t(keys::RESULT_PROFITABILITY), &fields, &[FieldId::Profitability]);
                result_row(ui, &tr.t(keys::RESULT_STATUS), &fields, &[FieldId::ProfitStatus]);
            });

        ui.add_space(8.0);
        ui.label(tr.fill(keys::CHART_SERIES, &[("currency", currency)]));
        let series = display::chart_series(&self.mining_points, &tr);
        draw_chart(ui, &series, tr.number_format());
    }

    fn ui_investment(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let currency = self.config.currency.clone();
        let fmt = tr.number_format();
        let month_unit = bracket_unit(&tr.t(keys::LABEL_INVEST_DURATION));
        ui.heading(tr.t(keys::MENU_INVESTMENT)).on_hover_text(tr.t(keys::HELP_INVESTMENT));
        ui.add_space(8.0);

        let mut changed = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("investment_inputs")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.fill(keys::LABEL_AMOUNT, &[("currency", currency.clone())]));
                    changed |= ui
                        .add(
                            egui::Slider::new(&mut self.principal, limits::PRINCIPAL)
                                .logarithmic(true)
                                .step_by(1000.0)
                                .custom_formatter(|v, _| display::format_integer(v, fmt)),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_CATEGORY));
                    egui::ComboBox::from_id_source("investment_category")
                        .selected_text(display::category_label(self.category, &tr))
                        .show_ui(ui, |ui| {
                            for c in InvestmentCategory::ALL {
                                changed |= ui
                                    .selectable_value(&mut self.category, c, display::category_label(c, &tr))
                                    .changed();
                            }
                        });
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_INVEST_DURATION));
                    changed |= duration_combo(
                        ui,
                        "investment_months",
                        &mut self.invest_months,
                        &limits::INVESTMENT_DURATIONS,
                        &month_unit,
                    );
                    ui.end_row();

                    ui.label(tr.t(keys::LABEL_RISK));
                    ui.horizontal(|ui| {
                        for r in RiskLevel::ALL {
                            changed |= ui.selectable_value(&mut self.risk, r, display::risk_label(r, &tr)).changed();
                        }
                    });
                    ui.end_row();
                });
            if ui.button(tr.t(keys::CALCULATE)).clicked() {
                changed = true;
                self.toasts.push(NotifyLevel::Info, tr.t(keys::RECALCULATED), Instant::now());
            }
        });
        if changed {
            self.recalc_investment();
        }

        ui.add_space(8.0);
        let fields = display::investment_fields(&self.investment_result, &tr, &currency);
        let (low, high) = roi_bounds(self.category, self.risk);
        egui::Grid::new("investment_results")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                result_row(ui, &tr.t(keys::RESULT_EXPECTED_ROI), &fields, &[FieldId::ExpectedRoi]);
                ui.label(tr.t(keys::COMPARE_COL_ROI_RANGE));
                ui.label(format!(
                    "{} – {}",
                    display::format_percent(low, fmt),
                    display::format_percent(high, fmt)
                ));
                ui.end_row();
                result_row(ui, &tr.t(keys::RESULT_TOTAL_RETURN), &fields, &[FieldId::TotalReturn]);
                result_row(ui, &tr.t(keys::RESULT_NET_PROFIT), &fields, &[FieldId::NetProfit]);
                result_row(ui, &tr.t(keys::RESULT_MONTHLY_INCOME), &fields, &[FieldId::MonthlyIncome]);
            });
    }

    fn ui_compare(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let fmt = tr.number_format();
        let currency = self.config.currency.clone();
        ui.heading(tr.t(keys::MENU_COMPARE));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(tr.t(keys::LABEL_RISK));
            for r in RiskLevel::ALL {
                ui.selectable_value(&mut self.compare_risk, r, display::risk_label(r, &tr));
            }
        });
        ui.add_space(8.0);

        let rows = compare_categories(self.principal, self.invest_months, self.compare_risk);
        let mut picked = None;
        egui::Grid::new("compare_grid")
            .num_columns(6)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong(tr.t(keys::LABEL_CATEGORY));
                ui.strong(tr.t(keys::COMPARE_COL_ROI_RANGE));
                ui.strong(tr.t(keys::COMPARE_COL_RISK));
                ui.strong(tr.t(keys::COMPARE_COL_LIQUIDITY));
                ui.strong(tr.t(keys::COMPARE_COL_PROFIT));
                ui.label("");
                ui.end_row();
                for row in &rows {
                    ui.label(display::category_label(row.category, &tr));
                    ui.label(format!(
                        "{} – {}",
                        display::format_percent(row.roi_low_pct, fmt),
                        display::format_percent(row.roi_high_pct, fmt)
                    ));
                    ui.label(display::risk_label(row.typical_risk, &tr));
                    ui.label(display::liquidity_label(row.liquidity, &tr));
                    ui.label(display::format_currency(row.projected.net_profit, fmt, &currency));
                    if ui.button(tr.t(keys::COMPARE_SELECT)).clicked() {
                        picked = Some(row.category);
                    }
                    ui.end_row();
                }
            });
        if let Some(category) = picked {
            self.select_category(category);
        }
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.toasts.prune(now);
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .show(ctx, |ui| {
                for note in self.toasts.active(now) {
                    egui::Frame::popup(ui.style())
                        .fill(level_color(note.level))
                        .show(ui, |ui| {
                            ui.colored_label(egui::Color32::WHITE, note.message.as_str());
                        });
                    ui.add_space(6.0);
                }
            });
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(tr.t(keys::EXPORT_BUTTON)).clicked() {
                    self.export_report();
                }
                if ui.button("ƒ(x)").clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(tr.t(keys::MENU_SETTINGS)).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut save = false;
            let mut open = true;
            egui::Window::new(tr.t(keys::MENU_SETTINGS))
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "Auto");
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "fr-fr".into(), "Français");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(tr.t(keys::SETTINGS_ALPHA));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
                    ui.separator();
                    if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                        save = true;
                    }
                });
            self.show_settings_modal = open;
            if save {
                self.save_settings();
            }
        }

        if self.show_formula_modal {
            egui::Window::new("ƒ(x)")
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::HELP_MINING));
                    ui.separator();
                    ui.label(tr.t(keys::HELP_INVESTMENT));
                });
        }

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Mining => self.ui_mining(ui),
                    Tab::Investment => self.ui_investment(ui),
                    Tab::Compare => self.ui_compare(ui),
                });
        });

        self.show_toasts(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mining_yield_toolbox::random::FixedSource;

    fn app() -> GuiApp {
        let mut cfg = config::Config::default();
        cfg.language = "en-us".into();
        GuiApp::with_source(cfg, Box::new(FixedSource::NEUTRAL))
    }

    #[test]
    fn initial_state_is_computed_from_config() {
        let app = app();
        assert_eq!(app.mining_points.len(), 12);
        assert!((app.investment_result.effective_roi_pct - 17.5).abs() < 1e-12);
        assert_eq!(app.tab, Tab::Mining);
    }

    #[test]
    fn picking_from_comparison_switches_to_investment() {
        let mut app = app();
        app.tab = Tab::Compare;
        app.select_category(InvestmentCategory::Technology);
        assert_eq!(app.tab, Tab::Investment);
        assert_eq!(app.category, InvestmentCategory::Technology);
        assert!((app.investment_result.effective_roi_pct - 30.0).abs() < 1e-12);
    }

    #[test]
    fn recalculation_replaces_whole_result() {
        let mut app = app();
        let before = app.mining_result;
        app.asset = CryptoAsset::Kas;
        app.mining_months = 24;
        app.recalc_mining();
        assert_ne!(app.mining_result, before);
        assert_eq!(app.mining_points.len(), 24);
        assert_eq!(app.mining_result, compute_mining(&app.mining_input()));
    }

    #[test]
    fn sync_config_keeps_current_inputs() {
        let mut app = app();
        app.principal = 120_000.0;
        app.risk = RiskLevel::High;
        app.hashrate = 42.0;
        app.sync_config();
        assert_eq!(app.config.investment.principal, 120_000.0);
        assert_eq!(app.config.investment.risk, RiskLevel::High);
        assert_eq!(app.config.mining.hashrate_ths, 42.0);
    }

    #[test]
    fn report_has_both_sections() {
        let text = app().build_report().to_toml().unwrap();
        assert!(text.contains("[mining.input]"));
        assert!(text.contains("[investment.result]"));
    }
}
