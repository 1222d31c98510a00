use anyhow::{Context as _, Result, anyhow, bail};
use chrono::{DateTime, Local};
use crossterm::style::Stylize;
use evui_core::config::{ConfigManager, FormatConfig};
use evui_core::env::get_base_dir;
use evui_core::format::Formatter;
use evui_core::i18n::{self, Locale, Translator, keys};
use log::{debug, warn};

/// Settings and helpers shared by every command.
pub struct Context {
    manager: Option<ConfigManager>,
    config: FormatConfig,
    formatter: Formatter,
    translator: Translator,
}

impl Context {
    pub fn load(locale_override: Option<Locale>) -> Result<Self> {
        let manager = match get_base_dir().and_then(|dir| ConfigManager::new(&dir)) {
            Ok(manager) => Some(manager),
            Err(e) => {
                warn!("Using default settings: {}", e);
                None
            }
        };

        let mut config = manager
            .as_ref()
            .map(|m| m.config.clone())
            .unwrap_or_default();
        if let Some(locale) = locale_override {
            debug!("Locale override: {}", locale);
            config.locale = locale;
        }

        Ok(Self {
            formatter: config.formatter(),
            translator: config.translator(),
            manager,
            config,
        })
    }

    fn currency(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.config.currency.clone())
    }

    fn label(&self, key: &str, value: &str) {
        println!("{}: {}", self.translator.t(key).dark_grey(), value.bold());
    }
}

pub fn handle_t(ctx: &Context, key: &str, raw_vars: &[String]) -> Result<()> {
    let owned = raw_vars
        .iter()
        .map(|raw| i18n::parse_var(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let vars: Vec<(&str, &str)> = owned
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let text = ctx.translator.try_translate(key, &vars)?;
    if i18n::lookup(ctx.translator.locale(), key).is_none() {
        eprintln!(
            "{} '{}' has no {} entry, showing {}",
            "!".yellow(),
            key,
            ctx.translator.locale(),
            Locale::FALLBACK
        );
    }
    println!("{}", text);
    Ok(())
}

pub fn handle_power(ctx: &Context, watt: f64, kw: bool, with_unit: bool) -> Result<()> {
    ctx.label(keys::LOADPOINT_POWER, &ctx.formatter.fmt_kw(watt, kw, with_unit));
    Ok(())
}

pub fn handle_kilo(ctx: &Context, value: Option<f64>) -> Result<()> {
    let unit = value.map(|v| ctx.formatter.fmt_unit(v)).unwrap_or_default();
    println!("{}{}", ctx.formatter.fmt(value), unit);
    Ok(())
}

pub fn handle_duration(
    ctx: &Context,
    seconds: Option<i64>,
    short: bool,
    with_unit: bool,
) -> Result<()> {
    let text = if short {
        ctx.formatter
            .fmt_short_duration(seconds.unwrap_or_default(), with_unit)
    } else {
        ctx.formatter.fmt_duration(seconds)
    };
    ctx.label(keys::LOADPOINT_DURATION, &text);
    Ok(())
}

pub fn handle_money(ctx: &Context, amount: f64, currency: Option<String>) -> Result<()> {
    println!("{}", ctx.formatter.fmt_money(amount, &ctx.currency(currency)));
    Ok(())
}

pub fn handle_price(ctx: &Context, amount: f64, currency: Option<String>) -> Result<()> {
    println!(
        "{}",
        ctx.formatter.fmt_price_per_kwh(amount, &ctx.currency(currency))
    );
    Ok(())
}

pub fn handle_ago(ctx: &Context, elapsed_ms: i64) -> Result<()> {
    println!("{}", ctx.formatter.fmt_time_ago(elapsed_ms));
    Ok(())
}

pub fn handle_date(ctx: &Context, at: Option<String>) -> Result<()> {
    let date: DateTime<Local> = match at {
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .with_context(|| format!("Invalid RFC 3339 timestamp: {}", raw))?
            .with_timezone(&Local),
        None => Local::now(),
    };

    println!("{}", ctx.formatter.fmt_day_string(&date));
    println!("{}", ctx.formatter.fmt_time_string(&date));
    println!("{}", ctx.formatter.fmt_absolute_date(&date));
    Ok(())
}

pub fn handle_coverage() -> Result<()> {
    let reports = i18n::coverage();
    for report in &reports {
        let mark = if report.is_complete() {
            "√".green()
        } else {
            "✘".red()
        };
        println!(
            "{} {} ({}) {}/{} {:.0}%",
            mark,
            report.locale.code().bold(),
            report.locale.name(),
            report.translated(),
            report.total,
            report.ratio() * 100.0
        );
        for key in &report.missing {
            println!("    {}", key.dark_grey());
        }
    }

    let incomplete = reports.iter().filter(|r| !r.is_complete()).count();
    if incomplete > 0 {
        bail!("{} locale(s) have missing translations", incomplete);
    }
    Ok(())
}

pub fn handle_config(ctx: Context, set: Option<String>, reset: bool) -> Result<()> {
    let mut manager = ctx
        .manager
        .ok_or_else(|| anyhow!("No configuration directory available; set EVUI_HOME"))?;

    if reset {
        manager.reset()?;
        println!("{} Config reset to defaults", "√".green());
    }

    if let Some(assignment) = set {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected KEY=VALUE, got: {}", assignment))?;
        manager.update(key.trim(), value.trim())?;
        println!("{} Config updated: {} = {}", "√".green(), key.trim(), value.trim());
    }

    let config = &manager.config;
    println!("{}", manager.path().display().to_string().dark_grey());
    let settings = [
        ("locale", format!("{} ({})", config.locale, config.locale.name())),
        ("fmt_limit", config.fmt_limit.to_string()),
        ("fmt_digits", config.fmt_digits.to_string()),
        ("currency", config.currency.clone()),
    ];
    for (key, value) in settings {
        println!("  {} {}", format!("{:<12}", key).cyan(), value);
    }
    Ok(())
}
