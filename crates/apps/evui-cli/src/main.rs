use anyhow::Result;
use clap::{Parser, Subcommand};
use evui_core::i18n::Locale;

mod commands;

#[derive(Parser)]
#[command(name = "evui")]
#[command(version)]
#[command(about = "Preview dashboard translations and display formatting", long_about = None)]
#[command(styles = styles())]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Overrides the configured locale (e.g. `it`, `en-US`)
    #[arg(short, long, global = true)]
    locale: Option<Locale>,
}

fn styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Styles};
    Styles::styled()
        .header(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .usage(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Translate a key path")]
    T {
        key: String,
        #[arg(long = "var", short = 'v', value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },
    #[command(about = "Format a power value")]
    Power {
        #[arg(allow_negative_numbers = true)]
        watt: f64,
        /// Show watts instead of kilowatts
        #[arg(long)]
        watt_unit: bool,
        #[arg(long)]
        no_unit: bool,
    },
    #[command(about = "Kilo-scale a value with its unit prefix")]
    Kilo {
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,
    },
    #[command(about = "Format a duration in seconds")]
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: Option<i64>,
        #[arg(long, short)]
        short: bool,
        #[arg(long, short)]
        unit: bool,
    },
    #[command(about = "Format an amount of money")]
    Money {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, short)]
        currency: Option<String>,
    },
    #[command(about = "Format an energy price per kWh")]
    Price {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, short)]
        currency: Option<String>,
    },
    #[command(about = "Phrase a signed offset in milliseconds relative to now")]
    Ago {
        #[arg(allow_negative_numbers = true)]
        elapsed_ms: i64,
    },
    #[command(about = "Render a date (defaults to now)")]
    Date {
        /// RFC 3339 timestamp
        #[arg(long)]
        at: Option<String>,
    },
    #[command(about = "Report missing translations per locale")]
    Coverage,
    #[command(about = "Show or edit configuration")]
    Config {
        #[arg(long, short, value_name = "KEY=VALUE")]
        set: Option<String>,
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?
        .log_to_stderr()
        .format(flexi_logger::opt_format)
        .start()?;

    let cli = Cli::parse();
    let ctx = commands::Context::load(cli.locale)?;

    match cli.command {
        Commands::T { key, vars } => commands::handle_t(&ctx, &key, &vars),
        Commands::Power {
            watt,
            watt_unit,
            no_unit,
        } => commands::handle_power(&ctx, watt, !watt_unit, !no_unit),
        Commands::Kilo { value } => commands::handle_kilo(&ctx, value),
        Commands::Duration {
            seconds,
            short,
            unit,
        } => commands::handle_duration(&ctx, seconds, short, unit),
        Commands::Money { amount, currency } => commands::handle_money(&ctx, amount, currency),
        Commands::Price { amount, currency } => commands::handle_price(&ctx, amount, currency),
        Commands::Ago { elapsed_ms } => commands::handle_ago(&ctx, elapsed_ms),
        Commands::Date { at } => commands::handle_date(&ctx, at),
        Commands::Coverage => commands::handle_coverage(),
        Commands::Config { set, reset } => commands::handle_config(ctx, set, reset),
    }
}
