use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use quandy_cli::calendar::{CalendarOptions, run_calendar};
use quandy_cli::page::{run_form, run_page};
use quandy_cli::tools::{NameStyle, run_hash, run_markup, run_name};
use quandy_core::WeekStart;
use quandy_core::password::DEFAULT_SALT;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "quandy", version, about = "HTML page, calendar and form helpers.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeekStartArg {
    Sunday,
    Monday,
}

impl From<WeekStartArg> for WeekStart {
    fn from(value: WeekStartArg) -> Self {
        match value {
            WeekStartArg::Sunday => WeekStart::Sunday,
            WeekStartArg::Monday => WeekStart::Monday,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NameStyleArg {
    Friendly,
    Unfriendly,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Render a month calendar.")]
    Calendar {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
        #[arg(long, value_name = "DAY")]
        highlight: Option<u32>,
        #[arg(long, value_enum, default_value = "sunday")]
        week_start: WeekStartArg,
        #[arg(long, value_name = "PATH")]
        events: Option<PathBuf>,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        class: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        no_caption: bool,
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long, value_name = "PATH")]
        page_config: Option<PathBuf>,
    },
    #[command(about = "Render a full page from a YAML config.")]
    Page {
        #[arg(long, value_name = "PATH")]
        config: PathBuf,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, value_name = "PATH")]
        body: Option<PathBuf>,
    },
    #[command(about = "Render a form from a YAML config.")]
    Form {
        #[arg(long, value_name = "PATH")]
        config: PathBuf,
    },
    #[command(about = "Print the salted digest of a password.")]
    Hash {
        password: String,
        #[arg(long, default_value = DEFAULT_SALT)]
        salt: String,
        #[arg(long, default_value = "blake3")]
        algorithm: String,
    },
    #[command(about = "Turn URLs and e-mail addresses into links.")]
    Markup {
        /// Reads stdin when omitted.
        file: Option<PathBuf>,
    },
    #[command(about = "Convert between identifiers and display names.")]
    Name {
        #[arg(value_enum)]
        style: NameStyleArg,
        text: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let output = match cli.command {
        Command::Calendar {
            year,
            month,
            today,
            highlight,
            week_start,
            events,
            id,
            class,
            title,
            no_caption,
            base_url,
            page_config,
        } => {
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
            let options = CalendarOptions {
                highlighted_day: highlight,
                week_start: week_start.into(),
                events,
                id,
                css_class: class,
                title,
                show_caption: !no_caption,
                base_url,
                page_config,
                ..CalendarOptions::new(year, month)
            };
            run_calendar(&options, today)?
        }
        Command::Page {
            config,
            title,
            body,
        } => run_page(&config, title.as_deref(), body.as_deref())?,
        Command::Form { config } => run_form(&config)?,
        Command::Hash {
            password,
            salt,
            algorithm,
        } => run_hash(&password, &salt, &algorithm)?,
        Command::Markup { file } => run_markup(&read_input(file)?),
        Command::Name { style, text } => {
            let style = match style {
                NameStyleArg::Friendly => NameStyle::Friendly,
                NameStyleArg::Unfriendly => NameStyle::Unfriendly,
            };
            run_name(style, &text)
        }
    };
    println!("{output}");
    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
