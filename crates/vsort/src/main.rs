mod args;
mod commands;
mod config;

use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing_subscriber::EnvFilter;

use crate::commands::{GroupView, RangeOptions, SortOptions};
use crate::config::Config;

const LOG_ENV: &str = "VSORT_LOG";

/// VSORT_LOG wins over the config file, warnings only when neither is set
fn log_filter(config: &Config) -> Result<EnvFilter> {
    if std::env::var_os(LOG_ENV).is_some() {
        return Ok(EnvFilter::from_env(LOG_ENV));
    }
    let directive = config.log.as_deref().unwrap_or("warn");
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter {directive:?}"))
}

fn main() -> Result<()> {

    let matches = args::get_cli().get_matches_from(wild::args());

    let config_file = matches.get_one::<String>("config").map(Utf8Path::new);
    let config = Config::load(config_file)?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .with_env_filter(log_filter(&config)?)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;
    tracing::trace!("config {:?}", config);

    let stdout = std::io::stdout().lock();

    match matches.subcommand() {
        Some(("parse", sub_matches)) => {
            let raws = commands::input_strings(sub_matches)?;
            commands::parse_cmd(stdout, &raws, sub_matches.get_flag("json"))?;
        }
        Some(("sort", sub_matches)) => {
            let raws = commands::input_strings(sub_matches)?;
            let opts = SortOptions::from_matches(sub_matches, &config);
            commands::sort_cmd(stdout, &raws, opts)?;
        }
        Some(("groups", sub_matches)) => {
            let raws = commands::input_strings(sub_matches)?;
            let view = if sub_matches.get_flag("tree") {
                GroupView::Tree
            } else if sub_matches.get_flag("table") {
                GroupView::Table
            } else {
                GroupView::Versions
            };
            let max_items = sub_matches
                .get_one::<usize>("max-items")
                .copied()
                .unwrap_or(config.report.max_items);
            commands::groups_cmd(stdout, &raws, view, max_items)?;
        }
        Some(("range", sub_matches)) => {
            let raws = commands::input_strings(sub_matches)?;
            let opts = RangeOptions {
                from: sub_matches.get_one::<String>("from").context("--from expected")?,
                to: sub_matches.get_one::<String>("to").context("--to expected")?,
                exclude_from: sub_matches.get_flag("exclude-from"),
                exclude_to: sub_matches.get_flag("exclude-to"),
            };
            commands::range_cmd(stdout, &raws, opts)?;
        }
        Some((name, _)) => {
            anyhow::bail!("unknown command {name}");
        }
        None => {
            anyhow::bail!("a command is required");
        }
    }

    Ok(())
}
