//! sitemill CLI - grows the keyword pool, writes the day's articles, and
//! builds the publishable site.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use sitemill::config::Config;
use sitemill::generate::generate_articles;
use sitemill::site::build_site;

fn main() -> Result<()> {
    let matches = App::new("sitemill")
        .version(crate_version!())
        .about("Generates study-tool articles from a keyword pool and builds the site")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("generate")
                .about("Grows the keyword pool if needed and writes the day's articles")
                .args(&common_args()),
        )
        .subcommand(
            SubCommand::with_name("build")
                .about("Builds the site from the articles in the posts directory")
                .args(&common_args()),
        )
        .subcommand(
            SubCommand::with_name("run")
                .about("Runs generate, then build")
                .args(&common_args()),
        )
        .get_matches();

    let (command, args) = match matches.subcommand() {
        (command, Some(args)) => (command, args),
        _ => unreachable!("clap requires a subcommand"),
    };

    let filter = if args.is_present("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    let config = load_config(args)?;
    let today = run_date(args)?;

    if command == "generate" || command == "run" {
        let report =
            generate_articles(&config, today).context("Generating articles")?;
        info!(
            pool = report.pool_size,
            articles = report.written.len(),
            "generate finished"
        );
    }
    if command == "build" || command == "run" {
        let summary = build_site(&config, today).context("Building site")?;
        info!(
            pages = summary.listings.len(),
            output = %summary.output_directory.display(),
            "build finished"
        );
    }

    Ok(())
}

fn common_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("project")
            .short("p")
            .long("project")
            .takes_value(true)
            .value_name("DIR")
            .help("Directory to search (with its parents) for sitemill.yaml [default: .]"),
        Arg::with_name("date")
            .short("d")
            .long("date")
            .takes_value(true)
            .value_name("YYYY-MM-DD")
            .help("Run as if today were this date [default: today]"),
        Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Enable verbose output"),
    ]
}

fn load_config(args: &ArgMatches) -> Result<Config> {
    let dir = match args.value_of("project") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("Finding the current directory")?,
    };
    Config::from_directory(Path::new(&dir))
        .with_context(|| format!("Loading configuration from '{}'", dir.display()))
}

fn run_date(args: &ArgMatches) -> Result<NaiveDate> {
    match args.value_of("date") {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid --date '{}', expected YYYY-MM-DD", date)),
        None => Ok(Local::now().date_naive()),
    }
}
