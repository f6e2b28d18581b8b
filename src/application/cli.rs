use crate::application::ReportApp;
use crate::domain::{Entry, RangeInput, ReportOutcome};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser)]
#[command(name = "sigreport")]
#[command(about = "Volunteer signature report over recorded shift events")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show volunteer signatures for a date range (defaults to the past week)
    Report {
        /// Begin date (YYYY-MM-DD)
        #[arg(short, long)]
        begin: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
        /// Print the matching entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a volunteer shift event
    Record {
        site: String,
        volunteer: String,
        action: String,
        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

        let cli = Self::parse();
        let app = ReportApp::new()?;
        let now = Local::now().naive_local();

        match cli.command {
            Some(Commands::Report { begin, end, json }) => {
                let input = RangeInput::new(parse_date_arg(begin)?, parse_date_arg(end)?);
                let outcome = app.run_report(input, now)?;
                render_report(&outcome, json)?;
            }
            Some(Commands::Record {
                site,
                volunteer,
                action,
                date,
            }) => {
                let date = parse_date_arg(date)?.unwrap_or_else(|| now.date());
                let entry = Entry::new(date, site, volunteer, action);
                app.record(entry)?;
                println!("Recorded signature for {date}");
            }
            None => {
                // Default: past week's report
                let outcome = app.run_report(RangeInput::default(), now)?;
                render_report(&outcome, false)?;
            }
        }

        Ok(())
    }
}

/// Free-text dates are validated here, before the range core ever sees them.
fn parse_date_arg(arg: Option<String>) -> anyhow::Result<Option<NaiveDate>> {
    arg.map(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT))
        .transpose()
        .map_err(Into::into)
}

fn render_report(outcome: &ReportOutcome, json: bool) -> anyhow::Result<()> {
    match outcome {
        ReportOutcome::InvalidRange => {
            println!("Invalid date range");
            println!("No data for this date range");
        }
        ReportOutcome::NoData => {
            println!("No data for this date range");
        }
        ReportOutcome::Entries(entries) => {
            if json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else {
                println!("Volunteer Signatures");
                for entry in entries {
                    println!(
                        "{}  {}  {}  {}",
                        entry.date.format(DATE_FORMAT),
                        entry.site,
                        entry.volunteer,
                        entry.action
                    );
                }
            }
        }
    }

    Ok(())
}
