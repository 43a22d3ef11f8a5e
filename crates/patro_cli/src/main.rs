mod logging;
mod render;

use clap::{Args, Parser, Subcommand};
use patro_core::{
    ALL_RASHIS, CalendarConfig, CalendarError, CalendarModel, FESTIVALS, TodayPolicy,
    TodaySummary, horoscope, localize_digits, parse_gregorian, tithi_for_day, to_nepali_number,
};
use tracing::{error, info};

/// Largest `--offset`, in months, either way (10,000 years).
const MAX_MONTH_OFFSET: i64 = 12 * 10_000;

#[derive(Parser)]
#[command(name = "patro", about = "Bikram Sambat (Nepali) calendar")]
struct Cli {
    #[command(flatten)]
    calendar: CalendarArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options that build the calendar model.
#[derive(Args)]
struct CalendarArgs {
    /// BS year treated as today
    #[arg(long, global = true)]
    year: Option<i32>,
    /// BS month treated as today (1 = Baishakh .. 12 = Chaitra)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: Option<u8>,
    /// BS day of month treated as today (1-30)
    #[arg(long, global = true)]
    day: Option<u8>,
    /// Gregorian date (YYYY-MM-DD) that today's BS day maps to
    #[arg(long, global = true)]
    anchor: Option<String>,
    /// Today highlighting: day-only, home-month or full-date
    #[arg(long, global = true, default_value = "full-date")]
    today_policy: TodayPolicy,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's date in both calendars with tithi and weekday
    Today,
    /// Month grid with event markers
    Month {
        /// Months to move from the home month (negative goes back)
        #[arg(
            long,
            default_value_t = 0,
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(i32).range(-MAX_MONTH_OFFSET..=MAX_MONTH_OFFSET)
        )]
        offset: i32,
        /// List every day with tithi and approximate Gregorian date
        #[arg(long)]
        details: bool,
    },
    /// Tithi label for a day of month
    Tithi {
        /// Day of month
        #[arg(value_name = "DAY", allow_hyphen_values = true)]
        day_of_month: i32,
    },
    /// Events marked on a day of month
    Events {
        /// Day of month (1-30)
        #[arg(value_name = "DAY")]
        day_of_month: u8,
    },
    /// Upcoming festivals
    Festivals,
    /// Horoscope for a zodiac sign
    Horoscope {
        /// Sign key (aries .. pisces) or Sanskrit name
        sign: String,
    },
    /// List zodiac signs
    Signs,
    /// Write a number in Devanagari digits
    Digits {
        /// Non-negative integer
        n: u64,
    },
    /// Current Nepal time in Devanagari digits
    Clock,
}

fn build_config(args: &CalendarArgs) -> Result<CalendarConfig, CalendarError> {
    let mut config = CalendarConfig {
        today_policy: args.today_policy,
        ..CalendarConfig::default()
    };
    let home = config.home;
    config = config.with_home(
        args.year.unwrap_or(home.year),
        args.month.map_or(home.month, |m| m - 1),
        args.day.unwrap_or(home.day),
    )?;
    if let Some(anchor) = &args.anchor {
        config.anchor = parse_gregorian(anchor)?;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CalendarError> {
    let config = build_config(&cli.calendar)?;
    let mut model = CalendarModel::new(config)?;
    info!(home = %model.home(), policy = config.today_policy.name(), "calendar ready");

    match cli.command {
        Commands::Today => {
            let summary = TodaySummary::at(&model, &chrono::Utc::now());
            print!("{}", render::today(&summary));
        }

        Commands::Month { offset, details } => {
            model.advance_month(offset)?;
            let records = model.generate_month_records();
            if details {
                print!(
                    "{}",
                    render::month_details(&model.month_header(), &model.cursor(), &records)
                );
            } else {
                print!(
                    "{}",
                    render::month(&model.month_header(), &model.month_grid(), &records)
                );
            }
        }

        Commands::Tithi { day_of_month } => {
            println!("{}", tithi_for_day(day_of_month));
        }

        Commands::Events { day_of_month } => {
            let record = model.day_record(day_of_month)?;
            if record.events.is_empty() {
                println!("No events on day {day_of_month}");
            } else {
                for event in record.events {
                    println!("{event}");
                }
            }
        }

        Commands::Festivals => {
            print!("{}", render::festivals(&FESTIVALS));
        }

        Commands::Horoscope { sign } => {
            print!("{}", render::horoscope(horoscope(&sign)?));
        }

        Commands::Signs => {
            for r in ALL_RASHIS {
                println!(
                    "{:<12} {:<10} {}",
                    r.key(),
                    r.name(),
                    r.sign().display_name
                );
            }
        }

        Commands::Digits { n } => {
            println!("{}", to_nepali_number(n));
        }

        Commands::Clock => {
            let now = chrono::Utc::now().with_timezone(&patro_core::NEPAL_OFFSET);
            println!("{}", localize_digits(&now.format("%H:%M:%S").to_string()));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        error!(%e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
