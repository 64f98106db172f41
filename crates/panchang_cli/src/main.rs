use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use panchang_core::{Location, MARATHI_MONTHS, NAKSHATRA_NAMES, Paksha, tithi_name};
use panchang_query::{
    MonthlyPanchang, PanchangInfo, annual_festivals, monthly_panchang, panchang_for_date,
    upcoming_ekadashis,
};

#[derive(Parser)]
#[command(name = "panchang", about = "Maharashtra Panchang calendar CLI")]
struct Cli {
    /// Observer latitude in decimal degrees
    #[arg(long, global = true, default_value_t = 19.0760)]
    latitude: f64,
    /// Observer longitude in decimal degrees
    #[arg(long, global = true, default_value_t = 72.8777)]
    longitude: f64,
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panchang for a specific date (YYYY-MM-DD)
    Date {
        /// Calendar date, e.g. 2024-04-09
        date: NaiveDate,
    },
    /// Panchang for today
    Today,
    /// Panchang for every day of a month
    Month {
        /// Gregorian year
        year: i32,
        /// Month number 1-12
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// Festivals for a year
    Festivals {
        /// Gregorian year
        year: i32,
    },
    /// Upcoming ekadashis
    Ekadashis {
        /// Start date (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Number of ekadashis to report
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=12))]
        count: u8,
    },
    /// Reference name tables
    Names {
        #[command(subcommand)]
        table: NameTable,
    },
}

#[derive(Subcommand)]
enum NameTable {
    /// Tithi names for both pakshas
    Tithi,
    /// The 27 nakshatra names
    Nakshatra,
    /// The 12 Marathi month names
    Months,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let location = Location {
        latitude_deg: cli.latitude,
        longitude_deg: cli.longitude,
    };

    match cli.command {
        Commands::Date { date } => {
            debug!(%date, "computing panchang");
            print_day(&panchang_for_date(date, &location), cli.json);
        }
        Commands::Today => {
            let today = Local::now().date_naive();
            debug!(%today, "computing today's panchang");
            print_day(&panchang_for_date(today, &location), cli.json);
        }
        Commands::Month { year, month } => {
            debug!(year, month, "computing monthly panchang");
            match monthly_panchang(year, month, &location) {
                Ok(monthly) => print_month(&monthly, cli.json),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Festivals { year } => {
            debug!(year, "listing festivals");
            let annual = annual_festivals(year);
            if cli.json {
                print_json(&annual);
            } else if annual.festivals.is_empty() {
                println!("no festival data for {year}");
            } else {
                for f in &annual.festivals {
                    println!("{}  {}  {} ({})", f.date, f.marathi_month, f.name, f.english_name);
                }
            }
        }
        Commands::Ekadashis { from, count } => {
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            debug!(%from, count, "scanning for ekadashis");
            let found = upcoming_ekadashis(from, count as usize, &location);
            if cli.json {
                print_json(&found);
            } else {
                for p in &found {
                    println!("{}  {} {}  {}", p.date, p.tithi.paksha, p.tithi.name, p.weekday);
                }
            }
        }
        Commands::Names { table } => print_names(table, cli.json),
    }
}

fn print_day(p: &PanchangInfo, json: bool) {
    if json {
        print_json(p);
        return;
    }
    println!("{} ({} / {})", p.date, p.weekday, p.weekday_english);
    println!("  {} शके {}", p.marathi_month, p.marathi_year);
    println!("  Tithi:     {} {} ({})", p.tithi.paksha, p.tithi.name, p.tithi.number);
    println!("  Nakshatra: {} ({})", p.nakshatra.name, p.nakshatra.number);
    println!("  Yoga:      {}", p.yoga.name);
    println!("  Karana:    {}", p.karana.name);
    println!("  Sunrise:   {}   Sunset: {}", p.sunrise, p.sunset);
    println!("  Rahu Kaal: {} - {}", p.rahu_kaal.start, p.rahu_kaal.end);
    if let Some(name) = p.festival {
        let english = p.festival_english.unwrap_or("");
        println!("  Festival:  {name} ({english})");
    }
    if p.is_ekadashi {
        println!("  एकादशी");
    }
    if p.is_purnima {
        println!("  पौर्णिमा");
    }
    if p.is_amavasya {
        println!("  अमावस्या");
    }
}

fn print_month(monthly: &MonthlyPanchang, json: bool) {
    if json {
        print_json(monthly);
        return;
    }
    println!(
        "{}-{:02} ({}): {} days",
        monthly.year,
        monthly.month,
        monthly.marathi_month,
        monthly.days.len()
    );
    for p in &monthly.days {
        let mut marks = String::new();
        if p.is_ekadashi {
            marks.push_str("  एकादशी");
        }
        if p.is_purnima {
            marks.push_str("  पौर्णिमा");
        }
        if p.is_amavasya {
            marks.push_str("  अमावस्या");
        }
        if let Some(name) = p.festival {
            marks.push_str("  ");
            marks.push_str(name);
        }
        println!(
            "{}  {}  {} {} ({}){marks}",
            p.date, p.weekday, p.tithi.paksha, p.tithi.name, p.tithi.number
        );
    }
}

fn print_names(table: NameTable, json: bool) {
    match table {
        NameTable::Tithi => {
            let shukla: Vec<&str> = (1..=15).map(|n| tithi_name(n, Paksha::Shukla)).collect();
            let krishna: Vec<&str> = (1..=15).map(|n| tithi_name(n, Paksha::Krishna)).collect();
            if json {
                print_json(&serde_json::json!({ "shukla": shukla, "krishna": krishna }));
            } else {
                for (i, (s, k)) in shukla.iter().zip(&krishna).enumerate() {
                    println!("{:2}  {s} / {k}", i + 1);
                }
            }
        }
        NameTable::Nakshatra => {
            if json {
                print_json(&NAKSHATRA_NAMES);
            } else {
                for (i, name) in NAKSHATRA_NAMES.iter().enumerate() {
                    println!("{:2}  {name}", i + 1);
                }
            }
        }
        NameTable::Months => {
            if json {
                print_json(&MARATHI_MONTHS);
            } else {
                for (i, name) in MARATHI_MONTHS.iter().enumerate() {
                    println!("{:2}  {name}", i + 1);
                }
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("serialization error: {e}"),
    }
}
