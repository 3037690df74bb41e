use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jyotish_rs::{
    BirthMoment, ChartPoint, DEFAULT_TZ_OFFSET_HOURS, ErrorKind, JyotishError, RashiInfo,
    compute_compatibility, compute_dasha, compute_kundali, compute_numerology, daily_horoscope,
    jd_to_calendar, nakshatra, nakshatra_table, rashi, rashi_table,
};

#[derive(Parser)]
#[command(name = "jyotish", about = "Approximate Vedic astrology calculations")]
struct Cli {
    /// Print the result record as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Local birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local birth time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours (IST = 5.5)
    #[arg(
        long,
        env = "JYOTISH_TZ_OFFSET",
        default_value_t = DEFAULT_TZ_OFFSET_HOURS,
        allow_negative_numbers = true
    )]
    tz: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Birth chart: Lagna, Sun, Moon, nakshatra and 12 houses
    Kundali(BirthArgs),
    /// Psychic, destiny and name numbers
    Numerology {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Full name for the Chaldean name number
        #[arg(long)]
        name: Option<String>,
    },
    /// Ashtakoota compatibility from two sidereal Moon longitudes
    Match {
        /// First person's Moon longitude in degrees
        #[arg(allow_negative_numbers = true)]
        moon1: f64,
        /// Second person's Moon longitude in degrees
        #[arg(allow_negative_numbers = true)]
        moon2: f64,
    },
    /// Daily horoscope for a Moon rashi
    Horoscope {
        /// Moon rashi index (0 = Mesha .. 11 = Meena)
        #[arg(allow_negative_numbers = true)]
        rashi: i64,
        /// Date (YYYY-MM-DD), default today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Vimshottari mahadasha sequence from birth
    Dasha(BirthArgs),
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Julian Day of a local date and time
    Jd {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long, default_value = "00:00")]
        time: String,
        /// UTC offset in hours
        #[arg(
            long,
            env = "JYOTISH_TZ_OFFSET",
            default_value_t = DEFAULT_TZ_OFFSET_HOURS,
            allow_negative_numbers = true
        )]
        tz: f64,
    },
    /// Print the rashi and nakshatra reference tables
    Tables,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Print the error and exit: 1 for bad input, 2 for a failed computation.
fn fail(e: JyotishError) -> ! {
    eprintln!("Error: {e}");
    let code = match e.kind() {
        ErrorKind::Validation => 1,
        ErrorKind::Computation => 2,
    };
    std::process::exit(code);
}

fn unwrap_or_fail<T>(r: Result<T, JyotishError>) -> T {
    r.unwrap_or_else(|e| fail(e))
}

/// Emit `value` as pretty JSON, or via the text renderer.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) {
    if !json {
        text(value);
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize result: {e}");
            std::process::exit(2);
        }
    }
}

fn jd_to_date_string(jd: f64) -> String {
    let (y, m, d) = jd_to_calendar(jd);
    format!("{y:04}-{m:02}-{:02}", d.floor() as u32)
}

fn rashi_text(info: &RashiInfo) -> String {
    format!(
        "{} ({}) {} deg {} min {:.1} sec",
        info.rashi.name(),
        info.rashi.western_name(),
        info.dms.degrees,
        info.dms.minutes,
        info.dms.seconds
    )
}

fn point_text(label: &str, p: &ChartPoint) {
    println!("{label:<8}{:>8.2}  {}", p.longitude, rashi_text(&p.rashi));
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let json = cli.json;
    debug!(json, "jyotish cli started");

    match cli.command {
        Commands::Kundali(b) => {
            let k = unwrap_or_fail(compute_kundali(&b.date, &b.time, b.lat, b.lon, Some(b.tz)));
            emit(json, &k, |k| {
                let loc = &k.birth_details.location;
                println!(
                    "Birth:  {} at {:.4}, {:.4}",
                    k.birth_details.moment, loc.latitude_deg, loc.longitude_deg
                );
                println!("JD:     {:.6}   Ayanamsha: {:.4}", k.julian_day, k.ayanamsha);
                point_text("Lagna:", &k.lagna);
                point_text("Sun:", &k.sun);
                point_text("Moon:", &k.moon.point);
                let n = &k.moon.nakshatra;
                println!(
                    "        {} pada {} (lord {})",
                    n.nakshatra.name(),
                    n.pada,
                    n.nakshatra.lord().english_name()
                );
                println!("Houses:");
                for h in &k.houses {
                    println!(
                        "  {:>2}  {:<11} {:<12} {:>6.2}",
                        h.number,
                        h.rashi.name(),
                        h.rashi.western_name(),
                        h.degree
                    );
                }
            });
        }

        Commands::Numerology { date, name } => {
            let r = unwrap_or_fail(compute_numerology(&date, name.as_deref()));
            emit(json, &r, |r| {
                let readings = [
                    ("Psychic", Some(&r.psychic)),
                    ("Destiny", Some(&r.destiny)),
                    ("Name", r.name.as_ref()),
                ];
                for (label, reading) in readings {
                    if let Some(n) = reading {
                        println!(
                            "{label:<8} {}  {} | {} | lucky day {}",
                            n.number,
                            n.meaning.planet.english_name(),
                            n.meaning.traits,
                            n.meaning.lucky_day
                        );
                    }
                }
            });
        }

        Commands::Match { moon1, moon2 } => {
            let r = unwrap_or_fail(compute_compatibility(moon1, moon2));
            emit(json, &r, |r| {
                for (label, p) in [("Person 1", &r.person1), ("Person 2", &r.person2)] {
                    println!(
                        "{label}: {} / {} ({} gana, {} nadi)",
                        p.rashi.name(),
                        p.nakshatra.name(),
                        p.gana.name(),
                        p.nadi.name()
                    );
                }
                for s in &r.scores {
                    println!(
                        "  {:<13} {}/{}  {}",
                        s.koota.name(),
                        s.score,
                        s.max_score,
                        s.description
                    );
                }
                println!("Total: {}/{} ({:.1}%)", r.total_score, r.max_score, r.percentage);
                println!("{}", r.verdict);
            });
        }

        Commands::Horoscope { rashi, date } => {
            let h = unwrap_or_fail(daily_horoscope(rashi, date.as_deref()));
            emit(json, &h, |h| {
                println!("{} ({}) - {}", h.rashi.name(), h.rashi.western_name(), h.date);
                println!("Themes:        {}", h.themes.join(", "));
                let nums: Vec<String> = h.lucky_numbers.iter().map(u8::to_string).collect();
                println!("Lucky numbers: {}", nums.join(", "));
                println!("Lucky colors:  {}", h.lucky_colors.join(", "));
                println!("Favorable:     {}", h.favorable_time);
                println!("Caution:       {}", h.caution_time);
            });
        }

        Commands::Dasha(b) => {
            let d = unwrap_or_fail(compute_dasha(&b.date, &b.time, b.lat, b.lon, Some(b.tz)));
            emit(json, &d, |d| {
                println!("Balance at birth: {:.2} years", d.balance_years);
                for p in &d.periods {
                    println!(
                        "  {:<8} {}  ->  {}  ({:.2} y)",
                        p.lord.english_name(),
                        jd_to_date_string(p.start_jd),
                        jd_to_date_string(p.end_jd),
                        p.years
                    );
                }
            });
        }

        Commands::Rashi { lon } => {
            let info = unwrap_or_fail(rashi(lon));
            emit(json, &info, |info| {
                println!("{} ({:.4} deg in rashi)", rashi_text(info), info.degrees_in_rashi);
            });
        }

        Commands::Nakshatra { lon } => {
            let info = unwrap_or_fail(nakshatra(lon));
            emit(json, &info, |info| {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra,
                    info.degrees_in_pada
                );
            });
        }

        Commands::Jd { date, time, tz } => {
            let moment =
                unwrap_or_fail(BirthMoment::parse(&date, &time, tz).map_err(JyotishError::from));
            let jd = moment.julian_day();
            emit(json, &jd, |jd| {
                println!("{moment}  ->  JD {jd:.6}");
            });
        }

        Commands::Tables => {
            #[derive(Serialize)]
            struct Tables {
                rashis: &'static [jyotish_rs::Rashi; 12],
                nakshatras: &'static [jyotish_rs::Nakshatra; 27],
            }
            let tables = Tables {
                rashis: rashi_table(),
                nakshatras: nakshatra_table(),
            };
            emit(json, &tables, |t| {
                println!("Rashis:");
                for r in t.rashis {
                    println!(
                        "  {:>2}  {:<11} {:<12} {:<8} {}",
                        r.index(),
                        r.name(),
                        r.western_name(),
                        r.lord().english_name(),
                        r.element().name()
                    );
                }
                println!("Nakshatras:");
                for n in t.nakshatras {
                    println!(
                        "  {:>2}  {:<17} {:<8} {}",
                        n.index(),
                        n.name(),
                        n.lord().english_name(),
                        n.deity()
                    );
                }
            });
        }
    }
}
