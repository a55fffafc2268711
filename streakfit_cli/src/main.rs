use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use streakfit_core::*;

#[derive(Parser)]
#[command(name = "streakfit")]
#[command(about = "Weekly workout tracker with streaks and freezes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD, for testing)
    #[arg(long, global = true)]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show streak, week board, and today's program (default)
    Status,

    /// Mark today's workout complete
    Done,

    /// Buy a streak freeze with points
    BuyFreeze,

    /// Show a day's program
    Show {
        /// Day to show (defaults to today)
        day: Option<String>,
    },

    /// Export all data as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Import data from a JSON export (replaces existing completions)
    Import {
        /// Path to the export file
        file: PathBuf,
    },

    /// Erase all completion and economy data
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    streakfit_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    let clock: Box<dyn Clock> = match cli.today.as_deref() {
        Some(s) => Box::new(FixedClock(dates::parse_local_date(s)?)),
        None => Box::new(SystemClock),
    };

    let tracker = Tracker::open(&data_dir, config.streak.clone(), clock);

    match cli.command {
        Some(Commands::Status) | None => cmd_status(&tracker),
        Some(Commands::Done) => cmd_done(&tracker),
        Some(Commands::BuyFreeze) => cmd_buy_freeze(&tracker),
        Some(Commands::Show { day }) => cmd_show(&tracker, day),
        Some(Commands::Export { output }) => cmd_export(&tracker, output),
        Some(Commands::Import { file }) => cmd_import(&tracker, file),
        Some(Commands::Reset { yes }) => cmd_reset(&tracker, yes),
    }
}

fn cmd_status(tracker: &Tracker) -> Result<()> {
    // The self-heal must run before any streak display
    let check = tracker.check_and_use_freezes()?;
    if check.freeze_used {
        println!("❄ A streak freeze covered your missed day(s)!");
    }
    if check.streak_lost {
        println!("Your streak could not be saved. Time for a fresh start!");
    }

    let streak = tracker.streak()?;
    let status = tracker.week_status()?;
    let economy = tracker.economy()?;
    let today = tracker.today();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  STREAKFIT                              │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    if streak > 0 {
        println!("  🔥 {} day streak", streak);
    } else {
        println!("  No active streak — today is a good day to start");
    }
    println!();

    print!("  ");
    for day in DayName::ALL {
        let mark = if status.completed.contains(&day) {
            "✓"
        } else if status.frozen.contains(&day) {
            "❄"
        } else {
            "·"
        };
        print!("{} {}  ", &day.as_str()[..3], mark);
    }
    println!();
    println!();
    println!(
        "  Points: {}   Freezes: {}",
        economy.points, economy.streak_freezes
    );
    println!();

    let program = schedule::day_program(today);
    println!("  Today ({}): {}", today, program.title);

    Ok(())
}

fn cmd_done(tracker: &Tracker) -> Result<()> {
    // Heal any gap first so the streak printed below is accurate
    let check = tracker.check_and_use_freezes()?;
    if check.freeze_used {
        println!("❄ A streak freeze covered your missed day(s)!");
    }

    let today = tracker.today();
    match tracker.complete_day(today) {
        Ok(record) => {
            if record.is_rest_day {
                println!("✓ Rest day checked off. Recovery counts!");
            } else {
                println!("✓ Workout complete!");
            }
            let streak = tracker.streak()?;
            let economy = tracker.economy()?;
            println!("  Streak: {} day{}", streak, if streak == 1 { "" } else { "s" });
            println!("  Points: {}", economy.points);
            Ok(())
        }
        Err(CompleteError::Store(e)) => Err(e),
        // Business-rule violations: transient message, no stack trace
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_buy_freeze(tracker: &Tracker) -> Result<()> {
    let cost = tracker.freeze_cost();
    if tracker.purchase_freeze()? {
        let economy = tracker.economy()?;
        println!("❄ Streak freeze purchased for {} points!", cost);
        println!(
            "  Points: {}   Freezes: {}",
            economy.points, economy.streak_freezes
        );
        Ok(())
    } else {
        let economy = tracker.economy()?;
        eprintln!(
            "Not enough points: need {}, have {}",
            cost, economy.points
        );
        std::process::exit(1);
    }
}

fn cmd_show(tracker: &Tracker, day: Option<String>) -> Result<()> {
    let day = match day {
        Some(s) => s.parse::<DayName>()?,
        None => tracker.today(),
    };
    let program = schedule::day_program(day);

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} — {}", day, program.title);
    println!("╰─────────────────────────────────────────╯");
    println!();

    for exercise in &program.exercises {
        println!("  {} ({})", exercise.name, exercise.prescription);
        println!("    Muscles: {}", exercise.muscles);
        println!("    {}", exercise.description);
        print_adjustment("Easier", &exercise.easier);
        print_adjustment("Harder", &exercise.harder);
        println!();
    }

    Ok(())
}

fn print_adjustment(label: &str, adjustment: &schedule::Adjustment) {
    match adjustment {
        schedule::Adjustment::Tip(tip) => println!("    {}: {}", label, tip),
        schedule::Adjustment::Alternate(alt) => {
            println!("    {}: {} ({})", label, alt.name, alt.prescription)
        }
    }
}

fn cmd_export(tracker: &Tracker, output: Option<PathBuf>) -> Result<()> {
    let json = export_data(tracker.completions())?;
    match output {
        Some(path) => {
            std::fs::write(&path, &json)?;
            println!("✓ Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn cmd_import(tracker: &Tracker, file: PathBuf) -> Result<()> {
    let json = std::fs::read_to_string(&file)?;
    let summary = import_data(tracker.completions(), &json)?;
    println!(
        "✓ Imported {} completion{}",
        summary.imported,
        if summary.imported == 1 { "" } else { "s" }
    );
    if summary.skipped > 0 {
        println!("  Skipped {} malformed record(s)", summary.skipped);
    }
    Ok(())
}

fn cmd_reset(tracker: &Tracker, yes: bool) -> Result<()> {
    if !yes {
        eprintln!("This erases all completions and points. Re-run with --yes to confirm.");
        std::process::exit(1);
    }
    tracker.reset()?;
    println!("✓ All data cleared");
    Ok(())
}
