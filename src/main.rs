use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use thermoconv::about::AboutInfo;
use thermoconv::config::Config;
use thermoconv::engine;
use thermoconv::form::FormController;
use thermoconv::session::{Outcome, Session};
use thermoconv::units::{self, TemperatureUnit};

#[derive(Parser)]
#[command(name = "thermoconv")]
#[command(about = "Temperature converter for Celsius, Réaumur, Kelvin and Fahrenheit", long_about = None)]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Value to convert, either "100" (with --from) or "100 °C"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit to convert from (celsius, reaumur, kelvin, fahrenheit, or c/r/k/f)
        #[arg(short, long)]
        from: Option<String>,

        /// Unit to convert to
        #[arg(short, long)]
        to: String,
    },

    /// Convert a value into every other unit
    Table {
        /// Value to convert, either "100" (with --from) or "100 °C"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit to convert from
        #[arg(short, long)]
        from: Option<String>,
    },

    /// List supported units
    Units,

    /// Fill in the converter form one command at a time
    Interactive,

    /// Show application information
    About,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match cli.config.as_deref() {
        Some(path) => {
            log::debug!("loading config from {}", path);
            Config::load_from_file(path)?
        }
        None => Config::empty(),
    };

    match cli.command {
        Commands::Convert { value, from, to } => {
            convert_value(&config, &value, from.as_deref(), &to, cli.json)
        }
        Commands::Table { value, from } => {
            conversion_table(&config, &value, from.as_deref(), cli.json)
        }
        Commands::Units => list_units(cli.json),
        Commands::Interactive => interactive(&config),
        Commands::About => show_about(cli.json),
    }
}

/// Drive a form the way a UI would: select units, type the value, submit
fn fill_form(
    config: &Config,
    value: &str,
    from: Option<&str>,
    to: Option<TemperatureUnit>,
) -> Result<FormController, Box<dyn std::error::Error>> {
    let mut form = FormController::with_config(config);

    match from {
        Some(from) => {
            form.select_source_unit(from.parse()?)?;
            form.set_input_text(value);
        }
        None if units::looks_like_temperature_string(value) => {
            let parsed = units::parse_temperature(value)?;
            form.select_source_unit(parsed.unit)?;
            form.set_input_text(parsed.value.to_string());
        }
        None => {
            return Err(format!(
                "'{}' has no unit; write it as '<value> <unit>' or pass --from",
                value
            )
            .into())
        }
    }

    if let Some(to) = to {
        form.select_target_unit(to)?;
    }

    Ok(form)
}

fn convert_value(
    config: &Config,
    value: &str,
    from: Option<&str>,
    to: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let target: TemperatureUnit = to.parse()?;
    let mut form = fill_form(config, value, from, Some(target))?;
    let result = form.submit()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", form.formatter().format_result(&result));
    }

    Ok(())
}

fn conversion_table(
    config: &Config,
    value: &str,
    from: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = fill_form(config, value, from, None)?;
    let source = form
        .state()
        .source_unit()
        .ok_or("source unit is not selected")?;
    let input = units::parse_value(form.state().input_text())?;
    let rows = engine::convert_all(source, input);
    if let Some((unit, _)) = rows.iter().find(|(_, converted)| !converted.is_finite()) {
        return Err(format!("{} {} is out of range in {}", input, source, unit).into());
    }

    if json {
        let table: Vec<_> = rows
            .iter()
            .map(|(unit, converted)| serde_json::json!({ "unit": unit, "value": converted }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "source": source,
                "value": input,
                "conversions": table,
            }))?
        );
    } else {
        let formatter = form.formatter();
        println!("{}", formatter.format_temperature(input, source));
        for (unit, converted) in rows {
            println!("  = {}", formatter.format_temperature(converted, unit));
        }
    }

    Ok(())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let list: Vec<_> = TemperatureUnit::ALL
            .iter()
            .map(|u| serde_json::json!({ "id": u, "label": u.label(), "symbol": u.symbol() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        println!("Units ({}):", TemperatureUnit::ALL.len());
        for unit in TemperatureUnit::ALL {
            println!("  - {} ({}) [{}]", unit.label(), unit.symbol(), unit.id());
        }
    }

    Ok(())
}

fn show_about(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let about = AboutInfo::current();
    if json {
        println!("{}", serde_json::to_string_pretty(&about)?);
    } else {
        println!("{}", about);
    }
    Ok(())
}

fn interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Type 'help' for commands, 'quit' to leave.");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Outcome::Continue(text) => println!("{}", text),
            Outcome::Quit => break,
        }
    }

    Ok(())
}
