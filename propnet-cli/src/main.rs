mod parsers;
mod result;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use clap::Subcommand;
use log::error;
use log::info;
use log::Level;
use log::LevelFilter;
use parsers::parse_value;
use propnet_core::convert_case::Case;
use propnet_core::propagation::OperatorPropagator;
use propnet_core::statistics::configure_statistic_logging;
use propnet_core::termination::Combinator;
use propnet_core::termination::PropagationBudget;
use propnet_core::termination::TerminationCondition;
use propnet_core::termination::TimeBudget;
use propnet_core::CellId;
use propnet_core::Network;
use propnet_core::NetworkOptions;
use propnet_core::Value;
use propnet_primitives::celsius_fahrenheit;
use propnet_primitives::install_arithmetic;
use propnet_primitives::ADD;
use result::PropnetResult;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// The maximum number of propagator executions in a single run. By default a run continues
    /// until the network is quiescent.
    #[arg(short = 'b', long = "propagation-budget")]
    propagation_budget: Option<u64>,

    /// The time budget for a single run, given in milliseconds.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// Only merge intervals with equal intervals, instead of narrowing them by intersection.
    #[arg(long = "no-interval-merge", default_value_t = false)]
    no_interval_merge: bool,

    /// Enables log message output from the network
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Enables logging of statistics from the network
    #[arg(short = 's', long = "log-statistics", default_value_t = false)]
    log_statistics: bool,

    /// If `--verbose` is enabled removes the timestamp information from the log messages
    #[arg(long = "omit-timestamp", default_value_t = false)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled removes the call site information from the log messages.
    /// Call site is the file and line in it that originated the message.
    #[arg(long = "omit-call-site", default_value_t = false)]
    omit_call_site: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Adds two values with a network of a single adder. Values are integers, floats or intervals
    /// written as `low..high`.
    Add {
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        lhs: Value,
        #[arg(value_parser = parse_value, allow_negative_numbers = true)]
        rhs: Value,
    },
    /// Converts a temperature between Celsius and Fahrenheit; the network derives whichever of
    /// the two is not given.
    Temperature(TemperatureArgs),
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = true)]
struct TemperatureArgs {
    #[arg(long, value_parser = parse_value, allow_negative_numbers = true)]
    celsius: Option<Value>,
    #[arg(long, value_parser = parse_value, allow_negative_numbers = true)]
    fahrenheit: Option<Value>,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("c STAT", None, Some(Case::Snake), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> PropnetResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    let mut network = Network::with_options(NetworkOptions {
        interval_merge: !args.no_interval_merge,
    });
    install_arithmetic(network.operators_mut())?;

    let mut termination = Combinator::new(
        args.propagation_budget.map(PropagationBudget::new),
        args.time_limit
            .map(|milliseconds| TimeBudget::starting_now(Duration::from_millis(milliseconds))),
    );

    let outcome = match args.command {
        Command::Add { lhs, rhs } => add(&mut network, lhs, rhs, &mut termination),
        Command::Temperature(TemperatureArgs {
            celsius,
            fahrenheit,
        }) => temperature(&mut network, celsius, fahrenheit, &mut termination),
    };

    network.log_statistics();
    outcome
}

fn add(
    network: &mut Network,
    lhs: Value,
    rhs: Value,
    termination: &mut impl TerminationCondition,
) -> PropnetResult<()> {
    let lhs_cell = network.new_named_cell("lhs");
    let rhs_cell = network.new_named_cell("rhs");
    let sum = network.new_named_cell("sum");
    let _ = network.add_propagator(
        OperatorPropagator::new(ADD, [lhs_cell, rhs_cell], sum).with_name("adder"),
    );

    network.add_content(lhs_cell, lhs.clone())?;
    network.add_content(rhs_cell, rhs.clone())?;
    network.run_with(termination)?;
    info!("The network is quiescent");

    println!("{lhs} + {rhs} = {}", describe(network, sum));
    Ok(())
}

fn temperature(
    network: &mut Network,
    celsius: Option<Value>,
    fahrenheit: Option<Value>,
    termination: &mut impl TerminationCondition,
) -> PropnetResult<()> {
    let celsius_cell = network.new_named_cell("celsius");
    let fahrenheit_cell = network.new_named_cell("fahrenheit");
    celsius_fahrenheit(network, celsius_cell, fahrenheit_cell);

    network.add_content(celsius_cell, celsius)?;
    network.add_content(fahrenheit_cell, fahrenheit)?;
    network.run_with(termination)?;
    info!("The network is quiescent");

    println!(
        "{} °C = {} °F",
        describe(network, celsius_cell),
        describe(network, fahrenheit_cell)
    );
    Ok(())
}

fn describe(network: &Network, cell: CellId) -> String {
    network
        .content(cell)
        .map_or_else(|| "unknown".to_owned(), Value::to_string)
}
