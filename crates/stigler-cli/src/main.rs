use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stigler_diet::{check_tolerance, DietError, DietModel, DietReport, DietTables, DEFAULT_TOLERANCE};
use stigler_solver::{Solver, SolverConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// No usable solution: infeasible, unbounded, or solver failure
const EXIT_NO_SOLUTION: i32 = 1;
/// Bad tables, unreadable dataset, or solver settings it cannot run with
const EXIT_CONFIGURATION: i32 = 2;

#[derive(Parser)]
#[command(name = "stigler")]
#[command(about = "Solve the Stigler diet problem as a linear program", long_about = None)]
struct Cli {
    /// Log model building and solver progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the cheapest diet meeting every nutrient minimum
    Solve {
        /// JSON dataset to use instead of the built-in 1939 table
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Tolerance for minimum and cross-check comparisons
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
        /// Simplex pivot limit per phase
        #[arg(long, default_value_t = SolverConfig::default().max_iterations)]
        max_iterations: usize,
        /// Simplex pivoting tolerance
        #[arg(long, default_value_t = SolverConfig::default().tolerance)]
        pivot_tolerance: f64,
    },
    /// Validate the diet tables without solving
    Check {
        /// JSON dataset to use instead of the built-in 1939 table
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Print the built-in table as a JSON dataset
    Export,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve {
            data,
            format,
            tolerance,
            max_iterations,
            pivot_tolerance,
        } => {
            let tolerance = check_tolerance(tolerance).unwrap_or_else(|e| fail(&e));
            let tables = load_tables(data.as_ref()).unwrap_or_else(|e| fail(&e));

            let config = SolverConfig::default()
                .with_max_iterations(max_iterations)
                .with_tolerance(pivot_tolerance);
            let solver = Solver::try_new(config).unwrap_or_else(|e| fail(&DietError::from(e)));

            let model = DietModel::build(&tables).unwrap_or_else(|e| fail(&e));
            let solution = model.solve(&solver);

            let report = match DietReport::interpret(&tables, &model, &solution, tolerance) {
                Ok(r) => r,
                Err(e) => {
                    if format != "json" && matches!(e, DietError::NoSolution { .. }) {
                        println!("Number of variables = {}", model.num_variables());
                        println!("Number of constraints = {}", model.num_constraints());
                        println!();
                        println!("The problem does not have an optimal solution!");
                        println!("The solver could not solve the problem.");
                    }
                    fail(&e);
                }
            };

            if format == "json" {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&DietError::DatasetError(e.to_string())),
                }
            } else {
                print!("{}", report);
            }
            info!(cost = report.cost, outcome = ?report.outcome, "run complete");
        }
        Commands::Check { data } => {
            let tables = load_tables(data.as_ref()).unwrap_or_else(|e| fail(&e));
            let model = DietModel::build(&tables).unwrap_or_else(|e| fail(&e));

            match &data {
                Some(path) => println!("✓ {} is valid", path.display()),
                None => println!("✓ built-in Stigler table is valid"),
            }
            println!("  {} foods", tables.foods.len());
            println!("  {} nutrients", tables.nutrients.len());
            println!("  {} variables, {} constraints", model.num_variables(), model.num_constraints());

            let unreachable = tables.unreachable_nutrients();
            if !unreachable.is_empty() {
                println!("  no food supplies: {}", unreachable.join(", "));
            }
        }
        Commands::Export => match stigler_diet::stigler::tables().to_dataset().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&e),
        },
    }
}

fn load_tables(data: Option<&PathBuf>) -> Result<DietTables, DietError> {
    match data {
        Some(path) => DietTables::load(path),
        None => Ok(stigler_diet::stigler::tables()),
    }
}

fn exit_code(err: &DietError) -> i32 {
    if err.is_configuration() {
        EXIT_CONFIGURATION
    } else {
        EXIT_NO_SOLUTION
    }
}

fn fail(err: &DietError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(exit_code(err));
}
