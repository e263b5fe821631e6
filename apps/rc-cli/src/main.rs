use clap::{Parser, Subcommand};
use rc_app::{
    AppError, AppResult, Calculator, FormRequest, UnitField, load_request, render_json,
    render_text, solve_request,
};
use rc_solver::Solution;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "RateCalc CLI - exponential growth/decay and Newton's-law cooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available forms and the fields each one asks for
    Forms,
    /// Solve one form from command-line fields
    Solve {
        /// Form id (e.g. find-amount, find-time-to-temp)
        form: String,
        /// Field value as KEY=VALUE; repeat for each field
        #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Amount unit label (growth/decay forms)
        #[arg(long = "unit-x")]
        unit_x: Option<String>,
        /// Temperature unit (heat/cool forms)
        #[arg(long = "unit-temp")]
        unit_temp: Option<String>,
        /// Time unit
        #[arg(long = "unit-time")]
        unit_time: Option<String>,
        /// Print the full solution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solve a YAML or JSON request file
    Run {
        /// Path to the request file
        request_path: PathBuf,
        /// Print the full solution as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Forms => {
            cmd_forms();
            Ok(())
        }
        Commands::Solve {
            form,
            fields,
            unit_x,
            unit_temp,
            unit_time,
            json,
        } => {
            let request = build_request(&form, fields, unit_x, unit_temp, unit_time);
            cmd_solve(&request, json)
        }
        Commands::Run { request_path, json } => cmd_run(&request_path, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

fn build_request(
    form: &str,
    fields: Vec<(String, String)>,
    unit_x: Option<String>,
    unit_temp: Option<String>,
    unit_time: Option<String>,
) -> FormRequest {
    let mut request = FormRequest::new(form);
    for (key, value) in fields {
        request = request.field(key, value.as_str());
    }
    for (selector, value) in [
        (UnitField::Amount, unit_x),
        (UnitField::Temperature, unit_temp),
        (UnitField::Time, unit_time),
    ] {
        if let Some(value) = value {
            request = request.unit(selector, value);
        }
    }
    request
}

fn cmd_forms() {
    print!("{}", forms_listing());
}

fn forms_listing() -> String {
    let mut out = String::new();
    for calculator in [Calculator::GrowthDecay, Calculator::HeatCool] {
        out.push_str(&format!("{}:\n", calculator.id()));
        for form in calculator.forms() {
            let template = form.template();
            out.push_str(&format!("  {} - {}\n", template.id, template.title));
            out.push_str(&format!("      {}\n", template.description));
            for field in template.fields {
                out.push_str(&format!(
                    "      {:<14} ({}) {}\n",
                    field.id, field.key, field.label
                ));
            }
            for unit in template.units {
                out.push_str(&format!(
                    "      --{:<12} {} [{}]\n",
                    unit.id(),
                    unit.label(),
                    unit.options().join(", ")
                ));
            }
        }
    }
    out
}

fn cmd_solve(request: &FormRequest, json: bool) -> AppResult<()> {
    info!(form = %request.form, "solving form");
    let solution = solve_request(request)?;
    print_solution(&solution, json)
}

fn cmd_run(request_path: &Path, json: bool) -> AppResult<()> {
    info!(path = %request_path.display(), "solving request file");
    let request = load_request(request_path)?;
    let solution = solve_request(&request)?;
    print_solution(&solution, json)
}

fn print_solution(solution: &Solution, json: bool) -> AppResult<()> {
    if json {
        println!("{}", render_json(solution)?);
    } else {
        print!("{}", render_text(solution));
    }
    Ok(())
}

fn report_error(err: &AppError) {
    eprintln!("Error: {}", err);
    if let Some(kind) = err.kind() {
        eprintln!("  kind:  {:?}", kind);
        if let Some(field) = err.field() {
            eprintln!("  field: {}", field);
        }
        eprintln!("  {}", err.user_message());
    }
}
