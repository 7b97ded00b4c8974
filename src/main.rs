use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use degrees::cli::{prompt, render_path, resolve_person};
use degrees::{data_loading, shortest_path, GraphIndex, PersonId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "degrees",
    version,
    about = "Degrees of separation between two actors"
)]
struct Args {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(value_name = "DIRECTORY", default_value = "large")]
    directory: PathBuf,

    /// Source name; prompted for when omitted
    #[arg(long)]
    source: Option<String>,

    /// Target name; prompted for when omitted
    #[arg(long)]
    target: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "DEGREES_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // keep stdout for the prompts
        .try_init();
}

fn run(args: &Args) -> degrees::Result<ExitCode> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    writeln!(output, "Loading data...")?;
    let index = data_loading::load_dir(&args.directory)?;
    writeln!(output, "Data loaded.")?;

    let Some(source) = ask_person(&index, args.source.as_deref(), &mut input, &mut output)? else {
        writeln!(output, "Person not found.")?;
        return Ok(ExitCode::FAILURE);
    };
    let Some(target) = ask_person(&index, args.target.as_deref(), &mut input, &mut output)? else {
        writeln!(output, "Person not found.")?;
        return Ok(ExitCode::FAILURE);
    };

    let path = shortest_path(&index, &source, &target)?;
    render_path(&index, &source, path.as_deref(), &mut output)?;
    Ok(ExitCode::SUCCESS)
}

// uses the name given on the command line, otherwise prompts for one
fn ask_person(
    index: &GraphIndex,
    given: Option<&str>,
    input: &mut impl io::BufRead,
    output: &mut impl Write,
) -> degrees::Result<Option<PersonId>> {
    let name = match given {
        Some(name) => name.to_string(),
        None => prompt(input, output, "Name: ")?,
    };
    resolve_person(index, &name, input, output)
}
