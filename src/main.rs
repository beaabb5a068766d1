use castkit::commands::default_registry;
use clap::Parser;

#[derive(Parser)]
#[command(name = "castkit")]
#[command(about = "Console command runner with typed value marshalling")]
#[command(version)]
struct Cli {
    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Command to run; defaults to `help`
    #[arg()]
    command: Option<String>,

    /// Arguments passed through to the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let registry = default_registry();
    let command = cli.command.unwrap_or_else(|| "help".to_string());
    let result = registry.run(&command, cli.args).await;

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "stdout": result.stdout,
                "stderr": result.stderr,
                "exitCode": result.exit_code,
            })
        );
    } else {
        if !result.stdout.is_empty() {
            print!("{}", result.stdout);
        }
        if !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
    }

    std::process::exit(result.exit_code);
}
