use clap::Parser;

/// Point `core.hooksPath` at `.githooks` and make `.githooks/pre-commit` executable
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Log more (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn default_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.default_filter());

    let code = match githooks_setup::install() {
        Ok(installed) => {
            log::info!(
                "{} is executable ({:o}), core.hooksPath is set",
                installed.hook_path.display(),
                installed.mode
            );
            0
        }
        Err(err @ githooks_setup::InstallError::MissingHookFile { .. }) => {
            println!("Error: {err}");
            err.exit_code()
        }
        Err(err) => {
            if err.is_external_command() {
                log::info!("Hook permissions left unchanged");
            }
            eprintln!("error: {}", render_error(&err));
            err.exit_code()
        }
    };
    std::process::exit(code);
}

fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `err` followed by its chain of causes
fn render_error(err: &githooks_setup::InstallError) -> String {
    let mut rendered = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
