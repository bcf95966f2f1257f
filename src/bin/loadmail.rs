use clap::{CommandFactory, Parser};
use std::io::IsTerminal;

use loadmail::config::{ConfigLoader, RecipientConfig};
use loadmail::core::constants::exit_codes;
use loadmail::core::error::{LoadMailError, Result};
use loadmail::notify::{Notifier, SendReport, StubMailTransport};
use loadmail::reporting::logging;
use loadmail::reporting::{ReportGenerator, read_report};
use loadmail::ui::output;
use loadmail::ui::{
    Cli, Commands, GenerateArgs, SendArgs, SendSpinner, install_completion, print_completions,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    let exit_code = match cli.command {
        Commands::Generate(ref args) => run_generate(args, cli.quiet),
        Commands::Send(ref args) => run_send(args, cli.quiet).await,
        Commands::CompletionGenerate { shell } => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            exit_codes::SUCCESS
        }
        Commands::CompletionInstall { shell } => match install_completion(shell) {
            Ok(message) => {
                println!("{message}");
                exit_codes::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                exit_codes::FAILURE
            }
        },
    };

    std::process::exit(exit_code);
}

/// Report Generator entry point
pub fn run_generate(args: &GenerateArgs, quiet: bool) -> i32 {
    let generator = ReportGenerator::new(args.options());
    match generator.run(&args.csv, &args.output) {
        Ok(summary) => {
            logging::log_report_written(
                summary.report.path(),
                summary.total_requests,
                summary.rows_shown,
            );
            if !quiet {
                output::display_generation(&summary);
                preview_recipients();
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            logging::log_error("Report generation failed", Some(&e));
            output::display_error(&e);
            exit_codes::FAILURE
        }
    }
}

/// Show who `send` would deliver to. Config problems never fail generation.
fn preview_recipients() {
    match ConfigLoader::new().load() {
        Ok(config) => output::display_ready_to_send(&config),
        Err(e) => logging::log_error("Skipping recipient preview", Some(&e)),
    }
}

/// Notifier entry point
pub async fn run_send(args: &SendArgs, quiet: bool) -> i32 {
    let config = match args.config_loader().load() {
        Ok(config) => config,
        Err(e) => {
            output::display_error(&e);
            return exit_codes::FAILURE;
        }
    };
    logging::log_config_info(&config);

    match send_report(args, &config, quiet).await {
        Ok(report) => {
            if !quiet {
                output::display_send_success(&report, args.dry_run);
            }
            exit_codes::SUCCESS
        }
        Err(LoadMailError::Send(e)) => {
            output::display_send_error(&e, &config);
            if e.is_precondition() {
                exit_codes::PRECONDITION
            } else {
                exit_codes::FAILURE
            }
        }
        Err(e) => {
            output::display_error(&e);
            exit_codes::FAILURE
        }
    }
}

async fn send_report(
    args: &SendArgs,
    config: &RecipientConfig,
    quiet: bool,
) -> Result<SendReport> {
    let notifier = Notifier::new(config.clone());
    // Refuse early, before touching the report file
    notifier.check_preconditions()?;

    let report = read_report(&args.report)?;
    let subject = config.subject_or_default(args.subject.as_deref());

    if !quiet {
        output::display_recipients(config);
    }

    let result = if args.dry_run {
        notifier
            .send_via(&StubMailTransport::new(), subject, report.as_bytes())
            .await
    } else {
        let interactive = !quiet && std::io::stdout().is_terminal();
        let spinner = SendSpinner::start(interactive, "Sending email");
        let result = notifier.send(subject, report.as_bytes()).await;
        spinner.finish();
        result
    };

    result.map_err(LoadMailError::from)
}
