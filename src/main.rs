use clap::Parser;

use commitwatch::backends::AccessToken;
use commitwatch::cmdargs::{Args, BatchCommand, CheckCommand, SubCommand};
use commitwatch::config::{Config, ConfigError};
use commitwatch::git::Platform;
use commitwatch::logging::TracingSetup;
use commitwatch::monitor::{parse_deadline, Analyzer, MonitorRequest};
use commitwatch::output::render;
use commitwatch::roster::{RosterChecker, RosterOptions, RowRange};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install().ok();

    let args = Args::parse();
    let config = build_configuration(&args)?;

    TracingSetup::with_setup(config, move |config| async move {
        match args.command {
            SubCommand::Check(check_args) => run_check(&config, check_args).await?,
            SubCommand::Batch(batch_args) => run_batch(config, batch_args).await?,
        }

        Ok(())
    })
    .await
}

fn build_configuration(args: &Args) -> Result<Config, ConfigError> {
    let mut config = Config::from_env();

    if let Some(u) = &args.github_api_url {
        config.set_github_api_url(u.clone());
    }

    if let Some(u) = &args.gitee_api_url {
        config.set_gitee_api_url(u.clone());
    }

    if let Some(t) = &args.telemetry_url {
        config.set_telemetry_url(t.clone());
    }

    if let Some(t) = &args.timeout {
        config.set_request_timeout(t.clone());
    }

    config.validate_configuration().map(|_| config)
}

async fn run_check(config: &Config, args: CheckCommand) -> color_eyre::Result<()> {
    let mut request = MonitorRequest::parse(
        &args.repository,
        args.platform,
        args.token.as_deref(),
        args.deadline.as_deref(),
    )?;
    if request.token().is_none() {
        let token = config.token_for(args.platform).cloned();
        request = request.with_token(token);
    }

    let analyzer = Analyzer::from_config(args.platform, config)?;
    let result = analyzer.analyze(&request).await;

    print!("{}", render(&result, args.output)?);

    Ok(())
}

async fn run_batch(mut config: Config, args: BatchCommand) -> color_eyre::Result<()> {
    let tokens = [
        (Platform::GitHub, &args.github_token),
        (Platform::Gitee, &args.gitee_token),
    ];
    for (platform, token) in tokens {
        if let Some(t) = AccessToken::from_input(token.as_deref()) {
            config.set_token(platform, t);
        }
    }

    let options = RosterOptions {
        deadline: args.deadline.as_deref().map(parse_deadline).transpose()?,
        output: args.output_file,
        repository_column: args.repository_column,
        concurrency: args.concurrency,
        rows: match args.start_row {
            Some(start) => RowRange::new(start, args.end_row)?,
            None => RowRange::default(),
        },
        ..RosterOptions::new(args.file)
    };

    let checker = RosterChecker::from_config(&config)?;
    let summary = checker.run(&options).await?;
    let output = options.output_path()?;

    println!(
        "Processed {} rows: {} on time, {} late, {} undetermined, {} inaccessible, {} skipped",
        summary.rows,
        summary.on_time,
        summary.late,
        summary.undetermined,
        summary.inaccessible,
        summary.skipped
    );
    println!("Results written to {}", output.display());

    Ok(())
}
