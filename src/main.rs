use bintree::cli::args::Cli;
use bintree::cli::commands::execute_command;
use bintree::cli::output;
use bintree::exitcode;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let code = match execute_command(&cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output directed to stderr, stdout carries results only
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bintree::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_traverse_with_orders() {
        let cli = Cli::try_parse_from([
            "bintree", "-dd", "--tree", "1,2,3", "traverse", "-o", "inorder", "-o", "postorder",
            "-s", "iterative",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.tree.as_deref(), Some("1,2,3"));
        match cli.command {
            Some(bintree::cli::Commands::Traverse { order, strategy }) => {
                assert_eq!(
                    order,
                    vec![bintree::Order::Inorder, bintree::Order::Postorder]
                );
                assert_eq!(strategy, Some(bintree::Strategy::Iterative));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
