//! Miniature build tool demonstrating the option engine end to end.
//!
//! The demo dogfoods the engine: its own command line is described with
//! option descriptors, shared options, and a command selector, then parsed
//! with the same single-pass semantics library users get. Run with
//! `RUST_LOG=trace` to watch the engine's match and dispatch events.

use optstack_core::{
    Choice3, Command, Compound, HelpCommand, Opt, OptionSet, Parse, SharedOptions, ShowHelp,
};
use tracing::debug;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tokens: Vec<&str> = args.iter().map(String::as_str).collect();

    let shared = Opt::flag("--verbose").describe("Enable verbose output")
        | Opt::flag("--json").describe("Emit help as JSON instead of text")
        | Opt::<u32>::named("--jobs")
            .alias("-j")
            .default_to(1u32)
            .check(|jobs| *jobs > 0, "--jobs must be positive")
            .hint("N")
            .describe("Number of parallel jobs");

    let build_options = Opt::flag("--release").describe("Build with optimizations")
        | Opt::<String>::named("--target")
            .default_to("native")
            .describe("Target platform");

    let run_options = Opt::<String>::named("--bin").describe("Binary to run")
        | Opt::<u64>::named("--timeout")
            .default_to(30u64)
            .hint("SECONDS")
            .describe("Abort the run after this many seconds");

    let cli = SharedOptions::new(shared.clone())
        | Command::new("build", build_options.clone())
        | Command::new("run", run_options.clone())
        | HelpCommand;

    let ((verbose, json_help, jobs), command) = match cli.parse(&tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("run 'optstack-demo --help' for usage");
            std::process::exit(1);
        }
    };

    debug!(verbose, jobs, "parsed shared options");

    let result = match command {
        Choice3::First((release, target)) => run_build(release, &target, jobs, verbose),
        Choice3::Second((bin, timeout)) => run_binary(&bin, timeout, verbose),
        Choice3::Third(ShowHelp) => {
            print_help(&shared, &build_options, &run_options, json_help)
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_build(release: bool, target: &str, jobs: u32, verbose: bool) -> Result<(), String> {
    let profile = if release { "release" } else { "debug" };
    if verbose {
        println!("compiling for {target} with {jobs} job(s)");
    }
    println!("build finished ({profile}, target {target})");
    Ok(())
}

fn run_binary(bin: &str, timeout: u64, verbose: bool) -> Result<(), String> {
    if verbose {
        println!("spawning {bin} with a {timeout}s deadline");
    }
    println!("{bin} exited normally");
    Ok(())
}

fn print_help<A: OptionSet, B: OptionSet, C: OptionSet>(
    shared: &Compound<A>,
    build: &Compound<B>,
    run: &Compound<C>,
    as_json: bool,
) -> Result<(), String> {
    if as_json {
        let model = serde_json::json!({
            "shared": shared.help_entries(),
            "build": build.help_entries(),
            "run": run.help_entries(),
        });
        let rendered =
            serde_json::to_string_pretty(&model).map_err(|err| err.to_string())?;
        println!("{rendered}");
    } else {
        print!(
            "usage: optstack-demo [shared options] <build|run> [command options]\n\n\
             Shared options:\n{}\nbuild:\n{}\nrun:\n{}",
            shared.help_text(),
            build.help_text(),
            run.help_text()
        );
    }
    Ok(())
}
