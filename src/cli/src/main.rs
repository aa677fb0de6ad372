use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;

use libiddiff::constants::{DEFAULT_CONTEXT_LINES, IDDIFF_VERSION};
use libiddiff::diffs;
use libiddiff::error::IddiffError;
use libiddiff::opts::{DiffMode, DiffOpts};

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default());

    let command = Command::new("iddiff")
        .version(IDDIFF_VERSION)
        .about("Internet-Draft diff tool")
        .arg(
            Arg::new("side-by-side")
                .long("side-by-side")
                .action(ArgAction::SetTrue)
                .help("side by side difference (default)"),
        )
        .arg(
            Arg::new("wdiff")
                .short('w')
                .long("wdiff")
                .action(ArgAction::SetTrue)
                .help("produce word difference"),
        )
        .arg(
            Arg::new("hwdiff")
                .long("hwdiff")
                .action(ArgAction::SetTrue)
                .help("produce word difference as HTML"),
        )
        .arg(
            Arg::new("chbars")
                .long("chbars")
                .action(ArgAction::SetTrue)
                .help("produce changebar marked output"),
        )
        .arg(
            Arg::new("abdiff")
                .long("abdiff")
                .action(ArgAction::SetTrue)
                .help("produce before/after output"),
        )
        .arg(
            Arg::new("table-only")
                .short('t')
                .long("table-only")
                .action(ArgAction::SetTrue)
                .help("produce only a HTML table"),
        )
        .arg(
            Arg::new("context-lines")
                .short('c')
                .long("context-lines")
                .value_parser(clap::value_parser!(usize))
                .help("set number of context lines (set to 0 for no context) (default 8)"),
        )
        .arg(
            Arg::new("skip-whitespace")
                .short('s')
                .long("skip-whitespace")
                .action(ArgAction::SetTrue)
                .help("skip multiple lines with only whitespace"),
        )
        .arg(
            Arg::new("FILE1")
                .required(true)
                .index(1)
                .help("first file to compare"),
        )
        .arg(
            Arg::new("FILE2")
                .required(true)
                .index(2)
                .help("second file to compare"),
        );

    let matches = command.get_matches();
    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("iddiff: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &ArgMatches) -> Result<String, IddiffError> {
    let opts = parse_opts(args)?;

    let file_1 = args.get_one::<String>("FILE1").expect("required");
    let file_2 = args.get_one::<String>("FILE2").expect("required");

    diffs::diff_files(file_1, file_2, &opts)
}

fn parse_opts(args: &ArgMatches) -> Result<DiffOpts, IddiffError> {
    Ok(DiffOpts {
        mode: parse_mode(args)?,
        context_lines: args
            .get_one::<usize>("context-lines")
            .copied()
            .unwrap_or(DEFAULT_CONTEXT_LINES),
        skip_whitespace: args.get_flag("skip-whitespace"),
        table_only: args.get_flag("table-only"),
    })
}

/// Exactly one mode may be selected; conflicts are reported before any file
/// is read.
fn parse_mode(args: &ArgMatches) -> Result<DiffMode, IddiffError> {
    let flags = [
        ("side-by-side", DiffMode::SideBySide),
        ("wdiff", DiffMode::Wdiff),
        ("hwdiff", DiffMode::Hwdiff),
        ("chbars", DiffMode::Chbars),
        ("abdiff", DiffMode::Abdiff),
    ];

    let mut selected: Vec<DiffMode> = Vec::new();
    for (name, mode) in flags {
        if args.get_flag(name) {
            selected.push(mode);
        }
    }

    match selected.as_slice() {
        [] => Ok(DiffMode::SideBySide),
        [mode] => Ok(*mode),
        _ => Err(IddiffError::invalid_arguments(
            "only one of --side-by-side, --wdiff, --hwdiff, --chbars and --abdiff may be given",
        )),
    }
}
