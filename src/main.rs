//! Replay a JSON action list against an empty explorer and print the result.
//!
//! usage: vexplorer [--lenient] [--verbose] [--json] [--ls <dir>] [<actions.json> | -]

use std::io;
use std::path::{Path, PathBuf};

use vexplorer::replay;
use vexplorer::{ExplorerConfig, Store};

mod logging;

const CONFIG_ENV: &str = "VEXPLORER_CONFIG";

#[derive(Default)]
struct Args {
    input: Option<PathBuf>,
    lenient: bool,
    verbose: bool,
    json: bool,
    ls: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> io::Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lenient" => parsed.lenient = true,
            "--verbose" | "-v" => parsed.verbose = true,
            "--json" => parsed.json = true,
            "--ls" => {
                let dir = args.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "--ls requires a directory")
                })?;
                parsed.ls = Some(dir);
            }
            "-" => parsed.input = None,
            _ => parsed.input = Some(PathBuf::from(arg)),
        }
    }
    Ok(parsed)
}

fn load_config(args: &Args) -> io::Result<ExplorerConfig> {
    let mut config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => replay::load_config(Path::new(&path))?,
        None => ExplorerConfig::default(),
    };
    if args.lenient {
        config.strict = false;
    }
    if args.verbose {
        config.verbose = true;
    }
    Ok(config)
}

fn main() -> io::Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let _logging = logging::init(args.verbose);

    let config = load_config(&args)?;
    let actions = match &args.input {
        Some(path) => replay::load_actions(path)?,
        None => replay::read_actions(io::stdin().lock())?,
    };

    let store = Store::with_actions(actions, config);
    tracing::info!(
        actions = store.actions_applied().len(),
        files = store.file_paths().len(),
        "replay finished"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&store.snapshot())
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        println!("{json}");
        return Ok(());
    }

    if let Some(dir) = &args.ls {
        println!("{}", store.ls(dir));
        return Ok(());
    }

    print!("{}", store.file_tree());
    let open = store.open_files();
    if !open.is_empty() {
        println!();
        println!("open: {}", open.join(", "));
    }
    Ok(())
}
