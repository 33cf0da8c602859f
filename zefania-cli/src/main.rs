// Command-line interface for zefania
//
// This binary converts Bible XML files (Zefania, OSIS or a simple bible/book/chapter/verse
// layout) into Zefania XML, using the zefania-babel library for everything but file IO.
//
// The input dialect is never given on the command line: it is detected from the root element.
// The inspect command shows what the pipeline sees at each stage and is mostly a debugging aid.
//
// Usage:
//  zefania <input> [-o <output>]             - Convert to Zefania XML (default)
//  zefania convert <input> [-o <output>]     - Same as above (explicit)
//  zefania inspect <input> [<transform>]     - Run a transform (defaults to "stats-json")
//  zefania lookup <name>...                  - Resolve book names against the canon
//  zefania books                             - List the canon
//  zefania --list-formats                    - List registered formats and transforms
//
// Extra Parameters:
//
// Zefania metadata can be overridden using --extra-<key> <value>, e.g. --extra-title "Almeida".
// The CLI layer strips the "extra-" prefix and merges the parameters over the configured
// [output] section. --extra-fuzzy-book-names <bool> overrides [parse] instead.

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::debug;
use std::collections::HashMap;
use std::fs;
use zefania_babel::{get_all_books, lookup, FormatRegistry, MatchMode, ParseOptions};
use zefania_config::{Loader, ZefaniaConfig, LOCAL_CONFIG_FILE};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "lookup", "books", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));
            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("zefania")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Bible XML files to Zefania XML")
        .long_about(
            "zefania reads Bible XML in the Zefania, OSIS or simple bible/book/chapter/verse\n\
            layout and writes Zefania XML with canonical book names and numbers.\n\n\
            Commands:\n  \
            - convert: Convert a file to Zefania XML (the default command)\n  \
            - inspect: View the detected dialect, parsed document or statistics\n  \
            - lookup:  Resolve book names (any language or abbreviation)\n  \
            - books:   List the 66 canonical books\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override Zefania metadata\n  \
            (title, description, language, date, subject, format, creator, publisher,\n  \
            version, status, revision, type, header-comments).\n\n\
            Examples:\n  \
            zefania biblia.xml                          # Convert, output to stdout\n  \
            zefania biblia.xml -o biblia.zefania.xml    # Convert to a file\n  \
            zefania biblia.xml --extra-title Almeida    # Override the title\n  \
            zefania inspect biblia.xml detect           # Show the detected dialect\n  \
            zefania lookup Salmos 1Cor Apocalipsis      # Resolve book names",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List registered formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a zefania.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a Bible XML file to Zefania XML")
                .long_about(
                    "Convert a Bible XML file to Zefania XML.\n\n\
                    The input dialect is detected from the root element. Book names are\n\
                    normalized against the canon and verse text is cleaned.\n\n\
                    On any error nothing is written and the exit code is 1.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect what the pipeline produces at each stage")
                .long_about(
                    "Run a transform on a Bible XML file.\n\n\
                    Transforms:\n  \
                    - detect:     Detected dialect\n  \
                    - ir-json:    Parsed document as JSON\n  \
                    - stats-json: Book, chapter, verse and word counts (default)\n  \
                    - zefania:    Zefania XML, as produced by convert",
                )
                .arg(
                    Arg::new("path")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("lookup")
                .about("Resolve book names against the canon")
                .arg(
                    Arg::new("names")
                        .help("Book names, in any supported language or abbreviation")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                )
                .arg(
                    Arg::new("exact")
                        .long("exact")
                        .help("Disable the fuzzy substring fallback")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("books").about("List the canonical books"))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare path as first argument means "convert"
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(&matches);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    let options = ParseOptions::from(&config.parse);
    let output_options = build_output_options(&config, &extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &options, &output_options);
        }
        Some(("inspect", sub_matches)) => {
            let path = required(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("stats-json");
            handle_inspect_command(path, transform, &options, &output_options);
        }
        Some(("lookup", sub_matches)) => {
            let names: Vec<&str> = sub_matches
                .get_many::<String>("names")
                .map(|values| values.map(|s| s.as_str()).collect())
                .unwrap_or_default();
            let mode = if sub_matches.get_flag("exact") {
                MatchMode::Exact
            } else {
                options.match_mode()
            };
            handle_lookup_command(&names, mode);
        }
        Some(("books", _)) => handle_books_command(),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument <{name}>");
            std::process::exit(1);
        }
    }
}

fn init_logging(matches: &ArgMatches) {
    let level = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Handle the convert command
///
/// The whole conversion runs before the output file is touched, so a failed conversion
/// never leaves a partial or empty file behind.
fn handle_convert_command(
    input: &str,
    output: Option<&str>,
    options: &ParseOptions,
    output_options: &HashMap<String, String>,
) {
    let source = read_input(input);

    let conversion =
        zefania_babel::convert(&source, options, output_options).unwrap_or_else(|e| {
            eprintln!("Conversion error: {e}");
            std::process::exit(1);
        });
    debug!(
        "Converted {} dialect: {} books, {} verses",
        conversion.dialect, conversion.stats.books, conversion.stats.verses
    );

    match output {
        Some(path) => {
            fs::write(path, conversion.xml).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{}", conversion.xml),
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    options: &ParseOptions,
    output_options: &HashMap<String, String>,
) {
    let source = read_input(path);

    let output = transforms::execute_transform(&source, transform, options, output_options)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the lookup command. Exits with 1 if any name is unknown.
fn handle_lookup_command(names: &[&str], mode: MatchMode) {
    let mut missing = false;
    for name in names {
        match lookup(name, mode) {
            Some(book) => println!(
                "{name}\t{}\t{}\t{}\t{}",
                book.number, book.standard_name, book.short_name, book.osis_id
            ),
            None => {
                eprintln!("{name}: unknown book");
                missing = true;
            }
        }
    }
    if missing {
        std::process::exit(1);
    }
}

fn handle_books_command() {
    for book in get_all_books() {
        println!(
            "{:>2}  {:<4} {:<7} {}",
            book.number, book.short_name, book.osis_id, book.standard_name
        );
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Formats:");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "read/write",
                (true, false) => "read",
                (false, true) => "write",
                (false, false) => "-",
            };
            println!("  {name:<8} {direction:<10} {}", format.description());
        }
    }
    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> ZefaniaConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Move parse-level overrides out of the extras; what remains is converter metadata.
fn apply_config_overrides(config: &mut ZefaniaConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["fuzzy-book-names", "fuzzy"]) {
        config.parse.fuzzy_book_names = parse_bool_arg("fuzzy-book-names", &raw);
    }
}

fn build_output_options(
    config: &ZefaniaConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = config.output.to_options();
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
