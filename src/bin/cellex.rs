//! Command-line interface for cellex
//! This binary tokenizes formula strings and prints the token tree in different formats.
//!
//! Usage:
//!   cellex lex `<formula>` [--format `<format>`]    - Tokenize a formula string
//!   cellex lex --file `<path>` [--format `<format>`] - Tokenize the contents of a file
//!   cellex list-formats                          - List all available output formats

use clap::{Arg, ArgMatches, Command};

use cellex::formula::processor::{available_formats, process_file, process_formula, OutputFormat};

fn main() {
    let matches = Command::new("cellex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing spreadsheet formula expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("lex")
                .about("Tokenize a formula and print its token tree")
                .arg(
                    Arg::new("formula")
                        .help("The formula string to tokenize")
                        .required_unless_present("file")
                        .conflicts_with("file")
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_name("PATH")
                        .help("Read the formula from a file instead"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g. 'json', 'tree')")
                        .default_value("tree"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("lex", lex_matches)) => {
            handle_lex_command(lex_matches);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the lex command
fn handle_lex_command(matches: &ArgMatches) {
    let format_str = matches.get_one::<String>("format").unwrap();
    let format = OutputFormat::from_string(format_str).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = match matches.get_one::<String>("file") {
        Some(path) => process_file(path, format),
        None => {
            let formula = matches.get_one::<String>("formula").unwrap();
            process_formula(formula, format)
        }
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
