//! Demo binary for the command-grammar workspace.
//!
//! Parses its own argv against a built-in sample grammar (a small
//! vector-data tool) and prints the resulting command list as JSON, so the
//! token-classification rules can be inspected interactively:
//!
//! ```text
//! grammar-demo -convert precision=3 in.shp
//! grammar-demo in.shp -simplify interval=100 -o out.shp
//! grammar-demo -h convert
//! ```
//!
//! Parse failures are printed to stderr and terminate with a non-zero
//! exit code; that policy lives here, not in the library crates.

use std::io;
use std::process;

use command_grammar_argv::{parse_argv, write_help};
use command_grammar_core::{CommandDef, Grammar, OptionDef};

/// Grammar for a fictional vector-data tool, exercising every option
/// kind: flags, numbers, integers, comma-separated lists, strings, and an
/// enumerated output-format group.
fn sample_grammar() -> Grammar {
    Grammar::builder()
        .usage("Usage: grammar-demo -command [options] ...")
        .default_command("files")
        .example("grammar-demo in.shp -simplify pct=10 -convert -geojson")
        .note("This tool only parses; it prints the parsed commands as JSON.")
        .command(
            CommandDef::build("files")
                .describe("Register input files (applied to leading bare arguments)")
                .option(OptionDef::flag("quiet").with_describe("Suppress progress output"))
                .done()
                .expect("sample grammar is well formed"),
        )
        .command(
            CommandDef::build("convert")
                .alias("c")
                .title("Conversion")
                .describe("Convert a dataset to another format")
                .option(OptionDef::flag("verbose").with_alias("v").with_describe("Print progress"))
                .option(OptionDef::number("precision").with_describe("Coordinate precision"))
                .option(OptionDef::comma_sep("fields").with_describe("Attribute fields to keep"))
                .option(OptionDef::new("encoding").with_describe("Text encoding of the output"))
                .option(OptionDef::new("shp").assign_to("format").with_describe("Write Shapefile output"))
                .option(OptionDef::new("geojson").assign_to("format").with_describe("Write GeoJSON output"))
                .option(OptionDef::new("topojson").assign_to("format").with_describe("Write TopoJSON output"))
                .done()
                .expect("sample grammar is well formed"),
        )
        .command(
            CommandDef::build("simplify")
                .title("Editing")
                .describe("Reduce the vertex count of polyline and polygon layers")
                .option(
                    OptionDef::number("interval")
                        .with_label("interval=<units>")
                        .with_describe("Sampling interval in projected units"),
                )
                .option(OptionDef::number("pct").with_alias("p").with_describe("Percentage of removable points to retain"))
                .option(OptionDef::flag("keep-shapes").with_describe("Prevent small shapes from disappearing"))
                .option(OptionDef::integer("repair-limit").with_describe("Cap on intersection repair passes"))
                .done()
                .expect("sample grammar is well formed"),
        )
        .command(
            CommandDef::build("filter")
                .describe("Keep features matching a boolean expression")
                .option(
                    OptionDef::new("expression")
                        .with_alias("e")
                        .with_describe("JavaScript-style boolean expression"),
                )
                .validate(|cmd| {
                    if cmd.option("expression").is_none() && cmd.positionals.is_empty() {
                        Err("missing expression".into())
                    } else {
                        Ok(())
                    }
                })
                .done()
                .expect("sample grammar is well formed"),
        )
        .command(
            CommandDef::build("help")
                .alias("h")
                .describe("Print this message; name commands for option details")
                .done()
                .expect("sample grammar is well formed"),
        )
        .build()
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if let Err(message) = run(&argv) {
        eprintln!("Error: {message}");
        process::exit(1);
    }
}

fn run(argv: &[String]) -> Result<(), String> {
    let grammar = sample_grammar();
    if argv.is_empty() {
        return print_help(&grammar, &[]);
    }

    let parsed = parse_argv(&grammar, argv).map_err(|e| e.to_string())?;

    // Dispatcher: the help command renders and exits; everything else is
    // reported back as JSON.
    for cmd in &parsed {
        if cmd.name == "help" {
            let names: Vec<&str> = cmd.positionals.iter().map(String::as_str).collect();
            return print_help(&grammar, &names);
        }
    }

    let json = serde_json::to_string_pretty(&parsed).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_help(grammar: &Grammar, names: &[&str]) -> Result<(), String> {
    let mut stdout = io::stdout();
    write_help(grammar, names, &mut stdout).map_err(|e| e.to_string())
}
