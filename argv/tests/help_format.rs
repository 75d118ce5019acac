use command_grammar_argv::{help_message, write_help};
use command_grammar_core::{CommandDef, Grammar, OptionDef};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_grammar() -> Grammar {
    Grammar::builder()
        .usage("Usage: geotool -command [options] ...")
        .example("geotool -convert in.shp fields=a,b out.json")
        .note("Run geotool -h <command> for detailed help.")
        .command(CommandDef::build("io").done().unwrap())
        .command(
            CommandDef::build("convert")
                .alias("c")
                .title("Editing")
                .describe("Convert a dataset")
                .option(OptionDef::flag("verbose").with_describe("Print progress"))
                .option(OptionDef::number("precision").with_describe("Coordinate precision"))
                .option(OptionDef::comma_sep("fields"))
                .option(
                    OptionDef::number("interval")
                        .with_label("interval=<units>")
                        .with_describe("Sampling interval"),
                )
                .done()
                .unwrap(),
        )
        .command(
            CommandDef::build("filter")
                .describe("Keep features matching an expression")
                .option(
                    OptionDef::new("expression")
                        .with_alias("e")
                        .with_describe("Boolean expression"),
                )
                .done()
                .unwrap(),
        )
        .build()
}

// ---------------------------------------------------------------------------
// Summary mode
// ---------------------------------------------------------------------------

#[test]
fn test_summary_layout() {
    let expected = concat!(
        "Usage: geotool -command [options] ...\n",
        "\n",
        "Editing\n",
        " -convert, -c  Convert a dataset\n",
        " -filter       Keep features matching an expression\n",
        "\n",
        "Examples\n",
        "\n",
        "geotool -convert in.shp fields=a,b out.json\n",
        "\n",
        "Run geotool -h <command> for detailed help.",
    );
    assert_eq!(help_message(&sample_grammar(), &[]), expected);
}

#[test]
fn test_summary_starts_with_usage() {
    let help = help_message(&sample_grammar(), &[]);
    assert!(help.starts_with("Usage: geotool -command [options] ...\n"));
}

#[test]
fn test_summary_hides_describe_less_commands() {
    let help = help_message(&sample_grammar(), &[]);
    assert!(!help.contains("-io"));
}

#[test]
fn test_summary_omits_option_lines() {
    let help = help_message(&sample_grammar(), &[]);
    assert!(!help.contains("precision"));
}

#[test]
fn test_summary_without_usage_has_no_leading_blank() {
    let grammar = Grammar::builder()
        .command(
            CommandDef::build("convert")
                .describe("Convert a dataset")
                .done()
                .unwrap(),
        )
        .build();
    assert_eq!(
        help_message(&grammar, &[]),
        " -convert  Convert a dataset\n"
    );
}

// ---------------------------------------------------------------------------
// Detail mode
// ---------------------------------------------------------------------------

#[test]
fn test_detail_layout_for_one_command() {
    // Widest label is "  interval=<units>" (18 columns); every line pads
    // to it plus the two-column gutter.
    let expected = concat!(
        "\n",
        " -convert, -c       Convert a dataset\n",
        "  verbose           Print progress\n",
        "  precision=        Coordinate precision\n",
        "  interval=<units>  Sampling interval\n",
        "\n",
    );
    assert_eq!(help_message(&sample_grammar(), &["convert"]), expected);
}

#[test]
fn test_detail_marks_value_taking_options() {
    let help = help_message(&sample_grammar(), &["convert"]);
    assert!(help.contains("precision="));
    assert!(!help.contains("verbose="));
}

#[test]
fn test_detail_hides_describe_less_options() {
    let help = help_message(&sample_grammar(), &["convert"]);
    assert!(!help.contains("fields"));
}

#[test]
fn test_detail_suppresses_titles_usage_and_examples() {
    let help = help_message(&sample_grammar(), &["convert"]);
    assert!(!help.contains("Editing"));
    assert!(!help.contains("Usage:"));
    assert!(!help.contains("Examples"));
    assert!(!help.contains("detailed help"));
}

#[test]
fn test_detail_option_alias_listed_after_name() {
    let help = help_message(&sample_grammar(), &["filter"]);
    assert!(help.contains("expression, e="));
}

#[test]
fn test_detail_all_selects_every_command_with_titles() {
    let help = help_message(&sample_grammar(), &["all"]);
    assert!(help.contains("Editing"));
    assert!(help.contains("precision="));
    assert!(help.contains("expression, e="));
    assert!(!help.contains("Usage:"));
}

#[test]
fn test_detail_with_unknown_names_falls_back_to_summary() {
    let grammar = sample_grammar();
    assert_eq!(
        help_message(&grammar, &["nope"]),
        help_message(&grammar, &[])
    );
}

// ---------------------------------------------------------------------------
// Sink adapter
// ---------------------------------------------------------------------------

#[test]
fn test_write_help_appends_trailing_newline() {
    let grammar = sample_grammar();
    let mut out = Vec::new();
    write_help(&grammar, &[], &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, format!("{}\n", help_message(&grammar, &[])));
}
