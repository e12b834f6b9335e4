use std::path::PathBuf;

use clap::Parser;
use qif2json::{convert_file, ConvertError, Encoding, FieldPolicy};

#[derive(Parser, Debug)]
#[command(name = "qif2json", version, about = "convert Quicken QIF exports to JSON")]
struct Cli {
    /// Full path to the .qif or .qmtf input file
    input: PathBuf,

    /// Full path the JSON output file is written to
    output: PathBuf,

    /// Encoding of the input file
    #[arg(long, value_enum, default_value = "cp1252")]
    encoding: Encoding,

    /// Emit only account fields present in the source
    #[arg(long)]
    no_account_defaults: bool,

    /// Emit only transaction fields present in the source
    #[arg(long)]
    no_transaction_defaults: bool,
}

fn main() -> Result<(), ConvertError> {
    let cli = Cli::parse();
    let policy = FieldPolicy {
        account_defaults: !cli.no_account_defaults,
        transaction_defaults: !cli.no_transaction_defaults,
    };

    println!(
        "Converting qif file: {} encoding: {}",
        cli.input.display(),
        cli.encoding.name()
    );
    convert_file(&cli.input, &cli.output, cli.encoding, policy)?;
    println!("JSON file generated: {}", cli.output.display());
    Ok(())
}
