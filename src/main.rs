use anyhow::Result;
use clap::Parser;
use log::debug;

mod document;
use document::*;

mod options;
use options::*;

mod table_to_string;
use table_to_string::table_to_string;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let inputs = read_inputs(&args.files)?;

    for input in inputs {
        debug!(
            "Highlighting {} table(s) from {}",
            input.document.tables().len(),
            input.source
        );
        let document = input.document.with_highlights();

        match args.format {
            OutputFormat::Json => println!("{}", document.to_json(args.compact)?),
            OutputFormat::Table => {
                let options = DisplayOptions::from(&args);
                for table in document.tables() {
                    println!("{}\n", table_to_string(table, &options));
                }
            }
        }
    }

    Ok(())
}
