use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, Store, StoreTrue};
use log::LevelFilter;
use unicode_segmentation::UnicodeSegmentation;

use quotient::config::{DEFAULT_GROUPING, DEFAULT_POINT};
use quotient::{CalcError, Calculator, NumberFormat};

struct Options {
    debug: bool,
    verbose: bool,
    point: String,
    grouping: String,
    expression: String,
}

fn main() {
    let mut options = Options {
        debug: false,
        verbose: false,
        point: DEFAULT_POINT.to_string(),
        grouping: DEFAULT_GROUPING.concat(),
        expression: "".to_string(),
    };
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Exact arithmetic calculator");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut options.debug)
            .add_option(&["-d", "--debug"], StoreTrue,
                        "Print the expression tree and every reduction step");
        ap.refer(&mut options.verbose)
            .add_option(&["-v", "--verbose"], StoreTrue,
                        "Print detailed error messages");
        ap.refer(&mut options.point)
            .add_option(&["--point"], Store, "Decimal point symbol");
        ap.refer(&mut options.grouping)
            .add_option(&["--group"], Store,
                        "Digit grouping symbols, one character each");
        ap.refer(&mut options.expression)
            .add_argument("expression", Store,
                          "Expression to evaluate.  Omit to run an interactive REPL.");
        ap.parse_args_or_exit();
    }

    let mut logger = env_logger::Builder::from_default_env();
    if options.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let grouping: Vec<&str> = options.grouping.graphemes(true).collect();
    let format = NumberFormat::new(&options.point, &grouping);

    if ! options.expression.is_empty() {
        let result = run(&options, &format, &options.expression);
        print_result(&options, &options.expression, &result);

        match result {
            Ok(_) => (),
            Err(error) if error.is_parse_error() => process::exit(65),
            Err(_) => process::exit(70),
        }
    }
    else {
        run_repl(&options, &format);
    }
}

fn run_repl(options: &Options, format: &NumberFormat) {
    let stdin = io::stdin();
    loop {
        print!("$ = ");
        if let Err(error) = io::stdout().flush() {
            println!("Error writing stdout: {:?}", error);
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let line = input.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "q" || line == "Q" {
                    break;
                }

                let result = run(options, format, line);
                print_result(options, line, &result);
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

// With --debug the tree and every reduction are logged before the result.
fn run(options: &Options, format: &NumberFormat, source: &str) -> Result<String, CalcError> {
    Calculator::with_format(source, format.clone())
        .debug(options.debug)
        .evaluate()
}

fn print_result(options: &Options, source: &str, result: &Result<String, CalcError>) {
    match result {
        Ok(text) => println!("{} = {}", source, text),
        Err(error) => {
            if options.verbose {
                eprintln!("{}", error);
            }
            else {
                eprintln!("illformed expression");
            }
        }
    }
}
