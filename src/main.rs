use std::{env, fs::read_to_string, process};

use letlang::{display_error, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: letlang <file>");
        process::exit(64);
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            process::exit(66);
        }
    };

    match parse(&source) {
        Ok(ast) => println!("{:#?}", ast),
        Err(error) => {
            display_error(&error, &source, file_path);
            process::exit(65);
        }
    }
}
