use std::{env, fs::read_to_string, path::Path, process, rc::Rc, time::Instant};

use anehta::{
    display_error, lexer::lexer::tokenize, parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: anehta <file>");
        process::exit(2);
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(file_path));

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(errors) => {
            for error in &errors {
                display_error(error, &source);
            }
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (parser, parsed_ast) = parse(tokens, Rc::new(file_name));

    println!("Parsed in {:?}", parse_start.elapsed());

    let ast = match parsed_ast {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    let type_check_start = Instant::now();
    let checked = type_check(&ast);

    println!("Type checked in {:?}", type_check_start.elapsed());

    if let Err(error) = checked {
        display_error(&error, &source);
        process::exit(1);
    }

    let constants = parser.into_constants();
    println!(
        "{} statements, {} numeric constants, {} string constants",
        ast.body.len(),
        constants.numbers().len(),
        constants.strings().len()
    );
    println!("Total time: {:?}", start.elapsed());
}
