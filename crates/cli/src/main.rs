use anyhow::Result;
use clap::Parser as Clap;
use parser::util::ast_print::AstString;
use parser::{ParseOption, Parser};
use serde_yaml::to_writer;
use tracing::info;

use std::fs;
use std::io::{self, Read};

use cli::{absolute_path, get_delimiters, init_logging, PrettyErrorHandler};

/// A simple CLI app for inspecting the tree of a Vue template.
#[derive(Clap)]
#[command(
    version = "0.1.0",
    author = "Herrington Darkholme <2883231+HerringtonDarkholme@users.noreply.github.com>"
)]
struct Opts {
    /// The file to parse. Stdin will be parsed as input if no file is provided.
    input_file_name: Option<String>,

    /// Interpolation delimiters, split by one whitespace.
    #[arg(short, long, default_value = "{{ }}")]
    delimiters: String,

    /// Parse the input as one text node, markup is not recognized.
    #[arg(long)]
    text: bool,

    /// Dump the tree as yaml instead of an outline.
    #[arg(long)]
    yaml: bool,

    /// Skip parsing of embedded JavaScript.
    #[arg(long)]
    no_expression: bool,
}

fn main() -> Result<()> {
    init_logging();
    let opts = Opts::parse();
    let (name, file) = if let Some(file_name) = opts.input_file_name {
        let ab_path = absolute_path(&file_name)?;
        (file_name, fs::read_to_string(ab_path)?)
    } else {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        ("App.vue".to_owned(), s)
    };

    let (open, close) = get_delimiters(&opts.delimiters)?;
    let mut option = ParseOption::default().with_delimiters(&open, &close);
    if opts.no_expression {
        option = option.without_expression();
    }
    let parser = Parser::new(option);
    let eh = PrettyErrorHandler::new(&name, &file);

    let stdout = io::stdout();
    let errors = if opts.text {
        let res = parser.parse_text::<(), _>(&file, eh);
        if opts.yaml {
            to_writer(stdout.lock(), &res.node)?;
        } else {
            println!("{}", res.node.ast_string(0));
        }
        res.errors.len()
    } else {
        let res = parser.parse::<(), _>(&file, eh);
        if opts.yaml {
            to_writer(stdout.lock(), &res.node)?;
        } else {
            println!("{}", res.node.ast_string(0));
        }
        res.errors.len()
    };
    info!(file = %name, errors, "done");
    Ok(())
}
