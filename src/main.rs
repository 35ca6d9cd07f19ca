//! tagtree - render JSON tree descriptions as HTML

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;

use tagtree::HtmlSerializer;
use tagtree::describe;
use tagtree::export::{RenderConfig, VoidStyle};

#[derive(Parser)]
#[command(name = "tagtree")]
#[command(version, about = "Render a JSON tree description as HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    tagtree page.json                   Render compactly
    tagtree page.json --pretty          Render with indentation
    cat page.json | tagtree - --document --html-void")]
struct Cli {
    /// Tree description (JSON); `-` reads stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    input: String,

    /// Put nested elements on their own lines
    #[arg(short, long)]
    pretty: bool,

    /// Prefix a doctype when the root is <html>
    #[arg(short, long)]
    document: bool,

    /// Close void elements as `<br>` instead of `<br/>`
    #[arg(long)]
    html_void: bool,

    /// Spaces per nesting level with --pretty
    #[arg(long, value_name = "N", default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(0..=16))]
    indent: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let json = read_input(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;
    let tree = describe::from_json_str(&json).map_err(|e| e.to_string())?;

    let serializer = HtmlSerializer::new().with_config(RenderConfig {
        indent_width: usize::from(cli.indent),
        void_style: if cli.html_void {
            VoidStyle::Html
        } else {
            VoidStyle::SelfClosing
        },
    });

    let rendered = if cli.document {
        serializer.render_document(&tree, cli.pretty)
    } else if cli.pretty {
        serializer.render_pretty(&tree)
    } else {
        serializer.render(&tree)
    };
    rendered.map_err(|e| e.to_string())
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}
