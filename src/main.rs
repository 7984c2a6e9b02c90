use clap::Parser;
use scene_vector_tools::text::{FontFace, inline_svg, layout_phrase, write_svg_file};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "text-to-svg")]
#[command(about = "Vectorize text into SVG paths")]
struct Cli {
    /// Text to vectorize
    text: String,

    /// Path to a .ttf/.otf font file
    #[arg(long)]
    font: PathBuf,

    /// Output SVG file (omit to print an inline snippet)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let font_data = match fs::read(&cli.font) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading font file '{}': {}", cli.font.display(), e);
            process::exit(2);
        }
    };

    let face = match FontFace::parse(&font_data) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(3);
        }
    };

    let layout = match layout_phrase(&face, &cli.text) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match &cli.out {
        Some(out) => match write_svg_file(&layout, out) {
            Ok(()) => {
                println!(
                    "Successfully wrote {} paths to '{}'",
                    layout.paths.len(),
                    out.display()
                );
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(4);
            }
        },
        None => println!("{}", inline_svg(&layout)),
    }
}
