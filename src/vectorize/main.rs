use clap::Parser;
use scene_vector_tools::vectorize::{VectorizeOptions, paths_to_json, vectorize_image_file};
use std::process;

#[derive(Parser)]
#[command(name = "image-to-paths")]
#[command(about = "Trace a raster image into vector polylines for a web scene")]
struct Cli {
    /// Input image (PNG/JPEG/GIF)
    #[arg(default_value = "marko_polo_portrait.jpg")]
    image: String,

    /// Extent of the longest dimension in output space
    #[arg(long, default_value_t = 4.0)]
    scale: f64,

    /// Gaussian blur kernel size (square)
    #[arg(long, default_value_t = 7)]
    blur: u32,

    /// Lower Canny threshold
    #[arg(long, default_value_t = 100)]
    canny_low: u32,

    /// Upper Canny threshold
    #[arg(long, default_value_t = 250)]
    canny_high: u32,

    /// Simplification tolerance as a fraction of each contour's perimeter
    #[arg(long, default_value_t = 0.005)]
    epsilon: f64,

    /// Minimum contour area in pixels
    #[arg(long, default_value_t = 50.0)]
    min_area: f64,
}

fn main() {
    let cli = Cli::parse();

    println!("Processing '{}'...", cli.image);

    let options = VectorizeOptions {
        output_scale_factor: cli.scale,
        blur_kernel: (cli.blur, cli.blur),
        canny_low: cli.canny_low as f32,
        canny_high: cli.canny_high as f32,
        epsilon_factor: cli.epsilon,
        min_contour_area: cli.min_area,
    };

    let paths = match vectorize_image_file(&cli.image, &options) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error loading image: {}", e);
            process::exit(1);
        }
    };

    if paths.is_empty() {
        eprintln!(
            "Could not generate vector paths for '{}'. Try adjusting parameters.",
            cli.image
        );
        process::exit(1);
    }

    println!("\nCOPY THE FOLLOWING JAVASCRIPT ARRAY INTO YOUR HTML FILE:\n");
    println!("const vectorizedImagePaths = {};", paths_to_json(&paths));
    println!("\nSuccessfully processed. Found {} paths.", paths.len());
}
