use clap::{Parser, ValueEnum};
use edgemap::{bmp, gridio, Filter, HoughFilter, Image, SobelFilter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Grayscale BMP to Sobel edge-magnitude text grid")]
struct Cli {
    /// Input image path.
    input: PathBuf,
    /// Output text grid path.
    output: PathBuf,
    /// Input file format.
    #[arg(long, value_enum, default_value = "bmp")]
    input_format: InputFormat,
    /// Filter to apply before writing.
    #[arg(long, value_enum, default_value = "sobel")]
    filter: FilterKind,
    /// Use row-parallel convolution (requires the library's rayon feature).
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for pipeline profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputFormat {
    /// Minimal uncompressed 8-bit grayscale BMP.
    Bmp,
    /// "rows cols" text grid.
    Grid,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterKind {
    /// Sobel gradient magnitude.
    Sobel,
    /// Hough line detection (unimplemented, fails).
    Hough,
    /// Pass the decoded matrix through unchanged.
    None,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("edgemap=info".parse()?))
            .with_target(false)
            .init();
    }

    let image = match cli.input_format {
        InputFormat::Bmp => bmp::load(&cli.input)?,
        InputFormat::Grid => gridio::read_grid(&cli.input)?,
    };

    let filtered = match cli.filter {
        FilterKind::Sobel => {
            let filter = SobelFilter::new().with_parallel(cli.parallel);
            Image::new(filter.apply(image.matrix())?)
        }
        FilterKind::Hough => Image::new(HoughFilter::new().apply(image.matrix())?),
        FilterKind::None => image,
    };

    gridio::write_grid(&cli.output, &filtered)?;
    Ok(())
}
