//! # dotprint CLI
//!
//! Command-line interface for dot-matrix printing.
//!
//! ## Usage
//!
//! ```bash
//! # List sample reports
//! dotprint sample
//!
//! # Show a sample report as plain text
//! dotprint sample delivery-note
//!
//! # Render a job file to ESC/P bytes and a PNG preview
//! dotprint --font wqy-microhei.ttc render job.json -o job.prn --png job.png
//!
//! # Print a sample report to a network printer, two copies
//! DOTPRINT_FONT=wqy-microhei.ttc dotprint print --sample delivery-note \
//!     --host 192.168.1.50 --copies 2
//!
//! # Use the printer's built-in Hanzi ROM instead of the outline font
//! dotprint print job.json --host 192.168.1.50 --text-mode
//!
//! # Verify a font file
//! dotprint --font wqy-microhei.ttc check-font
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use dotprint::{
    DotprintError, PrinterConfig, Rasterizer, build_from_bitmap_lines, build_from_lines,
    document::Job, glyph::FontSizeProfile, render::preview, report, transport::TcpTransport,
};

/// dotprint - Unicode printing for 24-pin dot-matrix printers
#[derive(Parser, Debug)]
#[command(name = "dotprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Outline font (TTF/OTF) used to rasterize text
    #[arg(long, global = true, env = "DOTPRINT_FONT")]
    font: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct JobArgs {
    /// Job file (JSON array of lines, or {"lines": [...], ...})
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    job: Option<PathBuf>,

    /// Use a built-in sample report instead of a job file
    #[arg(long)]
    sample: Option<String>,

    /// Use the printer's built-in character ROM (GBK) instead of bitmaps
    #[arg(long)]
    text_mode: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the ESC/P stream for a job and write it to disk
    Render {
        #[command(flatten)]
        job: JobArgs,

        /// Output file for the printer bytes
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also write a PNG preview (bitmap mode only)
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Build a job and send it to a network printer
    Print {
        #[command(flatten)]
        job: JobArgs,

        /// Printer or print server host name
        #[arg(long, env = "DOTPRINT_HOST")]
        host: String,

        /// Raw TCP port
        #[arg(long, default_value_t = PrinterConfig::LQ_24PIN.raw_port)]
        port: u16,

        /// Number of copies
        #[arg(long, default_value_t = 1)]
        copies: u32,
    },

    /// Load the font and rasterize a few characters
    CheckFont {
        /// Characters to test
        #[arg(long, default_value = "Ag中文，")]
        chars: String,
    },

    /// List sample reports, or print one as plain text
    Sample {
        /// Report name (omit to list)
        name: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DotprintError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { job, output, png } => {
            let loaded = load_job(&job)?;

            if job.text_mode {
                if png.is_some() {
                    return Err(DotprintError::Image(
                        "PNG preview is not available in text mode (printer renders the text)"
                            .to_string(),
                    ));
                }
                let data = build_from_lines(&loaded.lines, &loaded.text_options())?;
                write_output(output.as_ref(), &data)?;
            } else {
                let rasterizer = rasterizer(cli.font.as_ref())?;
                let data =
                    build_from_bitmap_lines(&rasterizer, &loaded.lines, &loaded.bitmap_options())?;
                write_output(output.as_ref(), &data)?;

                if let Some(png_path) = png {
                    std::fs::write(&png_path, preview::render_png(&rasterizer, &loaded.lines)?)?;
                    println!("Saved preview to {}", png_path.display());
                }
            }
        }

        Commands::Print {
            job,
            host,
            port,
            copies,
        } => {
            let loaded = load_job(&job)?;
            let data = if job.text_mode {
                build_from_lines(&loaded.lines, &loaded.text_options())?
            } else {
                let rasterizer = rasterizer(cli.font.as_ref())?;
                build_from_bitmap_lines(&rasterizer, &loaded.lines, &loaded.bitmap_options())?
            };

            println!("Sending {} bytes to {}:{}...", data.len(), host, port);
            TcpTransport::new(host, port).send(&data, copies)?;
            println!("Printed successfully!");
        }

        Commands::CheckFont { chars } => {
            let rasterizer = rasterizer(cli.font.as_ref())?;
            for ch in chars.chars() {
                for profile in [FontSizeProfile::NORMAL, FontSizeProfile::LARGE] {
                    let glyph = rasterizer.render_char(ch, profile)?;
                    let ink = glyph.data.iter().filter(|&&p| p != 0).count();
                    println!(
                        "{} U+{:04X} {:>2}x{:<2} {} dots",
                        ch, ch as u32, glyph.width, glyph.height, ink
                    );
                }
            }
            println!("Font OK");
        }

        Commands::Sample { name } => match name {
            None => {
                println!("Available sample reports:");
                for name in report::list_reports() {
                    println!("  {}", name);
                }
            }
            Some(name) => {
                for line in sample(&name)? {
                    println!("{}", line.text());
                }
            }
        },
    }

    Ok(())
}

fn sample(name: &str) -> Result<Vec<dotprint::LineEntry>, DotprintError> {
    report::by_name(name).ok_or_else(|| {
        DotprintError::InvalidCommand(format!(
            "Unknown sample '{}'. Run `dotprint sample` to see available reports.",
            name
        ))
    })
}

fn load_job(args: &JobArgs) -> Result<Job, DotprintError> {
    if let Some(name) = &args.sample {
        return Ok(Job::new(sample(name)?));
    }
    let path = args.job.as_ref().ok_or_else(|| {
        DotprintError::InvalidCommand("a job file or --sample is required".to_string())
    })?;
    let job = Job::from_json(&std::fs::read_to_string(path)?)?;
    info!(path = %path.display(), lines = job.lines.len(), "loaded job");
    Ok(job)
}

/// A rasterizer for the configured font, loaded up front so a bad font
/// fails before any work is done.
fn rasterizer(font: Option<&PathBuf>) -> Result<Rasterizer, DotprintError> {
    let path = font.ok_or_else(|| {
        DotprintError::FontUnavailable("no font given (use --font or DOTPRINT_FONT)".to_string())
    })?;

    let rasterizer = Rasterizer::new(path);
    if !rasterizer.preload_font() {
        // Surfaces the remembered load failure.
        rasterizer.render_char('A', FontSizeProfile::NORMAL)?;
    }
    Ok(rasterizer)
}

fn write_output(output: Option<&PathBuf>, data: &[u8]) -> Result<(), DotprintError> {
    match output {
        Some(path) => {
            std::fs::write(path, data)?;
            println!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => println!("Built {} bytes (use --output to save)", data.len()),
    }
    Ok(())
}
