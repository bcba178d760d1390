use anyhow::Result;
use clap::{Parser, Subcommand};

mod index;

#[derive(Parser, Debug)]
#[command(name = "bwt-rust", author, version, about = "Burrows-Wheeler transform via a prefix-doubling suffix array", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the BWT of a raw byte file (the sentinel byte 0 is part of the output)
    Transform {
        /// Input file; must not contain NUL bytes
        input: String,
        /// Output path (defaults to <input>.bwt)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Invert a BWT file back to the original bytes
    Invert {
        /// BWT file produced by `transform`
        input: String,
        /// Output path (defaults to <input>.txt)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Round-trip a file through transform + invert and compare
    Check {
        /// Input file; must not contain NUL bytes
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Transform { input, output } => run_transform(&input, output.as_deref()),
        Commands::Invert { input, output } => run_invert(&input, output.as_deref()),
        Commands::Check { input } => run_check(&input),
    }
}

fn read_text(path: &str) -> Result<Vec<u8>> {
    let text = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("cannot open input file '{}': {}", path, e))?;
    if text.contains(&index::bwt::SENTINEL) {
        anyhow::bail!(
            "input file '{}' contains a NUL byte, which is reserved for the sentinel",
            path
        );
    }
    Ok(text)
}

fn run_transform(input: &str, output: Option<&str>) -> Result<()> {
    let text = read_text(input)?;
    let y = index::bwt::build_bwt(&text);

    let out_path = output.map_or_else(|| format!("{}.bwt", input), str::to_string);
    std::fs::write(&out_path, &y)
        .map_err(|e| anyhow::anyhow!("cannot write BWT to '{}': {}", out_path, e))?;

    println!("input: {}", input);
    println!("length: {}", text.len());
    println!("bwt written: {}", out_path);
    Ok(())
}

fn run_invert(input: &str, output: Option<&str>) -> Result<()> {
    let y = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("cannot open BWT file '{}': {}", input, e))?;
    if y.is_empty() {
        anyhow::bail!("BWT file '{}' is empty", input);
    }

    let text = index::bwt::invert_bwt(&y);

    let out_path = output.map_or_else(|| format!("{}.txt", input), str::to_string);
    std::fs::write(&out_path, &text)
        .map_err(|e| anyhow::anyhow!("cannot write text to '{}': {}", out_path, e))?;

    println!("bwt: {}", input);
    println!("length: {}", text.len());
    println!("text written: {}", out_path);
    Ok(())
}

fn run_check(input: &str) -> Result<()> {
    let text = read_text(input)?;
    let y = index::bwt::build_bwt(&text);
    let z = index::bwt::invert_bwt(&y);
    if z != text {
        anyhow::bail!("round trip failed for '{}': reconstruction differs from input", input);
    }

    println!("input: {}", input);
    println!("length: {}", text.len());
    println!("round trip: ok");
    Ok(())
}
