//! Builds a Huffman code for one line of text, then encodes and decodes that text.

use std::io::{self, BufRead};

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use ruhuff::huffman::{HuffmanDecoder, HuffmanEncoder, TreeBuilder};
use ruhuff::{generate_code_table, FrequencyTable, QueueCapacity};
use tracing::{debug, info, level_filters::LevelFilter};

#[derive(Parser)]
#[command(version, about = "Huffman code a line of text", long_about = None)]
struct Cli {
    /// Text to encode. Read as one line from standard input if omitted
    #[arg(short, long)]
    text: Option<String>,

    /// Also print the encoded bits packed into bytes, as hex
    #[arg(short, long)]
    packed: bool,

    /// Print the count of every symbol and the size of the encoded text
    #[arg(short, long)]
    stats: bool,

    /// Fail instead of growing the priority queue past this many nodes
    #[arg(long, value_name = "NODES")]
    queue_capacity: Option<usize>,

    /// Increase logging verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let text = match cli.text {
        Some(text) => text.into_bytes(),
        None => read_line()?,
    };
    let text = text.as_slice();
    info!("read {} bytes of input", text.len());

    let capacity = match cli.queue_capacity {
        Some(nodes) => QueueCapacity::Bounded(nodes),
        None => QueueCapacity::Unbounded,
    };
    let tree = TreeBuilder::new()
        .with_queue_capacity(capacity)
        .build(text)
        .wrap_err("failed to build the huffman tree")?;
    debug!(depth = tree.depth(), "built huffman tree");

    let table = generate_code_table(&tree);
    println!("Huffman codes:");
    for (symbol, code) in table.iter() {
        println!("{} -> {}", fmt_symbol(symbol), code);
    }

    let encoder = HuffmanEncoder::new(&table);
    let encoded = encoder.encode(text)?;
    println!();
    println!("Encoded text: {}", encoded);

    if cli.packed {
        let packed = encoder.encode_packed(text)?;
        let hex: String = packed.bytes.iter().map(|b| format!("{:02x}", b)).collect();
        println!("Packed ({} bits): {}", packed.bit_count, hex);
    }

    let decoded = HuffmanDecoder::new(&tree).decode(&encoded)?;
    println!();
    println!("Decoded text: {}", String::from_utf8_lossy(&decoded));

    if cli.stats {
        print_stats(&FrequencyTable::from_text(text), encoded.len());
    }

    if decoded != text {
        bail!("decoded text does not match the input");
    }
    Ok(())
}

fn read_line() -> color_eyre::Result<Vec<u8>> {
    eprint!("Enter text: ");
    let mut line = Vec::new();
    io::stdin()
        .lock()
        .read_until(b'\n', &mut line)
        .wrap_err("failed to read from standard input")?;
    // only the line break is stripped, every other byte is part of the text
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn print_stats(frequencies: &FrequencyTable, encoded_bits: usize) {
    println!();
    println!("Symbol counts:");
    for (symbol, count) in frequencies.iter() {
        println!("{} x{}", fmt_symbol(symbol), count);
    }
    let original_bits = frequencies.total().unwrap_or(0) * 8;
    println!(
        "{} bits encoded vs. {} bits raw ({:.1}%)",
        encoded_bits,
        original_bits,
        encoded_bits as f64 / original_bits as f64 * 100.0
    );
}

/// Printable ASCII as is, everything else escaped
fn fmt_symbol(symbol: u8) -> String {
    format!("'{}'", std::ascii::escape_default(symbol))
}
