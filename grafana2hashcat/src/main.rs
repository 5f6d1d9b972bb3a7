use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use grafana2hashcat::{DEFAULT_OUTPUT, HASHCAT_MODE, RunStats, convert_file, logging};

const USAGE: &str = "\
[+] Usage: grafana2hashcat <hash_file>

[+] Input file format:
  Each line must contain: <hex_hash>:<salt>
  Example: 2ac9cb7dc02b3c0083eb70898e549b63:12345

[+] Output:
  Creates 'out_hashes.txt' with converted hashes in Hashcat format";

#[derive(Parser, Debug)]
#[command(name = "grafana2hashcat", version)]
#[command(about = "Convert Grafana hex hash and salt pairs to hashcat's sha256 format")]
#[command(after_help = USAGE)]
struct Args {
    /// File with one <hex_hash>:<salt> pair per line
    hash_file: Option<PathBuf>,

    /// Output file for the converted hashes
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Log every converted line
    #[arg(short, long)]
    verbose: bool,
}

fn print_summary(stats: &RunStats, output: &std::path::Path) {
    println!("\n[+] Conversion complete:");
    println!("    Total lines processed: {}", stats.lines_processed);
    println!("    Successfully converted: {}", stats.success_count);
    println!("    Failed conversions: {}", stats.failed_count());
    if !stats.failures.is_empty() {
        let lines: Vec<String> = stats.failures.iter().map(|f| f.line.to_string()).collect();
        println!(
            "    Reported errors: {} (first on lines {})",
            stats.reported_failures,
            lines.join(", ")
        );
    }
    println!("\nYou can use the #{HASHCAT_MODE} mode in hashcat!");
    println!(
        "\nExample: hashcat -m {HASHCAT_MODE} {} -a 0 /usr/share/wordlists/rockyou.txt -O",
        output.display()
    );
    println!("[+] Results saved to: {}", output.display());
}

fn main() -> ExitCode {
    let args = Args::parse();

    let Some(hash_file) = args.hash_file else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    logging::init(args.verbose);

    match convert_file(&hash_file, &args.output) {
        Ok(stats) => {
            print_summary(&stats, &args.output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
