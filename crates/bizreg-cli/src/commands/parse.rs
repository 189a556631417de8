//! Parse command - extract license fields from a single file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use bizreg_core::{parse_license_text, ClovaClient, ParsedLicense};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (text, image, or PDF)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the recovered raw text before the parsed fields
    #[arg(long)]
    show_raw: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Parsing file: {}", args.input.display());

    let raw_text = match extension.as_str() {
        "txt" => fs::read_to_string(&args.input)?,
        "png" | "jpg" | "jpeg" | "pdf" => {
            let Some(client) = ClovaClient::from_config(&config.ocr)? else {
                anyhow::bail!(
                    "CLOVA OCR is not configured. Set CLOVA_OCR_URL and CLOVA_OCR_SECRET, \
                     or add them to the config file, to parse image files."
                );
            };

            let bytes = fs::read(&args.input)?;
            let file_name = args.input.file_name().and_then(|n| n.to_str());
            client.recognize(&bytes, file_name).await?
        }
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    if raw_text.trim().is_empty() {
        anyhow::bail!("No text could be recovered from the file");
    }

    let parsed = parse_license_text(&raw_text);

    if parsed.is_empty() {
        eprintln!(
            "{} No license fields recognized in the text.",
            style("!").yellow()
        );
    }

    if args.show_raw {
        println!("{}", style("Recovered text:").bold());
        println!("{raw_text}");
        println!();
    }

    let output = format_parsed(&parsed, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    debug!("Total parsing time: {:?}", start.elapsed());

    Ok(())
}

fn format_parsed(parsed: &ParsedLicense, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(parsed)?),
        OutputFormat::Text => Ok(format_text(parsed)),
    }
}

fn format_text(parsed: &ParsedLicense) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("-").to_string();

    let mut output = String::new();
    output.push_str(&format!("상호: {}\n", field(&parsed.company_name)));
    output.push_str(&format!("등록번호: {}\n", field(&parsed.business_number)));
    output.push_str(&format!(
        "대표자: {}\n",
        field(&parsed.representative_name)
    ));
    output.push_str(&format!("소재지: {}\n", field(&parsed.address)));
    output.push_str(&format!("업태: {}\n", field(&parsed.business_type)));
    output.push_str(&format!("종목: {}\n", field(&parsed.business_item)));
    output.push_str(&format!(
        "개업연월일: {}\n",
        parsed
            .established_at
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output
}
