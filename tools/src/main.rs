use std::path::PathBuf;

use anyhow::{Context, Result};
use bcdec_tools::{
    decode_report, encode_report, format_inspect_pretty, inspect_packed, inspect_zoned,
    read_field,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use codec::{CodecOptions, DecimalFormat, ZoneCharset};
use log::{debug, info};
use nibble::parse_hex;

#[derive(Parser)]
#[command(
    name = "bcdec-tools",
    version,
    about = "Zoned and packed decimal encoding, decoding and inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode an integer and print the bytes as hex.
    Encode {
        /// Value to encode.
        #[arg(allow_negative_numbers = true)]
        value: i64,
        #[command(flatten)]
        opts: CodecArgs,
        /// Fixed field width in bytes (left-padded with zeros).
        #[arg(long)]
        width: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = EncodeOutput::Hex)]
        output: EncodeOutput,
    },
    /// Decode a field given as hex or as a byte range of a record file.
    Decode {
        /// Field bytes as hex, e.g. `123D` or `31 32 73`.
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        hex: Option<String>,
        #[command(flatten)]
        opts: CodecArgs,
        /// Record file to read the field from.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Byte offset of the field in the record file.
        #[arg(long, default_value_t = 0, requires = "file")]
        offset: usize,
        /// Field length in bytes (defaults to the rest of the file).
        #[arg(long, requires = "file")]
        len: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = DecodeOutput::Text)]
        output: DecodeOutput,
    },
    /// Explain a field nibble by nibble.
    Inspect {
        /// Field bytes as hex.
        hex: String,
        #[command(flatten)]
        opts: CodecArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectOutput::Pretty)]
        output: InspectOutput,
    },
}

#[derive(Args)]
struct CodecArgs {
    /// Decimal layout.
    #[arg(long, value_enum)]
    format: FormatArg,
    /// Zone convention for zoned decimal.
    #[arg(long, value_enum, default_value_t = CharsetArg::Ascii)]
    charset: CharsetArg,
    /// Accept alternate sign nibbles (A, E, F positive; B negative).
    #[arg(long)]
    lenient: bool,
}

impl CodecArgs {
    fn options(&self) -> CodecOptions {
        let charset = match self.charset {
            CharsetArg::Ascii => ZoneCharset::Ascii,
            CharsetArg::Ebcdic => ZoneCharset::Ebcdic,
        };
        CodecOptions::new()
            .with_zone_charset(charset)
            .with_lenient_signs(self.lenient)
    }

    const fn format(&self) -> DecimalFormat {
        match self.format {
            FormatArg::Zoned => DecimalFormat::Zoned,
            FormatArg::Packed => DecimalFormat::Packed,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Zoned,
    Packed,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CharsetArg {
    Ascii,
    Ebcdic,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EncodeOutput {
    Hex,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DecodeOutput {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectOutput {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            value,
            opts,
            width,
            output,
        } => {
            let format = opts.format();
            let options = opts.options();
            debug!("encode {value} as {format} with {options:?}, width {width:?}");
            let report = encode_report(value, format, &options, width)
                .with_context(|| format!("encode {value} as {format} decimal"))?;
            match output {
                EncodeOutput::Hex => println!("{}", report.hex),
                EncodeOutput::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
        Command::Decode {
            hex,
            opts,
            file,
            offset,
            len,
            output,
        } => {
            let bytes = if let Some(path) = &file {
                info!("reading field at offset {offset} from {}", path.display());
                read_field(path, offset, len)?
            } else {
                let hex = hex.context("a hex field or --file is required")?;
                parse_hex(&hex).context("parse hex field")?
            };
            let format = opts.format();
            let options = opts.options();
            debug!("decode {} bytes as {format} with {options:?}", bytes.len());
            let report = decode_report(&bytes, format, &options)
                .with_context(|| format!("decode {format} decimal"))?;
            match output {
                DecodeOutput::Text => println!("{}", report.value),
                DecodeOutput::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
        Command::Inspect { hex, opts, output } => {
            let bytes = parse_hex(&hex).context("parse hex field")?;
            let options = opts.options();
            let report = match opts.format() {
                DecimalFormat::Zoned => inspect_zoned(&bytes, &options),
                DecimalFormat::Packed => inspect_packed(&bytes, &options),
            };
            match output {
                InspectOutput::Pretty => println!("{}", format_inspect_pretty(&report)),
                InspectOutput::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
    }
    Ok(())
}
