//! Command line surface: argument model and dispatch.

use crate::error::AppError;
use crate::models::CidrBlock;
use crate::output::{batch_csv, batch_text, report_text, reports_csv, to_json};
use crate::processing::{
    evaluate_batch, host_or_placeholder, read_batch_file, unique_blocks, CidrReport,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cidr-calc",
    author,
    version,
    about = "IPv4 CIDR calculator: network, broadcast, mask, host range, class and privacy"
)]
pub struct Args {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "CIDR_CALC_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Address part of the input
    Address { cidr: String },
    /// Network address (host bits cleared)
    Network { cidr: String },
    /// Broadcast address (host bits set)
    Broadcast { cidr: String },
    /// Subnet mask as dotted binary octets
    Mask {
        cidr: String,
        /// Print the dotted-decimal mask instead
        #[arg(long)]
        decimal: bool,
    },
    /// Address class A-E
    Class { cidr: String },
    /// First usable host
    First { cidr: String },
    /// Last usable host
    Last { cidr: String },
    /// Address just below the last usable host
    Penultimate { cidr: String },
    /// Number of usable hosts
    Hosts { cidr: String },
    /// Whether the address is in a private range
    Private { cidr: String },
    /// Every derived value for one or more inputs
    Report {
        #[arg(required = true)]
        cidrs: Vec<String>,
    },
    /// Evaluate a JSON array of inputs from a file
    Batch {
        path: PathBuf,
        /// Drop failed entries, sort and remove repeated blocks
        #[arg(long)]
        unique: bool,
    },
}

/// Execute the parsed command and return what should be printed on stdout.
pub fn run(args: &Args) -> Result<String, AppError> {
    log::info!("#Start run() {:?}", args.command);
    let out = match &args.command {
        Command::Address { cidr } => single(cidr, |b| b.addr().to_string())?,
        Command::Network { cidr } => single(cidr, |b| b.network().to_string())?,
        Command::Broadcast { cidr } => single(cidr, |b| b.broadcast().to_string())?,
        Command::Mask { cidr, decimal } => single(cidr, |b| {
            if *decimal {
                b.subnet_mask().to_string()
            } else {
                b.subnet_mask_binary()
            }
        })?,
        Command::Class { cidr } => single(cidr, |b| b.address_class().to_string())?,
        Command::First { cidr } => {
            single(cidr, |b| host_or_placeholder(b.first_usable_host()))?
        }
        Command::Last { cidr } => {
            single(cidr, |b| host_or_placeholder(b.last_usable_host()))?
        }
        Command::Penultimate { cidr } => {
            single(cidr, |b| host_or_placeholder(b.penultimate_usable_host()))?
        }
        Command::Hosts { cidr } => single(cidr, |b| b.usable_host_count().to_string())?,
        Command::Private { cidr } => single(cidr, |b| b.is_private().to_string())?,
        Command::Report { cidrs } => {
            let reports = cidrs
                .iter()
                .map(|raw| CidrBlock::parse(raw).map(|b| CidrReport::from_block(&b)))
                .collect::<Result<Vec<_>, _>>()?;
            render_reports(&reports, args.format)?
        }
        Command::Batch { path, unique } => {
            let values = read_batch_file(path)?;
            if *unique {
                let reports: Vec<CidrReport> = unique_blocks(&values)
                    .iter()
                    .map(CidrReport::from_block)
                    .collect();
                render_reports(&reports, args.format)?
            } else {
                let entries = evaluate_batch(&values);
                match args.format {
                    OutputFormat::Text => batch_text(&entries),
                    OutputFormat::Csv => batch_csv(&entries),
                    OutputFormat::Json => to_json(&entries)?,
                }
            }
        }
    };
    log::info!("#End run()");
    Ok(out)
}

fn single(raw: &str, value: impl Fn(&CidrBlock) -> String) -> Result<String, AppError> {
    let block = CidrBlock::parse(raw)?;
    Ok(value(&block))
}

fn render_reports(reports: &[CidrReport], format: OutputFormat) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Text => reports
            .iter()
            .map(report_text)
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Csv => reports_csv(reports),
        OutputFormat::Json => to_json(reports)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CidrError;
    use rstest::rstest;

    fn run_args(argv: &[&str]) -> Result<String, AppError> {
        let args = Args::try_parse_from(argv).expect("valid arguments");
        run(&args)
    }

    #[rstest]
    #[case(&["cidr-calc", "address", "192.168.1.15/24"], "192.168.1.15")]
    #[case(&["cidr-calc", "network", "91.124.230.205/30"], "91.124.230.204")]
    #[case(&["cidr-calc", "broadcast", "91.124.230.205/30"], "91.124.230.207")]
    #[case(&["cidr-calc", "mask", "91.124.230.205/30"], "11111111.11111111.11111111.11111100")]
    #[case(&["cidr-calc", "mask", "--decimal", "91.124.230.205/30"], "255.255.255.252")]
    #[case(&["cidr-calc", "class", "91.124.230.205/30"], "A")]
    #[case(&["cidr-calc", "first", "91.124.230.205/30"], "91.124.230.205")]
    #[case(&["cidr-calc", "last", "91.124.230.205/30"], "91.124.230.206")]
    #[case(&["cidr-calc", "penultimate", "91.124.230.205/30"], "91.124.230.205")]
    #[case(&["cidr-calc", "hosts", "91.124.230.205/30"], "2")]
    #[case(&["cidr-calc", "hosts", "10.0.0.1/32"], "0")]
    #[case(&["cidr-calc", "first", "10.0.0.1/32"], "-")]
    #[case(&["cidr-calc", "private", "91.124.230.205/30"], "false")]
    #[case(&["cidr-calc", "private", "10.0.0.1/8"], "true")]
    fn test_single_value_commands(#[case] argv: &[&str], #[case] expected: &str) {
        assert_eq!(run_args(argv).unwrap(), expected);
    }

    #[test]
    fn test_validation_error_is_specific() {
        let err = run_args(&["cidr-calc", "network", "not-an-ip"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(matches!(err, AppError::Cidr(CidrError::MissingPrefix(_))));
    }

    #[test]
    fn test_report_json_two_inputs() {
        let out = run_args(&[
            "cidr-calc",
            "--format",
            "json",
            "report",
            "10.0.0.1/8",
            "192.168.1.15/24",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[1]["network"], "192.168.1.0");
        assert_eq!(value[1]["private"], true);
    }

    #[test]
    fn test_report_stops_on_first_bad_input() {
        let err = run_args(&["cidr-calc", "report", "10.0.0.1/8", "1.2.3.4/99"]).unwrap_err();
        assert!(matches!(err, AppError::Cidr(CidrError::InvalidPrefixLength(_))));
    }

    #[test]
    fn test_batch_unique_json() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"["192.168.1.15/24", 5, "10.0.0.1/8", " 192.168.1.15/24"]"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let out = run_args(&["cidr-calc", "--format", "json", "batch", path, "--unique"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let cidrs: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["cidr"].as_str().unwrap())
            .collect();
        assert_eq!(cidrs, vec!["10.0.0.1/8", "192.168.1.15/24"]);
    }

    #[test]
    fn test_report_requires_input() {
        assert!(Args::try_parse_from(["cidr-calc", "report"]).is_err());
    }

    #[test]
    fn test_format_after_subcommand() {
        let args =
            Args::try_parse_from(["cidr-calc", "report", "10.0.0.1/8", "--format", "csv"]).unwrap();
        assert_eq!(args.format, OutputFormat::Csv);
    }
}
