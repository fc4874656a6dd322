use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dashfmt::{
    display_name, format_latency_ms, format_latency_sec_str, format_rate, friendly_title,
    is_resource, pod_owner_lookup, public_address_to_string, resource_type_to_camel_case,
    singular_resource, to_class_name, to_short_resource_name, MetricKind, Resource, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "dashfmt")]
#[command(about = "Format dashboard metrics and resource names from the command line")]
struct Args {
    /// Path to a TOML settings file (thresholds, request rate unit)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print structured JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a value as a metric of the given kind
    Metric {
        /// REQUEST_RATE, SUCCESS_RATE, LATENCY, UNTRUNCATED or NO_UNIT
        kind: MetricKind,

        /// Metric value; omit for an absent value, "NaN" for not-a-number
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,
    },

    /// Format a latency given in seconds (or milliseconds with --ms)
    Latency {
        /// Latency value; only the leading number is read
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Interpret the value as milliseconds
        #[arg(long)]
        ms: bool,
    },

    /// Show every derived form of a resource type name
    Resource {
        /// Resource type, singular or plural
        name: String,
    },

    /// Compact `<short type>/<name>` label for a resource
    Display {
        /// Resource type, e.g. deployment
        resource_type: String,

        /// Resource name
        name: String,
    },

    /// Render an integer-encoded IPv4 address and port
    Address {
        /// IPv4 address as a 32-bit integer
        ipv4: u32,

        /// Port
        port: u32,
    },

    /// Classify a success ratio into poor / ok / good
    Classify {
        /// Success ratio in [0, 1]
        #[arg(allow_negative_numbers = true)]
        ratio: f64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref())?;
    debug!(?settings, "using settings");

    let output = run(&args.command, &settings, args.json)?;
    println!("{}", output);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Execute a command and return the text to print.
fn run(command: &Command, settings: &Settings, as_json: bool) -> Result<String> {
    let output = match command {
        Command::Metric { kind, value } => {
            let formatted = match kind {
                MetricKind::RequestRate => format_rate(*value, &settings.request_rate_unit),
                _ => kind.format(*value),
            };
            if as_json {
                serde_json::to_string_pretty(&json!({
                    "kind": kind,
                    "value": value,
                    "formatted": formatted,
                }))?
            } else {
                formatted
            }
        }
        Command::Latency { value, ms } => {
            let formatted = if *ms {
                format_latency_ms(dashfmt::parse_float(value))
            } else {
                format_latency_sec_str(value)
            };
            if as_json {
                serde_json::to_string_pretty(&json!({ "input": value, "formatted": formatted }))?
            } else {
                formatted
            }
        }
        Command::Resource { name } => describe_resource(name, as_json)?,
        Command::Display {
            resource_type,
            name,
        } => {
            let resource = Resource::new(resource_type.as_str(), name.as_str());
            let label = display_name(&resource);
            if as_json {
                serde_json::to_string_pretty(&json!({
                    "resource": resource,
                    "display_name": label,
                }))?
            } else {
                label
            }
        }
        Command::Address { ipv4, port } => {
            let address = public_address_to_string(*ipv4, port);
            if as_json {
                serde_json::to_string_pretty(&json!({
                    "ipv4": ipv4,
                    "octets": dashfmt::decode_ip_to_octets(*ipv4),
                    "port": port,
                    "address": address,
                }))?
            } else {
                address
            }
        }
        Command::Classify { ratio } => {
            let class = settings.success_rate.classify(*ratio);
            if as_json {
                serde_json::to_string_pretty(&json!({
                    "ratio": ratio,
                    "band": class,
                    "class_name": class.class_name(),
                }))?
            } else {
                format!("{} ({})", class, class.class_name())
            }
        }
    };
    Ok(output)
}

fn describe_resource(name: &str, as_json: bool) -> Result<String> {
    let singular = singular_resource(name);
    let title = friendly_title(name);
    let short = to_short_resource_name(singular);
    let camel = resource_type_to_camel_case(singular);
    let pod_owner = pod_owner_lookup(singular).is_some();
    let known = is_resource(name);
    let class_name = to_class_name(&title.singular);

    if as_json {
        return Ok(serde_json::to_string_pretty(&json!({
            "input": name,
            "singular": singular,
            "title": title,
            "short_name": short,
            "camel_case": camel,
            "pod_owner": pod_owner,
            "known": known,
            "class_name": class_name,
        }))?);
    }

    Ok(format!(
        "singular:   {singular}\n\
         title:      {} / {}\n\
         short name: {short}\n\
         camelCase:  {camel}\n\
         pod owner:  {pod_owner}\n\
         known:      {known}\n\
         class name: {class_name}",
        title.singular, title.plural
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        run(&args.command, &Settings::default(), args.json).unwrap()
    }

    #[test]
    fn metric_command() {
        assert_eq!(run_args(&["dashfmt", "metric", "REQUEST_RATE", "1500"]), "1.5k RPS");
        assert_eq!(run_args(&["dashfmt", "metric", "SUCCESS_RATE"]), "---");
        assert_eq!(run_args(&["dashfmt", "metric", "UNTRUNCATED", "NaN"]), "N/A");
    }

    #[test]
    fn metric_command_uses_configured_unit() {
        let args = Args::try_parse_from(["dashfmt", "metric", "REQUEST_RATE", "2000"]).unwrap();
        let settings = Settings {
            request_rate_unit: " req/s".to_string(),
            ..Settings::default()
        };
        assert_eq!(run(&args.command, &settings, false).unwrap(), "2k req/s");
    }

    #[test]
    fn unknown_metric_kind_is_rejected() {
        assert!(Args::try_parse_from(["dashfmt", "metric", "THROUGHPUT", "1"]).is_err());
    }

    #[test]
    fn latency_command() {
        assert_eq!(run_args(&["dashfmt", "latency", "0.25"]), "250 ms");
        assert_eq!(run_args(&["dashfmt", "latency", "--ms", "250"]), "250 ms");
        assert_eq!(run_args(&["dashfmt", "latency", "nope"]), "---");
    }

    #[test]
    fn display_and_address_commands() {
        assert_eq!(run_args(&["dashfmt", "display", "statefulset", "db"]), "sts/db");
        assert_eq!(
            run_args(&["dashfmt", "address", "2130706433", "8080"]),
            "127.0.0.1:8080"
        );
    }

    #[test]
    fn display_and_address_commands_json() {
        let out = run_args(&["dashfmt", "--json", "display", "deployment", "web"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["display_name"], "deploy/web");
        assert_eq!(value["resource"]["type"], "deployment");

        let out = run_args(&["dashfmt", "--json", "address", "2130706433", "8080"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["address"], "127.0.0.1:8080");
        assert_eq!(value["octets"], serde_json::json!([127, 0, 0, 1]));
        assert_eq!(value["port"], 8080);
    }

    #[test]
    fn classify_command() {
        assert_eq!(run_args(&["dashfmt", "classify", "0.9"]), "ok (status-ok)");
    }

    #[test]
    fn resource_command_json() {
        let out = run_args(&["dashfmt", "--json", "resource", "replicationcontrollers"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["singular"], "replicationcontroller");
        assert_eq!(value["short_name"], "rc");
        assert_eq!(value["camel_case"], "replicationController");
        assert_eq!(value["title"]["plural"], "Replication Controllers");
        assert_eq!(value["class_name"], "replication_controller");
        assert_eq!(value["pod_owner"], true);
        assert_eq!(value["known"], true);
    }

    #[test]
    fn resource_command_text_for_unknown() {
        let out = run_args(&["dashfmt", "resource", "widgets"]);
        assert!(out.contains("short name: widget"));
        assert!(out.contains("known:      false"));
    }
}
