use clap::Parser;
use lloggs::LoggingArgs;
use serde_json::json;
use tracing::info;

use hwident::{
    DeviceFamily, DeviceTable, Resolution, Translator, identifier_kind, raw_identifier,
};

#[derive(Parser, Debug)]
#[command(name = "hwident")]
#[command(about = "Show the hardware identifier and model name of this device")]
struct Args {
    /// Translate this identifier instead of reading the host's
    identifier: Option<String>,

    /// Print only the raw identifier
    #[arg(long, conflicts_with = "list")]
    raw: bool,

    /// List every known identifier, grouped by family
    #[arg(long, conflicts_with = "identifier")]
    list: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let _guard = args.logging.setup(|v| match v {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    })?;

    if args.list {
        return list(args.json);
    }

    let raw = match &args.identifier {
        Some(id) => id.as_str(),
        None => raw_identifier(),
    };
    // Only identifiers read from this host have a known kind.
    let kind = args.identifier.is_none().then(identifier_kind);
    info!(%raw, ?kind, "Identifying");

    if args.raw {
        if args.json {
            println!("{}", json!({ "identifier": raw, "kind": kind }));
        } else {
            println!("{raw}");
        }
        return Ok(());
    }

    let resolution = Translator::builtin().resolve(raw);
    if args.json {
        let family = match resolution {
            Resolution::Known(info) => Some(info.family),
            Resolution::Unknown(_) => None,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "identifier": raw,
                "kind": kind,
                "label": resolution.to_string(),
                "known": resolution.is_known(),
                "family": family,
            }))?
        );
    } else {
        println!("{raw}: {resolution}");
        if let Some(kind) = kind {
            eprintln!("  (host {kind})");
        }
    }

    Ok(())
}

fn list(as_json: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let table = DeviceTable::builtin();

    if as_json {
        let entries: Vec<_> = table.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for family in DeviceFamily::ALL {
        println!("{family}");
        for info in table.family(family) {
            println!("  {:<20} {}", info.identifier, info.label);
        }
    }
    eprintln!("{} identifiers", table.len());

    Ok(())
}
