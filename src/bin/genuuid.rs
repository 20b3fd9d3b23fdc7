//! Command that prints one or '-c count' UUID strings of the requested version

use std::{error::Error, io, io::Write};

use clap::Parser;
use genuuid::{Namespace, Uuid};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// UUID version to generate: 1, 3, 4 or 5.
    #[arg(short = 't', long = "type", default_value_t = 5, value_parser = parse_version)]
    uuid_version: u8,

    /// Namespace for versions 3 and 5: dns, url, oid or dn (case-insensitive).
    #[arg(short, long)]
    namespace: Option<Namespace>,

    /// Number of UUIDs to print.
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Name hashed with the namespace for versions 3 and 5.
    name: Option<String>,
}

fn parse_version(arg: &str) -> Result<u8, String> {
    match arg.parse() {
        Ok(v @ (1 | 3 | 4 | 5)) => Ok(v),
        _ => Err(format!("unsupported UUID version '{}'; expected 1, 3, 4 or 5", arg)),
    }
}

impl Cli {
    /// Produces the next UUID for the parsed options.
    fn generate(&self) -> Result<Uuid, Box<dyn Error>> {
        match self.uuid_version {
            1 => Ok(genuuid::uuid1()?),
            4 => Ok(genuuid::uuid4()?),
            v => {
                let ns = self
                    .namespace
                    .ok_or("a namespace (-n) is required for versions 3 and 5")?;
                let name = self
                    .name
                    .as_deref()
                    .ok_or("a name is required for versions 3 and 5")?;
                Ok(if v == 3 {
                    genuuid::uuid3(&ns.uuid(), name)
                } else {
                    genuuid::uuid5(&ns.uuid(), name)
                })
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    if matches!(cli.uuid_version, 1 | 4) && (cli.namespace.is_some() || cli.name.is_some()) {
        log::warn!("namespace and name are ignored for version {}", cli.uuid_version);
    }
    log::debug!("generating {} UUIDv{}", cli.count, cli.uuid_version);

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..cli.count {
        writeln!(buf, "{}", cli.generate()?)?;
    }
    buf.flush()?;

    Ok(())
}
