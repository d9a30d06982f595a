//! Renders a YAML document file to HTML on stdout, with markdown
//! conversion enabled for escapable text.
//!
//! Classification failures are not crashes: the offending subtree is
//! dumped back as YAML together with the failure message, and the process
//! exits non-zero.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use hotyam::RenderOptions;

fn main() -> Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: hotyam <document.yaml>");
    };
    if args.next().is_some() {
        bail!("usage: hotyam <document.yaml>");
    }

    let source =
        std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let value: hotyam::Value =
        serde_yaml_ng::from_str(&source).with_context(|| format!("parsing {path} as yaml"))?;

    let options = RenderOptions::default().markdown();
    match hotyam::parse(&value) {
        Ok(nodes) => {
            println!("{}", nodes.render(&options));
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{}", failure.diagnostic());
            Ok(ExitCode::FAILURE)
        }
    }
}
