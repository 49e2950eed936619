//! abbrcheck — inspect how an abbreviation file classifies markers.
//!
//! Loads an abbreviation file (TOML or JSON) and reports, for each marker
//! text given on the command line, whether it would classify as an
//! abbreviation (with its expansion) or as a plain part-of-speech label.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use xdxf_tooltips::{AbbrMap, TooltipConfig};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(file) = args.first() else {
        bail!("usage: abbrcheck <abbr-file> [marker-text ...]");
    };

    let config = TooltipConfig::default();
    xdxf_tooltips::tracing::init(&config.logging);

    let map = AbbrMap::load_from(&PathBuf::from(file))
        .with_context(|| format!("loading abbreviation file {file}"))?;
    if map.is_empty() {
        log::warn!("no usable abbreviation entries in {file}");
    }

    let markers = args.get(1..).unwrap_or_default();
    if markers.is_empty() {
        println!("{} abbreviation(s) loaded from {file}", map.len());
        return Ok(());
    }

    for text in markers {
        match map.expansion(text) {
            Some(html) => println!("{text}\tabbr\t{html}"),
            None => println!("{text}\tpos"),
        }
    }
    Ok(())
}
