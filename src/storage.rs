use crate::models::{AvatarParts, AvatarSpec, DefaultContent};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Either a single spec object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpecFile {
    Many(Vec<AvatarSpec>),
    One(AvatarSpec),
}

/// Parse avatar specs from a JSON string (object or array).
pub fn parse_specs(json: &str) -> Result<Vec<AvatarSpec>> {
    let parsed: SpecFile = serde_json::from_str(json).context("invalid avatar spec JSON")?;
    Ok(match parsed {
        SpecFile::Many(v) => v,
        SpecFile::One(s) => vec![s],
    })
}

/// Load avatar specs from a JSON file.
pub fn load_specs<P: AsRef<Path>>(path: P) -> Result<Vec<AvatarSpec>> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let specs = parse_specs(&s).with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded {} avatar spec(s) from {}", specs.len(), path.display());
    Ok(specs)
}

/// Save derived parts as CSV with header.
pub fn save_csv<P: AsRef<Path>>(parts: &[AvatarParts], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("style_class","style","title","initials","color_css","image_url","icon_class"))?;
    for p in parts {
        let icon_class = match &p.content {
            DefaultContent::Icon(c) => Some(c.as_str()),
            _ => None,
        };
        wtr.serialize((
            &p.style_class,
            &p.style,
            &p.title,
            &p.initials,
            &p.color_css,
            &p.image_url,
            icon_class,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save derived parts as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(parts: &[AvatarParts], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(parts)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
