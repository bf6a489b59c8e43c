use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use cardex_core::domain::ContactCard;
use cardex_core::vcard;
use cardex_tabular::normalize::{normalize_rows, NormalizeOptions};
use cardex_tabular::reader::read_table;
use clap::{ArgAction, Args};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Delimited contacts file to convert
    pub input: PathBuf,
    /// Output path; defaults to the input path with a .vcf extension
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Overwrite the output file if it already exists
    #[arg(long, action = ArgAction::SetTrue)]
    pub force: bool,
    /// Append a synthesized name column with sequential values
    #[arg(long, action = ArgAction::SetTrue)]
    pub auto_name: bool,
    #[arg(long)]
    pub name_prefix: Option<String>,
    /// Prepend a prefix to every phone value
    #[arg(long, action = ArgAction::SetTrue)]
    pub fix_phone: bool,
    #[arg(long)]
    pub phone_prefix: Option<String>,
}

#[derive(Debug, Serialize)]
struct ConvertReport {
    count: usize,
    input: String,
    output: String,
}

pub fn convert(ctx: &Context<'_>, args: ConvertArgs) -> Result<()> {
    let options = resolve_options(ctx, &args)?;
    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| args.input.with_extension("vcf"));
    if out_path.exists() && !args.force {
        return Err(invalid_input(format!(
            "output file {} already exists (pass --force to overwrite)",
            out_path.display()
        )));
    }

    let table = read_table(&args.input)?;
    debug!(
        rows = table.rows.len(),
        columns = table.header.len(),
        "table loaded"
    );

    let maps = normalize_rows(table, &options)?;
    let mut cards = Vec::with_capacity(maps.len());
    for fields in maps {
        cards.push(ContactCard::from_fields(fields)?);
    }

    // Nothing is written until every row has produced a valid card.
    let document = vcard::render_document(&cards);
    fs::write(&out_path, document)
        .with_context(|| format!("write output file {}", out_path.display()))?;

    let report = ConvertReport {
        count: cards.len(),
        input: args.input.display().to_string(),
        output: out_path.display().to_string(),
    };
    if ctx.json {
        return print_json(&report);
    }
    println!("Exported {} contacts to {}", report.count, report.output);
    Ok(())
}

fn resolve_options(ctx: &Context<'_>, args: &ConvertArgs) -> Result<NormalizeOptions> {
    let mut config = ctx.config.clone();
    if args.auto_name {
        config.auto_name = true;
    }
    if let Some(prefix) = &args.name_prefix {
        config.name_prefix = prefix.clone();
    }
    if args.fix_phone {
        config.fix_phone = true;
    }
    if let Some(prefix) = &args.phone_prefix {
        config.phone_prefix = prefix.clone();
    }
    config.validate()?;

    Ok(NormalizeOptions {
        auto_name: config.auto_name,
        name_prefix: config.name_prefix,
        fix_phone: config.fix_phone,
        phone_prefix: config.phone_prefix,
    })
}
