use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::{debug, info, info_span};

use tp_cli::session::{KeyStep, parse_key_sequence, render_texts, run_key_sequence};
use tp_cli::settings::{PanelSettings, parse_value, resolve_builtin_locale};
use tp_engine::{ChronoEngine, FormatSpec, Locale};
use tp_panel::{ColumnConfig, TimePanel, ValueTextConfig, ValueTextDeriver};

use crate::cli::{ColumnArg, FormatArgs, KeysArgs};

pub fn run_format(args: &FormatArgs, settings: &PanelSettings) -> Result<()> {
    let value = parse_value(&args.value).context("parse value")?;
    let locale = match &args.locale {
        Some(name) => resolve_builtin_locale(name)?,
        None => settings.resolve_locale()?,
    };
    let patterns = if args.formats.is_empty() {
        settings.formats.clone()
    } else {
        args.formats.clone()
    };
    let formats: Vec<FormatSpec<ChronoEngine>> =
        patterns.iter().map(FormatSpec::pattern).collect();
    let engine = settings.engine()?;

    let mut deriver = ValueTextDeriver::new();
    let texts = deriver
        .derive(
            Some(&value),
            &ValueTextConfig {
                formats: &formats,
                engine: &engine,
                locale: &locale,
            },
        )
        .with_context(|| format!("format {value}"))?;
    info!(formats = formats.len(), locale = %locale.locale, "value formatted");

    if args.json {
        let json = serde_json::to_string_pretty(&*texts).context("serialize texts")?;
        println!("{json}");
        return Ok(());
    }
    if args.plain {
        print!("{}", render_texts(&texts));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Pattern", "Text"]);
    apply_table_style(&mut table);
    for (pattern, text) in patterns.iter().zip(&texts.texts) {
        table.add_row(vec![pattern.as_str(), text.as_str()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_keys(args: &KeysArgs, settings: &PanelSettings) -> Result<()> {
    let span = info_span!("keys", keys = %args.keys);
    let _guard = span.enter();

    let mut config = settings.panel_config()?;
    if let Some(format) = &args.format {
        config.format.clone_from(format);
    }
    config.columns = keys_columns(args, settings, &config.format);
    debug!(columns = ?config.columns, format = %config.format, "panel config");

    let mut panel = TimePanel::new(settings.engine()?, config);
    let initial = args
        .value
        .as_deref()
        .map(parse_value)
        .transpose()
        .context("parse --value")?;
    panel.set_value(initial);

    let events = parse_key_sequence(&args.keys).context("parse key sequence")?;
    let steps = run_key_sequence(&mut panel, &events).context("replay key sequence")?;

    let mut table = Table::new();
    table.set_header(vec![
        "#", "Key", "Action", "Focus", "Value", "Header", "Shared", "Committed",
    ]);
    apply_table_style(&mut table);
    for (index, step) in steps.iter().enumerate() {
        table.add_row(step_row(index + 1, step));
    }
    println!("{table}");
    Ok(())
}

pub fn run_locales() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Code", "AM", "PM", "Months", "Weekdays"]);
    apply_table_style(&mut table);
    for name in Locale::builtin_names() {
        let locale = resolve_builtin_locale(name)?;
        table.add_row(vec![
            locale.locale.clone(),
            locale.am.clone(),
            locale.pm.clone(),
            locale.short_months.join(" "),
            locale.short_weekdays.join(" "),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Column flags for `keys`: explicit `--columns` first, then the pattern
/// given with `--format`, then the settings file.
fn keys_columns(args: &KeysArgs, settings: &PanelSettings, format: &str) -> ColumnConfig {
    let mut columns = if !args.columns.is_empty() {
        ColumnConfig {
            show_hour: Some(args.columns.contains(&ColumnArg::Hour)),
            show_minute: Some(args.columns.contains(&ColumnArg::Minute)),
            show_second: Some(args.columns.contains(&ColumnArg::Second)),
            use_12_hours: false,
        }
    } else if args.format.is_some() {
        ColumnConfig::from_format(format)
    } else {
        settings.columns
    };
    columns.use_12_hours |= args.use_12_hours;
    columns
}

fn step_row(number: usize, step: &KeyStep) -> Vec<String> {
    vec![
        number.to_string(),
        step.event.to_string(),
        step.action
            .map_or_else(|| "ignored".to_string(), |action| action.to_string()),
        step.focused
            .map_or_else(|| "-".to_string(), |column| column.to_string()),
        display_value(step.value),
        step.header.clone(),
        if step.header_reused { "yes" } else { "no" }.to_string(),
        display_value(step.committed),
    ]
}

fn display_value(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
