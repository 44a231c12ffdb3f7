//src/main.rs
mod cli; // Keep cli module for parsing args

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

use fit_diary_lib::{
    format_date, format_number, parse_color, AppService, ChartPoint, Metric, Record, RecordForm,
    Summary,
};

const LOG_ENV_VAR: &str = "FIT_DIARY_LOG";
const CHART_WIDTH: usize = 40;

fn main() -> Result<()> {
    // Logs go to stderr so table/CSV output stays clean
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // --- Check for completion generation request FIRST ---
    let cli_args = cli::parse_args(); // Parse arguments once
    let export_csv = cli_args.export_csv;

    if let cli::Commands::GenerateCompletion { shell } = cli_args.command {
        let mut cmd = cli::build_cli_command(); // Get the command structure
        let bin_name = cmd.get_name().to_string(); // Get the binary name

        eprintln!("Generating completion script for {shell}..."); // Print to stderr
        clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout()); // Print script to stdout
        return Ok(()); // Exit after generating script
    }

    // Initialize the application service (loads config, seeds the session)
    let mut service =
        AppService::initialize().context("Failed to initialize application service")?;
    let header_color = parse_color(&service.config.theme.header_color)
        .map(Color::from)
        .unwrap_or(Color::Cyan);
    tracing::debug!(records = service.state.store.len(), "session ready");

    match cli_args.command {
        cli::Commands::GenerateCompletion { .. } => {
            // This case is handled above, but keep it exhaustive
            unreachable!("Completion generation should have exited already");
        }
        cli::Commands::List { sort } => {
            let mode = sort.map_or(service.state.sort_mode, Into::into);
            let records = service.state.store.ordered_view(mode);
            if export_csv {
                print_record_csv(&records, &service)?;
            } else {
                println!("Sorted by: {mode}");
                print_record_table(&records, &service, header_color);
            }
        }
        cli::Commands::Summary { metric } => {
            let metric = metric.map_or(service.config.chart_metric, Into::into);
            let summary = service.summary();
            if export_csv {
                print_summary_csv(&summary)?;
            } else {
                print_summary_table(&summary, header_color);
                println!();
                print_text_chart(&service.chart(metric), metric);
            }
        }
        cli::Commands::Check {
            water,
            exercise,
            calories,
        } => {
            let form = RecordForm::new(&water, &exercise, &calories);
            match form.validate() {
                Ok(fields) => println!(
                    "Valid record: {} L water, {} min exercise, {} calories.",
                    format_number(fields.water_liters),
                    format_number(fields.exercise_minutes),
                    format_number(fields.calories)
                ),
                Err(e) => bail!("Validation error: {e}"),
            }
        }
        cli::Commands::Config { action } => run_config_action(&mut service, action)?,
    }

    Ok(())
}

fn run_config_action(service: &mut AppService, action: cli::ConfigAction) -> Result<()> {
    match action {
        cli::ConfigAction::Show => {
            let config = &service.config;
            println!("Config file:          {}", service.get_config_path().display());
            println!("Default sort:         {}", config.default_sort);
            println!("Chart metric:         {}", config.chart_metric);
            println!("Date format:          {}", config.date_format);
            println!("Seed sample records:  {}", config.seed_sample_records);
            println!("Header color:         {}", config.theme.header_color);
        }
        cli::ConfigAction::Path => println!("{}", service.get_config_path().display()),
        cli::ConfigAction::SetSort { mode } => {
            service.set_default_sort(mode.into())?;
            println!("Default sort set to: {}", service.config.default_sort);
        }
        cli::ConfigAction::SetMetric { metric } => {
            service.set_chart_metric(metric.into())?;
            println!("Chart metric set to: {}", service.config.chart_metric);
        }
        cli::ConfigAction::SetDateFormat { format } => {
            service.set_date_format(&format)?;
            println!(
                "Date format set to: {} (today: {})",
                format,
                format_date(chrono::Local::now().date_naive(), &format)
            );
        }
        cli::ConfigAction::SetSeed { enabled } => {
            service.set_seed_sample_records(enabled)?;
            println!(
                "Sample records {}.",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        cli::ConfigAction::SetHeaderColor { color } => {
            service.set_header_color(&color)?;
            println!("Header color set to: {}", service.config.theme.header_color);
        }
    }
    Ok(())
}

// --- Table Printing Functions ---

fn print_record_table(records: &[Record], service: &AppService, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(header_color),
            Cell::new("Date").fg(header_color),
            Cell::new("Water (L)").fg(header_color),
            Cell::new("Exercise (min)").fg(header_color),
            Cell::new("Calories").fg(header_color),
        ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.id.to_string()),
            Cell::new(service.format_date(record)),
            Cell::new(format_number(record.water_liters())),
            Cell::new(format_number(record.exercise_minutes())),
            Cell::new(format_number(record.calories())),
        ]);
    }
    println!("{table}");
}

fn print_record_csv(records: &[Record], service: &AppService) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["Id", "Date", "Water_L", "Exercise_min", "Calories"])?;
    for record in records {
        writer.write_record([
            record.id.to_string(),
            record
                .date
                .map(|_| service.format_date(record))
                .unwrap_or_default(),
            format_number(record.water_liters()),
            format_number(record.exercise_minutes()),
            format_number(record.calories()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn print_summary_table(summary: &Summary, header_color: Color) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(format!("Metric ({} records)", summary.count)).fg(header_color),
            Cell::new("Total").fg(header_color),
            Cell::new("Average").fg(header_color),
            Cell::new("Max").fg(header_color),
        ]);

    for metric in Metric::ALL {
        let m = summary.metric(metric);
        table.add_row(vec![
            Cell::new(metric.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", m.total)),
            Cell::new(optional(m.average)),
            Cell::new(optional(m.max)),
        ]);
    }
    println!("{table}");
}

fn print_summary_csv(summary: &Summary) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["Metric", "Total", "Average", "Max"])?;
    for metric in Metric::ALL {
        let m = summary.metric(metric);
        writer.write_record([
            metric.label().to_string(),
            format!("{:.2}", m.total),
            m.average.map(|v| format!("{v:.2}")).unwrap_or_default(),
            m.max.map(|v| format!("{v:.2}")).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * CHART_WIDTH as f64).round() as usize
}

fn print_text_chart(points: &[ChartPoint], metric: Metric) {
    println!("{metric} per record:");
    if points.is_empty() {
        println!("  (no records)");
        return;
    }
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let label_width = points.iter().map(|p| p.label.len()).max().unwrap_or(0);
    for point in points {
        println!(
            "  {:>label_width$} | {} {}",
            point.label,
            "█".repeat(bar_length(point.value, max)),
            format_number(point.value),
        );
    }
}
