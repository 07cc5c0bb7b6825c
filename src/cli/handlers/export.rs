//! Handler for the `export` command.

use anyhow::{Result, bail};
use tracing::debug;

use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::ExportArgs;
use crate::domain::{ExportConfig, FormValues, fields};
use crate::export::{ExportReport, run};
use crate::source::SqliteConnector;

/// Collects the submitted form values from command-line options.
///
/// Only options the user actually gave are included, so config file and
/// built-in defaults stay in place for the rest.
pub fn submitted_values(args: &ExportArgs) -> FormValues {
    let mut values = FormValues::new();
    let text_fields = [
        (fields::DB_HOST, &args.db_host),
        (fields::DB_NAME, &args.db_name),
        (fields::DB_USER, &args.db_user),
        (fields::DB_PASS, &args.db_pass),
        (fields::TABLE_PREFIX, &args.table_prefix),
        (fields::OUTPUT_DIR, &args.output_dir),
        (fields::EXPORT_FORMAT, &args.export_format),
    ];
    for (key, value) in text_fields {
        if let Some(value) = value {
            values.set(key, value.clone());
        }
    }
    if args.export_pages {
        values.set(fields::EXPORT_PAGES, "1");
    }
    if args.trust_content {
        values.set(fields::TRUST_CONTENT, "1");
    }
    values
}

/// Validates the submitted values and runs the export.
///
/// Configuration errors become an error report, like every other failure.
pub fn export_report(args: &ExportArgs, config: &Config) -> ExportReport {
    let values = config.form_defaults().merged(&submitted_values(args));
    let server = config.server(
        args.document_root.as_ref(),
        args.server_host.as_ref(),
        args.https,
    );

    let export_config = match ExportConfig::from_form(&values, server) {
        Ok(c) => c,
        Err(err) => {
            let output_dir = values.get(fields::OUTPUT_DIR).unwrap_or_default();
            return ExportReport::failed(format!("Configuration error: {}", err), output_dir.into());
        }
    };
    debug!(config = ?export_config, "resolved export configuration");

    let connector = SqliteConnector::new(config.data_dir(args.data_dir.as_ref()));
    run(&export_config, &connector)
}

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs, config: &Config) -> Result<()> {
    let report = export_report(args, config);
    print_report(&args.format, &report)?;

    if report.is_error() {
        bail!("export failed");
    }
    Ok(())
}

/// Print the report in the requested format.
fn print_report(format: &OutputFormat, report: &ExportReport) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", report.message()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(report))?);
        }
    }
    Ok(())
}
