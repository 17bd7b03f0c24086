mod adapters;
mod application;
mod audit;
mod cli;
mod config;
mod ports;
mod server;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    FileSystemReader, FileSystemReportStore, FileSystemWriter, StdoutPresenter,
};
use adapters::outbound::network::PyPiRegistry;
use application::dto::AuditRequest;
use application::factories::{FormatterFactory, FormatterType};
use application::use_cases::RunAuditUseCase;
use audit::domain::AuditReport;
use audit::services::{Denylist, VersionResolver};
use cli::{Args, Command, OutputFormat};
use config::{discover_config, load_config_from_path, AppConfig};
use ports::outbound::{OutputPresenter, ReportStore, RequirementsReader};
use server::AppState;
use shared::error::{AuditError, ExitCode};
use shared::Result;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Audit {
            file,
            format,
            output,
            storage_dir,
            config,
            deny,
        } => run_audit_command(file, format, output, storage_dir, config, deny).await,
        Command::Serve {
            listen,
            storage_dir,
            config,
        } => {
            run_serve_command(listen, storage_dir, config).await?;
            Ok(ExitCode::Success)
        }
    }
}

async fn run_audit_command(
    file: PathBuf,
    format: OutputFormat,
    output: Option<String>,
    storage_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    deny: Vec<String>,
) -> Result<ExitCode> {
    let mut app_config = resolve_config(config)?;
    if let Some(dir) = storage_dir {
        app_config.storage_dir = dir;
    }

    // Read the input file; the report is keyed by its file name
    let reader = FileSystemReader::new();
    let content = reader.read_requirements(&file)?;
    let report_name = report_name_for(&file)?;

    // Create adapters (Dependency Injection)
    let registry = PyPiRegistry::with_settings(&app_config.registry_url, app_config.lookup_timeout)?;
    let progress_reporter = StderrProgressReporter::new();
    let denylist = if deny.is_empty() {
        denylist_from_config(&app_config)
    } else {
        Denylist::from_names(deny)
    };

    // Create use case with injected dependencies
    let use_case = RunAuditUseCase::new(registry, progress_reporter, denylist)
        .with_resolver(VersionResolver::new(app_config.max_concurrent_lookups));

    let request = AuditRequest::new(&report_name, &content);
    let response = use_case.execute(request).await?;

    // Persist the raw source and both artifact projections
    let store = FileSystemReportStore::new(&app_config.storage_dir)?;
    store.persist_source(&report_name, &content)?;
    store.persist(&response.report)?;

    // Convert CLI format to application layer format type
    let formatter_type = match format {
        OutputFormat::Summary => FormatterType::Summary,
        OutputFormat::Csv => FormatterType::Csv,
        OutputFormat::Json => FormatterType::Json,
    };

    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    // Create formatter using factory and present the selected projection
    let formatter = FormatterFactory::create(formatter_type);
    let formatted_output = formatter.format(&response.report)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&formatted_output)?;

    Ok(exit_code_for(&response.report))
}

async fn run_serve_command(
    listen: Option<SocketAddr>,
    storage_dir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut app_config = resolve_config(config)?;
    if let Some(dir) = storage_dir {
        app_config.storage_dir = dir;
    }
    if let Some(addr) = listen {
        app_config.listen = addr;
    }

    let state = AppState::new(&app_config)?;
    server::serve(state, app_config.listen).await
}

/// Loads the explicit config file, or discovers one in the working directory
fn resolve_config(config: Option<PathBuf>) -> Result<AppConfig> {
    let config_file = match config {
        Some(path) => Some(load_config_from_path(&path)?),
        None => discover_config(Path::new("."))?,
    };
    Ok(AppConfig::from_file(config_file))
}

fn denylist_from_config(app_config: &AppConfig) -> Denylist {
    match &app_config.denylist {
        Some(names) => Denylist::from_names(names.clone()),
        None => Denylist::default(),
    }
}

/// The report key is the plain file name of the audited file
fn report_name_for(file: &Path) -> Result<String> {
    file.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            AuditError::InvalidReportName {
                name: file.display().to_string(),
                reason: "path has no usable file name".to_string(),
            }
            .into()
        })
}

/// Denylisted dependencies flip the exit code for CI integration
fn exit_code_for(report: &AuditReport) -> ExitCode {
    if report.has_illegal_dependencies() {
        ExitCode::IllegalDependenciesDetected
    } else {
        ExitCode::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::services::ReportAggregator;
    use std::collections::BTreeSet;

    #[test]
    fn test_report_name_for_plain_file() {
        let name = report_name_for(Path::new("dir/sub/requirements.txt")).unwrap();
        assert_eq!(name, "requirements.txt");
    }

    #[test]
    fn test_report_name_for_root_path() {
        assert!(report_name_for(Path::new("/")).is_err());
    }

    #[test]
    fn test_exit_code_clean_report() {
        let report = ReportAggregator::assemble("deps.txt", vec![], vec![], BTreeSet::new());
        assert_eq!(exit_code_for(&report), ExitCode::Success);
    }

    #[test]
    fn test_exit_code_illegal_report() {
        let report = ReportAggregator::assemble(
            "deps.txt",
            vec![],
            vec![],
            ["malware-lib".to_string()].into_iter().collect(),
        );
        assert_eq!(exit_code_for(&report), ExitCode::IllegalDependenciesDetected);
    }

    #[test]
    fn test_denylist_from_config_default() {
        let config = AppConfig::default();
        let denylist = denylist_from_config(&config);
        assert!(denylist.contains("malware-lib"));
    }

    #[test]
    fn test_denylist_from_config_custom() {
        let config = AppConfig {
            denylist: Some(vec!["internal-fork".to_string()]),
            ..AppConfig::default()
        };
        let denylist = denylist_from_config(&config);
        assert!(denylist.contains("internal-fork"));
        assert!(!denylist.contains("malware-lib"));
    }
}
