use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ec_app::{
    AppError, AppResult, ReportOptions, ReportRequest, export, project_service, query,
    report_service,
};
use ec_format::{format_number, format_percent};
use ec_indicators::{BuildingIndicatorSet, Category, CategoryIndicator, classify_range_text};
use ec_project::MaterialCache;

#[derive(Parser)]
#[command(name = "ec-cli")]
#[command(about = "Building energy compliance indicators from enclosure results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project file (YAML, JSON, or backend JSON array)
        project_path: PathBuf,
    },
    /// Compute building indicators
    Report {
        /// Path to the project file
        project_path: PathBuf,
        /// Print the indicator set as JSON
        #[arg(long)]
        json: bool,
        /// Skip cache and force recomputation
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached reports for a project
    Reports {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Export indicator tables as CSV
    Export {
        /// Path to the project file
        project_path: PathBuf,
        /// Export the per-enclosure table instead of the building indicators
        #[arg(long)]
        enclosures: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Classify every facade of a project by orientation
    Facades {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Classify a single azimuth range, e.g. "-67,5° ≤ Az < -45°"
    Orientation {
        /// Azimuth range text
        #[arg(allow_hyphen_values = true)]
        range: String,
    },
    /// Format a value for display in the es-CL convention
    Format {
        /// Raw value (number or text)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Format as a percentage
        #[arg(long)]
        percent: bool,
    },
    /// Look up materials by code
    Material {
        /// Path to the project file
        project_path: PathBuf,
        /// Material codes
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Report {
            project_path,
            json,
            no_cache,
        } => cmd_report(&project_path, json, !no_cache),
        Commands::Reports { project_path } => cmd_reports(&project_path),
        Commands::Export {
            project_path,
            enclosures,
            output,
        } => cmd_export(&project_path, enclosures, output.as_deref()),
        Commands::Facades { project_path } => cmd_facades(&project_path),
        Commands::Orientation { range } => cmd_orientation(&range),
        Commands::Format { value, percent } => {
            cmd_format(&value, percent);
            Ok(())
        }
        Commands::Material {
            project_path,
            codes,
        } => cmd_material(&project_path, &codes),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;

    let summary = project_service::summarize_project(&project);
    println!("✓ Project is valid");
    println!("  Name: {}", summary.name);
    if summary.enclosure_count == 0 {
        println!("  Enclosures: 0 (indicators will be zero)");
    } else {
        println!("  Enclosures: {}", summary.enclosure_count);
    }
    println!("  Floor area: {} m²", format_number(summary.total_area_m2));
    println!("  Facades: {}", summary.facade_count);
    println!("  Materials: {}", summary.material_count);
    if summary.incomplete_enclosures > 0 {
        println!(
            "  {} enclosure(s) have empty fields, read as 0",
            summary.incomplete_enclosures
        );
    }
    Ok(())
}

fn cmd_report(project_path: &Path, json: bool, use_cache: bool) -> AppResult<()> {
    let request = ReportRequest {
        project_path,
        options: ReportOptions {
            use_cache,
            ..Default::default()
        },
    };
    let response = report_service::ensure_report(&request)?;

    if json {
        let text = serde_json::to_string_pretty(&response.indicators)
            .map_err(|e| AppError::Results(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.report_id);
    } else {
        println!("✓ Report computed: {}", response.report_id);
    }
    print_indicators(&response.indicators);
    Ok(())
}

fn print_indicators(set: &BuildingIndicatorSet) {
    println!(
        "\n{} enclosures, {} m²",
        set.enclosure_count,
        format_number(set.total_area)
    );
    println!(
        "\n  {:<14} {:>12} {:>16} {:>16} {:>10}",
        "", "kWh/m² año", "kWh año", "caso base", "vs base"
    );
    for category in Category::ALL {
        print_row(category.label(), set.category(category));
    }
    print_row("Total", &set.combined);

    println!(
        "\n  CO2 eq: {} kg/año (caso base {}, {})",
        format_number(set.co2.total),
        format_number(set.co2.baseline_total),
        format_percent(set.co2.comparison_to_baseline.as_str())
    );
    println!(
        "  Horas disconfort: {}",
        format_number(set.disconfort_hours_total)
    );
}

fn print_row(label: &str, ind: &CategoryIndicator) {
    println!(
        "  {:<14} {:>12} {:>16} {:>16} {:>10}",
        label,
        format_number(ind.per_area_annual),
        format_number(ind.annual_total),
        format_number(ind.baseline_annual_total),
        format_percent(ind.percent_vs_baseline.as_str())
    );
}

fn cmd_reports(project_path: &Path) -> AppResult<()> {
    let reports = report_service::list_reports(project_path)?;

    if reports.is_empty() {
        println!("No cached reports found");
    } else {
        println!("Cached reports:");
        for manifest in reports {
            println!(
                "  {} ({}, {} enclosures, engine {})",
                manifest.report_id,
                manifest.timestamp,
                manifest.enclosure_count,
                manifest.engine_version
            );
        }
    }
    Ok(())
}

fn cmd_export(project_path: &Path, enclosures: bool, output: Option<&Path>) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;

    let (rows, csv) = if enclosures {
        let rows = query::enclosure_rows(&project);
        let csv = export::enclosures_csv(&rows)?;
        (rows.len(), csv)
    } else {
        let (_, indicators) = report_service::compute_indicators(&project);
        (Category::ALL.len() + 3, export::indicators_csv(&indicators)?)
    };

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} rows to {}", rows, path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_facades(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let facades = query::classify_facades(&project)?;

    if facades.is_empty() {
        println!("No facades found in project");
    } else {
        println!("Facades:");
        for f in facades {
            println!(
                "  {} - {}: {} ({}, midpoint {:.2}°)",
                f.facade_id,
                f.name,
                f.orientation.full_name(),
                f.orientation,
                f.range.midpoint()
            );
        }
    }
    Ok(())
}

fn cmd_orientation(range: &str) -> AppResult<()> {
    let orientation = classify_range_text(range)?;
    println!("{} ({})", orientation.full_name(), orientation);
    Ok(())
}

fn cmd_format(value: &str, percent: bool) {
    let text = if percent {
        format_percent(value)
    } else {
        format_number(value)
    };
    println!("{}", text);
}

fn cmd_material(project_path: &Path, codes: &[String]) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let mut cache = MaterialCache::new();
    let found = query::lookup_materials(&project, &mut cache, codes)?;

    for (code, material) in found {
        match material {
            Some(m) => {
                println!("  {} - {}", m.code, m.name);
                println!("    λ = {} W/m·K", format_number(m.conductivity_w_mk));
                if let Some(rho) = m.density_kg_m3 {
                    println!("    ρ = {} kg/m³", format_number(rho));
                }
                if let Some(cp) = m.specific_heat_j_kgk {
                    println!("    cp = {} J/kg·K", format_number(cp));
                }
            }
            None => println!("  {} - not found", code),
        }
    }
    tracing::debug!(hits = cache.hits(), misses = cache.misses(), "material lookup done");
    Ok(())
}
