//! CLI command implementations

use crate::agents::StaticKnowledgeBase;
use crate::config::Config;
use crate::orchestration::Orchestrator;
use crate::shell;
use anyhow::Result;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

/// Query and image used by the scripted demo
const DEMO_QUERY: &str = "Can you check this MRI for any anomalies?";
const DEMO_IMAGE: &str = "./data/test/scan_04.jpg";

/// Run the scripted stakeholder demo, then offer the interactive shell
pub async fn run_demo(config: &Config) -> Result<()> {
    println!(
        "{}",
        "=== MULTI-AGENT HEALTHCARE VISION SYSTEM ===".bold().cyan()
    );
    println!();
    println!("Demonstrating integration of:");
    println!(
        "  • {} - structured findings from MRI scans",
        "vision agent".green()
    );
    println!(
        "  • {} - cross-references findings against reference data",
        "validation agent".green()
    );
    println!(
        "  • {} - sequences agents and synthesizes the report",
        "orchestrator".green()
    );
    println!();
    println!("{}", "--- RUNNING AUTOMATED DEMO ---".bold());

    let mut orchestrator = Orchestrator::from_config(config)?;
    let report = orchestrator
        .process_request(DEMO_QUERY, Some(DEMO_IMAGE))
        .await?;
    println!("{report}");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    if shell::confirm(
        "Would you like to enter interactive mode?",
        &mut input,
        &mut out,
    )? {
        shell::run_menu_loop(&mut orchestrator, &mut input, &mut out).await?;
    }

    Ok(())
}

/// Analyze a single image reference
pub async fn run_analyze(config: &Config, image: &str, query: &str, format: &str) -> Result<()> {
    let mut orchestrator = Orchestrator::from_config(config)?;

    match format {
        "json" => {
            let (diagnostic, validation) = orchestrator.run_pipeline(query, image).await?;
            let payload = serde_json::json!({
                "diagnostic": diagnostic,
                "validation": validation,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        _ => {
            let report = orchestrator.process_request(query, Some(image)).await?;
            println!("{report}");
        }
    }

    Ok(())
}

/// Print the knowledge-base reference table
pub fn run_knowledge(format: &str) -> Result<()> {
    let entries = StaticKnowledgeBase::entries();

    match format {
        "json" => {
            let mut map = serde_json::Map::new();
            for (label, record) in entries {
                map.insert(label.to_string(), serde_json::to_value(record)?);
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::Value::Object(map))?
            );
        }
        _ => {
            // Table output
            #[derive(Tabled)]
            struct ReferenceRow {
                #[tabled(rename = "Diagnosis")]
                diagnosis: &'static str,
                #[tabled(rename = "Severity")]
                severity: String,
                #[tabled(rename = "ICD-10")]
                icd_code: String,
                #[tabled(rename = "Survival Rate")]
                survival_rate: String,
                #[tabled(rename = "Common Treatments")]
                treatments: String,
            }

            let rows: Vec<ReferenceRow> = entries
                .into_iter()
                .map(|(label, record)| ReferenceRow {
                    diagnosis: label,
                    severity: record.severity,
                    icd_code: record.icd_code.unwrap_or_else(|| "N/A".to_string()),
                    survival_rate: record.survival_rate.unwrap_or_else(|| "N/A".to_string()),
                    treatments: record.common_treatments.join(", "),
                })
                .collect();

            println!("{}", "KNOWLEDGE BASE REFERENCE DATA".bold());
            println!();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}
