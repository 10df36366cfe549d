//! Interactive demo shell
//!
//! Menu-driven walkthrough of the pipeline for stakeholder presentations.
//! The loop is generic over its input/output streams so tests can drive it
//! with in-memory buffers.

use crate::orchestration::Orchestrator;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Query and image used by the sample-analysis menu option
pub const SAMPLE_QUERY: &str = "Can you analyze this brain MRI for any anomalies?";
pub const SAMPLE_IMAGE: &str = "./data/test/patient_scan_001.jpg";

pub const INVALID_OPTION_MESSAGE: &str = "Invalid option. Please select 1, 2, or 3.";

const ARCHITECTURE: &str = r#"
    ┌─────────────────────────────────────────────────────────┐
    │              MULTI-AGENT SYSTEM ARCHITECTURE            │
    └─────────────────────────────────────────────────────────┘

         ┌──────────────┐
         │  User Input  │
         │  (MRI Scan)  │
         └──────┬───────┘
                │
                ▼
    ┌───────────────────────┐
    │      ORCHESTRATOR     │
    │   (request routing)   │
    └───────────┬───────────┘
                │
       ┌────────┴────────┐
       │                 │
       ▼                 ▼
┌─────────────┐   ┌─────────────────┐
│   VISION    │   │    VALIDATION   │
│    AGENT    │   │      AGENT      │
│ (simulated) │   │ (static table)  │
└──────┬──────┘   └────────┬────────┘
       │                   │
       │   structured      │
       │    records        │
       └─────────┬─────────┘
                 │
                 ▼
         ┌──────────────┐
         │   CLINICAL   │
         │    REPORT    │
         └──────────────┘
"#;

/// Run the shell against stdin/stdout
pub async fn run_interactive(orchestrator: &mut Orchestrator) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    run_menu_loop(orchestrator, &mut input, &mut out).await
}

/// The menu loop itself
///
/// Loops until the user selects exit or the input stream ends. Unrecognized
/// selections print a message and re-present the menu.
pub async fn run_menu_loop<R: BufRead, W: Write>(
    orchestrator: &mut Orchestrator,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "=== MEDICAL MULTI-AGENT SYSTEM - INTERACTIVE DEMO ===".bold().cyan()
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "This demo simulates how the vision agent integrates into a larger"
    )?;
    writeln!(out, "healthcare AI pipeline.")?;

    loop {
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(40))?;
        writeln!(out, "OPTIONS:")?;
        writeln!(out, "  [1] Analyze sample MRI scan")?;
        writeln!(out, "  [2] View system architecture")?;
        writeln!(out, "  [3] Exit")?;
        writeln!(out, "{}", "-".repeat(40))?;
        write!(out, "Select option: ")?;
        out.flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            // EOF: leave the loop the same way exit does
            break;
        }

        match choice.trim() {
            "1" => {
                let report = orchestrator
                    .process_request(SAMPLE_QUERY, Some(SAMPLE_IMAGE))
                    .await?;
                writeln!(out, "{report}")?;
            }
            "2" => {
                writeln!(out, "{ARCHITECTURE}")?;
            }
            "3" => break,
            _ => {
                writeln!(out, "{INVALID_OPTION_MESSAGE}")?;
            }
        }
    }

    writeln!(out)?;
    let history = orchestrator.history();
    if let Some(last) = history.last() {
        writeln!(
            out,
            "Analyses run this session: {} (last: {} at {}).",
            history.len(),
            last.diagnosis,
            last.completed_at.format("%H:%M:%S")
        )?;
    }
    writeln!(out, "Exiting multi-agent demo. Goodbye!")?;
    Ok(())
}

/// Ask a yes/no question; anything but `y` counts as no
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{prompt} (y/n): ")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
