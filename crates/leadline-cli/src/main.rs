#![forbid(unsafe_code)]

//! Leadline CLI
//!
//! Command-line interface for the Leadline lead-capture ledger:
//! submit leads, inspect the admin report, export CSV, run the
//! retention sweep, and open canned hand-off links.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use leadline_admin::{AccessGate, AdminReport};
use leadline_capture::CaptureFlow;
use leadline_core::{AdminConfig, Condition, FormPayload, RemoteMirrorConfig};
use leadline_handoff::{Handoff, TemplateKey};
use leadline_ledger::{FileStore, Ledger};
use leadline_remote::MirrorClient;
use std::path::PathBuf;
use std::time::Duration;

/// Leadline — clinic lead-capture ledger and admin tooling
#[derive(Parser, Debug)]
#[command(name = "leadline")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the local ledger file
    #[arg(long, env = "LEADLINE_LEDGER_PATH", default_value = "leadline-ledger.json")]
    ledger_path: PathBuf,

    /// Clinic phone receiving hand-offs (E.164 digits, no plus sign)
    #[arg(long, env = "LEADLINE_CLINIC_PHONE", default_value = "917276861131")]
    clinic_phone: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a lead through the capture flow
    Submit {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Phone number
        #[arg(long)]
        phone: String,
        /// Condition label (keratoconus, post-surgery, irregular-cornea, other)
        #[arg(long)]
        condition: Option<Condition>,
        /// Free-text message
        #[arg(long)]
        message: Option<String>,
        /// Agree to the privacy policy
        #[arg(long)]
        consent: bool,
        /// Build the hand-off link without opening it
        #[arg(long)]
        no_open: bool,
    },
    /// Print the admin report (stats + listing, plus the mirror when configured)
    Report {
        /// Admin password
        #[arg(long)]
        password: Option<String>,
    },
    /// Export the ledger as CSV
    Export {
        /// Directory receiving the export file
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Admin password
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove leads older than the given age
    Purge {
        /// Maximum age in days; strictly older records are removed
        #[arg(long)]
        days: i64,
        /// Admin password
        #[arg(long)]
        password: Option<String>,
    },
    /// Open a canned hand-off template
    Handoff {
        /// Template key (schedule-fitting, book-imaging, start-program,
        /// general-inquiry, assessment, consultation)
        template: TemplateKey,
        /// Print the link without opening it
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let ledger = Ledger::new(FileStore::new(&args.ledger_path));
    let handoff = Handoff::new(&args.clinic_phone)?;
    let gate = AccessGate::new(AdminConfig::from_env());
    let mirror = RemoteMirrorConfig::from_env()
        .map(MirrorClient::new)
        .transpose()?;

    match args.command {
        Command::Submit {
            name,
            email,
            phone,
            condition,
            message,
            consent,
            no_open,
        } => {
            let mut payload = FormPayload::new(name, email, phone);
            payload.condition = condition;
            payload.message = message;
            payload.consent_given = consent;

            let mut flow = CaptureFlow::new(ledger, handoff, mirror);
            if no_open {
                flow = flow.without_launch();
            }
            match flow.submit(payload) {
                Ok(outcome) => {
                    println!("Lead captured: {}", outcome.record.id);
                    println!("Hand-off: {}", outcome.handoff_link);
                    if outcome.mirrored {
                        println!("Mirror write dispatched.");
                    }
                    // Give the fire-and-forget tasks a beat before exit.
                    tokio::time::sleep(Duration::from_millis(400)).await;
                }
                Err(err) if err.is_user_facing() => bail!("{err}"),
                Err(err) => return Err(err.into()),
            }
        }
        Command::Report { password } => {
            check_gate(&gate, password.as_deref())?;
            let report = AdminReport::new(ledger);
            print!("{}", report.render_text());
            if let Some(client) = &mirror {
                match report.fetch_mirror(client).await {
                    Ok(documents) => {
                        println!();
                        println!("Mirror ({}): {} documents", client.collection(), documents.len());
                        for doc in documents {
                            println!(
                                "  {}  {} <{}>",
                                doc.id, doc.data.name, doc.data.email
                            );
                        }
                    }
                    // Inline, not fatal: the local report already printed.
                    Err(err) => println!("\nMirror unavailable: {err}"),
                }
            }
        }
        Command::Export { dir, password } => {
            check_gate(&gate, password.as_deref())?;
            let report = AdminReport::new(ledger);
            match report.export_csv(&dir)? {
                Some(path) => println!("Exported {}", path.display()),
                None => println!("Ledger is empty; nothing to export."),
            }
        }
        Command::Purge { days, password } => {
            check_gate(&gate, password.as_deref())?;
            let mut report = AdminReport::new(ledger);
            let removed = report.purge(days);
            println!(
                "Removed {removed} lead(s) older than {days} day(s); {} remain.",
                report.stats().total
            );
        }
        Command::Handoff { template, no_open } => {
            let message = template.canned();
            let link = handoff.link_for(message);
            println!("{message}");
            println!();
            println!("{link}");
            if !no_open {
                handoff.open(message);
                tokio::time::sleep(Duration::from_millis(400)).await;
            }
        }
    }

    Ok(())
}

fn check_gate(gate: &AccessGate, password: Option<&str>) -> Result<()> {
    if !gate.verify(password) {
        bail!("incorrect admin password");
    }
    Ok(())
}
