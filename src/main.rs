//! Portfolio Core - Main entry point
//!
//! Renders the portfolio content as plain text and runs the contact form
//! interactively, with the terminal standing in for the browser.

use anyhow::Result;
use portfolio_core::{
    delivery, Config, ContactController, FormField, Metrics, Profile, SubmissionState,
};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, stdout carries the rendered page)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let metrics = Metrics::new();
    let delivery = delivery::select(&config, metrics.clone());
    let mut controller = ContactController::new(delivery, metrics);

    let profile = Profile::standard();
    render(&profile);

    run_contact_form(&mut controller).await?;

    info!("Portfolio session complete");
    Ok(())
}

/// Print the page sections top to bottom.
fn render(profile: &Profile) {
    println!("HELLO I'M\n{}", profile.name);
    println!("A Passionate {}", profile.hero_roles.join(" / "));
    println!("{}\n", profile.tagline);

    println!("== About Me ==");
    for paragraph in &profile.about {
        println!("{}\n", paragraph);
    }
    for stat in &profile.stats {
        println!("  {:<5} {}", stat.value, stat.label);
    }

    println!("\n== Education ==");
    for entry in &profile.education {
        println!("  {}\n  {} ({})\n", entry.degree, entry.school, entry.years);
    }

    println!("== Technical Skills ==");
    for group in &profile.skills {
        println!("  {}: {}", group.title, group.items);
    }

    println!("\n== Projects ==");
    for project in &profile.projects {
        println!(
            "  {} - {} [{}]",
            project.name, project.subtitle, project.status
        );
        println!("  {}", project.summary);
        for highlight in &project.highlights {
            println!("    - {}", highlight);
        }
        println!("  {}", project.url);
    }

    println!("\n== Get In Touch ==");
    println!("  Email: {}", profile.contact.email);
    println!("  Phone: {}", profile.contact.phone);
    for link in &profile.social {
        println!("  {}: {}", link.label, link.url);
    }
    println!();
}

/// Drive the contact form until the message is sent or input ends.
async fn run_contact_form(controller: &mut ContactController) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let fields = [
            (FormField::Name, "Your Name *"),
            (FormField::Email, "Your Email *"),
            (FormField::Phone, "Your Phone (Optional)"),
            (FormField::Message, "Your Message *"),
        ];
        for (field, label) in fields {
            let Some(value) = prompt(&mut lines, label)? else {
                return Ok(()); // EOF: leave without submitting
            };
            controller.edit(field, &value);
        }

        println!("Sending...");
        let state = controller.submit().await.clone();

        match state {
            SubmissionState::Succeeded(message) => {
                println!("{}", message);
                return Ok(());
            }
            SubmissionState::Failed(message) => {
                println!("{}", message);
                let Some(answer) = prompt(&mut lines, "Retry? [y/N]")? else {
                    return Ok(());
                };
                if answer.trim().eq_ignore_ascii_case("y") {
                    // Form contents were preserved, resubmit as-is.
                    if let SubmissionState::Succeeded(message) = controller.submit().await {
                        println!("{}", message);
                        return Ok(());
                    }
                    println!("Still failing, giving up for now.");
                }
                return Ok(());
            }
            SubmissionState::Idle => {
                // Validation failed: show the inline errors and re-prompt.
                for (field, message) in controller.errors().iter() {
                    println!("  {}: {}", field, message);
                }
            }
            SubmissionState::Submitting => unreachable!("submit resolved while in flight"),
        }
    }
}

/// Show a prompt and read one line; `None` on end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
