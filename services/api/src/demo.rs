use crate::infra::{read_text, LogNotificationPublisher};
use boss_vent::config::AppConfig;
use boss_vent::error::AppError;
use boss_vent::telemetry;
use boss_vent::workflows::feedback::categorize;
use boss_vent::workflows::report::{BossReport, BossReportGenerator, VentAnalysis};
use boss_vent::workflows::vent::{VentService, VentServiceError, VentSession};
use chrono::Utc;
use clap::Args;
use serde_json::json;
use std::io::BufRead;
use std::sync::Arc;

const DEMO_SCENARIOS: &[(&str, &str)] = &[
    ("General", "I think the office plants need more water."),
    ("Workload", "My workload is too much"),
    (
        "Workload + unfairness",
        "I'm so stretched thin with this workload, and on top of that, it feels like I'm being singled out and blamed for things that aren't my fault. It's just really unfair.",
    ),
    ("Vulgarity only", "This is all just a load of shit!"),
    (
        "Vulgarity + workload",
        "This fucking workload is absolutely insane! I am so burnt out and I just can't handle these unrealistic deadlines anymore.",
    ),
    (
        "Micromanagement + communication",
        "It's bullshit that I have no autonomy and you're constantly breathing down my neck, and the communication about what's expected is so damn unclear.",
    ),
];

#[derive(Args, Debug, Default)]
pub(crate) struct TextArgs {
    /// Transcript text. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) text: Option<String>,
    /// Print JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VentArgs {
    /// Address of the manager receiving the anonymous report
    #[arg(long)]
    pub(crate) boss_email: String,
    /// Print JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: TextArgs) -> Result<(), AppError> {
    let TextArgs { text, json } = args;
    let text = read_text(text)?;

    let (report, analysis) = BossReportGenerator::standard().generate_with_analysis(&text);
    if json {
        print_json(&report, &analysis)?;
    } else {
        render_report(&report, &analysis);
    }
    Ok(())
}

pub(crate) fn run_feedback(args: TextArgs) -> Result<(), AppError> {
    let TextArgs { text, json } = args;
    let text = read_text(text)?;

    let category = categorize(&text);
    if json {
        let payload = json!({
            "category": category,
            "feedback": category.message(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", category.message());
    }
    Ok(())
}

pub(crate) fn run_vent(args: VentArgs) -> Result<(), AppError> {
    let VentArgs { boss_email, json } = args;

    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;

    let service = VentService::new(
        Arc::new(LogNotificationPublisher),
        config.notification.template.clone(),
    );

    let mut session = VentSession::new();
    session
        .set_boss_email(&boss_email)
        .map_err(VentServiceError::from)?;
    session.start(Utc::now()).map_err(VentServiceError::from)?;
    eprintln!("Listening. Enter one segment per line; end input (Ctrl-D) to stop venting.");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        session
            .append_final_segment(&line)
            .map_err(VentServiceError::from)?;
    }

    let completed = session
        .stop(service.generator(), service.template(), Utc::now())
        .map_err(VentServiceError::from)?;
    service.deliver(&completed)?;

    let report = completed.notification.report();
    if json {
        println!("{}", serde_json::to_string_pretty(&completed)?);
    } else {
        println!("Anonymous feedback sent to {}", completed.notification.boss_email);
        render_report(&report, &completed.analysis);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let generator = BossReportGenerator::standard();

    if args.json {
        let scenarios = DEMO_SCENARIOS
            .iter()
            .map(|(label, text)| {
                let (report, analysis) = generator.generate_with_analysis(text);
                json!({
                    "scenario": label,
                    "text": text,
                    "report": report,
                    "analysis": analysis,
                })
            })
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&scenarios)?);
        return Ok(());
    }

    println!("Boss vent demo");
    for (label, text) in DEMO_SCENARIOS {
        let (report, analysis) = generator.generate_with_analysis(text);
        println!("\n=== {label} ===");
        println!("Vent: \"{text}\"");
        render_report(&report, &analysis);
    }
    Ok(())
}

fn print_json(report: &BossReport, analysis: &VentAnalysis) -> Result<(), AppError> {
    let payload = json!({
        "rephrased_vent_statements": report.rephrased_vent_statements,
        "suggestions_for_boss": report.suggestions_for_boss,
        "analysis": analysis,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn theme_summary(analysis: &VentAnalysis) -> String {
    if analysis.is_general() {
        "none".to_string()
    } else {
        analysis.theme_labels().join(", ")
    }
}

fn render_report(report: &BossReport, analysis: &VentAnalysis) {
    println!(
        "Themes: {} | emotional intensity: {}",
        theme_summary(analysis),
        if analysis.emotional_intensity { "high" } else { "normal" }
    );
    println!("\nWhat your team member said (rephrased):");
    println!("{}", report.rephrased_vent_statements);
    println!("\nSuggestions for you:");
    println!("{}", report.suggestions_for_boss);
}
