use classifier_flow::{FlowStep, ResultFields};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn marked(marker: ColoredString, message: ColoredString) {
    println!("{marker} {message}");
}

/// A line that is followed by more work, flushed so it shows before the work starts
pub fn status_message(message: &str) {
    marked("⏳".yellow(), format!("{message} ...").bright_white());
    let _ = io::stdout().flush();
}

pub fn success_message(message: &str) {
    marked("✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    marked("⚠️ ".yellow(), message.yellow());
}

pub fn info_message(message: &str) {
    marked("ℹ️ ".blue(), message.blue());
}

pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {title} ====").cyan().bold());
}

/// A flow step that has finished, e.g. `✅ 2. AI Analysis`
pub fn step_done(step: FlowStep) {
    marked(
        format!("  {}", "✅".green()).normal(),
        format!("{}. {}", step.number(), step.label()).green(),
    );
}

/// The three result fields, labels aligned
pub fn result_block(fields: &ResultFields) {
    section_header("Routing Result");
    for (label, value) in [
        ("Detected Intent", &fields.intent),
        ("Assigned Agent", &fields.agent),
        ("Processing Time", &fields.processing_time),
    ] {
        println!(
            "  {:<17}{}",
            format!("{label}:").bright_white(),
            value.cyan().bold()
        );
    }
}
