use std::path::Path;

use console::style;

pub fn banner(dest: &Path) {
    let line = style("=".repeat(39)).cyan();
    println!();
    println!("{line}");
    println!("{}", style("Hi! Welcome to the Play generator.").cyan().bold());
    println!();
    println!("Your new project will be scaffolded out in:");
    println!("{}", style(dest.display()).cyan());
    println!("{line}");
    println!();
}

pub fn stage_begin(label: &str) {
    println!("{} {}", style("->").cyan(), style(label).cyan());
}

pub fn stage_done(label: &str) {
    println!("{} {} done", style("✓").green(), label);
}

pub fn stage_skipped(label: &str) {
    println!("{} {} skipped", style("-").dim(), style(label).dim());
}

pub fn note(message: &str) {
    println!("  {}", style(message).cyan());
}

pub fn warn(message: &str) {
    eprintln!("{} {}", style("!").yellow(), style(message).yellow());
}

pub fn outro() {
    let line = style("=".repeat(43)).cyan();
    println!();
    println!("{line}");
    println!("{}", style("You are now officially ready to rock.").green().bold());
    println!("Have fun!");
    println!();
    println!("Type \"play24\" to launch the play/sbt console.");
    println!("{line}");
    println!();
}
