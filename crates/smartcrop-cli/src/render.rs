//! Terminal rendering of shells and screens.

use colored::Colorize;
use smartcrop_application::{AdvisoryApp, Line, Screen, Shell};

pub fn print_line(line: &Line) {
    match line {
        Line::Heading(text) => println!("\n{}", text.bright_green().bold()),
        Line::Text(text) => println!("{}", text),
        Line::Bullet(text) => println!("  • {}", text),
        Line::Muted(text) => println!("{}", text.bright_black()),
        Line::Code(text) => {
            for row in text.lines() {
                println!("  {}", row.cyan());
            }
        }
        Line::Link { label, path } => {
            println!("  {} {}", label.bright_blue().underline(), format!("({path})").bright_black())
        }
    }
}

pub fn print_screen(screen: &Screen) {
    if !screen.title.is_empty() {
        println!("\n{}", screen.title.bright_magenta().bold());
    }
    for line in &screen.lines {
        print_line(line);
    }
}

fn print_rule() {
    println!("{}", "─".repeat(60).bright_black());
}

pub fn print_framed(shell: &Shell, screen: &Screen) {
    for line in &shell.header {
        print_line(line);
    }
    print_rule();
    print_screen(screen);
    print_rule();
    for line in &shell.footer {
        print_line(line);
    }
}

/// Renders the active view inside the shell. Prints nothing if no view is mounted.
pub async fn show_active(app: &AdvisoryApp) {
    if let Some(view) = app.active().await {
        let screen = view.render().await;
        print_framed(&app.shell().await, &screen);
    }
}

pub fn notice(message: &str) {
    println!("{}", message.bright_yellow());
}

pub fn failure(message: &str) {
    eprintln!("{}", message.red());
}
