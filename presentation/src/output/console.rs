//! Console output formatter for conversation runs

use colored::Colorize;
use colloquy_domain::{Model, Participant, Topic, TurnReport, UsageRecord, UsageSummary};

const WIDTH: usize = 60;

/// Formats conversation output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Banner printed before the first turn
    pub fn run_header(topic: &Topic, participants: &[Participant], max_turns: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Round-Robin Conversation"));
        output.push('\n');

        output.push_str(&format!("\n{} {}\n", "Topic:".cyan().bold(), topic));

        output.push_str(&format!("\n{}\n", "Participants:".cyan().bold()));
        let width = participants
            .iter()
            .map(|p| p.name().chars().count())
            .max()
            .unwrap_or(0);
        for participant in participants {
            output.push_str(&format!(
                "  {:<width$} → {} ({})\n",
                participant.name(),
                participant.model(),
                participant.provider(),
                width = width
            ));
        }

        output.push_str(&format!("\n{} {}\n", "Max turns:".cyan().bold(), max_turns));
        output.push_str(&Self::rule('='));
        output
    }

    /// `[<name> is speaking...]`
    pub fn speaking(speaker: &Participant) -> String {
        format!("[{} is speaking...]", speaker.name())
            .dimmed()
            .to_string()
    }

    /// One turn: upper-cased speaker between rules, then the message
    pub fn turn(report: &TurnReport) -> String {
        let name = report.speaker().to_uppercase();
        let heading = if report.failed {
            format!("{}:", name).red().bold()
        } else {
            format!("{}:", name).yellow().bold()
        };

        let mut output = format!(
            "\n{}\n{}\n{}\n{}",
            "=".repeat(WIDTH).cyan(),
            heading,
            "-".repeat(WIDTH),
            report.content()
        );

        if let Some(usage) = &report.usage {
            output.push('\n');
            output.push_str(&Self::usage_line(usage));
        }

        output
    }

    /// `[Tokens: X in / Y out | Cost: $0.000000]`
    pub fn usage_line(record: &UsageRecord) -> String {
        format!(
            "   [Tokens: {} in / {} out | Cost: ${:.6}]",
            record.input_tokens, record.output_tokens, record.cost
        )
        .dimmed()
        .to_string()
    }

    /// Totals block printed after the last turn
    pub fn cost_summary(summary: &UsageSummary) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Cost Summary"));
        output.push('\n');
        output.push_str(&format!(
            "Total Input Tokens:  {}\n",
            Self::thousands(summary.total_input_tokens)
        ));
        output.push_str(&format!(
            "Total Output Tokens: {}\n",
            Self::thousands(summary.total_output_tokens)
        ));
        output.push_str(&format!(
            "Total Tokens:        {}\n",
            Self::thousands(summary.total_tokens())
        ));
        output.push_str(&format!(
            "\n{}          ${:.6}\n",
            "Total Cost:".bold(),
            summary.total_cost
        ));
        output.push_str(&"=".repeat(WIDTH).cyan().to_string());
        output
    }

    /// Closing lines once the transcript is saved
    pub fn completion(location: &str, exchanges: usize) -> String {
        format!(
            "{}\n\n{} {}\n{} {}",
            Self::header("Conversation Complete"),
            "Conversation saved to:".green(),
            location,
            "Total exchanges:".bold(),
            exchanges
        )
    }

    /// Models offered by one provider, one per line
    pub fn model_list(title: &str, models: &[Model]) -> String {
        let mut output = format!("{}\n", title.cyan().bold());
        if models.is_empty() {
            output.push_str("  (no models found)\n");
        }
        for model in models {
            output.push_str(&format!("  {}\n", model));
        }
        output
    }

    /// Turn colors off for the rest of the process
    pub fn disable_color() {
        colored::control::set_override(false);
    }

    pub fn interrupted() -> String {
        format!("\n\n{}", "Conversation interrupted by user.".yellow())
    }

    /// Run-level failure, printed to stderr before a non-zero exit
    pub fn error(message: &str) -> String {
        format!("\n\n{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "\n{}\n{:^width$}\n{}",
            line.cyan(),
            title.to_uppercase().bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn rule(c: char) -> String {
        format!("\n{}\n", c.to_string().repeat(WIDTH).cyan())
    }

    /// `1234567` → `1,234,567`
    pub fn thousands(n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}
