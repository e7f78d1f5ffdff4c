//! Everything the launcher prints.

use crate::domain::model::MenuChoice;
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "Molecule-X: AI-Native Multi-Agent Drug Repurposing System";
pub const RULE_WIDTH: usize = 60;

pub const MENU_ITEMS: [&str; 4] = [
    "1. Launch Drug Repurposing Assistant (Web UI)",
    "2. Train Toxicity Prediction Model",
    "3. Run Simulation Impact Analysis",
    "4. Exit",
];

pub const PROMPT: &str = "\nEnter your choice (1-4): ";
pub const GOODBYE: &str = "Exiting Molecule-X. Goodbye!";
pub const INVALID_CHOICE: &str =
    "Invalid choice. Please run the program again and select a valid option.";

const UI_FAILURE: &[&str] = &[
    "Error launching Streamlit. Make sure you have Streamlit installed.",
    "Install it with: pip install streamlit",
];
const TRAIN_FAILURE: &[&str] = &["Error during model training."];
const SIMULATE_FAILURE: &[&str] = &["Error during simulation analysis."];

pub fn render<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Choose an option:")?;
    for item in MENU_ITEMS {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

/// Prints the prompt and reads one line. End of input counts as an empty line.
pub fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<MenuChoice> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(MenuChoice::parse(&line))
}

/// 啟動子行程前顯示的訊息
pub fn announcement(choice: &MenuChoice) -> Option<&'static str> {
    match choice {
        MenuChoice::LaunchUi => Some("Launching Drug Repurposing Assistant..."),
        MenuChoice::Train => Some("Training toxicity prediction model..."),
        MenuChoice::Simulate => Some("Running simulation impact analysis..."),
        MenuChoice::Exit | MenuChoice::Invalid(_) => None,
    }
}

pub fn failure_hint(choice: &MenuChoice) -> &'static [&'static str] {
    match choice {
        MenuChoice::LaunchUi => UI_FAILURE,
        MenuChoice::Train => TRAIN_FAILURE,
        MenuChoice::Simulate => SIMULATE_FAILURE,
        MenuChoice::Exit | MenuChoice::Invalid(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_render_menu() {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2], "Choose an option:");
        assert_eq!(&lines[3..], &MENU_ITEMS[..]);
    }

    #[test]
    fn test_read_choice_prints_prompt() {
        let mut input = Cursor::new("3\n");
        let mut out = Vec::new();

        let choice = read_choice(&mut input, &mut out).unwrap();

        assert_eq!(choice, MenuChoice::Simulate);
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn test_read_choice_at_eof() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let choice = read_choice(&mut input, &mut out).unwrap();
        assert_eq!(choice, MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn test_only_child_choices_have_messages() {
        assert!(announcement(&MenuChoice::Exit).is_none());
        assert!(failure_hint(&MenuChoice::Invalid("9".to_string())).is_empty());
        assert_eq!(failure_hint(&MenuChoice::LaunchUi).len(), 2);
    }
}
