//! Step-by-step questioning on stdin.

use std::io::BufRead;

use colored::Colorize;

use mort_core::{ConsultationStep, Field, UserProfile, validate_step};

/// Ask for every field not in `given`, one step at a time.
///
/// A step is repeated until it validates. Problems with answers that came
/// from flags cannot be fixed here and end the consultation.
pub fn ask_missing(
    profile: &mut UserProfile,
    given: &[Field],
    input: &mut impl BufRead,
) -> Result<(), String> {
    for &step in ConsultationStep::all() {
        let mut pending: Vec<Field> = step
            .fields()
            .iter()
            .copied()
            .filter(|f| !given.contains(f))
            .collect();
        if pending.is_empty() {
            continue;
        }

        eprintln!();
        eprintln!(
            "  {} {}",
            format!("[{}/3]", step.number()).magenta(),
            step.dialogue().italic()
        );

        while !pending.is_empty() {
            for &field in &pending {
                let answer = read_answer(field, input)?;
                profile.set(field, answer);
            }

            let issues = validate_step(profile, step);
            if let Some(issue) = issues.iter().find(|i| given.contains(&i.field)) {
                return Err(issue.to_string());
            }
            for issue in &issues {
                eprintln!("  {}", issue.message.yellow());
            }
            pending = issues.iter().map(|i| i.field).collect();
        }
    }
    Ok(())
}

fn read_answer(field: Field, input: &mut impl BufRead) -> Result<String, String> {
    let optional = if field.is_required() { "" } else { " (optional)" };
    eprint!("  {}{optional} [{}]: ", field.label().bold(), field.placeholder());

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Err("the consultation was abandoned".to_string()),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(e.to_string()),
    }
}
