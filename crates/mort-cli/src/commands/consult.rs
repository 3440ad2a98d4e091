use std::io;

use colored::Colorize;

use mort_core::{
    ConsultConfig, Field, Prediction, PredictionEngine, UserProfile, validate_profile,
};

use super::certificate;
use super::prompt;
use crate::ConsultArgs;

pub fn run(args: &ConsultArgs) -> Result<(), String> {
    let profile = collect_profile(args)?;

    let mut config = ConsultConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(date) = args.date {
        config = config.with_date(date);
    }

    if !args.json {
        println!("  {}", "Consulting the spectral algorithm...".cyan());
        println!("  {}", "Calibrating necromantic predictors...".dimmed());
        println!("  {}", "Analyzing mortality statistics...".dimmed());
        println!(
            "  {}",
            "Scanning actuarial tables from beyond the veil...".dimmed()
        );
        println!();
    }

    let mut engine = PredictionEngine::from_config(&config);
    let prediction = engine.predict(&profile).map_err(|e| e.to_string())?;
    log::info!("reading {} for {}", prediction.id, prediction.name);

    let json = serde_json::to_string_pretty(&prediction)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if args.json {
        println!("{json}");
    } else {
        print_reading(&prediction);
        if args.certificate {
            println!();
            println!("{}", certificate::render(&prediction));
        }
    }

    if let Some(path) = &args.save {
        std::fs::write(path, &json)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        if !args.json {
            println!();
            println!(
                "  Your death certificate has been saved to your Carnival Passport: {}",
                path.display()
            );
        }
    }

    Ok(())
}

/// Start from the flags and ask for whatever required answer is missing.
fn collect_profile(args: &ConsultArgs) -> Result<UserProfile, String> {
    let mut profile = UserProfile::default();
    let mut given = Vec::new();
    for (field, value) in [
        (Field::Name, &args.name),
        (Field::Age, &args.age),
        (Field::Location, &args.location),
        (Field::Occupation, &args.occupation),
        (Field::Hobbies, &args.hobbies),
        (Field::Fears, &args.fears),
    ] {
        if let Some(value) = value {
            profile.set(field, value.clone());
            given.push(field);
        }
    }

    let complete = Field::all()
        .iter()
        .filter(|f| f.is_required())
        .all(|f| given.contains(f));

    if !complete {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        prompt::ask_missing(&mut profile, &given, &mut input)?;
    }

    let issues = validate_profile(&profile);
    if !issues.is_empty() {
        let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
        return Err(messages.join("; "));
    }

    Ok(profile)
}

fn print_reading(prediction: &Prediction) {
    println!("  {}", "Your Fate Revealed".magenta().bold());
    println!();
    for line in prediction.reading() {
        println!("  {line}");
        println!();
    }
    println!("  Probability:    {}%", prediction.probability);
    println!("  Estimated Date: {}", prediction.death_date);
    println!();
    println!("  {}", "How to avoid your fate".cyan().bold());
    println!("  {}", prediction.avoidance);
    println!();
    println!("  {}", "From the archives".cyan().bold());
    println!("  {}", prediction.historical_note);
}
