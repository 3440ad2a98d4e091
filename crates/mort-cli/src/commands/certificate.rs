use comfy_table::{Cell, ContentArrangement, Table};

use mort_core::Prediction;

/// The official Dark Carnival document for a reading.
pub fn render(prediction: &Prediction) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(100);
    table.set_header(vec![
        Cell::new("Certificate of Predicted Death"),
        Cell::new("THE DARK CARNIVAL OFFICIAL DOCUMENT"),
    ]);

    let death_age = prediction.death_age.to_string();
    let death_date = prediction.death_date.to_string();
    let probability = format!("{}%", prediction.probability);
    let certificate_id = prediction.certificate_id();

    let rows: [(&str, &str); 8] = [
        ("NAME OF DECEASED (TO BE)", &prediction.name),
        ("AGE AT DEATH", &death_age),
        ("LOCATION OF DEMISE", &prediction.death_location),
        ("PREDICTED DATE OF DEATH", &death_date),
        ("MANNER OF DEATH", &prediction.death_type),
        ("PROBABILITY", &probability),
        ("DESCRIPTION OF DEMISE", &prediction.prediction_text),
        ("CERTIFICATE ID", &certificate_id),
    ];
    for (label, value) in rows {
        table.add_row(vec![label, value]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mort_core::DeathDate;

    #[test]
    fn certificate_lists_every_field() {
        let prediction = Prediction {
            id: "1a2b3c4d".to_string(),
            name: "Ann".to_string(),
            death_type: "Kraken Attack".to_string(),
            prediction_text: "Tentacles.".to_string(),
            death_date: DeathDate {
                month: 8,
                day: 19,
                year: 2065,
            },
            death_age: 71,
            death_location: "Elm".to_string(),
            probability: 64,
            avoidance: String::new(),
            historical_note: String::new(),
        };
        let out = render(&prediction);
        for needle in [
            "NAME OF DECEASED (TO BE)",
            "Ann",
            "71",
            "Elm",
            "8/19/2065",
            "Kraken Attack",
            "64%",
            "Tentacles.",
            "MRT-1a2b3c4d",
        ] {
            assert!(out.contains(needle), "missing {needle} in\n{out}");
        }
    }
}
