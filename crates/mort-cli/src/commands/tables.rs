use comfy_table::{ContentArrangement, Table};

use mort_core::tables::{COMMON_FATES, KeywordTable};

pub fn run() -> Result<(), String> {
    print_table("Occupations", &KeywordTable::OCCUPATIONS);
    println!();
    print_table("Hobbies", &KeywordTable::HOBBIES);
    println!();
    println!("  Common fates: {}", COMMON_FATES.join(", "));
    Ok(())
}

fn print_table(title: &str, keywords: &KeywordTable) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Keyword", "Fates"]);

    for (i, (keyword, fates)) in keywords.entries.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), keyword.to_string(), fates.join(", ")]);
    }
    table.add_row(vec![
        "-".to_string(),
        "(no match)".to_string(),
        keywords.fallback.join(", "),
    ]);

    println!("  {title}");
    println!("{table}");
}
