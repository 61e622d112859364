use bq_parser::parser::vocabulary::{aliases_of, direction_aliases_of};
use bq_parser::{Direction, Verb};
use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let mut verbs = Table::new();
    verbs.set_content_arrangement(ContentArrangement::Dynamic);
    verbs.set_header(vec!["Verb", "Category", "Aliases"]);
    for verb in Verb::ALL {
        verbs.add_row(vec![
            verb.to_string(),
            verb.category().to_string(),
            aliases_of(verb).collect::<Vec<_>>().join(", "),
        ]);
    }

    let mut directions = Table::new();
    directions.set_content_arrangement(ContentArrangement::Dynamic);
    directions.set_header(vec!["Direction", "Aliases"]);
    for direction in Direction::ALL {
        directions.add_row(vec![
            direction.to_string(),
            direction_aliases_of(direction).collect::<Vec<_>>().join(", "),
        ]);
    }

    println!("{verbs}");
    println!();
    println!("{directions}");

    Ok(())
}
