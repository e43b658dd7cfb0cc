use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use tenure_engine::{ActivityPersons, ActivityVar, Source};
use tenure_store::{Database, QueryCondition};

use crate::args::{OutputFormat, QueryArgs};
use crate::handlers::query_conditions;

pub fn handle(db: Database, query: &QueryArgs, format: OutputFormat) -> Result<()> {
    let var: ActivityVar = query.var.parse()?;
    let conditions = query_conditions(query)?;
    let refs: Vec<&dyn QueryCondition> = conditions.iter().map(|c| c.as_ref()).collect();

    let persons = ActivityPersons::new(var, &refs, Source::Session(db))?;
    let activity = persons.activity()?;

    match format {
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            for (person, timeline) in activity.iter() {
                object.insert(
                    person.as_str().to_string(),
                    json!({
                        "events": timeline.len(),
                        "first": timeline[0].to_rfc3339(),
                        "last": timeline[timeline.len() - 1].to_rfc3339(),
                    }),
                );
            }
            println!("{}", serde_json::Value::Object(object));
        }
        OutputFormat::Text => {
            println!(
                "{} ({} persons)",
                format!("Activity for {}", var).bold(),
                activity.len()
            );
            for (person, timeline) in activity.iter() {
                println!(
                    "  {:<30} {:>5} events  {}  ..  {}",
                    person.as_str(),
                    timeline.len(),
                    timeline[0].format("%Y-%m-%d"),
                    timeline[timeline.len() - 1].format("%Y-%m-%d")
                );
            }
        }
    }

    Ok(())
}
