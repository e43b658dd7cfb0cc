use anyhow::Result;
use owo_colors::OwoColorize;
use tenure_engine::{
    ActiveCondition, ActivityPersons, ActivityVar, DurationCondition, DurationPersons,
    DurationVar, SnapshotCondition, Source,
};
use tenure_store::{Database, QueryCondition};

use crate::args::{DurationArgs, OutputFormat};
use crate::dates;
use crate::handlers::query_conditions;

pub fn handle(
    db: Database,
    var: DurationVar,
    args: &DurationArgs,
    format: OutputFormat,
) -> Result<()> {
    let activity_var: ActivityVar = args.query.var.parse()?;
    let conditions = query_conditions(&args.query)?;
    let refs: Vec<&dyn QueryCondition> = conditions.iter().map(|c| c.as_ref()).collect();

    let persons = ActivityPersons::new(activity_var, &refs, Source::Session(db))?;
    let activity = persons.activity()?;

    let mut duration_conditions: Vec<Box<dyn DurationCondition>> = Vec::new();
    if let Some(raw) = &args.snapshot {
        duration_conditions.push(Box::new(SnapshotCondition::new(dates::parse_date(raw)?)));
    }
    let active_window =
        dates::parse_window(args.active_since.as_deref(), args.active_until.as_deref())?;
    if !active_window.is_unbounded() {
        duration_conditions.push(Box::new(ActiveCondition::new(active_window)));
    }
    let condition_refs: Vec<&dyn DurationCondition> =
        duration_conditions.iter().map(|c| c.as_ref()).collect();

    let durations = DurationPersons::new(var, activity, &condition_refs).durations()?;

    match format {
        OutputFormat::Json => println!("{}", durations.to_json()),
        OutputFormat::Text => {
            println!(
                "{} ({} persons)",
                format!("{} for {}", var, activity_var).bold(),
                durations.len()
            );
            for (person, delta) in durations.iter() {
                println!("  {:<30} {:>6} days", person.as_str(), delta.num_days());
            }
        }
    }

    Ok(())
}
