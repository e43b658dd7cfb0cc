use anyhow::{Result, bail};
use tenure_store::Database;

pub fn handle(db: &Database, canonical: &str, aliases: &[String]) -> Result<()> {
    let Some(canonical_id) = db.find_person_by_name(canonical)? else {
        bail!("Unknown person '{}': import their commits first", canonical);
    };

    for alias in aliases {
        let Some(alias_id) = db.find_person_by_name(alias)? else {
            bail!("Unknown person '{}': import their commits first", alias);
        };
        db.link_identity(alias_id, canonical_id)?;
    }

    println!("Linked {} aliases to {}", aliases.len(), canonical);

    Ok(())
}
