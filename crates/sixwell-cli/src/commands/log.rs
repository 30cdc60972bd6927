use sixwell_core::Database;

pub fn run(limit: u32) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let rows = db.recent_check_ins(limit)?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
