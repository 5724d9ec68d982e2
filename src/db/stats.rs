use crate::db::kv::SqliteStore;
use crate::db::migrate::{latest_version, schema_version};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA
    //
    println!(
        "{}• Schema:{} v{} (latest v{})",
        CYAN,
        RESET,
        schema_version(&pool.conn)?,
        latest_version()
    );

    //
    // 3) STORED BLOBS
    //
    let store = SqliteStore::new(pool);
    let record_sets = store.count_keys("records:")?;
    let settings = store.count_keys("settings:")?;

    println!(
        "{}• Record sets:{} {}{}{}",
        CYAN, RESET, GREEN, record_sets, RESET
    );
    println!("{}• Settings:{} {}{}{}", CYAN, RESET, GREEN, settings, RESET);

    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
