use sqlx::PgPool;

use crate::model::Grid;

/// Load a run's snapshots into `plant_records` using COPY FROM STDIN (text
/// format). Snapshot `i` is tick `i + 1`; `ordinal` is the plant's row-major
/// index among that tick's living plants.
pub async fn load_history(pool: &PgPool, run_id: i64, snapshots: &[Grid]) -> Result<u64, sqlx::Error> {
    let payload = copy_rows(run_id, snapshots);
    copy_in(pool, include_str!("../../sql/copy_plant_records.sql"), &payload).await
}

/// Render the COPY text payload, one tab-separated line per living plant
/// per tick.
pub fn copy_rows(run_id: i64, snapshots: &[Grid]) -> String {
    let mut buf = String::new();
    for (grid, tick) in snapshots.iter().zip(1_u32..) {
        for (ordinal, (pos, plant)) in grid.plants().enumerate() {
            let status: &str = plant.status.into();
            buf.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                run_id,
                tick,
                ordinal,
                pos.row,
                pos.col,
                status,
                plant.height,
                plant.width,
                plant.life_span,
                plant.shade_tolerance,
                plant.age,
                plant.sunlight,
            ));
        }
    }
    buf
}

/// Execute a COPY FROM STDIN with the given text-format payload. Returns
/// the number of rows copied.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<u64, sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await
}
