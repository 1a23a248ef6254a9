use sqlx::SqlitePool;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

pub async fn setup_test_db() -> SqlitePool {
    // Initialize logging once
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });

    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.to_str().unwrap());

    let pool = echo_storage::create_pool(&db_url)
        .await
        .expect("Failed to create test database pool");
    echo_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    // Keep temp_dir alive by leaking it (acceptable for tests)
    std::mem::forget(temp_dir);

    pool
}

/// Minimal silent WAV the extractor can parse: 44.1kHz, stereo, 16-bit,
/// 0.1 seconds
pub fn write_test_wav(path: &Path) -> std::io::Result<()> {
    let sample_rate = 44_100u32;
    let channels = 2u16;
    let num_samples = (sample_rate as f32 * 0.1) as usize;

    let byte_rate = sample_rate * u32::from(channels) * 2;
    let block_align = channels * 2;
    let data_size = (num_samples * channels as usize * 2) as u32;
    let chunk_size = 36 + data_size;

    let mut file = File::create(path)?;
    file.write_all(b"RIFF")?;
    file.write_all(&chunk_size.to_le_bytes())?;
    file.write_all(b"WAVE")?;
    file.write_all(b"fmt ")?;
    file.write_all(&16u32.to_le_bytes())?;
    file.write_all(&1u16.to_le_bytes())?; // PCM
    file.write_all(&channels.to_le_bytes())?;
    file.write_all(&sample_rate.to_le_bytes())?;
    file.write_all(&byte_rate.to_le_bytes())?;
    file.write_all(&block_align.to_le_bytes())?;
    file.write_all(&16u16.to_le_bytes())?;
    file.write_all(b"data")?;
    file.write_all(&data_size.to_le_bytes())?;
    file.write_all(&vec![0u8; data_size as usize])?;
    Ok(())
}
