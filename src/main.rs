use anyhow::{Context, Result};
use circlelist::{fetch::fetch_circle_csv, model::CircleRecord, parse};
use reqwest::Client;
use std::{env, fs, path::Path};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_CSV_URL: &str = "https://example.org/assets/data/circles.csv";
const DEFAULT_OUT_PATH: &str = "assets/data/circles.json";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) config from argv ─────────────────────────────────────────
    let mut args = env::args().skip(1);
    let csv_url = args.next().unwrap_or_else(|| DEFAULT_CSV_URL.to_string());
    let out_path = args.next().unwrap_or_else(|| DEFAULT_OUT_PATH.to_string());

    // ─── 3) fetch csv; an empty listing beats a broken page ──────────
    let client = Client::new();
    let text = match fetch_circle_csv(&client, &csv_url).await {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, url = %csv_url, "fetch failed; emitting empty listing");
            String::new()
        }
    };

    // ─── 4) normalize ────────────────────────────────────────────────
    let records = parse::parse(&text);
    info!(rows = records.len(), "normalized records");

    // ─── 5) emit json for the page ───────────────────────────────────
    write_records(&records, Path::new(&out_path))?;
    info!(path = %out_path, "wrote listing data");

    Ok(())
}

fn write_records(records: &[CircleRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(records).context("serializing records")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use circlelist::model::SnsField;
    use tempfile::tempdir;

    #[test]
    fn writes_json_the_page_can_consume() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("data").join("circles.json");

        let records = vec![CircleRecord {
            name: "Alpha Circle".into(),
            pn: "Taro".into(),
            space: "A-01".into(),
            kana: "a".into(),
            sns: SnsField::Raw("https://x.com/a".into()),
            ..Default::default()
        }];
        write_records(&records, &path)?;

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(json[0]["name"], "Alpha Circle");
        assert_eq!(json[0]["sns"], "https://x.com/a");
        Ok(())
    }
}
