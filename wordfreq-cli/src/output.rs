use anyhow::Result;
use clap::ValueEnum;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wordfreq::{Analysis, ChartKind, FrequencyTable};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// JSON output.
    Json,
}

/// Print the top-N and full frequency tables.
pub fn print_analysis(analysis: &Analysis, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "tokens_seen": analysis.tokens_seen,
                "tokens_kept": analysis.tokens_kept,
                "top": analysis.top,
                "full": analysis.full,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Table => {
            if analysis.full.is_empty() {
                println!("No words found.");
                return Ok(());
            }

            println!("### 最高词频统计结果");
            println!("{}", frequency_table(&analysis.top));
            println!("\n### 词频统计结果");
            println!("{}", frequency_table(&analysis.full));
            println!(
                "\n{} tokens, {} kept, {} distinct words.",
                analysis.tokens_seen,
                analysis.tokens_kept,
                analysis.full.len()
            );
        }
    }
    Ok(())
}

/// Print the chart kinds with their identifiers.
pub fn print_kinds(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let kinds: Vec<serde_json::Value> = ChartKind::ALL
                .iter()
                .map(|k| {
                    json!({
                        "label": k.label(),
                        "slug": k.slug(),
                        "description": k.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&kinds)?);
        }
        OutputFormat::Table => {
            let rows: Vec<KindRow> = ChartKind::ALL
                .iter()
                .map(|k| KindRow {
                    label: k.label().to_string(),
                    slug: k.slug().to_string(),
                    title: k.title().to_string(),
                })
                .collect();
            let table = Table::new(&rows).with(Style::rounded()).to_string();
            println!("{table}");
        }
    }
    Ok(())
}

// --- Helper types and functions ---

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "词语")]
    word: String,
    #[tabled(rename = "频率")]
    count: u64,
}

#[derive(Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    label: String,
    #[tabled(rename = "ID")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
}

fn frequency_table(table: &FrequencyTable) -> String {
    let rows: Vec<FrequencyRow> = table
        .iter()
        .enumerate()
        .map(|(i, entry)| FrequencyRow {
            rank: i + 1,
            word: entry.word.clone(),
            count: entry.count,
        })
        .collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
