use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Select;
use wordfreq::{ChartKind, ChartRequest, ChartSpec, dispatch, dispatch_str};

use crate::cli::AnalyzeCommand;
use crate::context::{self, Settings};
use crate::output::{self, OutputFormat};

/// Execute an analyze command.
pub fn run(cmd: AnalyzeCommand, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let Settings {
        mut analysis,
        chart,
    } = context::load_settings(config_path)?;
    if let Some(top_n) = cmd.top_n {
        analysis.top_n = top_n;
    }
    let top_n = analysis.top_n;

    let text = context::read_input(cmd.input.as_deref())?;
    let analyzer = context::build_analyzer(cmd.tokenizer, analysis)?;
    let result = analyzer.analyze(&text)?;
    output::print_analysis(&result, format)?;

    let spec: Option<ChartSpec> = if cmd.interactive {
        let kind = prompt_chart_kind()?;
        Some(dispatch(
            &ChartRequest::new(kind).with_top_n(top_n),
            &result.full,
            &chart,
        )?)
    } else if let Some(kind) = cmd.chart.as_deref() {
        Some(dispatch_str(kind, top_n, &result.full, &chart)?)
    } else {
        None
    };

    if let Some(spec) = spec {
        write_spec(&spec, cmd.output.as_deref())?;
    }

    Ok(())
}

fn prompt_chart_kind() -> Result<ChartKind> {
    let labels: Vec<&str> = ChartKind::ALL.iter().map(|k| k.label()).collect();
    let selection = Select::new()
        .with_prompt("选择图形类型")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ChartKind::ALL[selection])
}

fn write_spec(spec: &ChartSpec, path: Option<&Path>) -> Result<()> {
    let json = spec.to_json()?;
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write chart to {}", path.display()))?;
            eprintln!("{} written to {}.", spec.title, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
