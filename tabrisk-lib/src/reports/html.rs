use super::{Report, common};
use crate::Result;
use crate::engine::OutcomeKind;
use core::fmt::Write;

pub fn generate<W: Write>(report: &Report<'_>, writer: &mut W) -> Result<()> {
    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "  <meta charset=\"UTF-8\">")?;
    writeln!(writer, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(writer, "  <title>Privacy Risk Report</title>")?;
    write_styles(writer)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;

    write_header(writer, report)?;
    write_datasets(writer, report)?;
    write_metrics(writer, report)?;
    write_plugin_runs(writer, report)?;
    if !report.warnings.is_empty() {
        write_warnings(writer, report)?;
    }

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;
    Ok(())
}

fn write_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "  <style>")?;
    writeln!(writer, "    :root {{")?;
    writeln!(writer, "      --bg-color: #f0f2f5;")?;
    writeln!(writer, "      --card-bg: #ffffff;")?;
    writeln!(writer, "      --text-color: #1a202c;")?;
    writeln!(writer, "      --text-secondary: #64748b;")?;
    writeln!(writer, "      --border-color: #e2e8f0;")?;
    writeln!(writer, "      --warning-color: #b45309;")?;
    writeln!(writer, "      --failed-color: #b91c1c;")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    @media (prefers-color-scheme: dark) {{")?;
    writeln!(writer, "      :root {{")?;
    writeln!(writer, "        --bg-color: #0f172a;")?;
    writeln!(writer, "        --card-bg: #1e293b;")?;
    writeln!(writer, "        --text-color: #e2e8f0;")?;
    writeln!(writer, "        --text-secondary: #94a3b8;")?;
    writeln!(writer, "        --border-color: #334155;")?;
    writeln!(writer, "        --warning-color: #fbbf24;")?;
    writeln!(writer, "        --failed-color: #f87171;")?;
    writeln!(writer, "      }}")?;
    writeln!(writer, "    }}")?;
    writeln!(
        writer,
        "    body {{ font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; background: var(--bg-color); color: var(--text-color); margin: 0; padding: 24px; }}"
    )?;
    writeln!(writer, "    .header h1 {{ margin: 0 0 4px 0; }}")?;
    writeln!(writer, "    .subtitle {{ color: var(--text-secondary); margin: 0 0 24px 0; }}")?;
    writeln!(
        writer,
        "    section {{ background: var(--card-bg); border: 1px solid var(--border-color); border-radius: 8px; padding: 16px; margin-bottom: 16px; }}"
    )?;
    writeln!(writer, "    table {{ border-collapse: collapse; width: 100%; }}")?;
    writeln!(writer, "    th, td {{ text-align: left; padding: 6px 10px; border-bottom: 1px solid var(--border-color); vertical-align: top; }}")?;
    writeln!(writer, "    td.number {{ text-align: right; font-variant-numeric: tabular-nums; }}")?;
    writeln!(writer, "    .details {{ color: var(--text-secondary); font-size: 0.9em; }}")?;
    writeln!(writer, "    .outcome-failed, .outcome-rejected {{ color: var(--failed-color); font-weight: 600; }}")?;
    writeln!(writer, "    .warnings li {{ color: var(--warning-color); }}")?;
    writeln!(writer, "  </style>")?;
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "  <div class=\"header\">")?;
    writeln!(writer, "    <h1>Privacy Risk Report</h1>")?;
    writeln!(
        writer,
        "    <p class=\"subtitle\">Produced by tabrisk {} on {}</p>",
        env!("CARGO_PKG_VERSION"),
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(writer, "  </div>")?;
    Ok(())
}

fn write_datasets<W: Write>(writer: &mut W, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "  <section>")?;
    writeln!(writer, "    <h2>Datasets</h2>")?;
    writeln!(writer, "    <table>")?;
    writeln!(writer, "      <tr><th>Name</th><th>Rows</th><th>Columns</th></tr>")?;
    for dataset in report.datasets {
        writeln!(
            writer,
            "      <tr><td>{}</td><td class=\"number\">{}</td><td class=\"number\">{}</td></tr>",
            html_escape(&dataset.name),
            dataset.rows,
            dataset.columns
        )?;
    }
    writeln!(writer, "    </table>")?;
    writeln!(writer, "  </section>")?;
    Ok(())
}

fn write_metrics<W: Write>(writer: &mut W, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "  <section>")?;
    writeln!(writer, "    <h2>Metrics</h2>")?;

    if report.results.is_empty() {
        writeln!(writer, "    <p>No metric produced a result.</p>")?;
        writeln!(writer, "  </section>")?;
        return Ok(());
    }

    writeln!(writer, "    <table>")?;
    writeln!(writer, "      <tr><th>Metric</th><th>Value</th><th>Details</th></tr>")?;
    for result in report.results {
        let details: Vec<String> = common::format_details(result).iter().map(|d| html_escape(d)).collect();
        writeln!(
            writer,
            "      <tr><td>{}</td><td class=\"number\">{}</td><td class=\"details\">{}</td></tr>",
            html_escape(&result.name),
            html_escape(&common::format_value(&result.value)),
            details.join("<br>")
        )?;
    }
    writeln!(writer, "    </table>")?;
    writeln!(writer, "  </section>")?;
    Ok(())
}

fn write_plugin_runs<W: Write>(writer: &mut W, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "  <section>")?;
    writeln!(writer, "    <h2>Plugins</h2>")?;
    writeln!(writer, "    <table>")?;
    writeln!(writer, "      <tr><th>Plugin</th><th>Outcome</th><th>Results</th><th>Time (ms)</th></tr>")?;
    for run in report.runs {
        let class = match run.outcome {
            OutcomeKind::Contributed => "outcome-contributed",
            OutcomeKind::Failed => "outcome-failed",
            OutcomeKind::Rejected => "outcome-rejected",
        };
        writeln!(
            writer,
            "      <tr><td>{}</td><td class=\"{class}\">{}</td><td class=\"number\">{}</td><td class=\"number\">{}</td></tr>",
            html_escape(&run.id),
            run.outcome,
            run.results,
            common::elapsed_ms(run.elapsed)
        )?;
    }
    writeln!(writer, "    </table>")?;
    writeln!(writer, "  </section>")?;
    Ok(())
}

fn write_warnings<W: Write>(writer: &mut W, report: &Report<'_>) -> Result<()> {
    writeln!(writer, "  <section class=\"warnings\">")?;
    writeln!(writer, "    <h2>Warnings</h2>")?;
    writeln!(writer, "    <ul>")?;
    for warning in report.warnings {
        writeln!(writer, "      <li>{}</li>", html_escape(&warning.to_string()))?;
    }
    writeln!(writer, "    </ul>")?;
    writeln!(writer, "  </section>")?;
    Ok(())
}

fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
