use crate::types::Report;

/// Render the report as a single HTML document: title, executive
/// summary, itemized key findings, the detailed body as-is, itemized
/// recommendations, and a generation-timestamp footer.
///
/// Rendering is a pure function of the report value; the same report
/// always produces byte-identical markup.
pub fn render_html(report: &Report) -> String {
    let key_findings: String = report
        .key_findings
        .iter()
        .map(|finding| format!("<li>{}</li>", finding))
        .collect();

    let recommendations: String = report
        .recommendations
        .iter()
        .map(|rec| format!("<li>{}</li>", rec))
        .collect();

    format!(
        "<h1>{}</h1>\n\
         <h2>Executive Summary</h2>\n\
         <p>{}</p>\n\
         <h2>Key Findings</h2>\n\
         <ul>{}</ul>\n\
         <h2>Detailed Report</h2>\n\
         {}\n\
         <h2>Recommendations</h2>\n\
         <ul>{}</ul>\n\
         <hr>\n\
         <p><small>Report generated on {}</small></p>",
        report.title,
        report.executive_summary,
        key_findings,
        report.detailed_body,
        recommendations,
        format_timestamp(report),
    )
}

/// Render the report as markdown, for console output and the optional
/// output log. Deterministic for the same report value.
pub fn render_markdown(report: &Report) -> String {
    let mut doc = format!(
        "# {}\n\n## Executive Summary\n\n{}\n\n",
        report.title, report.executive_summary
    );

    if !report.key_findings.is_empty() {
        doc.push_str("## Key Findings\n\n");
        for finding in &report.key_findings {
            doc.push_str(&format!("- {}\n", finding));
        }
        doc.push('\n');
    }

    doc.push_str(&report.detailed_body);
    doc.push_str("\n\n");

    if !report.recommendations.is_empty() {
        doc.push_str("## Recommendations\n\n");
        for rec in &report.recommendations {
            doc.push_str(&format!("- {}\n", rec));
        }
        doc.push('\n');
    }

    if !report.follow_up_topics.is_empty() {
        doc.push_str("## Follow-up Topics\n\n");
        for topic in &report.follow_up_topics {
            doc.push_str(&format!("- {}\n", topic));
        }
        doc.push('\n');
    }

    if !report.sources.is_empty() {
        doc.push_str("## Sources\n\n");
        for (i, source) in report.sources.iter().enumerate() {
            doc.push_str(&format!("{}. {}\n", i + 1, source));
        }
        doc.push('\n');
    }

    doc.push_str(&format!("_Generated on {}_\n", format_timestamp(report)));
    doc
}

fn format_timestamp(report: &Report) -> String {
    report
        .generated_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}
