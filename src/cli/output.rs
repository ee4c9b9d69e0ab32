//! Output formatting utilities

use crate::application::FixLinksReport;

/// Format the outcome of a fix-links run for display
pub fn format_fix_report(report: &FixLinksReport) -> String {
    if report.total_links == 0 {
        return "No links found in file".to_string();
    }
    if report.fixable_links == 0 {
        return "No fixable links found in file".to_string();
    }

    let mut output = format!(
        "Found {} fixable links in {} note\n",
        report.fixable_links, report.series
    );

    // Failures are listed alongside updates, in document order
    let listed: Vec<_> = report
        .resolved
        .iter()
        .filter(|r| r.needs_update() || r.error().is_some())
        .collect();

    if listed.is_empty() {
        output.push_str("All links are already correct!");
        return output;
    }

    output.push_str(&format!("\n{} links need updating:\n\n", listed.len()));

    for (i, record) in listed.iter().enumerate() {
        let link = &record.classified.link;

        if let Some(err) = record.error() {
            output.push_str(&format!(
                "{}. [{}]({}) - ERROR: {}\n",
                i + 1,
                link.text,
                link.destination,
                err
            ));
            continue;
        }

        output.push_str(&format!("{}. [{}]({})\n", i + 1, link.text, link.destination));
        if let Some(suggested) = record.suggested_destination() {
            output.push_str(&format!("   → {}\n", suggested));
        }
        output.push_str(&format!("   Type: {}\n", record.classified.kind));
        if report.is_unapplied(record) {
            output.push_str("   Not applied: destination is not written inline, edit it by hand\n");
        }
    }

    let failures = report.failures().count();
    if failures > 0 {
        output.push_str(&format!("\n{} link(s) could not be resolved", failures));
    }
    if !report.unapplied.is_empty() {
        output.push_str(&format!(
            "\n{} link(s) could not be rewritten in place",
            report.unapplied.len()
        ));
    }
    if failures > 0 || !report.unapplied.is_empty() {
        output.push('\n');
    }

    if report.dry_run {
        output.push_str("\n[DRY RUN] No changes made");
    } else if report.written {
        output.push_str(&format!(
            "\nUpdated {} link(s) in {}",
            report.replacements,
            report.file.display()
        ));
    } else {
        output.push_str("\nNo changes made");
    }

    output
}
