//! Rendering of action outcomes.
//!
//! Pure functions of the outcome plus the terminal width, which only sizes
//! the separator rules.

use gists_api::model::{Gist, GistFile};
use gists_core::iostreams::ColorScheme;
use gists_core::table::TablePrinter;

use crate::outcome::{ActionError, Outcome, Payload};

/// Render any outcome.
pub fn format_outcome(outcome: &Outcome, width: usize, cs: ColorScheme) -> String {
    match outcome {
        Ok(Payload::Gist(gist)) => format_gist(gist, width, cs),
        Ok(Payload::File(file)) => format_file(file, width, cs),
        Ok(Payload::Gists(gists)) => format_list(gists),
        Ok(Payload::Message(msg)) => msg.clone(),
        Err(err) => format_error(err, cs),
    }
}

/// Table of gists: id, description, files, visibility.
pub fn format_list(gists: &[Gist]) -> String {
    let mut table = TablePrinter::new().with_headers(&["id", "description", "files", "visibility"]);
    for gist in gists {
        let description = match gist.description_or_empty() {
            "" => "(no desc)".to_string(),
            d => d.to_string(),
        };
        table.add_row(vec![
            gist.id.clone(),
            description,
            gist.filenames().join(", "),
            if gist.public { "public" } else { "private" }.to_string(),
        ]);
    }
    table.render().trim_end().to_string()
}

/// Field dump of a gist's metadata.
pub fn format_gist(gist: &Gist, width: usize, cs: ColorScheme) -> String {
    let rule = cs.cyan(&"-".repeat(width));
    let mut lines = vec![
        rule.clone(),
        cs.bold(&format!("Gist [{}]", gist.id)),
        rule.clone(),
    ];
    lines.push(format!("{}{}", cs.success("Description:\t"), gist.description_or_empty()));
    lines.push(format!("{}{}", cs.success("Url:\t\t"), gist.url));
    lines.push(format!("{}{}", cs.success("Html Url:\t"), gist.html_url));
    lines.push(format!("{}{}", cs.success("Private:\t"), !gist.public));
    lines.push(format!(
        "{}{}",
        cs.success("Files:\t\t"),
        cs.error(&format!("[{}]", gist.filenames().join(", ")))
    ));
    lines.push(rule);
    lines.join("\n")
}

/// Field dump of a single file, content included.
pub fn format_file(file: &GistFile, width: usize, cs: ColorScheme) -> String {
    let rule = cs.cyan(&"-".repeat(width));
    [
        rule.clone(),
        cs.bold(&format!("File [{}]", file.filename)),
        rule.clone(),
        format!(
            "{} {}",
            cs.success("Language:"),
            cs.error(file.language.as_deref().unwrap_or_default())
        ),
        format!("{} {}", cs.success("Size:"), cs.error(&file.size.to_string())),
        format!("{} {}", cs.success("Raw Url:"), cs.error(&file.raw_url)),
        format!(
            "{}\n\n{}\n",
            cs.success("Content:"),
            file.content.as_deref().unwrap_or_default()
        ),
        rule,
    ]
    .join("\n")
}

/// `Error: ` followed by the action's message.
pub fn format_error(err: &ActionError, cs: ColorScheme) -> String {
    format!("{}{err}", cs.error("Error: "))
}
