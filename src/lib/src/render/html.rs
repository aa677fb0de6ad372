//! HTML fragments shared by the renderers. The markup and stylesheet are
//! what reviewers already know from the hosted diff tool, so they stay
//! byte-stable here.
//!

use std::path::Path;

use crate::model::DocumentDiff;

const STYLE: &str = "      body {font-family: monospace}
      table {
        border-spacing: 0;
      }
      td {
        padding: 0;
        white-space: pre;
        vertical-align: top;
        font-size: 0.86em;
      }
      th {
        padding: 0;
        text-align: center;
      }
      .left { background-color: #EEE; }
      .right { background-color: #FFF; }
      .lblock { background-color: #BFB; }
      .rblock { background-color: #FF8; }
      .delete { background-color: #ACF; }
      .insert { background-color: #8FF; }
      .change { background-color: gray; }
      .header { background-color: orange; }
      .w-delete {
        color: #F00;
        text-decoration: line-through;
      }
      .w-insert {
        color: #008000;
        font-weight: bold;
      }";

pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).to_string()
}

/// HTML escaped basename of a user supplied path.
pub fn display_filename(path: Option<&Path>) -> String {
    match path.and_then(|path| path.file_name()) {
        Some(name) => escape(&name.to_string_lossy()),
        None => String::new(),
    }
}

pub fn title(diff: &DocumentDiff) -> String {
    format!(
        "Diff: {file1} - {file2}",
        file1 = display_filename(diff.filename1.as_deref()),
        file2 = display_filename(diff.filename2.as_deref())
    )
}

pub fn page(title: &str, output: &str) -> String {
    format!(
        "
<!DOCTYPE html>
<html lang=\"en\">
  <head>
    <meta charset=\"utf-8\">
    <title>{title}</title>
    <style>
{STYLE}
    </style>
  </head>
  <body>{output}</body>
</html>"
    )
}

pub fn pre_block(body: &str) -> String {
    format!("<pre>{body}</pre>")
}

pub fn table(filename1: &str, filename2: &str, rows: &str) -> String {
    format!(
        "
    <table>
      <tbody>
        <tr>
          <td>&nbsp;</td>
          <th class=\"header\" scope=\"col\">{filename1}</th>
          <td>&nbsp;</td>
          <th class=\"header\" scope=\"col\">{filename2}</th>
        </tr>{rows}
      </tbody>
    </table>"
    )
}

pub fn unchanged_row(lline: &str, rline: &str) -> String {
    format!(
        "
      <tr>
        <td>&nbsp;</td>
        <td class=\"left\">{lline}</td>
        <td>&nbsp;</td>
        <td class=\"right\">{rline}</td>
      </tr>"
    )
}

pub fn changed_row(lline: &str, rline: &str) -> String {
    format!(
        "
      <tr>
        <td>&nbsp;</td>
        <td class=\"lblock\">{lline}</td>
        <td>&nbsp;</td>
        <td class=\"rblock\">{rline}</td>
      </tr>"
    )
}

/// Separator marking an elided unchanged region, with a self link so long
/// diffs can be stepped through by anchor.
pub fn context_rows(context: usize) -> String {
    format!(
        "
      <tr>
        <td>&nbsp;</td>
        <td class=\"left\">&nbsp;</td>
        <td>&nbsp;</td>
        <td class=\"right\">&nbsp;</td>
      </tr>
      <tr id=\"context-{context}\">
        <td></td>
        <th class=\"change\" scope=\"col\">
          <a href=\"#context-{context}\">
           <small>Skipping</small>
          </a>
        </th>
        <td></td>
        <th class=\"change\" scope=\"col\">
          <a href=\"#context-{context}\">
           <small>Skipping</small>
          </a>
        </th>
      </tr>"
    )
}
