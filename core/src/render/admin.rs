use super::{error, muted};
use crate::escape::escape_html;
use crate::model::{DictionaryResponse, LanguagesResponse};
use std::fmt::Write;

pub const NOT_MODIFIED: &str = "Your dictionary.json file was NOT modified.";

pub fn loading() -> String {
    muted("Loading...")
}

pub fn syncing() -> String {
    muted("Syncing...")
}

/// Summary of the spreadsheet-backed languages plus the raw key map.
pub fn languages(data: &LanguagesResponse) -> String {
    let pretty = serde_json::to_string_pretty(&data.languages).unwrap_or_default();
    format!(
        concat!(
            r#"<h3>Available Languages: {langs}</h3>"#,
            r#"<p class="text-muted">Found {count} translation keys</p>"#,
            r#"<pre>{json}</pre>"#,
        ),
        langs = escape_html(&data.available_languages.join(", ")),
        count = data.languages.len(),
        json = escape_html(&pretty),
    )
}

/// The canonical dictionary as a table meant to be pasted into the sheet.
pub fn dictionary(data: &DictionaryResponse) -> String {
    let mut html = format!(
        concat!(
            r#"<h3>Dictionary.json Contents ({total} keys)</h3>"#,
            r#"<p class="text-muted">Copy this table into your Google Sheet. Format: key | english | danish | spanish</p>"#,
            r#"<div class="table-scroll"><table class="dictionary-table"><thead><tr>"#,
            r#"<th>Key</th><th>English</th><th>Danish</th><th>Spanish</th>"#,
            r#"</tr></thead><tbody>"#,
        ),
        total = data.total_keys,
    );
    for (index, row) in data.data.iter().enumerate() {
        let stripe = if index % 2 == 0 { "row-even" } else { "row-odd" };
        let _ = write!(
            html,
            concat!(
                r#"<tr class="{stripe}"><td class="dictionary-key">{key}</td>"#,
                r#"<td>{english}</td><td>{danish}</td><td>{spanish}</td></tr>"#,
            ),
            stripe = stripe,
            key = escape_html(&row.key),
            english = escape_html(&row.english),
            danish = escape_html(&row.danish),
            spanish = escape_html(&row.spanish),
        );
    }
    html.push_str(concat!(
        r#"</tbody></table></div>"#,
        r#"<div class="table-tip"><p><strong>Tip:</strong> You can select and copy the table above, "#,
        r#"then paste it directly into Google Sheets. "#,
        r#"Make sure your sheet has columns: key, english, danish, spanish</p></div>"#,
    ));
    html
}

pub fn load_failed(message: &str) -> String {
    error(&format!("Error: {message}"))
}

pub fn sync_succeeded(message: &str) -> String {
    format!(
        concat!(
            r#"<div class="banner banner-success"><strong>✓ Success!</strong> {message}</div>"#,
            r#"<p class="text-muted">The dictionary.json file has been updated. "#,
            r#"The application will use these translations immediately.</p>"#,
        ),
        message = escape_html(message),
    )
}

/// Failure banner; always states that the on-disk dictionary was left as it was.
pub fn sync_failed(message: &str, hint: &str) -> String {
    format!(
        concat!(
            r#"<div class="banner banner-error"><strong>⚠ Error:</strong> {message}</div>"#,
            r#"<p class="text-muted">{not_modified} {hint}</p>"#,
        ),
        message = escape_html(message),
        not_modified = NOT_MODIFIED,
        hint = escape_html(hint),
    )
}
