use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const STATIC_ROOT: &str = "/static";
pub const DEFAULT_AVATAR: &str = "/static/images/default-avatar.svg";

/// Resolves a stored avatar value to a URL. Absolute `http` URLs pass through.
pub fn avatar_url(avatar: Option<&str>) -> String {
    match avatar {
        Some(a) if a.starts_with("http") => a.to_string(),
        Some(a) if !a.is_empty() => format!("{STATIC_ROOT}/{a}"),
        _ => DEFAULT_AVATAR.to_string(),
    }
}

pub fn upload_url(media_path: &str) -> String {
    format!("{STATIC_ROOT}/uploads/{media_path}")
}

/// Short display date for a post, e.g. `Oct 19, 2026`.
///
/// Accepts the HTTP-date the server's JSON encoder emits, RFC 3339, and plain
/// SQL timestamps. Anything else is returned unchanged.
pub fn post_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match parse_date(raw) {
        Some(date) => date
            .format(format_description!("[month repr:short] [day padding:none], [year]"))
            .unwrap_or_else(|_| raw.to_string()),
        None => {
            tracing::debug!(raw, "unrecognized timestamp, shown as-is");
            raw.to_string()
        }
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let http_date = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    let sql = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let day_only = format_description!("[year]-[month]-[day]");

    PrimitiveDateTime::parse(raw, http_date)
        .map(|dt| dt.date())
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc3339).map(|dt| dt.date()))
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc2822).map(|dt| dt.date()))
        .or_else(|_| PrimitiveDateTime::parse(raw, sql).map(|dt| dt.date()))
        .or_else(|_| Date::parse(raw, day_only))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_paths() {
        assert_eq!(avatar_url(Some("https://cdn.x/a.png")), "https://cdn.x/a.png");
        assert_eq!(avatar_url(Some("avatars/7.png")), "/static/avatars/7.png");
        assert_eq!(avatar_url(Some("")), DEFAULT_AVATAR);
        assert_eq!(avatar_url(None), DEFAULT_AVATAR);
    }

    #[test]
    fn formats_known_date_shapes() {
        assert_eq!(post_date(Some("Mon, 19 Oct 2026 15:15:00 GMT")), "Oct 19, 2026");
        assert_eq!(post_date(Some("2026-03-05T08:00:00Z")), "Mar 5, 2026");
        assert_eq!(post_date(Some("2026-03-05 08:00:00")), "Mar 5, 2026");
    }

    #[test]
    fn unknown_dates_pass_through() {
        assert_eq!(post_date(Some("yesterday")), "yesterday");
        assert_eq!(post_date(None), "");
    }
}
