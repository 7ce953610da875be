//! Popup content renderer
//!
//! Pure templating from an [`AddressRecord`] to the info-window HTML. The
//! template is fixed; placeholders are distinct, non-overlapping tokens, each
//! substituted exactly once (case-insensitively, across the whole string).
//! Field values are inserted verbatim and never re-scanned as templates, so
//! substitution order cannot matter. Absent optional fields render as the
//! empty string.

use crate::data::address::AddressRecord;

/// Outer info-window template. `{detailsLink}` and `{imgHTML}` receive the
/// conditional fragments below, already expanded.
const INFO_WINDOW_TEMPLATE: &str = "<div class=\"grid-x\" style=\"width:325px;max-width:75vw;\">{imgHTML}<div class=\"cell auto\"><p><strong>{title}</strong><br/>{address}</p><p class=\"small button-group\"><a href=\"https://maps.google.com/maps?saddr=current+location&daddr={address}\" target=\"_blank\" class=\"button small secondary\">Directions</a>{detailsLink}</p></div></div>";

/// "View Details" action, included only when the record has a URL.
const DETAILS_LINK_TEMPLATE: &str = "<a href=\"{url}\" class=\"button primary small\">View Details</a>";

/// Render the popup HTML for one address record. Deterministic: the same
/// record always yields byte-identical markup.
pub fn render_popup(record: &AddressRecord) -> String {
    let url = record.url.as_deref().unwrap_or("");
    let img = record.img.as_deref().unwrap_or("");
    let imgalt = record.imgalt.as_deref().unwrap_or("");
    let title = record.title.as_deref().unwrap_or("");

    let details_link = if url.is_empty() {
        String::new()
    } else {
        substitute(DETAILS_LINK_TEMPLATE, &[("url", url)])
    };

    let img_html = if img.is_empty() {
        String::new()
    } else {
        let mut block = String::from("<div class=\"cell small-6\">");
        if !url.is_empty() {
            block.push_str("<a href=\"{url}\">");
        }
        block.push_str("<img src=\"{img}\" alt=\"{imgalt}\" style=\"max-width:130px;height:auto;\" />");
        if !url.is_empty() {
            block.push_str("</a>");
        }
        block.push_str("</div>");
        substitute(&block, &[("url", url), ("img", img), ("imgalt", imgalt)])
    };

    substitute(
        INFO_WINDOW_TEMPLATE,
        &[
            ("imgHTML", img_html.as_str()),
            ("title", title),
            ("address", record.address.as_str()),
            ("detailsLink", details_link.as_str()),
        ],
    )
}

/// Single left-to-right pass over `template`, replacing each `{name}` token
/// (ASCII case-insensitive) with its value. Values are appended verbatim and
/// never re-scanned.
fn substitute(template: &str, tokens: &[(&str, &str)]) -> String {
    let needles: Vec<String> = tokens
        .iter()
        .map(|(name, _)| format!("{{{name}}}"))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'outer: while let Some(ch) = rest.chars().next() {
        if ch == '{' {
            for (needle, (_, value)) in needles.iter().zip(tokens) {
                if rest.len() >= needle.len()
                    && rest.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
                {
                    out.push_str(value);
                    rest = &rest[needle.len()..];
                    continue 'outer;
                }
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}
