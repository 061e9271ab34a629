//! Subway line id → display name lookup.

/// Display text used when a value is missing.
pub const UNKNOWN: &str = "알 수 없음";

/// Known Seoul metropolitan line ids, as reported in `subwayId`.
const LINE_NAMES: [(&str, &str); 24] = [
    ("1001", "1호선"),
    ("1002", "2호선"),
    ("1003", "3호선"),
    ("1004", "4호선"),
    ("1005", "5호선"),
    ("1006", "6호선"),
    ("1007", "7호선"),
    ("1008", "8호선"),
    ("1009", "9호선"),
    ("1061", "중앙선"),
    ("1063", "경의중앙선"),
    ("1065", "공항철도"),
    ("1067", "경춘선"),
    ("1071", "수인분당선"),
    ("1075", "분당선"),
    ("1077", "분당선"),
    ("1081", "신림선"),
    ("1092", "신분당선"),
    ("1093", "용인경전철"),
    ("1094", "의정부경전철"),
    ("1095", "우이신설선"),
    ("1096", "서해선"),
    ("1097", "김포골드라인"),
    ("1099", "수인선"),
];

/// Look up the display name for a known line id.
pub fn known_line_name(line_id: &str) -> Option<&'static str> {
    LINE_NAMES
        .iter()
        .find(|(id, _)| *id == line_id)
        .map(|(_, name)| *name)
}

/// Resolve a line id to a human-readable line name.
///
/// Unknown ids are rendered as `"{id}호선"`; an empty id is [`UNKNOWN`].
///
/// # Examples
///
/// ```
/// use arrival_board::domain::resolve_line_name;
///
/// assert_eq!(resolve_line_name("1001"), "1호선");
/// assert_eq!(resolve_line_name("1063"), "경의중앙선");
/// assert_eq!(resolve_line_name("9999"), "9999호선");
/// assert_eq!(resolve_line_name(""), "알 수 없음");
/// ```
pub fn resolve_line_name(line_id: &str) -> String {
    if line_id.is_empty() {
        return UNKNOWN.to_string();
    }

    match known_line_name(line_id) {
        Some(name) => name.to_string(),
        None => format!("{line_id}호선"),
    }
}
