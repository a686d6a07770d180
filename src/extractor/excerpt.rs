use crate::config::TrimConfig;

/// Split text into lines with each terminator kept attached to its line.
///
/// Recognizes `\n`, `\r\n`, and lone `\r`. The final line may have no
/// terminator. An empty input yields no lines.
pub fn split_lines_keep_terminators(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i + 1]);
                i += 1;
                start = i;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') {
                    i + 2
                } else {
                    i + 1
                };
                lines.push(&text[start..end]);
                i = end;
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Drop the first `leading` and last `trailing` lines of a region and
/// rejoin the remainder with its original terminators.
///
/// Drop counts clamp to the available line count: a region too short to
/// survive both trims yields an empty string rather than an error.
pub fn trim_region(region: &str, trim: &TrimConfig) -> String {
    let lines = split_lines_keep_terminators(region);

    let start = trim.leading.min(lines.len());
    let end = lines.len().saturating_sub(trim.trailing).max(start);

    lines[start..end].concat()
}
