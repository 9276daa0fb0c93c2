use super::types::Classification;

const PRINT_PREFIX: &str = "print(";
const VAR_PREFIX: &str = "var ";
const FOR_PREFIX: &str = "for ";

/// Check if line is blank or a `//` comment
pub fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}

/// Classify a line by its leading literal prefix.
///
/// Prefixes are checked in order: comment, `print(`, `var `, `for `.
/// Matching is case-sensitive and nothing past the prefix is validated.
pub fn classify(line: &str) -> Classification {
    let line = line.trim();

    if is_comment(line) {
        return Classification::Skip;
    }

    if let Some(rest) = line.strip_prefix(PRINT_PREFIX) {
        return Classification::Print(print_message(rest));
    }

    if let Some(rest) = line.strip_prefix(VAR_PREFIX) {
        return Classification::VarDeclaration(declared_name(rest));
    }

    if line.starts_with(FOR_PREFIX) {
        return Classification::ForLoop;
    }

    Classification::Unrecognized
}

/// Drop the last character (assumed `)`), then one pair of surrounding quotes.
fn print_message(rest: &str) -> String {
    let mut chars = rest.chars();
    chars.next_back();
    let inner = chars.as_str();

    let inner = inner.strip_prefix('"').unwrap_or(inner);
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.to_string()
}

fn declared_name(rest: &str) -> String {
    let name = match rest.split_once('=') {
        Some((name, _)) => name,
        None => rest,
    };
    name.trim().to_string()
}
