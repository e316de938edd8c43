//! Flat key/value property file parsing
//!
//! The credentials source uses the flat subset of the Java properties
//! format: one `key=value` (or `key: value`) pair per line, `#` and `!`
//! comment lines, surrounding whitespace trimmed. Each line splits at
//! the earliest `=` or `:`, and later occurrences of a key override
//! earlier ones, matching `java.util.Properties`.

use std::collections::HashMap;

/// Parse property file content into a key/value map
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // Whichever separator comes first splits the line; the other may
        // appear freely in the value
        let split = line
            .find(['=', ':'])
            .map(|idx| (&line[..idx], &line[idx + 1..]));

        if let Some((key, value)) = split {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), value.trim().to_string());
        }
        // Lines without a separator carry no value and are ignored
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let content = "storeFile=/keys/app.jks\nstorePassword=p1\nkeyAlias=upload\nkeyPassword=p2\n";
        let fields = parse(content);

        assert_eq!(fields.len(), 4);
        assert_eq!(fields["storeFile"], "/keys/app.jks");
        assert_eq!(fields["keyAlias"], "upload");
    }

    #[test]
    fn test_parse_comments_and_blanks() {
        let content = "# release signing\n! legacy comment\n\nstoreFile = /keys/app.jks\n";
        let fields = parse(content);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["storeFile"], "/keys/app.jks");
    }

    #[test]
    fn test_parse_colon_separator() {
        let fields = parse("keyAlias: upload\n");
        assert_eq!(fields["keyAlias"], "upload");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let fields = parse("keyAlias=old\nkeyAlias=new\n");
        assert_eq!(fields["keyAlias"], "new");
    }

    #[test]
    fn test_value_may_contain_separator() {
        // Only the first separator splits; passwords may contain '='
        let fields = parse("storePassword=a=b:c\n");
        assert_eq!(fields["storePassword"], "a=b:c");
    }

    #[test]
    fn test_colon_separated_value_with_equals() {
        // The earliest separator wins even when the other kind follows
        let fields = parse("keyAlias: k=1\n");
        assert_eq!(fields["keyAlias"], "k=1");

        let fields = parse("storeFile=/keys/a:b.jks\n");
        assert_eq!(fields["storeFile"], "/keys/a:b.jks");
    }

    #[test]
    fn test_empty_value_preserved() {
        let fields = parse("keyPassword=\n");
        assert_eq!(fields["keyPassword"], "");
    }

    #[test]
    fn test_separatorless_line_ignored() {
        let fields = parse("not-a-pair\nkeyAlias=upload\n");
        assert_eq!(fields.len(), 1);
    }
}
