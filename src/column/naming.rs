/// Turns an arbitrary string into a valid column name, or an empty string
/// when nothing usable is left.
///
/// Steps, in order: lowercase, collapse runs of spaces into one underscore,
/// drop anything outside `[a-z0-9_]`, drop everything before the first
/// lowercase letter, drop trailing underscores.
pub fn normalize_column_name(name: &str) -> String {
    let lowered = name.to_lowercase();

    // Collapse space runs
    let mut spaced = String::with_capacity(lowered.len());
    let mut last_was_space = false;
    for c in lowered.chars() {
        if c == ' ' {
            if !last_was_space {
                spaced.push('_');
            }
            last_was_space = true;
        } else {
            spaced.push(c);
            last_was_space = false;
        }
    }

    let allowed: String = spaced
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    allowed
        .trim_start_matches(|c: char| !c.is_ascii_lowercase())
        .trim_end_matches('_')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::validation::validate_name;

    #[test]
    fn test_normalize_example() {
        assert_eq!(normalize_column_name("My Col 1!"), "my_col_1");
    }

    #[test]
    fn test_space_runs_collapse() {
        assert_eq!(normalize_column_name("first   name"), "first_name");
    }

    #[test]
    fn test_existing_underscores_are_kept() {
        // Only spaces collapse; underscores typed by the user stay as they are.
        assert_eq!(normalize_column_name("a__b"), "a__b");
        assert_eq!(normalize_column_name("a _b"), "a__b");
    }

    #[test]
    fn test_leading_junk_stripped() {
        assert_eq!(normalize_column_name("123 Total"), "total");
        assert_eq!(normalize_column_name("__id"), "id");
        assert_eq!(normalize_column_name(" _9x"), "x");
    }

    #[test]
    fn test_trailing_underscores_stripped() {
        assert_eq!(normalize_column_name("amount__"), "amount");
        assert_eq!(normalize_column_name("Amount  "), "amount");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(normalize_column_name("Café Price"), "caf_price");
        assert_eq!(normalize_column_name("Tab\tSeparated"), "tabseparated");
    }

    #[test]
    fn test_nothing_usable() {
        assert_eq!(normalize_column_name("123"), "");
        assert_eq!(normalize_column_name("!!!"), "");
        assert_eq!(normalize_column_name(""), "");
    }

    #[test]
    fn test_output_is_valid_or_empty() {
        for input in [
            "My Col 1!",
            "  Leading spaces",
            "UPPER_CASE_",
            "9lives",
            "mixed-Case Name 2",
            "x",
            "$$$a$$$",
        ] {
            let out = normalize_column_name(input);
            assert!(
                out.is_empty() || validate_name(&out).is_none(),
                "{input:?} normalized to invalid {out:?}"
            );
        }
    }
}
