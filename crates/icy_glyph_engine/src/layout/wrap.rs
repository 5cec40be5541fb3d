/// Splits `line` into chunks of at most `cap` chars.
///
/// A chunk ends at the last space at or before column `cap` (the space itself
/// is dropped); without such a space the line is cut hard at `cap`. An empty
/// line yields one empty chunk.
pub fn wrap_line(line: &str, cap: usize) -> Vec<String> {
    let cap = cap.max(1);
    let mut rest: Vec<char> = line.chars().collect();
    let mut chunks = Vec::new();

    while rest.len() > cap {
        let break_at = (1..=cap).rev().find(|&i| rest[i] == ' ');
        match break_at {
            Some(i) => {
                chunks.push(rest[..i].iter().collect());
                rest.drain(..=i);
            }
            None => {
                chunks.push(rest[..cap].iter().collect());
                rest.drain(..cap);
            }
        }
    }
    chunks.push(rest.into_iter().collect());
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_prefers_word_boundary() {
        assert_eq!(vec!["HELLO", "WORLD"], wrap_line("HELLO WORLD", 5));
        assert_eq!(vec!["A B", "CD"], wrap_line("A B CD", 4));
    }

    #[test]
    fn test_wrap_last_space_wins() {
        assert_eq!(vec!["AB CD", "EF"], wrap_line("AB CD EF", 6));
    }

    #[test]
    fn test_wrap_hard_cut() {
        assert_eq!(vec!["ABCD", "EFGH", "IJ"], wrap_line("ABCDEFGHIJ", 4));
    }

    #[test]
    fn test_wrap_short_lines_untouched() {
        assert_eq!(vec!["HI"], wrap_line("HI", 5));
        assert_eq!(vec!["HELLO"], wrap_line("HELLO", 5));
        assert_eq!(vec![""], wrap_line("", 5));
    }

    #[test]
    fn test_wrap_leading_space_is_not_a_break() {
        assert_eq!(vec![" ABC", "DEF"], wrap_line(" ABCDEF", 4));
    }

    #[test]
    fn test_wrap_counts_chars() {
        assert_eq!(vec!["ÄÖÜ", "ÄÖ"], wrap_line("ÄÖÜÄÖ", 3));
    }
}
