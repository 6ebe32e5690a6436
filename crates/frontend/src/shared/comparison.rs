/// Derives the chartable (current, previous) totals from a backend
/// comparison sentence.
///
/// The backend sends free text of the form
/// `"Sales for 2011-08: $40614.34\nSales for 2011-07: $39421.90\n..."`.
/// The first two lines carry the totals; each is split on `": "`, the
/// leading `$` stripped and the remainder parsed as a float. The wording
/// before the colon is not inspected, so the parse survives label
/// changes but not punctuation changes.
pub fn parse_comparison_pair(text: &str) -> Option<(f64, f64)> {
    let mut lines = text.lines();
    let current = parse_amount_line(lines.next()?)?;
    let previous = parse_amount_line(lines.next()?)?;
    Some((current, previous))
}

fn parse_amount_line(line: &str) -> Option<f64> {
    let (_, amount) = line.split_once(": ")?;
    amount.trim().trim_start_matches('$').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_two_leading_amounts() {
        let text = "Month Sales: $1234.50\nPrevious Month Sales: $987.00";
        assert_eq!(parse_comparison_pair(text), Some((1234.50, 987.00)));
    }

    #[test]
    fn parses_the_full_backend_sentence() {
        let text = "Sales for 2011-08: $40614.34\n\
                    Sales for 2011-07: $39421.90\n\
                    Change: Increase\n\
                    Percentage Change: 3.02%";
        assert_eq!(parse_comparison_pair(text), Some((40614.34, 39421.90)));
    }

    #[test]
    fn reworded_or_truncated_sentences_yield_no_pair() {
        assert_eq!(parse_comparison_pair(""), None);
        assert_eq!(parse_comparison_pair("Sales for 2011-08: $40614.34"), None);
        assert_eq!(
            parse_comparison_pair("no colon here\nnone here either"),
            None
        );
        assert_eq!(parse_comparison_pair("Sales: $abc\nSales: $1.0"), None);
    }
}
