/// Winning value of a plurality vote and how many ballots it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vote<T> {
    pub value: T,
    pub count: usize,
}

/// Select the most frequent value by exact equality.
///
/// Distinct values are tallied in the order they are first seen. Among values
/// with the highest count, the one seen first wins, so the result depends only
/// on the input order. Returns `None` for empty input.
pub fn plurality<I, T>(values: I) -> Option<Vote<T>>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut tally: Vec<Vote<T>> = Vec::new();
    for value in values {
        match tally.iter_mut().find(|v| v.value == value) {
            Some(existing) => existing.count += 1,
            None => tally.push(Vote { value, count: 1 }),
        }
    }

    let mut winner: Option<Vote<T>> = None;
    for candidate in tally {
        // Strictly greater: an equal count never displaces an earlier value.
        if winner.as_ref().map_or(true, |w| candidate.count > w.count) {
            winner = Some(candidate);
        }
    }
    winner
}
