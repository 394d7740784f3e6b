//! Which input sets a run covers, decided from the argument list handed to the runner.

/// The fixed, ordered set of input-set letters.
pub const IDENTIFIERS: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

/// Whether `letter` should be run. Only `args[1]` is consulted; without it every
/// letter is included. An empty filter includes everything too.
pub fn includes(args: &[String], letter: char) -> bool {
    args.get(1)
        .is_none_or(|filter| filter.is_empty() || filter.contains(letter))
}

/// The included letters, in identifier order.
pub fn selected(args: &[String]) -> Vec<char> {
    IDENTIFIERS
        .into_iter()
        .filter(|&letter| includes(args, letter))
        .collect()
}
