//! Movement command vocabulary and the victory sentinel.
//!
//! The checker speaks a newline-delimited text protocol. The client may send
//! exactly four command strings (kept untranslated, byte-for-byte as the
//! checker expects them) and the session ends on one fixed reply line.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The reply line that ends the session.
pub const VICTORY: &str = "Победа";

/// One movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Up,
    Left,
    Right,
    Down,
}

impl Command {
    /// The full command vocabulary, in protocol order.
    pub const ALL: [Command; 4] = [Command::Up, Command::Left, Command::Right, Command::Down];

    /// Wire literal for this command, without the line terminator.
    pub fn wire(self) -> &'static str {
        match self {
            Command::Up => "Движение Вверх",
            Command::Left => "Движение Влево",
            Command::Right => "Движение Вправо",
            Command::Down => "Движение Вниз",
        }
    }

    /// Pick one command uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Command {
        // ALL is a non-empty const, so choose() cannot return None
        *Command::ALL.choose(rng).expect("command set is non-empty")
    }
}

/// RNG for the walk: seeded for reproducible runs, OS-seeded otherwise.
pub fn walk_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Check whether a received line announces victory.
///
/// Only the line terminator is stripped before comparing. Any other
/// difference (case, extra whitespace, a partial match) is not a win.
pub fn is_victory(line: &str) -> bool {
    let body = line.strip_suffix('\n').unwrap_or(line);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body == VICTORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_has_four_distinct_commands() {
        let wires: HashSet<&str> = Command::ALL.iter().map(|c| c.wire()).collect();
        assert_eq!(Command::ALL.len(), 4);
        assert_eq!(wires.len(), 4);
    }

    #[test]
    fn test_wire_literals() {
        assert_eq!(Command::Up.wire(), "Движение Вверх");
        assert_eq!(Command::Left.wire(), "Движение Влево");
        assert_eq!(Command::Right.wire(), "Движение Вправо");
        assert_eq!(Command::Down.wire(), "Движение Вниз");
    }

    #[test]
    fn test_every_command_is_selectable() {
        let mut rng = walk_rng(Some(42));
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(Command::random(&mut rng));
        }
        assert_eq!(seen.len(), 4, "all four commands should appear in 1000 draws");
    }

    #[test]
    fn test_seeded_walk_is_reproducible() {
        let mut a = walk_rng(Some(7));
        let mut b = walk_rng(Some(7));
        for _ in 0..10 {
            assert_eq!(Command::random(&mut a), Command::random(&mut b));
        }
    }

    #[test]
    fn test_victory_with_and_without_terminator() {
        assert!(is_victory("Победа"));
        assert!(is_victory("Победа\n"));
        assert!(is_victory("Победа\r\n"));
    }

    #[test]
    fn test_near_misses_are_not_victory() {
        assert!(!is_victory("ПОБЕДА\n"));
        assert!(!is_victory("победа\n"));
        assert!(!is_victory("Победа \n"));
        assert!(!is_victory(" Победа\n"));
        assert!(!is_victory("Победа!\n"));
        assert!(!is_victory("Побед\n"));
        assert!(!is_victory("\n"));
        assert!(!is_victory(""));
    }
}
