//! Opening book
//!
//! A list of well-known opening lines in the same notation the game records.
//! While the game history is a prefix of at least one line the engine plays
//! that line's next move instead of searching. When several lines match,
//! one is picked at random, so lines sharing a prefix weight their common
//! moves.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Built-in lines, one opening per entry
const STANDARD_LINES: &[&str] = &[
    // Ruy Lopez
    "e4 e5 Nf3 Nc6 Bb5 a6 Ba4 Nf6 O-O Be7",
    // Giuoco Piano
    "e4 e5 Nf3 Nc6 Bc4 Bc5 c3 Nf6 d4 exd4",
    // Sicilian, Najdorf
    "e4 c5 Nf3 d6 d4 cxd4 Nxd4 Nf6 Nc3 a6",
    // French, Classical
    "e4 e6 d4 d5 Nc3 Nf6 Bg5 Be7 e5 Nfd7",
    // Caro-Kann, Classical
    "e4 c6 d4 d5 Nc3 dxe4 Nxe4 Bf5 Ng3 Bg6",
    // Queen's Gambit Declined
    "d4 d5 c4 e6 Nc3 Nf6 Bg5 Be7 e3 O-O",
    // Slav
    "d4 d5 c4 c6 Nf3 Nf6 Nc3 dxc4 a4 Bf5",
    // King's Indian
    "d4 Nf6 c4 g6 Nc3 Bg7 e4 d6 Nf3 O-O",
    // Nimzo-Indian
    "d4 Nf6 c4 e6 Nc3 Bb4 e3 O-O Bd3 d5",
    // English, Four Knights
    "c4 e5 Nc3 Nf6 Nf3 Nc6 g3 d5 cxd5 Nxd5",
    // Reti
    "Nf3 d5 g3 Nf6 Bg2 c6 O-O Bg4 d3 Nbd7",
];

/// Opening lines consulted before searching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningBook {
    lines: Vec<Vec<String>>,
}

impl OpeningBook {
    /// The built-in set of lines
    pub fn standard() -> Self {
        Self::from_lines(STANDARD_LINES.iter().copied())
    }

    /// Book from whitespace-separated move lists
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .map(|line| line.as_ref().split_whitespace().map(normalise).collect::<Vec<_>>())
            .filter(|line: &Vec<String>| !line.is_empty())
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Next move of every line that continues `history`, one per line
    pub fn continuations(&self, history: &[String]) -> Vec<&str> {
        self.matching(history)
            .into_iter()
            .map(|line| line[history.len()].as_str())
            .collect()
    }

    /// Next move of a randomly chosen line that continues `history`
    pub fn pick<R: Rng + ?Sized>(&self, history: &[String], rng: &mut R) -> Option<&str> {
        self.matching(history)
            .choose(rng)
            .copied()
            .map(|line| line[history.len()].as_str())
    }

    fn matching(&self, history: &[String]) -> Vec<&Vec<String>> {
        self.lines
            .iter()
            .filter(|line| {
                line.len() > history.len()
                    && line
                        .iter()
                        .zip(history)
                        .all(|(book, played)| *book == normalise(played))
            })
            .collect()
    }
}

fn normalise(san: &str) -> String {
    san.trim_end_matches(['+', '#']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|mv| mv.to_string()).collect()
    }

    #[test]
    fn test_every_standard_line_is_playable() {
        let book = OpeningBook::standard();
        for line in &book.lines {
            let game = Game::from_moves(line.iter().map(String::as_str));
            assert!(game.is_ok(), "line {:?} failed: {:?}", line, game.err());
        }
    }

    #[test]
    fn test_first_moves_from_start() {
        let book = OpeningBook::standard();
        let mut first = book.continuations(&[]);
        first.sort();
        first.dedup();
        assert_eq!(first, vec!["Nf3", "c4", "d4", "e4"]);
    }

    #[test]
    fn test_continuations_follow_prefix() {
        let book = OpeningBook::standard();
        let mut next = book.continuations(&history(&["e4", "e5", "Nf3", "Nc6"]));
        next.sort();
        assert_eq!(next, vec!["Bb5", "Bc4"]);
    }

    #[test]
    fn test_out_of_book_returns_nothing() {
        let book = OpeningBook::standard();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(book.pick(&history(&["a4"]), &mut rng).is_none());
    }

    #[test]
    fn test_pick_is_reproducible_with_seed() {
        let book = OpeningBook::standard();
        let first = book.pick(&[], &mut StdRng::seed_from_u64(7)).map(str::to_string);
        let second = book.pick(&[], &mut StdRng::seed_from_u64(7)).map(str::to_string);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_markers_ignored() {
        let book = OpeningBook::from_lines(["e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7#"]);
        let next = book.continuations(&history(&["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"]));
        assert_eq!(next, vec!["Qxf7"]);
    }
}
