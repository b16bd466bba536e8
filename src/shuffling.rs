//! Card position tracking through cuts, deals and faro shuffles.
//!
//! Instructions are plain text lines. Anything that does not start with
//! `cut`, `deal` or `shuffle` is skipped.

use tracing::debug;

use crate::error::DrillError;

/// One deck manipulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Move the top `n` cards to the bottom; negative `n` counts from the bottom.
    Cut(isize),
    /// Deal the whole deck onto a new pile, reversing it.
    Deal,
    /// Faro out-shuffle: perfect interleave keeping the top card on top.
    Shuffle,
}

impl Instruction {
    /// Parse one instruction line.
    ///
    /// Returns `Ok(None)` for lines that are not instructions. A `cut` line
    /// takes its count from the last whitespace-separated token.
    pub fn parse(line: &str) -> Result<Option<Self>, DrillError> {
        let line = line.trim();

        if line.starts_with("cut") {
            let count = line
                .split_whitespace()
                .last()
                .and_then(|token| token.parse::<isize>().ok())
                .ok_or_else(|| DrillError::InvalidInstruction(line.to_string()))?;
            Ok(Some(Instruction::Cut(count)))
        } else if line.starts_with("deal") {
            Ok(Some(Instruction::Deal))
        } else if line.starts_with("shuffle") {
            Ok(Some(Instruction::Shuffle))
        } else {
            Ok(None)
        }
    }
}

/// Ordered deck; index 0 is the top card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<usize>,
}

impl Deck {
    /// Deck of cards numbered `0..size`, in order.
    pub fn new(size: usize) -> Self {
        Self {
            cards: (0..size).collect(),
        }
    }

    pub fn cards(&self) -> &[usize] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Becomes `deck[n..] ++ deck[..n]`, with out-of-range counts clamped.
    pub fn cut(&mut self, n: isize) {
        let len = self.cards.len();
        let split = if n >= 0 {
            n.unsigned_abs().min(len)
        } else {
            len - n.unsigned_abs().min(len)
        };
        self.cards.rotate_left(split);
    }

    pub fn deal(&mut self) {
        self.cards.reverse();
    }

    /// Top half goes to the even positions, bottom half to the odd ones.
    pub fn faro_shuffle(&mut self) -> Result<(), DrillError> {
        let len = self.cards.len();
        if len % 2 != 0 {
            return Err(DrillError::OddDeckFaro(len));
        }

        let (top, bottom) = self.cards.split_at(len / 2);
        let shuffled: Vec<usize> = top
            .iter()
            .zip(bottom)
            .flat_map(|(&a, &b)| [a, b])
            .collect();
        self.cards = shuffled;
        Ok(())
    }

    pub fn apply(&mut self, instruction: Instruction) -> Result<(), DrillError> {
        match instruction {
            Instruction::Cut(n) => self.cut(n),
            Instruction::Deal => self.deal(),
            Instruction::Shuffle => self.faro_shuffle()?,
        }
        Ok(())
    }

    pub fn position_of(&self, card: usize) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }
}

/// Position of `card` after running `instructions` over a fresh deck.
///
/// `Ok(None)` when the card is not in the deck.
pub fn find_card_position<S: AsRef<str>>(
    deck_size: usize,
    instructions: &[S],
    card: usize,
) -> Result<Option<usize>, DrillError> {
    let mut deck = Deck::new(deck_size);

    for line in instructions {
        if let Some(instruction) = Instruction::parse(line.as_ref())? {
            deck.apply(instruction)?;
        }
    }

    let position = deck.position_of(card);
    debug!(
        deck_size,
        instructions = instructions.len(),
        card,
        position = ?position,
        "tracked card position"
    );
    Ok(position)
}
