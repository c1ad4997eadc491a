//! Peg colors
//!
//! Maps peg ids to display names and RGB values. Pegs carry only their id;
//! every front end looks colors up here.

use crate::core::Peg;

/// Display color of a peg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PegColor {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl PegColor {
    const fn new(name: &'static str, rgb: (u8, u8, u8)) -> Self {
        Self { name, rgb }
    }
}

/// Colors indexed by peg id
pub static PALETTE: [PegColor; Peg::ALPHABET_SIZE as usize] = [
    PegColor::new("Gray", (0x37, 0x41, 0x51)),
    PegColor::new("Red", (0xef, 0x44, 0x44)),
    PegColor::new("Orange", (0xf5, 0x9e, 0x0b)),
    PegColor::new("Yellow", (0xfa, 0xcc, 0x15)),
    PegColor::new("Green", (0x10, 0xb9, 0x81)),
    PegColor::new("Teal", (0x14, 0xb8, 0xa6)),
    PegColor::new("Blue", (0x3b, 0x82, 0xf6)),
    PegColor::new("Purple", (0x8b, 0x5c, 0xf6)),
    PegColor::new("Pink", (0xec, 0x48, 0x99)),
    PegColor::new("Brown", (0x4c, 0x21, 0x03)),
];

#[must_use]
pub fn peg_color(peg: Peg) -> &'static PegColor {
    &PALETTE[usize::from(peg.id())]
}

/// Whether a numeric label on this peg should be drawn in white
///
/// The darker swatches (gray, red, orange, pink) take white text, the rest black.
#[must_use]
pub const fn wants_light_label(peg: Peg) -> bool {
    matches!(peg.id(), 0..=2 | 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_peg_has_a_distinct_color() {
        let mut names: Vec<&str> = Peg::all().map(|peg| peg_color(peg).name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Peg::ALPHABET_SIZE as usize);
    }

    #[test]
    fn known_colors() {
        assert_eq!(peg_color(Peg::new(1).unwrap()).name, "Red");
        assert_eq!(peg_color(Peg::new(9).unwrap()).rgb, (0x4c, 0x21, 0x03));
    }

    #[test]
    fn label_contrast() {
        let light: Vec<u8> = Peg::all()
            .filter(|&peg| wants_light_label(peg))
            .map(Peg::id)
            .collect();
        assert_eq!(light, vec![0, 1, 2, 8]);
    }
}
