/// Field view over a fetched instruction byte.
///
/// ```text
///   7 6 | 5 4 3 | 2 1 0
///    x  |   y   |   z
///       | p   q |
/// ```
///
/// `p`/`q` are an alternate split of `y` (`p = y >> 1`, `q = y & 1`). Every
/// dispatch decision in the interpreter is made from these five fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Opcode(pub u8);

impl Opcode {
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 >> 6
    }

    #[inline]
    pub const fn y(self) -> u8 {
        (self.0 >> 3) & 0x07
    }

    #[inline]
    pub const fn z(self) -> u8 {
        self.0 & 0x07
    }

    #[inline]
    pub const fn p(self) -> u8 {
        self.y() >> 1
    }

    #[inline]
    pub const fn q(self) -> u8 {
        self.y() & 0x01
    }
}
