//! Union placement flags.
//!
//! A `Placement` says where a spliced or mounted tree enters the union
//! directory at its target, plus the auxiliary create/cache modifiers.
//! The bit values are part of the persisted format and never change.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Checked bitmask over the placement flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement(u16);

impl Placement {
    /// Replace whatever is at the target. The zero value.
    pub const REPLACE: Placement = Placement(0x0000);
    /// Insert at the front of the union search order.
    pub const BEFORE: Placement = Placement(0x0001);
    /// Insert at the back of the union search order.
    pub const AFTER: Placement = Placement(0x0002);
    /// Creates in the union land in this member.
    pub const CREATE: Placement = Placement(0x0004);
    /// Enable client-side caching (mounts only).
    pub const CACHE: Placement = Placement(0x0010);

    // 0x0008 is reserved.
    const VALID: u16 = 0x0017;

    /// Canonical flag-token order.
    const FLAG_CHARS: [(char, Placement); 4] = [
        ('a', Placement::AFTER),
        ('b', Placement::BEFORE),
        ('c', Placement::CREATE),
        ('C', Placement::CACHE),
    ];

    /// The raw bit representation.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Build a placement from raw bits, rejecting reserved or unknown bits.
    pub const fn from_bits(bits: u16) -> Option<Placement> {
        if bits & !Self::VALID == 0 {
            Some(Placement(bits))
        } else {
            None
        }
    }

    /// True when every flag in `other` is set in `self`.
    pub const fn contains(self, other: Placement) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when neither `BEFORE` nor `AFTER` is set.
    pub const fn is_replace(self) -> bool {
        self.0 & (Self::BEFORE.0 | Self::AFTER.0) == 0
    }

    /// Map one flag-token character to its flag. Unknown characters map to `None`.
    pub fn from_flag_char(c: char) -> Option<Placement> {
        Self::FLAG_CHARS
            .iter()
            .find(|(flag, _)| *flag == c)
            .map(|(_, placement)| *placement)
    }

    /// Render the flag characters in canonical `abcC` order.
    ///
    /// Returns an empty string for a plain replace.
    pub fn flag_string(self) -> String {
        Self::FLAG_CHARS
            .iter()
            .filter(|(_, placement)| self.contains(*placement))
            .map(|(flag, _)| *flag)
            .collect()
    }

    /// Where the new member goes in the union.
    ///
    /// When both `BEFORE` and `AFTER` are set, `AFTER` wins.
    pub const fn position(self) -> UnionPosition {
        if self.contains(Self::AFTER) {
            UnionPosition::After
        } else if self.contains(Self::BEFORE) {
            UnionPosition::Before
        } else {
            UnionPosition::Replace
        }
    }
}

impl BitOr for Placement {
    type Output = Placement;

    fn bitor(self, rhs: Placement) -> Placement {
        Placement(self.0 | rhs.0)
    }
}

impl BitOrAssign for Placement {
    fn bitor_assign(&mut self, rhs: Placement) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("REPLACE");
        }
        let names = [
            (Placement::BEFORE, "BEFORE"),
            (Placement::AFTER, "AFTER"),
            (Placement::CREATE, "CREATE"),
            (Placement::CACHE, "CACHE"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Resolved position of a new union member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionPosition {
    Replace,
    Before,
    After,
}
