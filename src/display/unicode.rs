//! Unicode formatting utilities

/// Convert a string into a superscript string, ignoring invalid characters
#[must_use]
pub fn superscript(s: &str) -> String {
    s.chars().filter_map(to_superscript).collect()
}

/// Greek symbols used in curve equations and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Greek {
    /// θ
    LowerTheta = 'θ' as u32,

    /// π
    LowerPi = 'π' as u32,
}
impl Greek {
    /// The symbol as a `char`
    #[must_use]
    pub fn char(self) -> char {
        match self {
            Greek::LowerTheta => 'θ',
            Greek::LowerPi => 'π',
        }
    }
}
impl std::fmt::Display for Greek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// The square root sign
pub const SQRT: char = '√';

/// The true minus sign, used instead of a hyphen in rendered equations
pub const MINUS: char = '−';

fn to_superscript(c: char) -> Option<char> {
    match c {
        '0' => Some('⁰'),
        '1' => Some('¹'),
        '2' => Some('²'),
        '3' => Some('³'),
        '4' => Some('⁴'),
        '5' => Some('⁵'),
        '6' => Some('⁶'),
        '7' => Some('⁷'),
        '8' => Some('⁸'),
        '9' => Some('⁹'),
        '+' => Some('⁺'),
        '-' => Some('⁻'),
        '=' => Some('⁼'),
        '(' => Some('⁽'),
        ')' => Some('⁾'),
        _ => None,
    }
}
