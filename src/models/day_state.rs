use serde::Serialize;

/// Per-day attendance classification.
/// Weekend (`BH`) is derived from the calendar and is never an
/// editable state; the three-state cycle only touches O/H/L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayState {
    Office,  // O
    Home,    // H
    Leave,   // L
    Weekend, // BH
}

impl DayState {
    pub fn code(&self) -> &'static str {
        match self {
            DayState::Office => "O",
            DayState::Home => "H",
            DayState::Leave => "L",
            DayState::Weekend => "BH",
        }
    }

    /// Convert store string → enum.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "O" => Some(DayState::Office),
            "H" => Some(DayState::Home),
            "L" => Some(DayState::Leave),
            "BH" => Some(DayState::Weekend),
            _ => None,
        }
    }

    /// Next state in the activation ring O → H → L → O.
    /// Weekend does not participate and maps to itself.
    pub fn cycled(&self) -> Self {
        match self {
            DayState::Office => DayState::Home,
            DayState::Home => DayState::Leave,
            DayState::Leave => DayState::Office,
            DayState::Weekend => DayState::Weekend,
        }
    }
}
