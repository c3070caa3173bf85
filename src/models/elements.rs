//! Element types and enumerations for staff exercises
//!
//! This module defines the core enums used throughout the exercise engine:
//! clefs, note letters, and accidental kinds.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::pitch::{PitchName, BASS_TABLE, TREBLE_TABLE};

/// Clef choices supported by the exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    /// G clef on the second staff line
    Treble,

    /// F clef on the fourth staff line
    Bass,
}

impl Clef {
    /// Parse a clef from the name the UI layer uses ("treble" / "bass")
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match text {
            "treble" => Ok(Clef::Treble),
            "bass" => Ok(Clef::Bass),
            other => Err(ConfigError::UnknownClef(other.to_string())),
        }
    }

    /// The clef's fixed pitch table, indexed by staff line, top to bottom
    pub fn pitch_table(&self) -> &'static [PitchName; 13] {
        match self {
            Clef::Treble => &TREBLE_TABLE,
            Clef::Bass => &BASS_TABLE,
        }
    }
}

/// Note letter names, octave-agnostic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Letter as it appears in grade reports ("C", "D", ...)
    pub fn name(&self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accidental applied to a placed mark
///
/// `None` is a real placement state (a plain scale note), distinct from
/// "no accidental selected yet", which the engine models as the absence of
/// a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalKind {
    Sharp,
    Flat,
    Natural,
    None,
}

impl AccidentalKind {
    /// Get the symbol for this accidental, as used in grade-report labels
    pub fn symbol(&self) -> &'static str {
        match self {
            AccidentalKind::Sharp => "#",
            AccidentalKind::Flat => "b",
            AccidentalKind::Natural => "n",
            AccidentalKind::None => "",
        }
    }

    /// Parse an accidental from the name the UI layer uses
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match text {
            "sharp" | "#" => Ok(AccidentalKind::Sharp),
            "flat" | "b" => Ok(AccidentalKind::Flat),
            "natural" | "n" => Ok(AccidentalKind::Natural),
            "none" | "" => Ok(AccidentalKind::None),
            other => Err(ConfigError::UnknownAccidental(other.to_string())),
        }
    }
}
