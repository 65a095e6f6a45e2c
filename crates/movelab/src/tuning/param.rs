use crate::jump::JumpSequence;

/// Values the debug panel can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TuningParam {
    WalkSpeed,
    SprintMultiplier,
    GroundDrag,
    AirDrag,
    AirControlMultiplier,
    InitialJumpForce,
    JumpDampeningFactor,
    JumpCount,
    Gravity,
}

impl TuningParam {
    pub const ALL: [TuningParam; 9] = [
        TuningParam::WalkSpeed,
        TuningParam::SprintMultiplier,
        TuningParam::GroundDrag,
        TuningParam::AirDrag,
        TuningParam::AirControlMultiplier,
        TuningParam::InitialJumpForce,
        TuningParam::JumpDampeningFactor,
        TuningParam::JumpCount,
        TuningParam::Gravity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TuningParam::WalkSpeed => "Walk speed",
            TuningParam::SprintMultiplier => "Sprint multiplier",
            TuningParam::GroundDrag => "Ground drag",
            TuningParam::AirDrag => "Air drag",
            TuningParam::AirControlMultiplier => "Air control",
            TuningParam::InitialJumpForce => "Jump force",
            TuningParam::JumpDampeningFactor => "Jump dampening",
            TuningParam::JumpCount => "Jump count",
            TuningParam::Gravity => "Gravity",
        }
    }

    /// Parameters that only take effect after the jump sequence is rebuilt.
    pub fn is_jump_param(&self) -> bool {
        matches!(
            self,
            TuningParam::InitialJumpForce
                | TuningParam::JumpDampeningFactor
                | TuningParam::JumpCount
        )
    }

    /// Clamps a finite value into the range the parameter accepts.
    /// Jump force and dampening pass through untouched; a dampening at or
    /// above one, or below zero, gives a non-decaying or sign-flipping
    /// sequence.
    pub fn normalize(&self, value: f32) -> f32 {
        match self {
            TuningParam::JumpCount => value
                .round()
                .clamp(0.0, JumpSequence::MAX_JUMP_COUNT as f32),
            TuningParam::JumpDampeningFactor | TuningParam::InitialJumpForce => value,
            _ => value.max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TuneError {
    #[error("invalid number for {}: {input:?}", .param.label())]
    InvalidNumber { param: TuningParam, input: String },
    #[error("{} must be finite, got {value}", .param.label())]
    NonFinite { param: TuningParam, value: f32 },
}

/// Read/write contract between the controller and a debug UI.
pub trait Tunable {
    fn get(&self, param: TuningParam) -> f32;

    /// Writes a value. Rejected values leave the previous one in effect.
    fn set(&mut self, param: TuningParam, value: f32) -> Result<(), TuneError>;

    /// Parses text typed into a field and writes it.
    fn apply_text(&mut self, param: TuningParam, text: &str) -> Result<(), TuneError> {
        let trimmed = text.trim();
        let value = trimmed.parse::<f32>().map_err(|_| {
            log::warn!("Invalid input for {}: {:?}", param.label(), text);
            TuneError::InvalidNumber {
                param,
                input: trimmed.to_string(),
            }
        })?;

        self.set(param, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_count_rounds_and_clamps() {
        assert_eq!(TuningParam::JumpCount.normalize(3.6), 4.0);
        assert_eq!(TuningParam::JumpCount.normalize(-2.0), 0.0);
        assert_eq!(
            TuningParam::JumpCount.normalize(9_999_999_999.0),
            JumpSequence::MAX_JUMP_COUNT as f32
        );
    }

    #[test]
    fn speeds_and_drags_never_go_negative() {
        assert_eq!(TuningParam::WalkSpeed.normalize(-1.0), 0.0);
        assert_eq!(TuningParam::AirDrag.normalize(-0.5), 0.0);
        assert_eq!(TuningParam::Gravity.normalize(-9.0), 0.0);
        assert_eq!(TuningParam::JumpDampeningFactor.normalize(-0.5), -0.5);
    }

    #[test]
    fn error_messages_name_the_parameter() {
        let err = TuneError::InvalidNumber {
            param: TuningParam::Gravity,
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid number for Gravity: \"abc\"");
    }
}
