use super::patterns::Directive;

/// Position relative to an `#if os(Linux)` guard.
///
/// Guards do not nest: the first `#end...` line seen inside a guard closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    #[default]
    Outside,
    LinuxArm,
    ElseArm,
}

impl GuardState {
    pub fn advance(self, line: &str) -> Self {
        match (self, Directive::parse(line)) {
            (Self::Outside, Some(Directive::IfLinux)) => Self::LinuxArm,
            (Self::LinuxArm, Some(Directive::Else)) => Self::ElseArm,
            (Self::LinuxArm | Self::ElseArm, Some(Directive::End)) => Self::Outside,
            (state, _) => state,
        }
    }

    /// Lines in the non-Linux arm are never matched.
    pub fn suppresses(self) -> bool {
        self == Self::ElseArm
    }
}
