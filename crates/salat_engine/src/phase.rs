//! The ordered phases of one prayer-time computation.

/// One unit of work in a computation. Phases run strictly in declaration
/// order; after [`Phase::LocalTime`] the cycle wraps to
/// [`Phase::HorizonAdjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    HorizonAdjustment,
    SunrisePosition,
    Sunrise,
    SunsetPosition,
    Sunset,
    NightLength,
    FajrPosition,
    FajrAnglePosition,
    FajrByAngle,
    FajrByMinutes,
    ImsakPosition,
    ImsakByAngle,
    ImsakByMinutes,
    DhuhrPosition,
    Dhuhr,
    AsrPosition,
    Asr,
    MaghribPosition,
    MaghribByAngle,
    MaghribByMinutes,
    IshaPosition,
    IshaByAngle,
    IshaByMinutes,
    ImsakHighLatitude,
    FajrHighLatitude,
    MaghribHighLatitude,
    IshaHighLatitude,
    Midnight,
    LocalTime,
}

impl Phase {
    pub const COUNT: usize = 29;

    pub const ALL: [Self; Self::COUNT] = [
        Self::HorizonAdjustment,
        Self::SunrisePosition,
        Self::Sunrise,
        Self::SunsetPosition,
        Self::Sunset,
        Self::NightLength,
        Self::FajrPosition,
        Self::FajrAnglePosition,
        Self::FajrByAngle,
        Self::FajrByMinutes,
        Self::ImsakPosition,
        Self::ImsakByAngle,
        Self::ImsakByMinutes,
        Self::DhuhrPosition,
        Self::Dhuhr,
        Self::AsrPosition,
        Self::Asr,
        Self::MaghribPosition,
        Self::MaghribByAngle,
        Self::MaghribByMinutes,
        Self::IshaPosition,
        Self::IshaByAngle,
        Self::IshaByMinutes,
        Self::ImsakHighLatitude,
        Self::FajrHighLatitude,
        Self::MaghribHighLatitude,
        Self::IshaHighLatitude,
        Self::Midnight,
        Self::LocalTime,
    ];

    /// Zero-based position in the cycle.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The phase that follows this one, wrapping to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    pub const fn is_first(self) -> bool {
        matches!(self, Self::HorizonAdjustment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, p) in Phase::ALL.iter().enumerate() {
            assert_eq!(p.index(), i, "{p:?}");
            assert_eq!(Phase::from_index(i), Some(*p));
        }
        assert_eq!(Phase::from_index(Phase::COUNT), None);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Phase::HorizonAdjustment.next(), Phase::SunrisePosition);
        assert_eq!(Phase::Midnight.next(), Phase::LocalTime);
        assert_eq!(Phase::LocalTime.next(), Phase::HorizonAdjustment);
    }

    #[test]
    fn known_indices() {
        assert_eq!(Phase::FajrAnglePosition.index(), 7);
        assert_eq!(Phase::Dhuhr.index(), 14);
        assert_eq!(Phase::ImsakHighLatitude.index(), 23);
        assert_eq!(Phase::LocalTime.index(), 28);
    }
}
