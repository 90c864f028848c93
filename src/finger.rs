/// Finger indices as used by the splay table: 0 is the index finger, 4 the
/// thumb.
#[repr(usize)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Finger {
    Index = 0,
    Middle,
    Ring,
    Pinky,
    Thumb,
}

impl TryFrom<usize> for Finger {
    type Error = ();
    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            x if x == Finger::Index as usize => Ok(Finger::Index),
            x if x == Finger::Middle as usize => Ok(Finger::Middle),
            x if x == Finger::Ring as usize => Ok(Finger::Ring),
            x if x == Finger::Pinky as usize => Ok(Finger::Pinky),
            x if x == Finger::Thumb as usize => Ok(Finger::Thumb),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Finger;

    #[test]
    fn positional_contract() {
        assert_eq!(Finger::Index as usize, 0);
        assert_eq!(Finger::Middle as usize, 1);
        assert_eq!(Finger::Ring as usize, 2);
        assert_eq!(Finger::Pinky as usize, 3);
        assert_eq!(Finger::Thumb as usize, 4);
    }

    #[test]
    fn try_from_round_trips() {
        for finger in [
            Finger::Index,
            Finger::Middle,
            Finger::Ring,
            Finger::Pinky,
            Finger::Thumb,
        ] {
            assert_eq!(Finger::try_from(finger as usize), Ok(finger));
        }
        assert_eq!(Finger::try_from(5), Err(()));
    }
}
