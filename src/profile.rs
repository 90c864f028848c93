use crate::finger::Finger;
use crate::range::MotionRange;
use glam::Vec3;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

// Range values must match the companion app!
pub static COMMON_CURL_RANGE: [MotionRange; 3] = [
    MotionRange::new(-1.2, 1.0),
    MotionRange::new(-1.0, 1.0),
    MotionRange::new(-1.0, 1.0),
];

pub static THUMB_CURL_RANGE: [MotionRange; 3] = [
    MotionRange::new(-3.0, 1.0),
    MotionRange::new(-1.0, 1.0),
    MotionRange::new(-1.0, 1.0),
];

pub static FINGER_SPLAY_RANGE: [MotionRange; 5] = [
    MotionRange::new(-1.5, 1.0), // index
    MotionRange::new(-2.0, 1.0),
    MotionRange::new(-3.0, 1.0),
    MotionRange::new(-3.0, 1.0),
    MotionRange::new(-2.0, 1.5), // thumb
];

/// User-adjustable calibration state: the range tables together with the
/// center offsets applied to the raw signal before remapping.
///
/// The common curl tables cover the four main fingers; the thumb gets its
/// own. The three entries within a curl table are positional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    pub common_curl: [MotionRange; 3],
    pub thumb_curl: [MotionRange; 3],
    pub finger_splay: [MotionRange; 5],
    pub common_curl_center: [f32; 3],
    pub thumb_curl_center: [f32; 3],
    pub finger_splay_center: [f32; 5],
    pub thumb_axis_offset: Vec3,
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self {
            common_curl: COMMON_CURL_RANGE,
            thumb_curl: THUMB_CURL_RANGE,
            finger_splay: FINGER_SPLAY_RANGE,
            common_curl_center: [0.0; 3],
            thumb_curl_center: [0.0; 3],
            finger_splay_center: [0.0; 5],
            thumb_axis_offset: Vec3::ZERO,
        }
    }
}

impl CalibrationProfile {
    #[inline]
    pub fn curl_range(&self, finger: Finger) -> &[MotionRange; 3] {
        match finger {
            Finger::Thumb => &self.thumb_curl,
            _ => &self.common_curl,
        }
    }

    #[inline]
    pub fn curl_center(&self, finger: Finger) -> &[f32; 3] {
        match finger {
            Finger::Thumb => &self.thumb_curl_center,
            _ => &self.common_curl_center,
        }
    }

    #[inline]
    pub fn splay_range(&self, finger: Finger) -> MotionRange {
        self.finger_splay[finger as usize]
    }

    #[inline]
    pub fn splay_center(&self, finger: Finger) -> f32 {
        self.finger_splay_center[finger as usize]
    }

    /// Maps the three raw curl values for `finger` onto `[0, 1]`.
    pub fn normalize_curl(&self, finger: Finger, raw: [f32; 3]) -> [f32; 3] {
        let ranges = self.curl_range(finger);
        let centers = self.curl_center(finger);
        std::array::from_fn(|i| ranges[i].remap(raw[i] - centers[i]))
    }

    /// Maps a raw splay value for `finger` onto `[0, 1]`.
    pub fn normalize_splay(&self, finger: Finger, raw: f32) -> f32 {
        self.splay_range(finger)
            .remap(raw - self.splay_center(finger))
    }

    /// Rejects profiles containing a range no value can be remapped through.
    pub fn validate(&self) -> Result<(), DegenerateRange> {
        let tables = [
            (RangeTable::CommonCurl, self.common_curl.as_slice()),
            (RangeTable::ThumbCurl, self.thumb_curl.as_slice()),
            (RangeTable::FingerSplay, self.finger_splay.as_slice()),
        ];
        for (table, ranges) in tables {
            if let Some(index) = ranges.iter().position(|r| r.span() == 0.0) {
                return Err(DegenerateRange { table, index });
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        if let Err(e) = profile.validate() {
            warn!("Loaded calibration profile with a {e}");
        }
        debug!("Loaded calibration profile: {profile:?}");
        Ok(profile)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Identifies one of the three calibration tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeTable {
    CommonCurl,
    ThumbCurl,
    FingerSplay,
}

/// A range whose start and end coincide.
#[derive(Debug, PartialEq, Eq)]
pub struct DegenerateRange {
    pub table: RangeTable,
    pub index: usize,
}

impl std::fmt::Display for DegenerateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "zero-span range at {:?}[{}]", self.table, self.index)
    }
}

impl std::error::Error for DegenerateRange {}
