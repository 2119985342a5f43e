//! Static catalog of tumor region classes and raw label conventions

use serde::Serialize;

/// Number of non-background region classes
pub const TUMOR_CLASS_COUNT: usize = 3;

/// Largest valid region index stored in a label map
pub const MAX_REGION_INDEX: u8 = 3;

/// Tumor sub-region assigned to a voxel
///
/// The discriminant is the region index stored in a validated label map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionClass {
    /// Healthy tissue or outside the brain
    Background = 0,
    /// Peritumoral edema
    Edema = 1,
    /// Non-enhancing tumor core, including necrosis
    NonEnhancingCore = 2,
    /// Gadolinium-enhancing tumor
    EnhancingTumor = 3,
}

impl RegionClass {
    /// Non-background classes in reporting order
    pub const TUMOR_REGIONS: [Self; TUMOR_CLASS_COUNT] =
        [Self::Edema, Self::NonEnhancingCore, Self::EnhancingTumor];

    /// Look up the class stored under a region index
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Background),
            1 => Some(Self::Edema),
            2 => Some(Self::NonEnhancingCore),
            3 => Some(Self::EnhancingTumor),
            _ => None,
        }
    }

    /// Region index stored in a validated label map
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Position within [`Self::TUMOR_REGIONS`], `None` for background
    pub const fn tumor_slot(self) -> Option<usize> {
        match self {
            Self::Background => None,
            Self::Edema => Some(0),
            Self::NonEnhancingCore => Some(1),
            Self::EnhancingTumor => Some(2),
        }
    }

    /// Whether the class marks tumor tissue
    pub const fn is_tumor(self) -> bool {
        !matches!(self, Self::Background)
    }

    /// Human-readable name shown in results
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Edema => "Edema",
            Self::NonEnhancingCore => "Non-Enhancing/Necrotic Core",
            Self::EnhancingTumor => "Enhancing Tumor",
        }
    }

    /// Short clinical description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Background => "No tumor tissue",
            Self::Edema => "Swelling around tumor",
            Self::NonEnhancingCore => "Necrotic tumor core",
            Self::EnhancingTumor => "Active tumor growth",
        }
    }

    /// Overlay color as RGB
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Background => [0, 0, 0],
            Self::Edema => [0, 255, 0],
            Self::NonEnhancingCore => [255, 255, 0],
            Self::EnhancingTumor => [255, 0, 0],
        }
    }

    /// Overlay color as a `#RRGGBB` string
    pub fn hex_color(self) -> String {
        let [r, g, b] = self.color();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// Convention used by a segmentation model for its raw output labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LabelScheme {
    /// Raw labels already equal region indices 0..=3
    #[default]
    Contiguous,
    /// BraTS convention: 1 edema, 2 non-enhancing core, 4 enhancing, 3 unused
    Brats,
}

impl LabelScheme {
    /// Map a raw label to its region class, `None` if the scheme does not define it
    pub const fn classify(self, raw: u64) -> Option<RegionClass> {
        match (self, raw) {
            (_, 0) => Some(RegionClass::Background),
            (_, 1) => Some(RegionClass::Edema),
            (_, 2) => Some(RegionClass::NonEnhancingCore),
            (Self::Contiguous, 3) | (Self::Brats, 4) => Some(RegionClass::EnhancingTumor),
            _ => None,
        }
    }

    /// Largest raw label the scheme accepts
    pub const fn max_raw_label(self) -> u8 {
        match self {
            Self::Contiguous => 3,
            Self::Brats => 4,
        }
    }
}
