enum_str! {
    /// The part of the face relative to which a mask should be placed.
    MaskFeature {
        Forehead = "forehead",
        Eyes = "eyes",
        Mouth = "mouth",
        Chin = "chin",
    }
}

/// The position on faces where a mask should be placed by default.
///
/// [Bot API docs](https://core.telegram.org/bots/api#maskposition).
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct MaskPosition {
    /// The facial feature the mask is anchored to.
    #[serde(rename = "point")]
    pub feature: MaskFeature,
    /// Shift by X-axis measured in widths of the mask scaled to the face size, from left to
    /// right. For example, choosing `-1.0` will place mask just to the left of the default mask
    /// position.
    pub x_shift: f64,
    /// Shift by Y-axis measured in heights of the mask scaled to the face size, from top to
    /// bottom. For example, `1.0` will place the mask just below the default mask position.
    pub y_shift: f64,
    /// Mask scaling coefficient. For example, `2.0` means double size.
    pub scale: f64,
}

impl MaskPosition {
    /// A mask anchored to `feature` with no shift and its natural size.
    #[must_use]
    pub fn new(feature: MaskFeature) -> Self {
        Self {
            feature,
            x_shift: 0.0,
            y_shift: 0.0,
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn shift(mut self, x_shift: f64, y_shift: f64) -> Self {
        self.x_shift = x_shift;
        self.y_shift = y_shift;
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}
