//! Aspect-ratio classification.
//!
//! Classification is a pure function of `width / height * 144`. The
//! tolerance windows are deliberately asymmetric around the exact ratios
//! (81 for 9:16, 256 for 16:9) to absorb encoder rounding; the thresholds
//! are a contract, not tunables.

/// Orientation bucket for an inspected video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// Roughly 9:16 (vertical).
    Portrait,
    /// Roughly 16:9 (horizontal).
    Landscape,
    /// Anything else.
    Other,
}

impl AspectRatio {
    /// Display label, as reported to clients.
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "9:16",
            AspectRatio::Landscape => "16:9",
            AspectRatio::Other => "other",
        }
    }

    /// Remote-key path prefix, so storage layout reflects orientation.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "portrait",
            AspectRatio::Landscape => "landscape",
            AspectRatio::Other => "other",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify reported stream dimensions into an orientation bucket.
///
/// Boundary values (72, 90, 240, 272) are exclusive.
pub fn classify_aspect(width: u32, height: u32) -> AspectRatio {
    let ratio144 = width as f64 / height as f64 * 144.0;
    if ratio144 > 72.0 && ratio144 < 90.0 {
        AspectRatio::Portrait
    } else if ratio144 > 240.0 && ratio144 < 272.0 {
        AspectRatio::Landscape
    } else {
        AspectRatio::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_dimensions() {
        assert_eq!(classify_aspect(1080, 1920), AspectRatio::Portrait);
        assert_eq!(classify_aspect(1920, 1080), AspectRatio::Landscape);
        assert_eq!(classify_aspect(1000, 1000), AspectRatio::Other);
    }

    #[test]
    fn common_encoder_variants() {
        // 608x1080 ~ 0.563 aspect, ratio144 ~ 81.07
        assert_eq!(classify_aspect(608, 1080), AspectRatio::Portrait);
        // 1280x720 exact 16:9
        assert_eq!(classify_aspect(1280, 720), AspectRatio::Landscape);
        // 4:3 content falls outside both windows
        assert_eq!(classify_aspect(640, 480), AspectRatio::Other);
        // 2.39:1 cinemascope: ratio144 ~ 344
        assert_eq!(classify_aspect(2048, 858), AspectRatio::Other);
    }

    #[test]
    fn window_boundaries_are_exclusive() {
        // ratio144 == 72 exactly (width/height == 0.5)
        assert_eq!(classify_aspect(720, 1440), AspectRatio::Other);
        // ratio144 == 90 exactly (width/height == 0.625)
        assert_eq!(classify_aspect(900, 1440), AspectRatio::Other);
        // ratio144 == 240 exactly (width/height == 5/3)
        assert_eq!(classify_aspect(2400, 1440), AspectRatio::Other);
        // ratio144 == 272 exactly (width/height == 17/9)
        assert_eq!(classify_aspect(2720, 1440), AspectRatio::Other);
    }

    #[test]
    fn just_inside_the_windows() {
        // ratio144 ~ 72.07
        assert_eq!(classify_aspect(721, 1441), AspectRatio::Portrait);
        // ratio144 ~ 240.17
        assert_eq!(classify_aspect(2401, 1439), AspectRatio::Landscape);
    }

    #[test]
    fn labels_and_prefixes() {
        assert_eq!(AspectRatio::Portrait.label(), "9:16");
        assert_eq!(AspectRatio::Landscape.label(), "16:9");
        assert_eq!(AspectRatio::Other.label(), "other");
        assert_eq!(AspectRatio::Portrait.key_prefix(), "portrait");
    }
}
