//! Framing takeoff for a single wall run
//!
//! Common stud counts: one stud every layout interval plus one to close the
//! run, then king and jack studs added per opening. Plate stock is the wall
//! length times the plate count (single bottom, double top by default).

use serde::{Deserialize, Serialize};

/// Stud layout spacing, on-center inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudSpacing {
    /// 16" on center
    Sixteen,
    /// 24" on center
    TwentyFour,
}

impl StudSpacing {
    /// Spacing in inches
    #[inline]
    #[must_use]
    pub fn inches(self) -> f64 {
        match self {
            StudSpacing::Sixteen => 16.0,
            StudSpacing::TwentyFour => 24.0,
        }
    }
}

/// Framing calculator errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FramingError {
    /// Wall length must be positive
    #[error("wall length must be positive, got {0}\"")]
    NonPositiveLength(f64),

    /// An opening is wider than the wall itself
    #[error("opening {opening}\" wider than wall {wall}\"")]
    OpeningWiderThanWall { opening: f64, wall: f64 },
}

/// Input for a wall framing takeoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingInput {
    /// Wall run length, inches
    pub wall_length_in: f64,
    /// Stud spacing
    pub spacing: StudSpacing,
    /// Number of plates (bottom + top layers)
    pub plate_count: u32,
    /// Rough opening widths, inches (doors, windows)
    pub opening_widths_in: Vec<f64>,
}

impl FramingInput {
    /// Takeoff for a plain wall: 16" centers, single bottom + double top plate
    #[must_use]
    pub fn new(wall_length_in: f64) -> Self {
        Self {
            wall_length_in,
            spacing: StudSpacing::Sixteen,
            plate_count: 3,
            opening_widths_in: Vec::new(),
        }
    }

    /// With a stud spacing
    #[inline]
    #[must_use]
    pub fn with_spacing(mut self, spacing: StudSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// With a rough opening
    #[inline]
    #[must_use]
    pub fn with_opening(mut self, width_in: f64) -> Self {
        self.opening_widths_in.push(width_in);
        self
    }
}

/// Takeoff result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingResult {
    /// Common studs on layout, including both ends
    pub stud_count: u32,
    /// King studs (one per side of each opening)
    pub king_studs: u32,
    /// Jack (trimmer) studs (one per side of each opening)
    pub jack_studs: u32,
    /// Header stock lengths, inches (opening width plus jack bearing)
    pub headers_in: Vec<f64>,
    /// Plate stock, linear feet
    pub plate_lf: f64,
}

impl FramingResult {
    /// Total stick count to order (commons + kings + jacks)
    #[inline]
    #[must_use]
    pub fn total_studs(&self) -> u32 {
        self.stud_count + self.king_studs + self.jack_studs
    }
}

/// Jack studs bear the header; it runs 1.5" past the opening on each side.
const HEADER_BEARING_IN: f64 = 3.0;

/// Calculate a framing takeoff for one wall run
///
/// # Errors
/// Rejects non-positive wall lengths and openings wider than the wall.
pub fn calculate_framing(input: &FramingInput) -> Result<FramingResult, FramingError> {
    if input.wall_length_in <= 0.0 {
        return Err(FramingError::NonPositiveLength(input.wall_length_in));
    }
    for &opening in &input.opening_widths_in {
        if opening > input.wall_length_in {
            return Err(FramingError::OpeningWiderThanWall {
                opening,
                wall: input.wall_length_in,
            });
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stud_count = (input.wall_length_in / input.spacing.inches()).floor() as u32 + 1;

    #[allow(clippy::cast_possible_truncation)]
    let opening_count = input.opening_widths_in.len() as u32;
    let king_studs = opening_count * 2;
    let jack_studs = opening_count * 2;

    let headers_in = input
        .opening_widths_in
        .iter()
        .map(|w| w + HEADER_BEARING_IN)
        .collect();

    let plate_lf = input.wall_length_in * f64::from(input.plate_count) / 12.0;

    Ok(FramingResult {
        stud_count,
        king_studs,
        jack_studs,
        headers_in,
        plate_lf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_foot_wall_sixteen_oc() {
        // 96" / 16" = 6 bays, 7 studs.
        let result = calculate_framing(&FramingInput::new(96.0)).unwrap();
        assert_eq!(result.stud_count, 7);
        assert_eq!(result.king_studs, 0);
        // Three plates on an 8' wall is 24 lf.
        assert!((result.plate_lf - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn twenty_four_oc_uses_fewer_studs() {
        let sixteen = calculate_framing(&FramingInput::new(144.0)).unwrap();
        let twenty_four = calculate_framing(
            &FramingInput::new(144.0).with_spacing(StudSpacing::TwentyFour),
        )
        .unwrap();
        assert!(twenty_four.stud_count < sixteen.stud_count);
        assert_eq!(twenty_four.stud_count, 7);
    }

    #[test]
    fn openings_add_kings_jacks_and_headers() {
        let result = calculate_framing(
            &FramingInput::new(192.0).with_opening(36.0).with_opening(30.0),
        )
        .unwrap();
        assert_eq!(result.king_studs, 4);
        assert_eq!(result.jack_studs, 4);
        assert_eq!(result.headers_in, vec![39.0, 33.0]);
        assert_eq!(result.total_studs(), result.stud_count + 8);
    }

    #[test]
    fn rejects_zero_length_wall() {
        assert_eq!(
            calculate_framing(&FramingInput::new(0.0)).unwrap_err(),
            FramingError::NonPositiveLength(0.0)
        );
    }

    #[test]
    fn rejects_opening_wider_than_wall() {
        let result = calculate_framing(&FramingInput::new(48.0).with_opening(60.0));
        assert!(matches!(
            result,
            Err(FramingError::OpeningWiderThanWall { .. })
        ));
    }

    #[test]
    fn partial_bay_still_closes_the_run() {
        // 100" / 16" = 6.25 bays -> 7 studs plus the closer.
        let result = calculate_framing(&FramingInput::new(100.0)).unwrap();
        assert_eq!(result.stud_count, 7);
    }
}
