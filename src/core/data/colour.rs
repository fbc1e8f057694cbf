/// Opaque 8-bit RGB colour as stored in a `PixelBuffer`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Floating point RGBA colour with channels in `[0, 1]`, used for vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColourRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColourRgba {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Drops alpha and quantises each channel to 8 bits.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        Colour {
            r: quantise(self.r),
            g: quantise(self.g),
            b: quantise(self.b),
        }
    }
}

fn quantise(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
