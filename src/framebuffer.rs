/// display resolution in pixels
pub const CHIP8_WIDTH: usize = 64;
pub const CHIP8_HEIGHT: usize = 32;

/// Monochrome 64x32 pixel grid. Sprites land on it by XOR composition only,
/// so drawing the same sprite twice at the same spot erases it; a pixel
/// going from set to clear during a blit is reported as a collision and ends
/// up in VF. Coordinates wrap on both axes independently - programs may
/// legitimately address past the nominal edge.
pub struct Chip8Framebuffer {
    pixels: [bool; CHIP8_WIDTH * CHIP8_HEIGHT],
}

impl Chip8Framebuffer {
    pub fn new() -> Self {
        Chip8Framebuffer {
            pixels: [false; CHIP8_WIDTH * CHIP8_HEIGHT],
        }
    }

    /// set every pixel false
    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// read a pixel, wrapping both coordinates
    pub fn test(&self, x: usize, y: usize) -> bool {
        self.pixels[Self::index(x, y)]
    }

    /// write a pixel, wrapping both coordinates
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.pixels[Self::index(x, y)] = on;
    }

    /// XOR-blit a sprite with its top-left corner at (x, y), one byte per
    /// row, MSB leftmost. Returns true if any pixel flipped from set to
    /// clear anywhere in the blit.
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            for bit in 0..8 {
                if byte & (0x80 >> bit) == 0 {
                    continue;
                }
                let px = Self::index(x + bit, y + row);
                collision |= self.pixels[px];
                self.pixels[px] ^= true;
            }
        }
        collision
    }

    fn index(x: usize, y: usize) -> usize {
        // wrap, don't clamp
        (y % CHIP8_HEIGHT) * CHIP8_WIDTH + (x % CHIP8_WIDTH)
    }
}

impl Default for Chip8Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
