//! Tests for glyph planning, canvas composition and render determinism

#[cfg(test)]
mod tests {
    use asciify::AsciifyError;
    use asciify::color::raster::{ColorSpace, Raster};
    use asciify::glyph::font::GlyphPainter;
    use asciify::glyph::ramp::GlyphRamp;
    use asciify::io::progress::ProgressReporter;
    use asciify::render::renderer::{RenderConfig, RenderedGlyph, TileRenderer};
    use ndarray::ArrayViewMut3;

    /// Fills the whole cell for visible glyphs, leaves it untouched for blanks
    struct BlockPainter {
        width: usize,
        height: usize,
    }

    impl GlyphPainter for BlockPainter {
        fn cell_size(&self) -> (usize, usize) {
            (self.width, self.height)
        }

        fn paint(
            &self,
            band: &mut ArrayViewMut3<'_, u8>,
            x: usize,
            y: usize,
            glyph: char,
            color: [u8; 3],
        ) {
            if glyph.is_whitespace() {
                return;
            }
            let (height, width, _) = band.dim();
            for py in y..(y + self.height).min(height) {
                for px in x..(x + self.width).min(width) {
                    for (c, value) in color.iter().enumerate() {
                        band[[py, px, c]] = *value;
                    }
                }
            }
        }
    }

    const fn blocks(size: usize) -> BlockPainter {
        BlockPainter {
            width: size,
            height: size,
        }
    }

    fn two_glyph_config() -> RenderConfig {
        RenderConfig {
            ramp: GlyphRamp::new(['#', ' ']).unwrap(),
            upper_bound: 255.0,
            ..RenderConfig::default()
        }
    }

    fn half_black_half_white() -> Raster {
        Raster::from_fn(16, 16, ColorSpace::Rgb, |_, x| {
            if x < 8 { [0, 0, 0] } else { [255, 255, 255] }
        })
    }

    fn gradient(width: usize, height: usize) -> Raster {
        Raster::from_fn(height, width, ColorSpace::Rgb, |y, x| {
            [(x * 7) as u8, (y * 5) as u8, ((x + y) * 3) as u8]
        })
    }

    // Tests dark cells pick the heavy glyph and light cells the blank one
    // Verified by swapping the ramp order
    #[test]
    fn test_half_black_half_white_plan() {
        let renderer = TileRenderer::new(two_glyph_config(), blocks(8)).unwrap();
        let plan = renderer.plan(&half_black_half_white()).unwrap();

        assert_eq!(plan.len(), 4);
        for glyph in &plan {
            if glyph.x < 8 {
                assert_eq!(glyph.glyph, '#');
                assert_eq!(glyph.color, [0, 0, 0]);
            } else {
                assert_eq!(glyph.glyph, ' ');
                assert_eq!(glyph.color, [255, 255, 255]);
            }
        }
    }

    // Tests the default bound of 360 keeps white in the middle of the ramp
    // Verified by using 255 as the default bound
    #[test]
    fn test_default_config_plan() {
        let renderer = TileRenderer::new(RenderConfig::default(), blocks(4)).unwrap();
        let white = Raster::solid(8, 8, ColorSpace::Rgb, [255, 255, 255]);

        let plan = renderer.plan(&white).unwrap();
        assert_eq!(plan.len(), 4);
        assert!(plan.iter().all(|glyph| glyph.glyph == '|'));
    }

    // Tests plan positions are cell corners in row-major order
    // Verified by emitting column-major order
    #[test]
    fn test_plan_positions() {
        let renderer = TileRenderer::new(RenderConfig::default(), blocks(4)).unwrap();
        let plan = renderer.plan(&gradient(13, 9)).unwrap();
        let positions: Vec<(usize, usize)> = plan.iter().map(|g| (g.x, g.y)).collect();

        assert_eq!(
            positions,
            vec![(0, 0), (4, 0), (8, 0), (0, 4), (4, 4), (8, 4)]
        );
    }

    // Tests oversized glyph cells fail instead of producing a blank image
    // Verified by returning an empty plan for zero cells
    #[test]
    fn test_oversized_cell_is_configuration_error() {
        let renderer = TileRenderer::new(RenderConfig::default(), blocks(32)).unwrap();
        let source = gradient(16, 40);

        assert!(matches!(
            renderer.plan(&source),
            Err(AsciifyError::Configuration { .. })
        ));
        assert!(matches!(
            renderer.render(&source),
            Err(AsciifyError::Configuration { .. })
        ));
    }

    // Tests invalid bounds are rejected at construction
    // Verified by skipping validation in new
    #[test]
    fn test_invalid_upper_bound_rejected() {
        for upper_bound in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RenderConfig {
                upper_bound,
                ..RenderConfig::default()
            };
            assert!(TileRenderer::new(config, blocks(4)).is_err());
        }
    }

    // Tests composition paints cells and leaves the remainder strip black
    // Verified by painting partial edge cells
    #[test]
    fn test_compose_canvas() {
        let source = Raster::solid(18, 20, ColorSpace::Rgb, [90, 90, 90]);
        let renderer = TileRenderer::new(RenderConfig::default(), blocks(8)).unwrap();
        let progress = ProgressReporter::hidden();

        let canvas = renderer.compose(&source, &progress).unwrap();

        assert_eq!((canvas.height(), canvas.width()), (18, 20));
        assert_eq!(canvas.space(), ColorSpace::Rgb);
        assert_eq!(canvas.pixel(0, 0), Some([90, 90, 90]));
        assert_eq!(canvas.pixel(15, 15), Some([90, 90, 90]));
        assert_eq!(canvas.pixel(0, 16), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(16, 0), Some([0, 0, 0]));
        assert_eq!(progress.completed(), 2);
    }

    // Tests a fixed glyph color overrides the sampled one
    // Verified by ignoring the uniform color
    #[test]
    fn test_uniform_color() {
        let config = RenderConfig {
            uniform_color: Some([255, 255, 255]),
            ..RenderConfig::default()
        };
        let renderer = TileRenderer::new(config, blocks(4)).unwrap();

        let plan = renderer.plan(&gradient(16, 16)).unwrap();
        assert!(plan.iter().all(|glyph| glyph.color == [255, 255, 255]));
    }

    // Tests source equalization spreads two gray levels over the ramp
    // Verified by equalizing after the RGB conversion
    #[test]
    fn test_pre_equalize() {
        let source = Raster::from_fn(8, 8, ColorSpace::Rgb, |_, x| {
            if x < 4 { [60, 60, 60] } else { [120, 120, 120] }
        });
        let ramp = GlyphRamp::new(['a', 'b', 'c', 'd']).unwrap();
        let plain = RenderConfig {
            ramp: ramp.clone(),
            upper_bound: 255.0,
            ..RenderConfig::default()
        };
        let equalized = RenderConfig {
            pre_equalize: true,
            ..plain.clone()
        };

        let plain_plan = TileRenderer::new(plain, blocks(4)).unwrap().plan(&source).unwrap();
        let equalized_plan = TileRenderer::new(equalized, blocks(4))
            .unwrap()
            .plan(&source)
            .unwrap();

        let glyphs = |plan: &[RenderedGlyph]| plan.iter().map(|g| g.glyph).collect::<String>();
        assert_eq!(glyphs(&plain_plan), "aaaa");
        assert_eq!(glyphs(&equalized_plan), "acac");
        assert_eq!(equalized_plan[0].color, [0, 0, 0]);
        assert_eq!(equalized_plan[1].color, [255, 255, 255]);
    }

    // Tests repeated renders are identical
    // Verified by seeding colors from thread index
    #[test]
    fn test_render_is_deterministic() {
        let source = gradient(37, 29);
        let renderer = TileRenderer::new(RenderConfig::default(), blocks(3)).unwrap();

        let first = renderer.render(&source).unwrap();
        let second = renderer.render(&source).unwrap();

        assert_eq!(first, second);
        assert_eq!((first.height(), first.width()), (29, 37));
    }
}
